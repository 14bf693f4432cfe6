use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle_processor::SkeletonEntry;

// @module: Reconstruction of a subtitle file from skeleton and content

// @const: A sentence terminator and the whitespace after it
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[。！？.]\s*").unwrap()
});

/// Split `text` after every sentence terminator, swallowing the whitespace
/// that follows it.
///
/// `.` always ends a sentence, so abbreviations and decimal numbers are cut
/// too. Empty pieces are not returned.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for found in SENTENCE_END.find_iter(text) {
        let terminator_len = found.as_str().chars().next().map_or(0, char::len_utf8);
        let end = found.start() + terminator_len;
        if end > start {
            sentences.push(&text[start..end]);
        }
        start = found.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Rebuild subtitle text by pairing skeleton entries with the sentences of
/// `content`, position by position.
///
/// Pairing stops at the shorter of the two sequences. Blank or incomplete
/// skeleton entries are skipped but still consume their sentence. Surplus
/// entries or sentences are dropped.
pub fn reattach(skeleton: &str, content: &str) -> String {
    let skeleton = skeleton.replace("\r\n", "\n");
    let raw_entries: Vec<&str> = skeleton.split("\n\n").collect();
    let sentences = split_sentences(content.trim());

    let entry_count = raw_entries.iter().filter(|raw| !raw.trim().is_empty()).count();
    if entry_count != sentences.len() {
        warn!(
            "Skeleton has {} entries but content has {} sentences, extra items are dropped",
            entry_count,
            sentences.len()
        );
    }

    let mut output = String::new();
    for (index, (raw, sentence)) in raw_entries.iter().zip(sentences.iter()).enumerate() {
        match SkeletonEntry::parse(raw) {
            Some(entry) => {
                output.push_str(&entry.sequence);
                output.push('\n');
                output.push_str(&entry.timestamp);
                output.push('\n');
                output.push_str(sentence.trim());
                output.push_str("\n\n");
            }
            None if raw.trim().is_empty() => {}
            None => debug!("Skipping skeleton entry {}: missing timestamp line", index + 1),
        }
    }

    output
}
