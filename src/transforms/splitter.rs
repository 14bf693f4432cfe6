use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle_processor::{SkeletonEntry, SplitOutput};

// @module: Separation of a subtitle file into skeleton and content

// @const: One or more blank lines between cues
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").unwrap()
});

/// Split subtitle `content` into a timestamp skeleton and a content paragraph.
///
/// Every block of at least two lines contributes its first line (sequence
/// number) and second line (timestamp) to the skeleton, and the rest of its
/// lines, joined by spaces, to the paragraph. Shorter blocks are dropped.
/// Line breaks inside a caption are not recoverable from the result.
pub fn split(content: &str) -> SplitOutput {
    let mut skeleton = String::new();
    let mut captions: Vec<String> = Vec::new();

    for (index, block) in BLOCK_SEPARATOR.split(content.trim()).enumerate() {
        let lines: Vec<&str> = block
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.len() < 2 {
            debug!("Skipping block {}: fewer than two lines", index + 1);
            continue;
        }

        skeleton.push_str(&SkeletonEntry::new(lines[0], lines[1]).to_string());
        captions.push(lines[2..].join(" ").trim().to_string());
    }

    SplitOutput {
        skeleton,
        cue_count: captions.len(),
        content: captions.join(" "),
    }
}
