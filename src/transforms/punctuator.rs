use log::debug;

use crate::subtitle_processor::LineKind;

// @module: Sentence-final mark insertion for caption lines

/// Position of the scanner relative to the current cue.
///
/// Only `TimestampSeen` counts as caption text. A text line met in any other
/// state belongs to a malformed cue and leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionState {
    /// Start of file, or right after a sequence-number line
    #[default]
    SequenceExpected,
    /// After a timestamp line: following lines are caption text
    TimestampSeen,
    /// After a separator line
    Blank,
}

impl CaptionState {
    // @transition: State after consuming a line of the given kind
    pub fn next(self, kind: LineKind) -> Self {
        match kind {
            LineKind::Timestamp => CaptionState::TimestampSeen,
            LineKind::SequenceNumber => CaptionState::SequenceExpected,
            LineKind::Blank => CaptionState::Blank,
            LineKind::Text => self,
        }
    }

    pub fn in_caption(self) -> bool {
        self == CaptionState::TimestampSeen
    }
}

/// Append `mark` to every caption line of `content` that does not already end
/// with it.
///
/// Sequence-number, timestamp and separator lines are copied byte for byte.
/// Caption lines lose their trailing whitespace and keep their own line
/// ending; an unterminated last caption line takes the ending of the line
/// before it. Running the result through this function again changes nothing.
pub fn punctuate(content: &str, mark: char) -> String {
    let mut output = String::with_capacity(content.len() + content.len() / 8);
    let mut state = CaptionState::default();
    let mut last_ending = "\n";

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let kind = LineKind::classify(line);
        let ending = line_ending(line).unwrap_or(last_ending);

        match kind {
            LineKind::Text if state.in_caption() => {
                output.push_str(&punctuate_line(line, mark));
                output.push_str(ending);
            }
            LineKind::Text => {
                debug!("Line {} is outside caption text, copied unchanged", index + 1);
                output.push_str(line);
            }
            _ => output.push_str(line),
        }

        state = state.next(kind);
        last_ending = ending;
    }

    output
}

// @returns: Terminator of a line read with `split_inclusive('\n')`
fn line_ending(line: &str) -> Option<&'static str> {
    if line.ends_with("\r\n") {
        Some("\r\n")
    } else if line.ends_with('\n') {
        Some("\n")
    } else {
        None
    }
}

/// Trim the trailing whitespace of a single caption line and append `mark`
/// unless the line is empty or already ends with it.
pub fn punctuate_line(line: &str, mark: char) -> String {
    let text = line.trim_end();
    if text.is_empty() || text.ends_with(mark) {
        text.to_string()
    } else {
        format!("{}{}", text, mark)
    }
}
