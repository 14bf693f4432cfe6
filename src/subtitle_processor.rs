use std::fmt;
use std::path::PathBuf;

// @module: SubRip line conventions shared by the transforms

// @const: Separator between start and end time on a timestamp line
pub const TIMESTAMP_ARROW: &str = "-->";

// @const: Default mark appended by the punctuator (full-width period)
pub const DEFAULT_SENTENCE_MARK: char = '。';

/// Role of a single line inside a subtitle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Time range line, e.g. `00:00:01,000 --> 00:00:02,000`
    Timestamp,
    /// Cue counter line
    SequenceNumber,
    /// Cue separator
    Blank,
    /// Anything else: caption text, or noise in malformed files
    Text,
}

impl LineKind {
    /// Classify a line as read from the file, terminator included.
    ///
    /// The checks run in a fixed order: a line holding `-->` is always a
    /// timestamp, even if it is also made of digits or whitespace.
    pub fn classify(line: &str) -> Self {
        if line.contains(TIMESTAMP_ARROW) {
            LineKind::Timestamp
        } else if is_sequence_number(line) {
            LineKind::SequenceNumber
        } else if line == "\n" || line == "\r\n" {
            LineKind::Blank
        } else {
            LineKind::Text
        }
    }
}

/// True when the trimmed line is a non-empty run of decimal digits.
pub fn is_sequence_number(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

// @struct: One sequence-number/timestamp pair from a skeleton file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonEntry {
    // @field: Sequence number line, verbatim
    pub sequence: String,

    // @field: Timestamp line, verbatim
    pub timestamp: String,
}

impl SkeletonEntry {
    pub fn new(sequence: impl Into<String>, timestamp: impl Into<String>) -> Self {
        SkeletonEntry {
            sequence: sequence.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Parse a raw skeleton chunk (the text between two blank-line separators).
    ///
    /// Returns `None` for blank chunks and for chunks that do not hold both a
    /// sequence line and a timestamp line. Lines past the second are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut lines = trimmed.lines();
        match (lines.next(), lines.next()) {
            (Some(sequence), Some(timestamp)) => Some(Self::new(sequence, timestamp)),
            _ => None,
        }
    }
}

impl fmt::Display for SkeletonEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.sequence)?;
        writeln!(f, "{}", self.timestamp)?;
        writeln!(f)
    }
}

/// Text produced by splitting a subtitle file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutput {
    /// Sequence/timestamp pairs, each followed by a blank line
    pub skeleton: String,

    /// All caption text flattened into one paragraph
    pub content: String,

    /// Number of cues that made it into the skeleton
    pub cue_count: usize,
}

/// Files written by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub timestamps: PathBuf,
    pub content: PathBuf,
}
