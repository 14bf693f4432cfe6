/*!
 * Pure text transforms over SubRip content.
 *
 * Each transform takes the full file content as a string and returns the
 * content of the file(s) to write. Reading, writing and error reporting are
 * left to `app_controller`, so everything here can be exercised without
 * touching the filesystem.
 *
 * - `punctuator`: append a sentence-final mark to caption lines
 * - `splitter`: separate a subtitle file into a timestamp skeleton and a
 *   flattened text body
 * - `reattacher`: pair a skeleton with re-segmented sentences
 */

pub mod punctuator;
pub mod reattacher;
pub mod splitter;

pub use punctuator::{CaptionState, punctuate, punctuate_line};
pub use reattacher::{reattach, split_sentences};
pub use splitter::split;
