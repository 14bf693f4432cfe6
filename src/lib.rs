/*!
 * # srt-processor - SubRip subtitle file processor
 *
 * A Rust library for three text transforms over `.srt` subtitle files.
 *
 * ## Features
 *
 * - Append a sentence-final mark (full-width period by default) to caption lines
 * - Separate a subtitle file into a timestamp skeleton and a flattened text body
 * - Reattach an edited or translated text body to its timestamp skeleton
 * - Batch processing of every `.srt` file in a directory
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transforms`: pure string-to-string transforms:
 *   - `transforms::punctuator`: caption punctuation
 *   - `transforms::splitter`: skeleton/content separation
 *   - `transforms::reattacher`: sentence segmentation and reattachment
 * - `subtitle_processor`: line classification and shared subtitle types
 * - `app_controller`: file-level operations built on the transforms
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod transforms;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FolderSummary};
pub use errors::{AppError, Operation};
pub use subtitle_processor::{SkeletonEntry, SplitOutput, SplitPaths};
