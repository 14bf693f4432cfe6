/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use srt_processor::file_utils::FileManager;
use crate::common;

/// Test that derive_output_path inserts the suffix before the extension
#[test]
fn test_derive_output_path_withSrtInput_shouldInsertSuffix() {
    let output = FileManager::derive_output_path("/tmp/subs/movie.srt", "_period_added", "srt");
    assert_eq!(output, Path::new("/tmp/subs/movie_period_added.srt"));

    let output = FileManager::derive_output_path("/tmp/subs/movie.srt", "_content", ".txt");
    assert_eq!(output, Path::new("/tmp/subs/movie_content.txt"));
}

/// Only the last extension is replaced; earlier dots belong to the stem
#[test]
fn test_derive_output_path_withDottedStem_shouldKeepStem() {
    let output = FileManager::derive_output_path("movie.en.srt", "_timestamps", "srt");
    assert_eq!(output, Path::new("movie.en_timestamps.srt"));
}

#[test]
fn test_has_stem_suffix_withGeneratedName_shouldMatch() {
    let suffixes = ["_period_added", "_timestamps", "_content"];
    assert!(FileManager::has_stem_suffix("a/movie_timestamps.srt", &suffixes));
    assert!(!FileManager::has_stem_suffix("a/movie.srt", &suffixes));
}

/// Test that find_files walks subdirectories and filters by extension
#[test]
fn test_find_files_withNestedDirs_shouldReturnOnlyMatchingExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("season1");
    std::fs::create_dir_all(&nested)?;

    common::create_test_file(temp_dir.path(), "a.srt", "")?;
    common::create_test_file(&nested, "b.SRT", "")?;
    common::create_test_file(&nested, "notes.txt", "")?;

    let files = FileManager::find_files(temp_dir.path(), "srt")?;
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap().eq_ignore_ascii_case("srt")));

    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("deep").join("file.srt");

    FileManager::write_to_file(&target, "content")?;
    assert_eq!(FileManager::read_to_string(&target)?, "content");

    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldNameThePath() {
    let error = FileManager::read_to_string("definitely_missing_12345.srt").unwrap_err();
    assert!(error.to_string().contains("definitely_missing_12345.srt"));
}
