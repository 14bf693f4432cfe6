/*!
 * Integration tests for the punctuate, split and reattach workflow
 */

use anyhow::Result;
use std::fs;
use srt_processor::app_controller::Controller;
use crate::common;

/// Punctuate, split, reattach: timing lines survive and captions come back
#[test]
fn test_subtitle_workflow_withPunctuatedSentences_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "episode.srt")?;
    let controller = Controller::new()?;

    let punctuated = controller.add_period(&input)?;
    let paths = controller.separate(&punctuated)?;

    assert_eq!(
        fs::read_to_string(&paths.content)?,
        "This is a test subtitle。 It contains multiple entries。 For testing purposes。"
    );

    let output = temp_dir.path().join("episode_rebuilt.srt");
    controller.reattach(&paths.timestamps, &paths.content, &output)?;

    // The rebuilt file closes its last cue with a blank line
    let rebuilt = fs::read_to_string(&output)?;
    assert_eq!(rebuilt.trim_end(), fs::read_to_string(&punctuated)?.trim_end());

    Ok(())
}

/// Editing the content file (e.g. translating it) keeps the original timing
#[test]
fn test_subtitle_workflow_withTranslatedContent_shouldKeepTimestamps() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "episode.srt")?;
    let controller = Controller::new()?;

    let paths = controller.separate(&input)?;
    fs::write(&paths.content, "这是一个测试字幕。它包含多个条目。用于测试。")?;

    let output = temp_dir.path().join("episode.zh.srt");
    controller.reattach(&paths.timestamps, &paths.content, &output)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "1\n00:00:01,000 --> 00:00:04,000\n这是一个测试字幕。\n\n\
         2\n00:00:05,000 --> 00:00:09,000\n它包含多个条目。\n\n\
         3\n00:00:10,000 --> 00:00:14,000\n用于测试。\n\n"
    );

    Ok(())
}

/// Three skeleton entries, two sentences: only two cues are written
#[test]
fn test_subtitle_workflow_withFewerSentences_shouldTruncate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "episode.srt")?;
    let controller = Controller::new()?;

    let paths = controller.separate(&input)?;
    fs::write(&paths.content, "First sentence. Second sentence.")?;

    let output = temp_dir.path().join("short.srt");
    controller.reattach(&paths.timestamps, &paths.content, &output)?;

    let rebuilt = fs::read_to_string(&output)?;
    assert_eq!(rebuilt.matches("-->").count(), 2);
    assert!(rebuilt.starts_with("1\n00:00:01,000 --> 00:00:04,000\nFirst sentence.\n\n"));
    assert!(!rebuilt.contains("00:00:10,000"));

    Ok(())
}

/// Running the punctuator on its own output changes nothing
#[test]
fn test_add_period_appliedTwice_shouldBeIdempotent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "episode.srt")?;
    let controller = Controller::new()?;

    let first = controller.add_period(&input)?;
    let second = controller.add_period(&first)?;

    assert_eq!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);

    Ok(())
}

/// A lone cue without trailing blank line still yields one entry each side
#[test]
fn test_separate_withSingleCueNoTrailingNewline_shouldProduceOneEntry() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "single.srt",
        "1\n00:00:01,000 --> 00:00:02,000\nHello world",
    )?;

    let paths = Controller::new()?.separate(&input)?;

    assert_eq!(fs::read_to_string(&paths.timestamps)?, "1\n00:00:01,000 --> 00:00:02,000\n\n");
    assert_eq!(fs::read_to_string(&paths.content)?, "Hello world");

    Ok(())
}
