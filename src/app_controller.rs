use anyhow::{Result, anyhow};
use log::{error, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{AppError, Operation};
use crate::file_utils::FileManager;
use crate::subtitle_processor::SplitPaths;
use crate::transforms;

// @module: Application controller for subtitle file operations

/// Outcome of a batch run over a directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    /// Files processed successfully
    pub processed: usize,
    /// Files whose operation failed
    pub failed: usize,
    /// Files skipped because they are outputs of an earlier run
    pub skipped: usize,
}

/// Main application controller: reads inputs, runs a transform, writes outputs.
///
/// Every public operation reports failure as `AppError::OperationFailed`.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Validated punctuation mark
    mark: char,
}

impl Controller {
    /// Create a controller with the default configuration
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        let mark = config
            .mark()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;

        Ok(Self { config, mark })
    }

    /// Append the sentence mark to every caption line of `input`.
    ///
    /// Writes `<stem><period_suffix>.srt` next to the input and returns its path.
    pub fn add_period<P: AsRef<Path>>(&self, input: P) -> Result<PathBuf, AppError> {
        self.try_add_period(input.as_ref())
            .map_err(|e| AppError::operation(Operation::Punctuate, e))
    }

    /// Separate `input` into a skeleton file and a content file, both written
    /// next to the input.
    pub fn separate<P: AsRef<Path>>(&self, input: P) -> Result<SplitPaths, AppError> {
        self.try_separate(input.as_ref())
            .map_err(|e| AppError::operation(Operation::Split, e))
    }

    /// Rebuild a subtitle file at `output` from a skeleton and a content file.
    pub fn reattach<P1, P2, P3>(&self, timestamps: P1, content: P2, output: P3) -> Result<PathBuf, AppError>
    where
        P1: AsRef<Path>,
        P2: AsRef<Path>,
        P3: AsRef<Path>,
    {
        self.try_reattach(timestamps.as_ref(), content.as_ref(), output.as_ref())
            .map_err(|e| AppError::operation(Operation::Reattach, e))
    }

    /// Apply a single-file operation to every `.srt` file below `dir`.
    ///
    /// Files this tool produced that cannot feed `operation` are skipped:
    /// skeletons always, punctuated files only when punctuating again. A
    /// failing file is logged and counted, and the batch moves on.
    pub fn run_folder<P: AsRef<Path>>(&self, operation: Operation, dir: P) -> Result<FolderSummary, AppError> {
        let dir = dir.as_ref();
        if operation == Operation::Reattach {
            return Err(AppError::operation(
                operation,
                anyhow!("Reattachment needs explicit skeleton, content and output paths"),
            ));
        }

        let files = FileManager::find_files(dir, "srt")
            .map_err(|e| AppError::operation(operation, e))?;

        info!("Found {} subtitle file(s) in {:?}", files.len(), dir);

        let suffixes = self.excluded_suffixes(operation);
        let mut summary = FolderSummary::default();

        for file in files {
            if FileManager::has_stem_suffix(&file, &suffixes) {
                debug!("Skipping generated file: {:?}", file);
                summary.skipped += 1;
                continue;
            }

            let result = match operation {
                Operation::Punctuate => self.add_period(&file).map(|_| ()),
                _ => self.separate(&file).map(|_| ()),
            };

            match result {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {}", file, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} processed, {} failed, {} skipped",
            summary.processed, summary.failed, summary.skipped
        );

        Ok(summary)
    }

    // @returns: Name suffixes of generated files that are never inputs to `operation`
    fn excluded_suffixes(&self, operation: Operation) -> Vec<&str> {
        match operation {
            Operation::Punctuate => vec![
                self.config.period_suffix.as_str(),
                self.config.timestamps_suffix.as_str(),
            ],
            _ => vec![self.config.timestamps_suffix.as_str()],
        }
    }

    fn try_add_period(&self, input: &Path) -> Result<PathBuf> {
        let content = FileManager::read_to_string(input)?;
        let output_path = FileManager::derive_output_path(input, &self.config.period_suffix, "srt");

        FileManager::write_to_file(&output_path, &transforms::punctuate(&content, self.mark))?;

        info!("Periods added: {:?}", output_path);
        Ok(output_path)
    }

    fn try_separate(&self, input: &Path) -> Result<SplitPaths> {
        let content = FileManager::read_to_string(input)?;
        let split = transforms::split(&content);

        let paths = SplitPaths {
            timestamps: FileManager::derive_output_path(input, &self.config.timestamps_suffix, "srt"),
            content: FileManager::derive_output_path(input, &self.config.content_suffix, "txt"),
        };

        FileManager::write_to_file(&paths.timestamps, &split.skeleton)?;
        FileManager::write_to_file(&paths.content, &split.content)?;

        info!(
            "Separated {} cue(s): {:?} and {:?}",
            split.cue_count, paths.timestamps, paths.content
        );
        Ok(paths)
    }

    fn try_reattach(&self, timestamps: &Path, content: &Path, output: &Path) -> Result<PathBuf> {
        let skeleton = FileManager::read_to_string(timestamps)?;
        let text = FileManager::read_to_string(content)?;

        FileManager::write_to_file(output, &transforms::reattach(&skeleton, &text))?;

        info!("Reattached: {:?}", output);
        Ok(output.to_path_buf())
    }
}
