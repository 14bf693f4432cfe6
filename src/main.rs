// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use srt_processor::app_config::{self, Config};
use srt_processor::{Controller, Operation};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a sentence-final mark to every caption line
    #[command(alias = "add-period")]
    Punctuate {
        /// Subtitle file, or directory of subtitle files
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Separate subtitles into a timestamp file and a content file
    #[command(alias = "separate")]
    Split {
        /// Subtitle file, or directory of subtitle files
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Rebuild a subtitle file from a timestamp file and a content file
    Reattach {
        /// Timestamp file produced by `split`
        #[arg(value_name = "TIMESTAMPS")]
        timestamps: PathBuf,

        /// Content file, one sentence per original cue
        #[arg(value_name = "CONTENT")]
        content: PathBuf,

        /// Subtitle file to write
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Generate shell completions for srt-processor
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srt-processor - SubRip subtitle file processor
#[derive(Parser, Debug)]
#[command(name = "srt-processor")]
#[command(version)]
#[command(about = "Punctuate, split and reattach SubRip subtitle files")]
#[command(long_about = "srt-processor adds sentence-final marks to subtitles and separates them into
timestamps and text so the text can be edited or translated, then reattached.

EXAMPLES:
    srt-processor punctuate movie.srt                 # Writes movie_period_added.srt
    srt-processor split movie.srt                     # Writes movie_timestamps.srt and movie_content.txt
    srt-processor split /subtitles/                   # Splits every .srt file in a directory
    srt-processor reattach movie_timestamps.srt movie_content.txt movie_new.srt
    srt-processor completions bash > srt-processor.bash

CONFIGURATION:
    Settings are read from conf.json by default. You can specify a different
    file with --config. When the file does not exist, defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Symbol and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("✗", "1;31"),
            Level::Warn => ("!", "1;33"),
            Level::Info => ("✓", "1;32"),
            Level::Debug => ("·", "1;36"),
            Level::Trace => ("…", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (symbol, color) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, symbol, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config and CLI say otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "srt-processor", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(&cli.config_path)?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Punctuate { input_path } => run_on_path(&controller, Operation::Punctuate, &input_path),
        Commands::Split { input_path } => run_on_path(&controller, Operation::Split, &input_path),
        Commands::Reattach { timestamps, content, output } => {
            let output_path = controller.reattach(&timestamps, &content, &output)?;
            info!("Success: {:?}", output_path);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

// Dispatch a punctuate or split request on a file or a directory
fn run_on_path(controller: &Controller, operation: Operation, input_path: &Path) -> Result<()> {
    if input_path.is_dir() {
        let summary = controller.run_folder(operation, input_path)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} of {} file(s) failed", summary.failed, summary.failed + summary.processed));
        }
        return Ok(());
    }

    match operation {
        Operation::Punctuate => {
            let output_path = controller.add_period(input_path)?;
            info!("Success: {:?}", output_path);
        }
        Operation::Split => {
            let paths = controller.separate(input_path)?;
            info!("Success: {:?} and {:?}", paths.timestamps, paths.content);
        }
        Operation::Reattach => return Err(anyhow!("Reattachment needs three paths")),
    }

    Ok(())
}
