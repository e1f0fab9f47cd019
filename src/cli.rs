extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Parser};
use hashgen::{
    config::{DEFAULT_EXTENSION, DEFAULT_OUTPUT},
    error::ConfigError,
    Config, ErrorPolicy, Frequency,
};
use log::LevelFilter;

/// Generates hashtags from the most frequent content words of a directory of
/// text documents.
#[derive(Debug, Parser)]
#[command(name = "hashgen", version)]
pub struct Cli {
    /// Directory with one text file per document.
    #[arg(env = "HASHGEN_INPUT")]
    pub input: PathBuf,

    /// Extension of the files to read.
    #[arg(long, short = 'e', default_value = DEFAULT_EXTENSION, env = "HASHGEN_EXTENSION")]
    pub extension: String,

    /// File with additional stopwords, one per line.
    #[arg(long, short = 's', env = "HASHGEN_STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    /// Additional stopword, may be repeated.
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopword: Vec<String>,

    /// Drop hashtags whose frequency is below this.
    #[arg(long, short = 'm', env = "HASHGEN_MIN_COUNT")]
    pub min_count: Option<usize>,

    /// Keep at most this many hashtags.
    #[arg(long = "top", short = 'n', env = "HASHGEN_TOP")]
    pub top: Option<usize>,

    /// Keep this percentage of the ranked hashtags.
    #[arg(long, env = "HASHGEN_TOP_PERCENT")]
    pub top_percent: Option<u8>,

    /// What is counted when ranking: documents, sentences or occurrences.
    #[arg(long, short = 'f', default_value_t = Frequency::Documents, env = "HASHGEN_FREQUENCY")]
    pub frequency: Frequency,

    /// Abort on the first document that cannot be decoded.
    #[arg(long, env = "HASHGEN_FAIL_FAST")]
    pub fail_fast: bool,

    /// Worker threads, defaults to the available parallelism.
    #[arg(long, short = 'w', env = "HASHGEN_WORKERS")]
    pub workers: Option<NonZeroUsize>,

    /// Output JSON file.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT, env = "HASHGEN_OUTPUT")]
    pub output: PathBuf,

    /// More output, may be repeated.
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Validated run settings; `extra` holds words read from the stopwords file.
    pub fn config(&self, extra: Vec<String>) -> Result<Config, ConfigError> {
        let mut builder = Config::builder()
            .stopwords(self.stopword.iter().cloned())
            .stopwords(extra)
            .frequency(self.frequency)
            .extension(self.extension.as_str())
            .output_path(self.output.clone());

        if self.fail_fast {
            builder = builder.policy(ErrorPolicy::FailFast);
        }
        if let Some(min_count) = self.min_count {
            builder = builder.min_count(min_count);
        }
        if let Some(top) = self.top {
            builder = builder.top_n(top);
        }
        if let Some(top_percent) = self.top_percent {
            builder = builder.top_percent(top_percent);
        }
        if let Some(workers) = self.workers {
            builder = builder.workers(workers);
        }

        builder.build()
    }
}
