use std::{
    fmt::{Display, Formatter},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{error::ConfigError, rank::Selection, score::Frequency};

pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_OUTPUT: &str = "out.json";

/// What happens when a document cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the document, leave it out and keep going.
    #[default]
    SkipAndContinue,

    /// Abort the run with the first error in document order.
    FailFast,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "skip-and-continue" => Ok(ErrorPolicy::SkipAndContinue),
            "fail-fast" | "failfast" => Ok(ErrorPolicy::FailFast),
            _ => Err(ConfigError::Policy(s.to_string())),
        }
    }
}

impl Display for ErrorPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::SkipAndContinue => f.write_str("skip"),
            ErrorPolicy::FailFast => f.write_str("fail-fast"),
        }
    }
}

/// Settings of one run. Immutable, built with [`ConfigBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    extra_stopwords: Vec<String>,
    selection: Selection,
    frequency: Frequency,
    policy: ErrorPolicy,
    workers: NonZeroUsize,
    extension: String,
    output_path: PathBuf,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Added to the built-in stopword list.
    #[inline]
    pub fn extra_stopwords(&self) -> &[String] {
        &self.extra_stopwords
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[inline]
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    #[inline]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// File extension of input documents, without the dot.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            selection: Selection::default(),
            frequency: Frequency::default(),
            policy: ErrorPolicy::default(),
            workers: default_workers(),
            extension: DEFAULT_EXTENSION.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    extra_stopwords: Vec<String>,
    min_count: Option<usize>,
    top_n: Option<usize>,
    top_percent: Option<u8>,
    frequency: Frequency,
    policy: ErrorPolicy,
    workers: Option<NonZeroUsize>,
    extension: Option<String>,
    output_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopword<S: Into<String>>(mut self, word: S) -> Self {
        self.extra_stopwords.push(word.into());
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn min_count(mut self, min_count: usize) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn top_percent(mut self, top_percent: u8) -> Self {
        self.top_percent = Some(top_percent);
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let top_n = match self.top_n {
            Some(top_n) => Some(NonZeroUsize::new(top_n).ok_or_else(|| {
                ConfigError::Selection("top must be greater than zero".to_string())
            })?),
            None => None,
        };

        let selection = Selection {
            min_count: self.min_count,
            top_n,
            top_percent: self.top_percent,
        };
        selection.validate()?;

        let extension = match self.extension {
            Some(extension) => {
                let extension = extension.trim().trim_start_matches('.').to_string();
                if extension.is_empty() {
                    return Err(ConfigError::Extension(
                        "extension must not be empty".to_string(),
                    ));
                }
                extension
            }
            None => DEFAULT_EXTENSION.to_string(),
        };

        let extra_stopwords = self
            .extra_stopwords
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        Ok(Config {
            extra_stopwords,
            selection,
            frequency: self.frequency,
            policy: self.policy,
            workers: self.workers.unwrap_or_else(default_workers),
            extension,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, path::Path};

    use crate::{
        config::{Config, ErrorPolicy},
        error::ConfigError,
        score::Frequency,
    };

    #[test]
    fn test_config_defaults() {
        let config = Config::builder().build().unwrap();

        assert!(config.extra_stopwords().is_empty());
        assert_eq!(config.selection().min_count, None);
        assert_eq!(config.selection().top_n, None);
        assert_eq!(config.frequency(), Frequency::Documents);
        assert_eq!(config.policy(), ErrorPolicy::SkipAndContinue);
        assert_eq!(config.extension(), "txt");
        assert_eq!(config.output_path(), Path::new("out.json"));
        assert_eq!(config, Config {
            workers: config.workers(),
            ..Config::default()
        });
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .stopword(" car ")
            .stopwords(["", "road"])
            .min_count(2)
            .top_n(10)
            .top_percent(50)
            .frequency(Frequency::Occurrences)
            .policy(ErrorPolicy::FailFast)
            .workers(NonZeroUsize::new(3).unwrap())
            .extension(".md")
            .output_path("tags.json")
            .build()
            .unwrap();

        assert_eq!(config.extra_stopwords(), &["car", "road"]);
        assert_eq!(config.selection().min_count, Some(2));
        assert_eq!(config.selection().top_n, NonZeroUsize::new(10));
        assert_eq!(config.selection().top_percent, Some(50));
        assert_eq!(config.workers().get(), 3);
        assert_eq!(config.extension(), "md");
        assert_eq!(config.output_path(), Path::new("tags.json"));
    }

    #[test]
    fn test_config_rejects_invalid_selection() {
        assert!(matches!(
            Config::builder().top_n(0).build(),
            Err(ConfigError::Selection(_))
        ));
        assert!(matches!(
            Config::builder().top_percent(0).build(),
            Err(ConfigError::Selection(_))
        ));
        assert!(matches!(
            Config::builder().top_percent(150).build(),
            Err(ConfigError::Selection(_))
        ));
        assert!(Config::builder().top_percent(100).build().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_extension() {
        assert!(matches!(
            Config::builder().extension(" . ").build(),
            Err(ConfigError::Extension(_))
        ));
    }

    #[test]
    fn test_error_policy_from_str() {
        assert_eq!("skip".parse::<ErrorPolicy>(), Ok(ErrorPolicy::SkipAndContinue));
        assert_eq!("fail-fast".parse::<ErrorPolicy>(), Ok(ErrorPolicy::FailFast));
        assert!("retry".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::FailFast.to_string(), "fail-fast");
    }
}
