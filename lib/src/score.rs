use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use crate::{core::HashtagEntry, error::ConfigError};

pub trait Score: Debug + Send + Sync {
    fn score(&self, entry: &HashtagEntry) -> usize;
}

/// What is counted when ranking a lemma.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Distinct documents.
    #[default]
    Documents,

    /// Recorded sentences.
    Sentences,

    /// Surviving tokens.
    Occurrences,
}

impl Score for Frequency {
    #[inline]
    fn score(&self, entry: &HashtagEntry) -> usize {
        match self {
            Frequency::Documents => entry.document_count(),
            Frequency::Sentences => entry.sentence_count(),
            Frequency::Occurrences => entry.occurrences(),
        }
    }
}

impl FromStr for Frequency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "documents" | "docs" => Ok(Frequency::Documents),
            "sentences" | "sents" => Ok(Frequency::Sentences),
            "occurrences" | "counts" => Ok(Frequency::Occurrences),
            _ => Err(ConfigError::Frequency(s.to_string())),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Frequency::Documents => "documents",
            Frequency::Sentences => "sentences",
            Frequency::Occurrences => "occurrences",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct Scorer<S: Score> {
    inner: S,
}

impl<S: Score> Scorer<S> {
    pub fn new(strategy: S) -> Self {
        Self { inner: strategy }
    }

    #[inline]
    pub fn score(&self, entry: &HashtagEntry) -> usize {
        self.inner.score(entry)
    }

    /// Pairs every entry with its score.
    pub fn from_entries<I>(&self, entries: I) -> Vec<(usize, String, HashtagEntry)>
    where
        I: IntoIterator<Item = (String, HashtagEntry)>,
    {
        entries
            .into_iter()
            .map(|(lemma, entry)| (self.inner.score(&entry), lemma, entry))
            .collect()
    }
}

impl Default for Scorer<Frequency> {
    fn default() -> Self {
        Self::new(Frequency::default())
    }
}
