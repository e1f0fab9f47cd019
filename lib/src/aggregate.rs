use std::{fmt::Debug, sync::Arc};

use hashbrown::{hash_map::Iter, HashMap};

use crate::{core::HashtagEntry, document::DocumentId};

/// One surviving token as produced by a worker: its lemma and the sentence
/// it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub lemma: String,
    pub sentence: usize,
    pub text: Arc<str>,
}

impl Contribution {
    pub fn new<S: Into<String>>(lemma: S, sentence: usize, text: Arc<str>) -> Self {
        Self {
            lemma: lemma.into(),
            sentence,
            text,
        }
    }
}

pub trait Aggregate: Debug {
    type Iter<'a>: Iterator<Item = (&'a String, &'a HashtagEntry)>
    where
        Self: 'a;

    fn insert(&mut self, lemma: &str, document: &DocumentId, sentence: usize, text: &Arc<str>);
    fn get(&self, lemma: &str) -> Option<&HashtagEntry>;
    fn len(&self) -> usize;
    fn iter(&self) -> Self::Iter<'_>;

    /// Entries in no particular order.
    fn into_entries(self) -> Vec<(String, HashtagEntry)>;
}

/// Owns the corpus-wide aggregate. Documents must be folded in in their
/// stable order for the output to be deterministic.
#[derive(Debug)]
pub struct Aggregator<A: Aggregate> {
    inner: A,
    documents: usize,
}

impl<A: Aggregate> Aggregator<A> {
    pub fn new(strategy: A) -> Self {
        Self {
            inner: strategy,
            documents: 0,
        }
    }

    /// Folds the contributions of one document, in token order.
    pub fn extend<I>(&mut self, document: &DocumentId, contributions: I)
    where
        I: IntoIterator<Item = Contribution>,
    {
        contributions.into_iter().for_each(|contribution| {
            self.inner.insert(
                &contribution.lemma,
                document,
                contribution.sentence,
                &contribution.text,
            )
        });
        self.documents += 1;
    }

    #[inline]
    pub fn get(&self, lemma: &str) -> Option<&HashtagEntry> {
        self.inner.get(lemma)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Documents folded in so far.
    #[inline]
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn iter(&self) -> <A as Aggregate>::Iter<'_> {
        self.inner.iter()
    }

    pub fn into_entries(self) -> Vec<(String, HashtagEntry)> {
        self.inner.into_entries()
    }
}

#[derive(Debug, Default)]
pub struct HashAggregator {
    inner: HashMap<String, HashtagEntry>,
}

impl HashAggregator {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }
}

impl Aggregate for HashAggregator {
    type Iter<'a> = Iter<'a, String, HashtagEntry>;

    fn insert(&mut self, lemma: &str, document: &DocumentId, sentence: usize, text: &Arc<str>) {
        self.inner
            .entry_ref(lemma)
            .or_default()
            .record(document, sentence, text);
    }

    fn get(&self, lemma: &str) -> Option<&HashtagEntry> {
        self.inner.get(lemma)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    fn into_entries(self) -> Vec<(String, HashtagEntry)> {
        self.inner.into_iter().collect()
    }
}
