extern crate serde;

use std::{slice::Iter, sync::Arc};

use hashbrown::HashSet;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{document::DocumentId, util::Counter};

/// Documents and sentences associated with one lemma.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HashtagEntry {
    /// Unique, in order of first association.
    docs: Vec<DocumentId>,

    /// Raw sentence text, in order of first occurrence.
    sents: Vec<Arc<str>>,

    /// Surviving tokens of this lemma.
    #[serde(skip)]
    occurrences: Counter<usize>,

    #[serde(skip)]
    last_sentence: Option<(DocumentId, usize)>,

    /// Membership index over `docs`.
    #[serde(skip)]
    seen: HashSet<DocumentId>,
}

impl HashtagEntry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one surviving token of sentence `index` of `document`.
    ///
    /// The sentence is appended unless the previous token recorded for this
    /// lemma came from the same sentence.
    pub fn record(&mut self, document: &DocumentId, index: usize, text: &Arc<str>) {
        if self.docs.last() != Some(document) && !self.seen.contains(document) {
            self.seen.insert(document.clone());
            self.docs.push(document.clone());
        }

        let same_sentence = self
            .last_sentence
            .as_ref()
            .is_some_and(|(last, last_index)| last == document && *last_index == index);

        if !same_sentence {
            self.sents.push(Arc::clone(text));
            self.last_sentence = Some((document.clone(), index));
        }

        self.occurrences.increment();
    }

    #[inline]
    pub fn docs(&self) -> &[DocumentId] {
        &self.docs
    }

    #[inline]
    pub fn sents(&self) -> &[Arc<str>] {
        &self.sents
    }

    /// Number of distinct documents.
    #[inline]
    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    #[inline]
    pub fn sentence_count(&self) -> usize {
        self.sents.len()
    }

    #[inline]
    pub fn occurrences(&self) -> usize {
        self.occurrences.get()
    }
}

/// Ranked hashtags. Serializes as a map whose keys keep the ranking order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hashtags(Vec<(String, HashtagEntry)>);

impl Hashtags {
    #[inline]
    pub fn new(entries: Vec<(String, HashtagEntry)>) -> Self {
        Self(entries)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, (String, HashtagEntry)> {
        self.0.iter()
    }

    pub fn get(&self, lemma: &str) -> Option<&HashtagEntry> {
        self.0
            .iter()
            .find(|(key, _)| key == lemma)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.get(lemma).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    #[inline]
    pub fn into_inner(self) -> Vec<(String, HashtagEntry)> {
        self.0
    }
}

impl Serialize for Hashtags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (lemma, entry) in &self.0 {
            map.serialize_entry(lemma, entry)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a Hashtags {
    type Item = &'a (String, HashtagEntry);
    type IntoIter = Iter<'a, (String, HashtagEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
