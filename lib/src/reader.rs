use std::future::Future;

use crate::document::DocumentId;

/// Source of the documents of a run.
pub trait CorpusReader {
    type Error;

    /// Every document exactly once. The [`Corpus`] fixes the order.
    fn read(&mut self) -> impl Future<Output = Result<Corpus, Self::Error>> + Send;
}

/// Undecoded document as handed over by a corpus loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDocument {
    pub id: DocumentId,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new<I: Into<DocumentId>, B: Into<Vec<u8>>>(id: I, bytes: B) -> Self {
        Self {
            id: id.into(),
            bytes: bytes.into(),
        }
    }
}

/// Documents of one run, ordered by identifier.
///
/// Loaders may discover files in any order, the corpus is the single place
/// where the processing order is fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<RawDocument>,
}

impl Corpus {
    pub fn new(mut documents: Vec<RawDocument>) -> Self {
        documents.sort_by(|left, right| left.id.cmp(&right.id));
        Self { documents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RawDocument> {
        self.documents.iter()
    }

    #[inline]
    pub fn into_documents(self) -> Vec<RawDocument> {
        self.documents
    }
}

impl FromIterator<RawDocument> for Corpus {
    fn from_iter<I: IntoIterator<Item = RawDocument>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::reader::{Corpus, RawDocument};

    #[test]
    fn test_corpus_orders_by_identifier() {
        let corpus = Corpus::new(vec![
            RawDocument::new("doc2", "b"),
            RawDocument::new("doc10", "c"),
            RawDocument::new("doc1", "a"),
        ]);

        let ids = corpus.iter().map(|doc| doc.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["doc1", "doc10", "doc2"]);
    }
}
