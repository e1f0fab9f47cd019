use std::{
    fmt::{Display, Formatter},
    ops::Deref,
    sync::Arc,
};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    token::Tokens,
    tokenizer::Segmenter,
};

const BOM: char = '\u{feff}';

/// Source name of a document, cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(Arc<str>);

impl DocumentId {
    #[inline]
    pub fn new<S: AsRef<str>>(id: S) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl Deref for DocumentId {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sentence with its tokens.
///
/// Carries the identifier of its document and its index inside it instead of
/// a pointer to the parent.
#[derive(Debug)]
pub struct Sentence {
    document: DocumentId,
    index: usize,
    text: Arc<str>,
    tokens: Tokens,
}

impl Sentence {
    pub fn new<S: Into<Arc<str>>>(
        document: DocumentId,
        index: usize,
        text: S,
        tokens: Tokens,
    ) -> Self {
        Self {
            document,
            index,
            text: text.into(),
            tokens,
        }
    }

    #[inline]
    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    #[inline]
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    #[inline]
    pub fn into_tokens(self) -> (Arc<str>, Tokens) {
        (self.text, self.tokens)
    }
}

#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    sentences: Vec<Sentence>,
}

impl Document {
    /// Decodes raw bytes as UTF-8 and segments them.
    ///
    /// Invalid bytes fail the whole document, nothing is segmented from a
    /// partially decoded buffer.
    pub fn decode(id: DocumentId, bytes: &[u8], segmenter: &mut Segmenter) -> Result<Self> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Self::parse(id, text, segmenter)),
            Err(source) => Err(Error::Decode {
                document: id,
                source,
            }),
        }
    }

    pub fn parse(id: DocumentId, text: &str, segmenter: &mut Segmenter) -> Self {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let sentences = segmenter.segment(&id, text);
        Self { id, sentences }
    }

    #[inline]
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    #[inline]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    #[inline]
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}
