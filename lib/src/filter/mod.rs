use std::{fmt::Debug, sync::Arc};

use crate::{
    tagger::Pos,
    token::{Token, Tokens},
};

/// Word/tag pairs that are never hashtags.
const BAD_HOMOGRAPHS: [(&str, Pos); 1] = [("us", Pos::Pronoun)];

pub trait TextFilter: Debug + Send + Sync {
    /// Whether `token` may become a hashtag.
    fn keep(&self, token: &Token) -> bool;

    fn filter(&self, tokens: &mut Tokens) {
        tokens.retain_mut(|token| self.keep(token));
    }
}

/// Keeps nouns, proper nouns and verbs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Candidate;

impl TextFilter for Candidate {
    #[inline]
    fn keep(&self, token: &Token) -> bool {
        token.pos().is_candidate()
    }
}

/// Drops tokens made only of digits, and tokens left empty by normalization.
#[derive(Clone, Copy, Debug, Default)]
pub struct Numeric;

impl TextFilter for Numeric {
    fn keep(&self, token: &Token) -> bool {
        token.chars().any(|ch| !ch.is_numeric())
    }
}

/// Drops blacklisted (word, tag) combinations such as the pronoun `us`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Homograph;

impl TextFilter for Homograph {
    fn keep(&self, token: &Token) -> bool {
        !BAD_HOMOGRAPHS
            .iter()
            .any(|(word, pos)| token.pos() == *pos && token.as_str() == *word)
    }
}

/// Filters applied in insertion order.
#[derive(Clone, Debug, Default)]
pub struct FilterPipeline(Vec<Arc<dyn TextFilter>>);

impl FilterPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Homographs, part of speech, then digit-only tokens.
    ///
    /// With [`Candidate`] in place [`Homograph`] only guards pairs whose tag is
    /// a candidate; it is kept for pipelines built without [`Candidate`].
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline
            .insert(Arc::new(Homograph))
            .insert(Arc::new(Candidate))
            .insert(Arc::new(Numeric));
        pipeline
    }

    pub fn insert(&mut self, filter: Arc<dyn TextFilter>) -> &mut Self {
        self.0.push(filter);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keep(&self, token: &Token) -> bool {
        self.0.iter().all(|filter| filter.keep(token))
    }

    pub fn run(&self, tokens: &mut Tokens) {
        tokens.retain_mut(|token| self.keep(token));
    }
}
