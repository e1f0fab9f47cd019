//! Lexical classification.
//!
//! A [`Classify`] implementation tags every token of a sentence with a coarse
//! part of speech, looking at the whole sentence for context. Only
//! [`Pos::is_candidate`] tags may become hashtags.

mod lexicon;
mod rule;

pub use rule::RuleTagger;

use std::fmt::Debug;

use crate::{error::ClassificationError, token::Token};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Modal,
    Particle,
    Numeral,
    Interjection,
    #[default]
    Other,
}

impl Pos {
    #[inline]
    pub fn is_noun(&self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun)
    }

    /// Nouns and verbs are the only hashtag candidates.
    #[inline]
    pub fn is_candidate(&self) -> bool {
        self.is_noun() || *self == Pos::Verb
    }
}

pub trait Classify: Debug + Send + Sync {
    /// One result per token, in token order.
    fn classify(&self, tokens: &[Token]) -> Vec<Result<Pos, ClassificationError>>;
}
