pub mod case;
pub mod lemmatize;
pub mod punctuation;
pub mod stopwords;

pub use {
    case::Lowercase,
    lemmatize::{Lemmatize, Lemmatizer},
    punctuation::Punctuation,
    stopwords::Stopwords,
};

use crate::token::Tokens;

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

/// Normalizers applied in insertion order.
#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Lowercase, drop stopwords, then strip punctuation from what is left.
    pub fn standard(stopwords: Stopwords) -> Self {
        let mut pipeline = Self::new();
        pipeline
            .insert(Box::new(Lowercase::new()))
            .insert(Box::new(stopwords))
            .insert(Box::new(Punctuation::new()));
        pipeline
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
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

    pub fn run(&mut self, tokens: &mut Tokens) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        normalizer::{Lowercase, NormalizerPipeline, Punctuation, Stopwords},
        tokens,
    };

    #[test]
    pub fn test_normalizer_pipeline() {
        let mut tokens = tokens!["The", "Cat", "in", "the", "hat", "and", "bat"];

        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(Lowercase::new()));
        pipeline.insert(Box::new(Stopwords::new(["the", "and", "in"])));
        pipeline.run(&mut tokens);

        assert_eq!(tokens.texts(), vec!["cat", "hat", "bat"]);
    }

    #[test]
    fn test_normalizer_standard_pipeline() {
        let mut tokens = tokens!["She", "don't", "Car's", "ROUTE", "it's"];

        let mut pipeline = NormalizerPipeline::standard(Stopwords::builtin());
        pipeline.run(&mut tokens);

        assert_eq!(tokens.texts(), vec!["car", "route"]);
    }

    #[test]
    fn test_normalizer_pipeline_keeps_positions() {
        let mut tokens = tokens!["the", "cat", "sat"];

        let mut pipeline = NormalizerPipeline::standard(Stopwords::builtin());
        pipeline.run(&mut tokens);

        let positions = tokens.iter().map(|token| token.position()).collect::<Vec<_>>();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_normalizer_pipeline_clone() {
        let pipeline = NormalizerPipeline::standard(Stopwords::builtin());
        let mut cloned = pipeline.clone();
        assert_eq!(cloned.len(), pipeline.len());

        let mut tokens = tokens!["Penguins", "and", "cars"];
        cloned.run(&mut tokens);
        assert_eq!(tokens.texts(), vec!["penguins", "cars"]);
        assert!(NormalizerPipeline::new().is_empty());
    }
}
