use unicode_segmentation::UnicodeSegmentation;

use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Word tokenizer on Unicode word boundaries (UAX #29).
///
/// Contractions and numbers stay atomic, punctuation and whitespace never
/// become tokens.
#[derive(Clone, Debug, Default)]
pub struct Standard;

impl Standard {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Standard {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        text.as_ref()
            .unicode_words()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect()
    }
}
