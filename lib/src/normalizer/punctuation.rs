use crate::{normalizer::TextNormalizer, token::Tokens};

const POSSESSIVE: [&str; 2] = ["'s", "’s"];

/// Strips a trailing possessive, then every character that is not a word
/// character (letters, digits, underscore).
#[derive(Clone, Debug, Default)]
pub struct Punctuation;

impl Punctuation {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `car's` is `car`, contractions such as `it's` are resolved by the
/// stopword list before this runs.
pub fn strip_possessive(word: &str) -> (&str, bool) {
    POSSESSIVE
        .iter()
        .find_map(|suffix| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| (stem, true))
        })
        .unwrap_or((word, false))
}

impl TextNormalizer for Punctuation {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.for_each_mut(|token| {
            let (stem, possessive) = strip_possessive(token.as_str());
            if possessive {
                let stem = stem.to_string();
                *token.inner_mut() = stem;
            }

            token
                .inner_mut()
                .retain(|ch| ch.is_alphanumeric() || ch == '_');
        });
    }
}
