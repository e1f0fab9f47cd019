use crate::{normalizer::TextNormalizer, token::Tokens};

/// Unicode lowercasing of every token.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.for_each_mut(|token| {
            if token.chars().any(char::is_uppercase) {
                *token.inner_mut() = token.to_lowercase();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Lowercase;
    use crate::{
        normalizer::TextNormalizer,
        tagger::Pos,
        token::{Token, Tokens},
        tokens,
    };

    #[test]
    fn test_normalizer_lowercase() {
        let mut tokens = tokens!["The", "TokeniZED", "String"];
        let mut normalizer = Lowercase::new();
        normalizer.normalize(&mut tokens);
        assert_eq!(tokens, tokens!["the", "tokenized", "string"])
    }

    #[test]
    fn test_normalizer_lowercase_keeps_tags() {
        let mut tokens = Tokens::from(vec![Token::new("Paris", 4).with_pos(Pos::ProperNoun)]);
        Lowercase::new().normalize(&mut tokens);

        let token = tokens.iter().next().unwrap();
        assert_eq!(token.as_str(), "paris");
        assert_eq!(token.position(), 4);
        assert_eq!(token.pos(), Pos::ProperNoun);
    }

    #[test]
    fn test_normalizer_lowercase_unicode() {
        let mut tokens = tokens!["ÉCOLE", "Naïve"];
        let mut normalizer = Lowercase::new();
        normalizer.normalize(&mut tokens);
        assert_eq!(tokens, tokens!["école", "naïve"])
    }
}
