use std::{
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

use crate::tagger::Pos;

/// A word of a sentence together with its position and part of speech.
///
/// Tokens only live while their sentence is processed, the aggregate keeps
/// lemmas and sentence text instead.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token {
    text: String,

    /// Index of the token inside its sentence.
    position: usize,

    /// Tag assigned by the classifier, [`Pos::Other`] until then.
    pos: Pos,
}

impl Token {
    #[inline]
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
            pos: Pos::default(),
        }
    }

    #[inline]
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = pos;
        self
    }

    pub fn inner(self) -> String {
        self.text
    }

    pub fn inner_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.text
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.text
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::new(value, 0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::new(value, 0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Ordered tokens of one sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, item: Token) {
        self.0.push(item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Token),
    {
        self.iter_mut().for_each(|item| {
            f(item);
        })
    }

    /// Visits tokens in order, exactly once each.
    #[inline]
    pub fn retain_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut Token) -> bool,
    {
        self.0.retain_mut(f)
    }

    /// Surface strings, mostly useful for assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.iter().map(Token::as_str).collect()
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds [`Tokens`] with positions assigned in order.
#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        let tokens: Vec<$crate::token::Token> = vec![
            $( $crate::token::Token::from($token) ),*
        ];

        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| token.at(position))
            .collect::<$crate::token::Tokens>()
    }};
}
