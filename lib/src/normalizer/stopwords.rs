use std::{borrow::Cow, sync::Arc, sync::OnceLock};

use hashbrown::HashSet;

use crate::{
    normalizer::TextNormalizer,
    token::Tokens,
    util::parse_list,
};

const ENGLISH: &str = include_str!("../../assets/stopwords/en.txt");

/// Built-in English list, shared read-only by every run.
fn english() -> &'static HashSet<String> {
    static SET: OnceLock<HashSet<String>> = OnceLock::new();
    SET.get_or_init(|| parse_list(ENGLISH).map(str::to_string).collect())
}

/// Stopword set of one run: the built-in list plus run-specific additions.
///
/// Additions live in their own set, the built-in list is never written to.
#[derive(Clone, Debug)]
pub struct Stopwords {
    builtin: Option<&'static HashSet<String>>,
    extra: Arc<HashSet<String>>,
}

impl Stopwords {
    /// Only the given words, without the built-in list.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            builtin: None,
            extra: Arc::new(normalize_all(words)),
        }
    }

    pub fn builtin() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Built-in list extended with `words`.
    pub fn with_extra<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            builtin: Some(english()),
            extra: Arc::new(normalize_all(words)),
        }
    }

    /// Case-insensitive, exact match.
    pub fn is_stopword(&self, word: &str) -> bool {
        let word = fold(word);

        self.builtin.is_some_and(|set| set.contains(word.as_ref()))
            || self.extra.contains(word.as_ref())
    }

    pub fn len(&self) -> usize {
        let extra = self
            .extra
            .iter()
            .filter(|word| !self.builtin.is_some_and(|set| set.contains(word.as_str())))
            .count();

        self.builtin.map_or(0, HashSet::len) + extra
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::builtin()
    }
}

fn fold(word: &str) -> Cow<'_, str> {
    if word.chars().any(|ch| ch.is_uppercase() || ch == '’') {
        Cow::Owned(word.to_lowercase().replace('’', "'"))
    } else {
        Cow::Borrowed(word)
    }
}

fn normalize_all<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| fold(word.as_ref().trim()).into_owned())
        .filter(|word| !word.is_empty())
        .collect()
}

impl TextNormalizer for Stopwords {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.retain_mut(|token| !self.is_stopword(token.as_str()))
    }
}
