//! Dictionary lemmatization.
//!
//! The built-in [`Lemmatizer`] works like WordNet's morphy: irregular forms
//! come from an exception table, regular forms are reduced with detachment
//! rules and only accepted when the result is a known base form. Nouns and
//! verbs the lexicon does not know go through [`guess`], an orthographic
//! reduction in the manner of Porter's step 1; anything else is returned
//! lowercased and otherwise unchanged.

use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
};

use hashbrown::{HashMap, HashSet};

use crate::{tagger::Pos, util::parse_list};

const NOUN_INDEX: &str = include_str!("../../assets/lexicon/noun.txt");
const VERB_INDEX: &str = include_str!("../../assets/lexicon/verb.txt");
const ADJECTIVE_INDEX: &str = include_str!("../../assets/lexicon/adjective.txt");

const NOUN_EXCEPTIONS: &str = include_str!("../../assets/lexicon/noun.exc");
const VERB_EXCEPTIONS: &str = include_str!("../../assets/lexicon/verb.exc");
const ADJECTIVE_EXCEPTIONS: &str = include_str!("../../assets/lexicon/adjective.exc");

const NOUN_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: [(&str, &str); 4] = [("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Maps a (token, part of speech) pair to its base form.
pub trait Lemmatize: Debug + Send + Sync {
    /// Base form of a lowercase `word`, if the backing resource knows it.
    fn lookup(&self, word: &str, pos: Pos) -> Option<String>;

    /// Never fails: a miss yields the lowercased token.
    fn lemmatize(&self, token: &str, pos: Pos) -> String {
        let word = token.to_lowercase();
        self.lookup(&word, pos).unwrap_or(word)
    }
}

/// Lexicon tables keyed by the part of speech they describe.
#[derive(Debug, Default)]
pub struct Lookup {
    rules: HashMap<Pos, Vec<(String, String)>>,
    index: HashMap<Pos, HashSet<String>>,
    exceptions: HashMap<Pos, HashMap<String, String>>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon shipped with the crate.
    pub fn english() -> Self {
        let mut lookup = Self::new();

        lookup.load_index(Pos::Noun, NOUN_INDEX);
        lookup.load_index(Pos::Verb, VERB_INDEX);
        lookup.load_index(Pos::Adjective, ADJECTIVE_INDEX);

        lookup.load_exceptions(Pos::Noun, NOUN_EXCEPTIONS);
        lookup.load_exceptions(Pos::Verb, VERB_EXCEPTIONS);
        lookup.load_exceptions(Pos::Adjective, ADJECTIVE_EXCEPTIONS);

        for (suffix, replacement) in NOUN_RULES {
            lookup.insert_rule(Pos::Noun, suffix, replacement);
        }
        for (suffix, replacement) in VERB_RULES {
            lookup.insert_rule(Pos::Verb, suffix, replacement);
        }
        for (suffix, replacement) in ADJECTIVE_RULES {
            lookup.insert_rule(Pos::Adjective, suffix, replacement);
        }

        lookup
    }

    pub fn insert_base<S: Into<String>>(&mut self, pos: Pos, word: S) {
        self.index.entry(pos).or_default().insert(word.into());
    }

    pub fn insert_exception<S: Into<String>>(&mut self, pos: Pos, form: S, base: S) {
        self.exceptions
            .entry(pos)
            .or_default()
            .insert(form.into(), base.into());
    }

    pub fn insert_rule<S: Into<String>>(&mut self, pos: Pos, suffix: S, replacement: S) {
        self.rules
            .entry(pos)
            .or_default()
            .push((suffix.into(), replacement.into()));
    }

    /// One base form per line.
    pub fn load_index(&mut self, pos: Pos, source: &str) {
        parse_list(source).for_each(|word| self.insert_base(pos, word));
    }

    /// One `inflected base` pair per line, malformed lines are ignored.
    pub fn load_exceptions(&mut self, pos: Pos, source: &str) {
        parse_list(source).for_each(|line| {
            let mut fields = line.split_whitespace();
            if let (Some(form), Some(base)) = (fields.next(), fields.next()) {
                self.insert_exception(pos, form, base);
            }
        });
    }

    pub fn is_exception(&self, word: &str, pos: Pos) -> bool {
        table(pos).is_some_and(|pos| {
            self.exceptions
                .get(&pos)
                .is_some_and(|exceptions| exceptions.contains_key(word))
        })
    }

    pub fn morphy(&self, word: &str, pos: Pos) -> Option<String> {
        let pos = table(pos)?;

        if let Some(base) = self
            .exceptions
            .get(&pos)
            .and_then(|exceptions| exceptions.get(word))
        {
            return Some(base.clone());
        }

        let index = self.index.get(&pos)?;
        if index.contains(word) {
            return Some(word.to_string());
        }

        self.rules.get(&pos)?.iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix.as_str()).filter(|stem| !stem.is_empty())?;
            let candidate = format!("{stem}{replacement}");

            if index.contains(candidate.as_str()) {
                return Some(candidate);
            }

            // running -> runn -> run, stopped -> stopp -> stop
            undouble(&candidate).filter(|single| index.contains(*single)).map(str::to_string)
        })
    }
}

/// Table a tag is looked up in; proper nouns share the noun tables.
fn table(pos: Pos) -> Option<Pos> {
    match pos {
        Pos::Noun | Pos::ProperNoun => Some(Pos::Noun),
        Pos::Verb => Some(Pos::Verb),
        Pos::Adjective => Some(Pos::Adjective),
        _ => None,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Vowel-consonant sequences in `stem`, `y` after a consonant counts as a vowel.
fn measure(stem: &str) -> usize {
    let mut count = 0;
    let mut previous_vowel = false;

    for (index, ch) in stem.chars().enumerate() {
        let vowel = is_vowel(ch) || (ch == 'y' && index > 0 && !previous_vowel);
        if previous_vowel && !vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    count
}

/// Consonant-vowel-consonant ending, the last consonant not `w`, `x` or `y`.
fn ends_cvc(stem: &str) -> bool {
    let tail = stem.chars().rev().take(3).collect::<Vec<_>>();
    match tail.as_slice() {
        [last, middle, first] => {
            !is_vowel(*first)
                && is_vowel(*middle)
                && !is_vowel(*last)
                && !matches!(last, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// Base form of a suffix-stripped verb stem: `hop` is `hope`, `stopp` is
/// `stop`, `tweet` stays.
fn restore(stem: &str) -> String {
    if ["at", "bl", "iz"].iter().any(|suffix| stem.ends_with(suffix)) {
        return format!("{stem}e");
    }

    if let Some(single) = undouble(stem).filter(|_| !stem.ends_with(['l', 's', 'z'])) {
        return single.to_string();
    }

    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|ch| is_vowel(ch) || ch == 'y')
}

/// Plural or third person `-s`, absent for `glass`, `bus` and `basis`.
fn strip_s(word: &str) -> Option<String> {
    if word.chars().count() <= 3 || ["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies").filter(|stem| stem.len() > 1) {
        return Some(format!("{stem}y"));
    }

    for sibilant in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(sibilant) {
            return Some(word[..word.len() - 2].to_string());
        }
    }

    word.strip_suffix('s').map(str::to_string)
}

/// Base form of a noun or verb missing from the lexicon.
///
/// Only regular morphology is undone; the result is a best effort and may not
/// be a dictionary word.
pub fn guess(word: &str, pos: Pos) -> Option<String> {
    if !word.chars().all(char::is_alphabetic) {
        return None;
    }

    match table(pos)? {
        Pos::Noun => strip_s(word),
        Pos::Verb => {
            if let Some(stem) = word.strip_suffix("ied").filter(|stem| stem.len() > 1) {
                return Some(format!("{stem}y"));
            }

            if let Some(stem) = word.strip_suffix("eed") {
                return (measure(stem) > 0).then(|| format!("{stem}ee"));
            }

            for suffix in ["ing", "ed"] {
                if let Some(stem) = word.strip_suffix(suffix) {
                    return (stem.chars().count() >= 2 && has_vowel(stem)).then(|| restore(stem));
                }
            }

            strip_s(word)
        }
        _ => None,
    }
}

fn undouble(word: &str) -> Option<&str> {
    let mut chars = word.char_indices().rev();
    let (last_index, last) = chars.next()?;
    let (_, previous) = chars.next()?;

    let consonant = last.is_alphabetic() && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u');
    (consonant && last == previous).then(|| &word[..last_index])
}

/// Lemmatizer backed by a shared [`Lookup`].
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    lookup: Arc<Lookup>,

    /// Reduce nouns and verbs the lookup does not know with [`guess`].
    guess: bool,
}

impl Lemmatizer {
    /// Built-in English lexicon, loaded once per process.
    pub fn builtin() -> Self {
        static LOOKUP: OnceLock<Arc<Lookup>> = OnceLock::new();

        Self {
            lookup: LOOKUP.get_or_init(|| Arc::new(Lookup::english())).clone(),
            guess: true,
        }
    }

    pub fn with_lookup(lookup: Lookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
            guess: true,
        }
    }

    /// Only forms the lookup can resolve are reduced.
    pub fn strict(mut self) -> Self {
        self.guess = false;
        self
    }

    /// Whether `word` (lowercase) is a known form for `pos`.
    #[inline]
    pub fn knows(&self, word: &str, pos: Pos) -> bool {
        self.lookup.morphy(word, pos).is_some()
    }

    /// Whether `word` is listed as an irregular form for `pos`.
    #[inline]
    pub fn is_irregular(&self, word: &str, pos: Pos) -> bool {
        self.lookup.is_exception(word, pos)
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lemmatize for Lemmatizer {
    fn lookup(&self, word: &str, pos: Pos) -> Option<String> {
        match self.lookup.morphy(word, pos) {
            Some(base) => Some(base),
            None if self.guess => guess(word, pos),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        normalizer::lemmatize::{guess, measure, restore, undouble, Lemmatize, Lemmatizer, Lookup},
        tagger::Pos,
    };

    #[test]
    fn test_lemmatize_regular_noun() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemmatize("cars", Pos::Noun), "car");
        assert_eq!(lemmatizer.lemmatize("Cities", Pos::Noun), "city");
        assert_eq!(lemmatizer.lemmatize("boxes", Pos::Noun), "box");
        assert_eq!(lemmatizer.lemmatize("churches", Pos::Noun), "church");
        assert_eq!(lemmatizer.lemmatize("glass", Pos::Noun), "glass");
    }

    #[test]
    fn test_lemmatize_irregular() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemmatize("slept", Pos::Verb), "sleep");
        assert_eq!(lemmatizer.lemmatize("drove", Pos::Verb), "drive");
        assert_eq!(lemmatizer.lemmatize("children", Pos::Noun), "child");
        assert_eq!(lemmatizer.lemmatize("women", Pos::Noun), "woman");
        assert_eq!(lemmatizer.lemmatize("better", Pos::Adjective), "good");
    }

    #[test]
    fn test_lemmatize_regular_verb() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemmatize("drives", Pos::Verb), "drive");
        assert_eq!(lemmatizer.lemmatize("driving", Pos::Verb), "drive");
        assert_eq!(lemmatizer.lemmatize("jumped", Pos::Verb), "jump");
        assert_eq!(lemmatizer.lemmatize("running", Pos::Verb), "run");
        assert_eq!(lemmatizer.lemmatize("stopped", Pos::Verb), "stop");
        assert_eq!(lemmatizer.lemmatize("studies", Pos::Verb), "study");
    }

    #[test]
    fn test_lemmatize_proper_noun_uses_noun_table() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemmatize("Cars", Pos::ProperNoun), "car");
    }

    #[test]
    fn test_lemmatize_miss_falls_back() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.strict().lemmatize("Zorbs", Pos::Noun), "zorbs");

        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemmatize("Zorbs", Pos::Noun), "zorb");
        assert_eq!(lemmatizer.lemmatize("route66", Pos::Noun), "route66");
        assert_eq!(lemmatizer.lemmatize("Cars", Pos::Pronoun), "cars");
    }

    #[test]
    fn test_lemmatize_is_deterministic() {
        let lemmatizer = Lemmatizer::builtin();
        let first = lemmatizer.lemmatize("leaves", Pos::Noun);
        let second = Lemmatizer::builtin().lemmatize("leaves", Pos::Noun);
        assert_eq!(first, "leaf");
        assert_eq!(first, second);
    }

    #[test]
    fn test_lemmatize_custom_lookup() {
        let mut lookup = Lookup::new();
        lookup.insert_base(Pos::Noun, "hashtag");
        lookup.insert_rule(Pos::Noun, "s", "");
        lookup.insert_exception(Pos::Verb, "tweeted", "tweet");

        let lemmatizer = Lemmatizer::with_lookup(lookup);
        assert_eq!(lemmatizer.lemmatize("hashtags", Pos::Noun), "hashtag");
        assert_eq!(lemmatizer.lemmatize("tweeted", Pos::Verb), "tweet");
        assert_eq!(lemmatizer.clone().strict().lemmatize("cars", Pos::Noun), "cars");
        assert_eq!(lemmatizer.lemmatize("cars", Pos::Noun), "car");
        assert!(lemmatizer.is_irregular("tweeted", Pos::Verb));
        assert!(!lemmatizer.knows("tweeted", Pos::Noun));
    }

    #[test]
    fn test_lemmatize_unknown_nouns() {
        let lemmatizer = Lemmatizer::builtin();
        for (form, base) in [
            ("laptops", "laptop"),
            ("laptop", "laptop"),
            ("hashtags", "hashtag"),
            ("servers", "server"),
            ("publishers", "publisher"),
            ("galaxies", "galaxy"),
            ("crashes", "crash"),
        ] {
            assert_eq!(lemmatizer.lemmatize(form, Pos::Noun), base, "{form}");
        }

        assert_eq!(lemmatizer.lemmatize("thesis", Pos::Noun), "thesis");
        assert_eq!(lemmatizer.lemmatize("octopus", Pos::Noun), "octopus");
        assert_eq!(lemmatizer.lemmatize("wifi", Pos::Noun), "wifi");
    }

    #[test]
    fn test_lemmatize_unknown_verbs() {
        let lemmatizer = Lemmatizer::builtin();
        for (form, base) in [
            ("deployed", "deploy"),
            ("deploying", "deploy"),
            ("deploys", "deploy"),
            ("deploy", "deploy"),
            ("tweeted", "tweet"),
            ("tweets", "tweet"),
            ("published", "publish"),
            ("publishes", "publish"),
            ("blogged", "blog"),
            ("hoped", "hope"),
            ("automated", "automate"),
            ("refactored", "refactor"),
            ("emailed", "email"),
            ("copied", "copy"),
            ("guaranteed", "guarantee"),
        ] {
            assert_eq!(lemmatizer.lemmatize(form, Pos::Verb), base, "{form}");
        }
    }

    #[test]
    fn test_guess_rules() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("hop"), 1);
        assert_eq!(measure("visit"), 2);
        assert_eq!(restore("tweet"), "tweet");
        assert_eq!(restore("stopp"), "stop");
        assert_eq!(restore("fill"), "fill");
        assert_eq!(restore("bak"), "bake");
        assert_eq!(guess("sing", Pos::Verb), None);
        assert_eq!(guess("need", Pos::Verb), None);
        assert_eq!(guess("route66", Pos::Noun), None);
        assert_eq!(guess("laptops", Pos::Adjective), None);
    }

    #[test]
    fn test_undouble() {
        assert_eq!(undouble("runn"), Some("run"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("car"), None);
    }
}
