use crate::{
    error::ClassificationError,
    normalizer::{punctuation::strip_possessive, Lemmatizer},
    tagger::{
        lexicon::{closed, Closed},
        Classify, Pos,
    },
    token::Token,
};

const ADVERB_SUFFIXES: [&str; 1] = ["ly"];
const VERB_SUFFIXES: [&str; 2] = ["ing", "ed"];
const ADJECTIVE_SUFFIXES: [&str; 9] = [
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic",
];

/// Tagger built from a closed-class word list, the open-class lexicon of the
/// lemmatizer, suffix heuristics and the tag of the preceding word.
#[derive(Clone, Debug, Default)]
pub struct RuleTagger {
    lexicon: Lemmatizer,
}

impl RuleTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tagger whose open-class knowledge comes from `lexicon`.
    pub fn with_lexicon(lexicon: Lemmatizer) -> Self {
        Self { lexicon }
    }
}

/// A token prepared for tagging.
#[derive(Debug)]
struct Word {
    lower: String,
    closed: Option<Closed>,
    capitalized: bool,
    acronym: bool,
    possessive: bool,
}

impl Word {
    fn analyze(token: &Token) -> Result<Self, ClassificationError> {
        let text = token.as_str();

        if text.chars().any(|ch| ch == char::REPLACEMENT_CHARACTER || ch.is_control()) {
            return Err(ClassificationError::Garbled(text.to_string()));
        }
        if !text.chars().any(char::is_alphanumeric) {
            return Err(ClassificationError::NoWordCharacters(text.to_string()));
        }

        let (stem, possessive) = strip_possessive(text);
        let lower = stem.to_lowercase();

        let capitalized = stem.chars().next().is_some_and(char::is_uppercase);
        let acronym = stem.chars().count() >= 2
            && stem.chars().any(char::is_alphabetic)
            && stem
                .chars()
                .filter(|ch| ch.is_alphabetic())
                .all(char::is_uppercase);

        // `US` is the country rather than the pronoun.
        let closed = closed(&lower).filter(|class| !(acronym && class.pos() == Pos::Pronoun));

        Ok(Self {
            lower,
            closed,
            capitalized,
            acronym,
            possessive,
        })
    }

    fn ends_with_any(&self, suffixes: &[&str]) -> bool {
        suffixes.iter().any(|suffix| self.lower.ends_with(suffix))
    }
}

/// What the previous word tells about the current one.
#[derive(Clone, Copy, Debug)]
enum Context {
    Start,
    Closed(Closed),
    Open(Pos),
}

#[derive(Debug)]
struct Known {
    noun: bool,
    verb: bool,
    adjective: bool,
    irregular_verb: bool,
}

impl Known {
    fn any(&self) -> bool {
        self.noun || self.verb || self.adjective
    }
}

impl RuleTagger {
    fn known(&self, word: &Word) -> Known {
        Known {
            noun: self.lexicon.knows(&word.lower, Pos::Noun),
            verb: self.lexicon.knows(&word.lower, Pos::Verb),
            adjective: self.lexicon.knows(&word.lower, Pos::Adjective),
            irregular_verb: self.lexicon.is_irregular(&word.lower, Pos::Verb),
        }
    }

    fn tag(&self, word: &Word, context: Context, initial: bool, next: Option<&Word>) -> Pos {
        if let Some(class) = word.closed {
            return class.pos();
        }
        if word.acronym {
            return Pos::ProperNoun;
        }
        if !word.lower.chars().any(char::is_alphabetic) {
            return Pos::Numeral;
        }

        let known = self.known(word);

        if word.possessive {
            return if word.capitalized && !known.noun {
                Pos::ProperNoun
            } else {
                Pos::Noun
            };
        }
        if word.capitalized && !initial && !known.any() {
            return Pos::ProperNoun;
        }

        match context {
            Context::Closed(class) if class.expects_verb() => verb_first(word, &known),
            Context::Closed(Closed::Auxiliary) => after_auxiliary(word, &known),
            Context::Closed(class) if class.expects_noun() => {
                adjective_or_noun(word, &known, next)
            }
            Context::Open(Pos::Adjective | Pos::Verb) => adjective_or_noun(word, &known, next),
            Context::Open(pos) if pos.is_noun() => noun_or_verb(word, &known),
            Context::Closed(Closed::Object | Closed::Wh) => noun_or_verb(word, &known),
            _ => unconstrained(word, &known),
        }
    }
}

fn inflected_verb(word: &Word, known: &Known) -> bool {
    known.irregular_verb || (known.verb && word.ends_with_any(&["s", "ed", "ing"]))
}

/// After a subject, a modal, `do` or `to`.
fn verb_first(word: &Word, known: &Known) -> Pos {
    if known.verb {
        Pos::Verb
    } else if word.ends_with_any(&ADVERB_SUFFIXES) {
        Pos::Adverb
    } else if known.adjective {
        Pos::Adjective
    } else if known.noun {
        Pos::Noun
    } else {
        Pos::Verb
    }
}

/// After `be` or `have`: participles are verbs, the rest is a predicate.
fn after_auxiliary(word: &Word, known: &Known) -> Pos {
    if known.verb && (known.irregular_verb || word.ends_with_any(&["ing", "ed", "en"])) {
        Pos::Verb
    } else if known.adjective {
        Pos::Adjective
    } else if known.noun {
        Pos::Noun
    } else {
        guess(word)
    }
}

/// After a determiner, a possessive, a preposition, an adjective or a verb.
fn adjective_or_noun(word: &Word, known: &Known, next: Option<&Word>) -> Pos {
    let modifies = next.is_some_and(|next| next.closed.is_none());

    if known.adjective && (!known.noun || modifies) {
        Pos::Adjective
    } else if known.noun {
        Pos::Noun
    } else if known.verb {
        if modifies && word.ends_with_any(&VERB_SUFFIXES) {
            Pos::Adjective
        } else {
            Pos::Verb
        }
    } else {
        guess(word)
    }
}

/// After a noun or an object pronoun.
fn noun_or_verb(word: &Word, known: &Known) -> Pos {
    if known.verb && (!known.noun || inflected_verb(word, known)) {
        Pos::Verb
    } else if known.noun {
        Pos::Noun
    } else if known.adjective {
        Pos::Adjective
    } else {
        guess(word)
    }
}

/// Sentence start, or after a word that says nothing about the next one.
fn unconstrained(word: &Word, known: &Known) -> Pos {
    match (known.noun, known.verb) {
        (true, true) if known.irregular_verb || word.ends_with_any(&["ed"]) => Pos::Verb,
        (true, _) => Pos::Noun,
        (false, true) => Pos::Verb,
        (false, false) if known.adjective => Pos::Adjective,
        (false, false) => guess(word),
    }
}

fn guess(word: &Word) -> Pos {
    if word.ends_with_any(&ADVERB_SUFFIXES) {
        Pos::Adverb
    } else if word.ends_with_any(&VERB_SUFFIXES) {
        Pos::Verb
    } else if word.ends_with_any(&ADJECTIVE_SUFFIXES) {
        Pos::Adjective
    } else {
        Pos::Noun
    }
}

impl Classify for RuleTagger {
    fn classify(&self, tokens: &[Token]) -> Vec<Result<Pos, ClassificationError>> {
        let words = tokens.iter().map(Word::analyze).collect::<Vec<_>>();

        let mut tags = Vec::with_capacity(words.len());
        let mut context = Context::Start;
        let mut initial = true;

        for (index, word) in words.iter().enumerate() {
            let word = match word {
                Ok(word) => word,
                Err(error) => {
                    tags.push(Err(error.clone()));
                    continue;
                }
            };

            let next = words[index + 1..].iter().find_map(|word| word.as_ref().ok());
            let pos = self.tag(word, context, initial, next);

            // Adverbs are transparent: `I really drive` keeps the subject context.
            context = match (word.closed, pos) {
                (Some(class), _) => Context::Closed(class),
                (None, Pos::Adverb) => context,
                (None, pos) => Context::Open(pos),
            };
            initial = false;

            tags.push(Ok(pos));
        }

        tags
    }
}
