use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::tagger::Pos;

/// Closed word classes. Finer than [`Pos`] so context rules can tell a
/// subject pronoun from an object pronoun, or a modal from `do`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Closed {
    Determiner,
    Subject,
    Object,
    Possessive,
    Wh,
    Preposition,
    Conjunction,
    Modal,
    DoSupport,
    Auxiliary,
    Infinitive,
    Adverb,
    Interjection,
    Numeral,
}

impl Closed {
    pub fn pos(&self) -> Pos {
        match self {
            Closed::Determiner => Pos::Determiner,
            Closed::Subject | Closed::Object | Closed::Possessive | Closed::Wh => Pos::Pronoun,
            Closed::Preposition => Pos::Preposition,
            Closed::Conjunction => Pos::Conjunction,
            Closed::Modal => Pos::Modal,
            Closed::DoSupport | Closed::Auxiliary => Pos::Verb,
            Closed::Infinitive => Pos::Particle,
            Closed::Adverb => Pos::Adverb,
            Closed::Interjection => Pos::Interjection,
            Closed::Numeral => Pos::Numeral,
        }
    }

    /// The next open-class word is most likely a noun (or an adjective
    /// in front of one).
    #[inline]
    pub fn expects_noun(&self) -> bool {
        matches!(
            self,
            Closed::Determiner | Closed::Possessive | Closed::Preposition | Closed::Numeral
        )
    }

    /// The next open-class word is most likely a verb.
    #[inline]
    pub fn expects_verb(&self) -> bool {
        matches!(
            self,
            Closed::Subject | Closed::Modal | Closed::DoSupport | Closed::Infinitive
        )
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "few", "many", "much", "several",
    "most", "more", "less", "fewer", "other", "own", "same", "enough",
];

const SUBJECTS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "there", "i'm", "you're", "we're", "they're",
    "he's", "she's", "it's", "that's", "there's", "i've", "you've", "we've", "they've", "i'd",
    "you'd", "he'd", "she'd", "we'd", "they'd", "i'll", "you'll", "he'll", "she'll", "it'll",
    "we'll", "they'll", "let's", "somebody", "someone", "nobody", "everybody", "everyone",
    "anyone", "anybody",
];

const OBJECTS: &[&str] = &[
    "me", "him", "us", "them", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves", "mine", "yours", "hers", "ours", "theirs",
    "something", "nothing", "everything", "anything",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const WH: &[&str] = &[
    "who", "whom", "whose", "which", "what", "when", "where", "why", "how", "whatever",
    "whoever", "whichever", "wherever", "whenever",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "out", "off", "over",
    "under", "of", "across", "along", "among", "around", "behind", "beside", "besides",
    "beyond", "near", "since", "toward", "towards", "upon", "within", "without", "inside",
    "outside", "via", "per", "until", "till", "onto", "despite", "throughout", "unlike",
    "amid",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "if", "unless", "while", "although",
    "though", "whether", "than", "as", "whereas",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
    "cannot", "can't", "won't", "wouldn't", "shouldn't", "couldn't", "mustn't", "mightn't",
    "shan't", "needn't",
];

const DO_SUPPORT: &[&str] = &["do", "does", "did", "don't", "doesn't", "didn't"];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "then", "now", "here", "again", "never",
    "always", "often", "sometimes", "soon", "already", "still", "even", "ever", "once",
    "almost", "quite", "rather", "really", "perhaps", "maybe", "however", "therefore",
    "instead", "away", "back", "together", "later", "today", "tomorrow", "yesterday", "yes",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "wow", "hey", "hello", "hi", "ouch", "oops", "alas"];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "hundred", "thousand", "million", "billion", "first",
    "second", "third", "last",
];

fn table() -> &'static HashMap<&'static str, Closed> {
    static TABLE: OnceLock<HashMap<&'static str, Closed>> = OnceLock::new();

    TABLE.get_or_init(|| {
        let groups: [(&[&str], Closed); 13] = [
            (DETERMINERS, Closed::Determiner),
            (SUBJECTS, Closed::Subject),
            (OBJECTS, Closed::Object),
            (POSSESSIVES, Closed::Possessive),
            (WH, Closed::Wh),
            (PREPOSITIONS, Closed::Preposition),
            (CONJUNCTIONS, Closed::Conjunction),
            (MODALS, Closed::Modal),
            (DO_SUPPORT, Closed::DoSupport),
            (AUXILIARIES, Closed::Auxiliary),
            (ADVERBS, Closed::Adverb),
            (INTERJECTIONS, Closed::Interjection),
            (NUMERALS, Closed::Numeral),
        ];

        let mut table = HashMap::new();
        table.insert("to", Closed::Infinitive);

        // First group wins: `that` stays a determiner, `her` a possessive.
        for (words, class) in groups {
            for word in words {
                table.entry(*word).or_insert(class);
            }
        }

        table
    })
}

/// Closed class of a lowercase word, `’` is read as `'`.
pub fn closed(word: &str) -> Option<Closed> {
    if word.contains('’') {
        return table().get(word.replace('’', "'").as_str()).copied();
    }

    table().get(word).copied()
}

#[cfg(test)]
mod tests {
    use crate::tagger::{
        lexicon::{closed, Closed},
        Pos,
    };

    #[test]
    fn test_closed_lookup() {
        assert_eq!(closed("the"), Some(Closed::Determiner));
        assert_eq!(closed("her"), Some(Closed::Possessive));
        assert_eq!(closed("us"), Some(Closed::Object));
        assert_eq!(closed("to"), Some(Closed::Infinitive));
        assert_eq!(closed("don’t"), Some(Closed::DoSupport));
        assert_eq!(closed("car"), None);
    }

    #[test]
    fn test_closed_pos() {
        assert_eq!(Closed::Subject.pos(), Pos::Pronoun);
        assert_eq!(Closed::Possessive.pos(), Pos::Pronoun);
        assert_eq!(Closed::Infinitive.pos(), Pos::Particle);
        assert!(Closed::Possessive.expects_noun());
        assert!(Closed::Modal.expects_verb());
        assert!(!Closed::Object.expects_verb());
    }
}
