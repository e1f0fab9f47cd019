use unicode_segmentation::UnicodeSegmentation;

use crate::{
    document::{DocumentId, Sentence},
    tokenizer::{Standard, TextTokenizer},
};

/// Lowercase abbreviations, without their final period, that do not end a
/// sentence.
const ABBREVIATIONS: [&str; 24] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "sr", "jr", "mt", "gen", "col", "lt", "sgt", "capt",
    "rev", "gov", "sen", "rep", "vs", "etc", "e.g", "i.e", "approx", "dept",
];

/// `segment` stops at a period that belongs to an abbreviation or an initial
/// and the sentence goes on after it on the same line.
fn ends_with_abbreviation(segment: &str) -> bool {
    let body = segment.trim_end();
    if segment[body.len()..].contains(['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}']) {
        return false;
    }

    let Some(word) = body
        .strip_suffix('.')
        .and_then(|body| body.split_whitespace().last())
    else {
        return false;
    };

    let word = word.trim_start_matches(['(', '"', '\'', '“', '‘']);
    let initial = word.chars().count() == 1 && word.chars().all(char::is_uppercase);

    initial || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Splits text into sentences (UAX #29 sentence boundaries), then each
/// sentence into word tokens.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    tokenizer: Standard,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed sentences of `text`, those without a word character skipped.
    /// Line breaks always end a sentence, a period after `Mr`, `e.g.` or an
    /// initial does not.
    pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
        let mut sentences = Vec::new();
        let mut start = None;

        for (offset, segment) in text.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(offset);
            if ends_with_abbreviation(segment) {
                continue;
            }

            sentences.push(&text[begin..offset + segment.len()]);
            start = None;
        }

        if let Some(begin) = start {
            sentences.push(&text[begin..]);
        }

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
    }

    pub fn segment(&mut self, document: &DocumentId, text: &str) -> Vec<Sentence> {
        Self::sentences(text)
            .enumerate()
            .map(|(index, sentence)| {
                let tokens = self.tokenizer.tokenize(sentence);
                Sentence::new(document.clone(), index, sentence, tokens)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        document::DocumentId,
        tokenizer::{sentence::ends_with_abbreviation, Segmenter},
        tokens,
    };

    #[test]
    fn test_segmenter_sentences() {
        let sentences = Segmenter::sentences("I drive my car. She slept in her car! Did he?")
            .collect::<Vec<_>>();

        assert_eq!(
            sentences,
            vec!["I drive my car.", "She slept in her car!", "Did he?"]
        );
    }

    #[test]
    fn test_segmenter_line_breaks() {
        let sentences = Segmenter::sentences("Route 66\nA long road.\n\n").collect::<Vec<_>>();
        assert_eq!(sentences, vec!["Route 66", "A long road."]);
    }

    #[test]
    fn test_segmenter_abbreviations() {
        let sentences = Segmenter::sentences("Mr. Smith drove his car. Dr. Who slept.")
            .collect::<Vec<_>>();
        assert_eq!(sentences, vec!["Mr. Smith drove his car.", "Dr. Who slept."]);

        let sentences = Segmenter::sentences("J. R. R. Tolkien wrote books. Cars, boats etc. Are sold.")
            .collect::<Vec<_>>();
        assert_eq!(
            sentences,
            vec!["J. R. R. Tolkien wrote books.", "Cars, boats etc. Are sold."]
        );
    }

    #[test]
    fn test_segmenter_abbreviation_at_line_end() {
        let sentences = Segmenter::sentences("He met Mr.\nSmith slept.").collect::<Vec<_>>();
        assert_eq!(sentences, vec!["He met Mr.", "Smith slept."]);

        let sentences = Segmenter::sentences("She visited St.").collect::<Vec<_>>();
        assert_eq!(sentences, vec!["She visited St."]);
    }

    #[test]
    fn test_ends_with_abbreviation() {
        assert!(ends_with_abbreviation("Dr. "));
        assert!(ends_with_abbreviation("see (e.g. "));
        assert!(ends_with_abbreviation("John F. "));
        assert!(!ends_with_abbreviation("I drive my car. "));
        assert!(!ends_with_abbreviation("Is it me? "));
        assert!(!ends_with_abbreviation("Mr.\n"));
    }

    #[test]
    fn test_segmenter_empty() {
        let mut segmenter = Segmenter::new();
        let sentences = segmenter.segment(&DocumentId::new("empty"), "");
        assert!(sentences.is_empty());

        let sentences = segmenter.segment(&DocumentId::new("blank"), "  \n\t ");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_segmenter_tokens() {
        let mut segmenter = Segmenter::new();
        let sentences = segmenter.segment(&DocumentId::new("doc1"), "I drive my car.");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens(), &tokens!["I", "drive", "my", "car"]);
    }
}
