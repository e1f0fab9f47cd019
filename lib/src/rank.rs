use std::{fmt::Debug, num::NonZeroUsize};

use crate::{
    core::{HashtagEntry, Hashtags},
    error::ConfigError,
    score::{Frequency, Score, Scorer},
};

/// Which ranked lemmas are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Lemmas scoring below this are dropped.
    pub min_count: Option<usize>,

    /// At most this many lemmas.
    pub top_n: Option<NonZeroUsize>,

    /// Percentage of the remaining lemmas, `1..=100`.
    pub top_percent: Option<u8>,
}

impl Selection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.top_percent {
            Some(0) => Err(ConfigError::Selection(
                "top percent must be greater than zero".to_string(),
            )),
            Some(percent) if percent > 100 => Err(ConfigError::Selection(format!(
                "top percent must be at most 100, got {percent}"
            ))),
            _ => Ok(()),
        }
    }

    /// Applies the bounds to entries already sorted by rank.
    fn truncate<T>(&self, ranked: &mut Vec<T>) {
        if let Some(top_n) = self.top_n {
            ranked.truncate(top_n.get());
        }

        if let Some(percent) = self.top_percent {
            if percent < 100 {
                let keep = ranked.len() * usize::from(percent) / 100;
                ranked.truncate(keep);
            }
        }
    }
}

pub trait Ranker: Debug + Send + Sync {
    fn rank(&self, entries: Vec<(String, HashtagEntry)>) -> Hashtags;
}

/// Orders by descending score, ties by ascending lemma.
#[derive(Clone, Debug)]
pub struct FrequencyRanker<S: Score = Frequency> {
    scorer: Scorer<S>,
    selection: Selection,
}

impl<S: Score> FrequencyRanker<S> {
    pub fn new(strategy: S, selection: Selection) -> Self {
        Self {
            scorer: Scorer::new(strategy),
            selection,
        }
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl Default for FrequencyRanker<Frequency> {
    fn default() -> Self {
        Self::new(Frequency::default(), Selection::default())
    }
}

impl<S: Score> Ranker for FrequencyRanker<S> {
    fn rank(&self, entries: Vec<(String, HashtagEntry)>) -> Hashtags {
        let min_count = self.selection.min_count.unwrap_or(0);

        let mut ranked = self.scorer.from_entries(entries);
        ranked.retain(|(score, _, _)| *score >= min_count);
        ranked.sort_unstable_by(|(left_score, left, _), (right_score, right, _)| {
            right_score.cmp(left_score).then_with(|| left.cmp(right))
        });

        self.selection.truncate(&mut ranked);

        Hashtags::new(
            ranked
                .into_iter()
                .map(|(_, lemma, entry)| (lemma, entry))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, sync::Arc};

    use crate::{
        core::HashtagEntry,
        document::DocumentId,
        error::ConfigError,
        rank::{FrequencyRanker, Ranker, Selection},
        score::Frequency,
    };

    /// `(lemma, documents)` pairs become entries spread over that many documents.
    fn entries(scores: &[(&str, usize)]) -> Vec<(String, HashtagEntry)> {
        let text: Arc<str> = Arc::from("sentence");
        scores
            .iter()
            .map(|(lemma, documents)| {
                let mut entry = HashtagEntry::new();
                (0..*documents).for_each(|index| {
                    entry.record(&DocumentId::new(format!("doc{index}")), 0, &text)
                });
                (lemma.to_string(), entry)
            })
            .collect()
    }

    fn corpus() -> Vec<(String, HashtagEntry)> {
        entries(&[("zebra", 2), ("car", 3), ("apple", 2), ("drive", 1), ("sleep", 1)])
    }

    #[test]
    fn test_rank_orders_by_score_then_lemma() {
        let ranked = FrequencyRanker::default().rank(corpus());
        assert_eq!(
            ranked.keys().collect::<Vec<_>>(),
            vec!["car", "apple", "zebra", "drive", "sleep"]
        );
    }

    #[test]
    fn test_rank_min_count() {
        let selection = Selection {
            min_count: Some(2),
            ..Default::default()
        };
        let ranked = FrequencyRanker::new(Frequency::Documents, selection).rank(corpus());
        assert_eq!(ranked.keys().collect::<Vec<_>>(), vec!["car", "apple", "zebra"]);
    }

    #[test]
    fn test_rank_min_count_is_monotonic() {
        let mut previous = usize::MAX;
        for min_count in 0..5 {
            let selection = Selection {
                min_count: Some(min_count),
                ..Default::default()
            };
            let len = FrequencyRanker::new(Frequency::Documents, selection)
                .rank(corpus())
                .len();
            assert!(len <= previous);
            previous = len;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_rank_top_n_alphabetical_tie_break() {
        let selection = Selection {
            top_n: NonZeroUsize::new(2),
            ..Default::default()
        };
        let ranked = FrequencyRanker::new(Frequency::Documents, selection).rank(corpus());
        assert_eq!(ranked.keys().collect::<Vec<_>>(), vec!["car", "apple"]);
    }

    #[test]
    fn test_rank_top_percent() {
        let percent = |top_percent| {
            let selection = Selection {
                top_percent: Some(top_percent),
                ..Default::default()
            };
            FrequencyRanker::new(Frequency::Documents, selection)
                .rank(corpus())
                .len()
        };

        assert_eq!(percent(100), 5);
        assert_eq!(percent(50), 2);
        assert_eq!(percent(10), 0);
    }

    #[test]
    fn test_rank_bounds_compose() {
        let selection = Selection {
            min_count: Some(1),
            top_n: NonZeroUsize::new(4),
            top_percent: Some(50),
        };
        let ranked = FrequencyRanker::new(Frequency::Documents, selection).rank(corpus());
        assert_eq!(ranked.keys().collect::<Vec<_>>(), vec!["car", "apple"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(FrequencyRanker::default().rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_selection_validate() {
        assert!(Selection::default().validate().is_ok());

        let zero = Selection {
            top_percent: Some(0),
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Selection(_))));

        let over = Selection {
            top_percent: Some(101),
            ..Default::default()
        };
        assert!(over.validate().is_err());
    }
}
