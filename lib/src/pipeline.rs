//! Corpus processing.
//!
//! Every document is decoded, segmented, tagged, filtered and lemmatized by a
//! worker owning its own [`Extractor`]. Workers pull documents from a shared
//! job queue and never touch the aggregate: their [`Extraction`]s come back
//! tagged with the document's position in the [`Corpus`] and are folded in
//! that order, so the result does not depend on scheduling.

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
    thread,
};

use crossbeam_channel::unbounded;
use log::{debug, info, warn};

use crate::{
    aggregate::{Aggregator, Contribution, HashAggregator},
    config::{Config, ErrorPolicy},
    core::Hashtags,
    document::{Document, DocumentId, Sentence},
    error::{Error, Result},
    filter::FilterPipeline,
    normalizer::{Lemmatize, Lemmatizer, NormalizerPipeline, Stopwords},
    rank::{FrequencyRanker, Ranker},
    reader::{Corpus, RawDocument},
    tagger::{Classify, RuleTagger},
    tokenizer::Segmenter,
};

/// Per-document output of a worker.
#[derive(Debug, Default, PartialEq)]
pub struct Extraction {
    /// Surviving tokens in document order.
    pub contributions: Vec<Contribution>,
    pub sentences: usize,

    /// Tokens the classifier could not tag.
    pub dropped: usize,
}

/// Turns one document into contributions.
#[derive(Clone, Debug)]
pub struct Extractor {
    segmenter: Segmenter,
    classifier: Arc<dyn Classify>,
    lemmatizer: Arc<dyn Lemmatize>,
    normalizers: NormalizerPipeline,
    filters: FilterPipeline,
    stopwords: Stopwords,
}

impl Extractor {
    /// Built-in tagger and lemmatizer, standard normalizers and filters.
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            segmenter: Segmenter::new(),
            classifier: Arc::new(RuleTagger::new()),
            lemmatizer: Arc::new(Lemmatizer::builtin()),
            normalizers: NormalizerPipeline::standard(stopwords.clone()),
            filters: FilterPipeline::standard(),
            stopwords,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classify>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatize>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_filters(mut self, filters: FilterPipeline) -> Self {
        self.filters = filters;
        self
    }

    /// Decodes and extracts a raw document.
    pub fn extract(&mut self, raw: &RawDocument) -> Result<Extraction> {
        let document = Document::decode(raw.id.clone(), &raw.bytes, &mut self.segmenter)?;
        Ok(self.extract_document(document))
    }

    pub fn extract_document(&mut self, document: Document) -> Extraction {
        let mut extraction = Extraction::default();
        let id = document.id().clone();

        for sentence in document.into_sentences() {
            self.sentence(&id, sentence, &mut extraction);
        }

        debug!(
            "{id}: {} sentences, {} candidates",
            extraction.sentences,
            extraction.contributions.len()
        );
        extraction
    }

    fn sentence(&mut self, document: &DocumentId, sentence: Sentence, extraction: &mut Extraction) {
        let index = sentence.index();
        let (text, mut tokens) = sentence.into_tokens();
        extraction.sentences += 1;

        let mut tags = self.classifier.classify(tokens.as_slice()).into_iter();
        tokens.retain_mut(|token| match tags.next() {
            Some(Ok(pos)) => {
                token.set_pos(pos);
                true
            }
            Some(Err(error)) => {
                warn!("{document}: {error}");
                extraction.dropped += 1;
                false
            }
            None => false,
        });

        self.normalizers.run(&mut tokens);
        self.filters.run(&mut tokens);

        for token in tokens {
            let lemma = self.lemmatizer.lemmatize(token.as_str(), token.pos());
            if lemma.is_empty() || self.stopwords.is_stopword(&lemma) {
                continue;
            }

            extraction
                .contributions
                .push(Contribution::new(lemma, index, Arc::clone(&text)));
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Stopwords::builtin())
    }
}

/// Statistics of one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Documents that contributed to the result.
    pub documents: usize,

    /// Documents left out, with the reason.
    pub skipped: Vec<(DocumentId, String)>,

    pub sentences: usize,
    pub dropped_tokens: usize,
    pub hashtags: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} documents, {} sentences, {} hashtags, {} skipped documents, {} dropped tokens",
            self.documents,
            self.sentences,
            self.hashtags,
            self.skipped.len(),
            self.dropped_tokens
        )
    }
}

#[derive(Debug)]
pub struct Output {
    pub hashtags: Hashtags,
    pub summary: Summary,
}

type Slot = Option<(DocumentId, Result<Extraction>)>;

#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    extractor: Extractor,
    ranker: FrequencyRanker,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let stopwords = Stopwords::with_extra(config.extra_stopwords());
        Self::with_extractor(config, Extractor::new(stopwords))
    }

    pub fn with_extractor(config: Config, extractor: Extractor) -> Self {
        let ranker = FrequencyRanker::new(config.frequency(), *config.selection());
        Self {
            config,
            extractor,
            ranker,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, corpus: Corpus) -> Result<Output> {
        let slots = self.extract_all(corpus)?;

        let mut aggregator = Aggregator::new(HashAggregator::with_capacity(slots.len() * 16));
        let mut summary = Summary::default();

        for (order, slot) in slots.into_iter().enumerate() {
            let (id, result) =
                slot.ok_or_else(|| Error::Worker(format!("document {order} was not processed")))?;

            match result {
                Ok(extraction) => {
                    summary.documents += 1;
                    summary.sentences += extraction.sentences;
                    summary.dropped_tokens += extraction.dropped;
                    aggregator.extend(&id, extraction.contributions);
                }
                Err(error) => match self.config.policy() {
                    ErrorPolicy::FailFast => return Err(error),
                    ErrorPolicy::SkipAndContinue => {
                        warn!("skipping `{id}`: {error}");
                        summary.skipped.push((id, error.to_string()));
                    }
                },
            }
        }

        let hashtags = self.ranker.rank(aggregator.into_entries());
        summary.hashtags = hashtags.len();
        info!("{summary}");

        Ok(Output { hashtags, summary })
    }

    /// Extraction results indexed by corpus position.
    fn extract_all(&self, corpus: Corpus) -> Result<Vec<Slot>> {
        let documents = corpus.into_documents();
        let total = documents.len();
        let workers = self.config.workers().get().min(total);

        let (job_tx, job_rx) = unbounded::<(usize, RawDocument)>();
        let (result_tx, result_rx) = unbounded::<(usize, DocumentId, Result<Extraction>)>();

        for job in documents.into_iter().enumerate() {
            job_tx
                .send(job)
                .map_err(|error| Error::Worker(error.to_string()))?;
        }
        drop(job_tx);

        debug!("processing {total} documents with {workers} workers");

        thread::scope(|scope| {
            for _ in 0..workers {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                let mut extractor = self.extractor.clone();

                scope.spawn(move || {
                    for (order, raw) in jobs.iter() {
                        let result = extractor.extract(&raw);
                        if results.send((order, raw.id, result)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots = (0..total).map(|_| None).collect::<Vec<Slot>>();
        for (order, id, result) in result_rx.iter() {
            if let Some(slot) = slots.get_mut(order) {
                *slot = Some((id, result));
            }
        }

        Ok(slots)
    }
}
