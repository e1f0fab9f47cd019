pub mod aggregate;
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod rank;
pub mod reader;
pub mod score;
pub mod tagger;
pub mod token;
pub mod tokenizer;
pub mod util;
pub mod writer;

pub use {
    config::{Config, ConfigBuilder, ErrorPolicy},
    core::{HashtagEntry, Hashtags},
    error::{Error, Result},
    pipeline::{Extractor, Output, Pipeline, Summary},
    reader::{Corpus, CorpusReader, RawDocument},
    score::Frequency,
    writer::HashtagWriter,
};
