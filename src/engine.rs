use std::path::{Path, PathBuf};

use hashgen::{util::parse_list, Config, CorpusReader, HashtagWriter, Pipeline, Summary};
use log::info;
use tokio::{fs, task};

use crate::{
    cli::Cli,
    error::{Error, IoError},
    read::DirectoryReader,
    write::JsonWriter,
};

/// One run: read the directory, extract and rank, write the JSON file.
#[derive(Debug)]
pub struct Engine {
    reader: DirectoryReader,
    pipeline: Pipeline,
    output: PathBuf,
}

impl Engine {
    pub fn new<P: Into<PathBuf>>(input: P, config: Config) -> Self {
        let reader = DirectoryReader::new(input, config.extension());
        let output = config.output_path().to_path_buf();

        Self {
            reader,
            pipeline: Pipeline::new(config),
            output,
        }
    }

    pub async fn from_cli(cli: &Cli) -> Result<Self, Error> {
        let extra = match &cli.stopwords {
            Some(path) => load_stopwords(path).await?,
            None => Vec::new(),
        };

        let config = cli.config(extra)?;
        Ok(Self::new(&cli.input, config))
    }

    pub async fn run(mut self) -> Result<Summary, Error> {
        let corpus = self.reader.read().await?;
        info!(
            "processing {} documents from `{}`",
            corpus.len(),
            self.reader.path().display()
        );

        let (pipeline, output) = (self.pipeline, self.output);

        // CPU bound, kept off the async workers.
        let summary = task::spawn_blocking(move || -> Result<Summary, Error> {
            let result = pipeline.run(corpus)?;

            let mut writer = JsonWriter::create(&output)?;
            writer.write(&result.hashtags)?;

            Ok(result.summary)
        })
        .await??;

        Ok(summary)
    }
}

/// Additional stopwords, one per line, `#` starts a comment line.
pub async fn load_stopwords(path: &Path) -> Result<Vec<String>, Error> {
    let source = fs::read_to_string(path)
        .await
        .map_err(|error| IoError::file(path, &error))?;

    Ok(parse_list(&source).map(str::to_string).collect())
}
