use std::{
    ffi::OsStr,
    future::Future,
    path::{Path, PathBuf},
};

use hashgen::{document::DocumentId, Corpus, CorpusReader, RawDocument};
use log::{debug, warn};
use tokio::{fs, task::JoinSet};

use crate::error::{Error, IoError};

/// Reads every file of one directory with the configured extension.
/// Subdirectories are not visited.
#[derive(Clone, Debug)]
pub struct DirectoryReader {
    path: PathBuf,
    extension: String,
}

impl DirectoryReader {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, extension: S) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|extension| extension == self.extension)
    }

    /// File name without its extension, `None` unless it is valid UTF-8.
    pub fn document_id(path: &Path) -> Option<DocumentId> {
        path.file_stem()
            .and_then(OsStr::to_str)
            .map(DocumentId::from)
    }

    /// Reads the matching files concurrently.
    pub async fn read_all(&self) -> Result<Corpus, Error> {
        let mut entries = fs::read_dir(&self.path)
            .await
            .map_err(|error| IoError::directory(&self.path, &error))?;

        let mut tasks = JoinSet::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|error| IoError::directory(&self.path, &error))?
        {
            let path = entry.path();
            if !self.matches(&path) {
                continue;
            }

            let metadata = fs::metadata(&path)
                .await
                .map_err(|error| IoError::file(&path, &error))?;
            if !metadata.is_file() {
                continue;
            }

            let Some(id) = Self::document_id(&path) else {
                warn!("skipping `{}`: file name is not valid UTF-8", path.display());
                continue;
            };

            tasks.spawn(async move {
                match fs::read(&path).await {
                    Ok(bytes) => Ok(RawDocument::new(id, bytes)),
                    Err(error) => Err(IoError::file(&path, &error)),
                }
            });
        }

        let mut documents = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            documents.push(joined??);
        }

        debug!(
            "read {} documents from `{}`",
            documents.len(),
            self.path.display()
        );

        Ok(Corpus::new(documents))
    }
}

impl CorpusReader for DirectoryReader {
    type Error = Error;

    fn read(&mut self) -> impl Future<Output = Result<Corpus, Self::Error>> + Send {
        self.read_all()
    }
}
