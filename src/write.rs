use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use hashgen::{HashtagWriter, Hashtags};
use log::{info, warn};

use crate::error::{Error, IoError};

/// Writes hashtags as a pretty-printed JSON object, keys in ranking order.
#[derive(Debug)]
pub struct JsonWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl JsonWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|error| IoError::file(path, &error))?;

        Ok(Self {
            inner: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            path: PathBuf::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn io_error(&self, error: io::Error) -> Error {
        IoError::file(&self.path, &error).into()
    }
}

impl<W: Write> HashtagWriter for JsonWriter<W> {
    type Error = Error;

    fn write(&mut self, hashtags: &Hashtags) -> Result<(), Self::Error> {
        if hashtags.is_empty() {
            warn!("no hashtags could be selected, writing an empty mapping");
        }

        serde_json::to_writer_pretty(&mut self.inner, hashtags)?;

        if let Err(error) = self.inner.write_all(b"\n").and_then(|_| self.inner.flush()) {
            return Err(self.io_error(error));
        }

        info!("wrote {} hashtags to `{}`", hashtags.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hashgen::{core::HashtagEntry, document::DocumentId, HashtagWriter, Hashtags};

    use crate::write::JsonWriter;

    #[test]
    fn test_json_writer_pretty_and_ordered() {
        let doc = DocumentId::new("doc1");
        let text: Arc<str> = Arc::from("Le café brûle.");

        let mut entry = HashtagEntry::new();
        entry.record(&doc, 0, &text);

        let hashtags = Hashtags::new(vec![
            ("café".to_string(), entry.clone()),
            ("brûler".to_string(), entry),
        ]);

        let mut writer = JsonWriter::new(Vec::new());
        writer.write(&hashtags).unwrap();
        let json = String::from_utf8(writer.into_inner()).unwrap();

        let expected = r#"{
  "café": {
    "docs": [
      "doc1"
    ],
    "sents": [
      "Le café brûle."
    ]
  },
  "brûler": {
    "docs": [
      "doc1"
    ],
    "sents": [
      "Le café brûle."
    ]
  }
}
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_json_writer_empty() {
        let mut writer = JsonWriter::new(Vec::new());
        writer.write(&Hashtags::default()).unwrap();
        assert_eq!(writer.into_inner(), b"{}\n");
    }

    #[test]
    fn test_json_writer_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut writer = JsonWriter::create(&path).unwrap();
        writer.write(&Hashtags::default()).unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}\n");
    }
}
