use std::{fs, path::Path};

use tempfile::TempDir;

pub(crate) fn get_test_corpus() -> Vec<(String, String)> {
    [
        "The quick brown fox jumps over the lazy dog.",
        "The quick brown fox.",
        "The lazy dog lies in the sun.",
        "Foxes jump over lazy dogs.",
        "A fast brown fox leaps over lazy hounds.",
        "The sun shines on the lazy dog.",
        "The fox and the hound.",
        "Clever foxes evade the lazy dogs.",
    ]
    .iter()
    .enumerate()
    .map(|(index, document)| (format!("doc{index}"), document.to_string()))
    .collect::<Vec<_>>()
}

/// Temporary directory with one `<id>.txt` file per document.
pub(crate) fn write_corpus<S: AsRef<str>>(documents: &[(S, S)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    documents.iter().for_each(|(id, text)| {
        write_document(dir.path(), &format!("{}.txt", id.as_ref()), text.as_ref().as_bytes())
    });
    dir
}

pub(crate) fn write_document(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}
