//=========================================================================
// Word Corpus
//=========================================================================
//
// Whitespace-delimited word list loaded once at startup. A missing or
// empty corpus is fatal; there is no built-in fallback list.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::info;

//=== Internal Dependencies ===============================================

use crate::error::CorpusError;

//=== WordCorpus ==========================================================

/// Non-empty list of words in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Reads and splits the corpus file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::parse(&text).ok_or_else(|| CorpusError::Empty {
            path: path.to_path_buf(),
        })?;

        info!("Loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Splits `text` on any whitespace. Returns `None` if it has no words.
    pub fn parse(text: &str) -> Option<Self> {
        Self::from_words(text.split_whitespace().map(str::to_owned))
    }

    /// Builds a corpus from owned words. Returns `None` if empty.
    pub fn from_words<I>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let words: Vec<String> = words.into_iter().collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn into_words(self) -> Vec<String> {
        self.words
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn parse_splits_on_any_whitespace() {
        let corpus = WordCorpus::parse("alpha beta\n\tgamma\r\ndelta  ").unwrap();
        assert_eq!(corpus.words(), ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn parse_rejects_blank_text() {
        assert!(WordCorpus::parse("  \n\t ").is_none());
        assert!(WordCorpus::from_words(Vec::new()).is_none());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.txt");

        let err = WordCorpus::load(&path).unwrap_err();
        match err {
            CorpusError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn load_empty_file_is_empty_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("empty.txt");
        fs::File::create(&path).unwrap();

        let err = WordCorpus::load(&path).unwrap_err();
        assert!(matches!(err, CorpusError::Empty { .. }));
    }

    #[test]
    fn load_reads_words() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "one\ntwo three").unwrap();
        file.flush().unwrap();

        let corpus = WordCorpus::load(file.path()).unwrap();
        assert_eq!(corpus.words(), ["one", "two", "three"]);
    }

    #[test]
    fn bundled_corpus_fills_a_session() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/words.txt");
        let corpus = WordCorpus::load(path).unwrap();
        assert!(corpus.len() > 1001);
    }
}
