use std::collections::HashSet;
use std::path::{Path, PathBuf};
use ::stop_words::{get, LANGUAGE};
use thiserror::Error;

/// Errors raised while loading an additional stop-word list at startup
#[derive(Debug, Error)]
pub enum StopWordsError {
    #[error("Failed to read stop-word file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stop-word file {0} contains no words")]
    Empty(PathBuf),
}

/// Immutable stop-word set, built once at process start and shared read-only
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The NLTK English corpus from the `stop-words` crate
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// English corpus extended with additional words
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::english();
        stop_words.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        stop_words
    }

    /// English corpus extended with the words of a newline-separated file.
    ///
    /// Lines starting with `#` are ignored.
    pub fn load_extra<P: AsRef<Path>>(path: P) -> Result<Self, StopWordsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StopWordsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extra: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if extra.is_empty() {
            return Err(StopWordsError::Empty(path.to_path_buf()));
        }

        tracing::info!("Loaded {} extra stop-words from {}", extra.len(), path.display());

        Ok(Self::with_extra(extra))
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
