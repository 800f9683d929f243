use crate::errors::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MIN_LEN: usize = 2;
pub const DEFAULT_WORDS_PATH: &str = "./words.txt";
pub const DEFAULT_WORDS_URL: &str = "http://norvig.com/ngrams/word.list";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which split points the decomposition search tries for a word of length `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBounds {
    /// `min_len..len - min_len`: a suffix of exactly `min_len` is never tried.
    #[default]
    Reference,
    /// `min_len..=len - min_len`
    Inclusive,
}

/// Search parameters. `min_len` is always at least 1; `new` is the only way to pick it.
///
/// ```compile_fail
/// use compound_finder::{SearchConfig, SplitBounds};
/// let config = SearchConfig { min_len: 0, split_bounds: SplitBounds::Reference };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    min_len: usize,
    split_bounds: SplitBounds,
}

impl SearchConfig {
    pub fn new(min_len: usize) -> Result<Self, ConfigError> {
        if min_len == 0 {
            return Err(ConfigError::MinLenZero);
        }
        Ok(Self {
            min_len,
            split_bounds: SplitBounds::Reference,
        })
    }

    #[must_use]
    pub fn with_split_bounds(mut self, split_bounds: SplitBounds) -> Self {
        self.split_bounds = split_bounds;
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn split_bounds(&self) -> SplitBounds {
        self.split_bounds
    }

    /// Last split index to try (exclusive) for a word of `len` chars.
    pub(crate) fn split_end(&self, len: usize) -> usize {
        let end = len.saturating_sub(self.min_len);
        match self.split_bounds {
            SplitBounds::Reference => end,
            SplitBounds::Inclusive => end + 1,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            split_bounds: SplitBounds::Reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Local { path: PathBuf },
    Remote { url: String, timeout: Option<Duration> },
}

impl WordSource {
    pub fn local<P: Into<PathBuf>>(path: P) -> Self {
        WordSource::Local { path: path.into() }
    }

    pub fn remote<S: Into<String>>(url: S) -> Self {
        WordSource::Remote {
            url: url.into(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl Default for WordSource {
    fn default() -> Self {
        WordSource::local(DEFAULT_WORDS_PATH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSeparator {
    #[default]
    Crlf,
    Lf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Crlf => "\r\n",
            LineSeparator::Lf => "\n",
        }
    }
}
