use crate::config::{
    DEFAULT_MIN_LEN, DEFAULT_TIMEOUT, DEFAULT_WORDS_PATH, DEFAULT_WORDS_URL, LineSeparator,
    SearchConfig, SplitBounds, WordSource,
};
use crate::errors::ConfigError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Local,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeparatorArg {
    Crlf,
    Lf,
}

impl From<SeparatorArg> for LineSeparator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Crlf => LineSeparator::Crlf,
            SeparatorArg::Lf => LineSeparator::Lf,
        }
    }
}

/// Find the longest word in a list that is made of other words from the list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the word list file
    #[arg(short = 'i', long = "input", default_value = DEFAULT_WORDS_PATH)]
    pub input: PathBuf,

    /// Where to read the word list from
    #[arg(short = 's', long = "source", value_enum, default_value_t = SourceKind::Local)]
    pub source: SourceKind,

    /// URL fetched when the source is remote
    #[arg(long = "url", default_value = DEFAULT_WORDS_URL)]
    pub url: String,

    /// Remote fetch timeout in seconds
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Minimum length of every fragment
    #[arg(short = 'm', long = "min-len", default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Line separator of the word list
    #[arg(long = "separator", value_enum, default_value_t = SeparatorArg::Crlf)]
    pub separator: SeparatorArg,

    /// Also try splits that leave a suffix of exactly `min-len` characters
    #[arg(long = "inclusive-splits")]
    pub inclusive_splits: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let bounds = if self.inclusive_splits {
            SplitBounds::Inclusive
        } else {
            SplitBounds::Reference
        };
        Ok(SearchConfig::new(self.min_len)?.with_split_bounds(bounds))
    }

    pub fn word_source(&self) -> WordSource {
        match self.source {
            SourceKind::Local => WordSource::local(&self.input),
            SourceKind::Remote => WordSource::Remote {
                url: self.url.clone(),
                timeout: Some(Duration::from_secs(self.timeout_secs)),
            },
        }
    }

    pub fn line_separator(&self) -> LineSeparator {
        self.separator.into()
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
