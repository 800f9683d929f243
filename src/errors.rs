use std::path::PathBuf;

/// Failure to obtain the raw word-list text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read word list at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("{url} responded with {status}")]
    Status { url: String, status: String },
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum length must be at least 1")]
    MinLenZero,
}
