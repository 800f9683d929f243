use crate::config::WordSource;
use crate::errors::SourceError;
use log::info;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub fn load(source: &WordSource) -> Result<String, SourceError> {
    match source {
        WordSource::Local { path } => fetch_words_locally(path),
        WordSource::Remote { url, timeout } => fetch_words(url, *timeout),
    }
}

pub fn fetch_words_locally<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
    let path = path.as_ref();
    info!("Reading word list from {}", path.display());
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Blocking GET of `url`. Only 2xx responses are accepted.
pub fn fetch_words(url: &str, timeout: Option<Duration>) -> Result<String, SourceError> {
    info!("Fetching word list from {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(SourceError::Transport)?;
    let response = client.get(url).send().map_err(SourceError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.to_string(),
        });
    }

    let body = response.text().map_err(SourceError::Body)?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}
