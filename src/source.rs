//! Where a swagger document comes from: a local file, stdin or a URL.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:[a-z]+:)?//").expect("valid URL pattern"));

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Stdin,
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Accept invalid TLS certificates.
    pub insecure: bool,
}

impl SchemaSource {
    /// Interpret a `--path` argument. `-` is stdin, anything that looks like
    /// `scheme://` or `//host` is a URL, everything else a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            SchemaSource::Stdin
        } else if URL_PATTERN.is_match(arg) {
            SchemaSource::Url(arg.to_string())
        } else {
            SchemaSource::File(PathBuf::from(arg))
        }
    }

    pub fn read(&self, options: FetchOptions) -> Result<String, SourceError> {
        match self {
            SchemaSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|source| SourceError::Io {
                        path: "<stdin>".to_string(),
                        source,
                    })?;
                Ok(buffer)
            }
            SchemaSource::File(path) => {
                debug!(path = %path.display(), "reading swagger document");
                fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
            SchemaSource::Url(url) => fetch(url, options),
        }
    }
}

fn fetch(url: &str, options: FetchOptions) -> Result<String, SourceError> {
    debug!(url, insecure = options.insecure, "fetching swagger document");
    let fetch_error = |source: reqwest::Error| SourceError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(options.insecure)
        .build()
        .map_err(fetch_error)?;

    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(fetch_error)
}
