//! tillroll-feeds — source acquisition for tillroll.
//!
//! Each source is fetched to completion and handed to the core as one
//! immutable text buffer; the core never performs I/O itself. Files are read
//! via `tokio::fs`, URLs over plain HTTP via `hyper`. A per-source failure is
//! a value ([`FeedError`]) the orchestrator can isolate or abort on — there
//! are no retries here.

pub mod file;
pub mod http;

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Where a log buffer comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Local path, read in one shot.
    File(PathBuf),
    /// `http://` URL, fetched with a single GET.
    Url(hyper::Uri),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(uri) => write!(f, "{uri}"),
        }
    }
}

impl FromStr for Source {
    type Err = FeedError;

    /// Anything starting with `http://` is a URL; everything else is a path.
    /// `https://` is rejected up front — TLS stays out of this crate.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.starts_with("https://") {
            return Err(FeedError::UnsupportedScheme { input: raw.to_string() });
        }
        if raw.starts_with("http://") {
            let uri: hyper::Uri = raw
                .parse()
                .map_err(|_| FeedError::InvalidUrl { input: raw.to_string() })?;
            return Ok(Source::Url(uri));
        }
        Ok(Source::File(PathBuf::from(raw)))
    }
}

/// Acquisition failure for one source.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("read {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("fetch {uri}: {err}")]
    Http {
        uri: String,
        #[source]
        err: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("fetch {uri}: server answered {status}")]
    Status {
        uri: String,
        status: hyper::StatusCode,
    },
    #[error("not a usable URL: {input}")]
    InvalidUrl { input: String },
    #[error("https is not supported; mirror {input} over plain http or download it first")]
    UnsupportedScheme { input: String },
}

/// Fetch a source to completion, yielding its content as lossy UTF-8 text.
pub async fn acquire(source: &Source) -> Result<String, FeedError> {
    match source {
        Source::File(path) => file::read(path).await,
        Source::Url(uri) => http::fetch(uri).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_urls_are_told_apart() {
        assert!(matches!(
            "logs/front-1.log".parse::<Source>(),
            Ok(Source::File(_)),
        ));
        assert!(matches!(
            "http://logs.internal/front-1.log".parse::<Source>(),
            Ok(Source::Url(_)),
        ));
    }

    #[test]
    fn https_is_rejected_up_front() {
        assert!(matches!(
            "https://logs.internal/front-1.log".parse::<Source>(),
            Err(FeedError::UnsupportedScheme { .. }),
        ));
    }
}
