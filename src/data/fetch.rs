use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use super::model::Portfolio;
use super::parser::parse_csv;

// ---------------------------------------------------------------------------
// Source resolution
// ---------------------------------------------------------------------------

/// Where the portfolio CSV comes from. The settings field is a single
/// string; anything with an http(s) scheme is fetched over the network,
/// everything else is read as a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn parse(csv_url: &str) -> Source {
        let trimmed = csv_url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Source::Url(trimmed.to_string())
        } else {
            Source::File(PathBuf::from(trimmed))
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("source returned no data")]
    Empty,
}

// ---------------------------------------------------------------------------
// Worker-thread fetch
// ---------------------------------------------------------------------------

/// Result of one fetch cycle, tagged with the generation that requested
/// it so stale responses can be discarded by the receiver.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Portfolio, FetchError>,
}

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and parse the CSV on a worker thread; the outcome comes back
/// over `tx`. The UI thread never blocks on I/O.
pub fn spawn_fetch(source: Source, generation: u64, tx: Sender<FetchOutcome>) {
    thread::spawn(move || {
        log::info!("Fetch #{generation} from {source:?}");
        let result = fetch_portfolio(&source);
        if let Err(e) = &result {
            log::error!("Fetch #{generation} failed: {e}");
        }
        // The receiver may be gone if the app is shutting down.
        let _ = tx.send(FetchOutcome { generation, result });
    });
}

fn fetch_portfolio(source: &Source) -> Result<Portfolio, FetchError> {
    let text = fetch_text(source)?;
    if text.trim().is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(parse_csv(&text))
}

fn fetch_text(source: &Source) -> Result<String, FetchError> {
    match source {
        Source::Url(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()?;
            // ask intermediaries not to serve a cached copy
            let text = client
                .get(url)
                .header(reqwest::header::CACHE_CONTROL, "no-cache")
                .send()?
                .error_for_status()?
                .text()?;
            Ok(text)
        }
        Source::File(path) => std::fs::read_to_string(path).map_err(|source| FetchError::Io {
            path: path.clone(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_resolve_to_url() {
        assert_eq!(
            Source::parse("https://example.com/p.csv"),
            Source::Url("https://example.com/p.csv".to_string())
        );
        assert_eq!(
            Source::parse("  http://host/data.csv  "),
            Source::Url("http://host/data.csv".to_string())
        );
    }

    #[test]
    fn anything_else_resolves_to_file() {
        assert_eq!(
            Source::parse("dummy_data.csv"),
            Source::File(PathBuf::from("dummy_data.csv"))
        );
        assert_eq!(
            Source::parse("/srv/data/portfolio.csv"),
            Source::File(PathBuf::from("/srv/data/portfolio.csv"))
        );
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = fetch_portfolio(&Source::File(PathBuf::from("/nonexistent/p.csv")))
            .unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let path = std::env::temp_dir().join("folio-dash-test-empty.csv");
        std::fs::write(&path, "  \n ").unwrap();
        let err = fetch_portfolio(&Source::File(path.clone())).unwrap_err();
        assert!(matches!(err, FetchError::Empty));
        let _ = std::fs::remove_file(path);
    }
}
