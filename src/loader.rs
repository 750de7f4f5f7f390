//! Loading the data document.
//!
//! The page is described by one JSON document, fetched exactly once at
//! startup from either an http(s) URL or a local file. There is no retry,
//! no fallback source, and no re-fetch while the server runs: a failure
//! here leaves the page in its bare skeleton state.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::constants::FETCH_TIMEOUT_SECS;
use crate::models::SiteData;

/// Why a load failed. Mirrors the failure taxonomy the caller logs:
/// network error, non-success status, unreadable file, malformed body,
/// or a body missing the one required invariant (at least one engine).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("data document defines no search engines")]
    NoEngines,
}

/// Where the data document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// Classify a config string: anything with an http(s) scheme is a URL,
    /// everything else is a file path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Url(source.to_string())
        } else {
            DataSource::File(PathBuf::from(source))
        }
    }

    /// Load and validate the data document.
    pub async fn load(&self) -> Result<SiteData, LoadError> {
        let body = match self {
            DataSource::Url(url) => fetch(url).await?,
            DataSource::File(path) => read_file(path)?,
        };
        parse_site_data(&body)
    }
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(resp.text().await?)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a document body and check the required fields.
pub fn parse_site_data(body: &str) -> Result<SiteData, LoadError> {
    let data: SiteData = serde_json::from_str(body)?;
    if data.search.engines.is_empty() {
        return Err(LoadError::NoEngines);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// A complete, well-formed data document exercising both display modes.
    pub(crate) fn sample_document() -> &'static str {
        r##"{
            "search": {
                "engines": [
                    {"name": "Google", "url": "https://google.com/search?q=", "param": "q"},
                    {"name": "Bing", "url": "https://bing.com/search?q=", "param": "q"}
                ],
                "quickLinks": [
                    {"url": "https://mail.example.com", "icon": "img/mail.png", "title": "Mail"}
                ]
            },
            "categories": [
                {
                    "id": "ai",
                    "navTitle": "AI",
                    "icon": "ri-robot-line",
                    "sectionTitle": "AI Tools",
                    "titleColor": "#8b5cf6",
                    "items": [
                        {"url": "https://chat.example.com", "title": "Chat", "icon": "img/chat.png"}
                    ]
                },
                {
                    "id": "tools",
                    "navTitle": "Tools",
                    "icon": "ri-tools-line",
                    "sectionTitle": "Toolbox",
                    "titleColor": "#f59e0b",
                    "groups": [
                        {
                            "name": "Dev",
                            "isOpen": true,
                            "items": [
                                {"url": "https://github.com", "title": "GitHub", "iconSymbol": "ri-github-fill", "iconColor": "#fff"}
                            ]
                        }
                    ]
                }
            ]
        }"##
    }

    #[test]
    fn parse_full_document() {
        let data = parse_site_data(sample_document()).expect("Should parse");
        assert_eq!(data.search.engines.len(), 2);
        assert_eq!(data.search.engines[0].name, "Google");
        assert_eq!(data.search.quick_links.len(), 1);
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.categories[1].id, "tools");
    }

    #[test]
    fn missing_categories_defaults_to_empty() {
        let data = parse_site_data(
            r#"{"search": {"engines": [{"name": "G", "url": "https://g.co/s?q=", "param": "q"}]}}"#,
        )
        .expect("Should parse");
        assert!(data.categories.is_empty());
    }

    #[test]
    fn empty_engines_is_rejected() {
        let err = parse_site_data(r#"{"search": {"engines": []}, "categories": []}"#)
            .expect_err("Should reject");
        assert!(matches!(err, LoadError::NoEngines));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = parse_site_data("not json").expect_err("Should reject");
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn source_classification() {
        assert_eq!(
            DataSource::parse("https://example.com/data.json"),
            DataSource::Url("https://example.com/data.json".to_string())
        );
        assert_eq!(
            DataSource::parse("data.json"),
            DataSource::File(PathBuf::from("data.json"))
        );
    }

    #[tokio::test]
    async fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        file.write_all(sample_document().as_bytes())
            .expect("Should write");
        let source = DataSource::File(file.path().to_path_buf());
        let data = source.load().await.expect("Should load");
        assert_eq!(data.search.engines[0].param, "q");
    }

    #[tokio::test]
    async fn load_from_missing_file_is_an_io_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/homeport-data.json"));
        let err = source.load().await.expect_err("Should fail");
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
