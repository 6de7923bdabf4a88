use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use super::config::{EdgarConfig, EdgarUrls};
use super::error::{EdgarError, Result};

/// Number of characters of an unexpected body kept in error messages.
const PREVIEW_CHARS: usize = 200;

/// HTTP client for the SEC EDGAR public data set.
///
/// `Edgar` is the entry point for every operation in this crate. It owns a single
/// `reqwest::Client` configured with the identifying `User-Agent` header that SEC.gov
/// requires from automated clients, plus a uniform request timeout. Unidentified
/// clients are rejected or throttled by the SEC, so the user agent is mandatory.
///
/// Each call issues exactly one request. There is no retry, backoff or client-side
/// rate limiting: a timeout is treated like any other transport failure and surfaces
/// as an [`EdgarError`] classified as a fetch error.
///
/// # Examples
///
/// Basic client initialization:
///
/// ```rust
/// # use edgar_lookup::Edgar;
/// let edgar = Edgar::new("my_app/1.0 (my@email.com)")?;
/// # Ok::<(), edgar_lookup::EdgarError>(())
/// ```
///
/// With custom configuration:
///
/// ```rust
/// # use edgar_lookup::{Edgar, EdgarConfig, EdgarUrls};
/// # use std::time::Duration;
/// let config = EdgarConfig {
///     user_agent: "custom_app/2.0 (ops@example.com)".to_string(),
///     timeout: Duration::from_secs(60),
///     base_urls: EdgarUrls::default(),
/// };
/// let edgar = Edgar::with_config(config)?;
/// # Ok::<(), edgar_lookup::EdgarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Edgar {
    /// HTTP client carrying the identifying headers
    pub(crate) client: reqwest::Client,

    /// Host for archived filing documents
    pub(crate) edgar_archives_url: String,

    /// Host for the submissions API
    pub(crate) edgar_data_url: String,

    /// Base URL for static SEC files
    pub(crate) edgar_files_url: String,
}

impl Edgar {
    /// Creates a new Edgar client with sensible defaults.
    ///
    /// The client uses a 30-second timeout and the standard SEC.gov hosts. The user
    /// agent you provide is sent with every request, following the format
    /// "AppName contact@email.com".
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is empty or is not a valid
    /// header value.
    pub fn new(user_agent: &str) -> Result<Self> {
        let config = EdgarConfig {
            user_agent: user_agent.to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        };
        Self::with_config(config)
    }

    /// Creates an Edgar client with custom configuration settings.
    ///
    /// Use this constructor to change the timeout or to point the client at a mock
    /// server in tests.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is empty or malformed, the
    /// timeout is zero, or the HTTP client cannot be built.
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        if config.user_agent.trim().is_empty() {
            return Err(EdgarError::ConfigError(
                "User agent must not be empty".to_string(),
            ));
        }
        if config.timeout.is_zero() {
            return Err(EdgarError::ConfigError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| EdgarError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EdgarError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Edgar {
            client,
            edgar_archives_url: config.base_urls.archives,
            edgar_data_url: config.base_urls.data,
            edgar_files_url: config.base_urls.files,
        })
    }

    /// Fetches text content from a URL.
    ///
    /// One GET is issued. A `2xx` status returns the body. Anything else becomes
    /// `EdgarError::HttpStatus`, and transport failures (including timeouts) become
    /// `EdgarError::RequestError`.
    ///
    /// # Content-Type Validation
    ///
    /// For URLs ending in `.json`, an HTML body usually means the SEC served an error
    /// or block page. The SEC also labels some genuine JSON as `text/html`, so the body
    /// is inspected: JSON-looking content is accepted with a warning, HTML is rejected
    /// with `EdgarError::UnexpectedContentType`.
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(EdgarError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .map(str::to_lowercase);
        let body = response.text().await?;

        if url.ends_with(".json") {
            if let Some(ct) = content_type.filter(|ct| ct.contains("text/html")) {
                if !looks_like_json(&body) {
                    return Err(EdgarError::UnexpectedContentType {
                        url: url.to_string(),
                        expected: "application/json".to_string(),
                        got_content_type: ct,
                        content_preview: body.chars().take(PREVIEW_CHARS).collect(),
                    });
                }
                tracing::warn!(
                    "Received text/html content-type for .json URL, but content appears to be JSON: {}",
                    url
                );
            }
        }

        Ok(body)
    }

    /// Returns the host used for archived filing documents.
    pub fn archives_url(&self) -> &str {
        &self.edgar_archives_url
    }

    /// Returns the host used for the submissions API.
    pub fn data_url(&self) -> &str {
        &self.edgar_data_url
    }

    /// Returns the base URL for static SEC files.
    pub fn files_url(&self) -> &str {
        &self.edgar_files_url
    }
}

fn looks_like_json(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}
