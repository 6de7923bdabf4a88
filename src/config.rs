use std::time::Duration;

/// Configuration for the Edgar client
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// User agent string sent with every request (SEC fair access contact)
    pub user_agent: String,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
    /// Base URLs for the EDGAR hosts
    pub base_urls: EdgarUrls,
}

/// Base URLs for the EDGAR hosts used by this crate
#[derive(Debug, Clone)]
pub struct EdgarUrls {
    /// Host serving `/Archives/edgar/data/...` filing documents
    pub archives: String,
    /// Host serving the `/submissions/CIK##########.json` API
    pub data: String,
    /// Base URL for static SEC files such as `company_tickers.json`
    pub files: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: "edgar_lookup/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        }
    }
}

impl EdgarConfig {
    /// Creates a new EdgarConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use edgar_lookup::{Edgar, EdgarConfig};
    /// use std::time::Duration;
    ///
    /// let config = EdgarConfig::new("YourAppName contact@example.com", Duration::from_secs(30), None);
    /// let edgar = Edgar::with_config(config)?;
    /// # Ok::<(), edgar_lookup::EdgarError>(())
    /// ```
    pub fn new(
        user_agent: impl Into<String>,
        timeout: Duration,
        base_urls: Option<EdgarUrls>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
            base_urls: base_urls.unwrap_or_default(),
        }
    }
}

impl EdgarUrls {
    /// Points every host at a single base URL. Handy for mock servers.
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            archives: base.clone(),
            data: base.clone(),
            files: format!("{}/files", base),
        }
    }
}

impl Default for EdgarUrls {
    fn default() -> Self {
        Self {
            archives: "https://www.sec.gov".to_string(),
            data: "https://data.sec.gov".to_string(),
            files: "https://www.sec.gov/files".to_string(),
        }
    }
}
