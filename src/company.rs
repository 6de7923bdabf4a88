//! Company identity lookups (name / ticker → CIK).
//!
//! The SEC publishes `company_tickers.json`, a JSON object whose values look like
//! `{"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}`. [`CompanyIndex`]
//! loads that feed once and answers case-insensitive lookups by company name or
//! ticker for the rest of the process lifetime.
//!
//! Most users will start with `edgar.company_index().await?` and then call
//! `resolve_by_ticker("AAPL")` to obtain the CIK needed by the filing operations.

use super::CompanyOperations;
use super::Edgar;
use super::cik::Cik;
use super::error::{EdgarError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One entry of the company reference feed, as published by the SEC.
///
/// `ticker` and `title` are optional here because the feed occasionally carries
/// incomplete entries; those are dropped when the [`CompanyIndex`] is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompanyTicker {
    #[serde(rename = "cik_str", deserialize_with = "deserialize_cik")]
    pub cik: u64,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A company that has both a name and a ticker in the reference feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    pub cik: u64,
    pub ticker: String,
    pub name: String,
}

impl CompanyRecord {
    pub fn cik(&self) -> Cik {
        Cik::new(self.cik)
    }
}

/// In-memory lookup tables built from the company reference feed.
///
/// Records are keyed by CIK; the name and ticker tables map lowercased keys to a
/// CIK. The index is read-only after construction, so a shared reference can be
/// used from any number of tasks.
///
/// When two entries share a lowercased name or ticker, the one appearing later in
/// the feed wins.
#[derive(Debug, Clone, Default)]
pub struct CompanyIndex {
    records: HashMap<u64, CompanyRecord>,
    by_name: HashMap<String, u64>,
    by_ticker: HashMap<String, u64>,
}

impl CompanyIndex {
    /// Fetches the feed at `url` and builds the index.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status or malformed body is returned as a
    /// fetch error. There is no partial index.
    pub async fn load(edgar: &Edgar, url: &str) -> Result<Self> {
        let body = edgar.get(url).await?;
        Self::parse(&body)
    }

    /// Parses a `company_tickers.json` body.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::from_entries(parse_entries(content)?))
    }

    /// Builds the index from feed entries, skipping those without a name or ticker.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CompanyTicker>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for entry in entries {
            let (Some(ticker), Some(name)) = (non_empty(entry.ticker), non_empty(entry.title))
            else {
                skipped += 1;
                continue;
            };

            index.by_name.insert(name.to_lowercase(), entry.cik);
            index.by_ticker.insert(ticker.to_lowercase(), entry.cik);
            index.records.insert(
                entry.cik,
                CompanyRecord {
                    cik: entry.cik,
                    ticker,
                    name,
                },
            );
        }

        tracing::debug!(
            "Built company index: {} records, {} names, {} tickers, {} entries skipped",
            index.records.len(),
            index.by_name.len(),
            index.by_ticker.len(),
            skipped
        );

        index
    }

    /// Looks up a company by its exact name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::CompanyNotFound` when no company carries that name.
    pub fn resolve_by_name(&self, name: &str) -> Result<&CompanyRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .and_then(|cik| self.records.get(cik))
            .ok_or_else(|| {
                tracing::debug!("Company name not in index: {}", name);
                EdgarError::CompanyNotFound(name.to_string())
            })
    }

    /// Looks up a company by ticker symbol, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::TickerNotFound` when no company carries that ticker.
    pub fn resolve_by_ticker(&self, ticker: &str) -> Result<&CompanyRecord> {
        self.by_ticker
            .get(&ticker.to_lowercase())
            .and_then(|cik| self.records.get(cik))
            .ok_or_else(|| {
                tracing::debug!("Ticker not in index: {}", ticker);
                EdgarError::TickerNotFound(ticker.to_string())
            })
    }

    /// Tries `query` as a ticker first, then as a company name.
    pub fn resolve(&self, query: &str) -> Result<&CompanyRecord> {
        self.resolve_by_ticker(query)
            .or_else(|_| self.resolve_by_name(query))
            .map_err(|_| EdgarError::CompanyNotFound(query.to_string()))
    }

    pub fn get(&self, cik: u64) -> Option<&CompanyRecord> {
        self.records.get(&cik)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.records.values()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Feed entries in the order they appear in the document.
fn parse_entries(content: &str) -> Result<Vec<CompanyTicker>> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
    map.into_iter()
        .map(|(_, value)| serde_json::from_value::<CompanyTicker>(value).map_err(EdgarError::from))
        .collect()
}

impl Edgar {
    fn company_tickers_url(&self) -> String {
        format!("{}/company_tickers.json", self.edgar_files_url)
    }
}

/// `cik_str` is an integer in the live feed, but some mirrors serialize it as a
/// digit string.
fn deserialize_cik<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCik {
        Number(u64),
        Text(String),
    }

    match RawCik::deserialize(deserializer)? {
        RawCik::Number(n) => Ok(n),
        RawCik::Text(s) => s
            .parse::<Cik>()
            .map(u64::from)
            .map_err(serde::de::Error::custom),
    }
}

/// Company lookups backed by the SEC's `company_tickers.json` feed.
///
/// # Examples
///
/// ```ignore
/// # use edgar_lookup::{Edgar, CompanyOperations};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let edgar = Edgar::new("MyApp contact@example.com")?;
/// let index = edgar.company_index().await?;
/// let apple = index.resolve_by_ticker("aapl")?;
/// assert_eq!(apple.cik, 320193);
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl CompanyOperations for Edgar {
    /// Retrieves the raw entries of the company reference feed.
    ///
    /// Entries are returned in feed order, including incomplete ones.
    async fn company_tickers(&self) -> Result<Vec<CompanyTicker>> {
        let response = self.get(&self.company_tickers_url()).await?;
        parse_entries(&response)
    }

    /// Loads the company index from the configured files host.
    async fn company_index(&self) -> Result<CompanyIndex> {
        CompanyIndex::load(self, &self.company_tickers_url()).await
    }

    /// Loads the company index from an explicit feed URL.
    async fn company_index_from(&self, url: &str) -> Result<CompanyIndex> {
        CompanyIndex::load(self, url).await
    }
}
