//! Trait definitions organizing EDGAR operations by feature area.
//!
//! Company identity lookups and filing lookups are separate traits, each
//! implemented by the `Edgar` client when its feature is enabled. Users normally
//! call the methods on `Edgar` directly; the traits also let tests substitute
//! their own implementations.

#[cfg(feature = "company")]
use super::company::{CompanyIndex, CompanyTicker};
use super::error::Result;
#[cfg(feature = "filings")]
use super::{
    cik::Cik,
    filings::{FilingPeriod, FilingRecord, FilingReference, Submission},
};
#[cfg(feature = "text")]
use super::text::TextConverter;
use async_trait::async_trait;

/// Operations for resolving companies to their Central Index Key.
///
/// The SEC's `company_tickers.json` feed maps every listed company to a CIK. The
/// index built from it is immutable, so load it once and share it.
#[cfg(feature = "company")]
#[async_trait]
pub trait CompanyOperations {
    /// Retrieves the raw entries of the company reference feed.
    async fn company_tickers(&self) -> Result<Vec<CompanyTicker>>;
    /// Loads the company index from the configured files host.
    async fn company_index(&self) -> Result<CompanyIndex>;
    /// Loads the company index from an explicit feed URL.
    async fn company_index_from(&self, url: &str) -> Result<CompanyIndex>;
}

/// Operations for locating a company's periodic filings.
///
/// All lookups read the `filings.recent` block of the submissions API and return
/// the first record, in the order the SEC lists them, that matches.
#[cfg(feature = "filings")]
#[async_trait]
pub trait FilingOperations {
    /// Retrieves the submissions document for a company.
    async fn submissions(&self, cik: Cik) -> Result<Submission>;
    /// Retrieves the recent filing history as records.
    async fn recent_filings(&self, cik: Cik) -> Result<Vec<FilingRecord>>;
    /// Finds the first recent filing matching a reporting period.
    async fn find_filing(&self, cik: Cik, period: FilingPeriod) -> Result<FilingReference>;
    /// Finds the first 10-K filed in `year`.
    async fn find_annual_filing(&self, cik: Cik, year: i32) -> Result<FilingReference>;
    /// Finds the first 10-Q filed in `year` during fiscal `quarter` (1-4).
    async fn find_quarterly_filing(
        &self,
        cik: Cik,
        year: i32,
        quarter: u32,
    ) -> Result<FilingReference>;
    /// Downloads a filing document and converts it with a caller-supplied converter.
    #[cfg(feature = "text")]
    async fn fetch_filing_text_with(
        &self,
        document_url: &str,
        converter: &dyn TextConverter,
    ) -> Result<String>;
    /// Downloads a filing document and converts it to plain text.
    #[cfg(feature = "text")]
    async fn fetch_filing_text(&self, document_url: &str) -> Result<String>;
    /// Downloads and converts the primary document of a located filing.
    #[cfg(feature = "text")]
    async fn filing_text(&self, filing: &FilingReference) -> Result<String>;
}
