//! # edgar-lookup - company and periodic filing lookups for SEC EDGAR
//!
//! Resolve a company by name or ticker to its Central Index Key (CIK), then locate
//! its annual (10-K) or quarterly (10-Q) report for a given year, and optionally
//! download the report as readable text.
//!
//! ## Features
//!
//! - **Company index** - case-insensitive name and ticker lookups built from the
//!   SEC's `company_tickers.json`
//! - **Filing lookups** - first 10-K of a year or first 10-Q of a fiscal quarter from
//!   a company's recent submissions
//! - **Text conversion** - fetch a filing's primary document and turn its HTML into text
//!
//! Every request carries the identifying `User-Agent` required by the SEC's fair
//! access policy. Requests are made one at a time with no retries.
//!
//! ## Basic Usage
//!
//! ```ignore
//! use edgar_lookup::{CompanyOperations, Edgar, FilingOperations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize with a proper user agent (required by SEC.gov)
//!     let edgar = Edgar::new("YourAppName contact@example.com")?;
//!
//!     let index = edgar.company_index().await?;
//!     let apple = index.resolve_by_ticker("AAPL")?;
//!
//!     let filing = edgar.find_annual_filing(apple.cik(), 2024).await?;
//!     println!("{} filed {}: {}", filing.form, filing.filing_date, filing.document_url);
//!
//!     Ok(())
//! }
//! ```

mod cik;
mod config;
mod core;
mod error;

#[cfg(any(feature = "company", feature = "filings"))]
mod traits;

#[cfg(feature = "company")]
mod company;
#[cfg(feature = "filings")]
mod filings;
#[cfg(feature = "text")]
mod text;

pub use cik::{CIK_WIDTH, Cik, accession_path_segment, strip_padding};
pub use config::{EdgarConfig, EdgarUrls};
pub use self::core::Edgar;
pub use error::{EdgarError, ErrorKind, Result};

#[cfg(feature = "company")]
pub use company::{CompanyIndex, CompanyRecord, CompanyTicker};
#[cfg(feature = "filings")]
pub use filings::{
    ANNUAL_FORM, FilingPeriod, FilingRecord, FilingReference, FilingsData, QUARTERLY_FORM,
    Quarter, RecentFilings, Submission,
};
#[cfg(feature = "text")]
pub use text::{HtmlTextConverter, TextConverter};

#[cfg(feature = "company")]
pub use traits::CompanyOperations;
#[cfg(feature = "filings")]
pub use traits::FilingOperations;

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
