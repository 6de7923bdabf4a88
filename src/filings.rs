//! Filing lookups against the submissions API.
//!
//! `https://data.sec.gov/submissions/CIK##########.json` returns a company's recent
//! filing history as parallel arrays (`form[i]`, `filingDate[i]`, ... describe the
//! same filing). This module turns those arrays into [`FilingRecord`]s, filters them
//! for a 10-K in a given year or a 10-Q in a given fiscal quarter, and builds the
//! archive URL of the matching filing's primary document.
//!
//! Only the `filings.recent` block is read. The continuation files listed under
//! `filings.files` (older history) are not followed.

use super::Edgar;
use super::cik::{Cik, accession_path_segment};
use super::error::{EdgarError, Result};
use super::traits::FilingOperations;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "text")]
use super::text::{HtmlTextConverter, TextConverter};

/// Form prefix of annual reports. Also matches amendments such as `10-K/A`.
pub const ANNUAL_FORM: &str = "10-K";
/// Form prefix of quarterly reports. Also matches amendments such as `10-Q/A`.
pub const QUARTERLY_FORM: &str = "10-Q";

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tickers: Vec<String>,
    pub filings: FilingsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilingsData {
    pub recent: RecentFilings,
}

/// The four parallel arrays this crate reads from `filings.recent`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentFilings {
    #[serde(rename = "accessionNumber")]
    pub accession_number: Vec<String>,
    #[serde(rename = "filingDate")]
    pub filing_date: Vec<String>,
    pub form: Vec<String>,
    #[serde(rename = "primaryDocument")]
    pub primary_document: Vec<String>,
}

impl RecentFilings {
    /// Zips the parallel arrays into records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::InvalidResponse` if the arrays differ in length.
    pub fn records(&self) -> Result<Vec<FilingRecord>> {
        let len = self.accession_number.len();
        if self.filing_date.len() != len
            || self.form.len() != len
            || self.primary_document.len() != len
        {
            return Err(EdgarError::InvalidResponse(format!(
                "Parallel filing arrays differ in length: accessionNumber={}, filingDate={}, form={}, primaryDocument={}",
                len,
                self.filing_date.len(),
                self.form.len(),
                self.primary_document.len()
            )));
        }

        Ok((0..len)
            .map(|idx| FilingRecord {
                filing_date: self.filing_date[idx].clone(),
                accession_number: self.accession_number[idx].clone(),
                primary_document: self.primary_document[idx].clone(),
                form: self.form[idx].clone(),
            })
            .collect())
    }
}

/// One filing from the recent history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRecord {
    /// `YYYY-MM-DD`
    pub filing_date: String,
    pub accession_number: String,
    pub primary_document: String,
    pub form: String,
}

impl FilingRecord {
    /// Month of the filing date, or `None` if the date does not parse.
    pub fn filing_month(&self) -> Option<u32> {
        NaiveDate::parse_from_str(&self.filing_date, "%Y-%m-%d")
            .ok()
            .map(|date| date.month())
    }
}

/// Fiscal quarter used by quarterly lookups.
///
/// Q1 covers December through February, so its month set reaches into the previous
/// calendar year. Lookups still require the filing date to start with the requested
/// year, which means a December filing dated `year - 1` never matches Q1 of `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    /// Filing months belonging to this quarter.
    pub const fn months(&self) -> [u32; 3] {
        match self {
            Quarter::Q1 => [12, 1, 2],
            Quarter::Q2 => [3, 4, 5],
            Quarter::Q3 => [6, 7, 8],
            Quarter::Q4 => [9, 10, 11],
        }
    }

    pub fn contains_month(&self, month: u32) -> bool {
        self.months().contains(&month)
    }

    pub const fn as_u32(&self) -> u32 {
        *self as u32
    }
}

impl TryFrom<u32> for Quarter {
    type Error = EdgarError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            other => Err(EdgarError::InvalidQuarter(other)),
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.as_u32())
    }
}

/// The reporting period a filing lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingPeriod {
    /// A 10-K filed in `year`.
    Annual { year: i32 },
    /// A 10-Q filed in `year` during `quarter`'s months.
    Quarterly { year: i32, quarter: Quarter },
}

impl FilingPeriod {
    pub fn annual(year: i32) -> Result<Self> {
        validate_year(year)?;
        Ok(FilingPeriod::Annual { year })
    }

    pub fn quarterly(year: i32, quarter: u32) -> Result<Self> {
        let quarter = Quarter::try_from(quarter)?;
        validate_year(year)?;
        Ok(FilingPeriod::Quarterly { year, quarter })
    }

    pub const fn year(&self) -> i32 {
        match self {
            FilingPeriod::Annual { year } | FilingPeriod::Quarterly { year, .. } => *year,
        }
    }

    pub const fn quarter(&self) -> Option<Quarter> {
        match self {
            FilingPeriod::Annual { .. } => None,
            FilingPeriod::Quarterly { quarter, .. } => Some(*quarter),
        }
    }

    /// Form prefix matched by this period.
    pub const fn form(&self) -> &'static str {
        match self {
            FilingPeriod::Annual { .. } => ANNUAL_FORM,
            FilingPeriod::Quarterly { .. } => QUARTERLY_FORM,
        }
    }

    /// Whether `record` satisfies this period.
    ///
    /// The year test is a prefix match on the filing date text. Quarterly periods
    /// additionally require the parsed filing month to be in the quarter's month set.
    pub fn matches(&self, record: &FilingRecord) -> bool {
        if !record.form.starts_with(self.form()) {
            return false;
        }
        if !record.filing_date.starts_with(&format!("{:04}", self.year())) {
            return false;
        }
        match self {
            FilingPeriod::Annual { .. } => true,
            FilingPeriod::Quarterly { quarter, .. } => record
                .filing_month()
                .is_some_and(|month| quarter.contains_month(month)),
        }
    }

    /// First record, in scan order, that satisfies this period.
    pub fn first_match<'a, I>(&self, records: I) -> Option<&'a FilingRecord>
    where
        I: IntoIterator<Item = &'a FilingRecord>,
    {
        records.into_iter().find(|record| self.matches(record))
    }

    fn not_found(&self, cik: Cik) -> EdgarError {
        EdgarError::FilingNotFound {
            cik: cik.value(),
            form: self.form().to_string(),
            year: self.year(),
            quarter: self.quarter().map(|q| q.as_u32()),
        }
    }
}

fn validate_year(year: i32) -> Result<()> {
    if (1000..=9999).contains(&year) {
        Ok(())
    } else {
        Err(EdgarError::InvalidYear(year))
    }
}

/// Addressable pointer to a filing's primary document in the EDGAR archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingReference {
    pub cik: Cik,
    pub filing_date: String,
    pub accession_number: String,
    pub primary_document: String,
    pub form: String,
    pub document_url: String,
}

impl FilingReference {
    /// Builds the reference for `record`, with the document URL
    /// `{archives}/Archives/edgar/data/{cik}/{accession without hyphens}/{document}`.
    pub fn from_record(cik: Cik, record: &FilingRecord, archives_url: &str) -> Self {
        let document_url = format!(
            "{}/{}",
            folder_url(archives_url, cik, &record.accession_number),
            record.primary_document
        );

        FilingReference {
            cik,
            filing_date: record.filing_date.clone(),
            accession_number: record.accession_number.clone(),
            primary_document: record.primary_document.clone(),
            form: record.form.clone(),
            document_url,
        }
    }

    /// URL of the filing's `-index.htm` page, which lists every document in it.
    pub fn index_url(&self) -> String {
        let folder = self
            .document_url
            .strip_suffix(&self.primary_document)
            .map(|prefix| prefix.trim_end_matches('/'))
            .unwrap_or(&self.document_url);
        format!("{}/{}-index.htm", folder, self.accession_number)
    }
}

fn folder_url(archives_url: &str, cik: Cik, accession_number: &str) -> String {
    format!(
        "{}/Archives/edgar/data/{}/{}",
        archives_url.trim_end_matches('/'),
        cik.unpadded(),
        accession_path_segment(accession_number)
    )
}

impl Edgar {
    fn submission_url(&self, cik: Cik) -> String {
        format!("{}/submissions/CIK{}.json", self.edgar_data_url, cik.padded())
    }
}

/// Filing lookups for the `Edgar` client.
///
/// # Examples
///
/// ```ignore
/// # use edgar_lookup::{Cik, Edgar, FilingOperations};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let edgar = Edgar::new("MyApp contact@example.com")?;
///
/// let annual = edgar.find_annual_filing(Cik::new(320193), 2024).await?;
/// println!("{}", annual.document_url);
///
/// let quarterly = edgar.find_quarterly_filing(Cik::new(320193), 2024, 2).await?;
/// let text = edgar.fetch_filing_text(&quarterly.document_url).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - Fetch errors (`RequestError`, `HttpStatus`, `JsonError`, `InvalidResponse`) when
///   the submissions API or the document host cannot be read
/// - `FilingNotFound` when nothing in the recent history matches
/// - `InvalidQuarter` / `InvalidYear` for out-of-range arguments, raised before any
///   request is made
#[async_trait]
impl FilingOperations for Edgar {
    /// Retrieves and parses the submissions document for `cik`.
    async fn submissions(&self, cik: Cik) -> Result<Submission> {
        let url = self.submission_url(cik);
        let response = self.get(&url).await?;
        Ok(serde_json::from_str::<Submission>(&response)?)
    }

    /// Retrieves the recent filing history for `cik`, in the order the SEC returns it.
    async fn recent_filings(&self, cik: Cik) -> Result<Vec<FilingRecord>> {
        let submission = self.submissions(cik).await?;
        let records = submission.filings.recent.records()?;
        tracing::debug!("CIK {} has {} recent filings", cik, records.len());
        Ok(records)
    }

    /// Finds the first recent filing matching `period`.
    async fn find_filing(&self, cik: Cik, period: FilingPeriod) -> Result<FilingReference> {
        let records = self.recent_filings(cik).await?;
        let record = period.first_match(&records).ok_or_else(|| {
            tracing::debug!("No filing for CIK {} matches {:?}", cik, period);
            period.not_found(cik)
        })?;
        Ok(FilingReference::from_record(
            cik,
            record,
            &self.edgar_archives_url,
        ))
    }

    /// Finds the first 10-K whose filing date falls in `year`.
    async fn find_annual_filing(&self, cik: Cik, year: i32) -> Result<FilingReference> {
        let period = FilingPeriod::annual(year)?;
        self.find_filing(cik, period).await
    }

    /// Finds the first 10-Q filed in `year` during the months of `quarter` (1-4).
    async fn find_quarterly_filing(
        &self,
        cik: Cik,
        year: i32,
        quarter: u32,
    ) -> Result<FilingReference> {
        let period = FilingPeriod::quarterly(year, quarter)?;
        self.find_filing(cik, period).await
    }

    /// Downloads a filing document and converts it with `converter`.
    #[cfg(feature = "text")]
    async fn fetch_filing_text_with(
        &self,
        document_url: &str,
        converter: &dyn TextConverter,
    ) -> Result<String> {
        let html = self.get(document_url).await?;
        Ok(converter.convert(&html))
    }

    /// Downloads a filing document and converts it to plain text.
    #[cfg(feature = "text")]
    async fn fetch_filing_text(&self, document_url: &str) -> Result<String> {
        self.fetch_filing_text_with(document_url, &HtmlTextConverter::default())
            .await
    }

    /// Downloads and converts the primary document of `filing`.
    #[cfg(feature = "text")]
    async fn filing_text(&self, filing: &FilingReference) -> Result<String> {
        self.fetch_filing_text(&filing.document_url).await
    }
}
