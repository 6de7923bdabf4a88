use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Unexpected status code {status} for URL: {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(
        "Unexpected content type from URL {url}. Expected {expected}, but got Content-Type: {got_content_type}. Content preview: {content_preview}..."
    )]
    UnexpectedContentType {
        url: String,
        expected: String,
        got_content_type: String,
        content_preview: String,
    },

    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    #[error("No {form} filing found for CIK {cik} in {year}{}", .quarter.map(|q| format!(" Q{}", q)).unwrap_or_default())]
    FilingNotFound {
        cik: u64,
        form: String,
        year: i32,
        quarter: Option<u32>,
    },

    #[error("Invalid quarter {0}: must be between 1 and 4")]
    InvalidQuarter(u32),

    #[error("Invalid year {0}: must be a four-digit year")]
    InvalidYear(i32),

    #[error("Invalid CIK: {0:?}")]
    InvalidCik(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Coarse classification of an [`EdgarError`].
///
/// Callers branch on this to tell an expected lookup miss apart from a
/// failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, non-2xx status or an unexpected response shape.
    Fetch,
    /// The company, ticker or filing does not exist.
    NotFound,
    /// The caller passed an out-of-range argument.
    InvalidArgument,
    /// The client could not be built from its configuration.
    Config,
}

impl EdgarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EdgarError::RequestError(_)
            | EdgarError::HttpStatus { .. }
            | EdgarError::InvalidResponse(_)
            | EdgarError::JsonError(_)
            | EdgarError::UnexpectedContentType { .. } => ErrorKind::Fetch,
            EdgarError::CompanyNotFound(_)
            | EdgarError::TickerNotFound(_)
            | EdgarError::FilingNotFound { .. } => ErrorKind::NotFound,
            EdgarError::InvalidQuarter(_)
            | EdgarError::InvalidYear(_)
            | EdgarError::InvalidCik(_) => ErrorKind::InvalidArgument,
            EdgarError::ConfigError(_) => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_fetch_error(&self) -> bool {
        self.kind() == ErrorKind::Fetch
    }
}

pub type Result<T> = std::result::Result<T, EdgarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            EdgarError::TickerNotFound("ZZZZ".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(EdgarError::InvalidQuarter(5).kind(), ErrorKind::InvalidArgument);
        assert!(
            EdgarError::HttpStatus {
                url: "https://data.sec.gov/submissions/CIK0000000000.json".into(),
                status: reqwest::StatusCode::NOT_FOUND,
            }
            .is_fetch_error()
        );
        assert!(!EdgarError::InvalidResponse("bad".into()).is_not_found());
    }

    #[test]
    fn test_filing_not_found_message() {
        let annual = EdgarError::FilingNotFound {
            cik: 320193,
            form: "10-K".into(),
            year: 2024,
            quarter: None,
        };
        assert_eq!(
            annual.to_string(),
            "No 10-K filing found for CIK 320193 in 2024"
        );

        let quarterly = EdgarError::FilingNotFound {
            cik: 320193,
            form: "10-Q".into(),
            year: 2024,
            quarter: Some(2),
        };
        assert_eq!(
            quarterly.to_string(),
            "No 10-Q filing found for CIK 320193 in 2024 Q2"
        );
    }
}
