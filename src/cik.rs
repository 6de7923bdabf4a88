//! Central Index Key formatting.
//!
//! A CIK is stored as an integer and only rendered as text where it is embedded in a
//! URL. The submissions API wants the 10-digit zero-padded form
//! (`CIK0000320193.json`), while the public archive paths use the plain decimal form
//! (`/Archives/edgar/data/320193/...`).

use super::error::{EdgarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the zero-padded CIK used by the submissions API.
pub const CIK_WIDTH: usize = 10;

/// Central Index Key of an EDGAR filer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cik(u64);

impl Cik {
    pub const fn new(value: u64) -> Self {
        Cik(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Zero-padded 10-digit form, e.g. `0000320193`.
    pub fn padded(&self) -> String {
        format!("{:0>width$}", self.0, width = CIK_WIDTH)
    }

    /// Plain decimal form used in archive paths, e.g. `320193`.
    pub fn unpadded(&self) -> String {
        self.0.to_string()
    }
}

impl From<u64> for Cik {
    fn from(value: u64) -> Self {
        Cik(value)
    }
}

impl From<Cik> for u64 {
    fn from(cik: Cik) -> Self {
        cik.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts `320193`, `0000320193` and `CIK0000320193`.
impl FromStr for Cik {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("CIK")
            .or_else(|| trimmed.strip_prefix("cik"))
            .unwrap_or(trimmed);

        if digits.is_empty()
            || digits.len() > CIK_WIDTH
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(EdgarError::InvalidCik(s.to_string()));
        }

        digits
            .parse::<u64>()
            .map(Cik)
            .map_err(|_| EdgarError::InvalidCik(s.to_string()))
    }
}

/// Strips leading zeros from a textual CIK. Never returns an empty string: an
/// all-zero input yields `"0"`.
pub fn strip_padding(cik: &str) -> &str {
    let stripped = cik.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Folder name of a filing under the archive: the accession number without hyphens.
pub fn accession_path_segment(accession_number: &str) -> String {
    accession_number.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded() {
        assert_eq!(Cik::new(320193).padded(), "0000320193");
        assert_eq!(Cik::new(0).padded(), "0000000000");
        assert_eq!(Cik::new(1234567890).padded(), "1234567890");
    }

    #[test]
    fn test_strip_padding() {
        assert_eq!(strip_padding("0000320193"), "320193");
        assert_eq!(strip_padding("0000000000"), "0");
        assert_eq!(strip_padding("320193"), "320193");
        assert_eq!(strip_padding(""), "0");
    }

    #[test]
    fn test_unpadded_matches_stripped_padded() {
        for value in [0_u64, 7, 320193, 1045810] {
            let cik = Cik::new(value);
            assert_eq!(strip_padding(&cik.padded()), cik.unpadded());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("320193".parse::<Cik>().unwrap(), Cik::new(320193));
        assert_eq!("0000320193".parse::<Cik>().unwrap(), Cik::new(320193));
        assert_eq!("CIK0000320193".parse::<Cik>().unwrap(), Cik::new(320193));
        assert!(matches!("".parse::<Cik>(), Err(EdgarError::InvalidCik(_))));
        assert!(matches!("12a".parse::<Cik>(), Err(EdgarError::InvalidCik(_))));
        assert!(matches!(
            "12345678901".parse::<Cik>(),
            Err(EdgarError::InvalidCik(_))
        ));
    }

    #[test]
    fn test_accession_path_segment() {
        assert_eq!(
            accession_path_segment("0000320193-24-000123"),
            "000032019324000123"
        );
    }
}
