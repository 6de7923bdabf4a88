mod common;

use common::read_fixture;
use edgar_lookup::{Cik, FilingPeriod, FilingReference, Submission};

fn submission() -> Submission {
    serde_json::from_str(&read_fixture("submissions/CIK0000320193.json")).unwrap()
}

#[test]
fn parse_submission() {
    let submission = submission();

    assert_eq!(submission.name.as_deref(), Some("Apple Inc."));
    assert_eq!(submission.tickers, vec!["AAPL"]);

    let records = submission.filings.recent.records().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[1].form, "10-K");
    assert_eq!(records[1].accession_number, "0000320193-24-000123");
    assert_eq!(records[1].primary_document, "aapl-20240928.htm");
}

#[test]
fn annual_period_selects_fiscal_2024_10k() {
    let records = submission().filings.recent.records().unwrap();
    let period = FilingPeriod::annual(2024).unwrap();

    let record = period.first_match(&records).unwrap();
    let reference = FilingReference::from_record(Cik::new(320193), record, "https://www.sec.gov");

    assert_eq!(reference.filing_date, "2024-11-01");
    assert_eq!(
        reference.document_url,
        "https://www.sec.gov/Archives/edgar/data/320193/000032019324000123/aapl-20240928.htm"
    );
}

#[test]
fn quarterly_periods() {
    let records = submission().filings.recent.records().unwrap();

    let q1 = FilingPeriod::quarterly(2024, 1).unwrap();
    assert_eq!(q1.first_match(&records).unwrap().filing_date, "2024-02-02");

    let q2 = FilingPeriod::quarterly(2024, 2).unwrap();
    assert_eq!(q2.first_match(&records).unwrap().filing_date, "2024-05-03");

    let q3 = FilingPeriod::quarterly(2024, 3).unwrap();
    assert_eq!(q3.first_match(&records).unwrap().filing_date, "2024-08-02");

    // Only a 10-K was filed in September-November 2024.
    let q4 = FilingPeriod::quarterly(2024, 4).unwrap();
    assert!(q4.first_match(&records).is_none());
}

#[test]
fn submission_without_cik_parses() {
    let body = r#"{
        "filings": {"recent": {
            "accessionNumber": ["0000320193-24-000123"],
            "filingDate": ["2024-11-01"],
            "form": ["10-K"],
            "primaryDocument": ["aapl-20240928.htm"]
        }}
    }"#;
    let submission: Submission = serde_json::from_str(body).unwrap();

    assert!(submission.cik.is_none());
    assert_eq!(submission.filings.recent.records().unwrap().len(), 1);
}
