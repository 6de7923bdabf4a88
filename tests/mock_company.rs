mod common;

use common::{USER_AGENT, mock_edgar, read_fixture};
use edgar_lookup::{CompanyIndex, CompanyOperations, EdgarError, ErrorKind};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_tickers(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/files/company_tickers.json"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(read_fixture("company_tickers.json"), "application/json"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn company_index_sends_user_agent() {
    let server = MockServer::start().await;
    serve_tickers(&server).await;

    let edgar = mock_edgar(&server.uri());
    let index = edgar.company_index().await.unwrap();

    assert_eq!(index.len(), 5);
    assert_eq!(index.resolve_by_ticker("googl").unwrap().cik, 1652044);
}

#[tokio::test]
async fn company_index_from_explicit_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mirror/tickers.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}"#),
        )
        .mount(&server)
        .await;

    let edgar = mock_edgar(&server.uri());
    let url = format!("{}/mirror/tickers.json", server.uri());
    let index = CompanyIndex::load(&edgar, &url).await.unwrap();
    assert_eq!(index.resolve_by_name("apple inc.").unwrap().ticker, "AAPL");

    let index = edgar.company_index_from(&url).await.unwrap();
    assert_eq!(index.len(), 1);
}

#[tokio::test]
async fn company_tickers_keeps_incomplete_entries() {
    let server = MockServer::start().await;
    serve_tickers(&server).await;

    let edgar = mock_edgar(&server.uri());
    let tickers = edgar.company_tickers().await.unwrap();

    assert_eq!(tickers.len(), 9);
    assert!(tickers.iter().any(|t| t.ticker.is_none()));
    assert_eq!(tickers[0].cik, 320193);
    assert_eq!(tickers[8].cik, 1999004);
}

#[tokio::test]
async fn failed_feed_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/company_tickers.json"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Request Rate Threshold Exceeded"))
        .mount(&server)
        .await;

    let edgar = mock_edgar(&server.uri());
    let err = edgar.company_index().await.unwrap_err();

    assert!(matches!(
        err,
        EdgarError::HttpStatus { status, .. } if status == reqwest::StatusCode::FORBIDDEN
    ));
    assert_eq!(err.kind(), ErrorKind::Fetch);
}

#[tokio::test]
async fn html_block_page_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/company_tickers.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body>Your Request Originates from an Undeclared Automated Tool</body></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let edgar = mock_edgar(&server.uri());
    let err = edgar.company_index().await.unwrap_err();

    assert!(matches!(err, EdgarError::UnexpectedContentType { .. }));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn json_labelled_as_html_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/company_tickers.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(read_fixture("company_tickers.json"), "text/html"),
        )
        .mount(&server)
        .await;

    let edgar = mock_edgar(&server.uri());
    let index = edgar.company_index().await.unwrap();
    assert_eq!(index.len(), 5);
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let edgar = mock_edgar(&uri);
    let err = edgar.company_index().await.unwrap_err();
    assert!(matches!(err, EdgarError::RequestError(_)));
    assert!(err.is_fetch_error());
}
