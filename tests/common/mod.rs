use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use edgar_lookup::{Edgar, EdgarConfig, EdgarUrls};

#[allow(dead_code)]
pub const USER_AGENT: &str = "test_agent example@example.com";

#[allow(dead_code)]
pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

#[allow(dead_code)]
pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

#[allow(dead_code)]
pub fn edgar() -> Edgar {
    Edgar::new(USER_AGENT).unwrap()
}

/// Client whose hosts all point at a mock server.
#[allow(dead_code)]
pub fn mock_edgar(base: &str) -> Edgar {
    let config = EdgarConfig::new(
        USER_AGENT,
        Duration::from_secs(5),
        Some(EdgarUrls::single_host(base)),
    );
    Edgar::with_config(config).unwrap()
}
