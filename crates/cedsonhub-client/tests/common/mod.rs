/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cedsonhub-client tests

use cedsonhub_client::{CedsonHubApi, ClientConfig};
use std::time::Duration;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key that satisfies the 50-character minimum
pub fn test_api_key() -> String {
    "integration_key_abcdefghijklmnopqrstuvwxyz_0123456789".to_string()
}

/// Client pointed at the mock server, with short timeouts
pub fn api_for(server: &MockServer) -> CedsonHubApi {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    }
    .with_base_url(format!("{}/api/v1", server.uri()));

    CedsonHubApi::with_config(test_api_key(), config).expect("api init")
}

/// Form fields of a recorded request body
#[allow(dead_code)]
pub fn form_fields(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}
