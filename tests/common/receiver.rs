//! Mock webhook receiver

use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HOOK_PATH: &str = "/api/webhooks/42/secret";

/// A local webhook endpoint answering every POST with a fixed status
pub struct MockReceiver {
    pub server: MockServer,
}

impl MockReceiver {
    pub async fn responding(status: u16) -> Self {
        Self::with_template(ResponseTemplate::new(status)).await
    }

    /// Answer 200 only after `delay`
    pub async fn slow(delay: Duration) -> Self {
        Self::with_template(ResponseTemplate::new(200).set_delay(delay)).await
    }

    async fn with_template(template: ResponseTemplate) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(HOOK_PATH))
            .respond_with(template)
            .mount(&server)
            .await;
        Self { server }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), HOOK_PATH)
    }

    /// JSON bodies of every request received so far
    pub async fn bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("body should be JSON"))
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
