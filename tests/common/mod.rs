//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use clickup_api::clients::{HttpClient, SleepFuture, Sleeper};
use clickup_api::{ApiToken, BaseUrl, ClickUp, ClickUpConfig, ClickUpConfigBuilder};
use wiremock::MockServer;

pub const TOKEN: &str = "pk_42_TESTTOKEN";

/// Records requested sleeps instead of waiting them out.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    calls: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> SleepFuture {
        self.calls.lock().unwrap().push(duration);
        Box::pin(async {})
    }
}

/// A config builder pointed at `base`, with a 1 second retry delay.
pub fn config_for(base: &str) -> ClickUpConfigBuilder {
    ClickUpConfig::builder()
        .api_token(ApiToken::new(TOKEN).unwrap())
        .base_url(BaseUrl::new(format!("{base}/api/v2")).unwrap())
        .retry_delay(Duration::from_secs(1))
}

/// Builds a dispatcher with a recording sleeper.
pub fn dispatcher(config: &ClickUpConfig) -> (HttpClient, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = HttpClient::new(config).unwrap().with_sleeper(sleeper.clone());
    (client, sleeper)
}

/// Builds a facade for a mock server with a recording sleeper.
pub fn clickup(server: &MockServer) -> (ClickUp, Arc<RecordingSleeper>) {
    let (client, sleeper) = dispatcher(&config_for(&server.uri()).build().unwrap());
    (ClickUp::from_http_client(Arc::new(client)), sleeper)
}

/// Returns the current time in epoch seconds.
pub fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
