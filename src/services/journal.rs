use crate::config::Config;
use log::{debug, info};
use std::time::Duration;

/// Sink for session progress lines.
pub trait Journal {
    fn record(&self, line: &str);
}

/// Journal that logs locally and, when a shipping token is configured,
/// forwards each line to the remote log service. Delivery is fire and
/// forget: a dead log endpoint must never fail or stall a rotation.
pub struct SessionJournal {
    client: reqwest::blocking::Client,
    endpoint: Option<String>,
}

impl SessionJournal {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()?,
            endpoint: config
                .log_entries_token
                .as_deref()
                .map(|token| ship_url(&config.log_entries_url, token)),
        })
    }
}

// the log service addresses a stream by appending the token to the base url
fn ship_url(base: &str, token: &str) -> String {
    format!("{base}{token}")
}

impl Journal for SessionJournal {
    fn record(&self, line: &str) {
        info!("{line}");
        if let Some(endpoint) = &self.endpoint {
            if let Err(e) = self.client.post(endpoint).body(line.to_owned()).send() {
                debug!("log shipping failed: {e}");
            }
        }
    }
}
