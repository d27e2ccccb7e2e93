use figment::{providers::Env, Figment};
use serde::Deserialize;

const GENERATOR_URL: &str =
    "https://www.random.org/strings/?num=1&len=12&digits=on&loweralpha=on&unique=on&format=plain&rnd=new";
const SLACK_URL: &str = "https://slack.com/api/chat.postMessage";
const AP_URL: &str = "http://192.168.1.2";
const LOG_SHIP_URL: &str = "https://webhook.logentries.com/noformat/logs/";

/// Process-wide configuration, read once at startup and handed to each
/// component at construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wifi_interface: String,
    pub wifi_ssid: String,
    pub generator_url: String,
    pub ap_url: String,
    pub ap_username: Option<String>,
    pub ap_password: Option<String>,
    pub slack_url: String,
    pub slack_client_id: Option<String>,
    pub slack_client_secret: Option<String>,
    pub slack_channel: Option<String>,
    pub slack_token: Option<String>,
    pub log_entries_url: String,
    pub log_entries_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wifi_interface: default_interface(),
            wifi_ssid: String::new(),
            generator_url: GENERATOR_URL.to_string(),
            ap_url: AP_URL.to_string(),
            ap_username: None,
            ap_password: None,
            slack_url: SLACK_URL.to_string(),
            slack_client_id: None,
            slack_client_secret: None,
            slack_channel: None,
            slack_token: None,
            log_entries_url: LOG_SHIP_URL.to_string(),
            log_entries_token: None,
        }
    }
}

fn default_interface() -> String {
    if cfg!(target_os = "macos") { "en1" } else { "wlan0" }.to_string()
}

impl Config {
    /// Missing variables are not an error here; a component that needs one
    /// fails when it makes its call.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Figment::new().merge(Env::prefixed("")).extract()?)
    }
}
