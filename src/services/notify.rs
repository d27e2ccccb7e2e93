use crate::config::Config;
use crate::error::RekeyError;

/// Delivers the rotation announcement and hands back the reply's status
/// line, the only part of the reply fit for the journal.
pub trait Notifier {
    fn send(&self, message: &str) -> anyhow::Result<String>;
}

/// Notifier posting to Slack's message endpoint. The reply body is never
/// read: it echoes the posted text, and the journal ships its lines
/// off-box. A rejected announcement must not undo a rotation that already
/// happened, so the status is not inspected either.
pub struct SlackNotifier {
    client: reqwest::blocking::Client,
    url: String,
    token: String,
    channel: String,
}

impl SlackNotifier {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder().build()?,
            url: config.slack_url.clone(),
            token: config.slack_token.clone().unwrap_or_default(),
            channel: config.slack_channel.clone().unwrap_or_default(),
        })
    }
}

impl Notifier for SlackNotifier {
    fn send(&self, message: &str) -> anyhow::Result<String> {
        let params = [
            ("token", self.token.as_str()),
            ("channel", self.channel.as_str()),
            ("text", message),
            ("as_user", "true"),
        ];
        let resp = self
            .client
            .post(&self.url)
            .form(&params)
            .send()
            .map_err(RekeyError::Network)?;
        Ok(resp.status().to_string())
    }
}
