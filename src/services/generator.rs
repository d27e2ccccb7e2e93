use crate::config::Config;
use crate::domain::Password;
use crate::error::RekeyError;

/// Produces the next password of a rotation session.
pub trait Generator {
    fn generate(&self) -> anyhow::Result<Password>;
}

/// Generator backed by a remote random-string service that answers a GET
/// with the password as its plain-text body.
pub struct HttpGenerator {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpGenerator {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder().build()?,
            url: config.generator_url.clone(),
        })
    }
}

impl Generator for HttpGenerator {
    fn generate(&self) -> anyhow::Result<Password> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(RekeyError::Network)?;
        let body = resp.text().map_err(RekeyError::Network)?;
        let token = body.trim();
        if token.is_empty() {
            return Err(RekeyError::EmptyPassword("generator response").into());
        }
        Ok(Password::new(token))
    }
}
