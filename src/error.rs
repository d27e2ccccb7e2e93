use std::path::PathBuf;

/// Failure classes of a rotation session. Everything bubbles up through
/// `anyhow`; this enum exists so callers and tests can tell the classes
/// apart.
#[derive(thiserror::Error, Debug)]
pub enum RekeyError {
    #[error("password file not found: {}", .0.display())]
    PasswordFileNotFound(PathBuf),
    #[error("{0} produced an empty password")]
    EmptyPassword(&'static str),
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("admin ui: {0}")]
    AdminUi(String),
    #[error("wifi join: {0}")]
    Join(String),
}
