//! Data-only domain types. No filesystem or network side effects here.

use std::fmt;

/// A wifi pre-shared key. Holds whatever the store, the generator, or the
/// `--password` flag produced; the only rule is that it is never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Debug output never carries the value.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***redacted***)")
    }
}

/// Where the new password of a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    Generated,
    Supplied,
}

impl fmt::Display for PasswordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PasswordSource::Generated => "generated",
            PasswordSource::Supplied => "user-supplied",
        })
    }
}
