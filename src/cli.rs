use crate::domain::Password;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PASSWORD_FILE: &str = ".password";

#[derive(Parser, Debug)]
#[command(
    name = "rekey",
    version,
    about = "Rotates the wifi password and announces it to the team"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Use this value as the new password instead of asking the generator service"
    )]
    pub password: Option<String>,
    #[arg(
        long,
        default_value = DEFAULT_PASSWORD_FILE,
        help = "Path of the plain-text file holding the current password"
    )]
    pub password_file: PathBuf,
}

impl Cli {
    /// The password supplied on the command line, if usable. Surrounding
    /// whitespace is dropped and a blank value counts as absent: the store
    /// trims on read, so a blank or padded value could never be read back
    /// as written.
    pub fn explicit_password(&self) -> Option<Password> {
        self.password
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Password::new)
    }
}
