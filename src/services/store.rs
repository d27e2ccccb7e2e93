use crate::domain::Password;
use crate::error::RekeyError;
use std::path::Path;

/// Reads the current password: the first line of the file, trimmed.
pub fn read_password(path: &Path) -> anyhow::Result<Password> {
    if !path.exists() {
        return Err(RekeyError::PasswordFileNotFound(path.to_path_buf()).into());
    }
    let raw = std::fs::read_to_string(path)?;
    let first = raw.lines().next().unwrap_or("").trim();
    if first.is_empty() {
        return Err(RekeyError::EmptyPassword("password file").into());
    }
    Ok(Password::new(first))
}

/// Overwrites the file with exactly the password value, no trailing newline.
pub fn write_password(path: &Path, password: &Password) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        // parent is "" for bare file names like the default `.password`
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, password.as_str())?;
    Ok(())
}
