use crate::config::Config;
use crate::domain::Password;
use crate::error::RekeyError;
use log::debug;
use std::process::Command;

/// Joins a wifi network with a pre-shared key.
pub trait Connector {
    fn join(&self, password: &Password) -> anyhow::Result<()>;
}

/// Connector backed by the operating system's wireless tool.
pub struct SystemWifi {
    interface: String,
    ssid: String,
}

impl SystemWifi {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interface: config.wifi_interface.clone(),
            ssid: config.wifi_ssid.clone(),
        }
    }
}

#[cfg(target_os = "macos")]
fn join_command(interface: &str, ssid: &str, password: &Password) -> (&'static str, Vec<String>) {
    (
        "networksetup",
        vec![
            "-setairportnetwork".to_string(),
            interface.to_string(),
            ssid.to_string(),
            password.as_str().to_string(),
        ],
    )
}

#[cfg(not(target_os = "macos"))]
fn join_command(interface: &str, ssid: &str, password: &Password) -> (&'static str, Vec<String>) {
    (
        "nmcli",
        vec![
            "dev".to_string(),
            "wifi".to_string(),
            "connect".to_string(),
            ssid.to_string(),
            "password".to_string(),
            password.as_str().to_string(),
            "ifname".to_string(),
            interface.to_string(),
        ],
    )
}

impl Connector for SystemWifi {
    fn join(&self, password: &Password) -> anyhow::Result<()> {
        let (tool, args) = join_command(&self.interface, &self.ssid, password);
        debug!("joining {} on {} via {}", self.ssid, self.interface, tool);
        let status = Command::new(tool)
            .args(&args)
            .status()
            .map_err(|e| RekeyError::Join(format!("failed to run {tool}: {e}")))?;
        if !status.success() {
            return Err(RekeyError::Join(format!(
                "{tool} exited with {status} while joining {}",
                self.ssid
            ))
            .into());
        }
        Ok(())
    }
}
