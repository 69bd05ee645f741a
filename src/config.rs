use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sender::{DEFAULT_BROADCAST_ADDR, DEFAULT_WOL_PORT};

pub const DEFAULT_CONFIG_PATH: &str = "~/.wol_sender.json";

fn default_ip() -> String {
    DEFAULT_BROADCAST_ADDR.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_WOL_PORT
}

/// One machine the interactive menu can wake. The address is kept as the
/// raw configured string and validated when the menu is built, so a bad
/// entry is reported instead of poisoning the whole file.
#[derive(Clone, Debug, Deserialize)]
pub struct Target {
    pub name: String,
    pub mac: String,

    #[serde(default = "default_ip")]
    pub ip: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Config {
    /// Reads the target list from a JSON file, expanding a leading `~`.
    pub fn load(path: &str) -> Result<Self> {
        let path = PathBuf::from(shellexpand::tilde(path).into_owned());
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("unable to read config file '{}'", path.display()))?;
        let cfg = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_ip_and_port_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str(
            r#"{ "targets": [ { "name": "nas", "mac": "00:11:22:33:44:55" } ] }"#,
        )
        .unwrap();

        assert_eq!(cfg.targets.len(), 1);
        assert_eq!(cfg.targets[0].ip, "255.255.255.255");
        assert_eq!(cfg.targets[0].port, 9);
    }

    #[test]
    fn explicit_ip_and_port_are_kept() {
        let cfg: Config = serde_json::from_str(
            r#"{ "targets": [ { "name": "desk", "mac": "AA:BB:CC:DD:EE:FF",
                               "ip": "192.168.1.100", "port": 7 } ] }"#,
        )
        .unwrap();

        assert_eq!(cfg.targets[0].ip, "192.168.1.100");
        assert_eq!(cfg.targets[0].port, 7);
    }

    #[test]
    fn empty_document_means_no_targets() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert!(cfg.targets.is_empty());
    }
}
