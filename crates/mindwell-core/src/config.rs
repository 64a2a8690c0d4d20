//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name greeted on the dashboard
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Simulated companion reply latency in milliseconds
    #[serde(default = "default_reply_latency")]
    pub reply_latency_ms: u64,

    /// Whether the admin dashboard screen is reachable
    #[serde(default)]
    pub admin_enabled: bool,

    /// How long the splash screen shows before onboarding, milliseconds
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
}

fn default_user_name() -> String {
    "Alex".into()
}
fn default_reply_latency() -> u64 {
    1500
}
fn default_splash_ms() -> u64 {
    2500
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        if let Ok(name) = std::env::var("MINDWELL_USER_NAME") {
            config.user_name = name;
        }
        if let Ok(ms) = std::env::var("MINDWELL_REPLY_LATENCY_MS") {
            config.reply_latency_ms = ms
                .parse()
                .context("MINDWELL_REPLY_LATENCY_MS must be an integer")?;
        }
        if let Ok(v) = std::env::var("MINDWELL_ADMIN") {
            config.admin_enabled = v == "1" || v.eq_ignore_ascii_case("true");
        }

        // Validation
        if config.reply_latency_ms == 0 {
            anyhow::bail!("reply_latency_ms must be greater than zero");
        }

        Ok(config)
    }

    /// Load config from the default location (project_root/config.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("config.yaml");
        Self::load(&config_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            reply_latency_ms: default_reply_latency(),
            admin_enabled: false,
            splash_ms: default_splash_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "user_name: Alex").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.user_name, "Alex");
        assert_eq!(config.reply_latency_ms, 1500);
        assert_eq!(config.splash_ms, 2500);
        assert!(!config.admin_enabled);
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "user_name: Jordan\nreply_latency_ms: 300\nadmin_enabled: true"
        )
        .unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.user_name, "Jordan");
        assert_eq!(config.reply_latency_ms, 300);
        assert!(config.admin_enabled);
    }

    #[test]
    fn test_zero_latency_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "reply_latency_ms: 0").unwrap();

        let result = Config::load(tmp.path());
        assert!(result.is_err());
    }
}
