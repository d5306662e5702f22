// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Configuration file support for msgchain.
//!
//! Config is loaded from the `[msgchain]` section of `msgchain.toml`.
//! Default search order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./msgchain.toml`
//! 3. `~/.config/msgchain/msgchain.toml`
//! 4. `/etc/msgchain/msgchain.toml`

use std::path::{Path, PathBuf};

use msgchain_app::{ConfigError, ConfigFile};
use msgchain_core::ReportFormat;
use msgchain_payload::PayloadPolicy;
use serde::{Deserialize, Serialize};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Message source
    pub input: InputConfig,
    /// Report output
    pub output: OutputConfig,
    /// JSON payload matcher settings
    pub payload: PayloadConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File with one message per line ("-" reads stdin)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format ("text" or "json")
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// How JSON objects without a string `message` are reported
    /// ("strict": malformed, "lenient": passed on)
    pub policy: PayloadPolicy,
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_log_level(self.general.log_level.as_deref())?;
        if let Some(path) = &self.input.path {
            if path.as_os_str().is_empty() {
                return Err("[input].path must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        <Self as ConfigFile>::load_from_file(path)
    }

    /// Load configuration from the default search paths.
    /// Returns default config if no config file is found.
    pub fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        <Self as ConfigFile>::load_from_default_paths()
    }

    /// Generate an example configuration wrapped under the `[msgchain]`
    /// section header.
    pub fn example_toml() -> String {
        #[derive(serde::Serialize)]
        struct Wrapper {
            msgchain: RelayConfig,
        }
        let example = RelayConfig {
            general: GeneralConfig {
                log_level: Some("info".to_string()),
            },
            input: InputConfig {
                path: Some(PathBuf::from("messages.txt")),
            },
            output: OutputConfig::default(),
            payload: PayloadConfig::default(),
        };
        toml::to_string_pretty(&Wrapper { msgchain: example }).unwrap_or_default()
    }
}

fn validate_log_level(level: Option<&str>) -> Result<(), String> {
    if let Some(level) = level {
        match level {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "[general].log_level '{}' is invalid (expected one of: trace, debug, info, warn, error)",
                    level
                ))
            }
        }
    }
    Ok(())
}

impl ConfigFile for RelayConfig {
    fn section_key() -> &'static str {
        "msgchain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.general.log_level, None);
        assert_eq!(config.input.path, None);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.payload.policy, PayloadPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[general]
log_level = "debug"

[input]
path = "/var/spool/downlink.txt"

[output]
format = "json"

[payload]
policy = "lenient"
"#;
        let config: RelayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("/var/spool/downlink.txt"))
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.payload.policy, PayloadPolicy::Lenient);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let toml_str = "[payload]\npolicy = \"sloppy\"\n";
        assert!(toml::from_str::<RelayConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_log_level() {
        let mut config = RelayConfig::default();
        config.general.log_level = Some("chatty".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_input_path() {
        let mut config = RelayConfig::default();
        config.input.path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_toml_round_trips() {
        let example = RelayConfig::example_toml();
        assert!(example.contains("log_level = \"info\""));
        assert!(example.contains("policy = \"strict\""));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(example.as_bytes()).unwrap();
        let config = RelayConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.input.path, Some(PathBuf::from("messages.txt")));
        assert!(config.validate().is_ok());
    }
}
