use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "bridge.toml";

const VERBOSE_ENV_KEYS: [&str; 2] = ["BRIDGE_VERBOSE", "APP__BRIDGE_VERBOSE"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Log and retain diagnostics.
    pub verbose: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self { verbose: true }
    }
}

impl BridgeConfig {
    pub fn quiet() -> Self {
        Self { verbose: false }
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults, then the config file (`bridge.toml` unless `path` is given),
/// then environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

pub fn load_config_with(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<BridgeConfig, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let mut config = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<BridgeConfig>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => BridgeConfig::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    for key in VERBOSE_ENV_KEYS {
        if let Some(verbose) = env(key).as_deref().and_then(parse_flag) {
            config.verbose = verbose;
        }
    }

    Ok(config)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config =
            load_config_with(Some(dir.path().join("absent.toml").as_path()), no_env).expect("config");
        assert_eq!(config, BridgeConfig::default());
        assert!(config.verbose);
    }

    #[test]
    fn reads_verbose_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bridge.toml");
        fs::write(&path, "verbose = false\n").expect("write config");

        let config = load_config_with(Some(path.as_path()), no_env).expect("config");
        assert!(!config.verbose);
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bridge.toml");
        fs::write(&path, "").expect("write config");

        let config = load_config_with(Some(path.as_path()), no_env).expect("config");
        assert!(config.verbose);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bridge.toml");
        fs::write(&path, "verbose = \"sometimes\"\n").expect("write config");

        let err = load_config_with(Some(path.as_path()), no_env).expect_err("parse error");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bridge.toml");
        fs::write(&path, "verbose = true\n").expect("write config");

        let env: HashMap<&str, &str> = HashMap::from([("APP__BRIDGE_VERBOSE", "off")]);
        let config = load_config_with(Some(path.as_path()), |key| env.get(key).map(|v| v.to_string()))
            .expect("config");
        assert!(!config.verbose);
    }

    #[test]
    fn prefixed_key_wins_and_garbage_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let env: HashMap<&str, &str> =
            HashMap::from([("BRIDGE_VERBOSE", "no"), ("APP__BRIDGE_VERBOSE", "maybe")]);
        let config = load_config_with(Some(path.as_path()), |key| env.get(key).map(|v| v.to_string()))
            .expect("config");
        assert!(!config.verbose);

        let env: HashMap<&str, &str> =
            HashMap::from([("BRIDGE_VERBOSE", "0"), ("APP__BRIDGE_VERBOSE", "Yes")]);
        let config = load_config_with(Some(path.as_path()), |key| env.get(key).map(|v| v.to_string()))
            .expect("config");
        assert!(config.verbose);
    }
}
