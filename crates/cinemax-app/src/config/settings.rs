//! Settings file discovery and loading

use std::path::{Path, PathBuf};

use cinemax_core::prelude::*;

use super::types::Settings;

/// Directory name under the platform config dir
const APP_DIR: &str = "cinemax";

const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV_VAR: &str = "CINEMAX_API_URL";

const DEFAULT_CONFIG: &str = r#"# CineMax Configuration

[api]
# Base URL of the movie service
base_url = "http://localhost:8000"
# Per-request timeout in seconds (0 = no timeout)
request_timeout_secs = 0

[search]
# Quiet period after typing before suggestions are requested
debounce_ms = 300
# Characters needed before suggestions are requested
min_query_chars = 2

[ui]
# Capture mouse clicks
mouse = true
"#;

/// `<config_dir>/cinemax/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing default file yields defaults. An explicitly requested file
/// that does not exist is an error. Unreadable or malformed files log a
/// warning and fall back to defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No platform config directory, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    Ok(read_settings(&config_path))
}

fn read_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `CINEMAX_API_URL` when it is set and non-empty
pub fn apply_env_overrides(settings: Settings) -> Settings {
    match std::env::var(API_URL_ENV_VAR) {
        Ok(url) if !url.trim().is_empty() => {
            debug!("Using {} from environment", API_URL_ENV_VAR);
            settings.with_api_url_override(Some(url))
        }
        _ => settings,
    }
}

/// Load, apply overrides and validate.
///
/// Precedence for the service URL: `cli_api_url`, then the environment,
/// then the file, then the built-in default.
pub fn resolve_settings(path: Option<&Path>, cli_api_url: Option<String>) -> Result<Settings> {
    let settings = load_settings(path)?;
    let settings = apply_env_overrides(settings).with_api_url_override(cli_api_url);
    settings.validate()?;
    info!("Movie service at {}", settings.api.base_url);
    Ok(settings)
}

/// Write a commented default config file at `path` unless one exists.
///
/// Returns true when a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_default_file_parses_to_defaults() {
        let settings: Settings = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://movies.local:9000"

[search]
debounce_ms = 150

[ui]
mouse = false
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.api.base_url, "http://movies.local:9000");
        assert_eq!(settings.search.debounce_ms, 150);
        assert_eq!(settings.search.min_query_chars, 2);
        assert!(!settings.ui.mouse);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.toml");

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_init_config_file_once() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("cinemax").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(Some(&path)).unwrap(), Settings::default());
    }

    #[test]
    #[serial]
    fn test_cli_beats_env_beats_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://file.local\"\n").unwrap();

        std::env::set_var(API_URL_ENV_VAR, "http://env.local");
        let from_env = resolve_settings(Some(&path), None).unwrap();
        let from_cli = resolve_settings(Some(&path), Some("http://cli.local".into())).unwrap();
        std::env::remove_var(API_URL_ENV_VAR);
        let from_file = resolve_settings(Some(&path), None).unwrap();

        assert_eq!(from_env.api.base_url, "http://env.local");
        assert_eq!(from_cli.api.base_url, "http://cli.local");
        assert_eq!(from_file.api.base_url, "http://file.local");
    }

    #[test]
    #[serial]
    fn test_resolve_rejects_invalid_url() {
        std::env::remove_var(API_URL_ENV_VAR);
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let err = resolve_settings(Some(&path), Some("::nope".into())).unwrap_err();
        assert!(err.is_fatal());
    }
}
