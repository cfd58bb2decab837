//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of a future catalogue API. Recognized but has no
    /// observable effect while `remote_fetch` is off.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Explicit switch for the remote catalogue source. Off by default;
    /// the shipped build serves the built-in sample catalogue.
    #[serde(default)]
    pub remote_fetch: bool,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// The slice of configuration the catalogue source selection needs.
    pub fn catalog_settings(&self) -> crate::catalog::CatalogSettings {
        crate::catalog::CatalogSettings {
            api_base: self.api_base.clone(),
            remote_fetch: self.remote_fetch,
        }
    }
}

/// Catalogue settings from environment variables only. Fallback for
/// component trees rendered without a provided config (tests, tools);
/// the server threads the fully layered [`Config`] instead.
pub fn catalog_settings_from_env() -> crate::catalog::CatalogSettings {
    crate::catalog::CatalogSettings {
        api_base: api_base_from_env(),
        remote_fetch: remote_fetch_from_env(),
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("BH_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/bikers-heaven");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("bikers-heaven");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/bikers-heaven");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("bikers-heaven");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// API base for the catalogue, from environment only. Used by the data
/// provider, which runs per render and must not pay for file layering.
pub fn api_base_from_env() -> Option<String> {
    std::env::var("BH_API_BASE")
        .or_else(|_| std::env::var("API_BASE"))
        .ok()
        .filter(|s| !s.is_empty())
}

/// Whether the remote catalogue source is explicitly enabled.
pub fn remote_fetch_from_env() -> bool {
    std::env::var("BH_REMOTE_FETCH")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        .set_default("remote_fetch", false)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (BH_PORT, BH_API_BASE, etc.)
        .add_source(
            ::config::Environment::with_prefix("BH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Support PORT env vars with explicit precedence: BH_PORT > PORT > config > default
    if let Ok(port) = std::env::var("BH_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (Docker, PaaS runners, etc.)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    // Support the legacy API_BASE env var from the pre-rewrite frontend
    if std::env::var("BH_API_BASE").is_err() {
        if let Ok(base) = std::env::var("API_BASE") {
            builder = builder.set_override("api_base", base)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("BH_PORT");
        env::remove_var("PORT");
        env::remove_var("BH_API_BASE");
        env::remove_var("API_BASE");
        env::remove_var("BH_REMOTE_FETCH");
        env::set_var("BH_CONFIG_DIR", "/tmp/bh-test-nonexistent");
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env_or_file() {
        clear_env();

        let config = load_config().expect("config should load");

        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, None);
        assert!(!config.remote_fetch);
    }

    #[test]
    #[serial]
    fn port_env_fallback() {
        clear_env();
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn bh_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("BH_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("BH_PORT");
        env::remove_var("PORT");
        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.port, 5000, "BH_PORT should take precedence over PORT");
    }

    #[test]
    #[serial]
    fn invalid_port_uses_default() {
        clear_env();
        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.port, 8080, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn api_base_env_is_recognized() {
        clear_env();
        env::set_var("BH_API_BASE", "https://api.bikersheaven.example");

        let config = load_config().expect("config should load");

        env::remove_var("BH_API_BASE");
        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(
            config.api_base.as_deref(),
            Some("https://api.bikersheaven.example")
        );
        // Recognized, but remote fetch stays off unless flagged on.
        assert!(!config.remote_fetch);
    }

    #[test]
    #[serial]
    fn legacy_api_base_env_is_recognized() {
        clear_env();
        env::set_var("API_BASE", "https://legacy.example");

        let config = load_config().expect("config should load");

        env::remove_var("API_BASE");
        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.api_base.as_deref(), Some("https://legacy.example"));
    }

    #[test]
    #[serial]
    fn remote_fetch_env_detection() {
        clear_env();
        assert!(!remote_fetch_from_env());
        env::set_var("BH_REMOTE_FETCH", "true");
        assert!(remote_fetch_from_env());
        env::set_var("BH_REMOTE_FETCH", "1");
        assert!(remote_fetch_from_env());
        env::set_var("BH_REMOTE_FETCH", "false");
        assert!(!remote_fetch_from_env());
        env::remove_var("BH_REMOTE_FETCH");
        env::remove_var("BH_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn api_base_env_precedence() {
        clear_env();
        assert_eq!(api_base_from_env(), None);
        env::set_var("API_BASE", "https://legacy.example");
        assert_eq!(api_base_from_env().as_deref(), Some("https://legacy.example"));
        env::set_var("BH_API_BASE", "https://new.example");
        assert_eq!(api_base_from_env().as_deref(), Some("https://new.example"));
        env::remove_var("BH_API_BASE");
        env::remove_var("API_BASE");
        env::remove_var("BH_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn config_file_is_read_when_present() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "port = 9090\nremote_fetch = true\napi_base = \"https://file.example\"\n",
        )
        .expect("write config file");

        clear_env();
        env::set_var("BH_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("BH_CONFIG_DIR");

        assert_eq!(config.port, 9090);
        assert!(config.remote_fetch);
        assert_eq!(config.api_base.as_deref(), Some("https://file.example"));

        // The file layer must flow through to source selection.
        assert_eq!(
            config.catalog_settings().source(),
            crate::catalog::CatalogSource::Remote {
                api_base: "https://file.example".to_string()
            }
        );
    }
}
