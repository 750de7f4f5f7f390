use serde::Deserialize;

use crate::constants::*;

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/homeport/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the data document lives: an http(s) URL or a file path.
    pub data_source: String,
    /// Address the page server binds to.
    pub listen_addr: String,
    /// Title rendered into the page `<title>` and header.
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional — missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    data_source: Option<String>,
    listen_addr: Option<String>,
    page_title: Option<String>,
}

impl Config {
    /// Load config from ~/.config/homeport/config.toml, falling back to
    /// defaults for any missing fields. If the file doesn't exist, returns
    /// pure defaults.
    pub fn load() -> Self {
        let config_path = crate::constants::config_file_path();
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file — use defaults
        };

        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to parse {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    /// Parse a config file body and merge it over the defaults.
    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file_config: FileConfig = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(v) = file_config.data_source {
            if !v.is_empty() {
                config.data_source = v;
            }
        }
        if let Some(v) = file_config.listen_addr {
            if !v.is_empty() {
                config.listen_addr = v;
            }
        }
        if let Some(v) = file_config.page_title {
            if !v.is_empty() {
                config.page_title = v;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").expect("Should parse");
        assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.page_title, DEFAULT_PAGE_TITLE);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = Config::from_toml(
            "data_source = \"https://example.com/links.json\"\nlisten_addr = \"0.0.0.0:8080\"\n",
        )
        .expect("Should parse");
        assert_eq!(config.data_source, "https://example.com/links.json");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        // Untouched field keeps its default
        assert_eq!(config.page_title, DEFAULT_PAGE_TITLE);
    }

    #[test]
    fn empty_strings_keep_defaults() {
        let config = Config::from_toml("page_title = \"\"").expect("Should parse");
        assert_eq!(config.page_title, DEFAULT_PAGE_TITLE);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("listen_addr = [not toml").is_err());
    }
}
