use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Exit with a per-error status code instead of 0 when a stage fails
    #[serde(default)]
    pub strict_exit: bool,
    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "rss_summary=warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_exit: false,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, strict_exit: bool, verbose: bool) -> Self {
        if strict_exit {
            self.strict_exit = true;
        }
        if verbose {
            self.log_filter = "rss_summary=debug".to_string();
        }
        self
    }
}
