use crate::error::Result;
use config::{constants as config_constants, create_strategy};
use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use symbol_search::DEFAULT_PAGE_SIZE;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// JSON file the stand-in catalog is loaded from
    pub catalog_path: PathBuf,
    pub page_size: NonZeroUsize,
    /// How long a one-shot search may take
    pub search_timeout_secs: u64,
}

fn default_config() -> Config {
    let data_dir = create_strategy()
        .map(|strategy| config::data_dir(&strategy))
        .unwrap_or_else(|_| env::temp_dir().join(config_constants::APP_NAME));

    Config {
        catalog_path: data_dir.join(config_constants::CATALOG_FILE_NAME),
        page_size: DEFAULT_PAGE_SIZE,
        search_timeout_secs: 30,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    pub fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let config_path = Self::config_path()?;

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Err(e) = Self::create_example_config(&config_path) {
                    warn!("Could not write example config to {config_path:?}: {e}");
                }
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let strategy = create_strategy()?;
        Ok(config::config_dir(&strategy).join(config_constants::BROWSER_CONFIG_FILE_NAME))
    }

    /// Command-line values win over the file.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        page_size: Option<NonZeroUsize>,
    ) -> Self {
        if let Some(catalog_path) = catalog_path {
            self.catalog_path = catalog_path;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = format!(
            r#"# symdict configuration
#
# Created on first run. Command-line flags override these values.

# Symbol catalog: a JSON array of entries such as
#   {{ "key": "10011500", "name": "Tank", "symbol-class": "...", "category": "...", "tags": ["..."] }}
# catalog-path = "/path/to/catalog.json"

# Number of symbols shown per page
page-size = {page_size}

# Seconds a one-shot `symdict search` waits for the catalog
search-timeout-secs = 30
"#,
            page_size = DEFAULT_PAGE_SIZE
        );

        std::fs::write(config_path, example_config)?;
        eprintln!("Created configuration file: {config_path:?}");
        Ok(())
    }
}
