pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "symdict";
pub const APP_NAME: &str = "symdict";

pub const BROWSER_CONFIG_FILE_NAME: &str = "symdict.toml";
pub const CATALOG_FILE_NAME: &str = "catalog.json";
