use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig,
};
use database::mongodb::MongoConfig;
use domain_items::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

pub const DEFAULT_BASE_PATH: &str = "/v1/items";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub items: ItemsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let items = ItemsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            items,
        })
    }
}

/// Where the items API is mounted and what it runs at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsConfig {
    /// Path prefix for the CRUD routes, without a trailing slash
    pub base_path: String,
    pub collection: String,
    pub seed_on_startup: bool,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            seed_on_startup: true,
        }
    }
}

impl FromEnv for ItemsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_path = normalize_base_path(&env_or_default("ITEMS_BASE_PATH", DEFAULT_BASE_PATH))?;
        let collection = env_or_default("ITEMS_COLLECTION", DEFAULT_COLLECTION);
        let seed_on_startup = env_parse("ITEMS_SEED_ON_STARTUP", true)?;

        Ok(Self {
            base_path,
            collection,
            seed_on_startup,
        })
    }
}

/// Leading slash added, trailing slashes dropped. The root path is rejected
/// because the items router is nested, not merged.
fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::ParseError {
            key: "ITEMS_BASE_PATH".to_string(),
            details: format!("'{}' is not a valid base path", raw),
        });
    }

    Ok(format!("/{}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS_VARS: [&str; 3] = [
        "ITEMS_BASE_PATH",
        "ITEMS_COLLECTION",
        "ITEMS_SEED_ON_STARTUP",
    ];

    #[test]
    fn test_items_config_defaults() {
        temp_env::with_vars_unset(ITEMS_VARS, || {
            let config = ItemsConfig::from_env().unwrap();
            assert_eq!(config, ItemsConfig::default());
            assert_eq!(config.base_path, "/v1/items");
            assert_eq!(config.collection, "item");
            assert!(config.seed_on_startup);
        });
    }

    #[test]
    fn test_items_config_from_env() {
        temp_env::with_vars(
            [
                ("ITEMS_BASE_PATH", Some("api/items/")),
                ("ITEMS_COLLECTION", Some("products")),
                ("ITEMS_SEED_ON_STARTUP", Some("false")),
            ],
            || {
                let config = ItemsConfig::from_env().unwrap();
                assert_eq!(config.base_path, "/api/items");
                assert_eq!(config.collection, "products");
                assert!(!config.seed_on_startup);
            },
        );
    }

    #[test]
    fn test_root_base_path_rejected() {
        temp_env::with_var("ITEMS_BASE_PATH", Some("/"), || {
            assert!(matches!(
                ItemsConfig::from_env(),
                Err(ConfigError::ParseError { .. })
            ));
        });
    }

    #[test]
    fn test_bad_seed_flag_rejected() {
        temp_env::with_var("ITEMS_SEED_ON_STARTUP", Some("sometimes"), || {
            assert!(ItemsConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars_unset(["MONGODB_URL", "MONGO_URL"], || {
            assert!(Config::from_env().is_err());
        });
    }
}
