use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub catalog_path: Option<String>,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            catalog_path: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Config::default();
        let config = Config {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        };

        config.validate()?;
        Ok(config)
    }

    /// Replaces the catalog path, e.g. from the `--catalog` flag.
    pub fn with_catalog_path(mut self, path: Option<String>) -> anyhow::Result<Self> {
        if path.is_some() {
            self.catalog_path = path;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CURRENCY_SYMBOL must not be empty"));
        }

        if let Some(path) = &self.catalog_path {
            if !path.ends_with(".json") {
                return Err(anyhow::anyhow!(
                    "CATALOG_PATH must point to a .json file, got '{}'",
                    path
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
