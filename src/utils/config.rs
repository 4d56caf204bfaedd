use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_string(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_string(),
            currency: env::var("CURRENCY")
                .unwrap_or("$".to_string())
                .to_string(),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency.is_empty() {
            return Err(anyhow::anyhow!("CURRENCY must not be empty"));
        }

        // Symbol or short code, not a whole word
        if self.currency.chars().count() > 3 {
            return Err(anyhow::anyhow!(
                "CURRENCY must be a symbol or a code of at most 3 characters"
            ));
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
