use serde::Deserialize;
use std::env;

/// Quote expiry is computed with chrono, which panics past its date range
pub const MAX_VALIDITY_DAYS: u32 = 3650;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub quotes: QuoteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuoteConfig {
    /// Days between quote creation and expiry
    pub validity_days: u32,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("quotes.validity_days", 30_i64)?
            // Shared defaults, then the run mode, then an unversioned local override
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `CPQ_SERVER__PORT=9090` would set `server.port`
            .add_source(
                config::Environment::with_prefix("CPQ")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let days = self.quotes.validity_days;
        if days == 0 || days > MAX_VALIDITY_DAYS {
            return Err(config::ConfigError::Message(format!(
                "quotes.validity_days must be between 1 and {}, got {}",
                MAX_VALIDITY_DAYS, days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_files() {
        let config = Config::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.quotes.validity_days, 30);
    }

    #[test]
    fn test_validity_days_bounds() {
        let with_days = |validity_days| Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            quotes: QuoteConfig { validity_days },
        };

        assert!(with_days(1).validate().is_ok());
        assert!(with_days(MAX_VALIDITY_DAYS).validate().is_ok());
        assert!(with_days(0).validate().is_err());
        assert!(with_days(MAX_VALIDITY_DAYS + 1).validate().is_err());
        assert!(with_days(1_000_000_000).validate().is_err());
    }
}
