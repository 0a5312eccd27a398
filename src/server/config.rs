use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Server configuration read from the environment.
pub struct Config {
    /// Connection string for the database
    pub database_url: String,
    /// Socket address the HTTP listener binds to
    pub listen_addr: String,
    /// Upper bound of the database connection pool
    pub database_max_connections: u32,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required, `LISTEN_ADDR` and `DATABASE_MAX_CONNECTIONS` fall back to
    /// their defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let database_max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DATABASE_MAX_CONNECTIONS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
        })
    }
}
