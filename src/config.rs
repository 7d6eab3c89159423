use std::net::{IpAddr, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub greeting: String,
    pub db_name: String,
    pub db_user: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `HELLO_MSG`
    /// Optional with defaults: `DB_NAME`, `DB_USER`, `SERVER_HOST`, `SERVER_PORT`, `LOG_LEVEL`
    ///
    /// In container deployments, `PORT` overrides `SERVER_PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HELLO_MSG` is not set, or if `SERVER_HOST` / `SERVER_PORT`
    /// contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let greeting = std::env::var("HELLO_MSG")
            .map_err(|_| anyhow::anyhow!("HELLO_MSG must be set"))?;

        // Display fields only; no connection is ever opened with them
        let db_name = std::env::var("DB_NAME").unwrap_or_default();
        let db_user = std::env::var("DB_USER").unwrap_or_default();

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            greeting,
            db_name,
            db_user,
            server_host,
            server_port,
            log_level,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}
