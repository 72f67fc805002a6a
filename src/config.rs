use std::net::SocketAddr;

use tower_sessions::cookie::Key;

use crate::error::{config::ConfigError, AppError};

/// Immutable application configuration, loaded from the environment exactly
/// once at startup.
///
/// Every variable carries the deployment's historical default; the defaults
/// are insecure and exist for local development only.
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = env_or("DB_HOST", "localhost");
                let port = env_or("DB_PORT", "5432");
                port.parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
                let name = env_or("DB_NAME", "webportal");
                let user = env_or("DB_USER", "admin");
                let password = env_or("DB_PASSWORD", "Admin!1234");

                format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
            }
        };

        let listen_addr_raw = env_or("LISTEN_ADDR", "0.0.0.0:5000");
        let listen_addr = listen_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr_raw))?;

        let secret_key = env_or("SECRET_KEY", "supersecretkey");
        if secret_key.is_empty() {
            return Err(ConfigError::EmptySecretKey.into());
        }

        Ok(Self {
            database_url,
            listen_addr,
            secret_key,
        })
    }

    /// Derives the cookie signing key from the configured secret.
    ///
    /// `Key::derive_from` wants at least 32 bytes of material, so the secret
    /// is cycled out to 64 bytes first. `from_env` guarantees it is non-empty.
    pub fn session_key(&self) -> Key {
        let mut material = [0u8; 64];
        for (slot, byte) in material.iter_mut().zip(self.secret_key.bytes().cycle()) {
            *slot = byte;
        }

        Key::derive_from(&material)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
