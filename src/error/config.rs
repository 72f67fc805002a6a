use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// SECRET_KEY resolved to an empty string; the session layer needs key
    /// material to sign cookies.
    #[error("SECRET_KEY must not be empty")]
    EmptySecretKey,

    /// DB_PORT was set to something that is not a port number.
    #[error("DB_PORT is not a valid port number: '{0}'")]
    InvalidPort(String),

    /// LISTEN_ADDR was set to something that is not a socket address.
    #[error("LISTEN_ADDR is not a valid socket address: '{0}'")]
    InvalidListenAddr(String),
}
