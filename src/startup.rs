use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_sessions::{service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::{config::Config, error::AppError};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session middleware layer on top of the database pool.
///
/// Sessions live in a Postgres-backed store keyed by a signed cookie; the
/// signing key is derived from SECRET_KEY. The store's own table is migrated
/// here, separately from the application schema.
///
/// # Arguments
/// - `config` - Application configuration providing the signing key
/// - `db` - Connected database whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer<PostgresStore>)` - Layer ready to attach to the router
/// - `Err(AppError)` - Failed to migrate the session table
pub async fn session_layer(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore, SignedCookie>, AppError> {
    let pool = db.get_postgres_connection_pool().clone();

    let session_store = PostgresStore::new(pool);
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_signed(config.session_key())
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the CORS layer.
///
/// The portal frontend is served from another origin and sends the session
/// cookie, so credentialed requests are allowed and the request origin is
/// mirrored back (a wildcard origin is rejected by browsers when credentials
/// are in play).
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
