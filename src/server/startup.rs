use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, model::user::CredentialsParam, service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite database as the application data. The store's own
/// table is created here if missing. Cookies are HTTP-only, carry `Secure` when
/// configured, and expire after 24 hours of inactivity until a login pins a fixed expiry.
///
/// # Arguments
/// - `db` - Connected application database
/// - `config` - Application configuration containing the cookie security flag
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::InternalError)` - The session table could not be created
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    Ok(session)
}

/// Creates or promotes the configured admin account when no admin exists.
///
/// Skipped unless both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.
///
/// # Arguments
/// - `db` - Connected application database
/// - `config` - Application configuration containing the admin credentials
///
/// # Returns
/// - `Ok(())` - Admin present, created, or bootstrap not configured
/// - `Err(AppError)` - Database or hashing error
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        return Ok(());
    };

    let admin = AuthService::new(db)
        .ensure_admin(CredentialsParam {
            username: username.clone(),
            password: password.clone(),
        })
        .await?;

    if let Some(admin) = admin {
        tracing::info!("Admin account ready: {} ({})", admin.username, admin.id);
    }

    Ok(())
}
