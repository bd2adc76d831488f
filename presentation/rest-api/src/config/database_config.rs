use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error)]
pub enum DatabaseConfigError {
    #[error("config.database_url_missing")]
    UrlMissing,
    #[error("config.invalid_max_connections: {0}")]
    InvalidMaxConnections(String),
}

/// Initialize database connection pool from environment variables and bring
/// the schema up to date.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory with SQL migrations
///   (default: "./infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").map_err(|_| DatabaseConfigError::UrlMissing)?;
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())? {
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("Database ready (migrations from {migrations_path})");

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> Result<Option<u32>, DatabaseConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(DatabaseConfigError::InvalidMaxConnections(value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_max_connections_unset() {
        assert!(matches!(parse_max_connections(None), Ok(None)));
    }

    #[test]
    fn should_parse_max_connections() {
        assert!(matches!(
            parse_max_connections(Some("10".to_string())),
            Ok(Some(10))
        ));
    }

    #[test]
    fn should_reject_zero_or_garbage_max_connections() {
        assert!(parse_max_connections(Some("0".to_string())).is_err());
        assert!(parse_max_connections(Some("many".to_string())).is_err());
    }
}
