/// Database configuration loaded from environment variables.
///
/// `DATABASE_URL` is required; the pool settings have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Maximum pool size (default: `20`).
    pub max_connections: u32,
    /// Seconds to wait for a connection from the pool (default: `30`).
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default    |
    /// |---------------------------|------------|
    /// | `DATABASE_URL`            | (required) |
    /// | `DB_MAX_CONNECTIONS`      | `20`       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`       |
    ///
    /// Panics if `DATABASE_URL` is unset or a setting fails to parse,
    /// so misconfiguration is caught at startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        }
    }
}
