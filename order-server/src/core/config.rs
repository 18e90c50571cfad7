use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/order-desk | Working directory (database, logs) |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | DB_NAMESPACE | order_desk | SurrealDB namespace |
/// | DB_NAME | main | SurrealDB database |
/// | STORAGE_TIMEOUT_MS | 100000 | Deadline for each storage operation |
/// | MAX_FOOD_PRICE | 100000 | Upper bound for food and line prices |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/orders STORAGE_TIMEOUT_MS=5000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and logs
    pub work_dir: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub db_namespace: String,
    pub db_name: String,
    /// Deadline applied to every storage operation (milliseconds)
    pub storage_timeout_ms: u64,
    pub max_food_price: Decimal,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present)
    ///
    /// Unset or unparseable variables fall back to their defaults
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            work_dir: env_or("WORK_DIR", "/var/lib/order-desk"),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            db_namespace: env_or("DB_NAMESPACE", "order_desk"),
            db_name: env_or("DB_NAME", "main"),
            storage_timeout_ms: std::env::var("STORAGE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000),
            max_food_price: std::env::var("MAX_FOOD_PRICE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Decimal::from(100_000)),
        }
    }

    /// Override the work dir and storage deadline
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, storage_timeout_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.storage_timeout_ms = storage_timeout_ms;
        config
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage_timeout_ms)
    }

    /// Directory holding the RocksDB files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_and_derived_paths() {
        let config = Config::with_overrides("/tmp/orders-test", 250);
        assert_eq!(config.storage_timeout(), Duration::from_millis(250));
        assert_eq!(
            config.database_dir(),
            PathBuf::from("/tmp/orders-test").join("database")
        );
    }
}
