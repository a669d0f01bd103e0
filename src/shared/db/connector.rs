use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Closed set of storage engines. Every variant is fully wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    MySql,
    Postgres,
    Sqlite,
}

impl FromStr for DatabaseEngine {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConnectorError::UnknownEngine(other.to_string())),
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => write!(f, "mysql"),
            Self::Postgres => write!(f, "postgres"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConnectorError {
    #[error("unknown db type {0}")]
    UnknownEngine(String),

    #[error("Database connection failed: {0}")]
    Connection(String),
}

#[derive(Clone)]
pub struct DatabaseSettings {
    pub engine: DatabaseEngine,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    /// Database name, or the file path for SQLite.
    pub name: String,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("engine", &self.engine)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseSettings {
    pub fn url(&self) -> String {
        match self.engine {
            DatabaseEngine::MySql => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
            DatabaseEngine::Postgres => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
            DatabaseEngine::Sqlite if self.name == ":memory:" => "sqlite::memory:".to_string(),
            DatabaseEngine::Sqlite => format!("sqlite://{}?mode=rwc", self.name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 50,
            min_connections: 10,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl PoolSettings {
    /// One long-lived connection. An in-memory SQLite database only exists
    /// inside the connection that created it.
    pub fn single_connection() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }
}

/// Opens the pooled handle shared by every repository.
pub async fn connect(
    settings: &DatabaseSettings,
    pool: &PoolSettings,
) -> Result<DatabaseConnection, ConnectorError> {
    let mut opt = ConnectOptions::new(settings.url());
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(pool.connect_timeout)
        .acquire_timeout(pool.acquire_timeout)
        .idle_timeout(pool.idle_timeout)
        .max_lifetime(pool.max_lifetime)
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .map_err(|e| ConnectorError::Connection(e.to_string()))
}
