use std::str::FromStr;

use crate::shared::db::{DatabaseEngine, DatabaseSettings};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Error loading env file (tried {0})")]
    EnvFileMissing(String),

    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("unknown db type {0}")]
    UnknownEngine(String),
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HasherSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HasherSettings {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub hasher: HasherSettings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment. Neither file being readable is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() && dotenvy::dotenv().is_err() {
            return Err(ConfigError::EnvFileMissing(format!("{env_file}, .env")));
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        let engine_raw = required("DB_TYPE")?;
        let engine = DatabaseEngine::from_str(&engine_raw)
            .map_err(|_| ConfigError::UnknownEngine(engine_raw.clone()))?;

        // SQLite only needs a file name; network engines need the full set.
        let database = match engine {
            DatabaseEngine::Sqlite => DatabaseSettings {
                engine,
                user: lookup("DB_USER").unwrap_or_default(),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                host: lookup("DB_HOST").unwrap_or_default(),
                port: lookup("DB_PORT").unwrap_or_default(),
                name: required("DB_NAME")?,
            },
            _ => DatabaseSettings {
                engine,
                user: required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                host: required("DB_HOST")?,
                port: required("DB_PORT")?,
                name: required("DB_NAME")?,
            },
        };

        let server = ServerSettings {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), 5000)?,
        };

        let cors = CorsSettings {
            allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        };

        let defaults = HasherSettings::default();
        let hasher = HasherSettings {
            memory_kib: parse_or(
                "ARGON2_MEMORY_KIB",
                lookup("ARGON2_MEMORY_KIB"),
                defaults.memory_kib,
            )?,
            iterations: parse_or(
                "ARGON2_ITERATIONS",
                lookup("ARGON2_ITERATIONS"),
                defaults.iterations,
            )?,
            parallelism: parse_or(
                "ARGON2_PARALLELISM",
                lookup("ARGON2_PARALLELISM"),
                defaults.parallelism,
            )?,
        };

        Ok(Self {
            database,
            server,
            cors,
            hasher,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}
