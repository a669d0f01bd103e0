mod connector;

pub use connector::{connect, ConnectorError, DatabaseEngine, DatabaseSettings, PoolSettings};
