//! Database connection management
//!
//! Owns the bounded connection pool and executes parameterized queries.

pub mod builder;
pub mod queries;
mod tls;

pub use builder::QueryBuilder;

use crate::config::{DatabaseConfig, SslMode};
use crate::error::AppError;
use deadpool_postgres::{
    Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime, Timeouts,
};
use std::time::Duration;
use tokio_postgres::{NoTls, Row};
use tracing::{debug, info};

/// Maps a result row into a typed value
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error>;
}

/// Rows returned by a single statement
#[derive(Debug)]
pub struct QueryOutput {
    pub rows: Vec<Row>,
    pub row_count: usize,
}

/// Handle to the reporting database, cheap to clone
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Build the connection pool. No connection is opened until first use.
    pub fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = Some(config.password.clone());
        cfg.dbname = Some(config.database.clone());
        cfg.application_name = Some(env!("CARGO_PKG_NAME").to_string());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let timeout = Some(Duration::from_secs(config.pool_timeout_secs));
        let mut pool_config = PoolConfig::new(config.max_pool_size);
        pool_config.timeouts = Timeouts {
            wait: timeout,
            create: timeout,
            recycle: timeout,
        };
        cfg.pool = Some(pool_config);

        let pool = match config.ssl_mode {
            SslMode::Disable => {
                cfg.ssl_mode = Some(deadpool_postgres::SslMode::Disable);
                cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            }
            mode => {
                cfg.ssl_mode = Some(deadpool_postgres::SslMode::Require);
                cfg.create_pool(Some(Runtime::Tokio1), tls::make_connector(mode))
            }
        }
        .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))?;

        debug!(
            "Pool configured for {}:{}/{} (max {} connections, ssl {:?})",
            config.host, config.port, config.database, config.max_pool_size, config.ssl_mode
        );

        Ok(Self { pool })
    }

    /// Verify that a connection can be opened and used
    pub async fn ping(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    /// Execute one statement and return its rows
    pub async fn query(&self, query: &QueryBuilder) -> Result<QueryOutput, AppError> {
        let client = self.pool.get().await?;

        let rows = client.query(query.sql(), &query.params()).await?;
        let row_count = rows.len();
        debug!(
            sql = query.sql(),
            params = query.param_count(),
            rows = row_count,
            "Query executed"
        );

        Ok(QueryOutput { rows, row_count })
    }

    /// Execute and map every row
    pub async fn fetch_all<T: FromRow>(&self, query: &QueryBuilder) -> Result<Vec<T>, AppError> {
        let output = self.query(query).await?;
        let items = output
            .rows
            .iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Execute and map the first row, if any
    pub async fn fetch_optional<T: FromRow>(
        &self,
        query: &QueryBuilder,
    ) -> Result<Option<T>, AppError> {
        let output = self.query(query).await?;
        match output.rows.first() {
            Some(row) => Ok(Some(T::from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Release every pooled connection. Further checkouts fail.
    pub fn close(&self) {
        let status = self.pool.status();
        self.pool.close();
        info!("Database pool closed ({} connections released)", status.size);
    }
}
