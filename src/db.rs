//! Persistence gateway
//!
//! Owns the database handle shared by every repository and is the only place
//! driver errors are classified.

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbBackend,
    DbErr, Schema, SqlErr, Statement, TransactionTrait,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::{DatabaseConfig, DbKind};
use crate::entity::{department, employee, hr, leave, leave_type, national_holiday};

/// Storage failures as seen by the repositories
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection handle was configured
    #[error("Database connection is nil")]
    Unavailable,

    #[error("{0}")]
    UniqueViolation(String),

    #[error("{0}")]
    Driver(String),
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StorageError::UniqueViolation(msg),
            _ => StorageError::Driver(err.to_string()),
        }
    }
}

/// Shared database handle, `None` when the service runs without storage
#[derive(Clone, Debug)]
pub struct Gateway {
    conn: Option<Arc<DatabaseConnection>>,
}

impl Gateway {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self::shared(Arc::new(conn))
    }

    /// Gateway over a handle the caller keeps a reference to
    pub fn shared(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn: Some(conn) }
    }

    /// Gateway without a connection; every operation reports `Unavailable`
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Borrow the connection for statement execution and queries
    pub fn conn(&self) -> Result<&DatabaseConnection, StorageError> {
        self.conn.as_deref().ok_or(StorageError::Unavailable)
    }

    /// Open a transaction on the shared connection
    pub async fn begin(&self) -> Result<DatabaseTransaction, StorageError> {
        Ok(self.conn()?.begin().await?)
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        Ok(self.conn()?.ping().await?)
    }
}

/// Connect to the configured database and create missing tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.connection_url();

    info!("Connecting to database: {}", config.display_target());

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);
    if config.kind == DbKind::Postgres {
        opt.set_schema_search_path("public");
    }

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    if config.auto_create_tables {
        ensure_schema(&db).await?;
    }

    Ok(db)
}

/// Create every table that does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Creating missing tables...");

    // Referenced tables first
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(department::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(employee::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(hr::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(national_holiday::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(leave_type::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(leave::Entity)).await?;

    info!("Schema ready");
    Ok(())
}

async fn create_table_if_not_exists(
    db: &DatabaseConnection,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();

    let sql = backend.build(&stmt);

    db.execute(Statement::from_string(backend, sql.to_string())).await?;

    Ok(())
}
