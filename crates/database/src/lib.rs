use std::{path::PathBuf, sync::Arc};

use preparedness::Storage;
use thiserror::Error;

pub mod codec;
pub mod config;
pub mod data_model;
pub mod embedded;
pub mod hosted;
pub mod queries;
mod schema;

pub use config::{BackendConfig, DatabaseConfig};
pub use embedded::SqliteDatabase;
pub use hosted::PgDatabase;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not connect to the hosted database: {0}")]
    Hosted(#[source] sqlx::Error),
    #[error("could not migrate the hosted database: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("could not open the embedded database at '{}': {source}", path.display())]
    Embedded {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
}

/// Opens the backend selected by `config`. The hosted backend is migrated,
/// the tables of the embedded one are created if missing.
pub async fn connect(config: DatabaseConfig) -> Result<Arc<dyn Storage>, ConnectError> {
    match config.backend {
        BackendConfig::Hosted { url } => {
            let database = PgDatabase::connect(&url).await?;
            log::info!("connected to hosted database.");
            Ok(Arc::new(database))
        }
        BackendConfig::Embedded { path } => {
            let database = SqliteDatabase::open(&path).await?;
            log::info!("opened embedded database at '{}'.", path.display());
            Ok(Arc::new(database))
        }
    }
}
