use thiserror::Error;

pub mod actions;
pub mod model;
pub mod pool;

pub use actions::{Actions, InsertMeasurement, ListMeasurements};
pub use model::{Measurement, NewMeasurement};
pub use pool::{DbPool, MysqlStore};

/// Failures raised while talking to the measurements table.
#[derive(Debug, Error)]
pub enum DbError {
    /// no connection could be acquired from the pool
    #[error("connection unavailable: {0}")]
    Connection(#[from] r2d2::Error),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("generated id {0} does not fit the id column")]
    IdOutOfRange(u64),
    /// the executor actor went away before answering
    #[error("database executor unavailable: {0}")]
    Executor(#[from] actix::MailboxError),
}

/// Storage backend for measurements.
///
/// Calls block the current thread; they are only ever issued from the
/// `Actions` executor workers, never from the http event loop.
pub trait MeasurementStore: Send + Sync {
    /// Every stored row, in whatever order storage returns them.
    fn list_all(&self) -> Result<Vec<Measurement>, DbError>;

    /// Stores `new` and returns it together with the id storage assigned.
    fn insert(&self, new: NewMeasurement) -> Result<Measurement, DbError>;
}
