use thiserror::Error;

/// Failures raised by the contact store. Handlers log the detail and answer
/// with a generic message; nothing below this type crosses the wire.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}
