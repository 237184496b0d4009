//! Error types for the memorial designer

use thiserror::Error;

/// Main error type for memorial designer operations
#[derive(Error, Debug)]
pub enum MemorialError {
    /// Error during preference storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Image encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Export of the preview card failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// No share channel could deliver
    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    /// A decorative startup task could not start
    #[error("Decor error: {0}")]
    Decor(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the export pipeline (rasterize, encode, save).
#[derive(Error, Debug)]
pub enum ExportError {
    /// An export is already running; the button is disabled
    #[error("an export is already in progress")]
    InFlight,

    /// The element tree has no preview card to capture
    #[error("preview card not found: {0}")]
    MissingCard(String),

    /// The rasterizer could not produce a bitmap
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// PNG encoding failed
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the downloaded file failed
    #[error("saving failed: {0}")]
    Save(#[from] std::io::Error),
}

/// Failures of a single share channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The channel does not exist on this platform
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The channel exists but refused or failed the delivery
    #[error("{channel} failed: {reason}")]
    Failed {
        channel: &'static str,
        reason: String,
    },
}

/// Result type alias using MemorialError
pub type MemorialResult<T> = Result<T, MemorialError>;
