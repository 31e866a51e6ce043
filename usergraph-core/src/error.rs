//! Error types and result types for document store and user operations.
//!
//! Two layers live here. [`DocumentStoreError`] describes faults raised by a storage
//! backend, while [`UserError`] is the client-facing taxonomy that resolvers surface.
//! Use [`DocumentStoreResult<T>`] in backends and [`UserResult<T>`] above them.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting between document formats.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// The document violates schema constraints or has invalid structure.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<BsonError> for DocumentStoreError {
    fn from(err: BsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}

/// The external identifier could not be parsed into a store identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// Client-visible failures of a user operation.
///
/// Every variant maps to a stable [`code`](UserError::code) that is attached to the
/// GraphQL error entry. Messages never carry backend detail; [`UserError::Operation`]
/// keeps the underlying [`DocumentStoreError`] only as its source.
#[derive(Error, Debug)]
pub enum UserError {
    /// The operation failed to parse or validate against the schema.
    #[error("{0}")]
    SchemaValidation(String),
    /// The external identifier is malformed.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
    /// No user matches the identifier.
    #[error("User {0} not found")]
    NotFound(String),
    /// The document store could not be reached.
    #[error("Document store is unavailable")]
    Connection(#[source] DocumentStoreError),
    /// Any other store-level failure.
    #[error("Operation failed")]
    Operation(#[source] DocumentStoreError),
}

impl UserError {
    pub const SCHEMA_VALIDATION: &'static str = "SCHEMA_VALIDATION";
    pub const INVALID_IDENTIFIER: &'static str = "INVALID_IDENTIFIER";
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const CONNECTION_ERROR: &'static str = "CONNECTION_ERROR";
    pub const OPERATION_ERROR: &'static str = "OPERATION_ERROR";

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            UserError::SchemaValidation(_) => Self::SCHEMA_VALIDATION,
            UserError::InvalidIdentifier(_) => Self::INVALID_IDENTIFIER,
            UserError::NotFound(_) => Self::NOT_FOUND,
            UserError::Connection(_) => Self::CONNECTION_ERROR,
            UserError::Operation(_) => Self::OPERATION_ERROR,
        }
    }
}

impl From<DocumentStoreError> for UserError {
    fn from(err: DocumentStoreError) -> Self {
        tracing::error!(error = %err, "document store operation failed");
        UserError::Operation(err)
    }
}

/// A specialized `Result` type for user operations.
pub type UserResult<T> = Result<T, UserError>;
