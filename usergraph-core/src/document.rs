//! Core trait for typed records stored in a document collection.
//!
//! Records convert to and from raw BSON documents explicitly rather than through
//! serde, so every field a record knows about is handled by name and everything
//! else is carried along untouched.

use bson::{Bson, oid::ObjectId};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// Core trait that all records stored in a document store must implement.
///
/// # Example
///
/// ```ignore
/// use usergraph_core::document::Document;
/// use bson::oid::ObjectId;
///
/// #[derive(Debug, Clone)]
/// pub struct Tag {
///     pub id: ObjectId,
///     pub label: String,
/// }
///
/// impl Document for Tag {
///     fn collection_name() -> &'static str {
///         "tags"
///     }
/// }
/// ```
pub trait Document:
    TryFrom<bson::Document, Error = DocumentStoreError>
    + Into<bson::Document>
    + Send
    + Sync
    + Clone
    + 'static
{
    /// Returns the default name of the collection this record belongs to.
    fn collection_name() -> &'static str;
}

/// Removes the store identifier from a raw document.
pub(crate) fn take_object_id(document: &mut bson::Document) -> DocumentStoreResult<ObjectId> {
    match document.remove("_id") {
        Some(Bson::ObjectId(id)) => Ok(id),
        Some(other) => Err(DocumentStoreError::InvalidDocument(format!(
            "expected an object id under _id, found {:?}",
            other.element_type()
        ))),
        None => Err(DocumentStoreError::InvalidDocument("missing _id".into())),
    }
}

/// Removes a required string field from a raw document.
pub(crate) fn take_string(document: &mut bson::Document, field: &str) -> DocumentStoreResult<String> {
    match take_optional_string(document, field)? {
        Some(value) => Ok(value),
        None => Err(DocumentStoreError::InvalidDocument(format!("missing required field {field}"))),
    }
}

/// Removes an optional string field from a raw document. `null` reads as absent.
pub(crate) fn take_optional_string(
    document: &mut bson::Document,
    field: &str,
) -> DocumentStoreResult<Option<String>> {
    match document.remove(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::String(value)) => Ok(Some(value)),
        Some(other) => Err(DocumentStoreError::InvalidDocument(format!(
            "expected a string under {field}, found {:?}",
            other.element_type()
        ))),
    }
}
