//! Translation between store identifiers and external identifiers.
//!
//! The store keys records by a BSON [`ObjectId`] under `_id`. Clients only ever see
//! the 24 character lowercase hex form of that id under `id`. Only the canonical
//! spelling is accepted back, so `external -> internal -> external` is the identity
//! for every input that parses.

use bson::oid::ObjectId;

use crate::{
    error::InvalidIdentifier,
    user::{User, UserRecord},
};

/// Converts identifiers and records between their stored and external forms.
pub struct IdentityTranslator;

impl IdentityTranslator {
    /// Encodes a store identifier for clients.
    pub fn encode(id: &ObjectId) -> String {
        id.to_hex()
    }

    /// Parses an external identifier into a store identifier.
    pub fn to_internal(id: &str) -> Result<ObjectId, InvalidIdentifier> {
        match ObjectId::parse_str(id) {
            Ok(oid) if oid.to_hex() == id => Ok(oid),
            _ => Err(InvalidIdentifier(id.to_string())),
        }
    }

    /// Reshapes a stored record for clients, replacing `_id` with `id`.
    pub fn to_external(record: UserRecord) -> User {
        User {
            id: Self::encode(&record.id),
            name: record.name,
            bio: record.bio,
            extra: record.extra,
        }
    }
}
