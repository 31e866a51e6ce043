//! The user record in its stored and external shapes.
//!
//! - [`UserRecord`] - the stored shape, keyed by `_id`
//! - [`User`] - the external shape, keyed by a string `id`
//! - [`NewUser`] - the fields accepted on creation
//! - [`UserPatch`] - a merge-patch of the fields accepted on update

use bson::{Bson, doc, oid::ObjectId};

use crate::{
    document::{Document, take_object_id, take_optional_string, take_string},
    error::{DocumentStoreError, DocumentStoreResult},
};

/// A user as stored in the document store.
///
/// Fields other than `name` and `bio` are kept in `extra` exactly as they were
/// read, so they round-trip through reads and updates.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: ObjectId,
    pub name: String,
    pub bio: Option<String>,
    pub extra: bson::Document,
}

impl Document for UserRecord {
    fn collection_name() -> &'static str {
        "users"
    }
}

impl TryFrom<bson::Document> for UserRecord {
    type Error = DocumentStoreError;

    fn try_from(mut document: bson::Document) -> DocumentStoreResult<Self> {
        Ok(UserRecord {
            id: take_object_id(&mut document)?,
            name: take_string(&mut document, "name")?,
            bio: take_optional_string(&mut document, "bio")?,
            extra: document,
        })
    }
}

impl From<UserRecord> for bson::Document {
    fn from(record: UserRecord) -> Self {
        let mut document = doc! {
            "_id": record.id,
            "name": record.name,
        };

        if let Some(bio) = record.bio {
            document.insert("bio", bio);
        }

        for (key, value) in record.extra {
            document.insert(key, value);
        }

        document
    }
}

/// A user as seen by API clients.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// External identifier, see [`IdentityTranslator`](crate::identity::IdentityTranslator).
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    /// Stored fields outside the declared shape.
    pub extra: bson::Document,
}

/// Fields for a user that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub bio: Option<String>,
}

impl NewUser {
    /// Validates a creation payload. `name` is required.
    pub fn new(name: Option<String>, bio: Option<String>) -> DocumentStoreResult<Self> {
        match name {
            Some(name) => Ok(NewUser { name, bio }),
            None => Err(DocumentStoreError::InvalidDocument(
                "name is required to create a user".into(),
            )),
        }
    }
}

impl From<NewUser> for bson::Document {
    fn from(user: NewUser) -> Self {
        let mut document = doc! { "name": user.name };

        if let Some(bio) = user.bio {
            document.insert("bio", bio);
        }

        document
    }
}

/// A merge-patch over a user's fields.
///
/// `Some` overwrites the stored value, `None` leaves it untouched. There is no way
/// to remove a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UserPatch {
    /// Returns true when the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.bio.is_none()
    }

    /// Builds the `$set` body for this patch: only the supplied fields.
    pub fn to_set_document(&self) -> bson::Document {
        let mut set = bson::Document::new();

        if let Some(name) = &self.name {
            set.insert("name", Bson::String(name.clone()));
        }
        if let Some(bio) = &self.bio {
            set.insert("bio", Bson::String(bio.clone()));
        }

        set
    }
}
