use async_graphql::{EmptySubscription, Schema};

use crate::{
    extension::SchemaValidation,
    resolvers::{MutationRoot, QueryRoot},
};

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Name of the collection users are stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersCollection(pub String);

/// Builds the schema. The store handle is not part of it; the dispatcher attaches one
/// to every request.
pub fn build_schema(collection: &str) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(UsersCollection(collection.to_string()))
        .extension(SchemaValidation)
        .finish()
}

/// Exports the schema as SDL.
pub fn export_schema_sdl() -> String {
    build_schema("users").sdl()
}
