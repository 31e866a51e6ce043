//! One resolver per schema field. Each performs exactly one store call.

use async_graphql::{Context, ID, Object, Result};
use usergraph_core::{
    collection::TypedCollection,
    error::UserError,
    identity::IdentityTranslator,
    query::Query,
    store::DocumentStore,
    user::{NewUser, UserPatch, UserRecord},
};

use crate::{
    error::ResultExt,
    schema::UsersCollection,
    types::{UserInput, UserObject},
};

/// The users collection of the request's store handle.
fn users<'ctx>(ctx: &Context<'ctx>) -> Result<TypedCollection<'ctx, UserRecord>> {
    let store = ctx.data::<DocumentStore>()?;
    let UsersCollection(name) = ctx.data::<UsersCollection>()?;

    Ok(store.typed_collection_named(name))
}

fn external(record: UserRecord) -> UserObject {
    IdentityTranslator::to_external(record).into()
}

#[derive(Default)]
pub struct QueryRoot;

// Every field returns `Option<Result<_>>`: a failing field resolves to null with its
// error, and its siblings still resolve.
#[Object]
impl QueryRoot {
    /// Users in insertion order. `skip` defaults to 0; a missing or zero `limit` returns every user.
    ///
    /// A stored user that cannot be read is null in the list, with its own error.
    async fn users(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        skip: Option<i32>,
    ) -> Option<Result<Vec<Option<Result<UserObject>>>>> {
        Some(list_users(ctx, Query::page(limit, skip)).await)
    }

    /// The user with the given id, or null if there is none.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Option<Result<UserObject>> {
        find_user(ctx, &id).await.transpose()
    }
}

async fn list_users(ctx: &Context<'_>, query: Query) -> Result<Vec<Option<Result<UserObject>>>> {
    let records = users(ctx)?.query(query).await.into_graphql()?;

    Ok(records
        .into_iter()
        .map(|record| Some(record.map(external).into_graphql()))
        .collect())
}

async fn find_user(ctx: &Context<'_>, id: &ID) -> Result<Option<UserObject>> {
    let id = IdentityTranslator::to_internal(id).into_graphql()?;
    let record = users(ctx)?.get(id).await.into_graphql()?;

    Ok(record.map(external))
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a user. `name` is required.
    async fn user_create(&self, ctx: &Context<'_>, input: UserInput) -> Option<Result<UserObject>> {
        Some(create_user(ctx, input).await)
    }

    /// Overwrites the supplied fields of a user and returns the merged user.
    async fn user_update(&self, ctx: &Context<'_>, id: ID, input: UserInput) -> Option<Result<UserObject>> {
        Some(update_user(ctx, id, input).await)
    }

    /// Deletes a user. Deleting a user that does not exist still succeeds.
    async fn user_delete(&self, ctx: &Context<'_>, id: ID) -> Option<Result<bool>> {
        Some(delete_user(ctx, &id).await)
    }
}

async fn create_user(ctx: &Context<'_>, input: UserInput) -> Result<UserObject> {
    let new_user = NewUser::new(input.name, input.bio).into_graphql()?;
    let record = users(ctx)?.insert(new_user).await.into_graphql()?;

    tracing::info!(id = %record.id, "created user");

    Ok(external(record))
}

async fn update_user(ctx: &Context<'_>, id: ID, input: UserInput) -> Result<UserObject> {
    let internal = IdentityTranslator::to_internal(&id).into_graphql()?;
    let patch = UserPatch::from(input);

    match users(ctx)?
        .update(internal, patch.to_set_document())
        .await
        .into_graphql()?
    {
        Some(record) => Ok(external(record)),
        None => Err(UserError::NotFound(id.0)).into_graphql(),
    }
}

async fn delete_user(ctx: &Context<'_>, id: &ID) -> Result<bool> {
    let internal = IdentityTranslator::to_internal(id).into_graphql()?;
    let outcome = users(ctx)?.delete(internal).await.into_graphql()?;

    tracing::debug!(id = %internal, deleted = outcome.deleted_count, "deleted user");

    Ok(outcome.acknowledged)
}
