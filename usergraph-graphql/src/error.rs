//! Mapping of [`UserError`] onto GraphQL errors.
//!
//! Every error carries its code under `extensions.code`. The message is the error's
//! display text, which never includes backend detail.

use async_graphql::{ErrorExtensionValues, ErrorExtensions, ServerError};
use usergraph_core::error::UserError;

/// Converts a user error into a resolver error.
pub fn graphql_error(err: UserError) -> async_graphql::Error {
    let code = err.code();

    async_graphql::Error::new(err.to_string()).extend_with(|_, extensions| extensions.set("code", code))
}

/// Converts a user error into a request level error with no path.
pub fn server_error(err: &UserError) -> ServerError {
    let mut extensions = ErrorExtensionValues::default();
    extensions.set("code", err.code());

    let mut error = ServerError::new(err.to_string(), None);
    error.extensions = Some(extensions);
    error
}

/// Tags a request level error produced by the engine with a code.
pub(crate) fn tag_server_error(mut error: ServerError, code: &str) -> ServerError {
    error
        .extensions
        .get_or_insert_with(ErrorExtensionValues::default)
        .set("code", code);
    error
}

pub(crate) trait ResultExt<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<UserError>> ResultExt<T> for Result<T, E> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|err| graphql_error(err.into()))
    }
}
