//! Per-request entry point.

use std::sync::Arc;

use async_graphql::{Request, Response};
use tracing::Instrument;

use crate::{error::server_error, provider::ConnectionProvider, schema::UserSchema};

/// Routes requests to the schema with a request-scoped store handle.
#[derive(Clone)]
pub struct Dispatcher {
    schema: UserSchema,
    provider: Arc<ConnectionProvider>,
}

impl Dispatcher {
    pub fn new(schema: UserSchema, provider: ConnectionProvider) -> Self {
        Self {
            schema,
            provider: Arc::new(provider),
        }
    }

    pub fn schema(&self) -> &UserSchema {
        &self.schema
    }

    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }

    /// Executes one GraphQL request.
    ///
    /// When the store cannot be reached the request is not executed and the response
    /// holds a single `CONNECTION_ERROR` with no data.
    pub async fn dispatch(&self, request: Request) -> Response {
        let span = tracing::info_span!(
            "graphql",
            operation = request.operation_name.as_deref().unwrap_or("anonymous"),
        );

        async move {
            let store = match self.provider.acquire().await {
                Ok(store) => store,
                Err(err) => return Response::from_errors(vec![server_error(&err)]),
            };

            let response = self.schema.execute(request.data(store)).await;

            if response.is_err() {
                tracing::debug!(errors = response.errors.len(), "request completed with errors");
            }

            response
        }
        .instrument(span)
        .await
    }
}
