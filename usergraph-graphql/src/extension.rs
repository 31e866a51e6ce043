//! Schema extension that classifies parse and validation failures.

use std::sync::Arc;

use async_graphql::{
    ServerError, ServerResult, ValidationResult, Variables,
    extensions::{Extension, ExtensionContext, ExtensionFactory, NextParseQuery, NextValidation},
    parser::types::ExecutableDocument,
};
use usergraph_core::error::UserError;

use crate::error::tag_server_error;

/// Tags every error raised before resolution with `SCHEMA_VALIDATION`.
///
/// Operations rejected here never reach a resolver, so no store call is made for them.
pub struct SchemaValidation;

impl ExtensionFactory for SchemaValidation {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(SchemaValidationExtension)
    }
}

struct SchemaValidationExtension;

fn classify(error: ServerError) -> ServerError {
    tracing::debug!(message = %error.message, "operation rejected before resolution");
    tag_server_error(error, UserError::SCHEMA_VALIDATION)
}

#[async_trait::async_trait]
impl Extension for SchemaValidationExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        next.run(ctx, query, variables).await.map_err(classify)
    }

    async fn validation(
        &self,
        ctx: &ExtensionContext<'_>,
        next: NextValidation<'_>,
    ) -> Result<ValidationResult, Vec<ServerError>> {
        next.run(ctx)
            .await
            .map_err(|errors| errors.into_iter().map(classify).collect())
    }
}
