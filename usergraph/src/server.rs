//! HTTP transport for the dispatcher.

use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
};
use tokio::net::TcpListener;
use usergraph_graphql::Dispatcher;

const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub listen_address: SocketAddr,
    /// Serve the GraphiQL explorer on `GET /graphql`.
    pub graphiql: bool,
}

/// Builds the router. Without GraphiQL, `GET /graphql` answers 405.
pub fn router(dispatcher: Dispatcher, graphiql: bool) -> Router {
    let mut graphql = post(graphql_handler);

    if graphiql {
        graphql = graphql.get(graphiql_handler);
    }

    Router::new().route(GRAPHQL_PATH, graphql).with_state(dispatcher)
}

/// Serves until Ctrl-C, then shuts the store down.
pub async fn serve(config: ServerConfig, dispatcher: Dispatcher) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.listen_address).await?;
    let address = listener.local_addr()?;

    tracing::info!("listening on http://{address}{GRAPHQL_PATH}");
    if config.graphiql {
        tracing::info!("GraphiQL explorer at http://{address}{GRAPHQL_PATH}");
    }

    axum::serve(listener, router(dispatcher.clone(), config.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // only a store that was actually connected needs closing
    if let Some(store) = dispatcher.provider().get() {
        store.shutdown().await?;
        tracing::info!("document store closed");
    }

    Ok(())
}

async fn graphql_handler(State(dispatcher): State<Dispatcher>, request: GraphQLRequest) -> GraphQLResponse {
    dispatcher.dispatch(request.into_inner()).await.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(err) => tracing::error!(error = %err, "failed to listen for the shutdown signal"),
    }
}
