use args::{Args, Backend};
use usergraph::{
    graphql::{ConnectionProvider, Dispatcher, build_schema, export_schema_sdl},
    memory::InMemoryStore,
};

mod args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    if args.print_schema {
        println!("{}", export_schema_sdl());
        return Ok(());
    }

    args.init_logging();

    tracing::info!("usergraph {}", env!("CARGO_PKG_VERSION"));

    let provider = connection_provider(&args)?;
    let dispatcher = Dispatcher::new(build_schema(&args.collection), provider);

    // connect eagerly; a failure here is retried by the first request
    if let Err(err) = dispatcher.provider().acquire().await {
        tracing::warn!(error = %err, "document store not reachable yet");
    }

    usergraph::server::serve(args.server_config(), dispatcher).await?;

    Ok(())
}

fn connection_provider(args: &Args) -> anyhow::Result<ConnectionProvider> {
    match args.backend {
        Backend::Memory => {
            tracing::warn!("using the in-memory backend, data is lost on exit");
            Ok(ConnectionProvider::new(InMemoryStore::builder()))
        }
        #[cfg(feature = "mongodb")]
        Backend::MongoDb => {
            use anyhow::Context;

            let uri = args
                .mongodb_uri
                .as_deref()
                .context("--mongodb-uri (or MONGODB_URI) is required by the mongodb backend")?;

            Ok(ConnectionProvider::new(usergraph::mongodb::MongoDbStore::builder(
                uri,
                &args.database,
            )))
        }
        #[cfg(not(feature = "mongodb"))]
        Backend::MongoDb => anyhow::bail!("usergraph was built without the mongodb feature"),
    }
}
