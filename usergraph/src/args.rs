use std::{fmt, io::IsTerminal, net::SocketAddr};

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use usergraph::server::ServerConfig;

mod log;

use self::log::{LogLevel, LogStyle};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum Backend {
    /// A MongoDB deployment reached through --mongodb-uri
    #[value(name = "mongodb")]
    MongoDb,
    /// Process memory; data is lost on exit
    Memory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::MongoDb => "mongodb",
            Backend::Memory => "memory",
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "usergraph", version)]
/// GraphQL user service over a document store
pub(crate) struct Args {
    /// IP address on which the server will listen for incoming connections.
    #[arg(short, long, env = "USERGRAPH_LISTEN_ADDRESS", default_value = "127.0.0.1:4000")]
    pub listen_address: SocketAddr,
    /// Port to listen on, replacing the port of the listen address
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
    /// Storage backend users are kept in
    #[arg(long, env = "USERGRAPH_BACKEND", default_value_t = Backend::MongoDb)]
    pub backend: Backend,
    /// MongoDB connection string, required by the mongodb backend
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: Option<String>,
    /// Database holding the users collection
    #[arg(long, env = "USERGRAPH_DATABASE", default_value = "wtf")]
    pub database: String,
    /// Collection users are stored in
    #[arg(long, env = "USERGRAPH_COLLECTION", default_value = "users")]
    pub collection: String,
    /// Serve the GraphiQL explorer on GET /graphql
    #[arg(long, env = "USERGRAPH_GRAPHIQL", default_value_t = true, action = ArgAction::Set)]
    pub graphiql: bool,
    /// Print the schema SDL and exit
    #[arg(long)]
    pub print_schema: bool,
    /// Set the logging level
    #[arg(long = "log", env = "USERGRAPH_LOG", default_value_t = LogLevel::default())]
    log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "USERGRAPH_LOG_STYLE", default_value_t = LogStyle::default())]
    log_style: LogStyle,
}

impl Args {
    pub fn server_config(&self) -> ServerConfig {
        let mut listen_address = self.listen_address;
        if let Some(port) = self.port {
            listen_address.set_port(port);
        }

        ServerConfig {
            listen_address,
            graphiql: self.graphiql,
        }
    }

    /// Installs the global tracing subscriber. `RUST_LOG`, when set, overrides `--log`.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level.as_filter_str()));
        let layer = tracing_subscriber::fmt::layer();

        let layer = match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if std::io::stdout().is_terminal() => layer.with_ansi(true).boxed(),
            // for server logs, colors are off
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        };

        tracing_subscriber::registry().with(layer).with(filter).init();
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
