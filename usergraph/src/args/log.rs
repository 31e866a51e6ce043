use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from usergraph crates
    Error,
    /// Warnings and errors from usergraph crates
    Warn,
    /// Info, warning and error messages from usergraph crates
    #[default]
    Info,
    /// Debug, info, warning and error messages from usergraph crates
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "usergraph=error,usergraph_graphql=error,usergraph_core=error,usergraph_memory=error,usergraph_mongodb=error,off",
            LogLevel::Warn => "usergraph=warn,usergraph_graphql=warn,usergraph_core=warn,usergraph_memory=warn,usergraph_mongodb=warn,off",
            LogLevel::Info => "usergraph=info,usergraph_graphql=info,usergraph_core=info,usergraph_memory=info,usergraph_mongodb=info,off",
            LogLevel::Debug => "usergraph=debug,usergraph_graphql=debug,usergraph_core=debug,usergraph_memory=debug,usergraph_mongodb=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum LogStyle {
    /// Standard text
    #[default]
    Text,
    /// JSON objects, one per line
    Json,
}

impl AsRef<str> for LogStyle {
    fn as_ref(&self) -> &str {
        match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
