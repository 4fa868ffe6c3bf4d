//! Common CLI flags for logging

use std::fmt::Display;

/// Log filter applied when neither `--log-filter` nor `-v` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI config for the logging related subset of options
#[derive(Debug, Clone, clap::Parser)]
pub struct LoggingConfig {
    /// Logs: filter directive
    ///
    /// Configures log severity level filter, by target.
    ///
    /// Simplest options: error, warn, info, debug, trace
    ///
    /// Levels for different modules can be specified. For example
    /// `debug,hyper::proto::h1=info` specifies debug logging for all modules
    /// except for the `hyper::proto::h1` module which will only display info
    /// level logging.
    ///
    /// Overridden by `-v`.
    #[clap(long = "log-filter", env = "LOG_FILTER", action)]
    pub log_filter: Option<String>,

    /// Logs: filter short-hand
    ///
    /// Convenient way to set log severity level filter.
    /// Overrides `--log-filter`.
    ///
    /// -v   'info'
    ///
    /// -vv  'debug,hyper::proto::h1=info,h2=info'
    ///
    /// -vvv 'trace,hyper::proto::h1=info,h2=info'
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub log_verbose_count: u8,

    /// Logs: destination
    ///
    /// Logs go to stderr by default so they never interleave with command output.
    #[clap(
        long = "log-destination",
        env = "LOG_DESTINATION",
        default_value_t = LogDestination::Stderr,
        value_enum,
        action
    )]
    pub log_destination: LogDestination,
}

impl LoggingConfig {
    /// The filter directive these options select, falling back to `default`
    pub fn filter_directive(&self, default: &str) -> String {
        match self.log_verbose_count {
            0 => self
                .log_filter
                .clone()
                .unwrap_or_else(|| default.to_owned()),
            1 => "info".to_owned(),
            2 => "debug,hyper::proto::h1=info,h2=info".to_owned(),
            _ => "trace,hyper::proto::h1=info,h2=info".to_owned(),
        }
    }
}

/// Where log output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogDestination {
    Stdout,
    Stderr,
}

impl Display for LogDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
        }
    }
}
