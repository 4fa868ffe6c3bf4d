//! Interactive command line client for the Insights Operator Controller
//!
//! [`startup`] parses the configuration, initialises logging and runs a
//! [`Session`](commands::Session) over a [`Shell`](shell::Shell) until the operator quits.
#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

use std::io::IsTerminal;
use std::path::PathBuf;

use dotenvy::dotenv;
use insights_clap_blocks::controller::ControllerConfig;
use insights_clap_blocks::logging::{DEFAULT_LOG_FILTER, LogDestination, LoggingConfig};
use insights_client::Client;
use rustyline::error::ReadlineError;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod output;
pub mod shell;

use commands::Session;
use output::Colorizer;
use shell::Shell;

/// Version of this client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error reading command: {0}")]
    Readline(#[from] ReadlineError),

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),

    #[error("error creating controller client: {0}")]
    Client(#[from] insights_client::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

enum ReturnCode {
    Failure = 1,
}

#[derive(Debug, clap::Parser)]
#[clap(
    name = "insights-operator-cli",
    version = VERSION,
    about = "Interactive client for the Insights Operator Controller service",
    long_about = "Interactive client for the Insights Operator Controller service.\n\n\
                  Starts a shell; type 'help' at the prompt for the list of commands."
)]
pub struct Config {
    #[clap(flatten)]
    pub controller: ControllerConfig,

    #[clap(flatten)]
    pub logging: LoggingConfig,

    /// Directory holding the configuration files offered by `add profile` and
    /// `add configuration`
    #[clap(
        long = "configurations-dir",
        env = "INSIGHTS_CONFIGURATIONS_DIR",
        default_value = "configurations",
        action
    )]
    pub configurations_dir: PathBuf,

    /// Log in as this operator at startup instead of using the `login` command
    #[clap(long = "username", env = "INSIGHTS_USERNAME", action)]
    pub username: Option<String>,

    /// Ask for confirmation before deleting clusters and configuration profiles
    #[clap(
        long = "ask-for-confirmation",
        env = "INSIGHTS_ASK_FOR_CONFIRMATION",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub ask_for_confirmation: bool,

    /// Print plain text without terminal colors
    #[clap(
        long = "no-colors",
        env = "INSIGHTS_NO_COLORS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_colors: bool,
}

pub fn startup(args: Vec<String>) -> Result<(), std::io::Error> {
    // load all environment variables from .env before doing anything
    load_dotenv();

    let config = <Config as clap::Parser>::parse_from(args);

    if let Err(e) = init_logs(&config.logging) {
        eprintln!("Initializing logs failed: {e}");
        std::process::exit(ReturnCode::Failure as _);
    }

    let tokio_runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tokio_runtime.block_on(async move {
        if let Err(e) = run(config).await {
            eprintln!("Shell failed: {e}");
            std::process::exit(ReturnCode::Failure as _)
        }
    });

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let Config {
        controller,
        configurations_dir,
        username,
        ask_for_confirmation,
        no_colors,
        ..
    } = config;

    info!(
        controller_url = %controller.controller_url,
        api_prefix = %controller.api_prefix,
        "connecting to controller"
    );
    let mut client = Client::new(controller.controller_url)?
        .with_api_prefix(&controller.api_prefix);
    if let Some(timeout) = controller.request_timeout {
        client = client.with_timeout(timeout)?;
    }

    let colors = Colorizer::new(!no_colors && std::io::stdout().is_terminal());
    let shell = Shell::try_new()?;

    let mut session = Session::new(client, shell, std::io::stdout())
        .with_colors(colors)
        .with_username(username)
        .with_confirmation(ask_for_confirmation)
        .with_configurations_dir(configurations_dir);

    session.run().await
}

fn init_logs(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(config.filter_directive(DEFAULT_LOG_FILTER))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_destination {
        LogDestination::Stdout => builder.with_writer(std::io::stdout).try_init()?,
        LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init()?,
    }
    Ok(())
}

fn load_dotenv() {
    match dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            // a missing env file is not an error, the flag defaults apply
        }
        Err(e) => {
            eprintln!("FATAL Error loading config from: {e}");
            eprintln!("Aborting");
            std::process::exit(ReturnCode::Failure as _);
        }
    };
}
