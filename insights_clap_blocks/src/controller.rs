//! CLI config for reaching the controller service

use std::time::Duration;

use url::Url;

/// Where the controller service lives and how to talk to it
#[derive(Debug, Clone, clap::Parser)]
pub struct ControllerConfig {
    /// The URL of the running Insights Operator Controller service
    #[clap(
        short = 'H',
        long = "controller-url",
        env = "INSIGHTS_CONTROLLER_URL",
        default_value = "http://localhost:8080",
        action
    )]
    pub controller_url: Url,

    /// Path placed between the controller URL and every resource path
    #[clap(
        long = "api-prefix",
        env = "INSIGHTS_CONTROLLER_API_PREFIX",
        default_value = "/api/v1/",
        action
    )]
    pub api_prefix: String,

    /// Give up on requests that take longer than this, e.g. "30s"
    ///
    /// Without it the HTTP transport defaults apply.
    #[clap(
        long = "request-timeout",
        env = "INSIGHTS_CONTROLLER_REQUEST_TIMEOUT",
        value_parser = humantime::parse_duration,
        action
    )]
    pub request_timeout: Option<Duration>,
}
