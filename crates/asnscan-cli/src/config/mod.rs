//! Runtime settings.
//!
//! Everything is supplied on the command line; there is no config file.

use std::time::Duration;

use asnscan::ClientConfig;

use crate::cli::args::Cli;

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP client configuration for the BGP API.
    pub client: ClientConfig,

    /// Minimum spacing between reverse lookups.
    pub lookup_delay: Duration,

    /// Pause between listing prefixes and the first lookup.
    pub warmup: Duration,

    /// Debug-level logging.
    pub verbose: bool,

    /// Disable ANSI colors.
    pub no_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            lookup_delay: asnscan::DEFAULT_LOOKUP_DELAY,
            warmup: Duration::from_secs(1),
            verbose: false,
            no_color: false,
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            client: ClientConfig::default()
                .base_url(cli.api_url.as_str())
                .timeout(Duration::from_secs(cli.timeout)),
            lookup_delay: Duration::from_millis(cli.delay_ms),
            warmup: Duration::from_millis(cli.warmup_ms),
            verbose: cli.verbose,
            no_color: cli.no_color,
        }
    }
}
