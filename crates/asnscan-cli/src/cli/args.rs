//! Command-line argument definitions using clap.

use clap::Parser;

/// Discover an organization's ASNs and sweep their IPv4 space with reverse DNS
///
/// Prompts for a domain or company name, lists matching autonomous systems,
/// then performs a paced PTR lookup for every usable address announced by
/// the one you select.
#[derive(Parser, Debug)]
#[command(name = "asnscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the BGPView-compatible API
    #[arg(long, value_name = "URL", default_value = asnscan::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Delay between reverse DNS lookups in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub delay_ms: u64,

    /// Pause before the first reverse DNS lookup in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub warmup_ms: u64,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
