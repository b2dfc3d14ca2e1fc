//! Discover an organization's autonomous systems and sweep their address
//! space with reverse DNS.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use asnscan::{usable_hosts, BgpDirectory, BgpViewClient, ReverseScanner, SystemResolver};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BgpViewClient::new()?;
//!     let asns = client.search_asns("example").await?;
//!     let prefixes = client.ipv4_prefixes(asns[0].asn).await?;
//!
//!     let scanner = ReverseScanner::new(SystemResolver::new()?);
//!     for prefix in &prefixes {
//!         let hosts = usable_hosts(&prefix.prefix)?;
//!         scanner
//!             .scan(hosts, |hit| {
//!                 println!("{hit}");
//!                 Ok::<_, std::convert::Infallible>(())
//!             })
//!             .await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use asnscan_core::*;

// Re-export client
pub use asnscan_client::{
    BgpViewClient, BgpViewClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};

// Re-export recon
pub use asnscan_recon::{
    usable_hosts, HostRange, ReconError, ReconResult, ReverseHit, ReverseResolver,
    ReverseScanner, ScanStats, SystemResolver, DEFAULT_LOOKUP_DELAY,
};
