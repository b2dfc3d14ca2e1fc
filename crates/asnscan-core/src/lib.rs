//! Core types and traits for ASN discovery.
//!
//! This crate provides the foundational types used across the asnscan workspace:
//!
//! - **Types**: Strongly-typed representations of BGP directory responses
//! - **Directory**: The [`BgpDirectory`] trait implemented by API clients
//! - **Errors**: Error handling with [`AsnScanError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use asnscan_core::{BgpDirectory, Result};
//!
//! async fn first_prefix(dir: &impl BgpDirectory, org: &str) -> Result<Option<String>> {
//!     let asns = dir.search_asns(org).await?;
//!     let Some(first) = asns.first() else {
//!         return Ok(None);
//!     };
//!     let prefixes = dir.ipv4_prefixes(first.asn).await?;
//!     Ok(prefixes.into_iter().next().map(|p| p.prefix))
//! }
//! ```

mod directory;
mod error;
pub mod types;

pub use directory::BgpDirectory;
pub use error::{AsnScanError, Result};
pub use types::*;
