//! # asnscan-cli
//!
//! Interactive front end for asnscan.
//!
//! ## Flow
//!
//! - **Search**: look up autonomous systems by organization or domain name
//! - **Select**: pick one ASN from the numbered list
//! - **Sweep**: PTR-resolve every usable address in the ASN's IPv4 prefixes,
//!   one query at a time with a fixed delay

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
