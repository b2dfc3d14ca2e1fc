//! HTTP client for the BGPView API.
//!
//! This crate provides [`BgpViewClient`], which implements
//! [`BgpDirectory`](asnscan_core::BgpDirectory) over the public BGPView endpoints.

mod client;
mod config;
pub mod api;

pub use client::{BgpViewClient, BgpViewClientBuilder};
pub use config::*;
pub use asnscan_core::{AsnScanError, Result};
