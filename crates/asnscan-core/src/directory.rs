use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AsnCandidate, Ipv4Prefix};

/// A source of BGP routing data: organization search and per-ASN prefixes.
///
/// Implemented by the HTTP client; tests substitute in-memory fakes.
#[async_trait]
pub trait BgpDirectory: Send + Sync {
    /// Find ASNs whose registration matches `query`, in server order.
    async fn search_asns(&self, query: &str) -> Result<Vec<AsnCandidate>>;

    /// List the IPv4 prefixes announced by `asn`, in server order.
    async fn ipv4_prefixes(&self, asn: u32) -> Result<Vec<Ipv4Prefix>>;
}
