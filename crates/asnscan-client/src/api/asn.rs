//! Per-ASN endpoints.

use crate::BgpViewClient;
use asnscan_core::{ApiEnvelope, Ipv4Prefix, PrefixData, Result};
use tracing::debug;

/// Endpoints scoped to a single autonomous system
pub struct AsnApi<'a> {
    client: &'a BgpViewClient,
    asn: u32,
}

impl<'a> AsnApi<'a> {
    pub(crate) const fn new(client: &'a BgpViewClient, asn: u32) -> Self {
        Self { client, asn }
    }

    /// All prefixes announced by this ASN
    pub async fn prefixes(&self) -> Result<PrefixData> {
        let envelope: ApiEnvelope<PrefixData> = self
            .client
            .get(&format!("/asn/{}/prefixes", self.asn))
            .await?;
        Ok(envelope.into_data())
    }

    /// IPv4 prefixes announced by this ASN, in server order
    pub async fn ipv4_prefixes(&self) -> Result<Vec<Ipv4Prefix>> {
        let prefixes = self.prefixes().await?.ipv4_prefixes;
        debug!(asn = self.asn, count = prefixes.len(), "prefix listing complete");
        Ok(prefixes)
    }
}
