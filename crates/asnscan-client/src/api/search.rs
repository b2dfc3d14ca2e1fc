//! Organization search endpoint.

use crate::BgpViewClient;
use asnscan_core::{ApiEnvelope, AsnCandidate, Result, SearchData};
use tracing::debug;

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a BgpViewClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a BgpViewClient) -> Self {
        Self { client }
    }

    /// Search by organization name, domain, or keyword
    pub async fn query(&self, term: &str) -> Result<SearchData> {
        let envelope: ApiEnvelope<SearchData> = self
            .client
            .get_with_query("/search", &[("query_term", term)])
            .await?;
        Ok(envelope.into_data())
    }

    /// Search and keep only the matching ASNs
    pub async fn asns(&self, term: &str) -> Result<Vec<AsnCandidate>> {
        let asns = self.query(term).await?.asns;
        debug!(term, count = asns.len(), "ASN search complete");
        Ok(asns)
    }
}
