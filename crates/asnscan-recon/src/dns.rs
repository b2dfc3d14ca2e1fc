//! Reverse DNS resolution.

use crate::error::{ReconError, ReconResult};
use async_trait::async_trait;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Resolves an address back to host names.
///
/// A failed lookup is an ordinary outcome and yields an empty list.
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// PTR names for `addr`, empty when nothing resolves
    async fn reverse(&self, addr: Ipv4Addr) -> Vec<String>;
}

/// PTR lookup result
#[derive(Debug, Clone)]
pub struct DnsLookupResult {
    /// Address that was queried
    pub query: Ipv4Addr,
    /// Hostnames found
    pub hostnames: Vec<String>,
    /// Response time
    pub response_time: Duration,
}

/// Reverse resolver backed by the operating system's resolver configuration
pub struct SystemResolver {
    inner: TokioResolver,
}

impl SystemResolver {
    /// Create a resolver from the system configuration (`/etc/resolv.conf` on Unix)
    pub fn new() -> ReconResult<Self> {
        let inner = TokioResolver::builder_tokio()
            .map_err(|e| ReconError::ResolverConfig(e.to_string()))?
            .build();
        Ok(Self { inner })
    }

    /// Like [`SystemResolver::new`], but falls back to the built-in public
    /// name servers when the system configuration cannot be read.
    #[must_use]
    pub fn system_or_default() -> Self {
        Self::new().unwrap_or_else(|e| {
            warn!(error = %e, "system resolver configuration unavailable, using defaults");
            Self::from_resolver(
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
                .build(),
            )
        })
    }

    /// Wrap an already configured resolver
    #[must_use]
    pub const fn from_resolver(inner: TokioResolver) -> Self {
        Self { inner }
    }

    /// PTR lookup that reports failures instead of swallowing them
    pub async fn lookup_ptr(&self, addr: Ipv4Addr) -> ReconResult<DnsLookupResult> {
        let start = Instant::now();

        let response = self
            .inner
            .reverse_lookup(IpAddr::V4(addr))
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(DnsLookupResult {
            query: addr,
            hostnames: response.iter().map(ToString::to_string).collect(),
            response_time: start.elapsed(),
        })
    }
}

#[async_trait]
impl ReverseResolver for SystemResolver {
    async fn reverse(&self, addr: Ipv4Addr) -> Vec<String> {
        match self.lookup_ptr(addr).await {
            Ok(result) => {
                debug!(
                    %addr,
                    names = result.hostnames.len(),
                    elapsed_ms = result.response_time.as_millis(),
                    "PTR lookup"
                );
                result.hostnames
            }
            Err(e) => {
                debug!(%addr, error = %e, "PTR lookup returned nothing");
                Vec::new()
            }
        }
    }
}
