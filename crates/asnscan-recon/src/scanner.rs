//! Sequential reverse-DNS sweep with a fixed inter-query delay.

use crate::dns::ReverseResolver;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::{debug, trace};

/// Minimum spacing between two reverse lookups
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(100);

type Pacer = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// An address that resolved to at least one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseHit {
    /// Address that was looked up
    pub addr: Ipv4Addr,
    /// PTR names, never empty
    pub hostnames: Vec<String>,
}

impl fmt::Display for ReverseHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.addr, self.hostnames.join(", "))
    }
}

/// Counters for one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lookups performed
    pub looked_up: u64,
    /// Lookups that returned at least one name
    pub resolved: u64,
}

impl std::ops::AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.looked_up += rhs.looked_up;
        self.resolved += rhs.resolved;
    }
}

/// Walks addresses one at a time, pacing each query.
pub struct ReverseScanner<R> {
    resolver: R,
    pacer: Option<Pacer>,
}

impl<R: ReverseResolver> ReverseScanner<R> {
    /// Scanner with the default 100 ms delay
    pub fn new(resolver: R) -> Self {
        Self::with_delay(resolver, DEFAULT_LOOKUP_DELAY)
    }

    /// Scanner whose lookups start at least `delay` apart. Zero disables pacing.
    pub fn with_delay(resolver: R, delay: Duration) -> Self {
        let pacer = Quota::with_period(delay).map(Pacer::direct);
        Self { resolver, pacer }
    }

    /// The underlying resolver
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Look up every address in order and pass each hit to `on_hit`.
    ///
    /// Addresses without names are counted but never reach `on_hit`. An error
    /// returned by `on_hit` stops the sweep.
    pub async fn scan<I, F, E>(&self, addrs: I, mut on_hit: F) -> Result<ScanStats, E>
    where
        I: IntoIterator<Item = Ipv4Addr>,
        F: FnMut(&ReverseHit) -> Result<(), E>,
    {
        let mut stats = ScanStats::default();

        for addr in addrs {
            if let Some(pacer) = &self.pacer {
                pacer.until_ready().await;
            }

            let hostnames = self.resolver.reverse(addr).await;
            stats.looked_up += 1;

            if hostnames.is_empty() {
                trace!(%addr, "no PTR");
                continue;
            }

            stats.resolved += 1;
            on_hit(&ReverseHit { addr, hostnames })?;
        }

        debug!(looked_up = stats.looked_up, resolved = stats.resolved, "sweep finished");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::sync::Mutex;
    use std::time::Instant;

    #[derive(Default)]
    struct FakeResolver {
        names: HashMap<Ipv4Addr, Vec<String>>,
        seen: Mutex<Vec<Ipv4Addr>>,
    }

    impl FakeResolver {
        fn with(mut self, addr: [u8; 4], names: &[&str]) -> Self {
            self.names
                .insert(addr.into(), names.iter().map(ToString::to_string).collect());
            self
        }
    }

    #[async_trait]
    impl ReverseResolver for FakeResolver {
        async fn reverse(&self, addr: Ipv4Addr) -> Vec<String> {
            self.seen.lock().unwrap().push(addr);
            self.names.get(&addr).cloned().unwrap_or_default()
        }
    }

    fn addrs(last_octets: std::ops::RangeInclusive<u8>) -> Vec<Ipv4Addr> {
        last_octets.map(|n| Ipv4Addr::new(192, 0, 2, n)).collect()
    }

    #[tokio::test]
    async fn reports_only_resolved_addresses_in_order() {
        let resolver = FakeResolver::default()
            .with([192, 0, 2, 3], &["c.example.", "c2.example."])
            .with([192, 0, 2, 1], &["a.example."]);
        let scanner = ReverseScanner::with_delay(resolver, Duration::ZERO);

        let mut hits = Vec::new();
        let stats = scanner
            .scan(addrs(1..=4), |hit| {
                hits.push(hit.to_string());
                Ok::<_, Infallible>(())
            })
            .await
            .unwrap();

        assert_eq!(hits, ["192.0.2.1 -> a.example.", "192.0.2.3 -> c.example., c2.example."]);
        assert_eq!(stats, ScanStats { looked_up: 4, resolved: 2 });
        assert_eq!(*scanner.resolver().seen.lock().unwrap(), addrs(1..=4));
    }

    #[tokio::test]
    async fn empty_input_does_no_lookups() {
        let scanner = ReverseScanner::new(FakeResolver::default());
        let stats = scanner
            .scan(Vec::new(), |_| Ok::<_, Infallible>(()))
            .await
            .unwrap();
        assert_eq!(stats, ScanStats::default());
        assert!(scanner.resolver().seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookups_are_paced() {
        let delay = Duration::from_millis(40);
        let scanner = ReverseScanner::with_delay(FakeResolver::default(), delay);

        let start = Instant::now();
        scanner
            .scan(addrs(1..=3), |_| Ok::<_, Infallible>(()))
            .await
            .unwrap();

        // first lookup is immediate, the next two wait one period each
        assert!(start.elapsed() >= delay * 2 - Duration::from_millis(5));
    }

    #[tokio::test]
    async fn sink_error_stops_the_sweep() {
        let resolver = FakeResolver::default()
            .with([192, 0, 2, 1], &["a.example."])
            .with([192, 0, 2, 2], &["b.example."]);
        let scanner = ReverseScanner::with_delay(resolver, Duration::ZERO);

        let err = scanner
            .scan(addrs(1..=3), |hit| Err(hit.addr))
            .await
            .unwrap_err();

        assert_eq!(err, Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(scanner.resolver().seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn stats_accumulate() {
        let mut total = ScanStats { looked_up: 2, resolved: 1 };
        total += ScanStats { looked_up: 3, resolved: 0 };
        assert_eq!(total, ScanStats { looked_up: 5, resolved: 1 });
    }
}
