//! IPv4 CIDR expansion.
//!
//! A block larger than two addresses yields only its usable hosts: the
//! network and broadcast addresses are dropped. A /31 or /32 is returned
//! whole. Addresses come out in strictly increasing numeric order.

use crate::error::{ReconError, ReconResult};
use ipnetwork::Ipv4Network;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Expand `cidr` (e.g. `"192.0.2.0/24"`) into its usable host addresses.
///
/// Host bits in the address part are masked off, so `10.0.0.5/30` expands the
/// same as `10.0.0.0/30`.
pub fn usable_hosts(cidr: &str) -> ReconResult<HostRange> {
    let Some((addr, len)) = cidr.split_once('/') else {
        return Err(ReconError::invalid_cidr(cidr, "missing prefix length"));
    };

    // dotted-quad address and a decimal length only; no netmask form
    if len.is_empty() || len.len() > 2 || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReconError::invalid_cidr(cidr, "prefix length must be 0-32"));
    }
    let addr: Ipv4Addr = addr
        .parse()
        .map_err(|e: std::net::AddrParseError| ReconError::invalid_cidr(cidr, e.to_string()))?;
    let prefix: u8 = len
        .parse()
        .map_err(|e: std::num::ParseIntError| ReconError::invalid_cidr(cidr, e.to_string()))?;

    let network = Ipv4Network::new(addr, prefix)
        .map_err(|e| ReconError::invalid_cidr(cidr, e.to_string()))?;

    Ok(HostRange::for_network(network))
}

/// Lazy, ordered sequence of IPv4 addresses.
///
/// Bounds are held as `u64` so the end of `0.0.0.0/0` does not overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRange {
    next: u64,
    end: u64,
}

impl HostRange {
    fn for_network(network: Ipv4Network) -> Self {
        let base = u64::from(u32::from(network.network()));
        let size = 1u64 << (32 - u32::from(network.prefix()));

        if size > 2 {
            Self {
                next: base + 1,
                end: base + size - 1,
            }
        } else {
            Self {
                next: base,
                end: base + size,
            }
        }
    }

    /// Number of addresses not yet yielded
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.end - self.next
    }
}

impl Iterator for HostRange {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.remaining() == 0 {
            return None;
        }
        let addr = u32::try_from(self.next).ok()?;
        self.next += 1;
        Some(Ipv4Addr::from(addr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for HostRange {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.remaining() == 0 {
            return None;
        }
        self.end -= 1;
        u32::try_from(self.end).ok().map(Ipv4Addr::from)
    }
}

impl ExactSizeIterator for HostRange {}

impl FusedIterator for HostRange {}
