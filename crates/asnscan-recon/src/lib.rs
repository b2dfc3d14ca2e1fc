//! CIDR expansion and reverse-DNS sweeps.
//!
//! - [`cidr`] turns a prefix string into the ordered usable host addresses
//! - [`dns`] resolves an address back to host names via the system resolver
//! - [`scanner`] walks addresses one at a time with a fixed inter-query delay

mod error;

pub mod cidr;
pub mod dns;
pub mod scanner;

pub use cidr::{usable_hosts, HostRange};
pub use dns::{ReverseResolver, SystemResolver};
pub use error::{ReconError, ReconResult};
pub use scanner::{ReverseHit, ReverseScanner, ScanStats, DEFAULT_LOOKUP_DELAY};
