//! API endpoint modules.

mod asn;
mod search;

pub use asn::AsnApi;
pub use search::SearchApi;
