mod asn;
mod envelope;
mod prefix;

pub use asn::*;
pub use envelope::*;
pub use prefix::*;
