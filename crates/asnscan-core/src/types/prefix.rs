use super::envelope::null_as_default;
use serde::{Deserialize, Serialize};

/// Payload of `/asn/{asn}/prefixes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefixData {
    /// Announced IPv4 prefixes, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipv4_prefixes: Vec<Ipv4Prefix>,
}

/// An IPv4 prefix announced by an autonomous system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Prefix {
    /// CIDR notation (e.g. "8.8.8.0/24")
    pub prefix: String,

    /// Network name from the RIR record
    #[serde(default)]
    pub name: Option<String>,

    /// Network description
    #[serde(default)]
    pub description: Option<String>,

    /// Two-letter country code
    #[serde(default)]
    pub country_code: Option<String>,
}

impl Ipv4Prefix {
    /// Create a prefix entry from its CIDR text alone
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: None,
            description: None,
            country_code: None,
        }
    }
}

impl std::fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}

impl From<&str> for Ipv4Prefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
