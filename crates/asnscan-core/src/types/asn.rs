use super::envelope::null_as_default;
use serde::{Deserialize, Serialize};

/// Payload of `/search?query_term=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchData {
    /// Matching autonomous systems, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub asns: Vec<AsnCandidate>,
}

impl SearchData {
    /// Returns true if the search matched no ASNs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asns.is_empty()
    }
}

/// An autonomous system matching an organization search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnCandidate {
    /// Autonomous System Number
    pub asn: u32,

    /// Registered AS name (e.g. "GOOGLE")
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Longer description of the holder
    #[serde(default)]
    pub description: Option<String>,

    /// Two-letter country code of the registration
    #[serde(default)]
    pub country_code: Option<String>,
}

impl AsnCandidate {
    /// Create a candidate with just a number and name
    #[must_use]
    pub fn new(asn: u32, name: impl Into<String>) -> Self {
        Self {
            asn,
            name: name.into(),
            description: None,
            country_code: None,
        }
    }
}

impl std::fmt::Display for AsnCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{} - {}", self.asn, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiEnvelope;

    #[test]
    fn decodes_search_payload_in_order() {
        let body = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": {
                "asns": [
                    {"asn": 15169, "name": "GOOGLE", "description": "Google LLC", "country_code": "US"},
                    {"asn": 36040, "name": "YOUTUBE", "description": "Google LLC", "country_code": "US"}
                ],
                "ipv4_prefixes": []
            }
        }"#;

        let env: ApiEnvelope<SearchData> = serde_json::from_str(body).unwrap();
        let asns = env.into_data().asns;
        assert_eq!(asns.len(), 2);
        assert_eq!(asns[0].asn, 15169);
        assert_eq!(asns[1].name, "YOUTUBE");
        assert_eq!(asns[0].country_code.as_deref(), Some("US"));
    }

    #[test]
    fn missing_or_null_lists_are_empty() {
        let env: ApiEnvelope<SearchData> = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(env.data.is_empty());

        let env: ApiEnvelope<SearchData> =
            serde_json::from_str(r#"{"data": {"asns": null}}"#).unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn null_name_becomes_empty() {
        let c: AsnCandidate = serde_json::from_str(r#"{"asn": 64500, "name": null}"#).unwrap();
        assert_eq!(c, AsnCandidate::new(64500, ""));
    }

    #[test]
    fn rejects_non_integer_asn() {
        let res = serde_json::from_str::<AsnCandidate>(r#"{"asn": "AS15169", "name": "GOOGLE"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn display_matches_listing_format() {
        assert_eq!(AsnCandidate::new(13335, "CLOUDFLARENET").to_string(), "AS13335 - CLOUDFLARENET");
    }
}
