//! Terminal formatting.
//!
//! Every line the session prints is built here so the palette stays in one
//! place: blue for prompts and results, green for progress, purple for
//! section breaks, red for failures.

use asnscan::{AsnCandidate, Ipv4Prefix, ReverseHit};
use colored::{ColoredString, Colorize};

use crate::cli::session::ScanReport;

const BANNER: &str = r"
   __ _ ___ _ __  ___  ___ __ _ _ __
  / _` / __| '_ \/ __|/ __/ _` | '_ \
 | (_| \__ \ | | \__ \ (_| (_| | | | |
  \__,_|___/_| |_|___/\___\__,_|_| |_|
";

/// Tool banner.
pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        BANNER.purple(),
        format!("[+] asnscan {} - ASN discovery and reverse DNS sweep", env!("CARGO_PKG_VERSION")).green()
    )
}

pub fn organization_prompt() -> ColoredString {
    "Enter domain or company name: ".blue()
}

pub fn selection_prompt() -> ColoredString {
    "\nSelect ASN number: ".purple()
}

pub fn no_asn_found(org: &str) -> ColoredString {
    format!("No ASN found for {org}").red()
}

pub fn found_header(org: &str) -> ColoredString {
    format!("\n[+] Found ASNs for {org}").green()
}

/// One numbered entry of the candidate list, e.g. `1. AS15169 - GOOGLE`.
pub fn candidate(position: usize, entry: &AsnCandidate) -> String {
    format!("{} {entry}", format!("{position}.").blue())
}

pub fn prefixes_header(asn: u32) -> ColoredString {
    format!("\n[+] IP ranges for ASN {asn}:").green()
}

pub fn prefix(prefix: &Ipv4Prefix) -> String {
    match prefix.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => format!("{prefix} {}", name.dimmed()),
        None => prefix.to_string(),
    }
}

pub fn sweep_start() -> ColoredString {
    "\n[~] Starting reverse DNS lookups for all IPs in found ranges...".purple()
}

pub fn cidr_skipped(prefix: &str, reason: &dyn std::fmt::Display) -> ColoredString {
    format!("[!] Failed to parse CIDR: {prefix} {reason}").red()
}

pub fn scanning(count: u64, prefix: &str) -> ColoredString {
    format!("\n[+] Scanning {count} IPs in {prefix}").green()
}

pub fn hit(hit: &ReverseHit) -> ColoredString {
    format!("[+] {hit}").blue()
}

pub fn summary(report: &ScanReport) -> ColoredString {
    format!(
        "\n[~] Done: {} prefixes scanned, {} skipped, {} addresses looked up, {} resolved",
        report.prefixes_scanned,
        report.prefixes_skipped,
        report.stats.looked_up,
        report.stats.resolved
    )
    .purple()
}

/// Fatal error line, including the cause chain.
pub fn failure(err: &anyhow::Error) -> ColoredString {
    format!("[!] {err:#}").red()
}
