//! The interactive session.
//!
//! One run moves through the stages in order and never goes back:
//!
//! ```text
//! AwaitInput -> ResolveOrg -> AwaitSelection -> FetchPrefixes -> EnumerateAndScan -> Done
//! ```
//!
//! A failure in any stage before `EnumerateAndScan` ends the run. Inside the
//! sweep, a prefix that is not valid CIDR is reported and skipped.

use std::fmt;
use std::io::{BufRead, Write};
use std::time::Duration;

use asnscan::{
    usable_hosts, AsnCandidate, AsnScanError, BgpDirectory, Ipv4Prefix, ReverseResolver,
    ReverseScanner, ScanStats,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::output;

/// Session stage, used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for the organization name
    AwaitInput,
    /// Searching the directory for matching ASNs
    ResolveOrg,
    /// Waiting for the menu choice
    AwaitSelection,
    /// Fetching the chosen ASN's IPv4 prefixes
    FetchPrefixes,
    /// Expanding prefixes and running reverse lookups
    EnumerateAndScan,
    /// Sweep finished
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitInput => "await-input",
            Self::ResolveOrg => "resolve-org",
            Self::AwaitSelection => "await-selection",
            Self::FetchPrefixes => "fetch-prefixes",
            Self::EnumerateAndScan => "enumerate-and-scan",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Fatal session failures. All of them end the process with status 1.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The organization name was blank
    #[error("Please enter a valid organization name.")]
    EmptyOrganization,

    /// The menu choice was not a number in range
    #[error("Invalid selection '{input}': expected a number from 1 to {count}.")]
    InvalidSelection {
        /// Line as typed, trimmed
        input: String,
        /// Number of candidates offered
        count: usize,
    },

    /// The ASN search failed
    #[error("Error fetching ASNs")]
    AsnLookup(#[source] AsnScanError),

    /// The prefix fetch for the chosen ASN failed
    #[error("Error fetching IP ranges for AS{asn}")]
    PrefixLookup {
        /// ASN whose prefixes were requested
        asn: u32,
        /// Underlying API error
        #[source]
        source: AsnScanError,
    },

    /// Reading the prompt answer or writing output failed
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}

/// How a session that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search matched nothing; no selection was asked for.
    NoAsnFound,
    /// Every prefix of the selected ASN was processed.
    Completed(ScanReport),
}

/// Totals for the sweep stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// ASN that was swept
    pub asn: u32,
    /// Prefixes that parsed and were scanned
    pub prefixes_scanned: u64,
    /// Prefixes skipped as malformed CIDR
    pub prefixes_skipped: u64,
    /// Lookup counters across all scanned prefixes
    pub stats: ScanStats,
}

/// Parse a 1-based menu choice into an index into `count` candidates.
pub fn parse_selection(raw: &str, count: usize) -> Result<usize, SessionError> {
    let invalid = || SessionError::InvalidSelection {
        input: raw.to_string(),
        count,
    };

    let choice: usize = raw.trim().parse().map_err(|_| invalid())?;
    if (1..=count).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(invalid())
    }
}

/// One interactive run over a directory, a scanner and a terminal.
pub struct Session<'a, D, R, I, O> {
    directory: &'a D,
    scanner: &'a ReverseScanner<R>,
    input: I,
    out: O,
    warmup: Duration,
}

impl<'a, D, R, I, O> Session<'a, D, R, I, O>
where
    D: BgpDirectory,
    R: ReverseResolver,
    I: BufRead,
    O: Write,
{
    pub fn new(directory: &'a D, scanner: &'a ReverseScanner<R>, input: I, out: O) -> Self {
        Self {
            directory,
            scanner,
            input,
            out,
            warmup: Duration::ZERO,
        }
    }

    /// Pause before the first lookup.
    #[must_use]
    pub fn warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    pub async fn run(mut self) -> Result<Outcome, SessionError> {
        write!(self.out, "{}", output::banner())?;

        enter(Stage::AwaitInput);
        let org = self.read_organization()?;

        enter(Stage::ResolveOrg);
        let candidates = self
            .directory
            .search_asns(&org)
            .await
            .map_err(SessionError::AsnLookup)?;

        if candidates.is_empty() {
            writeln!(self.out, "{}", output::no_asn_found(&org))?;
            return Ok(Outcome::NoAsnFound);
        }

        writeln!(self.out, "{}", output::found_header(&org))?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.out, "{}", output::candidate(i + 1, candidate))?;
        }

        enter(Stage::AwaitSelection);
        let asn = self.read_selection(&candidates)?.asn;

        enter(Stage::FetchPrefixes);
        let prefixes = self
            .directory
            .ipv4_prefixes(asn)
            .await
            .map_err(|source| SessionError::PrefixLookup { asn, source })?;

        writeln!(self.out, "{}", output::prefixes_header(asn))?;
        for prefix in &prefixes {
            writeln!(self.out, "{}", output::prefix(prefix))?;
        }

        enter(Stage::EnumerateAndScan);
        let report = self.sweep(asn, &prefixes).await?;
        writeln!(self.out, "{}", output::summary(&report))?;

        enter(Stage::Done);
        Ok(Outcome::Completed(report))
    }

    fn read_organization(&mut self) -> Result<String, SessionError> {
        write!(self.out, "{}", output::organization_prompt())?;
        let org = self.read_line()?;
        if org.is_empty() {
            return Err(SessionError::EmptyOrganization);
        }
        Ok(org)
    }

    fn read_selection<'c>(
        &mut self,
        candidates: &'c [AsnCandidate],
    ) -> Result<&'c AsnCandidate, SessionError> {
        write!(self.out, "{}", output::selection_prompt())?;
        let raw = self.read_line()?;
        let index = parse_selection(&raw, candidates.len())?;
        Ok(&candidates[index])
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    async fn sweep(&mut self, asn: u32, prefixes: &[Ipv4Prefix]) -> Result<ScanReport, SessionError> {
        writeln!(self.out, "{}", output::sweep_start())?;
        self.out.flush()?;
        if !self.warmup.is_zero() {
            tokio::time::sleep(self.warmup).await;
        }

        let mut report = ScanReport {
            asn,
            ..ScanReport::default()
        };
        let scanner = self.scanner;

        for prefix in prefixes {
            let hosts = match usable_hosts(&prefix.prefix) {
                Ok(hosts) => hosts,
                Err(e) => {
                    warn!(prefix = %prefix.prefix, error = %e, "skipping prefix");
                    writeln!(self.out, "{}", output::cidr_skipped(&prefix.prefix, &e))?;
                    report.prefixes_skipped += 1;
                    continue;
                }
            };

            writeln!(self.out, "{}", output::scanning(hosts.remaining(), &prefix.prefix))?;
            self.out.flush()?;

            let out = &mut self.out;
            let stats = scanner
                .scan(hosts, |hit| {
                    writeln!(out, "{}", output::hit(hit))?;
                    out.flush()
                })
                .await?;

            report.prefixes_scanned += 1;
            report.stats += stats;
        }

        Ok(report)
    }
}

fn enter(stage: Stage) {
    debug!(%stage, "session stage");
}
