//! asnscan - interactive ASN discovery and reverse DNS sweep.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    asnscan_cli::run().await
}
