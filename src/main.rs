//! Strand Games - stdio host
//!
//! Reads one JSON request per line on stdin and writes one JSON response
//! per line on stdout. Runs the idle timer the engine deliberately does
//! not own: ten seconds without a request prompts the current player.
//! Logging goes to stderr so stdout stays pure protocol.

#![warn(missing_docs)]

use std::time::Duration;
use strand_games::{DEFAULT_GRID_SIZE, GameHost, HostRequest, HostResponse};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long the host waits before nudging the current player.
const IDLE_TIMEOUT: Duration = Duration::from_secs(10);

fn emit(response: &HostResponse) {
    match serde_json::to_string(response) {
        Ok(line) => println!("{line}"),
        Err(error) => warn!(%error, "Failed to serialize response"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting strand games stdio host");

    let mut host = GameHost::new(DEFAULT_GRID_SIZE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // The idle prompt fires once per quiet spell; the next request re-arms it.
    let mut idle_armed = true;

    loop {
        let idle = tokio::time::sleep(IDLE_TIMEOUT);
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        info!("Stdin closed, shutting down");
                        return;
                    }
                    Err(error) => {
                        warn!(%error, "Failed to read request");
                        continue;
                    }
                };

                if line.trim().is_empty() {
                    continue;
                }

                match serde_json::from_str::<HostRequest>(&line) {
                    Ok(request) => {
                        idle_armed = true;
                        if let Some(response) = host.handle(request) {
                            emit(&response);
                        }
                    }
                    Err(error) => warn!(%error, "Ignoring malformed request"),
                }
            }
            () = idle, if idle_armed => {
                idle_armed = false;
                if let Some(response) = host.idle_response() {
                    emit(&response);
                }
            }
        }
    }
}
