//! Unitconv Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout. Each line is one request;
//! each response is written as one line. Logs go to stderr.
//!
//! Configuration:
//! - UNITCONV_LOG: log filter (falls back to RUST_LOG, then "info")

mod config;
mod rpc;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing_subscriber::EnvFilter;
use unitconv_form::ConverterForm;

use crate::config::Config;
use crate::rpc::{handle_request, RpcRequest, RpcResponse, SERVER_NAME, SERVER_VERSION};

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using 'info'", config.log_filter, e);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Write one response line and flush
fn write_response(response: &RpcResponse) -> io::Result<()> {
    let line = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    tracing::info!(name = SERVER_NAME, version = SERVER_VERSION, "server started");
    tracing::debug!(stdin_terminal = io::stdin().is_terminal(), "waiting for requests");

    let mut form = ConverterForm::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: RpcRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::warn!(error = %e, "cannot parse request");
                        if let Err(e) = write_response(&RpcResponse::parse_error(e)) {
                            tracing::error!(error = %e, "cannot write response");
                            break;
                        }
                        continue;
                    }
                };

                tracing::debug!(method = %request.method, "processing");
                let response = handle_request(&mut form, &request);

                // Notifications get no response
                if request.id.is_none() {
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    tracing::error!(error = %e, "cannot write response");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot read input");
                break;
            }
        }
    }

    tracing::info!("server shutting down");
}
