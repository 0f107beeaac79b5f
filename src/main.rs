//! CLI entry point for the Motus API client.
//!
//! Lists receivers and projects from the Motus API, logging them and
//! optionally appending them to a CSV file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use motus_api::{
    ClientConfig, MotusClient,
    output::{append_records, print_json, print_pretty},
    request::RequestParams,
};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt::Debug;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "motus_api")]
#[command(about = "A client for the Motus wildlife tracking API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all receiver deployments
    ListReceivers {
        /// CSV file to append results to
        #[arg(short, long)]
        output: Option<String>,

        /// Log records as JSON instead of debug format
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List all projects
    ListProjects {
        /// CSV file to append results to
        #[arg(short, long)]
        output: Option<String>,

        /// Log records as JSON instead of debug format
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the request URL for an endpoint without sending it
    Url {
        /// Endpoint name, e.g. "receivers"
        #[arg(value_name = "ENDPOINT")]
        endpoint: String,

        /// API key sent as `hash`
        #[arg(long)]
        api_key: Option<String>,

        /// Device serial number sent as `serno`
        #[arg(long)]
        serial: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/motus_api.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("motus_api.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, authenticated = config.credentials().is_some(), "Configuration loaded");

    match cli.command {
        Commands::ListReceivers { output, json } => {
            let client = MotusClient::new(config)?;
            let receivers = client.list_receivers()?;
            let active = receivers.iter().filter(|r| r.is_active()).count();
            info!(total = receivers.len(), active, "Receiver list summary");
            emit(&receivers, output.as_deref(), json)?;
        }
        Commands::ListProjects { output, json } => {
            let client = MotusClient::new(config)?;
            let projects = client.list_projects()?;
            emit(&projects, output.as_deref(), json)?;
        }
        Commands::Url {
            endpoint,
            api_key,
            serial,
        } => {
            let client = MotusClient::new(config)?;
            let url = client.build_url(
                &endpoint,
                RequestParams::new(),
                api_key.as_deref(),
                serial.as_deref(),
            )?;
            println!("{url}");
        }
    }

    Ok(())
}

/// Logs the records and appends them to `output` when given.
fn emit<T: Serialize + Debug>(records: &[T], output: Option<&str>, json: bool) -> Result<()> {
    if json {
        print_json(records)?;
    } else {
        print_pretty(records);
    }

    if let Some(path) = output {
        append_records(path, records)?;
        info!(path, rows = records.len(), "Records written");
    }
    Ok(())
}
