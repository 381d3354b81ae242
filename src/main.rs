//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `app_utils` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! It sends one enveloped request and prints the unwrapped `data`.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::Value;
use std::process;

use app_utils::api::{dispatch, ApiError, PostParams, RequestDescriptor, ReqwestTransport};
use app_utils::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use app_utils::initialization::init_logger_with;
use app_utils::{Config, LogFormat, LogLevel};

/// Send one request to an API that wraps replies in a `{data, message}` envelope.
#[derive(Parser, Debug)]
#[command(name = "app_utils", version)]
struct Cli {
    /// Request URL
    url: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Body field as key=value; values that parse as JSON are sent as JSON (repeatable)
    #[arg(short = 'd', long = "data", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    raw.split_once(':')
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", raw))
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got {:?}", raw))
}

fn post_params(fields: Vec<(String, String)>) -> Option<PostParams> {
    if fields.is_empty() {
        return None;
    }
    let params = fields
        .into_iter()
        .map(|(key, raw)| {
            let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            (key, value)
        })
        .collect();
    Some(params)
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = Config {
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.clone(),
        timeout_seconds: cli.timeout_seconds,
        user_agent: cli.user_agent.clone(),
    };
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let transport = ReqwestTransport::from_config(&config).context("Failed to set up HTTP client")?;

    let method = reqwest::Method::from_bytes(cli.method.to_uppercase().as_bytes())
        .map_err(|_| anyhow!("Invalid HTTP method: {}", cli.method))?;
    let descriptor = cli.headers.into_iter().fold(
        RequestDescriptor::new(method, cli.url),
        |descriptor, (name, value)| descriptor.header(name, value),
    );

    let mut failure: Option<ApiError> = None;
    dispatch(
        &transport,
        descriptor,
        |data: Value| {
            println!(
                "{}",
                serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
            );
        },
        |error| failure = Some(error),
        post_params(cli.fields),
    )
    .await
    .context("Response was not a valid envelope")?;

    if let Some(error) = failure {
        eprintln!("error {}: {}", error.status, error.message);
        process::exit(1);
    }
    Ok(())
}
