//! Command-line front end for the seturl client.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! seturl https://example.com/a/very/long/path
//!
//! # Request a custom alias
//! seturl --alias launch https://example.com/launch
//!
//! # Never fail: print the original URL when shortening is impossible
//! seturl --silent https://example.com/a https://example.com/b
//! ```
//!
//! # Environment Variables
//!
//! - `SETURL_API_KEY`: API key (prompted for when missing and stdin is a terminal)
//! - `SETURL_BASE_HOST`: Service host (default: `seturl.in`)
//! - `SETURL_ACCEPT_INVALID_CERTS`: Disable TLS verification
//! - `RUST_LOG`, `LOG_FORMAT`: Logging
//!
//! A `.env` file in the working directory is loaded first if present.

use seturl::config::{self, Config};
use seturl::prelude::*;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Password;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Shorten URLs with seturl.in.
#[derive(Parser)]
#[command(name = "seturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URLs to shorten
    #[arg(required = true)]
    urls: Vec<String>,

    /// API key (overrides SETURL_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Service host (overrides SETURL_BASE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Custom alias for the short link
    #[arg(short, long)]
    alias: Option<String>,

    /// Print the original URL instead of failing
    #[arg(short, long)]
    silent: bool,

    /// Use the quick-link request, which never fails
    #[arg(short, long)]
    quick: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    init_tracing(&config);

    if let Some(api_key) = cli.api_key.clone() {
        config.api_key = Some(api_key);
    }
    if let Some(host) = cli.host.clone() {
        config.base_host = host;
    }
    if cli.insecure {
        config.accept_invalid_certs = true;
    }

    config.validate()?;
    config.print_summary();

    let api_key = resolve_api_key(&config)?;
    let client = ShortenerClient::new(config.client_config(api_key))
        .context("Failed to create shortener client")?;

    let mut options = ConvertOptions::new()
        .silently_fail(cli.silent)
        .quick_link(cli.quick);
    if let Some(alias) = cli.alias.as_deref() {
        options = options.alias(alias);
    }

    let total = cli.urls.len();
    let mut failures = 0usize;

    for long_url in &cli.urls {
        match client.convert(long_url, &options).await {
            Ok(short_url) => println!(
                "{} {} {}",
                long_url.dimmed(),
                "->".bright_blue(),
                short_url.green().bold()
            ),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "error".red().bold(), long_url, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {total} URL(s) could not be shortened");
    }

    Ok(())
}

/// Installs the global tracing subscriber, writing to stderr.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Returns the configured API key, prompting for one on a terminal.
fn resolve_api_key(config: &Config) -> Result<String> {
    if let Some(ref key) = config.api_key {
        return Ok(key.clone());
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("API key not provided: set SETURL_API_KEY or pass --api-key");
    }

    let key: String = Password::new()
        .with_prompt("seturl API key")
        .interact()
        .context("Failed to read API key")?;

    if key.trim().is_empty() {
        anyhow::bail!("API key not provided");
    }

    Ok(key)
}
