//! Command-line front end for the deduction engine.
//!
//! Runs the engine in-process; no server is needed.
//!
//! # Usage
//!
//! ```bash
//! # Deduce one or more URLs
//! cargo run --bin deduce -- url "https://boards.greenhouse.io/boards/acme/jobs/123456"
//!
//! # Machine-readable output, sanitizing pasted input first
//! cargo run --bin deduce -- url --json --sanitize "https://acme.ashbyhq.com/1234?ref=li?x=1#apply"
//!
//! # List the provider registry in precedence order
//! cargo run --bin deduce -- providers
//!
//! # Print the stable hash used for synthetic ids
//! cargo run --bin deduce -- hash "https://example.com/careers"
//! ```
//!
//! Set `RUST_LOG=jobhint=debug` to see which registry entry or fallback
//! handled each URL.

use jobhint::api::dto::deduce::DeducedRecord;
use jobhint::domain::deduction::{deduce, registry};
use jobhint::domain::entities::DeducedFields;
use jobhint::utils::stable_hash::stable_hash;
use jobhint::utils::url_normalizer::sanitize_input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Deduce job-posting metadata from URLs.
#[derive(Parser)]
#[command(name = "deduce")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduce fields for one or more URLs
    Url {
        /// Posting URLs, deduced independently
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print JSON instead of a colored listing
        #[arg(short, long)]
        json: bool,

        /// Clean pasted input (stray `?`, fragments, repeated `&`) first
        #[arg(short, long)]
        sanitize: bool,
    },

    /// List registry entries in precedence order
    Providers,

    /// Print the stable hash of a string
    Hash {
        /// Text to hash
        text: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url {
            urls,
            json,
            sanitize,
        } => handle_urls(urls, json, sanitize)?,
        Commands::Providers => list_providers(),
        Commands::Hash { text } => println!("{}", stable_hash(&text)),
    }

    Ok(())
}

/// Deduces every URL and prints the results.
///
/// With `--json`, a single URL prints its record (`{}` when empty); several
/// URLs print an array of `{url, fields}` objects.
fn handle_urls(urls: Vec<String>, as_json: bool, sanitize: bool) -> Result<()> {
    let inputs: Vec<String> = if sanitize {
        urls.iter().map(|u| sanitize_input(u)).collect()
    } else {
        urls
    };

    let results: Vec<(String, Option<DeducedFields>)> = inputs
        .into_iter()
        .map(|url| {
            let fields = deduce(&url);
            (url, fields)
        })
        .collect();

    if as_json {
        let value = match results.as_slice() {
            [(_, fields)] => serde_json::to_value(DeducedRecord(fields.clone()))?,
            _ => json!(
                results
                    .iter()
                    .map(|(url, fields)| json!({ "url": url, "fields": DeducedRecord(fields.clone()) }))
                    .collect::<Vec<_>>()
            ),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to render JSON")?
        );
        return Ok(());
    }

    for (url, fields) in &results {
        print_listing(url, fields.as_ref());
    }

    let empty = results.iter().filter(|(_, f)| f.is_none()).count();
    if results.len() > 1 {
        println!(
            "  Total: {}  recognized: {}  empty: {}",
            results.len().to_string().bright_white().bold(),
            (results.len() - empty).to_string().green(),
            empty.to_string().yellow()
        );
        println!();
    }

    Ok(())
}

/// Prints one deduction as an aligned, colored key/value listing.
///
/// # Output Format
///
/// ```text
/// https://boards.greenhouse.io/boards/acme/jobs/123456
///   foundOn              corporate-site
///   provider             greenhouse
///   providerTenant       acme
///   externalId           123456
///   hiringCompanyName    acme
/// ```
fn print_listing(url: &str, fields: Option<&DeducedFields>) {
    println!("{}", url.bright_blue().bold());

    let Some(fields) = fields else {
        println!("  {}", "not a usable posting URL (empty record)".yellow());
        println!();
        return;
    };

    let rows = [
        ("foundOn", Some(fields.found_on.as_str())),
        ("provider", Some(fields.provider.as_str())),
        ("providerTenant", Some(fields.provider_tenant.as_str())),
        ("externalId", Some(fields.external_id.as_str())),
        ("hiringCompanyName", fields.hiring_company_name.as_deref()),
        ("postingCompanyName", fields.posting_company_name.as_deref()),
        ("title", fields.title.as_deref()),
    ];

    for (key, value) in rows {
        match value {
            Some(v) if !v.is_empty() => println!("  {:<20} {}", key.bright_white(), v.cyan()),
            _ => println!("  {:<20} {}", key.bright_white(), "-".bright_black()),
        }
    }
    println!();
}

/// Lists registry entries with their kind and matchers.
///
/// # Output Format
///
/// ```text
///   #   Provider          Kind   Domains
///   ──────────────────────────────────────────────────────────────
///   1   weworkremotely    board  weworkremotely.com
///   13  workday           ats    /\.myworkdayjobs\.com$/
/// ```
fn list_providers() {
    println!("{}", "Provider registry (first match wins)".bright_blue().bold());
    println!();
    println!(
        "  {:<3} {:<17} {:<6} {}",
        "#".bright_white().bold(),
        "Provider".bright_white().bold(),
        "Kind".bright_white().bold(),
        "Domains".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for (idx, entry) in registry().entries().iter().enumerate() {
        let kind = if entry.is_ats() {
            "ats".green()
        } else {
            "board".magenta()
        };
        let domains: Vec<String> = entry.matchers.iter().map(|m| m.describe()).collect();

        println!(
            "  {:<3} {:<17} {:<6} {}",
            (idx + 1).to_string().bright_black(),
            entry.name.cyan(),
            kind,
            domains.join(", ")
        );
    }

    println!();
    println!(
        "  Total: {}",
        registry().len().to_string().bright_white().bold()
    );
    println!();
}
