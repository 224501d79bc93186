// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! netlayer CLI
//!
//! Issues one request through the endpoint router and prints the outcome.

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use netlayer::{Endpoint, HttpClient, HttpClientConfig, HttpMethod, Outcome, Provider};
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("netlayer=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("--help" | "-h" | "help") => {
            print_usage();
            if args.is_empty() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Some("--version" | "-v" | "version") => {
            println!("netlayer {}", netlayer::VERSION);
            ExitCode::SUCCESS
        }
        Some(_) => match parse_endpoint(&args) {
            Ok(endpoint) => run(endpoint).await,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                print_usage();
                ExitCode::from(1)
            }
        },
    }
}

fn print_usage() {
    println!(
        r#"netlayer - Transport-agnostic HTTP client

USAGE:
    netlayer <METHOD> <BASE_URL> [PATH] [OPTIONS]

METHODS:
    GET, POST, PUT, DELETE

OPTIONS:
    -H, --header <NAME:VALUE>   Add a request header (repeatable)
    -j, --json <JSON>           Send a JSON body
    help                        Show this help message
    version                     Show version information

EXAMPLES:
    netlayer GET https://api.example.com users/1
    netlayer POST https://api.example.com users -H "x-trace:1" -j '{{"name":"a"}}'
"#
    );
}

fn parse_endpoint(args: &[String]) -> anyhow::Result<Endpoint> {
    let mut iter = args.iter();

    let method: HttpMethod = iter
        .next()
        .ok_or_else(|| anyhow!("missing method"))?
        .parse()?;
    let base = iter.next().ok_or_else(|| anyhow!("missing base URL"))?;

    let mut path = String::new();
    let mut endpoint_headers = Vec::new();
    let mut body = None;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-H" | "--header" => {
                let header = iter.next().ok_or_else(|| anyhow!("{} needs a value", arg))?;
                let (name, value) = header
                    .split_once(':')
                    .ok_or_else(|| anyhow!("header '{}' is not NAME:VALUE", header))?;
                endpoint_headers.push((name.trim().to_string(), value.trim().to_string()));
            }
            "-j" | "--json" => {
                let raw = iter.next().ok_or_else(|| anyhow!("{} needs a value", arg))?;
                let value: serde_json::Value =
                    serde_json::from_str(raw).context("invalid JSON body")?;
                body = Some(value);
            }
            other if path.is_empty() && !other.starts_with('-') => path = other.to_string(),
            other => bail!("unexpected argument '{}'", other),
        }
    }

    let mut endpoint = Endpoint::parse(base, path)
        .with_context(|| format!("invalid base URL '{}'", base))?
        .with_method(method);
    for (name, value) in endpoint_headers {
        endpoint = endpoint.header(name, value);
    }
    if let Some(body) = body {
        endpoint = endpoint.json(&body)?;
    }

    Ok(endpoint)
}

async fn run(endpoint: Endpoint) -> ExitCode {
    let client = match HttpClient::with_config(HttpClientConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return ExitCode::from(1);
        }
    };

    let provider = Provider::with_transport(client);
    let (tx, rx) = oneshot::channel();
    provider.dispatch(&endpoint, move |outcome| {
        let _ = tx.send(outcome);
    });

    match rx.await {
        Ok(Outcome::Success { body, response }) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", body.len());
            println!("\n{}", String::from_utf8_lossy(&body));

            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Ok(Outcome::Failure(e)) => {
            eprintln!("Request failed [{}:{}]: {}", e.domain(), e.code(), e);
            ExitCode::from(1)
        }
        Err(_) => {
            eprintln!("Request was abandoned");
            ExitCode::from(1)
        }
    }
}
