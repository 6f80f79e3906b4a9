use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use velocity_exchange_verifiers::{
    core::context::VerificationContext, parser::parse_credential_endpoint_response,
    verify_credential_endpoint_response,
};

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "velocity-verify")]
#[command(about = "Checks an OpenID4VCI Credential Response against the Velocity profile")]
#[command(version)]
struct Cli {
    /// Credential Response to check, `-` to read it from stdin
    #[arg(short, long, default_value = "-")]
    response: String,

    /// Config file holding the credential issuer metadata
    #[arg(short, long, env = "VELOCITY_CONFIG")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[arg(long, default_value = "warn", env = "VELOCITY_LOG")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(&cli.log_level);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the response conforms to the profile.
fn run(cli: &Cli) -> Result<bool> {
    let config = Config::from_file(&cli.config)?;

    let text = if cli.response == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("unable to read response from stdin")?;
        text
    } else {
        fs::read_to_string(&cli.response)
            .with_context(|| format!("unable to read response {}", cli.response))?
    };

    let response = parse_credential_endpoint_response(&text)?;
    let context = VerificationContext::new(Some(&config.credential_issuer_metadata));
    let errors = verify_credential_endpoint_response(&response, &context);

    info!(
        "checked {} credential(s), found {} error(s)",
        response.credentials().map_or(0, <[_]>::len),
        errors.len()
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&errors).context("unable to serialize errors")?
    );

    Ok(errors.is_empty())
}

/// Logs go to stderr, stdout carries the error list.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();
}
