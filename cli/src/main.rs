//! CLI for the template updater.
//!
//! This tool audits every repository of an organization against the template
//! it was generated from and opens pull requests for outdated ones.

use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use template_updater::{
    load_settings, ReportRenderer, RunSummary, Runner, RunnerConfig, RunnerError,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Template Updater - Bring repositories generated from a template up to date.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Organization whose repositories are audited.
    organization: String,

    /// GitHub access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Binding context field naming a project's maintainer. Repeat to give
    /// fallbacks; the first field present wins.
    #[arg(long = "maintainer-field", value_name = "FIELD")]
    maintainer_fields: Vec<String>,

    /// Path to the settings file.
    #[arg(long)]
    config_path: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

/// Output format of the run report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Maintainer grouped tables.
    Text,
    /// The run summary as JSON.
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Pick the TLS crypto provider before any client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();
    let format = args.format;
    let colored = !args.no_color && console::colors_enabled();

    match run(args).await {
        Ok(summary) => match print_summary(&summary, format, colored) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to print the summary");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // stdout is reserved for the report
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let settings = load_settings(args.config_path.as_deref())?;
    let config = RunnerConfig::new(args.organization, args.token, settings)?
        .with_maintainer_fields(args.maintainer_fields);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary in the requested format.
fn print_summary(
    summary: &RunSummary,
    format: Format,
    colored: bool,
) -> Result<(), serde_json::Error> {
    match format {
        Format::Text => print!("{}", ReportRenderer::new(Utc::now(), colored).render(summary)),
        Format::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}
