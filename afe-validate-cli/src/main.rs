use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "AFE_VALIDATE_LOG";

/// Exit code for a command line that cannot be used, same as an unreadable input.
const USAGE_EXIT_CODE: u8 = 1;

#[derive(Parser)]
#[command(name = "afe-validate", version)]
#[command(about = "Validate an AFE document and write an AFEValidateResult document")]
struct Cli {
    /// AFE document to validate
    input: PathBuf,
    /// Where to write the result document
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Nothing useful to do if stderr itself is gone.
            err.print().ok();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_EXIT_CODE),
            };
        }
    };

    // Logging is diagnostics only; a bad filter must not change the exit code.
    if let Err(err) = init_logging() {
        eprintln!("afe-validate: logging disabled: {err:#}");
    }

    match afe_validate_core::validate_afe_file(&cli.input, &cli.output) {
        Ok(outcome) => {
            info!(
                errors = outcome.errors().len(),
                warnings = outcome.warnings().len(),
                output = %cli.output.display(),
                "validation finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(error = %err, "validation aborted");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Install a stderr subscriber when `AFE_VALIDATE_LOG` or `RUST_LOG` is set.
///
/// With neither variable set the tool stays silent.
fn init_logging() -> Result<()> {
    let (var, directives) = match std::env::var(LOG_ENV) {
        Ok(directives) => (LOG_ENV, directives),
        Err(_) => match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directives) => (EnvFilter::DEFAULT_ENV, directives),
            Err(_) => return Ok(()),
        },
    };
    let env_filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {var} filter {directives:?}"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialise logging")?;
    Ok(())
}
