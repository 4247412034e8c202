//! vercel-purge - Entry Point
//!
//! Deletes the active Vercel deployments of a deleted branch, either as a
//! standalone CLI (`run`) or as a GitHub Actions step (`action`).

use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use tracing::debug;

use vercel_purge::app::actions::{ActionInputs, ActionsReporter};
use vercel_purge::app::console::ConsoleReporter;
use vercel_purge::app::options::{DeleterOptions, PurgeOptions, DEFAULT_API_BASE_URL};
use vercel_purge::app::run::run;
use vercel_purge::errors::PurgeError;
use vercel_purge::logs::{init_logging, LogLevel, LogOptions};
use vercel_purge::purge::reporter::Reporter;
use vercel_purge::utils::version_info;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_TIME"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "vercel-purge", version, long_version = LONG_VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Purge using flags or TARGET_BRANCH / VERCEL_TOKEN / VERCEL_PROJECT_ID
    Run(RunArgs),

    /// Purge from a GitHub Actions step triggered by a `delete` event
    Action(TuningArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Branch whose deployments are deleted
    #[arg(long, env = "TARGET_BRANCH")]
    target_branch: Option<String>,

    /// Vercel bearer token
    #[arg(long, env = "VERCEL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Vercel project ID
    #[arg(long, env = "VERCEL_PROJECT_ID", default_value = "")]
    project_id: String,

    #[command(flatten)]
    tuning: TuningArgs,
}

#[derive(Args, Debug)]
struct TuningArgs {
    /// Vercel API base URL
    #[arg(long, env = "VERCEL_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Delay before each delete request, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delete_delay_ms: u64,

    /// Maximum delete requests in flight
    #[arg(long, default_value_t = 10)]
    max_concurrent: usize,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl TuningArgs {
    fn base_options(&self) -> PurgeOptions {
        PurgeOptions {
            api_base_url: self.api_url.clone(),
            deleter: DeleterOptions {
                delay: Duration::from_millis(self.delete_delay_ms),
                max_concurrent: self.max_concurrent,
            },
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }

    fn log_options(&self, verbose_format: bool) -> LogOptions {
        LogOptions {
            log_level: self.log_level,
            json_format: self.log_json,
            verbose_format,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => run_standalone(args).await,
        Command::Action(tuning) => run_action(tuning).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run_standalone(args: RunArgs) -> Result<(), PurgeError> {
    if let Err(e) = init_logging(args.tuning.log_options(true)) {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("vercel-purge {}", version_info().long());

    let options = PurgeOptions {
        target_branch: args.target_branch.unwrap_or_default(),
        token: SecretString::from(args.token.unwrap_or_default()),
        project_id: args.project_id,
        ..args.tuning.base_options()
    };

    run(&options, &ConsoleReporter::default()).await.map(|_| ())
}

async fn run_action(tuning: TuningArgs) -> Result<(), PurgeError> {
    if let Err(e) = init_logging(tuning.log_options(false)) {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("vercel-purge {}", version_info().long());

    let reporter = ActionsReporter::from_env();
    let inputs = match ActionInputs::resolve(|key| std::env::var(key).ok()) {
        Ok(inputs) => inputs,
        Err(e) => {
            reporter.fail(&e);
            return Err(e);
        }
    };

    let options = inputs.into_options(tuning.base_options());
    run(&options, &reporter).await.map(|_| ())
}
