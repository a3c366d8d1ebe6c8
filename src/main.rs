//! CLI entry point for package-check.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use package_check::checks::package_checks;
use package_check::config::Config;
use package_check::platform::{load_context, OsPlatform};
use package_check::runner::run;
use package_check::ui;

/// Exit code for inputs that could not be loaded.
const EXIT_LOAD_ERROR: i32 = 2;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE")
);

#[derive(Parser)]
#[command(name = "package-check")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Check that an npm package is ready to publish", long_about = None)]
#[command(
    after_help = "Reads package.json and README.md from the package directory.\n\nEXIT CODES:\n    0    All checks passed\n    1    A check failed\n    2    Internal error or unreadable input"
)]
struct Cli {
    /// Package directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::new(cli.dir, cli.verbose);
    init_tracing(&config);

    let ctx = match load_context(&OsPlatform, &config) {
        Ok(ctx) => ctx,
        Err(e) => {
            ui::report_load_error(&e);
            std::process::exit(EXIT_LOAD_ERROR);
        }
    };

    let outcome = run(&package_checks(&ctx));
    ui::report(&outcome);
    std::process::exit(outcome.exit_code());
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize()),
        )
        .init();
}
