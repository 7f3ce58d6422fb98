//! github-activity
//!
//! Binary entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use tracing_subscriber::EnvFilter;

use github_activity::app::{self, App, EXIT_FAILURE, EXIT_SUCCESS};
use github_activity::config::{ColorMode, Config};
use github_activity::github::constants::{DEFAULT_API_URL, env};

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity"
)]
struct Cli {
    /// GitHub username
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    username: String,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long, value_name = "SECS", env = env::TIMEOUT)]
    timeout: Option<u64>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// API base URL
    #[arg(long, hide = true, env = env::API_URL, default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            color: self.color,
            ..Config::default()
        }
        .with_timeout_secs(self.timeout)
        .with_terminal_width()
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = color_eyre::install() {
        tracing::debug!(error = %err, "color-eyre already installed");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            println!("An unexpected error occurred: {err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut app = App::new(cli.config(), io::stdout());
    let code = runtime.block_on(app.execute(&cli.username, app::ctrl_c()));
    ExitCode::from(code)
}
