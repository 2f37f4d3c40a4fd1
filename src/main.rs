use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

mod client;
mod commands;
mod domain;
mod logging;
mod report;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::client::{HttpConfig, ParsePointClient};
use crate::domain::{ResponseSchema, UPLOAD_FAILURE_MESSAGE, UploadSelection};
use crate::state::{App, AppConfig, StartupOptions, SummaryStore};
use crate::theme::Theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 ___  ___  ___  ___  ___  ___  ___  ___  _  _  _____
| _ \/ _ \| _ \/ __|| __|| _ \/ _ \|_ _|| \| ||_   _|
|  _/ __ ||   /\__ \| _| |  _/ (_) || | | .` |  | |
|_| /_/ \_\_|_\|___/|___||_|  \___/|___||_|\_|  |_|
";

/// ParsePoint - terminal dashboard for bank statement summaries
#[derive(Parser)]
#[command(name = "parsepoint", version = VERSION, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PDF statement to select and upload on start
    file: Option<PathBuf>,

    #[command(flatten)]
    service: ServiceArgs,

    /// Seed for chart sampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Colour scheme for this session
    #[arg(long, value_enum)]
    theme: Option<Theme>,
}

/// Overrides for the parsing service, applied on top of the config file.
#[derive(Args, Debug, Clone, Default)]
struct ServiceArgs {
    /// Parsing endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Response contract of the endpoint
    #[arg(long, value_enum)]
    schema: Option<ResponseSchema>,

    /// Upload timeout in seconds
    #[arg(long = "timeout")]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a statement and print the summary without the TUI
    Summary {
        /// PDF statement to upload
        file: PathBuf,

        /// Print the raw decoded response as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: file logging disabled: {err}");
            None
        }
    };

    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("parsepoint v{VERSION}");
            Ok(())
        }
        Some(Commands::Summary {
            file,
            json,
            service,
        }) => run_summary(&file, json, service).await,
        None => {
            let options = StartupOptions {
                file: cli.file,
                seed: cli.seed,
                theme: cli.theme,
                endpoint: cli.service.endpoint,
                schema: cli.service.schema,
                timeout_secs: cli.service.timeout_secs,
            };
            run_tui(options).await
        }
    }
}

async fn run_tui(options: StartupOptions) -> Result<()> {
    let mut app = App::new(options)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    tracing::info!("exiting");
    result
}

/// Headless upload: prints the sorted table and totals, or JSON.
async fn run_summary(file: &Path, json: bool, service: ServiceArgs) -> Result<()> {
    let config = AppConfig::load();
    let endpoint = service.endpoint.unwrap_or(config.endpoint);
    let schema = service.schema.unwrap_or(config.schema);
    let timeout = Duration::from_secs(service.timeout_secs.unwrap_or(config.timeout_secs));

    let selection = UploadSelection::from_path(file)?;
    let client = ParsePointClient::new(endpoint, schema, HttpConfig::with_timeout(timeout));
    let response = tokio::select! {
        result = client.submit(&selection) => result.wrap_err(UPLOAD_FAILURE_MESSAGE)?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("summary upload interrupted");
            return Err(eyre!("upload interrupted"));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let mut store = SummaryStore::new();
        store.load(response);
        print!("{}", report::render_text(&store));
    }
    Ok(())
}
