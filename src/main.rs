use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use kickstart::app::{App, Outcome};
use kickstart::config::Config;
use kickstart::generator::{ContextGenerator, COMPANY_PROFILES};
use kickstart::logging;
use kickstart::session::Session;
use kickstart::ui::install_panic_hook;

#[derive(Parser)]
#[command(name = "kickstart")]
#[command(about = "Demo Studio Kickstart: set up a demo account step by step")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the companies with built-in business contexts
    Companies,

    /// Generate a business context for a website and print it as JSON
    Generate {
        /// Company website, e.g. grubhub.com
        website: String,

        /// Skip the simulated generation delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the initial session as JSON
    Summary,

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Companies) => cmd_companies(),
        Some(Commands::Generate { website, no_delay }) => {
            cmd_generate(&config, &website, no_delay).await?
        }
        Some(Commands::Summary) => print_json(&Session::initial())?,
        Some(Commands::Config) => print!("{}", config.to_toml()?),
        None => run_tui(config, logging_handle.log_file_path).await?,
    }

    Ok(())
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    install_panic_hook();

    let mut app = App::new(config);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    match result? {
        Outcome::Finished(session) => print_json(session.as_ref()),
        Outcome::Quit => Ok(()),
    }
}

fn cmd_companies() {
    for company in COMPANY_PROFILES {
        println!("{:<18} {}", company.domain, company.name);
    }
}

async fn cmd_generate(config: &Config, website: &str, no_delay: bool) -> Result<()> {
    if website.trim().is_empty() {
        anyhow::bail!("website must not be blank");
    }
    let delay = if no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(config.simulation.generate_context_ms)
    };
    let generator = ContextGenerator::new(delay);
    let existing = Session::initial().ai_contexts;
    let context = generator
        .generate(website, &existing, &tokio_util::sync::CancellationToken::new())
        .await
        .context("Context generation was cancelled")?;
    print_json(&context)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
