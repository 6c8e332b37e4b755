mod config;
mod input;
mod terminal;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use platform_people::RandomUserProvider;
use products_directory::{
    CardNode, DirectoryController, DirectoryEvents, MemoryDocument, Turn, load_all, run,
};
use tracing::info;

use crate::config::{AppConfig, ConfigArgs};

#[derive(Parser, Debug)]
#[command(
    name = "directory",
    version,
    about = "Searchable employee directory",
    long_about = "Loads random people from a randomuser.me compatible API and presents them as a searchable employee directory.\n\nEnvironment: DIRECTORY_ENDPOINT, DIRECTORY_NATIONALITIES, DIRECTORY_EMPLOYEES, DIRECTORY_TIMEOUT_SECS (flags take precedence)."
)]
struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the directory interactively (default).
    Browse,
    /// Load every employee, print the matching cards and exit.
    List {
        #[arg(short, long, value_name = "TEXT", help = "Only list employees matching TEXT")]
        query: Option<String>,
        #[arg(long, help = "Print cards as JSON")]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(ObsConfig::default().with_verbosity(cli.verbose))?;

    let config = AppConfig::load(&cli.config).context("failed to load configuration")?;
    info!(
        endpoint = %config.endpoint,
        nationalities = ?config.nationalities,
        employees = config.employees,
        "configuration loaded"
    );
    let provider = RandomUserProvider::new(&config.endpoint, &config.nationalities, config.timeout)
        .context("failed to build person provider")?;

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => browse(&config, &provider).await,
        Command::List { query, json } => list(&config, &provider, query.as_deref(), json).await,
    }
}

async fn browse(config: &AppConfig, provider: &RandomUserProvider) -> Result<()> {
    let mut controller = DirectoryController::new(MemoryDocument::new());
    println!("{}", terminal::HELP);

    let summary = run(
        &mut controller,
        provider,
        config.employees,
        input::stdin_events(),
        |controller, turn| {
            if let Turn::Event {
                outcome: Err(err), ..
            } = turn
            {
                println!("{}", terminal::render_error(err));
            }
            print!("{}", terminal::render(controller));
        },
    )
    .await;

    if summary.failed > 0 {
        println!(
            "{} of {} employees could not be loaded",
            summary.failed, summary.requested
        );
    }
    Ok(())
}

async fn list(
    config: &AppConfig,
    provider: &RandomUserProvider,
    query: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut controller = DirectoryController::new(MemoryDocument::new());
    let summary = load_all(&mut controller, provider, config.employees).await;
    if let Some(query) = query {
        controller.on_search_input(query)?;
    }

    let cards: Vec<&CardNode> = controller.document().cards().collect();
    let rendered = terminal::render_list(&cards, json).context("failed to encode cards")?;
    print!("{rendered}");

    if summary.failed > 0 {
        eprintln!(
            "{} of {} employees could not be loaded",
            summary.failed, summary.requested
        );
    }
    Ok(())
}
