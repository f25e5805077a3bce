//! One-shot command line driver for the curio client layer.
//!
//! Talks to a running archive backend through the HTTP gateway: `search`
//! runs a query through the search controller and prints the matching
//! works; `show` loads a single work's editable payload by id.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use curio_client::{RecordLoader, SearchController, SearchEvent};
use curio_gateway::{Gateway, GatewayConfig, HttpGateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "curio", version, about = "Archive client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the archive. An empty query lists everything.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the editable payload of one work.
    Show {
        /// Work id, as it would appear in a route parameter.
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig::from_env();
    let gateway: Arc<dyn Gateway> = match HttpGateway::from_config(&config) {
        Ok(gateway) => Arc::new(gateway),
        Err(error) => {
            eprintln!("failed to build gateway: {error}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Search { query } => run_search(gateway, query).await,
        Command::Show { id } => run_show(gateway, &id).await,
    }
}

/// Run one lookup through the search controller and print the outcome.
async fn run_search(gateway: Arc<dyn Gateway>, query: String) -> ExitCode {
    let controller = SearchController::new(gateway);
    let mut events = controller.subscribe();

    // The controller starts with an empty query; an empty search is a
    // refresh rather than a value change.
    if query.is_empty() {
        controller.refresh();
    } else {
        controller.set_query(query);
    }

    loop {
        match events.recv().await {
            Ok(SearchEvent::ResultsUpdated { count, .. }) => {
                for work in controller.works() {
                    println!(
                        "{:>6}  {}  {}",
                        work.work_id,
                        work.path,
                        work.title.as_deref().unwrap_or("-"),
                    );
                }
                tracing::info!(count, "search complete");
                return ExitCode::SUCCESS;
            }
            Ok(SearchEvent::LookupFailed { error, .. }) => {
                eprintln!("search failed: {error}");
                return ExitCode::FAILURE;
            }
            Ok(_) => continue,
            Err(_) => {
                eprintln!("search controller went away before completing");
                return ExitCode::FAILURE;
            }
        }
    }
}

/// Load one record and print it as pretty JSON.
async fn run_show(gateway: Arc<dyn Gateway>, id: &str) -> ExitCode {
    let loader = RecordLoader::new(gateway);

    match loader.load(id).await {
        Ok(edit) => match serde_json::to_string_pretty(&edit) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("failed to render record: {error}");
                ExitCode::FAILURE
            }
        },
        Err(error) => {
            eprintln!("error {}: {}", error.status, error.message);
            ExitCode::FAILURE
        }
    }
}
