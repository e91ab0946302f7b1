//! `mq-router` command-line tool.
//!
//! Inspects route tables offline:
//! - `check` validates a route config file
//! - `explain` shows which route each message of a trigger event would reach
//!
//! Validators and handlers are code, so `explain` evaluates only the
//! declarative filters (queue ids, JSON pattern, regex).

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use mq_router::config::{load_config, RouterConfig};
use mq_router::event::TriggerEvent;
use mq_router::observability::logging::init_logging;
use mq_router::routing::{Matcher, RouteFilter};

#[derive(Parser)]
#[command(name = "mq-router")]
#[command(about = "Inspect message-queue route tables", long_about = None)]
struct Cli {
    /// Route table (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table
    Check,
    /// Show the route each message of a trigger event would match
    Explain {
        /// Trigger event payload (JSON).
        #[arg(short, long)]
        event: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability)?;

    tracing::info!(
        path = %cli.config.display(),
        routes = config.routes.len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Check => {
            for route in &config.routes {
                RouteFilter::from_config(route)?;
            }
            println!("{}: {} route(s) OK", cli.config.display(), config.routes.len());
        }
        Commands::Explain { event } => {
            let payload = fs::read_to_string(&event)?;
            let event = TriggerEvent::from_json(&payload)?;
            write_report(&config, &event, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Write the pretty-printed explain report, followed by a newline.
fn write_report<W: Write>(
    config: &RouterConfig,
    event: &TriggerEvent,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let report = explain(config, event)?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn explain(
    config: &RouterConfig,
    event: &TriggerEvent,
) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
    let filters = config
        .routes
        .iter()
        .map(|route| Ok((route.name.as_str(), RouteFilter::from_config(route)?.compile())))
        .collect::<Result<Vec<_>, mq_router::routing::BuildError>>()?;

    let rows: Vec<_> = event
        .messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let route = filters
                .iter()
                .find(|(_, filter)| filter.matches(message))
                .map(|(name, _)| *name);
            json!({
                "index": index,
                "message_id": message.message_id(),
                "queue_id": message.queue_id(),
                "route": route,
            })
        })
        .collect();

    Ok(json!({ "messages": rows }))
}
