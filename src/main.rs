//! flowbot - a menu-driven Telegram bot
//!
//! Walks users through a fixed graph of screens defined in a YAML flow
//! file, with per-user back-navigation history held in memory.

mod bot;
mod flow;
mod nav;
mod render;
mod telegram;

use flow::FlowGraph;
use nav::Navigator;
use std::sync::Arc;
use telegram::BotClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration
    let token = std::env::var("TELEGRAM_BOT_TOKEN")
        .map_err(|_| "set the TELEGRAM_BOT_TOKEN environment variable")?;
    let flow_path = std::env::var("FLOW_PATH").unwrap_or_else(|_| "flow.yaml".to_string());

    // The process must not start without a valid flow graph.
    tracing::info!(path = %flow_path, "Loading flow definition");
    let graph = Arc::new(FlowGraph::load(&flow_path)?);
    tracing::info!(
        start_node = %graph.start_node(),
        nodes = graph.node_count(),
        "Flow graph loaded"
    );

    let navigator = Arc::new(Navigator::new(graph));
    let client = Arc::new(BotClient::new(&token)?);

    tracing::info!("Bot started, polling for updates");
    bot::run(client, navigator).await;

    Ok(())
}
