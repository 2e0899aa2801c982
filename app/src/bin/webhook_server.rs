//! Headless webhook receiver.
//!
//! Listens on `SERVER_PORT` (default 8080) for TwitCasting webhook
//! deliveries signed with `TWICAS_WEBHOOK_SIGNATURE` and logs each
//! accepted live start/end.

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use twicas_client::api::WebhookPayload;
use twicas_tools::config::ServerConfig;
use twicas_tools::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting TwitCasting webhook server");
    twicas_tools::load_dotenv(&twicas_tools::dotenv_candidates());

    let config = ServerConfig::from_env()?;
    let (tx, rx) = mpsc::channel::<WebhookPayload>(64);
    let logger = server::spawn_event_logger(rx);

    server::start_server(config, tx).await?;

    // The router owned the only sender, so the logger ends once the
    // buffered events are handled.
    let handled = logger.await?;
    tracing::info!(handled, "Shutting down...");
    Ok(())
}
