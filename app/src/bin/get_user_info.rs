//! Print a TwitCasting user's profile as JSON.
//!
//! Usage: `get-user-info [user_id]` (defaults to `twitcasting_jp`).
//! Credentials come from `TWICAS_ACCESS_TOKEN`, or `TWICAS_CLIENT_ID` and
//! `TWICAS_CLIENT_SECRET`, optionally via a `.env` file.

use tracing_subscriber::EnvFilter;
use twicas_client::TwicasClient;

const DEFAULT_USER_ID: &str = "twitcasting_jp";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    twicas_tools::load_dotenv(&twicas_tools::dotenv_candidates());

    let user_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let client = TwicasClient::from_env()?;
    let resp = client.get_user_info(&user_id).await?;

    tracing::info!(
        limit = resp.rate_limit.limit,
        remaining = resp.rate_limit.remaining,
        reset = resp.rate_limit.reset,
        "Rate limit"
    );
    println!("{}", serde_json::to_string_pretty(&resp.data.user)?);

    Ok(())
}
