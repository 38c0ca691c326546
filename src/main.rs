//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin; API responses are cached in memory and evicted
//! by a periodic TTL sweep.

use anyhow::Context;
use tokio::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the API client, its response cache and the sweep task
/// 4. Run the REPL on stdin until `exit` or end of input
/// 5. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs don't interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, http_timeout={}s",
        config.base_url, config.cache_interval, config.http_timeout
    );

    let client = PokeApiClient::new(&config).context("Failed to create PokeAPI client")?;

    let mut stdout = std::io::stdout();
    repl::run(&client, BufReader::new(stdin()), &mut stdout)
        .await
        .context("REPL I/O failed")?;

    client.shutdown().await;
    info!("Pokedex closed");

    Ok(())
}
