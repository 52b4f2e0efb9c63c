//! `lookup` command: run the full barcode-to-metadata chain.

use cratedig_catalog::{CatalogClient, RecordLookup};
use cratedig_core::AppConfig;

pub async fn run_lookup(config: &AppConfig, barcode: &str) -> anyhow::Result<()> {
    if config.spotify_token.is_none() {
        tracing::warn!("CRATEDIG_SPOTIFY_TOKEN is not set; catalog searches will be rejected");
    }

    let client = CatalogClient::with_base_urls(
        &config.spotify_base_url,
        config.spotify_token.as_deref(),
        &config.discogs_base_url,
        config.discogs_token.as_deref(),
        config.http_timeout_secs,
        &config.user_agent,
    )?;

    match RecordLookup::new(client).resolve(barcode).await? {
        Some(metadata) => println!("{}", serde_json::to_string_pretty(&metadata)?),
        None => println!("no record found for {barcode}"),
    }
    Ok(())
}
