use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{RouletteService, RouletteStatus};
use crate::infrastructure::mars::MarsApiClient;
use crate::presentation::cli::{PickCommand, parse_ban, print_json};

/// One-shot roulette: run the fetch-and-filter loop once against the
/// configured API and print the winning photo. Terminal loop failures
/// (all candidates banned, attempt budget exhausted) exit non-zero.
pub async fn run(command: PickCommand) -> anyhow::Result<()> {
    let bans = command
        .bans
        .iter()
        .map(|raw| parse_ban(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let client = reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .build()?;
    let source = Arc::new(MarsApiClient::new(
        client,
        command.mars_api_url,
        command.nasa_api_key,
    ));

    let roulette = RouletteService::with_bans(source, bans);
    let snapshot = roulette.spin().await;

    match (snapshot.status, snapshot.photo) {
        (RouletteStatus::Success, Some(photo)) => print_json(&photo),
        _ => anyhow::bail!(
            "{}",
            snapshot
                .error
                .unwrap_or_else(|| "no photo found".to_string())
        ),
    }
}
