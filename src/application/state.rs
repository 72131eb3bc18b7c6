use std::sync::Arc;

use crate::application::services::RouletteService;
use crate::infrastructure::mars::MarsApiClient;

/// Everything that varies between production and test environments: where
/// the Mars Photos API lives and the credential sent with each request.
pub struct AppStateConfig {
    pub mars_api_url: String,
    pub api_key: String,
}

#[derive(Clone)]
pub struct AppState {
    pub roulette: Arc<RouletteService>,
}

impl AppState {
    /// Build the application state, wiring the roulette service to the real
    /// Mars Photos client.
    pub fn from_config(config: AppStateConfig) -> Self {
        #[allow(clippy::expect_used)] // Startup: panicking is appropriate if the client cannot be built
        let http_client = reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let source = Arc::new(MarsApiClient::new(
            http_client,
            config.mars_api_url,
            config.api_key,
        ));

        Self {
            roulette: Arc::new(RouletteService::new(source)),
        }
    }
}
