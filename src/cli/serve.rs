use std::sync::Arc;

use crate::{
    config,
    extraction::GeminiClient,
    info,
    server::{self, AppState},
    spotify::SpotifyClient,
};

pub async fn serve() {
    let state = AppState {
        catalog: Arc::new(SpotifyClient::from_env()),
        extractor: Arc::new(GeminiClient::from_env()),
    };

    info!("Listening on {}", config::server_addr());
    server::start_api_server(state).await;
}
