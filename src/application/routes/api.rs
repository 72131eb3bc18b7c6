use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::errors::AppError;
use crate::application::services::RouletteSnapshot;
use crate::application::state::AppState;
use crate::domain::bans::{BanAttribute, BanRule};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/fetch", post(fetch))
        .route("/bans", post(add_ban))
        .route("/bans/{index}", delete(remove_ban))
        .route("/image-error", post(image_error))
}

/// Payload for adding a ban. Arbitrary values are accepted; only the
/// attribute name is constrained to the known set.
#[derive(Debug, Deserialize)]
pub struct NewBan {
    pub attribute: BanAttribute,
    pub value: String,
}

async fn status(State(state): State<AppState>) -> Json<RouletteSnapshot> {
    Json(state.roulette.snapshot().await)
}

#[tracing::instrument(skip(state))]
async fn fetch(State(state): State<AppState>) -> Json<RouletteSnapshot> {
    Json(state.roulette.spin().await)
}

#[tracing::instrument(skip(state))]
async fn add_ban(
    State(state): State<AppState>,
    Json(payload): Json<NewBan>,
) -> Json<RouletteSnapshot> {
    let rule = BanRule::new(payload.attribute, payload.value);
    Json(state.roulette.add_ban(rule).await)
}

#[tracing::instrument(skip(state))]
async fn remove_ban(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<RouletteSnapshot>, AppError> {
    let snapshot = state.roulette.remove_ban(index).await?;
    Ok(Json(snapshot))
}

/// Broken-image report from the client: the displayed `img_src` failed to
/// render, so draw again.
#[tracing::instrument(skip(state))]
async fn image_error(State(state): State<AppState>) -> Json<RouletteSnapshot> {
    Json(state.roulette.spin().await)
}
