use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;

use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::bans::{BanAttribute, BanRule};
use crate::presentation::web::templates::HomeTemplate;
use crate::presentation::web::views::{BanView, PhotoView};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/fetch", post(discover))
        .route("/bans", post(ban))
        .route("/bans/{index}/delete", post(unban))
        .route("/image-error", post(image_error))
}

#[derive(Debug, Deserialize)]
struct BanForm {
    attribute: BanAttribute,
    value: String,
}

#[tracing::instrument(skip(state))]
async fn home_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let snapshot = state.roulette.snapshot().await;

    let template = HomeTemplate {
        status: snapshot.status.as_str(),
        error: snapshot.error,
        photo: snapshot.photo.as_ref().map(PhotoView::from_domain),
        bans: snapshot
            .bans
            .iter()
            .enumerate()
            .map(|(index, rule)| BanView::from_domain(index, rule))
            .collect(),
    };

    render_html(template).map(IntoResponse::into_response)
}

async fn discover(State(state): State<AppState>) -> Redirect {
    state.roulette.spin().await;
    Redirect::to("/")
}

async fn ban(State(state): State<AppState>, Form(form): Form<BanForm>) -> Redirect {
    state
        .roulette
        .add_ban(BanRule::new(form.attribute, form.value))
        .await;
    Redirect::to("/")
}

async fn unban(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, StatusCode> {
    state
        .roulette
        .remove_ban(index)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Redirect::to("/"))
}

async fn image_error(State(state): State<AppState>) -> Redirect {
    state.roulette.spin().await;
    Redirect::to("/")
}
