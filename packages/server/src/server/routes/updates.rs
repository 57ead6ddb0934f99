use axum::{extract::Extension, http::StatusCode, Json};
use telegram::Update;

use crate::domains::inline::handle_update;
use crate::server::app::AppState;

/// Webhook for gateway updates
///
/// Handlers never fail, so every well-formed update is acknowledged with 200
/// once it has been answered.
pub async fn updates_handler(
    Extension(state): Extension<AppState>,
    Json(update): Json<Update>,
) -> StatusCode {
    handle_update(update, &state.deps).await;
    StatusCode::OK
}
