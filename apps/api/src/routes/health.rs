use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status and whether AI enhancement is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generator = state.assembler.ai().generator();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "profile-builder-api",
        "ai_enabled": generator.is_some(),
        "model": generator.map(|g| g.model()),
    }))
}
