pub mod inventory;
pub mod products;

#[cfg(test)]
mod testing;

use axum::{extract::State, http::StatusCode, response::Html, Json};
use minijinja::context;
use serde_json::json;

use crate::{error::AppResult, render, AppState};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "inventory-dashboard" })))
}

// ── GET / ─────────────────────────────────────────────────────────────────────

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.templates.render(render::HOME, &context! {})
}
