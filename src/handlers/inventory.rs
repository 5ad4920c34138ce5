use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{InventoryPage, InventoryQuery},
    render, AppState,
};

// ── GET /inventory/:supplier_code/:product_id ─────────────────────────────────

pub async fn product_inventory(
    State(state): State<AppState>,
    Path((supplier_code, product_id)): Path<(String, String)>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Html<String>> {
    info!(
        supplier_code = %supplier_code,
        product_id = %product_id,
        environment = %query.environment,
        "Fetching part inventory"
    );

    let response = state
        .upstream
        .inventory(&supplier_code, &product_id, &query.environment)
        .await?;
    let page = InventoryPage::from_upstream(supplier_code, product_id, query, response)?;

    debug!(
        status = page.response_code(),
        parts = page.part_inventory().len(),
        upstream_error = page.error().is_some(),
        "Inventory page ready"
    );

    state.templates.render(render::INVENTORY, &page)
}
