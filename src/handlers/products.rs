use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{ProductsPage, ProductsQuery},
    render, AppState,
};

// ── GET /products ─────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> AppResult<Html<String>> {
    info!(
        supplier_code = %query.supplier_code,
        environment = %query.environment,
        "Listing sellable products"
    );

    let response = state
        .upstream
        .sellable_products(&query.supplier_code, &query.environment)
        .await?;
    let page = ProductsPage::from_upstream(query, response)?;

    debug!(
        status = page.response_code(),
        count = page.products().len(),
        upstream_error = page.error().is_some(),
        "Products page ready"
    );

    state.templates.render(render::PRODUCTS, &page)
}
