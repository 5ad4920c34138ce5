use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{parse_part_inventory, parse_sellable_products, InventoryRecord, ProductRecord};
use crate::{error::AppResult, upstream::UpstreamResponse};

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsQuery {
    pub supplier_code: String,
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryQuery {
    pub environment: String,
}

// ── /products ────────────────────────────────────────────────────────────────

/// Template context for `products.html`. `error` is set exactly when the
/// upstream answered with something other than 200, and then `products` is
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsPage {
    response_code: u16,
    supplier_code: String,
    environment: String,
    products: Vec<ProductRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    no_products: Option<usize>,
    error: Option<String>,
}

impl ProductsPage {
    pub fn loaded(query: ProductsQuery, products: Vec<ProductRecord>) -> Self {
        Self {
            response_code: StatusCode::OK.as_u16(),
            supplier_code: query.supplier_code,
            environment: query.environment,
            no_products: Some(products.len()),
            products,
            error: None,
        }
    }

    pub fn failed(query: ProductsQuery, status: StatusCode, body: String) -> Self {
        Self {
            response_code: status.as_u16(),
            supplier_code: query.supplier_code,
            environment: query.environment,
            products: Vec::new(),
            no_products: None,
            error: Some(body),
        }
    }

    /// Reshapes an upstream answer into the page context.
    pub fn from_upstream(query: ProductsQuery, response: UpstreamResponse) -> AppResult<Self> {
        if response.status == StatusCode::OK {
            let products = parse_sellable_products(&response.body)?;
            Ok(Self::loaded(query, products))
        } else {
            Ok(Self::failed(query, response.status, response.body))
        }
    }

    pub fn response_code(&self) -> u16 {
        self.response_code
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// ── /inventory/{supplier_code}/{product_id} ──────────────────────────────────

/// Template context for `inventory.html`. On a non-200 answer the inventory
/// list is omitted from the context altogether.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPage {
    response_code: u16,
    supplier_code: String,
    environment: String,
    product_id: String,
    #[serde(rename = "PartInventory", skip_serializing_if = "Option::is_none")]
    part_inventory: Option<Vec<InventoryRecord>>,
    error: Option<String>,
}

impl InventoryPage {
    pub fn loaded(
        supplier_code: String,
        product_id: String,
        query: InventoryQuery,
        part_inventory: Vec<InventoryRecord>,
    ) -> Self {
        Self {
            response_code: StatusCode::OK.as_u16(),
            supplier_code,
            environment: query.environment,
            product_id,
            part_inventory: Some(part_inventory),
            error: None,
        }
    }

    pub fn failed(
        supplier_code: String,
        product_id: String,
        query: InventoryQuery,
        status: StatusCode,
        body: String,
    ) -> Self {
        Self {
            response_code: status.as_u16(),
            supplier_code,
            environment: query.environment,
            product_id,
            part_inventory: None,
            error: Some(body),
        }
    }

    pub fn from_upstream(
        supplier_code: String,
        product_id: String,
        query: InventoryQuery,
        response: UpstreamResponse,
    ) -> AppResult<Self> {
        if response.status == StatusCode::OK {
            let records = parse_part_inventory(&response.body)?;
            Ok(Self::loaded(supplier_code, product_id, query, records))
        } else {
            Ok(Self::failed(
                supplier_code,
                product_id,
                query,
                response.status,
                response.body,
            ))
        }
    }

    pub fn response_code(&self) -> u16 {
        self.response_code
    }

    pub fn part_inventory(&self) -> &[InventoryRecord] {
        self.part_inventory.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
