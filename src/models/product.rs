use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// One sellable product variant, exactly as the upstream sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(pub Map<String, Value>);

#[derive(Debug, Deserialize)]
struct SellableProductsPayload {
    #[serde(rename = "ProductSellableArray")]
    array: ProductSellableArray,
}

#[derive(Debug, Deserialize)]
struct ProductSellableArray {
    #[serde(rename = "ProductSellable")]
    items: Vec<ProductRecord>,
}

/// Extracts `ProductSellableArray.ProductSellable` from a 200 body.
/// Records are passed through in upstream order.
pub fn parse_sellable_products(body: &str) -> AppResult<Vec<ProductRecord>> {
    let payload: SellableProductsPayload = serde_json::from_str(body)
        .map_err(|e| AppError::UpstreamSchema(format!("sellable products: {}", e)))?;
    Ok(payload.array.items)
}
