pub mod filters;

use std::sync::Arc;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppResult;

pub const HOME: &str = "inventory-levels.html";
pub const PRODUCTS: &str = "products.html";
pub const INVENTORY: &str = "inventory.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (HOME, include_str!("../../templates/inventory-levels.html")),
    (PRODUCTS, include_str!("../../templates/products.html")),
    (INVENTORY, include_str!("../../templates/inventory.html")),
];

/// Compiled page templates, shared read-only across requests.
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("humanize_ts", filters::humanize_ts);

        Ok(Self { env: Arc::new(env) })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}
