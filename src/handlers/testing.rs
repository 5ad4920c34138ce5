//! In-process stand-in for the PSRESTful API, served on an ephemeral port.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::State,
    http::{header::ACCEPT, HeaderMap, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use crate::{build_router, config::Config, AppState};

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
}

type Seen = Arc<Mutex<Vec<SeenRequest>>>;

pub struct FakeUpstream {
    pub base_url: String,
    seen: Seen,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeUpstream {
    pub async fn spawn() -> Self {
        let seen: Seen = Arc::default();
        let router = Router::new().fallback(respond).with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            seen,
            handle,
        }
    }

    /// A host nothing listens on.
    pub async fn closed_host() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn app(&self, timeout_secs: Option<u64>) -> Router {
        app_for(&self.base_url, timeout_secs)
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn app_for(host: &str, timeout_secs: Option<u64>) -> Router {
    let config = Config::from_lookup(|key| match key {
        "PS_RESTFUL_HOST" => Some(host.to_string()),
        "PS_RESTFUL_KEY" => Some("test-key".to_string()),
        "UPSTREAM_TIMEOUT_SECS" => timeout_secs.map(|s| s.to_string()),
        _ => None,
    })
    .unwrap();
    build_router(AppState::new(&config).unwrap())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn respond(State(seen): State<Seen>, uri: Uri, headers: HeaderMap) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    seen.lock().unwrap().push(SeenRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        api_key: header("x-api-key"),
        accept: header(ACCEPT.as_str()),
    });

    match uri.path() {
        "/v2.0.0/suppliers/HIT/sellable-products/" => ok(sellable_products()),
        "/v2.0.0/suppliers/SLOW/sellable-products/" => {
            tokio::time::sleep(Duration::from_secs(10)).await;
            ok(sellable_products())
        }
        "/v2.0.0/suppliers/DRIFT/sellable-products/" => {
            ok(json!({"ProductSellableArray": null}).to_string())
        }
        "/v2.0.0/suppliers/HIT/inventory/1001" => ok(inventory("2001-02-03T04:05:06")),
        "/v2.0.0/suppliers/HIT/inventory/BADTS" => ok(inventory("03/02/2001 4am")),
        _ => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

fn ok(body: String) -> Response {
    (StatusCode::OK, body).into_response()
}

fn sellable_products() -> String {
    json!({
        "ProductSellableArray": {"ProductSellable": [
            {"productId": "1001", "partId": "1001-BLK", "culturePoint": null},
            {"productId": "2002", "partId": "2002-RED", "culturePoint": null}
        ]}
    })
    .to_string()
}

fn inventory(last_modified: &str) -> String {
    json!({
        "Inventory": {
            "productId": "1001",
            "PartInventoryArray": {"PartInventory": [{
                "partId": "1001-BLK",
                "mainPart": true,
                "partColor": "Black",
                "labelSize": "OSFA",
                "quantityAvailable": {"Quantity": {"uom": "EA", "value": 250}},
                "lastModified": last_modified
            }]}
        }
    })
    .to_string()
}
