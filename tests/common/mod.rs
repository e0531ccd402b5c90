//! Shared harness: an in-process mock backend for exercising the gateway
//! client over real HTTP.
#![allow(dead_code)] // not every test crate uses every helper

use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;

use soul_connection::ApiClient;

/// Serve `router` on an ephemeral local port and return its origin.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });
    format!("http://{addr}")
}

/// A client pointed at the mock backend.
pub fn client(base_url: &str) -> ApiClient {
    ApiClient::with_base_url(base_url, Duration::from_secs(5))
}

/// A client pointed at a port nothing listens on, for transport failures.
pub fn unreachable_client() -> ApiClient {
    ApiClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(1))
}
