//! Integration test support for LuxeBoard.
//!
//! Each test serves an in-process mock of the remote hospitality API with
//! axum on an ephemeral port, then drives the dashboard crates against it
//! over real HTTP. No external services are involved.

use std::sync::Once;

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the test tracing subscriber once per process. Filtering follows
/// `RUST_LOG`; silent by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Serve `router` on an ephemeral port; the server lives until the test
/// process exits. Returns the base URL to point an `ApiClient` at.
///
/// # Panics
///
/// Panics when the listener cannot bind, which fails the calling test.
pub async fn spawn_api(router: Router) -> String {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            panic!("mock API server failed: {e}");
        }
    });
    format!("http://{addr}")
}
