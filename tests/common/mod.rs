//! Shared utilities for integration testing.

use contact_directory::{HttpServer, ServiceConfig, Shutdown};

/// Spawn a fresh service on an ephemeral port.
///
/// Returns the base URL and the shutdown coordinator; the server stops when
/// the coordinator is dropped or triggered, so tests hold on to it.
pub async fn spawn_service() -> (String, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServiceConfig::default());

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// Client that bypasses any ambient proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build client")
}
