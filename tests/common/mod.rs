//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod page_server;

use bionic_reader::config::Config;
use bionic_reader::server::ConversionServer;
use bionic_reader::shutdown::ShutdownHandle;

pub use page_server::PageServer;

/// Start the conversion service on an ephemeral loopback port.
///
/// Returns the base URL for requests and a handle that stops the service
/// when signalled.
pub async fn start_service() -> (String, ShutdownHandle) {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();

    let mut server = ConversionServer::new(&config);
    // Bind before spawning - this prevents race conditions
    let (_addr, base_url) = server
        .try_bind(&config.server.bind_addr)
        .await
        .expect("Failed to bind conversion service");
    let shutdown = server.shutdown_handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    (base_url, shutdown)
}

/// Extract the `detail` message from an error response body.
pub fn detail(body: &serde_json::Value) -> &str {
    body["detail"].as_str().unwrap_or("")
}
