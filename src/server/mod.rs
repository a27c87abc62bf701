//! The conversion service: an axum server exposing the text, URL, and
//! upload endpoints, embeddable in the TUI or run standalone.

mod error;
mod fetch;
mod routes;

pub use error::ApiError;
pub use fetch::PageFetcher;
pub use routes::{build_router, ConvertResponse, ServiceState};

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, bail};
use tokio::net::TcpListener;

use crate::config::Config;
use crate::reader::ReaderPipeline;
use crate::shutdown::ShutdownHandle;

pub struct ConversionServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: ServiceState,
    shutdown: ShutdownHandle,
}

impl ConversionServer {
    pub fn new(config: &Config) -> Self {
        let state = ServiceState {
            pipeline: Arc::new(ReaderPipeline::new(config.summary.clone())),
            fetcher: Arc::new(PageFetcher::new(&config.server)),
        };
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            state,
            shutdown: ShutdownHandle::new(),
        }
    }

    /// Try to bind to the configured address, falling back to incremental
    /// ports if busy. Returns the bound address and the base URL clients
    /// should use.
    ///
    /// The listener is kept alive to prevent port race conditions - another
    /// process cannot claim the port between try_bind() and run().
    pub async fn try_bind(&mut self, bind_addr_str: &str) -> anyhow::Result<(SocketAddr, String)> {
        let bind_addr: SocketAddr = bind_addr_str
            .parse()
            .map_err(|e| anyhow!("Invalid bind address '{}': {}", bind_addr_str, e))?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        // Try ports from start_port up to start_port + 100
        for port in start_port..=start_port.saturating_add(100) {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    let base_url = if host.is_loopback() || host.is_unspecified() {
                        format!("http://127.0.0.1:{}", actual_addr.port())
                    } else {
                        format!("http://{}", actual_addr)
                    };

                    self.addr = actual_addr;
                    // Keep listener alive to prevent race conditions
                    self.listener = Some(listener);
                    tracing::info!("Conversion service bound to {}", actual_addr);
                    return Ok((actual_addr, base_url));
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    continue;
                }
            }
        }

        bail!(
            "Could not find available port in range {}-{}",
            start_port,
            start_port.saturating_add(100)
        )
    }

    /// Handle for signalling shutdown from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Run the service.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run() to bind to an available port.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self
            .listener
            .ok_or_else(|| anyhow!("try_bind() must be called before run()"))?;

        tracing::info!("Starting conversion service on {}", self.addr);

        let app = build_router(self.state.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
            })
            .into_future()
            .await?;

        tracing::info!("Conversion service stopped");
        Ok(())
    }
}

/// Run the service in the foreground until interrupted.
pub async fn serve(config: Config, bind_override: Option<String>) -> anyhow::Result<()> {
    let bind_addr = bind_override.unwrap_or_else(|| config.server.bind_addr.clone());
    let mut server = ConversionServer::new(&config);
    let (addr, _) = server.try_bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let shutdown = server.shutdown_handle();
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        shutdown.signal();
    });

    server.run().await
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let ctrl_c = tokio::signal::ctrl_c();
    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = ctrl_c => {}
                _ = term.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!("Failed to install SIGTERM handler: {}", err);
            let _ = ctrl_c.await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_try_bind_skips_busy_port() {
        let hold = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy = hold.local_addr().unwrap();

        let mut server = ConversionServer::new(&Config::default());
        let (addr, base_url) = server
            .try_bind(&format!("127.0.0.1:{}", busy.port()))
            .await
            .unwrap();

        assert_ne!(addr.port(), busy.port());
        assert!(addr.port() > busy.port());
        assert!(u32::from(addr.port()) <= u32::from(busy.port()) + 100);
        assert_eq!(base_url, format!("http://127.0.0.1:{}", addr.port()));
    }

    #[tokio::test]
    async fn test_run_without_bind_fails() {
        let server = ConversionServer::new(&Config::default());
        let err = server.run().await.unwrap_err();
        assert!(err.to_string().contains("try_bind"));
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut server = ConversionServer::new(&Config::default());
        let err = rt.block_on(server.try_bind("not-an-address")).unwrap_err();
        assert!(err.to_string().contains("Invalid bind address"));
    }
}
