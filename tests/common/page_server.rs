//! Fixture web server for URL conversion tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Clone)]
struct Page {
    status: StatusCode,
    body: String,
}

/// Serves one canned HTML response at every path.
pub struct PageServer {
    pub addr: SocketAddr,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl PageServer {
    /// Start a page server returning `body` with the given status.
    pub async fn start(status: u16, body: &str) -> Self {
        let page = Page {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(serve_page))
            .with_state(page);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind page server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            shutdown: shutdown_tx,
        }
    }

    /// The URL of a page on this server.
    pub fn page_url(&self) -> String {
        format!("http://{}/article", self.addr)
    }
}

impl Drop for PageServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn serve_page(State(page): State<Page>) -> Response {
    (
        page.status,
        [("content-type", "text/html; charset=utf-8")],
        page.body,
    )
        .into_response()
}
