//! Accept loop
//!
//! Accepts connections forever and hands each one to the connection module.
//! A failed accept is logged and the loop keeps going; the loop itself never
//! finishes under normal operation.

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection;
use crate::logger;
use crate::settings::Settings;

/// Run the accept loop on `listener` until the process is terminated
pub async fn accept_loop(
    listener: TcpListener,
    settings: Arc<Settings>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                connection::spawn_serve(stream, Arc::clone(&settings));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Spawn a server over a temp serve root and return its address
    async fn start_server(serve_root: std::path::PathBuf) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let settings = Arc::new(Settings { addr, serve_root });
        tokio::spawn(async move {
            let _ = accept_loop(listener, settings).await;
        });
        addr
    }

    async fn send_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8_lossy(&response).into_owned()
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "hello").unwrap();
        let addr = start_server(dir.path().to_path_buf()).await;

        let response = send_request(
            addr,
            "GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.to_lowercase().contains("content-length: 5\r\n"));
        assert!(response.ends_with("hello"));
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let addr = start_server(dir.path().to_path_buf()).await;

        let response = send_request(
            addr,
            "GET /absent.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 404"));
    }

    #[tokio::test]
    async fn test_missing_serve_root_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let addr = start_server(dir.path().join("bench")).await;

        let response = send_request(
            addr,
            "GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 404"));
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let addr = start_server(dir.path().to_path_buf()).await;

        let response = send_request(
            addr,
            "POST /index.html HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 405"));
        assert!(response.to_lowercase().contains("allow: get, head\r\n"));
    }

    #[tokio::test]
    async fn test_head_has_headers_but_no_body() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "hello").unwrap();
        let addr = start_server(dir.path().to_path_buf()).await;

        let response = send_request(
            addr,
            "HEAD /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.to_lowercase().contains("content-length: 5\r\n"));
        assert!(response.ends_with("\r\n\r\n"));
    }

    #[tokio::test]
    async fn test_traversal_never_leaves_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "top secret").unwrap();
        let addr = start_server(root).await;

        let response = send_request(
            addr,
            "GET /../secret.txt HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(!response.contains("top secret"));
    }
}
