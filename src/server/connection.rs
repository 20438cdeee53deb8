//! Per-connection serving
//!
//! Each accepted connection is moved onto its own task and served as an
//! HTTP/1.1 connection until the peer closes it or it fails.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;
use crate::settings::Settings;

/// Serve one connection on a spawned task
pub fn spawn_serve(stream: TcpStream, settings: Arc<Settings>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let settings = Arc::clone(&settings);
            async move { handler::handle_request(req, settings).await }
        });

        if let Err(err) = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            logger::log_connection_error(&err);
        }
    });
}
