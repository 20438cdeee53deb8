//! benchserve
//!
//! Serves the `bench` directory under the working directory over HTTP on
//! port 8080. No flags, no configuration; start it and kill it.

use std::sync::Arc;

mod handler;
mod http;
mod logger;
mod server;
mod settings;

fn main() {
    if let Err(err) = run() {
        logger::log_fatal(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::Settings::resolve()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve(settings))
}

async fn serve(settings: settings::Settings) -> Result<(), Box<dyn std::error::Error>> {
    logger::log_listening(settings::PORT);

    let listener = server::bind(settings.addr)?;
    server::accept_loop(listener, Arc::new(settings)).await
}
