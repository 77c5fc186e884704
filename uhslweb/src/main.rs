//! uhslweb crate entrypoint.
//!
//! Starts the Tokio runtime, installs the tracing subscriber and launches
//! the web server defined in the `server` module. Keep this file minimal —
//! most application logic lives in `server`, `config`, and `html`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// HTML pages served to the browser
mod html;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();
    server::run().await;
}
