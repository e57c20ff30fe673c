// main.rs
// Axum server wiring: builds the router over the seed slot and serves on :8080.
//
// Endpoints:
// - POST /decrypt-seed  -> unwraps the encrypted blob and persists the seed
// - GET  /generate-2fa  -> current code + seconds it stays valid
// - POST /verify-2fa    -> validates {"code"} against the tolerance window
// - GET  /setup         -> otpauth URL for authenticator enrollment
// - GET  /qrcode        -> PNG QR code for that otpauth URL

use axum::{
    Router,
    routing::{get, post},
};
use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use semilla::{routes, state};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(state::init_state().expect("failed to initialize state"));

    let app = Router::new()
        .route("/decrypt-seed", post(routes::decrypt_seed))
        .route("/generate-2fa", get(routes::generate_2fa))
        .route("/verify-2fa", post(routes::verify_2fa))
        .route("/setup", get(routes::setup))
        .route("/qrcode", get(routes::qrcode))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("listening on http://{addr}");
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
