use axum::extract::DefaultBodyLimit;
use axum::{Extension, Router, routing::post};
use scenario_hub::auth::handlers::{handle_login, handle_signup};
use scenario_hub::auth::service::AuthService;
use scenario_hub::scenario::handlers::handle_create_scenario;
use scenario_hub::scenario::service::SubmissionService;
use scenario_hub::search::handlers::handle_find_scenarios;
use scenario_hub::store;
use scenario_hub::store::files::BundleStore;
use scenario_hub::store::records::ScenarioStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Upload size bound for the multipart endpoint. Bundles are small (a TOML
/// document and a script); anything near this limit is not a scenario.
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8090".parse()?;
    let mut data_dir = PathBuf::from("data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data-dir" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--data-dir <path>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Idempotent startup migration: provision the on-disk layout.
    store::bootstrap(&data_dir)?;

    // 2. Shared state:
    let auth = Arc::new(AuthService::new());
    let records = Arc::new(ScenarioStore::new());
    let bundles = Arc::new(BundleStore::new(data_dir.clone()));
    let submissions = Arc::new(SubmissionService::new(
        auth.clone(),
        records.clone(),
        bundles.clone(),
    ));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/api/signup", post(handle_signup))
        .route("/api/login", post(handle_login))
        .route("/api/createScenario", post(handle_create_scenario))
        .route("/api/findScenarios", post(handle_find_scenarios))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(Extension(auth))
        .layer(Extension(records))
        .layer(Extension(submissions));

    // 4. Start HTTP server:
    tracing::info!("Scenario hub listening on {}", bind_addr);
    tracing::info!("Bundle data under {}", data_dir.display());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
