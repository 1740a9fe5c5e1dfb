use std::net::SocketAddr;
use std::sync::Arc;

use api_server::http;
use shared::config::ApiConfig;
use shared::history::HistoryStore;
use shared::llm::{OpenAiGateway, OpenAiGatewayConfig};
use shared::service::InterviewService;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_server=debug,shared=debug,axum=info".to_string()),
        )
        .init();

    let config = ApiConfig::from_env();

    let gateway_config = match OpenAiGatewayConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to read llm provider config: {err}");
            std::process::exit(1);
        }
    };

    let gateway = match OpenAiGateway::new(gateway_config) {
        Ok(gateway) => gateway,
        Err(err) => {
            error!("failed to build llm provider client: {err}");
            std::process::exit(1);
        }
    };

    let history = HistoryStore::new(&config.history_log_path);
    if let Err(err) = history.ensure_initialized() {
        error!(
            "failed to initialize history log at {}: {err}",
            config.history_log_path.display()
        );
        std::process::exit(1);
    }

    let app = http::build_router(http::AppState {
        service: Arc::new(InterviewService::new(Arc::new(gateway), history)),
    });

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .unwrap_or_else(|_| "127.0.0.1:8080".parse().expect("valid default bind addr"));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind should succeed");

    info!(
        "api server listening on {}",
        listener.local_addr().unwrap_or(addr)
    );
    axum::serve(listener, app).await.expect("server should run");
}
