use std::process::ExitCode;
use std::sync::Arc;

use triage_assistant::adapters::http::{router, AppState, BasicAuthState};
use triage_assistant::adapters::{build_backend, sqlite, SqliteMemoryStore};
use triage_assistant::application::{AdvanceDialogueHandler, SummarizeSessionHandler};
use triage_assistant::config::AppConfig;
use triage_assistant::ports::MemoryStore;
use triage_assistant::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_telemetry(&config.server.log_level, config.server.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let pool = sqlite::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout(),
    )
    .await?;
    sqlite::init_schema(&pool).await?;
    let store: Arc<dyn MemoryStore> = Arc::new(SqliteMemoryStore::new(pool.clone()));

    let backend = build_backend(&config.ai)?;
    let info = backend.backend_info();
    tracing::info!(backend = %info.name, model = %info.model, "Generation backend ready");

    let policy = config.triage.policy();
    let system_prompt = config.ai.system_prompt();
    let state = AppState::new(
        AdvanceDialogueHandler::new(store.clone(), backend.clone(), policy.clone())
            .with_system_prompt(system_prompt.clone()),
        SummarizeSessionHandler::new(store, backend, policy).with_system_prompt(system_prompt),
    );
    let auth = BasicAuthState::new(&config.auth.username, &config.auth.password);
    let app = router(state, auth, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Triage assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
