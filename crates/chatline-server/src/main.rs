mod configuration;
mod error;
mod routes;
mod state;

use chatline::{agent::Agent, providers::factory};
use configuration::Settings;
use state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the environment alone is enough
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;

    // The reply mode is fixed for the life of the process
    let invoker = factory::get_invoker(&settings.completion)?;
    info!(
        invoker = invoker.name(),
        model = %settings.completion.model,
        "completion invoker ready"
    );

    let state = AppState::new(Agent::new(invoker));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()?).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
