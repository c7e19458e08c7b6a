use tracing::info;

use hindi_tutor_llm::{Tutor, TutorConfig};
use hindi_tutor_web::{AppState, router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    // Initialize the Groq-backed tutor
    let config = TutorConfig::from_env()
        .map_err(|e| format!("Failed to initialize tutor: {}", e))?;
    info!("Using model {} at {}", config.model, config.base_url);
    let tutor = Tutor::from_config(&config)?;
    let state = AppState::new(tutor);

    info!("🪷 Starting Hindi tutor web server");

    let app = router(state);

    let addr = std::env::var("HINDI_TUTOR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
