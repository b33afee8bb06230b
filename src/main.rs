use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamepick_api::api::{create_router, AppState};
use gamepick_api::catalog::ArtifactBundle;
use gamepick_api::config::Config;
use gamepick_api::recommender::Recommender;
use gamepick_api::sessions::{spawn_expiry_sweeper, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("gamepick_api=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the artifact; on failure the server still comes up and predictions
    // stay unavailable until restart
    let recommender = match ArtifactBundle::load(Path::new(&config.artifact_path)) {
        Ok(bundle) => {
            let recommender = Recommender::from_bundle(bundle);
            tracing::info!(
                games = recommender.catalog().len(),
                model = recommender.has_model(),
                "Recommender ready"
            );
            Some(Arc::new(recommender))
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to load artifact, predictions disabled");
            None
        }
    };

    let sessions = SessionStore::new();
    spawn_expiry_sweeper(
        sessions.clone(),
        chrono::Duration::seconds(config.session_ttl_secs as i64),
    );

    let state = AppState::new(recommender, sessions);
    let app = create_router(state, Path::new(&config.static_dir));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
