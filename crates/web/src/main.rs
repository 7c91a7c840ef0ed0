use std::{sync::Arc, time::Duration};

use anyhow::Context;
use storage::{Database, EntityStore, MemoryStore};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod extract;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::leaderboard::codeforces::CodeforcesClient;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::tournament::handlers::get_leaderboard,
        features::tournament::handlers::list_contests,
        features::tournament::handlers::add_contest,
        features::tournament::handlers::delete_contest,
        features::tournament::handlers::list_participants,
        features::tournament::handlers::add_participant,
        features::tournament::handlers::update_participant,
        features::tournament::handlers::delete_participant,
        features::tournament::handlers::list_scores,
        features::tournament::handlers::add_score,
        features::tournament::handlers::delete_score,
        features::leaderboard::handlers::get_global_leaderboard,
        features::leaderboard::handlers::register_user,
        features::events::handlers::list_upcoming_events,
        features::events::handlers::add_upcoming_event,
    ),
    components(
        schemas(
            storage::dto::tournament::NewContest,
            storage::dto::tournament::ParticipantInput,
            storage::dto::tournament::NewScore,
            storage::dto::tournament::ScoreDetail,
            storage::dto::tournament::LeaderboardEntry,
            storage::dto::tournament::TournamentLeaderboard,
            storage::dto::leaderboard::NewLeaderboardUser,
            storage::dto::leaderboard::RatedUser,
            storage::models::Contest,
            storage::models::Participant,
            storage::models::Score,
            storage::models::LeaderboardUser,
            storage::dto::events::NewUpcomingEvent,
            storage::models::UpcomingEvent,
        )
    ),
    tags(
        (name = "tournament", description = "Tournament leaderboard and admin endpoints"),
        (name = "leaderboard", description = "Global rating leaderboard endpoints"),
        (name = "events", description = "Upcoming events calendar"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn EntityStore>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using in-memory store; data is lost on restart");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!(
        "Connecting to database at: {}",
        database_url.split('@').next_back().unwrap_or("unknown")
    );
    let db = Database::new(database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(db))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tournament API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = connect_store(&config).await?;

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, admin endpoints will reject every request");
    }

    let codeforces = CodeforcesClient::new(&config.codeforces_api_url)
        .context("Failed to build Codeforces client")?;

    let state = AppState { store, codeforces };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
