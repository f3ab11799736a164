use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    http::HeaderValue,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod server_config;
}
mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
}
mod utils {
    pub mod email_relay;
}
mod error;
mod schema;

use config::server_config::ServerConfig;
use handlers::contact_handlers;
use repositories::contact_repository::ContactRepository;
use utils::email_relay::{ContactNotifier, SmtpNotifier};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    contact_repository: Arc<ContactRepository>,
    notifier: Arc<dyn ContactNotifier>,
}

async fn health_check() -> &'static str {
    "OK"
}

/// Opens the pool and brings the schema up to date.
pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)?;

    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {}", e))?;
    Ok(pool)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url.map(str::parse::<HeaderValue>) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid FRONTEND_URL ({}), allowing any origin", e);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>, frontend_url: Option<&str>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(frontend_url))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Set up database connection pool
    let pool = build_pool(&config.database_url, 8)?;
    let notifier = SmtpNotifier::from_config(&config.mail)?;

    let contact_repository = Arc::new(ContactRepository::new(pool));
    tracing::info!("Database ready with {} stored contacts", contact_repository.count_contacts()?);

    let state = Arc::new(AppState {
        contact_repository,
        notifier: Arc::new(notifier),
    });

    let app = app(state, config.frontend_url.as_deref());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::email_relay::MockContactNotifier;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    #[test]
    fn migrations_create_contacts_table() {
        let pool = build_pool(":memory:", 1).unwrap();
        let repository = ContactRepository::new(pool);
        assert_eq!(repository.count_contacts().unwrap(), 0);
    }

    async fn preflight_allow_origin(frontend_url: Option<&str>) -> Option<String> {
        let state = Arc::new(AppState {
            contact_repository: Arc::new(ContactRepository::new(build_pool(":memory:", 1).unwrap())),
            notifier: Arc::new(MockContactNotifier::new()),
        });
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header(header::ORIGIN, "https://www.omradixsolutions.in")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app(state, frontend_url).oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn cors_echoes_the_configured_frontend() {
        assert_eq!(
            preflight_allow_origin(Some("https://www.omradixsolutions.in")).await.as_deref(),
            Some("https://www.omradixsolutions.in")
        );
    }

    #[tokio::test]
    async fn cors_allows_any_origin_when_unset_or_invalid() {
        assert_eq!(preflight_allow_origin(None).await.as_deref(), Some("*"));
        assert_eq!(preflight_allow_origin(Some("bad\norigin")).await.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn cors_withholds_other_origins() {
        assert_eq!(preflight_allow_origin(Some("https://example.com")).await, None);
    }
}
