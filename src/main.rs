use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stockboard_core::{config, CoreConfig, Hospital, InventoryService, Tag};
use stockboard_types::HealthRes;

/// Application state shared across REST API handlers.
///
/// Holds the fixture-backed `InventoryService` that owns the canonical
/// hospital and tag collections.
#[derive(Clone)]
struct AppState {
    inventory_service: InventoryService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_hospitals, list_tags),
    components(schemas(HealthRes, Hospital, Tag))
)]
struct ApiDoc;

/// Main entry point for the stockboard API
///
/// Serves the hospital and tag collections the list screen observes.
/// Clients issue fire-and-forget refreshes against these endpoints and
/// replace their collections wholesale with whatever arrives.
///
/// # Environment Variables
/// - `STOCKBOARD_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `STOCKBOARD_DATA_DIR`: JSON fixture directory (default: nearest "fixtures/")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockboard=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("STOCKBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir =
        config::resolve_data_dir(std::env::var("STOCKBOARD_DATA_DIR").ok().map(Into::into));

    tracing::info!("++ Starting stockboard REST on {}", rest_addr);
    tracing::info!("++ Serving fixtures from {}", data_dir.display());

    let inventory_service = InventoryService::new(CoreConfig::new(data_dir)?);

    let app = Router::new()
        .route("/health", get(health))
        .route("/hospitals", get(list_hospitals))
        .route("/tags", get(list_tags))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { inventory_service });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes::alive())
}

#[utoipa::path(
    get,
    path = "/hospitals",
    responses(
        (status = 200, description = "Ordered hospital collection with embedded tags and inventory", body = [Hospital])
    )
)]
/// List all hospitals
///
/// Returns the full hospital collection in source order. A missing or
/// unreadable fixture degrades to an empty collection; clients render an
/// empty card grid rather than an error state.
async fn list_hospitals(State(state): State<AppState>) -> Json<Vec<Hospital>> {
    Json(state.inventory_service.list_hospitals())
}

#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "Ordered tag collection", body = [Tag])
    )
)]
/// List all tags
///
/// Returns the full tag collection in source order; absent data manifests
/// as an empty list.
async fn list_tags(State(state): State<AppState>) -> Json<Vec<Tag>> {
    Json(state.inventory_service.list_tags())
}
