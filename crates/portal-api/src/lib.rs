pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::handler::HandlerWithoutStateExt;
use axum::http::HeaderValue;
use axum::Router;
use leptos_axum::{generate_route_list, LeptosRoutes};
use state::AppState;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ApiError;

/// Build the complete router: `/health`, the `/api` namespace, `/static`,
/// Leptos SSR for the pages, then the compiled site assets as fallback.
/// Every miss (unknown path or wrong method) answers with a JSON `detail`.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    let mut app = Router::<AppState>::new()
        .nest("/api", api_routes())
        .merge(routes::health::router());

    let static_dir = &state.config.static_dir;
    if static_dir.is_dir() {
        info!(dir = %static_dir.display(), "Serving static files on /static");
        app = app.nest_service(
            "/static",
            ServeDir::new(static_dir).not_found_service(not_found.into_service()),
        );
    }

    let routes = generate_route_list(portal_web::app::App);
    let site_assets = ServeDir::new(state.leptos_options.site_root.to_string())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    app.leptos_routes(&state, routes, {
        let leptos_options = state.leptos_options.clone();
        move || portal_web::app::shell(leptos_options.clone())
    })
    .method_not_allowed_fallback(method_not_allowed)
    .fallback_service(site_assets)
    .layer(TraceLayer::new_for_http())
    .layer(cors)
    .with_state(state)
}

/// `/api` carries no endpoints yet; it never falls through to site assets.
fn api_routes() -> Router<AppState> {
    Router::new().fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `"*"` mirrors the request origin so credentials stay allowed.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
