use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_app(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/instances", get(handlers::instances::instances_get))
        .route("/regions", get(handlers::catalog::regions_get))
        .route("/confirm/:action/:region/:instance_id", get(handlers::system::confirmation_get))
        .route("/instance/:region/:instance_id/stop", post(handlers::instances::instance_stop_post))
        .route("/instance/:region/:instance_id/terminate", post(handlers::instances::instance_terminate_post))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), handlers::middleware::auth_middleware));

    // Serve the custom stylesheet when one was loaded, otherwise the embedded default
    let stylesheet_content = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::auth::root_get))
        .route("/login", get(handlers::auth::login_get).post(handlers::auth::login_post))
        .route("/logout", post(handlers::auth::logout_post))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(state)
}
