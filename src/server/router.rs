use std::path::Path;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderName, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::features::lessons::{handle_list_lessons, handle_search_lessons, handle_update_lesson};
use crate::features::orders::{handle_create_order, handle_list_orders};
use crate::features::storefront::{handle_index, handle_missing_image};
use crate::server::AppState;

pub fn build_router(state: AppState, images_dir: &Path) -> Router {
    // non-GET requests fall through to the missing-image reply as well
    let images = ServeDir::new(images_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handle_missing_image.into_service());

    // OPTIONS requests are answered by the CORS layer and never reach a route
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ]);

    Router::new()
        .route("/", get(handle_index))
        .route("/lessons", get(handle_list_lessons).put(handle_update_lesson))
        .route("/orders", get(handle_list_orders).post(handle_create_order))
        .route("/search", get(handle_search_lessons))
        .nest_service("/images", images)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
