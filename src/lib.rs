use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod store;
pub mod system_info;
pub mod validation;

use handlers::{
    create_blog, create_video, delete_all_data, delete_blog, delete_video, get_blog, get_video,
    list_blogs, list_videos, update_blog, update_video,
};
use models::AppState;

/// Build the full application router. Exposed so tests can drive the service
/// in-process against a fresh state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/videos", get(list_videos).post(create_video))
        .route(
            "/videos/:id",
            get(get_video).put(update_video).delete(delete_video),
        )
        .route("/blogs", get(list_blogs).post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route("/testing/all-data", delete(delete_all_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
