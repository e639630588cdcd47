use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::{
    ids::{IdGenerator, TimestampId, TruncatedUuid},
    models::{
        ApiError, AppState, Blog, BlogInput, CreateVideoRequest, UpdateVideoRequest, Video,
    },
    validation,
};

/// List all videos
pub async fn list_videos(State(state): State<Arc<AppState>>) -> Json<Vec<Video>> {
    let videos = state.videos.all().await;
    info!("[GET /videos] {} records", videos.len());
    Json(videos)
}

/// Get a single video by id
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Video>, ApiError> {
    state.videos.find(id).await.map(Json).ok_or(ApiError::NotFound)
}

/// Create a video
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let input = validation::validate_create(&request).map_err(ApiError::Validation)?;

    let created_at = Utc::now();
    let video = Video {
        id: TimestampId.generate(),
        title: input.title,
        author: input.author,
        can_be_downloaded: false,
        min_age_restriction: None,
        created_at,
        publication_date: created_at + Duration::days(1),
        available_resolutions: input.available_resolutions,
    };

    state.videos.insert(video.clone()).await;
    info!("[POST /videos] ✅ Created video {}", video.id);

    Ok((StatusCode::CREATED, Json(video)))
}

/// Update a video, replacing everything except id and createdAt
pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVideoRequest>,
) -> Result<StatusCode, ApiError> {
    let update = validation::validate_update(&request).map_err(ApiError::Validation)?;

    let existing = state.videos.find(id).await.ok_or(ApiError::NotFound)?;

    let updated = Video {
        id: existing.id,
        title: update.title,
        author: update.author,
        can_be_downloaded: update.can_be_downloaded,
        min_age_restriction: update.min_age_restriction,
        created_at: existing.created_at,
        // publicationDate survives an update that omits it
        publication_date: request.publication_date.unwrap_or(existing.publication_date),
        available_resolutions: update.available_resolutions,
    };

    state.videos.replace(id, updated).await;
    info!("[PUT /videos/{}] ✅ Updated", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a video by id
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.videos.remove(id).await {
        return Err(ApiError::NotFound);
    }
    info!("[DELETE /videos/{}] ✅ Deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// List all blogs
pub async fn list_blogs(State(state): State<Arc<AppState>>) -> Json<Vec<Blog>> {
    Json(state.blogs.all().await)
}

/// Get a single blog by id
pub async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    state.blogs.find(&id).await.map(Json).ok_or(ApiError::NotFound)
}

/// Create a blog
pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BlogInput>,
) -> (StatusCode, Json<Blog>) {
    let blog = Blog {
        id: TruncatedUuid.generate(),
        name: input.name,
        description: input.description,
        website_url: input.website_url,
    };

    let stored = state.blogs.add(blog).await;
    info!("[POST /blogs] ✅ Created blog {}", stored.id);

    (StatusCode::CREATED, Json(stored))
}

/// Update a blog's name, description and websiteUrl
pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<BlogInput>,
) -> Result<StatusCode, ApiError> {
    match state.blogs.update(&id, &input).await {
        Some(_) => {
            info!("[PUT /blogs/{}] ✅ Updated", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound),
    }
}

/// Delete a blog by id
pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.blogs.remove(&id).await {
        return Err(ApiError::NotFound);
    }
    info!("[DELETE /blogs/{}] ✅ Deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Clear every collection (test support endpoint)
pub async fn delete_all_data(State(state): State<Arc<AppState>>) -> StatusCode {
    state.videos.clear().await;
    state.blogs.clear().await;
    info!("[DELETE /testing/all-data] 🧹 All data cleared");
    StatusCode::NO_CONTENT
}
