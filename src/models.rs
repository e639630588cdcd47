use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{BlogStore, VideoStore};

/// The fixed set of allowed resolution tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "P144" => Some(Resolution::P144),
            "P240" => Some(Resolution::P240),
            "P360" => Some(Resolution::P360),
            "P480" => Some(Resolution::P480),
            "P720" => Some(Resolution::P720),
            "P1080" => Some(Resolution::P1080),
            "P1440" => Some(Resolution::P1440),
            "P2160" => Some(Resolution::P2160),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
}

pub struct AppState {
    pub videos: VideoStore,
    pub blogs: BlogStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            videos: VideoStore::default(),
            blogs: BlogStore::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Body for `POST /videos`. `availableResolutions` stays untyped JSON: a
/// non-array value is tolerated and becomes the empty list during validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub available_resolutions: Option<serde_json::Value>,
}

/// Body for `PUT /videos/{id}`. `minAgeRestriction` is untyped as well:
/// non-numeric values silently become null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub available_resolutions: Option<serde_json::Value>,
    #[serde(default)]
    pub can_be_downloaded: Option<bool>,
    #[serde(default)]
    pub min_age_restriction: Option<serde_json::Value>,
    #[serde(default)]
    pub publication_date: Option<DateTime<Utc>>,
}

/// Body for `POST /blogs` and `PUT /blogs/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    pub name: String,
    pub description: String,
    pub website_url: String,
}

/// One named validation failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

#[derive(Serialize, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(rename = "errorMessages")]
    pub error_messages: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody {
                    error_messages: errors,
                }),
            )
                .into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
