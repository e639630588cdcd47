use serde_json::Value;

use crate::models::{CreateVideoRequest, FieldError, Resolution, UpdateVideoRequest};

const MAX_TITLE_LEN: usize = 40;
const MAX_AUTHOR_LEN: usize = 20;

/// Normalized fields of a valid `POST /videos` payload.
#[derive(Debug)]
pub struct ValidVideoInput {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Normalized fields of a valid `PUT /videos/{id}` payload.
#[derive(Debug)]
pub struct ValidVideoUpdate {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<i32>,
}

pub fn validate_create(request: &CreateVideoRequest) -> Result<ValidVideoInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = check_text(&request.title, "title", MAX_TITLE_LEN, &mut errors);
    let author = check_text(&request.author, "author", MAX_AUTHOR_LEN, &mut errors);
    let available_resolutions = collect_resolutions(&request.available_resolutions, &mut errors);

    if errors.is_empty() {
        Ok(ValidVideoInput {
            title,
            author,
            available_resolutions,
        })
    } else {
        Err(errors)
    }
}

pub fn validate_update(request: &UpdateVideoRequest) -> Result<ValidVideoUpdate, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = check_text(&request.title, "title", MAX_TITLE_LEN, &mut errors);
    let author = check_text(&request.author, "author", MAX_AUTHOR_LEN, &mut errors);
    let available_resolutions = collect_resolutions(&request.available_resolutions, &mut errors);
    let min_age_restriction = normalize_min_age(&request.min_age_restriction, &mut errors);
    let can_be_downloaded = request.can_be_downloaded.unwrap_or(false);

    if errors.is_empty() {
        Ok(ValidVideoUpdate {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
        })
    } else {
        Err(errors)
    }
}

/// Required text field: present, non-empty after trimming, and within the
/// length bound. The stored value keeps the caller's whitespace.
fn check_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> String {
    match value {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.chars().count() > max_len {
                push_error(errors, field);
                String::new()
            } else {
                text.clone()
            }
        }
        None => {
            push_error(errors, field);
            String::new()
        }
    }
}

/// `availableResolutions` arrives as untyped JSON. Anything that is not an
/// array silently becomes the empty list; array entries outside the allowed
/// set each produce one error.
fn collect_resolutions(value: &Option<Value>, errors: &mut Vec<FieldError>) -> Vec<Resolution> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    let mut resolutions = Vec::new();
    for entry in entries {
        match entry.as_str().and_then(Resolution::parse) {
            Some(resolution) => resolutions.push(resolution),
            None => push_error(errors, "availableResolutions"),
        }
    }
    resolutions
}

/// `minAgeRestriction`: numeric values must lie in [1, 18]; anything
/// non-numeric (including absence) becomes null without an error.
fn normalize_min_age(value: &Option<Value>, errors: &mut Vec<FieldError>) -> Option<i32> {
    let Some(Value::Number(number)) = value else {
        return None;
    };

    match number.as_i64() {
        Some(age) if (1..=18).contains(&age) => Some(age as i32),
        _ => {
            push_error(errors, "minAgeRestriction");
            None
        }
    }
}

fn push_error(errors: &mut Vec<FieldError>, field: &str) {
    errors.push(FieldError {
        message: format!("Invalid {}", field),
        field: field.to_string(),
    });
}
