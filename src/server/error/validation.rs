use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::{ErrorDetailDto, ErrorDto};

/// Field name used in details when the whole payload is rejected.
pub static BODY_FIELD: &str = "body";
/// Field name used in details when the query string is rejected.
pub static QUERY_FIELD: &str = "query";

/// A request that does not match the declared schema.
///
/// Always carries at least one detail entry.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub details: Vec<ErrorDetailDto>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, details: Vec<ErrorDetailDto>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    /// Single-detail error for a payload that could not be parsed at all
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self::new(
            "Invalid request data",
            vec![ErrorDetailDto {
                field: field.to_string(),
                message: message.into(),
            }],
        )
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<ErrorDetailDto> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = to_camel_case(&field);
                errs.iter().map(move |err| ErrorDetailDto {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed `{}` check", err.code)),
                })
            })
            .collect();

        // HashMap iteration order is random
        details.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));

        Self::new("Invalid request data", details)
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::single(BODY_FIELD, rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::single(QUERY_FIELD, rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(details = ?self.details, "Rejected request: {}", self.message);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.message,
                details: Some(self.details),
            }),
        )
            .into_response()
    }
}

/// Converts a Rust field name to the camelCase name used in the JSON API
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
