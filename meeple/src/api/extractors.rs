use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::QueryRejection;

use crate::api::v1::response::ApiResponse;
use crate::error::MeepleError;

/// JSON body extractor whose rejections render as the v1 error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiRejection))]
pub struct AppJson<T>(pub T);

/// Query string extractor whose rejections render as the v1 error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(ApiRejection))]
pub struct AppQuery<T>(pub T);

pub struct ApiRejection(MeepleError);

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(map_json_rejection(rejection))
    }
}

impl From<QueryRejection> for ApiRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self(map_query_rejection(&rejection.body_text()))
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self.0).into_response()
    }
}

fn map_json_rejection(rejection: JsonRejection) -> MeepleError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                MeepleError::Validation(format!("Missing required field: {field}"))
            } else {
                MeepleError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            MeepleError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            MeepleError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            MeepleError::Internal("Failed to read request body".to_string())
        }
        _ => MeepleError::Validation(rejection.body_text()),
    }
}

fn map_query_rejection(message: &str) -> MeepleError {
    match extract_missing_field(message) {
        Some(field) => MeepleError::Validation(format!("Missing required query parameter: {field}")),
        None => MeepleError::Validation(format!("Invalid query string: {message}")),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_missing_field() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `gameId` at line 1 column 2";
        assert_eq!(extract_missing_field(msg), Some("gameId"));
        assert_eq!(extract_missing_field("unknown variant `played`"), None);
    }

    #[test]
    fn test_query_rejection_messages() {
        let missing = map_query_rejection(
            "Failed to deserialize query string: missing field `viewerId`",
        );
        assert!(
            matches!(missing, MeepleError::Validation(ref m) if m == "Missing required query parameter: viewerId")
        );

        let invalid =
            map_query_rejection("Failed to deserialize query string: limit: invalid digit found in string");
        assert!(
            matches!(invalid, MeepleError::Validation(ref m) if m.starts_with("Invalid query string:"))
        );
    }
}
