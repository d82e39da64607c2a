//! Compile endpoint handler and request validation.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::compile::{CompileRequest, CompileResponse};
use crate::state::AppState;

/// Compiles a Parrot source snippet with the configured backend.
///
/// `POST /compile`
///
/// Takes the raw body instead of the `Json` extractor: a body that is not
/// JSON at all is an internal error (500), while a JSON body whose `code`
/// field is missing, not a string, or over the backend's length limit is
/// invalid input (400). The extractor would collapse both into one
/// rejection.
pub async fn compile(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompileResponse>, ApiError> {
    let source = validated_source(&body, state.backend.max_source_len())?;
    let compiled = state.backend.compile(&source).await?;
    Ok(Json(CompileResponse { compiled }))
}

/// Parses the body and enforces the `code` contract: present, a string,
/// at most `limit` characters.
fn validated_source(body: &[u8], limit: usize) -> Result<String, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|err| ApiError::Internal(format!("request body is not valid JSON: {}", err)))?;

    let request: CompileRequest = serde_json::from_value(value)
        .map_err(|_| ApiError::InvalidInput("code is missing or not a string".to_string()))?;

    let len = request.code.chars().count();
    if len > limit {
        return Err(ApiError::InvalidInput(format!(
            "code is {} characters, limit is {}",
            len, limit
        )));
    }

    Ok(request.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_code_string_within_the_limit() {
        let body = br#"{"code":"pront('hi')"}"#;
        assert_eq!(validated_source(body, 2000).unwrap(), "pront('hi')");
    }

    #[test]
    fn accepts_code_exactly_at_the_limit() {
        let code = "p".repeat(2000);
        let body = serde_json::to_vec(&serde_json::json!({ "code": code })).unwrap();
        assert_eq!(validated_source(&body, 2000).unwrap(), code);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let code = "鹦".repeat(2000);
        let body = serde_json::to_vec(&serde_json::json!({ "code": code })).unwrap();
        assert!(body.len() > 4000);
        assert_eq!(validated_source(&body, 2000).unwrap(), code);
    }

    #[test]
    fn rejects_code_over_the_limit() {
        let code = "p".repeat(2001);
        let body = serde_json::to_vec(&serde_json::json!({ "code": code })).unwrap();
        let err = validated_source(&body, 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn rejects_a_missing_code_field() {
        let err = validated_source(br#"{"source":"pront"}"#, 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn rejects_a_non_string_code_field() {
        let err = validated_source(br#"{"code":42}"#, 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = validated_source(br#"{"code":null}"#, 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_object_bodies_as_invalid_input() {
        let err = validated_source(b"[1,2,3]", 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        let err = validated_source(b"null", 2000).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn malformed_json_is_an_internal_error() {
        let err = validated_source(b"{not json", 2000).unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));

        let err = validated_source(b"", 2000).unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
