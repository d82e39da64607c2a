//! Hello probe handler.

use axum::Json;

use crate::schema::hello::{HelloResponse, HELLO_MESSAGE};

/// Returns the fixed greeting with the current server time.
///
/// `GET /hello`
///
/// Always succeeds; any request body is ignored.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
