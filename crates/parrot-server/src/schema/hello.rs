//! Response type for `GET /hello`.

use serde::Serialize;

/// Greeting string the probe always returns.
pub const HELLO_MESSAGE: &str = "Hello from the functions directory!";

/// Response body for `GET /hello`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Fixed greeting.
    pub message: String,
    /// Server time at response creation, RFC 3339.
    pub timestamp: String,
}
