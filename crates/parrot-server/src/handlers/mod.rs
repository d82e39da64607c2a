//! HTTP handler modules for the compile service API.
//!
//! Handlers parse and validate the request body themselves so each failure
//! maps onto the fixed error envelope it belongs to, then delegate to the
//! configured backend and return JSON. No compile logic lives in handlers.

pub mod compile;
pub mod hello;
