//! Request and response types for the HTTP API.

pub mod compile;
pub mod hello;
