//! HTTP/JSON API server for the Parrot toy compiler.
//!
//! Two stateless endpoints: `POST /compile` runs the configured compile
//! backend (local substitution or model-backed translation), `GET /hello`
//! is a fixed probe. This crate holds the server assembly: configuration,
//! schema types, error mapping, the completion client, and the backends.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm_provider;
pub mod router;
pub mod schema;
pub mod state;
