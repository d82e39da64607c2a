//! Core building blocks for the Parrot toy compiler.
//!
//! Parrot is a fictional informal language with no grammar; "compiling" it
//! means either a fixed token substitution ([`transform`]) or full delegation
//! to a language model ([`prompt`] builds the instruction prompt, [`contract`]
//! validates the reply). Everything in this crate is pure and synchronous --
//! HTTP plumbing and the completion client live in `parrot-server`.

pub mod contract;
pub mod prompt;
pub mod transform;

// Re-export commonly used types
pub use contract::{parse_reply, CompiledProgram, ContractError};
