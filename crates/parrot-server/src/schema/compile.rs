//! Request/response types for `POST /compile`.

use parrot_core::CompiledProgram;
use serde::{Deserialize, Serialize};

/// Request body for `POST /compile`.
#[derive(Debug, Deserialize)]
pub struct CompileRequest {
    /// Parrot source snippet to compile.
    pub code: String,
}

/// Response body for `POST /compile`.
#[derive(Debug, Serialize)]
pub struct CompileResponse {
    /// The compile result; its shape depends on the active backend.
    pub compiled: CompiledOutput,
}

/// Output of one compile run.
///
/// Serialized untagged: the local backend yields a bare string, the
/// model backend the full program object.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CompiledOutput {
    /// Local substitution result.
    Source(String),
    /// Validated model program.
    Program(CompiledProgram),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_output_serializes_as_a_bare_string() {
        let response = CompileResponse {
            compiled: CompiledOutput::Source("console.log('hi')".into()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "compiled": "console.log('hi')" }));
    }

    #[test]
    fn model_output_serializes_as_the_program_object() {
        let response = CompileResponse {
            compiled: CompiledOutput::Program(CompiledProgram {
                code: "console.log(1)".into(),
                imagined_terminal: vec!["1".into()],
            }),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "compiled": { "code": "console.log(1)", "imagined_terminal": ["1"] }
            })
        );
    }
}
