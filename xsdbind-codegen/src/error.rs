//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] xsdbind_schema::ParseError),

    /// Schema resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] xsdbind_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A fragment operation was requested from a declaration kind that does
    /// not support it.
    #[error("operation '{operation}' is not supported by '{declaration}'")]
    ContractViolation {
        /// Operation name.
        operation: &'static str,
        /// Qualified name of the declaration.
        declaration: String,
    },

    /// Two declarations map to the same artifact file.
    #[error("declarations '{first}' and '{second}' both generate '{file_name}'")]
    ArtifactCollision {
        /// Artifact file name.
        file_name: String,
        /// First declaration.
        first: String,
        /// Second declaration.
        second: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a contract violation error.
    pub fn contract(operation: &'static str, declaration: impl ToString) -> Self {
        Self::ContractViolation {
            operation,
            declaration: declaration.to_string(),
        }
    }
}
