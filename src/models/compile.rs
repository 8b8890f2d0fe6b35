//! Compile outcome model
//!
//! The compiler invoker produces exactly one [`CompileOutcome`] per attempt.
//! The variant set is closed: consumers match on it and never guess.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Result of attempting to compile a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompileOutcome {
    /// Compiled; `output` is `None` for an empty artifact (e.g. interpreted languages)
    Success {
        output: Option<String>,
        file_name: String,
    },
    /// No toolchain on the judge host
    CompilerNotFound,
    /// Compiler diagnostics for the submitter
    Error { output: String },
}

/// What a successful compile hands to the execution stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    pub file_name: String,
    pub output: Option<String>,
}

impl CompileOutcome {
    pub fn success(output: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::Success {
            output: Some(output.into()),
            file_name: file_name.into(),
        }
    }

    /// Successful compile with no produced output
    pub fn empty_success(file_name: impl Into<String>) -> Self {
        Self::Success {
            output: None,
            file_name: file_name.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::CompilerNotFound
    }

    pub fn error(output: impl Into<String>) -> Self {
        Self::Error {
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Success { file_name, .. } => Some(file_name),
            Self::CompilerNotFound | Self::Error { .. } => None,
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output, .. } => output.as_deref(),
            Self::Error { output } => Some(output),
            Self::CompilerNotFound => None,
        }
    }

    /// Map the outcome onto the signal the judging pipeline acts on.
    ///
    /// A missing compiler is an infrastructure fault and must not be charged
    /// to the submitter; compiler diagnostics are passed through verbatim.
    pub fn into_artifact(self) -> AppResult<CompiledArtifact> {
        match self {
            Self::Success { output, file_name } => Ok(CompiledArtifact { file_name, output }),
            Self::CompilerNotFound => {
                tracing::warn!("Compiler toolchain not found on judge host");
                Err(AppError::CompilerUnavailable)
            }
            Self::Error { output } => Err(AppError::CompilationError(output)),
        }
    }
}
