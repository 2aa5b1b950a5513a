// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Gantry pipeline.

use thiserror::Error;

/// The primary error type surfaced by pipeline hooks and integrations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Pipeline configuration is invalid or could not be assembled.
    #[error("configuration error: {0}")]
    Config(String),

    /// An integration failed during its setup hook.
    #[error("integration `{name}` failed during setup: {message}")]
    Integration {
        /// Name of the integration that failed.
        name: String,
        /// Human-readable failure description.
        message: String,
    },

    /// A module could not be resolved or its source could not be produced.
    #[error("failed to load module `{id}`: {reason}")]
    ModuleLoad {
        /// The module id or specifier that failed.
        id: String,
        /// What went wrong while loading it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Error messages carry the failing identifier.
    #[test]
    fn error_display_includes_context() {
        let err = PipelineError::Integration {
            name: "sample".to_string(),
            message: "bad options".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "integration `sample` failed during setup: bad options"
        );

        let err = PipelineError::ModuleLoad {
            id: "virtual:missing".to_string(),
            reason: "no plugin claimed it".to_string(),
        };
        assert!(err.to_string().contains("virtual:missing"));
        assert!(err.to_string().contains("no plugin claimed it"));
    }

    /// Config errors pass their message through unchanged.
    #[test]
    fn config_error_display() {
        let err = PipelineError::Config("root must be absolute".to_string());
        assert_eq!(err.to_string(), "configuration error: root must be absolute");
    }
}
