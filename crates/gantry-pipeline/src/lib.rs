// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Gantry pipeline extension surface.
//!
//! This crate provides the trait contracts, error types, and common types
//! integrations build against. A host pipeline drives [`Integration`] setup
//! once per run and routes module resolution through the registered
//! [`PipelinePlugin`] chain; integrations depend only on this crate.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PipelineError;
pub use types::{
    AFTER_SWAP_EVENT, InjectStage, InjectedScript, PipelineCommand, ResolvedPipelineConfig,
};

// Re-export the extension contracts at crate root.
pub use traits::{ConfigUpdate, Integration, PipelinePlugin, SetupContext};
