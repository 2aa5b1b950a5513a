// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait contracts the pipeline exposes to extensions.
//!
//! Integrations implement [`Integration`] and run once at configuration
//! time; plugins implement [`PipelinePlugin`] and participate in module
//! resolution for the rest of the run.

pub mod integration;
pub mod plugin;

// Re-export the contracts at the traits module level for convenience.
pub use integration::{ConfigUpdate, Integration, SetupContext};
pub use plugin::PipelinePlugin;
