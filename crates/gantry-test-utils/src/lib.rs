// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Gantry integration tests.
//!
//! Provides a mock pipeline that drives integrations and their plugins the
//! way a real host does, for fast, deterministic, CI-runnable tests.
//!
//! # Components
//!
//! - [`TestPipeline`] - Mock pipeline run with script capture and module loading

pub mod harness;

pub use harness::{TestPipeline, TestPipelineBuilder};
