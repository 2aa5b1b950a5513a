// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the pipeline, its plugins, and integrations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Document event dispatched by the client-side router after it swaps the
/// page body during a soft navigation. Injected scripts that attach
/// per-page behavior listen for this to re-initialize.
pub const AFTER_SWAP_EVENT: &str = "gantry:after-swap";

/// Stage at which an injected script is placed in generated pages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum InjectStage {
    /// Inline script in the document head, before any bundled assets.
    HeadInline,
    /// Runs before client-side component hydration begins.
    BeforeHydration,
    /// A bundled module script included on every page.
    Page,
}

/// The mode a pipeline run was started in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PipelineCommand {
    /// Production build writing static output.
    Build,
    /// Development server loading modules on demand.
    Serve,
}

impl PipelineCommand {
    /// True for production builds.
    pub fn is_build(self) -> bool {
        matches!(self, PipelineCommand::Build)
    }
}

/// Pipeline configuration after every integration and default has been
/// merged. Handed to plugins exactly once, via their `config_resolved` hook.
#[derive(Debug, Clone)]
pub struct ResolvedPipelineConfig {
    /// Absolute project root that relative paths resolve against.
    pub root: PathBuf,
    /// The command this run was started with.
    pub command: PipelineCommand,
}

/// A script queued for injection into every generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedScript {
    /// Where in the page the script is placed.
    pub stage: InjectStage,
    /// Literal script source text.
    pub code: String,
}
