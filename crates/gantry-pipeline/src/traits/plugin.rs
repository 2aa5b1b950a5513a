// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hook contract for pipeline plugins.

use crate::types::{PipelineCommand, ResolvedPipelineConfig};

/// A build-pipeline plugin.
///
/// Plugins participate in module resolution and loading. Every hook has a
/// default no-op implementation, so a plugin overrides only the extension
/// points it cares about. The pipeline calls hooks in registration order
/// within a single configuration and build pass:
///
/// 1. [`config`](PipelinePlugin::config) while configuration is assembled,
/// 2. [`config_resolved`](PipelinePlugin::config_resolved) once it is final,
/// 3. [`resolve_id`](PipelinePlugin::resolve_id) and
///    [`load`](PipelinePlugin::load) per module request, where the first
///    plugin to return `Some` wins.
pub trait PipelinePlugin: Send + Sync {
    /// Unique name of this plugin, used in logs and error messages.
    fn name(&self) -> &str;

    /// Called while the pipeline configuration is still being assembled.
    fn config(&mut self, _command: PipelineCommand) {}

    /// Called once, after the pipeline configuration is final.
    fn config_resolved(&mut self, _config: &ResolvedPipelineConfig) {}

    /// Maps a module specifier to a resolved module id.
    ///
    /// Returning `None` passes the specifier on to the next plugin.
    fn resolve_id(&self, _specifier: &str) -> Option<String> {
        None
    }

    /// Produces source text for a resolved module id.
    ///
    /// Returning `None` passes the id on to the next plugin.
    fn load(&self, _id: &str) -> Option<String> {
        None
    }
}
