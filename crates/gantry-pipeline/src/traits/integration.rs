// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration contract and the setup context handed to integrations.

use tracing::debug;

use crate::error::PipelineError;
use crate::traits::plugin::PipelinePlugin;
use crate::types::{InjectStage, InjectedScript};

/// A named extension wired into the pipeline at configuration time.
///
/// The pipeline calls [`setup`](Integration::setup) exactly once per run,
/// before configuration is resolved. Integrations use the [`SetupContext`]
/// to inject page scripts and to register additional pipeline plugins; they
/// hold no other channel into the pipeline.
pub trait Integration: Send + Sync {
    /// Unique name of this integration, used in logs and error messages.
    fn name(&self) -> &str;

    /// Configuration hook, called once per run.
    fn setup(&self, ctx: &mut SetupContext) -> Result<(), PipelineError>;
}

/// A nested configuration update contributed by an integration.
///
/// Carries additional pipeline plugins; the pipeline merges each update
/// into its own configuration in the order received.
#[derive(Default)]
pub struct ConfigUpdate {
    /// Plugins to append to the pipeline's plugin chain.
    pub plugins: Vec<Box<dyn PipelinePlugin>>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plugin to this update.
    pub fn with_plugin(mut self, plugin: Box<dyn PipelinePlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }
}

impl std::fmt::Debug for ConfigUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigUpdate")
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

/// Mutable context handed to [`Integration::setup`].
///
/// Collects script injections and configuration updates. After every
/// integration has run, the pipeline drains the context with
/// [`into_parts`](SetupContext::into_parts) and applies what it collected.
#[derive(Default)]
pub struct SetupContext {
    injected: Vec<InjectedScript>,
    plugins: Vec<Box<dyn PipelinePlugin>>,
}

impl SetupContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a script for injection into every generated page.
    pub fn inject_script(&mut self, stage: InjectStage, code: impl Into<String>) {
        let code = code.into();
        debug!(%stage, bytes = code.len(), "script queued for injection");
        self.injected.push(InjectedScript { stage, code });
    }

    /// Merges a configuration update into this context.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        debug!(plugins = update.plugins.len(), "config update merged");
        self.plugins.extend(update.plugins);
    }

    /// Scripts queued so far, in injection order.
    pub fn injected_scripts(&self) -> &[InjectedScript] {
        &self.injected
    }

    /// Names of the plugins registered so far, in registration order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Consumes the context, yielding queued scripts and registered plugins.
    pub fn into_parts(self) -> (Vec<InjectedScript>, Vec<Box<dyn PipelinePlugin>>) {
        (self.injected, self.plugins)
    }
}

impl std::fmt::Debug for SetupContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupContext")
            .field("injected", &self.injected.len())
            .field("plugins", &self.plugins.len())
            .finish()
    }
}
