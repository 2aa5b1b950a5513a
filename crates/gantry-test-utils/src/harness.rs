// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test pipeline for end-to-end integration testing.
//!
//! `TestPipeline` runs an integration the way a Gantry host would: setup
//! first, then the configuration hooks of every plugin the integration
//! registered, in pipeline order. Provides `load_module()` to drive module
//! resolution through the plugin chain with a filesystem fallback, so tests
//! observe the same failure surface a real build does.

use std::fs;
use std::path::{Path, PathBuf};

use gantry_pipeline::{
    InjectStage, InjectedScript, Integration, PipelineCommand, PipelineError, PipelinePlugin,
    ResolvedPipelineConfig, SetupContext,
};
use tracing::debug;

/// Builder for configuring a [`TestPipeline`] run.
pub struct TestPipelineBuilder {
    root: PathBuf,
    command: PipelineCommand,
}

impl TestPipelineBuilder {
    fn new() -> Self {
        Self {
            root: PathBuf::from("/"),
            command: PipelineCommand::Serve,
        }
    }

    /// Set the project root the run resolves relative paths against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the pipeline command. Defaults to `serve`.
    pub fn with_command(mut self, command: PipelineCommand) -> Self {
        self.command = command;
        self
    }

    /// Run the integration's setup hook, then drive every plugin it
    /// registered through `config` and `config_resolved` in pipeline order.
    pub fn run(self, integration: &dyn Integration) -> Result<TestPipeline, PipelineError> {
        debug!(integration = integration.name(), "running test pipeline setup");
        let mut ctx = SetupContext::new();
        integration.setup(&mut ctx)?;
        let (scripts, mut plugins) = ctx.into_parts();

        let resolved = ResolvedPipelineConfig {
            root: self.root.clone(),
            command: self.command,
        };
        for plugin in plugins.iter_mut() {
            plugin.config(self.command);
            plugin.config_resolved(&resolved);
        }

        Ok(TestPipeline {
            root: self.root,
            command: self.command,
            scripts,
            plugins,
        })
    }
}

/// A completed integration run, exposing everything a host would observe.
pub struct TestPipeline {
    /// Project root used for the run.
    pub root: PathBuf,
    /// Command the run was started with.
    pub command: PipelineCommand,
    /// Scripts injected during setup, in injection order.
    pub scripts: Vec<InjectedScript>,
    plugins: Vec<Box<dyn PipelinePlugin>>,
}

impl std::fmt::Debug for TestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestPipeline")
            .field("root", &self.root)
            .field("command", &self.command)
            .field("scripts", &self.scripts.len())
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

impl TestPipeline {
    /// Create a builder with the defaults: `serve` command, `/` root.
    pub fn builder() -> TestPipelineBuilder {
        TestPipelineBuilder::new()
    }

    /// Scripts injected at the given stage, in injection order.
    pub fn scripts_at(&self, stage: InjectStage) -> Vec<&InjectedScript> {
        self.scripts.iter().filter(|s| s.stage == stage).collect()
    }

    /// Names of the plugins the integration registered.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Ask each plugin in order to resolve a module specifier. The first
    /// `Some` wins, as in a real plugin chain.
    pub fn resolve_id(&self, specifier: &str) -> Option<String> {
        self.plugins.iter().find_map(|p| p.resolve_id(specifier))
    }

    /// Ask each plugin in order to load a resolved module id.
    pub fn load(&self, id: &str) -> Option<String> {
        self.plugins.iter().find_map(|p| p.load(id))
    }

    /// Load a module the way the host does: plugin resolution first, then
    /// the filesystem under the project root.
    ///
    /// Absolute specifiers are read as-is; anything else joins the root.
    /// Failures surface as [`PipelineError::ModuleLoad`], the same error
    /// path a real build hits for an unloadable import.
    pub fn load_module(&self, specifier: &str) -> Result<String, PipelineError> {
        if let Some(id) = self.resolve_id(specifier) {
            return self.load(&id).ok_or_else(|| PipelineError::ModuleLoad {
                id,
                reason: "a plugin resolved the id but none produced source".to_string(),
            });
        }

        let path = if Path::new(specifier).is_absolute() {
            PathBuf::from(specifier)
        } else {
            self.root.join(specifier)
        };
        fs::read_to_string(&path).map_err(|e| PipelineError::ModuleLoad {
            id: specifier.to_string(),
            reason: e.to_string(),
        })
    }
}
