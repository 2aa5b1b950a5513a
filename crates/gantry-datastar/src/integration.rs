// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Datastar integration.

use gantry_pipeline::{ConfigUpdate, InjectStage, Integration, PipelineError, SetupContext};
use tracing::debug;

use crate::diagnostic::render_errors;
use crate::entrypoint::VirtualEntrypoint;
use crate::options::DatastarOptions;
use crate::script::bootstrap_script;

/// Wires Datastar into the Gantry pipeline.
///
/// Construction computes the bootstrap script once from the options; the
/// setup hook injects it into every page and registers the virtual
/// entrypoint plugin with the module pipeline. With `strict` set, invalid
/// options fail setup after their diagnostics are rendered to stderr.
///
/// ```
/// use gantry_datastar::{DatastarIntegration, DatastarOptions};
///
/// let integration = DatastarIntegration::new(DatastarOptions {
///     plugins: Some(vec!["get".into(), "bind".into()]),
///     ..DatastarOptions::default()
/// });
/// assert!(integration.script().contains("datastar-core.js"));
/// ```
pub struct DatastarIntegration {
    options: DatastarOptions,
    script: String,
}

impl DatastarIntegration {
    /// Creates the integration for the given options.
    pub fn new(options: DatastarOptions) -> Self {
        let script = bootstrap_script(&options);
        Self { options, script }
    }

    /// The options this integration was built with.
    pub fn options(&self) -> &DatastarOptions {
        &self.options
    }

    /// The bootstrap script injected into every page.
    pub fn script(&self) -> &str {
        &self.script
    }
}

impl Default for DatastarIntegration {
    /// The default integration loads the full runtime bundle.
    fn default() -> Self {
        Self::new(DatastarOptions::default())
    }
}

impl Integration for DatastarIntegration {
    fn name(&self) -> &str {
        "gantry-datastar"
    }

    fn setup(&self, ctx: &mut SetupContext) -> Result<(), PipelineError> {
        if self.options.strict
            && let Err(errors) = self.options.validate()
        {
            // The host only sees the flat message; the suggestions and
            // diagnostic codes go to the terminal.
            render_errors(&errors);
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PipelineError::Integration {
                name: self.name().to_string(),
                message,
            });
        }

        debug!(bytes = self.script.len(), "injecting Datastar bootstrap script");
        ctx.inject_script(InjectStage::Page, self.script.clone());
        ctx.update_config(
            ConfigUpdate::new().with_plugin(Box::new(VirtualEntrypoint::new(&self.options))),
        );
        Ok(())
    }
}
