// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Virtual entrypoint module resolution.
//!
//! The bootstrap script imports `virtual:gantry-datastar/entrypoint` to run
//! user setup code before the runtime initializes. This plugin owns that
//! specifier: it maps it to a sentinel id no other plugin treats as a file,
//! and serves a generated module whose `setup` forwards to the configured
//! entrypoint's default export, or does nothing when none is configured.

use std::path::{Path, PathBuf};

use gantry_pipeline::{PipelineCommand, PipelinePlugin, ResolvedPipelineConfig};
use tracing::debug;

use crate::options::DatastarOptions;

/// Specifier the bootstrap script imports.
pub const VIRTUAL_MODULE_ID: &str = "virtual:gantry-datastar/entrypoint";
/// Sentinel id the specifier resolves to. The `\0` prefix keeps other
/// plugins and the filesystem fallback from touching it.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:gantry-datastar/entrypoint";

/// Pipeline plugin serving the virtual entrypoint module.
///
/// The run mode and the resolved entrypoint path are captured on the
/// instance by the configuration hooks; `load` is pure after that.
pub struct VirtualEntrypoint {
    entrypoint: Option<String>,
    is_build: bool,
    resolved: Option<PathBuf>,
}

impl VirtualEntrypoint {
    /// Creates the plugin for the given integration options.
    ///
    /// A blank `entrypoint` counts as unconfigured: the plugin serves the
    /// no-op module instead of resolving the project root as a module path.
    pub fn new(options: &DatastarOptions) -> Self {
        Self {
            entrypoint: options.entrypoint.clone().filter(|e| !e.trim().is_empty()),
            is_build: false,
            resolved: None,
        }
    }

    /// The entrypoint path after resolution, if one is configured.
    pub fn resolved_entrypoint(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }
}

impl PipelinePlugin for VirtualEntrypoint {
    fn name(&self) -> &str {
        "gantry-datastar:virtual-entrypoint"
    }

    fn config(&mut self, command: PipelineCommand) {
        self.is_build = command.is_build();
    }

    fn config_resolved(&mut self, config: &ResolvedPipelineConfig) {
        if let Some(raw) = &self.entrypoint {
            let resolved = resolve_entrypoint(&config.root, raw);
            debug!(entrypoint = %resolved.display(), "entrypoint resolved");
            self.resolved = Some(resolved);
        }
    }

    fn resolve_id(&self, specifier: &str) -> Option<String> {
        (specifier == VIRTUAL_MODULE_ID).then(|| RESOLVED_VIRTUAL_MODULE_ID.to_string())
    }

    fn load(&self, id: &str) -> Option<String> {
        (id == RESOLVED_VIRTUAL_MODULE_ID)
            .then(|| entrypoint_module(self.resolved.as_deref(), self.is_build))
    }
}

/// Resolves an entrypoint path against the project root.
///
/// Absolute paths pass through; anything else joins the root, whether or
/// not it is written with a leading `./`. Current-directory segments are
/// normalized away, so resolving an already resolved path is a no-op.
pub fn resolve_entrypoint(root: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined.components().collect()
}

/// Generates the virtual module body.
///
/// With no entrypoint the module exports a no-op `setup`. With one, `setup`
/// forwards to the entrypoint's default export when present. The
/// missing-export warning is emitted only into dev-mode output; production
/// pages stay silent.
fn entrypoint_module(resolved: Option<&Path>, is_build: bool) -> String {
    let Some(path) = resolved else {
        return "export const setup = () => {};".to_string();
    };

    let quoted = json_quoted(path);
    let warn = if is_build {
        String::new()
    } else {
        format!(
            "console.warn(\"[gantry-datastar] entrypoint `\" + {quoted} + \"` does not export a default function.\");"
        )
    };

    format!(
        "import * as mod from {quoted};\n\
         \n\
         export const setup = (Datastar) => {{\n\
         \tif (\"default\" in mod) {{\n\
         \t\tmod.default(Datastar);\n\
         \t}} else {{\n\
         \t\t{warn}\n\
         \t}}\n\
         }}"
    )
}

/// The path as a JSON string literal, exactly as it is embedded in the
/// generated import statement.
fn json_quoted(path: &Path) -> String {
    serde_json::Value::String(path.to_string_lossy().into_owned()).to_string()
}
