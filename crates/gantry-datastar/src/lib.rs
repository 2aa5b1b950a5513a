// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Datastar integration for the Gantry pipeline.
//!
//! Injects the Datastar bootstrap script into every generated page and lets
//! the host application choose which official capability plugins to load,
//! suppress defaults entirely, or hand initialization to a custom
//! entrypoint module resolved through the pipeline's plugin chain.
//!
//! # Usage
//!
//! ```
//! use gantry_datastar::{DatastarIntegration, DatastarOptions};
//!
//! // All official capabilities via the full runtime bundle:
//! let integration = DatastarIntegration::default();
//! # assert!(integration.script().contains("datastar.js"));
//!
//! // Or a minimal page with an explicit selection:
//! let options = DatastarOptions::from_toml_str(
//!     "plugins = [\"get\", \"post\", \"bind\"]\n",
//! )
//! .expect("options parse");
//! let integration = DatastarIntegration::new(options);
//! assert!(integration.script().contains("datastar-core.js"));
//! ```

pub mod diagnostic;
pub mod entrypoint;
pub mod integration;
pub mod options;
pub mod registry;
pub mod script;

pub use diagnostic::{OptionsError, render_errors};
pub use entrypoint::{RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID, VirtualEntrypoint};
pub use integration::DatastarIntegration;
pub use options::DatastarOptions;
pub use registry::{PluginDescriptor, lookup, plugin_names};
pub use script::bootstrap_script;
