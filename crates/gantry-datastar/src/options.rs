// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration options: model, extraction, and validation.
//!
//! Options arrive as the integration's TOML table in the host pipeline
//! config. Extraction merges the user's fragment over compiled defaults and
//! rejects unknown keys; validation is advisory unless `strict` is set.

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{OptionsError, figment_to_options_errors, suggest_name};
use crate::registry;

/// User-facing configuration for the Datastar integration.
///
/// Every field is optional; an empty table selects the defaults, which load
/// the full runtime bundle with all official capability plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatastarOptions {
    /// Capability plugins to load. When unset, the full runtime bundle is
    /// used and every official plugin is available. When set, only the
    /// listed plugins are loaded on top of the core bundle. Ignored when
    /// `no_default_plugins` is true.
    #[serde(default)]
    pub plugins: Option<Vec<String>>,

    /// When true, activate no official plugins at all; only the core
    /// runtime is loaded. Use together with `entrypoint` to register
    /// custom plugins.
    #[serde(default)]
    pub no_default_plugins: bool,

    /// Path to a module whose default export runs before the runtime
    /// initializes. Relative paths resolve against the project root.
    #[serde(default)]
    pub entrypoint: Option<String>,

    /// When true, unknown capability names fail setup instead of being
    /// dropped with a debug log.
    #[serde(default)]
    pub strict: bool,
}

impl DatastarOptions {
    /// Extract options from a TOML fragment, merged over compiled defaults.
    ///
    /// Unknown keys are rejected with "did you mean?" suggestions; every
    /// extraction problem is reported, not just the first.
    pub fn from_toml_str(toml: &str) -> Result<Self, Vec<OptionsError>> {
        Figment::new()
            .merge(Serialized::defaults(DatastarOptions::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(figment_to_options_errors)
    }

    /// Validate the options, collecting every problem rather than failing
    /// fast.
    ///
    /// Checks each selected capability name against the official catalog
    /// (with fuzzy match suggestions for near misses) and rejects an empty
    /// entrypoint path. Advisory by default; the integration enforces it
    /// only when `strict` is set.
    pub fn validate(&self) -> Result<(), Vec<OptionsError>> {
        let mut errors = Vec::new();
        let valid = registry::plugin_names();

        if let Some(selection) = &self.plugins {
            for name in selection {
                if registry::lookup(name).is_none() {
                    errors.push(OptionsError::UnknownPlugin {
                        name: name.clone(),
                        suggestion: suggest_name(name, &valid),
                        valid_names: valid.join(", "),
                    });
                }
            }
        }

        if let Some(entrypoint) = &self.entrypoint
            && entrypoint.trim().is_empty()
        {
            errors.push(OptionsError::Validation {
                message: "entrypoint must not be empty".to_string(),
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
