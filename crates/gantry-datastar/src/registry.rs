// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in catalog of the official Datastar capability plugins.
//!
//! Maps each of the 28 capability names to the module location and exported
//! symbol of its plugin in the runtime's official distribution. The catalog
//! is compiled in and built once at first use; there is no runtime
//! registration. Lookups for unknown names simply miss, and callers decide
//! whether to drop them or report them.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Where an official capability plugin lives and what it exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Module path under the official plugin distribution directory,
    /// without extension.
    pub location: &'static str,
    /// The named export to import and hand to `Datastar.load`.
    pub symbol: &'static str,
}

const fn descriptor(location: &'static str, symbol: &'static str) -> PluginDescriptor {
    PluginDescriptor { location, symbol }
}

/// The official capability plugins, keyed by selection name.
static OFFICIAL_PLUGINS: LazyLock<HashMap<&'static str, PluginDescriptor>> = LazyLock::new(|| {
    HashMap::from([
        // Backend actions
        ("delete", descriptor("backend/actions/delete", "DELETE")),
        ("get", descriptor("backend/actions/get", "GET")),
        ("patch", descriptor("backend/actions/patch", "PATCH")),
        ("post", descriptor("backend/actions/post", "POST")),
        ("put", descriptor("backend/actions/put", "PUT")),
        // Backend attributes
        ("indicator", descriptor("backend/attributes/indicator", "Indicator")),
        // Backend watchers
        ("executeScript", descriptor("backend/watchers/executeScript", "ExecuteScript")),
        ("mergeFragments", descriptor("backend/watchers/mergeFragments", "MergeFragments")),
        ("mergeSignals", descriptor("backend/watchers/mergeSignals", "MergeSignals")),
        ("removeFragments", descriptor("backend/watchers/removeFragments", "RemoveFragments")),
        ("removeSignals", descriptor("backend/watchers/removeSignals", "RemoveSignals")),
        // Browser actions
        ("clipboard", descriptor("browser/actions/clipboard", "Clipboard")),
        // Browser attributes
        ("customValidity", descriptor("browser/attributes/customValidity", "CustomValidity")),
        ("intersects", descriptor("browser/attributes/intersects", "Intersects")),
        ("persist", descriptor("browser/attributes/persist", "Persist")),
        ("replaceUrl", descriptor("browser/attributes/replaceUrl", "ReplaceUrl")),
        ("scrollIntoView", descriptor("browser/attributes/scrollIntoView", "ScrollIntoView")),
        ("show", descriptor("browser/attributes/show", "Show")),
        ("viewTransition", descriptor("browser/attributes/viewTransition", "ViewTransition")),
        // DOM attributes
        ("attr", descriptor("dom/attributes/attr", "Attr")),
        ("bind", descriptor("dom/attributes/bind", "Bind")),
        ("class", descriptor("dom/attributes/class", "Class")),
        ("on", descriptor("dom/attributes/on", "On")),
        ("ref", descriptor("dom/attributes/ref", "Ref")),
        ("text", descriptor("dom/attributes/text", "Text")),
        // Logic actions
        ("fit", descriptor("logic/actions/fit", "Fit")),
        ("setAll", descriptor("logic/actions/setAll", "SetAll")),
        ("toggleAll", descriptor("logic/actions/toggleAll", "ToggleAll")),
    ])
});

/// Looks up the descriptor for a capability name.
///
/// Returns `None` for names not in the official catalog.
pub fn lookup(name: &str) -> Option<&'static PluginDescriptor> {
    OFFICIAL_PLUGINS.get(name)
}

/// Returns all valid capability names, sorted for stable diagnostics.
pub fn plugin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = OFFICIAL_PLUGINS.keys().copied().collect();
    names.sort_unstable();
    names
}
