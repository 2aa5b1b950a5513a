// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bootstrap script generation.
//!
//! Produces the page script injected into every generated page: it imports
//! the Datastar runtime (the full bundle, or the core bundle plus the
//! selected capability plugins), runs the virtual entrypoint's `setup`,
//! re-applies the runtime after soft navigations, and exposes it as
//! `window.Datastar` for debugging.

use std::collections::HashSet;

use gantry_pipeline::AFTER_SWAP_EVENT;
use tracing::debug;

use crate::entrypoint::VIRTUAL_MODULE_ID;
use crate::options::DatastarOptions;
use crate::registry;

/// Full runtime bundle with every official capability pre-registered.
const FULL_BUNDLE_URL: &str = "/node_modules/@starfederation/datastar/dist/datastar.js";
/// Core runtime bundle with no capabilities pre-registered.
const CORE_BUNDLE_URL: &str = "/node_modules/@starfederation/datastar/dist/datastar-core.js";
/// Directory the official capability plugin modules are served from.
const OFFICIAL_PLUGIN_BASE: &str = "/node_modules/@starfederation/datastar/dist/plugins/official";

/// Builds the bootstrap script for the given options.
///
/// The output is a pure function of the options and the built-in catalog.
/// With no plugin selection and defaults allowed, the full bundle is
/// imported; otherwise the core bundle plus an import-and-register block
/// for the selection. Import order follows the selection's first
/// occurrences, since side effects of plugin modules run in import order.
pub fn bootstrap_script(options: &DatastarOptions) -> String {
    if options.plugins.is_none() && !options.no_default_plugins {
        return format!(
            "import {{ Datastar }} from \"{FULL_BUNDLE_URL}\";\n\
             import {{ setup }} from \"{VIRTUAL_MODULE_ID}\";\n\
             setup(Datastar);\n\
             document.addEventListener(\"{AFTER_SWAP_EVENT}\", () => {{\n\
             \tDatastar.apply(document.body);\n\
             }});\n\
             window.Datastar = Datastar;\n"
        );
    }

    let plugins = plugin_imports(options);
    format!(
        "import {{ Datastar }} from \"{CORE_BUNDLE_URL}\";\n\
         import {{ setup }} from \"{VIRTUAL_MODULE_ID}\";\n\
         {plugins}\n\
         setup(Datastar);\n\
         document.addEventListener(\"{AFTER_SWAP_EVENT}\", () => {{\n\
         \tDatastar.apply(document.body);\n\
         }});\n\
         window.Datastar = Datastar;\n"
    )
}

/// Renders the import-and-register block for an explicit plugin selection.
///
/// Duplicate names collapse to their first occurrence. Names missing from
/// the catalog are dropped with a debug log so a typo never breaks the
/// page. A selection that ends up empty still registers: `Datastar.load();`
/// keeps the core runtime initialized.
fn plugin_imports(options: &DatastarOptions) -> String {
    if options.no_default_plugins {
        return String::new();
    }

    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for name in options.plugins.as_deref().unwrap_or_default() {
        if !seen.insert(name.as_str()) {
            continue;
        }
        match registry::lookup(name) {
            Some(descriptor) => selected.push(descriptor),
            None => debug!(name = name.as_str(), "ignoring unknown plugin name"),
        }
    }

    let mut block = String::new();
    for descriptor in &selected {
        block.push_str(&format!(
            "import {{{symbol}}} from \"{OFFICIAL_PLUGIN_BASE}/{location}\";\n",
            symbol = descriptor.symbol,
            location = descriptor.location,
        ));
    }
    block.push_str("Datastar.load(");
    for descriptor in &selected {
        block.push_str(descriptor.symbol);
        block.push(',');
    }
    block.push_str(");");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn options_with_plugins(names: &[&str]) -> DatastarOptions {
        DatastarOptions {
            plugins: Some(names.iter().map(|s| s.to_string()).collect()),
            ..DatastarOptions::default()
        }
    }

    /// No selection, defaults allowed: the full bundle, verbatim.
    #[test]
    fn default_options_use_full_bundle() {
        let script = bootstrap_script(&DatastarOptions::default());
        assert_eq!(
            script,
            "import { Datastar } from \"/node_modules/@starfederation/datastar/dist/datastar.js\";\n\
             import { setup } from \"virtual:gantry-datastar/entrypoint\";\n\
             setup(Datastar);\n\
             document.addEventListener(\"gantry:after-swap\", () => {\n\
             \tDatastar.apply(document.body);\n\
             });\n\
             window.Datastar = Datastar;\n"
        );
    }

    /// An explicit selection switches to the core bundle and registers the
    /// selected plugins in order.
    #[test]
    fn selection_uses_core_bundle() {
        let script = bootstrap_script(&options_with_plugins(&["get", "post"]));
        assert_eq!(
            script,
            "import { Datastar } from \"/node_modules/@starfederation/datastar/dist/datastar-core.js\";\n\
             import { setup } from \"virtual:gantry-datastar/entrypoint\";\n\
             import {GET} from \"/node_modules/@starfederation/datastar/dist/plugins/official/backend/actions/get\";\n\
             import {POST} from \"/node_modules/@starfederation/datastar/dist/plugins/official/backend/actions/post\";\n\
             Datastar.load(GET,POST,);\n\
             setup(Datastar);\n\
             document.addEventListener(\"gantry:after-swap\", () => {\n\
             \tDatastar.apply(document.body);\n\
             });\n\
             window.Datastar = Datastar;\n"
        );
    }

    /// Duplicates collapse to the first occurrence; order is preserved.
    #[test]
    fn duplicate_names_import_once() {
        let script = bootstrap_script(&options_with_plugins(&["bind", "get", "bind", "get"]));
        assert_eq!(script.matches("import {Bind}").count(), 1);
        assert_eq!(script.matches("import {GET}").count(), 1);
        assert!(script.contains("Datastar.load(Bind,GET,);"));
    }

    /// Unknown names are dropped without touching the rest of the output,
    /// and the drop is logged for debugging.
    #[traced_test]
    #[test]
    fn unknown_names_are_dropped_and_logged() {
        let with_junk = bootstrap_script(&options_with_plugins(&["get", "bogus", "post"]));
        let without_junk = bootstrap_script(&options_with_plugins(&["get", "post"]));

        assert_eq!(with_junk, without_junk);
        assert!(!with_junk.contains("bogus"));
        assert!(logs_contain("ignoring unknown plugin name"));
        assert!(logs_contain("bogus"));
    }

    /// An empty selection still initializes the core runtime.
    #[test]
    fn empty_selection_still_calls_load() {
        let script = bootstrap_script(&options_with_plugins(&[]));
        assert!(script.contains("datastar-core.js"));
        assert!(script.contains("Datastar.load();"));
    }

    /// A selection of only unknown names behaves like an empty one.
    #[test]
    fn all_unknown_selection_behaves_like_empty() {
        let script = bootstrap_script(&options_with_plugins(&["nope", "nada"]));
        assert!(script.contains("Datastar.load();"));
        assert!(!script.contains(OFFICIAL_PLUGIN_BASE));
    }

    /// Suppressing defaults loads the bare core runtime: no plugin imports
    /// and no register call, just a blank line where the block would be.
    #[test]
    fn no_default_plugins_loads_bare_core() {
        let options = DatastarOptions {
            no_default_plugins: true,
            ..DatastarOptions::default()
        };
        let script = bootstrap_script(&options);
        assert!(script.contains("datastar-core.js"));
        assert!(!script.contains("Datastar.load"));
        assert!(script.contains("/entrypoint\";\n\nsetup(Datastar);"));
    }

    /// Suppression wins over an explicit selection.
    #[test]
    fn no_default_plugins_overrides_selection() {
        let options = DatastarOptions {
            plugins: Some(vec!["get".to_string()]),
            no_default_plugins: true,
            ..DatastarOptions::default()
        };
        let script = bootstrap_script(&options);
        assert!(!script.contains("Datastar.load"));
        assert!(!script.contains("backend/actions/get"));
    }

    /// The tail of the script is mode-independent: entrypoint setup, the
    /// after-swap listener, and the window global appear in every variant.
    #[test]
    fn common_tail_present_in_all_variants() {
        let variants = [
            bootstrap_script(&DatastarOptions::default()),
            bootstrap_script(&options_with_plugins(&["fit"])),
            bootstrap_script(&DatastarOptions {
                no_default_plugins: true,
                ..DatastarOptions::default()
            }),
        ];

        for script in &variants {
            let entry_import = "import { setup } from \"virtual:gantry-datastar/entrypoint\";";
            assert!(script.contains(entry_import));
            assert!(script.contains("setup(Datastar);"));
            assert!(script.contains("document.addEventListener(\"gantry:after-swap\""));
            assert!(script.contains("\tDatastar.apply(document.body);"));
            assert!(script.ends_with("window.Datastar = Datastar;\n"));
        }
    }

    proptest! {
        /// However a valid name is duplicated or interleaved with junk, its
        /// import appears exactly once and junk never appears at all.
        #[test]
        fn each_valid_name_imports_exactly_once(
            selection in proptest::collection::vec(
                prop_oneof![
                    Just("get".to_string()),
                    Just("post".to_string()),
                    Just("bind".to_string()),
                    Just("fit".to_string()),
                    "[a-z]{12}",
                ],
                0..12,
            )
        ) {
            let options = DatastarOptions {
                plugins: Some(selection.clone()),
                ..DatastarOptions::default()
            };
            let script = bootstrap_script(&options);

            for name in ["get", "post", "bind", "fit"] {
                let descriptor = registry::lookup(name).unwrap();
                let import = format!("import {{{}}}", descriptor.symbol);
                let expected = usize::from(selection.iter().any(|s| s == name));
                prop_assert_eq!(script.matches(&import).count(), expected);
            }
            for junk in selection.iter().filter(|s| registry::lookup(s).is_none()) {
                prop_assert!(!script.contains(junk.as_str()));
            }
        }
    }
}
