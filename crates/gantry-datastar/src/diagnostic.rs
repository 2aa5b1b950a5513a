// SPDX-FileCopyrightText: 2026 Gantry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into rich miette diagnostics
//! with valid name listings and "did you mean?" suggestions using
//! Jaro-Winkler string similarity. Option values arrive as inline TOML
//! fragments rather than files, so diagnostics carry no source spans.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, GraphicalReportHandler};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 is chosen to catch common typos like `mergeFragment` ->
/// `mergeFragments`, `entrypont` -> `entrypoint`, while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// An options error with rich diagnostic information.
///
/// Each variant carries enough context for miette to render an Elm-style
/// error message with suggestions and valid name listings.
#[derive(Debug, Error, Diagnostic)]
pub enum OptionsError {
    /// A selected capability name is not in the official catalog.
    #[error("unknown capability plugin `{name}`")]
    #[diagnostic(
        code(gantry::datastar::unknown_plugin),
        help("{}", format_unknown_help(suggestion.as_deref(), valid_names))
    )]
    UnknownPlugin {
        /// The unrecognized capability name.
        name: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid capability names.
        valid_names: String,
    },

    /// An unknown key was found in the options.
    #[error("unknown option key `{key}`")]
    #[diagnostic(
        code(gantry::datastar::unknown_key),
        help("{}", format_unknown_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the options table.
        valid_keys: String,
    },

    /// An option value has the wrong type.
    #[error("invalid type for option `{key}`: {detail}")]
    #[diagnostic(code(gantry::datastar::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for an option value.
    #[error("validation error: {message}")]
    #[diagnostic(code(gantry::datastar::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other options errors.
    #[error("options error: {0}")]
    #[diagnostic(code(gantry::datastar::other))]
    Other(String),
}

/// Format the help message for unknown key and name errors.
fn format_unknown_help(suggestion: Option<&str>, valid: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid names: {valid}"),
        None => format!("valid names: {valid}"),
    }
}

/// Convert a `figment::Error` into a list of `OptionsError` diagnostics.
///
/// Iterates through all errors in the figment error (which may contain
/// multiple), converting each to an appropriate `OptionsError` variant with
/// fuzzy match suggestions for unknown field errors.
pub fn figment_to_options_errors(err: figment::Error) -> Vec<OptionsError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let options_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                // expected is &'static [&'static str]
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_name(field, &valid_keys);

                OptionsError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                }
            }
            Kind::InvalidType(actual, expected) => {
                let key = error
                    .path
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                OptionsError::InvalidType {
                    key,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                }
            }
            _ => OptionsError::Other(format!("{error}")),
        };

        errors.push(options_error);
    }

    errors
}

/// Suggest a similar name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// no candidate is close enough to the unknown name.
pub fn suggest_name(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &candidate in candidates {
        let score = strsim::jaro_winkler(unknown, candidate);
        if score > best_score {
            best_score = score;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}

/// Render a list of `OptionsError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[OptionsError]) {
    let handler = GraphicalReportHandler::new();
    eprint!("{}", render_errors_with(&handler, errors));
}

/// One concatenated report for the whole list. An error that fails to
/// render falls back to its plain `Display` line.
fn render_errors_with(handler: &GraphicalReportHandler, errors: &[OptionsError]) -> String {
    let mut out = String::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            out.push_str(&buf);
        } else {
            out.push_str(&format!("Error: {error}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_merge_fragment_for_merge_fragments() {
        let valid = &["mergeFragments", "mergeSignals", "removeFragments"];
        assert_eq!(
            suggest_name("mergeFragment", valid),
            Some("mergeFragments".to_string())
        );
    }

    #[test]
    fn suggest_entrypont_for_entrypoint() {
        let valid = &["plugins", "no_default_plugins", "entrypoint", "strict"];
        assert_eq!(
            suggest_name("entrypont", valid),
            Some("entrypoint".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["get", "post", "bind"];
        assert_eq!(suggest_name("zzzzzz", valid), None);
    }

    #[test]
    fn unknown_plugin_help_includes_suggestion() {
        let err = OptionsError::UnknownPlugin {
            name: "mergeFragment".to_string(),
            suggestion: Some("mergeFragments".to_string()),
            valid_names: "get, mergeFragments, post".to_string(),
        };

        assert_eq!(err.to_string(), "unknown capability plugin `mergeFragment`");
        assert_eq!(
            err.code().expect("diagnostic code").to_string(),
            "gantry::datastar::unknown_plugin"
        );
        let help = err.help().expect("help text").to_string();
        assert!(help.contains("did you mean `mergeFragments`?"));
        assert!(help.contains("get, mergeFragments, post"));
    }

    #[test]
    fn unknown_plugin_help_without_suggestion_lists_names() {
        let err = OptionsError::UnknownPlugin {
            name: "zzz".to_string(),
            suggestion: None,
            valid_names: "get, post".to_string(),
        };

        let help = err.help().expect("help text").to_string();
        assert!(!help.contains("did you mean"));
        assert!(help.contains("valid names: get, post"));
    }

    #[test]
    fn graphical_report_renders_message_and_help() {
        use miette::GraphicalTheme;

        let err = OptionsError::UnknownPlugin {
            name: "mergeFragment".to_string(),
            suggestion: Some("mergeFragments".to_string()),
            valid_names: "mergeFragments, mergeSignals".to_string(),
        };

        let mut rendered = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .render_report(&mut rendered, &err)
            .expect("report renders");

        assert!(rendered.contains("unknown capability plugin `mergeFragment`"));
        assert!(rendered.contains("did you mean `mergeFragments`?"));
        assert!(rendered.contains("gantry::datastar::unknown_plugin"));
    }

    /// The list renderer keeps every error's report, in input order.
    #[test]
    fn multi_error_render_covers_each_report() {
        use miette::GraphicalTheme;

        let errors = vec![
            OptionsError::UnknownPlugin {
                name: "mergeFragment".to_string(),
                suggestion: Some("mergeFragments".to_string()),
                valid_names: "mergeFragments".to_string(),
            },
            OptionsError::Validation {
                message: "entrypoint must not be empty".to_string(),
            },
        ];

        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let rendered = render_errors_with(&handler, &errors);

        let first = rendered.find("unknown capability plugin `mergeFragment`");
        let second = rendered.find("entrypoint must not be empty");
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(first < second);
    }
}
