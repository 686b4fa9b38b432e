// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! valid key listings and "did you mean?" suggestions using Jaro-Winkler
//! string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `prot` -> `port` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(frontdesk::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(frontdesk::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(frontdesk::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(frontdesk::config::other))]
    Other(String),
}

fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a Figment extraction error into a list of [`ConfigError`]s.
pub fn figment_to_config_errors(error: figment::Error) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for err in error {
        match &err.kind {
            figment::error::Kind::UnknownField(field, expected) => {
                errors.push(ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, expected),
                    valid_keys: expected.join(", "),
                });
            }
            figment::error::Kind::InvalidType(actual, expected) => {
                errors.push(ConfigError::InvalidType {
                    key: err.path.join("."),
                    detail: format!("found {actual}"),
                    expected: expected.clone(),
                });
            }
            _ => errors.push(ConfigError::Other(err.to_string())),
        }
    }

    if errors.is_empty() {
        errors.push(ConfigError::Other("unknown configuration error".to_string()));
    }
    errors
}

/// Find the closest valid key to a mistyped one, if any scores above the
/// suggestion threshold.
fn suggest_key(key: &str, valid: &[&str]) -> Option<String> {
    valid
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(key, candidate)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate.to_string())
}

/// Render a list of configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("error: {err}");
        if let Some(help) = err.help() {
            eprintln!("  help: {help}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_match() {
        let suggestion = suggest_key("prot", &["enabled", "host", "port", "bearer_token"]);
        assert_eq!(suggestion.as_deref(), Some("port"));
    }

    #[test]
    fn no_suggestion_for_distant_key() {
        let suggestion = suggest_key("zzzzzz", &["enabled", "host", "port"]);
        assert!(suggestion.is_none());
    }

    #[test]
    fn unknown_field_becomes_unknown_key_error() {
        let err = crate::loader::load_config_from_str(
            r#"
[gateway]
prot = 9090
"#,
        )
        .unwrap_err();
        let errors = figment_to_config_errors(err);
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "prot" && suggestion.as_deref() == Some("port")
        )));
    }

    #[test]
    fn render_errors_does_not_panic() {
        let errors = vec![
            ConfigError::Validation {
                message: "gateway.port must be non-zero".to_string(),
            },
            ConfigError::Other("boom".to_string()),
        ];
        render_errors(&errors);
    }
}
