// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and positive intervals.

use crate::diagnostic::ConfigError;
use crate::model::FrontdeskConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FrontdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.helpdesk.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "helpdesk.request_timeout_secs must be positive".to_string(),
        });
    }

    if config.helpdesk.sweep_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "helpdesk.sweep_interval_secs must be positive".to_string(),
        });
    }

    if config.notify.webhook_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "notify.webhook_timeout_secs must be positive".to_string(),
        });
    }

    for (key, url) in [
        ("notify.supervisor_webhook_url", &config.notify.supervisor_webhook_url),
        ("notify.caller_webhook_url", &config.notify.caller_webhook_url),
    ] {
        if let Some(url) = url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be an http(s) URL, got `{url}`"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = FrontdeskConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = FrontdeskConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = FrontdeskConfig::default();
        config.helpdesk.request_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("request_timeout_secs"))));
    }

    #[test]
    fn non_http_webhook_fails_validation() {
        let mut config = FrontdeskConfig::default();
        config.notify.supervisor_webhook_url = Some("ftp://example.com".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("supervisor_webhook_url"))));
    }

    #[test]
    fn multiple_problems_are_all_collected() {
        let mut config = FrontdeskConfig::default();
        config.storage.database_path = "".to_string();
        config.helpdesk.sweep_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
