//! # Form Configuration
//!
//! Settings for the registration form. The web build reads them from a JSON block
//! embedded in the page; every key is optional.
//!
//! ```rust
//! use lib_core::{FormConfig, ValidationStrategy};
//!
//! let config = FormConfig::from_json(r#"{ "default_strategy": "manual" }"#).unwrap();
//! assert_eq!(config.default_strategy, ValidationStrategy::Manual);
//! assert!(config.focus_submit_on_valid);
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::form::ValidationStrategy;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Strategy used by the form mounted at `/`.
    pub default_strategy: ValidationStrategy,

    /// Move keyboard focus to the submit button once the form becomes valid.
    pub focus_submit_on_valid: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_strategy: ValidationStrategy::Schema,
            focus_submit_on_valid: true,
        }
    }
}

impl FormConfig {
    /// Parse a configuration block. Missing keys keep their defaults, unknown keys
    /// are rejected so typos do not pass silently.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: FormConfig = serde_json::from_str(raw)?;
        tracing::debug!(
            "[CONFIG] strategy={} focus_submit_on_valid={}",
            config.default_strategy,
            config.focus_submit_on_valid
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_all_keys() {
        let config = FormConfig::from_json(
            r#"{ "default_strategy": "hybrid", "focus_submit_on_valid": false }"#,
        )
        .unwrap();

        assert_eq!(config.default_strategy, ValidationStrategy::Hybrid);
        assert!(!config.focus_submit_on_valid);
    }

    #[test]
    fn test_strategy_name_is_case_insensitive() {
        let config = FormConfig::from_json(r#"{ "default_strategy": "Manual" }"#).unwrap();
        assert_eq!(config.default_strategy, ValidationStrategy::Manual);

        let config = FormConfig::from_json(r#"{ "default_strategy": " HYBRID " }"#).unwrap();
        assert_eq!(config.default_strategy, ValidationStrategy::Hybrid);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = FormConfig::from_json(r#"{ "default_strategy": "yup" }"#);
        assert!(matches!(result, Err(FormError::Json(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = FormConfig::from_json(r#"{ "strategy": "manual" }"#);
        assert!(matches!(result, Err(FormError::Json(_))));
    }
}
