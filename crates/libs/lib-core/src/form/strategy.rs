//! Form variants.
//!
//! A strategy is a rule set (how messages are worded and split) paired with a
//! trigger mode (which events run a validation pass).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Which messages a validation pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// One message per field, first failing rule wins; separate minimum and
    /// maximum length messages for the password.
    Schema,
    /// One combined password message covering charset and length.
    Manual,
}

/// Which events run a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Blur shows messages. Change keeps them and only recomputes submit enablement.
    OnBlur,
    /// Change clears messages and disables submit. Blur shows messages. A
    /// confirmation typed equal to the password validates immediately.
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValidationStrategy {
    #[default]
    Schema,
    Manual,
    Hybrid,
}

impl ValidationStrategy {
    pub fn all() -> &'static [ValidationStrategy] {
        &[
            ValidationStrategy::Schema,
            ValidationStrategy::Manual,
            ValidationStrategy::Hybrid,
        ]
    }

    pub fn rules(&self) -> RuleSet {
        match self {
            ValidationStrategy::Schema | ValidationStrategy::Hybrid => RuleSet::Schema,
            ValidationStrategy::Manual => RuleSet::Manual,
        }
    }

    pub fn triggers(&self) -> TriggerMode {
        match self {
            ValidationStrategy::Schema => TriggerMode::OnBlur,
            ValidationStrategy::Manual | ValidationStrategy::Hybrid => TriggerMode::Manual,
        }
    }

    /// Lowercase identifier, also the route segment in the web build.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStrategy::Schema => "schema",
            ValidationStrategy::Manual => "manual",
            ValidationStrategy::Hybrid => "hybrid",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ValidationStrategy::Schema => "Schema validation",
            ValidationStrategy::Manual => "Manual validation",
            ValidationStrategy::Hybrid => "Hybrid validation",
        }
    }
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStrategy {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationStrategy::all()
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::Config(format!("unknown validation strategy '{}'", s)))
    }
}

// Deserialization accepts what `FromStr` accepts.
impl TryFrom<String> for ValidationStrategy {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
