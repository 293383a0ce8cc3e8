//! The persisted list of tracked variable names
//!
//! Stored on disk as:
//! ```json
//! {
//!   "env_var_names": ["$BAR", "$FOO"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// File name of the config document inside the config directory.
pub const CONFIG_BASENAME: &str = "local_env_var.json";

/// The only recognised top-level key.
pub const ENV_VAR_NAMES_KEY: &str = "env_var_names";

/// Config document tracking which variable names resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Tracked variable names, sorted after every reconciling load.
    #[serde(default)]
    pub env_var_names: Vec<String>,
}

impl ConfigDocument {
    /// Creates a document tracking the given names.
    #[must_use]
    pub const fn new(env_var_names: Vec<String>) -> Self {
        Self { env_var_names }
    }

    /// Extracts a document from arbitrary parsed JSON.
    ///
    /// A missing `env_var_names` key means an empty list. Other keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfigFormat` if the value is not a JSON object, and
    /// `InvalidFieldType` if `env_var_names` is not a list of strings.
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let Some(object) = value.as_object() else {
            return Err(DomainError::InvalidConfigFormat(
                "config file must contain a JSON object".to_string(),
            ));
        };

        let Some(names) = object.get(ENV_VAR_NAMES_KEY) else {
            return Ok(Self::default());
        };

        let field_error = || {
            DomainError::InvalidFieldType(format!("'{ENV_VAR_NAMES_KEY}' must be a list of strings"))
        };

        let names = names
            .as_array()
            .ok_or_else(field_error)?
            .iter()
            .map(|name| name.as_str().map(str::to_string).ok_or_else(field_error))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::new(names))
    }

    /// Returns true if no names are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.env_var_names.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_names() {
        let doc = ConfigDocument::from_value(&json!({"env_var_names": ["$BAR", "$FOO"]}))
            .expect("valid document");
        assert_eq!(doc.env_var_names, vec!["$BAR", "$FOO"]);
    }

    #[test]
    fn test_missing_key_defaults_to_empty() {
        let doc = ConfigDocument::from_value(&json!({})).expect("valid document");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let doc = ConfigDocument::from_value(&json!({"theme": "dark", "env_var_names": ["$A"]}))
            .expect("valid document");
        assert_eq!(doc.env_var_names, vec!["$A"]);
    }

    #[test]
    fn test_non_list_field_is_rejected() {
        let err = ConfigDocument::from_value(&json!({"env_var_names": "$FOO"}))
            .expect_err("should reject string field");
        assert!(matches!(err, DomainError::InvalidFieldType(_)));
    }

    #[test]
    fn test_non_string_element_is_rejected() {
        let err = ConfigDocument::from_value(&json!({"env_var_names": ["$FOO", 42]}))
            .expect_err("should reject number element");
        assert!(matches!(err, DomainError::InvalidFieldType(_)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = ConfigDocument::from_value(&json!(["$FOO"])).expect_err("should reject array");
        assert!(matches!(err, DomainError::InvalidConfigFormat(_)));
    }

    #[test]
    fn test_serializes_single_key() {
        let doc = ConfigDocument::new(vec!["$FOO".to_string()]);
        let json = serde_json::to_value(&doc).expect("serializable");
        assert_eq!(json, json!({"env_var_names": ["$FOO"]}));
    }
}
