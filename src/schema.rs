//! Required-key validation for the merged context.

use crate::constants::REQUIRED_KEYS;
use crate::context::Context;
use crate::error::{Error, Result};

/// Ordered set of keys that must be present after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    required: Vec<String>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(REQUIRED_KEYS)
    }
}

impl Schema {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { required: required.into_iter().map(Into::into).collect() }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Every required key absent from `context`, in schema order.
    pub fn missing_keys(&self, context: &Context) -> Vec<String> {
        self.required.iter().filter(|key| !context.contains_key(*key)).cloned().collect()
    }

    /// Checks that every required key resolves to some value. Empty strings
    /// and nulls count as present.
    ///
    /// # Errors
    /// * `Error::MissingConfigurationError` naming all missing keys
    pub fn validate(&self, context: &Context) -> Result<()> {
        let missing = self.missing_keys(context);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingConfigurationError { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reports_every_missing_key() {
        let schema = Schema::new(["title", "email", "byline"]);
        let mut context = Context::new();
        context.insert("email".to_string(), json!("a@b.c"));

        match schema.validate(&context) {
            Err(Error::MissingConfigurationError { missing }) => {
                assert_eq!(missing, vec!["title".to_string(), "byline".to_string()]);
            }
            other => panic!("Expected MissingConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_values_satisfy_schema() {
        let schema = Schema::new(["title", "byline"]);
        let mut context = Context::new();
        context.insert("title".to_string(), json!(""));
        context.insert("byline".to_string(), serde_json::Value::Null);
        assert!(schema.validate(&context).is_ok());
    }

    #[test]
    fn test_default_schema() {
        let schema = Schema::default();
        assert_eq!(schema.required().len(), 8);
        assert_eq!(schema.missing_keys(&Context::new()).len(), 8);
    }
}
