//! Naming policy for synthesized buffer names.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_prefix() -> String {
    "buffer".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Prefix placed before the sequence number (`buffer` -> `buffer1`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl NamingConfig {
    /// The prefix must itself be a C identifier so `prefix + N` is one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.prefix.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidValue {
                field: "naming.prefix".to_string(),
                reason: format!("'{}' is not a valid C identifier", self.prefix),
            });
        }
        Ok(())
    }
}
