//! Registration metadata for the `cstrip` module.
//!
//! [`ModuleConfig`] names the module and its single trimming method. It is
//! serde-serializable so a host can ship it alongside its own settings; the
//! crate itself never reads files or environment variables.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use cstrip::ModuleConfig;
//!
//! let config = ModuleConfig::default();
//! assert_eq!(config.name, "cstrip");
//! assert_eq!(config.method_name, "strip");
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## From JSON
//!
//! ```rust
//! use cstrip::ModuleConfig;
//!
//! let config = ModuleConfig::from_json(r#"{ "name": "textutil" }"#).unwrap();
//! assert_eq!(config.name, "textutil");
//! assert_eq!(config.method_name, "strip");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MODULE_NAME: &str = "cstrip";
pub const DEFAULT_METHOD_NAME: &str = "strip";
pub const DEFAULT_METHOD_DOC: &str = "Fast native strip function";

/// Names and docstrings used when registering the module.
///
/// Missing fields fall back to [`Default`], so `{}` is a valid document.
///
/// ```json
/// {
///   "name": "cstrip",
///   "doc": null,
///   "method_name": "strip",
///   "method_doc": "Fast native strip function"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleConfig {
    /// Module namespace the host imports. Must be an identifier.
    pub name: String,

    /// Optional module docstring.
    pub doc: Option<String>,

    /// Name the trimming method is exposed under. Must be an identifier.
    pub method_name: String,

    /// Docstring of the trimming method.
    pub method_doc: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODULE_NAME.to_owned(),
            doc: None,
            method_name: DEFAULT_METHOD_NAME.to_owned(),
            method_doc: DEFAULT_METHOD_DOC.to_owned(),
        }
    }
}

impl ModuleConfig {
    /// Parse and validate an in-memory JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ModuleConfig =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both names are identifiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_identifier("name", &self.name)?;
        validate_identifier("method_name", &self.method_name)?;
        Ok(())
    }
}

/// ASCII letter or `_`, then ASCII alphanumerics or `_`.
pub(crate) fn is_identifier(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

pub(crate) fn validate_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidName {
            field,
            value: value.to_owned(),
        })
    }
}
