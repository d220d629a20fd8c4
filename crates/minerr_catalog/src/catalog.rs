//! The template catalog
//!
//! Templates are keyed by `(namespace, code)`, with a separate global map
//! for codes registered without a namespace. The serialized document merges
//! both: each namespace becomes a nested `code -> template` object, and
//! global codes sit at the top level, overlaying a namespace entry on key
//! collision.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use minerr_core::ErrorArg;

use crate::error::CatalogError;
use crate::template::interpolate;

/// A catalog of long-form error message templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCatalog {
    namespaces: HashMap<String, HashMap<String, String>>,
    global: HashMap<String, String>,
}

impl ErrorCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under a namespace.
    ///
    /// The last registration for a code wins; the previous template, if
    /// any, is returned.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        code: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        let namespace = namespace.into();
        let code = code.into();
        let previous = self
            .namespaces
            .entry(namespace.clone())
            .or_default()
            .insert(code.clone(), template.into());
        if previous.is_some() {
            warn!(namespace = %namespace, code = %code, "replacing registered error template");
        }
        previous
    }

    /// Registers a template for a code with no namespace
    pub fn register_global(
        &mut self,
        code: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        let code = code.into();
        let previous = self.global.insert(code.clone(), template.into());
        if previous.is_some() {
            warn!(code = %code, "replacing registered error template");
        }
        previous
    }

    /// Looks up a namespaced template
    pub fn template(&self, namespace: &str, code: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)
            .and_then(|codes| codes.get(code))
            .map(String::as_str)
    }

    /// Looks up a global template
    pub fn global_template(&self, code: &str) -> Option<&str> {
        self.global.get(code).map(String::as_str)
    }

    /// Iterates over the registered namespaces
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Total number of registered templates, global ones included
    pub fn len(&self) -> usize {
        let namespaced: usize = self.namespaces.values().map(HashMap::len).sum();
        namespaced + self.global.len()
    }

    /// Returns true if no templates are registered
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.global.is_empty()
    }

    /// Renders the template for a code with the given arguments.
    ///
    /// Returns `None` when no template is registered for the code. Slot
    /// substitution follows [`interpolate`].
    pub fn render(
        &self,
        namespace: Option<&str>,
        code: &str,
        args: &[ErrorArg],
    ) -> Option<String> {
        let template = match namespace {
            Some(namespace) => self.template(namespace, code)?,
            None => self.global_template(code)?,
        };
        Some(interpolate(template, args))
    }

    /// Serializes the catalog as a single merged JSON document
    pub fn to_json(&self) -> Value {
        let mut document = Map::new();
        for (namespace, codes) in &self.namespaces {
            let mut entries = Map::new();
            for (code, template) in codes {
                entries.insert(code.clone(), Value::String(template.clone()));
            }
            document.insert(namespace.clone(), Value::Object(entries));
        }
        // Global codes overlay namespace entries on collision.
        for (code, template) in &self.global {
            document.insert(code.clone(), Value::String(template.clone()));
        }
        Value::Object(document)
    }

    /// Decodes a catalog from its merged JSON document
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(document)?;
        let entries = match document {
            Value::Object(entries) => entries,
            _ => return Err(CatalogError::UnexpectedEntry("document root".to_string())),
        };

        let mut catalog = ErrorCatalog::new();
        for (key, value) in entries {
            match value {
                Value::String(template) => {
                    catalog.global.insert(key, template);
                }
                Value::Object(codes) => {
                    let mut templates = HashMap::new();
                    for (code, template) in codes {
                        match template {
                            Value::String(template) => {
                                templates.insert(code, template);
                            }
                            _ => {
                                return Err(CatalogError::UnexpectedEntry(format!(
                                    "{}.{}",
                                    key, code
                                )))
                            }
                        }
                    }
                    catalog.namespaces.insert(key, templates);
                }
                _ => return Err(CatalogError::UnexpectedEntry(key)),
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = ErrorCatalog::new();
        catalog.register("test", "test1", "This is a {0}");

        assert_eq!(catalog.template("test", "test1"), Some("This is a {0}"));
        assert_eq!(catalog.template("test", "missing"), None);
        assert_eq!(catalog.template("other", "test1"), None);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut catalog = ErrorCatalog::new();
        catalog.register("test", "test1", "first");
        let previous = catalog.register("test", "test1", "second");

        assert_eq!(previous.as_deref(), Some("first"));
        assert_eq!(catalog.template("test", "test1"), Some("second"));
    }

    #[test]
    fn test_global_codes_live_outside_namespaces() {
        let mut catalog = ErrorCatalog::new();
        catalog.register_global("uncaught", "Uncaught {0}");

        assert_eq!(catalog.global_template("uncaught"), Some("Uncaught {0}"));
        assert_eq!(catalog.template("uncaught", "uncaught"), None);
    }

    #[test]
    fn test_len_counts_all_templates() {
        let mut catalog = ErrorCatalog::new();
        assert!(catalog.is_empty());

        catalog.register("foo", "one", "a");
        catalog.register("foo", "three", "b");
        catalog.register("bar", "one", "c");
        catalog.register_global("zero", "d");

        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }
}
