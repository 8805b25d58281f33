//! Flash key to alert class mapping.

use std::borrow::Cow;
use std::collections::BTreeMap;

const BUILTIN_CLASSES: &[(&str, &str)] = &[
    ("success", "alert-success"),
    ("notice", "alert-info"),
    ("error", "alert-error"),
    ("alert", "alert-error"),
];

/// Maps flash keys to the class selecting their visual treatment.
///
/// Keys outside the table get `alert-<key>`, so new kinds of message render
/// without registering them first.
///
/// # Example
///
/// ```rust
/// use view_helpers::flash::AlertClassMap;
///
/// let classes = AlertClassMap::default();
/// assert_eq!(classes.resolve("notice"), "alert-info");
/// assert_eq!(classes.resolve("warning"), "alert-warning");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertClassMap {
    overrides: BTreeMap<String, String>,
}

impl AlertClassMap {
    /// Built-in table with `overrides` taking precedence.
    #[must_use]
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Alert class for `key`.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &str) -> Cow<'a, str> {
        if let Some(class) = self.overrides.get(key) {
            return Cow::Borrowed(class.as_str());
        }
        BUILTIN_CLASSES
            .iter()
            .find(|&&(k, _)| k == key)
            .map_or_else(|| Cow::Owned(format!("alert-{key}")), |&(_, class)| Cow::Borrowed(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_classes() {
        let classes = AlertClassMap::default();
        assert_eq!(classes.resolve("success"), "alert-success");
        assert_eq!(classes.resolve("notice"), "alert-info");
        assert_eq!(classes.resolve("error"), "alert-error");
        assert_eq!(classes.resolve("alert"), "alert-error");
    }

    #[test]
    fn test_derived_class_keeps_key_case() {
        let classes = AlertClassMap::default();
        assert_eq!(classes.resolve("custom"), "alert-custom");
        assert_eq!(classes.resolve("customKey"), "alert-customKey");
    }

    #[test]
    fn test_overrides() {
        let overrides = BTreeMap::from([
            ("notice".to_string(), "alert-notice".to_string()),
            ("warning".to_string(), "alert-block".to_string()),
        ]);
        let classes = AlertClassMap::with_overrides(overrides);
        assert_eq!(classes.resolve("notice"), "alert-notice");
        assert_eq!(classes.resolve("warning"), "alert-block");
        assert_eq!(classes.resolve("success"), "alert-success");
    }
}
