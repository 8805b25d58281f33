//! Request context consumed by the page and script helpers.

use crate::error::{Error, Result};

/// The current controller and action of a request.
///
/// Built once per request by the host and handed to the helpers by reference.
/// Construction validates both names, so every helper downstream can treat
/// them as well-formed identifiers.
///
/// # Example
///
/// ```rust
/// use view_helpers::context::ActionContext;
///
/// let ctx = ActionContext::new("admin/anime", "update").unwrap();
/// assert_eq!(ctx.controller_name(), "admin/anime");
/// assert_eq!(ctx.controller_identifier(), "admin_anime");
/// assert_eq!(ctx.action_name(), "update");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionContext {
    controller_name: String,
    action_name: String,
}

impl ActionContext {
    /// Create a context from a controller path and an action name.
    ///
    /// The controller may be namespaced with `/` (`admin/anime`); every
    /// segment and the action must match `[a-z0-9_]+`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidControllerName`] or [`Error::InvalidActionName`]
    /// when either name is empty or malformed.
    pub fn new(controller_name: impl Into<String>, action_name: impl Into<String>) -> Result<Self> {
        let controller_name = controller_name.into();
        let action_name = action_name.into();

        if !controller_name.split('/').all(is_identifier) {
            return Err(Error::InvalidControllerName(controller_name));
        }
        if !is_identifier(&action_name) {
            return Err(Error::InvalidActionName(action_name));
        }

        Ok(Self {
            controller_name,
            action_name,
        })
    }

    /// Controller path as given, including any namespace separators.
    #[must_use]
    pub fn controller_name(&self) -> &str {
        &self.controller_name
    }

    /// Action name as given, before normalization.
    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Controller path flattened to a single identifier (`admin/anime` becomes `admin_anime`).
    #[must_use]
    pub fn controller_identifier(&self) -> String {
        self.controller_name.replace('/', "_")
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
