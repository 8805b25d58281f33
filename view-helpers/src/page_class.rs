//! Page class derived from the current controller and action.
//!
//! Put the result on the root page container so stylesheets and scripts can
//! scope themselves to `.anime.edit` regardless of whether the form was
//! reached through `edit` or a failed `update`.

use crate::context::ActionContext;
use crate::error::Result;
use crate::normalize::CLASS_NORMALIZATION;

/// `"{controller} {canonical action}"` for the given context.
///
/// # Example
///
/// ```rust
/// use view_helpers::context::ActionContext;
/// use view_helpers::page_class::page_class;
///
/// let ctx = ActionContext::new("anime", "create").unwrap();
/// assert_eq!(page_class(&ctx), "anime new");
/// ```
#[must_use]
pub fn page_class(ctx: &ActionContext) -> String {
    let class = format!("{} {}", page_controller_class(ctx), page_action_class(ctx));
    tracing::trace!(
        controller = ctx.controller_name(),
        action = ctx.action_name(),
        %class,
        "derived page class"
    );
    class
}

/// Controller half of the page class.
#[must_use]
pub fn page_controller_class(ctx: &ActionContext) -> String {
    ctx.controller_identifier()
}

/// Action half of the page class, after normalization.
#[must_use]
pub fn page_action_class(ctx: &ActionContext) -> &str {
    CLASS_NORMALIZATION.canonical(ctx.action_name())
}

/// Validate the names and derive the page class in one step.
///
/// # Errors
///
/// Returns an input error when either name is empty or malformed.
pub fn classify(controller_name: &str, action_name: &str) -> Result<String> {
    let ctx = ActionContext::new(controller_name, action_name)?;
    Ok(page_class(&ctx))
}
