//! Cascading JavaScript initializer calls.
//!
//! Every page runs the application initializer, then the controller
//! initializer, then the narrowest action initializer:
//!
//! ```text
//! App.init();
//! App.anime.init();
//! App.anime.init_new();
//! ```
//!
//! `create` and `update` share the initializers of `new` and `edit`, so a
//! re-rendered form after a failed submit runs the same setup as the first
//! render.

use std::fmt;

use crate::config::ScriptConfig;
use crate::context::ActionContext;
use crate::error::Result;
use crate::normalize::SCRIPT_NORMALIZATION;

/// Level an initializer call is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitScope {
    /// Runs on every page.
    Application,
    /// Runs on every page of one controller.
    Controller,
    /// Runs on pages of one canonical action.
    Action,
}

/// A single `target.function();` initializer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitCall {
    /// Scope of the call.
    pub scope: InitScope,
    /// Object the initializer lives on (e.g. `App.anime`).
    pub target: String,
    /// Initializer function name (e.g. `init_new`).
    pub function: String,
}

impl InitCall {
    /// Render with an existence check around the call.
    ///
    /// The application call is left bare since the namespace object must exist.
    #[must_use]
    pub fn guarded(&self) -> String {
        match self.scope {
            InitScope::Application => self.to_string(),
            InitScope::Controller | InitScope::Action => format!(
                "if ({target} && {target}.{function}) {{ {call} }}",
                call = self,
                target = self.target,
                function = self.function,
            ),
        }
    }
}

impl fmt::Display for InitCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}();", self.target, self.function)
    }
}

/// Emits the initializer script for a controller/action pair.
///
/// # Example
///
/// ```rust
/// use view_helpers::context::ActionContext;
/// use view_helpers::javascript::ScriptInitEmitter;
///
/// let emitter = ScriptInitEmitter::new("Dummy");
/// let ctx = ActionContext::new("anime", "update").unwrap();
///
/// assert_eq!(
///     emitter.emit(&ctx),
///     "Dummy.init();\nDummy.anime.init();\nDummy.anime.init_edit();"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInitEmitter {
    namespace: String,
    guard_undefined: bool,
}

impl Default for ScriptInitEmitter {
    fn default() -> Self {
        Self::from_config(&ScriptConfig::default())
    }
}

impl ScriptInitEmitter {
    /// Emitter rooted at `namespace`, emitting bare calls.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            guard_undefined: false,
        }
    }

    /// Emitter configured from the `script` config section.
    #[must_use]
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            guard_undefined: config.guard_undefined,
        }
    }

    /// Toggle existence checks around controller and action calls.
    #[must_use]
    pub fn with_guard_undefined(mut self, guard: bool) -> Self {
        self.guard_undefined = guard;
        self
    }

    /// Top-level namespace object.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The three initializer calls in app, controller, action order.
    #[must_use]
    pub fn calls(&self, ctx: &ActionContext) -> Vec<InitCall> {
        let controller_target = format!("{}.{}", self.namespace, ctx.controller_identifier());
        let action = SCRIPT_NORMALIZATION.canonical(ctx.action_name());

        vec![
            InitCall {
                scope: InitScope::Application,
                target: self.namespace.clone(),
                function: "init".to_string(),
            },
            InitCall {
                scope: InitScope::Controller,
                target: controller_target.clone(),
                function: "init".to_string(),
            },
            InitCall {
                scope: InitScope::Action,
                target: controller_target,
                function: format!("init_{action}"),
            },
        ]
    }

    /// Script body, one call per line.
    #[must_use]
    pub fn emit(&self, ctx: &ActionContext) -> String {
        let body = self
            .calls(ctx)
            .iter()
            .map(|call| {
                if self.guard_undefined {
                    call.guarded()
                } else {
                    call.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        tracing::trace!(
            controller = ctx.controller_name(),
            action = ctx.action_name(),
            guarded = self.guard_undefined,
            "emitted script initializers"
        );
        body
    }

    /// Script body wrapped in a `<script>` element.
    #[must_use]
    pub fn emit_tag(&self, ctx: &ActionContext) -> String {
        script_tag(&self.emit(ctx))
    }
}

/// Wrap a script body in a `<script>` element with a CDATA guard.
#[must_use]
pub fn script_tag(body: &str) -> String {
    format!("<script>\n//<![CDATA[\n{body}\n//]]>\n</script>")
}

/// Validate the names and emit the script body with the default namespace.
///
/// # Errors
///
/// Returns an input error when either name is empty or malformed.
pub fn init_script(controller_name: &str, action_name: &str) -> Result<String> {
    let ctx = ActionContext::new(controller_name, action_name)?;
    Ok(ScriptInitEmitter::default().emit(&ctx))
}
