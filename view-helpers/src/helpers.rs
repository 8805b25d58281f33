//! One-stop view helper bundle built from a loaded [`Config`].

use crate::config::Config;
use crate::context::ActionContext;
use crate::error::Result;
use crate::flash::{FlashRenderer, FlashStore};
use crate::javascript::ScriptInitEmitter;
use crate::page_class;

/// Page class, script initializer and flash helpers sharing one configuration.
///
/// Build it once at startup and share it across requests; it holds no
/// per-request state.
///
/// # Example
///
/// ```rust
/// use view_helpers::prelude::*;
///
/// let mut config = Config::default();
/// config.script.namespace = "Dummy".to_string();
/// let helpers = ViewHelpers::new(&config).unwrap();
///
/// let ctx = ActionContext::new("anime", "create").unwrap();
/// assert_eq!(helpers.page_class(&ctx), "anime new");
/// assert!(helpers
///     .javascript_initialization(&ctx)
///     .contains("Dummy.anime.init_new();"));
///
/// let mut flash = FlashStore::new();
/// flash.insert("success", "Created").unwrap();
/// assert!(helpers.flash_messages(&flash).unwrap().contains("alert-success"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewHelpers {
    script: ScriptInitEmitter,
    flash: FlashRenderer,
}

impl ViewHelpers {
    /// Build the helpers from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::error::Error::InvalidConfig)
    /// if [`Config::validate`] rejects the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            script: ScriptInitEmitter::from_config(&config.script),
            flash: FlashRenderer::from_config(&config.flash),
        })
    }

    /// Load configuration with [`Config::load`] and build the helpers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::error::Error::Config) if configuration
    /// cannot be extracted, or [`Error::InvalidConfig`](crate::error::Error::InvalidConfig)
    /// if it fails validation.
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        Self::new(&config)
    }

    /// Page class for the root container.
    #[must_use]
    pub fn page_class(&self, ctx: &ActionContext) -> String {
        page_class::page_class(ctx)
    }

    /// Initializer script body.
    #[must_use]
    pub fn javascript_initialization(&self, ctx: &ActionContext) -> String {
        self.script.emit(ctx)
    }

    /// Initializer script wrapped in a `<script>` element.
    #[must_use]
    pub fn javascript_initialization_tag(&self, ctx: &ActionContext) -> String {
        self.script.emit_tag(ctx)
    }

    /// Rendered flash alerts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`](crate::error::Error::Template) if rendering fails.
    pub fn flash_messages(&self, store: &FlashStore) -> Result<String> {
        self.flash.render(store)
    }

    /// Script emitter in use.
    #[must_use]
    pub fn script(&self) -> &ScriptInitEmitter {
        &self.script
    }

    /// Flash renderer in use.
    #[must_use]
    pub fn flash(&self) -> &FlashRenderer {
        &self.flash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn dummy_helpers() -> ViewHelpers {
        let mut config = Config::default();
        config.script.namespace = "Dummy".to_string();
        ViewHelpers::new(&config).unwrap()
    }

    #[test]
    fn test_helpers_follow_config() {
        let helpers = dummy_helpers();
        assert_eq!(helpers.script().namespace(), "Dummy");

        let ctx = ActionContext::new("anime", "update").unwrap();
        assert_eq!(helpers.page_class(&ctx), "anime edit");
        assert_eq!(
            helpers.javascript_initialization(&ctx),
            "Dummy.init();\nDummy.anime.init();\nDummy.anime.init_edit();"
        );
        assert!(helpers
            .javascript_initialization_tag(&ctx)
            .contains("Dummy.anime.init_edit();"));
    }

    #[test]
    fn test_helpers_are_stateless() {
        let helpers = dummy_helpers();
        let ctx = ActionContext::new("anime", "custom").unwrap();
        let store = FlashStore::try_from_pairs([("notice", "n"), ("alert", "a")]).unwrap();

        assert_eq!(helpers.page_class(&ctx), helpers.page_class(&ctx));
        assert_eq!(
            helpers.javascript_initialization(&ctx),
            helpers.javascript_initialization(&ctx)
        );
        assert_eq!(
            helpers.flash_messages(&store).unwrap(),
            helpers.flash_messages(&store).unwrap()
        );
    }

    #[test]
    fn test_helpers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ViewHelpers>();
        assert_send_sync::<ActionContext>();
        assert_send_sync::<FlashStore>();
    }

    #[test]
    fn test_rejects_config_that_breaks_output() {
        let mut config = Config::default();
        config.script.namespace = String::new();
        assert!(matches!(ViewHelpers::new(&config), Err(Error::InvalidConfig(_))));

        let mut config = Config::default();
        config.flash.dismiss_attribute = String::new();
        assert!(matches!(ViewHelpers::new(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_default_flash_classes() {
        let helpers = ViewHelpers::default();
        assert_eq!(helpers.flash().classes().resolve("notice"), "alert-info");
    }
}
