//! Dismissible alert markup for flash entries.

use std::borrow::Cow;

use askama::Template;

use super::classes::AlertClassMap;
use super::store::FlashStore;
use crate::config::FlashConfig;
use crate::error::Result;

/// Presentation decision for one flash entry, before any markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert<'a> {
    /// Flash key.
    pub key: &'a str,
    /// Message text.
    pub message: &'a str,
    /// Resolved alert class (e.g. `alert-info`).
    pub css_class: Cow<'a, str>,
    /// Element id, also the value of the dismiss attribute.
    pub dom_id: String,
}

#[derive(Template)]
#[template(
    source = r#"<div id="{{ alert.dom_id }}" class="{{ style.base_class }} {{ alert.css_class }} {{ style.fade_class }}"><button type="button" class="close" {{ style.dismiss_attribute }}="{{ alert.dom_id }}">{{ style.close_label|safe }}</button>{{ alert.message }}</div>"#,
    ext = "html"
)]
struct AlertTemplate<'a> {
    alert: &'a Alert<'a>,
    style: &'a FlashConfig,
}

/// Renders a [`FlashStore`] as a block of dismissible alerts.
///
/// Message text is HTML-escaped by the template; the close label is emitted
/// as configured.
///
/// # Example
///
/// ```rust
/// use view_helpers::flash::{FlashRenderer, FlashStore};
///
/// let mut flash = FlashStore::new();
/// flash.insert("notice", "Profile updated").unwrap();
///
/// let html = FlashRenderer::default().render(&flash).unwrap();
/// assert!(html.contains("alert alert-info fade in"));
/// assert!(html.contains(r#"data-dismiss-alert="flash-notice""#));
/// assert!(html.contains("Profile updated"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashRenderer {
    style: FlashConfig,
    classes: AlertClassMap,
}

impl FlashRenderer {
    /// Renderer configured from the `flash` config section.
    #[must_use]
    pub fn from_config(config: &FlashConfig) -> Self {
        Self {
            style: config.clone(),
            classes: AlertClassMap::with_overrides(config.classes.clone()),
        }
    }

    /// Class map in use.
    #[must_use]
    pub fn classes(&self) -> &AlertClassMap {
        &self.classes
    }

    /// One [`Alert`] per store entry, in insertion order.
    ///
    /// Lazy; call again to iterate from the start.
    pub fn alerts<'a>(&'a self, store: &'a FlashStore) -> impl Iterator<Item = Alert<'a>> + 'a {
        store.iter().map(move |entry| Alert {
            key: &entry.key,
            message: &entry.message,
            css_class: self.classes.resolve(&entry.key),
            dom_id: format!("{}-{}", self.style.id_prefix, entry.key),
        })
    }

    /// Markup for a single alert.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`](crate::error::Error::Template) if the
    /// template fails to render.
    pub fn render_alert(&self, alert: &Alert<'_>) -> Result<String> {
        let html = AlertTemplate {
            alert,
            style: &self.style,
        }
        .render()?;
        Ok(html)
    }

    /// Markup for every entry, one fragment per line. Empty for an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`](crate::error::Error::Template) if any
    /// fragment fails to render.
    pub fn render(&self, store: &FlashStore) -> Result<String> {
        let fragments = self
            .alerts(store)
            .map(|alert| {
                tracing::trace!(key = alert.key, class = %alert.css_class, "rendering flash alert");
                self.render_alert(&alert)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(fragments.join("\n"))
    }
}

/// Render ordered `(key, message)` pairs with the default configuration.
///
/// # Errors
///
/// Returns an error if a key is invalid or rendering fails.
pub fn flash_messages<K, M>(entries: impl IntoIterator<Item = (K, M)>) -> Result<String>
where
    K: Into<String>,
    M: Into<String>,
{
    let store = FlashStore::try_from_pairs(entries)?;
    FlashRenderer::default().render(&store)
}
