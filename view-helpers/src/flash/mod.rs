//! Flash message rendering.
//!
//! The host reads its flash store (consuming it, as flash stores do) and hands
//! the entries over as a [`FlashStore`]. Rendering is split in two steps:
//! [`FlashRenderer::alerts`] decides the class and id of every entry, and
//! [`FlashRenderer::render`] serializes those decisions to markup.
//!
//! ```html
//! <div id="flash-notice" class="alert alert-info fade in">
//!   <button type="button" class="close" data-dismiss-alert="flash-notice">&times;</button>
//!   Profile updated
//! </div>
//! ```
//!
//! The fragment is emitted on a single line; it is wrapped here for reading.

mod classes;
mod render;
mod store;

pub use classes::AlertClassMap;
pub use render::{flash_messages, Alert, FlashRenderer};
pub use store::{FlashEntry, FlashStore};
