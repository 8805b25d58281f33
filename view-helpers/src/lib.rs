//! # view-helpers
//!
//! Presentational helpers derived from request context for server-rendered pages.
//!
//! ## Features
//!
//! - **Page class**: `"{controller} {action}"` for the root container, with
//!   `create`/`update` folded onto `new`/`edit`
//! - **Script initializers**: cascading `App.init()`, `App.{controller}.init()`,
//!   `App.{controller}.init_{action}()` calls
//! - **Flash alerts**: dismissible, fade-capable alert markup with a class per flash key
//! - **Configuration**: Figment-based, from TOML files and `VIEW_HELPERS_` environment variables
//!
//! Every helper is a pure function of its inputs. The host owns request
//! dispatch and flash persistence and passes the current controller, action
//! and flash entries in explicitly.
//!
//! ## Example
//!
//! ```rust
//! use view_helpers::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let helpers = ViewHelpers::new(&Config::default())?;
//!
//!     let ctx = ActionContext::new("anime", "update")?;
//!     let mut flash = FlashStore::new();
//!     flash.insert("notice", "Anime updated")?;
//!
//!     let page = format!(
//!         "<body class=\"{}\">{}{}</body>",
//!         helpers.page_class(&ctx),
//!         helpers.flash_messages(&flash)?,
//!         helpers.javascript_initialization_tag(&ctx),
//!     );
//!
//!     assert!(page.contains("class=\"anime edit\""));
//!     assert!(page.contains("alert alert-info"));
//!     assert!(page.contains("App.anime.init_edit();"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod flash;
pub mod helpers;
pub mod javascript;
pub mod normalize;
pub mod observability;
pub mod page_class;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, FlashConfig, ScriptConfig, ServiceConfig};
    pub use crate::context::ActionContext;
    pub use crate::error::{Error, Result};
    pub use crate::flash::{flash_messages, Alert, AlertClassMap, FlashEntry, FlashRenderer, FlashStore};
    pub use crate::helpers::ViewHelpers;
    pub use crate::javascript::{init_script, script_tag, InitCall, InitScope, ScriptInitEmitter};
    pub use crate::normalize::{NormalizationTable, CLASS_NORMALIZATION, SCRIPT_NORMALIZATION};
    pub use crate::observability::init_tracing;
    pub use crate::page_class::{classify, page_action_class, page_class, page_controller_class};

    // Re-export tracing macros
    pub use tracing::{debug, error, info, instrument, trace, warn};
}
