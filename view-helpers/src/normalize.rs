//! Action name normalization tables.
//!
//! Paired CRUD actions collapse onto one canonical action so that a form
//! template shared by `new`/`create` (or `edit`/`update`) gets a single page
//! class and a single script initializer. Each consumer owns its own table so
//! the two can diverge without touching call sites.

/// Total lookup table from action name to canonical action.
///
/// Names without an entry map to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationTable {
    entries: &'static [(&'static str, &'static str)],
}

/// Table used for page classes.
pub const CLASS_NORMALIZATION: NormalizationTable =
    NormalizationTable::new(&[("create", "new"), ("update", "edit")]);

/// Table used for action-scoped script initializers.
pub const SCRIPT_NORMALIZATION: NormalizationTable =
    NormalizationTable::new(&[("create", "new"), ("update", "edit")]);

impl NormalizationTable {
    /// Build a table from `(action, canonical)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Canonical action for `action`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use view_helpers::normalize::CLASS_NORMALIZATION;
    ///
    /// assert_eq!(CLASS_NORMALIZATION.canonical("create"), "new");
    /// assert_eq!(CLASS_NORMALIZATION.canonical("destroy"), "destroy");
    /// ```
    #[must_use]
    pub fn canonical<'a>(&self, action: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|&&(from, _)| from == action)
            .map_or(action, |&(_, to)| to)
    }

    /// The special-case pairs in this table.
    #[must_use]
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}
