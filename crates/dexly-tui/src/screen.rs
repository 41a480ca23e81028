//! Screen identifiers.

/// The two screens: the catalog list and one entry's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    List,
    Detail,
}

impl ScreenId {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "Catalog",
            Self::Detail => "Detail",
        }
    }
}
