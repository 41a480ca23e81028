// ── Navigation parameter ──
//
// Routers may hand a screen nothing, one value, or several values for the
// same parameter. The detail screen only ever wants one.

/// A raw navigation parameter as delivered by the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteParam {
    #[default]
    Missing,
    One(String),
    Many(Vec<String>),
}

impl RouteParam {
    /// Collapse to a single identifier: the value itself, or the first
    /// element of a list.
    pub fn normalize(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::One(value) => Some(value),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }
}

impl From<Option<String>> for RouteParam {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::One)
    }
}

impl From<Vec<String>> for RouteParam {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}
