use std::fmt;

/// Selects which fields of a model are materialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    /// Keep whatever data is present.
    Origin,

    /// Reset every field to its default, producing a fresh write template.
    Meta,

    /// A user-declared subset of fields, such as `detail` or `lite`.
    Named(String),
}

impl View {
    pub fn named(name: impl Into<String>) -> View {
        match name.into() {
            name if name.is_empty() || name == "origin" => View::Origin,
            name if name == "meta" => View::Meta,
            name => View::Named(name),
        }
    }

    pub fn detail() -> View {
        View::Named("detail".to_string())
    }

    pub fn lite() -> View {
        View::Named("lite".to_string())
    }

    pub fn name(&self) -> &str {
        match self {
            View::Origin => "origin",
            View::Meta => "meta",
            View::Named(name) => name,
        }
    }

    #[must_use]
    pub fn is_origin(&self) -> bool {
        matches!(self, Self::Origin)
    }

    #[must_use]
    pub fn is_meta(&self) -> bool {
        matches!(self, Self::Meta)
    }
}

impl Default for View {
    fn default() -> View {
        View::Origin
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for View {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<View, Self::Err> {
        Ok(View::named(s.trim()))
    }
}

impl From<&str> for View {
    fn from(value: &str) -> View {
        View::named(value)
    }
}
