use std::fmt;

/// How a field's value is generated when the caller does not supply one.
///
/// A field without a strategy is customer-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoStrategy {
    /// The database assigns an increasing integer.
    Increment,

    /// A random UUID, rendered as text.
    Uuid,

    /// A time-ordered 64-bit snowflake id.
    Snowflake,

    /// The current date and time.
    DateTime,
}

impl AutoStrategy {
    /// Parses a declaration token. Returns `None` for tokens that are not a
    /// generation strategy.
    pub fn from_token(token: &str) -> Option<AutoStrategy> {
        match token {
            "auto" => Some(AutoStrategy::Increment),
            "uuid" => Some(AutoStrategy::Uuid),
            "snowflake" => Some(AutoStrategy::Snowflake),
            "datetime" => Some(AutoStrategy::DateTime),
            _ => None,
        }
    }

    /// The declaration token for the strategy.
    pub const fn token(self) -> &'static str {
        match self {
            AutoStrategy::Increment => "auto",
            AutoStrategy::Uuid => "uuid",
            AutoStrategy::Snowflake => "snowflake",
            AutoStrategy::DateTime => "datetime",
        }
    }

    /// Returns `true` if the strategy is [`Increment`].
    ///
    /// [`Increment`]: AutoStrategy::Increment
    #[must_use]
    pub fn is_increment(&self) -> bool {
        matches!(self, Self::Increment)
    }

    /// Returns `true` if values are produced in-process rather than by the
    /// database.
    #[must_use]
    pub fn is_client_generated(&self) -> bool {
        !self.is_increment()
    }
}

impl fmt::Display for AutoStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
