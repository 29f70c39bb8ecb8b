use std::fmt;

/// A declarative validation directive attached to a field.
///
/// Directives are exposed for an external validator; nothing in this crate
/// evaluates them.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    ReadOnly,
    WriteOnly,
    Immutable,
    Min(f64),
    Max(f64),
    In(Vec<String>),
}

impl Constraint {
    /// Parses a comma separated directive list. Unknown or malformed
    /// directives are skipped.
    pub fn parse_list(decl: &str) -> Vec<Constraint> {
        decl.split(',').filter_map(Constraint::parse).collect()
    }

    /// Parses a single directive.
    pub fn parse(token: &str) -> Option<Constraint> {
        let token = token.trim();

        if let Some((key, arg)) = token.split_once('=') {
            let arg = arg.trim();
            return match key.trim() {
                "min" => arg.parse().ok().map(Constraint::Min),
                "max" => arg.parse().ok().map(Constraint::Max),
                "in" => Some(Constraint::In(
                    arg.split(':')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(String::from)
                        .collect(),
                )),
                _ => None,
            };
        }

        match token {
            "required" | "req" => Some(Constraint::Required),
            "readonly" | "ro" => Some(Constraint::ReadOnly),
            "writeonly" | "wo" => Some(Constraint::WriteOnly),
            "immutable" | "imd" => Some(Constraint::Immutable),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("required"),
            Constraint::ReadOnly => f.write_str("readonly"),
            Constraint::WriteOnly => f.write_str("writeonly"),
            Constraint::Immutable => f.write_str("immutable"),
            Constraint::Min(min) => write!(f, "min={min}"),
            Constraint::Max(max) => write!(f, "max={max}"),
            Constraint::In(items) => write!(f, "in={}", items.join(":")),
        }
    }
}
