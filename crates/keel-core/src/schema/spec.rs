use super::{AutoStrategy, Constraint, View};

/// Parsed per-field declaration.
///
/// A declaration reads `name [key] [auto|uuid|snowflake|datetime]`. Tokens
/// after the name may come in any order, and unknown tokens are ignored so
/// that older builds accept newer declarations. Views and constraints are
/// declared separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    /// Declared field name
    name: String,

    /// True when the field is the model's primary key
    primary_key: bool,

    /// How the value is generated, `None` when supplied by the caller
    auto: Option<AutoStrategy>,

    /// Named views the field takes part in
    views: Vec<String>,

    /// Validation directives
    constraints: Vec<Constraint>,

    /// Raw declarations, kept so the declaration can travel on the wire unchanged
    decl: Declaration,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Declaration {
    spec: Option<String>,
    view: Option<String>,
    constraint: Option<String>,
}

impl Spec {
    /// Parses a field declaration. `ident` names the field when the
    /// declaration does not.
    pub fn parse(
        spec: Option<&str>,
        view: Option<&str>,
        constraint: Option<&str>,
        ident: &str,
    ) -> Spec {
        let mut tokens = spec.unwrap_or_default().split_whitespace();

        let name = tokens.next().unwrap_or(ident).to_string();
        let mut primary_key = false;
        let mut auto = None;

        for token in tokens {
            if token == "key" {
                primary_key = true;
            } else if let Some(strategy) = AutoStrategy::from_token(token) {
                auto = Some(strategy);
            }
        }

        let views = view
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|view| !view.is_empty())
            .map(String::from)
            .collect();

        Spec {
            name,
            primary_key,
            auto,
            views,
            constraints: constraint.map(Constraint::parse_list).unwrap_or_default(),
            decl: Declaration {
                spec: spec.map(String::from),
                view: view.map(String::from),
                constraint: constraint.map(String::from),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn auto(&self) -> Option<&AutoStrategy> {
        self.auto.as_ref()
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns `true` if the field is materialized under `view`.
    ///
    /// `meta` and `origin` never filter.
    pub fn enable_view(&self, view: &View) -> bool {
        match view {
            View::Origin | View::Meta => true,
            View::Named(name) => self.views.iter().any(|v| v == name),
        }
    }

    /// The raw field declaration.
    pub fn spec_decl(&self) -> Option<&str> {
        self.decl.spec.as_deref()
    }

    /// The raw view list declaration.
    pub fn view_decl(&self) -> Option<&str> {
        self.decl.view.as_deref()
    }

    /// The raw constraint declaration.
    pub fn constraint_decl(&self) -> Option<&str> {
        self.decl.constraint.as_deref()
    }
}
