//! Query conditions bound to a model.

use crate::{codec, Error, Model, Result, Scalar, Type, Value, View};
use std::fmt;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Equal,
    NotEqual,
    Below,
    Above,
    In,
    NotIn,
    Like,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Equal => "=",
            Op::NotEqual => "!=",
            Op::Below => "<",
            Op::Above => ">",
            Op::In => "in",
            Op::NotIn => "not in",
            Op::Like => "like",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where `like` adds `%` wildcards to the supplied pattern.
///
/// The pattern itself is used verbatim; callers that already wrote their
/// own wildcards pass [`Wildcard::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wildcard {
    #[default]
    None,
    Prefix,
    Suffix,
    Both,
}

impl Wildcard {
    pub fn apply(self, pattern: &str) -> String {
        match self {
            Wildcard::None => pattern.to_string(),
            Wildcard::Prefix => format!("%{pattern}"),
            Wildcard::Suffix => format!("{pattern}%"),
            Wildcard::Both => format!("%{pattern}%"),
        }
    }
}

/// A single `field op value` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    field: String,
    op: Op,
    value: Value,
}

impl Condition {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The comparison value encoded for a statement.
    pub fn scalar(&self) -> Result<Scalar> {
        codec::encode(&self.value)
    }
}

/// Conditions over a private copy of a model materialized under a view.
///
/// Every operator checks the comparison value's type against the bound
/// field's type before accepting it. Conditions are kept in call order.
#[derive(Debug, Clone)]
pub struct Filter {
    model: Model,
    view: View,
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new(model: &Model, view: &View) -> Result<Filter> {
        Ok(Filter {
            model: model.copy(view)?,
            view: view.clone(),
            conditions: vec![],
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn equal(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.push(field, Op::Equal, value.into())
    }

    pub fn not_equal(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.push(field, Op::NotEqual, value.into())
    }

    pub fn below(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.push(field, Op::Below, value.into())
    }

    pub fn above(&mut self, field: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.push(field, Op::Above, value.into())
    }

    /// `values` must be a sequence whose element type matches the field.
    pub fn in_list(&mut self, field: &str, values: Value) -> Result<&mut Self> {
        self.push(field, Op::In, values)
    }

    /// `values` must be a sequence whose element type matches the field.
    pub fn not_in(&mut self, field: &str, values: Value) -> Result<&mut Self> {
        self.push(field, Op::NotIn, values)
    }

    /// Matches a string field against `pattern`, wrapped per `wildcard`.
    pub fn like(&mut self, field: &str, pattern: &str, wildcard: Wildcard) -> Result<&mut Self> {
        self.push(field, Op::Like, Value::from(wildcard.apply(pattern)))
    }

    fn push(&mut self, field: &str, op: Op, value: Value) -> Result<&mut Self> {
        let Some(bound) = self.model.field(field) else {
            return Err(Error::invalid_filter(format!(
                "no field `{field}` in `{}`",
                self.model.pkg_key()
            )));
        };
        let ty = bound.ty();

        let ok = match op {
            Op::Equal | Op::NotEqual if value.is_nil() => ty.is_pointer(),
            Op::Equal | Op::NotEqual => same_shape(ty, value.ty()),
            Op::Below | Op::Above => {
                ty.kind().is_ordered() && same_shape(ty, value.ty()) && !value.is_nil()
            }
            Op::In | Op::NotIn => {
                value.ty().is_slice()
                    && !ty.is_slice()
                    && same_shape(ty, value.ty().elem())
                    && !value.is_nil()
            }
            Op::Like => ty.kind() == crate::Kind::String && same_shape(ty, value.ty()),
        };

        if !ok {
            return Err(Error::invalid_filter(format!(
                "cannot compare `{field}` ({ty}) {op} {}",
                value.ty()
            )));
        }

        tracing::trace!(field, %op, "adding filter condition");

        self.conditions.push(Condition {
            field: field.to_string(),
            op,
            value,
        });

        Ok(self)
    }
}

/// Type equality ignoring optional-ness.
fn same_shape(a: &Type, b: &Type) -> bool {
    a.kind() == b.kind() && a.pkg_key() == b.pkg_key()
}
