use super::Local;
use crate::{model::Datum, Result, Type};

/// Compile-time description of a record shape.
///
/// Generated by `#[derive(Entity)]`; may also be written by hand.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Name of the record type
    pub name: &'static str,

    /// Module path the record type is declared in
    pub namespace: &'static str,

    /// Described members, in declaration order
    pub members: Vec<Member>,
}

impl Shape {
    /// Namespace-qualified name, matching [`Type::pkg_key`].
    pub fn pkg_key(&self) -> String {
        Type::structure(self.name, self.namespace).pkg_key()
    }
}

/// One record member.
#[derive(Debug, Clone)]
pub struct Member {
    /// Declaration position inside the record
    pub index: usize,

    /// Member identifier, used as the field name when `spec` names none
    pub ident: &'static str,

    /// Field declaration, `name [key] [auto|uuid|snowflake|datetime]`
    pub spec: Option<&'static str>,

    /// Comma separated list of named views
    pub view: Option<&'static str>,

    /// Comma separated list of validation directives
    pub constraint: Option<&'static str>,

    /// Builds the member's type
    pub ty: fn() -> Result<Type>,

    /// Shape of the nested record, for struct and sequence of struct members
    pub shape: fn() -> Option<Shape>,
}

impl Member {
    /// Returns `false` for members that carry no declaration at all. Those
    /// are left out of the model.
    pub fn is_declared(&self) -> bool {
        self.spec.is_some() || self.view.is_some() || self.constraint.is_some()
    }
}

/// A native record that converts to and from a [`Model`](crate::Model).
pub trait Entity: Sized {
    /// The record's shape descriptor.
    fn shape() -> Shape;

    /// Data of each member in [`Shape::members`] order.
    fn dump(&self, local: &Local) -> Result<Vec<Option<Datum>>>;

    /// Rebuilds a record from data in [`Shape::members`] order. Members
    /// without data take their default.
    fn load(local: &Local, data: Vec<Option<Datum>>) -> Result<Self>;
}
