//! Runtime representation of a record: an ordered, name-unique set of
//! [`Field`]s, each holding a typed [`Value`] cell.

mod build;
pub(crate) use build::ModelBuilder;

mod datum;
pub use datum::Datum;

mod field;
pub use field::Field;

mod generate;
pub use generate::Generator;

mod value;
pub use value::Value;

mod view;

use crate::{Result, Type};
use indexmap::IndexMap;

/// An ordered set of fields with exactly one primary key.
///
/// Models are only produced by traversal of a record shape, which enforces
/// that names are unique, that at least one field exists and that exactly
/// one field is the primary key.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the record shape
    name: String,

    /// Namespace the record shape was declared in
    namespace: String,

    /// Fields, in member declaration order, keyed by declared name
    fields: IndexMap<String, Field>,

    /// Position of the primary key in `fields`
    primary: usize,
}

impl Model {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace-qualified name of the record shape.
    pub fn pkg_key(&self) -> String {
        self.ty().pkg_key()
    }

    /// The struct type describing this model's shape.
    pub fn ty(&self) -> Type {
        Type::structure(&self.name, &self.namespace)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn fields_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Field> + '_ {
        self.fields.values_mut()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Looks a field up by the declaration index of its record member.
    pub fn field_by_index(&self, index: usize) -> Option<&Field> {
        self.fields.values().find(|field| field.index() == index)
    }

    pub fn field_by_index_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.values_mut().find(|field| field.index() == index)
    }

    pub fn primary_field(&self) -> &Field {
        &self.fields[self.primary]
    }

    pub fn primary_field_mut(&mut self) -> &mut Field {
        &mut self.fields[self.primary]
    }

    /// Shorthand for reading a field's datum.
    pub fn get(&self, name: &str) -> Option<&crate::Datum> {
        self.field(name)?.value().get()
    }

    /// Shorthand for setting a field's datum.
    pub fn set(&mut self, name: &str, datum: impl Into<Option<crate::Datum>>) -> Result<()> {
        let pkg_key = self.pkg_key();
        let Some(field) = self.field_mut(name) else {
            crate::bail!("no field `{name}` in `{pkg_key}`");
        };
        field.value_mut().set(datum.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: models without fields are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Two models are equal when their field lists are pairwise equal. Field
/// data only takes part through its nil-ness.
impl PartialEq for Model {
    fn eq(&self, other: &Model) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .values()
                .zip(other.fields.values())
                .all(|(a, b)| a == b)
    }
}
