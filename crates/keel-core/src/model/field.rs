use super::Value;
use crate::{Relation, Spec, Type};

/// One named, typed, valued member of a [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct Field {
    /// Declaration index of the record member
    index: usize,

    /// Declared name, unique within the model
    name: String,

    spec: Spec,

    value: Value,
}

impl Field {
    pub fn new(index: usize, spec: Spec, value: Value) -> Field {
        Field {
            index,
            name: spec.name().to_string(),
            spec,
            value,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn ty(&self) -> &Type {
        self.value.ty()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn is_primary_key(&self) -> bool {
        self.spec.is_primary_key()
    }

    /// Relation tag for struct and sequence of struct fields.
    pub fn relation(&self) -> Option<Relation> {
        Relation::classify(self.ty())
    }
}

/// Fields compare their data only through nil-ness.
impl PartialEq for Field {
    fn eq(&self, other: &Field) -> bool {
        self.index == other.index
            && self.name == other.name
            && self.is_primary_key() == other.is_primary_key()
            && self.ty() == other.ty()
            && self.spec == other.spec
            && self.value.is_nil() == other.value.is_nil()
    }
}
