use super::{Field, Model, Value};
use crate::{Error, Result, Spec, Type};
use indexmap::IndexMap;

/// Accumulates fields in member order while enforcing model invariants.
///
/// Checks run per member in this order: the member type, a second primary
/// key, a repeated name. Once all members are pushed, [`finish`] rejects
/// models without fields, then models without a primary key.
///
/// [`finish`]: ModelBuilder::finish
#[derive(Debug)]
pub(crate) struct ModelBuilder {
    name: String,
    namespace: String,
    fields: IndexMap<String, Field>,
    primary: Option<usize>,
}

impl ModelBuilder {
    pub(crate) fn new(name: impl Into<String>, namespace: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            namespace: namespace.into(),
            fields: IndexMap::new(),
            primary: None,
        }
    }

    fn pkg_key(&self) -> String {
        Type::structure(&self.name, &self.namespace).pkg_key()
    }

    /// Adds a member. `ty` is the outcome of building the member's type; an
    /// unsupported kind is reported as an unsupported type naming the member.
    pub(crate) fn push(&mut self, index: usize, spec: Spec, ty: Result<Type>) -> Result<()> {
        let ty = ty.map_err(|err| {
            if err.is_unsupported_kind() && !err.is_unsupported_type() {
                err.context(Error::unsupported_type(self.pkg_key(), spec.name()))
            } else {
                err
            }
        })?;

        if spec.is_primary_key() && self.primary.is_some() {
            return Err(Error::duplicate_primary_key(self.pkg_key(), spec.name()));
        }

        if self.fields.contains_key(spec.name()) {
            return Err(Error::duplicate_field_name(self.pkg_key(), spec.name()));
        }

        if spec.is_primary_key() {
            self.primary = Some(self.fields.len());
        }

        let value = Value::default_of(ty)?;
        self.fields
            .insert(spec.name().to_string(), Field::new(index, spec, value));

        Ok(())
    }

    pub(crate) fn finish(self) -> Result<Model> {
        if self.fields.is_empty() {
            return Err(Error::no_fields(self.pkg_key()));
        }

        let Some(primary) = self.primary else {
            return Err(Error::no_primary_key(self.pkg_key()));
        };

        Ok(Model {
            name: self.name,
            namespace: self.namespace,
            fields: self.fields,
            primary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    fn spec(decl: &str) -> Spec {
        Spec::parse(Some(decl), None, None, "")
    }

    fn int() -> Result<Type> {
        Ok(Type::scalar(Kind::I64))
    }

    #[test]
    fn builds_in_member_order() {
        let mut builder = ModelBuilder::new("User", "app");
        builder.push(0, spec("name"), Ok(Type::scalar(Kind::String))).unwrap();
        builder.push(2, spec("id key"), int()).unwrap();

        let model = builder.finish().unwrap();
        let names: Vec<_> = model.fields().map(|field| field.name()).collect();
        assert_eq!(names, ["name", "id"]);
        assert_eq!(model.primary_field().name(), "id");
        assert_eq!(model.field_by_index(2).unwrap().name(), "id");
        assert_eq!(model.pkg_key(), "app/User");
    }

    #[test]
    fn unsupported_member() {
        let mut builder = ModelBuilder::new("User", "app");
        let err = builder
            .push(0, spec("labels"), Err(Error::unsupported_kind("map")))
            .unwrap_err();

        assert!(err.is_unsupported_type());
        assert_eq!(
            err.to_string(),
            "unsupported type for member `labels` of `app/User`: unsupported kind: map"
        );
    }

    #[test]
    fn duplicate_primary_key_wins_over_duplicate_name() {
        let mut builder = ModelBuilder::new("User", "app");
        builder.push(0, spec("id key"), int()).unwrap();
        let err = builder.push(1, spec("id key"), int()).unwrap_err();
        assert!(err.is_duplicate_primary_key());
    }

    #[test]
    fn duplicate_name() {
        let mut builder = ModelBuilder::new("User", "app");
        builder.push(0, spec("id key"), int()).unwrap();
        let err = builder.push(1, spec("id"), int()).unwrap_err();
        assert!(err.is_duplicate_field_name());
    }

    #[test]
    fn empty_and_keyless() {
        let err = ModelBuilder::new("User", "app").finish().unwrap_err();
        assert!(err.is_no_fields());

        let mut builder = ModelBuilder::new("User", "app");
        builder.push(0, spec("name"), int()).unwrap();
        assert!(builder.finish().unwrap_err().is_no_primary_key());
    }
}
