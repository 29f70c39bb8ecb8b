use crate::Type;
use std::fmt;

/// How a struct-valued field relates to its parent record.
///
/// The tag is a pure function of whether the field type is optional and
/// whether it is a sequence. Statement builders use it to choose between
/// inline columns and join tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// A plain nested record
    EmbeddedOne,

    /// A plain sequence of nested records
    EmbeddedMany,

    /// An optional nested record
    ReferencedOne,

    /// An optional sequence of nested records
    ReferencedMany,
}

impl Relation {
    /// Classifies struct and sequence of struct types. Returns `None` for
    /// basic types.
    pub fn classify(ty: &Type) -> Option<Relation> {
        ty.depend()?;

        Some(match (ty.is_pointer(), ty.is_slice()) {
            (false, false) => Relation::EmbeddedOne,
            (false, true) => Relation::EmbeddedMany,
            (true, false) => Relation::ReferencedOne,
            (true, true) => Relation::ReferencedMany,
        })
    }

    #[must_use]
    pub fn is_many(&self) -> bool {
        matches!(self, Self::EmbeddedMany | Self::ReferencedMany)
    }

    #[must_use]
    pub fn is_referenced(&self) -> bool {
        matches!(self, Self::ReferencedOne | Self::ReferencedMany)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::EmbeddedOne => "embedded-one",
            Relation::EmbeddedMany => "embedded-many",
            Relation::ReferencedOne => "referenced-one",
            Relation::ReferencedMany => "referenced-many",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn four_way() {
        let one = Type::structure("Profile", "app");
        let many = Type::slice(one.clone()).unwrap();

        assert_eq!(Relation::classify(&one), Some(Relation::EmbeddedOne));
        assert_eq!(Relation::classify(&many), Some(Relation::EmbeddedMany));
        assert_eq!(
            Relation::classify(&one.clone().into_pointer()),
            Some(Relation::ReferencedOne)
        );
        assert_eq!(
            Relation::classify(&many.into_pointer()),
            Some(Relation::ReferencedMany)
        );
    }

    #[test]
    fn basic_types_have_no_relation() {
        assert_eq!(Relation::classify(&Type::scalar(Kind::I64)), None);
        assert_eq!(
            Relation::classify(&Type::slice(Type::scalar(Kind::String)).unwrap()),
            None
        );
    }
}
