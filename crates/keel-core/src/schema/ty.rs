use super::Kind;
use crate::{codec, model::Datum, Error, Model, Result, Scalar, Value, View};
use std::{fmt, sync::Arc};

/// Describes the shape of a field.
///
/// Scalar types are named after their kind. Struct types carry the name and
/// namespace of the record they describe, plus the record's template model
/// once traversal has built it. Slice types wrap their element type.
#[derive(Clone)]
pub struct Type {
    name: String,
    namespace: String,
    kind: Kind,
    pointer: bool,
    elem: Option<Box<Type>>,

    /// Template of the nested record, for struct types. Used to allocate
    /// zero instances; ignored by equality.
    template: Option<Arc<Model>>,
}

impl Type {
    /// A non-pointer scalar type.
    ///
    /// # Panics
    ///
    /// Debug builds assert that `kind` is a scalar kind.
    pub fn scalar(kind: Kind) -> Type {
        debug_assert!(kind.is_scalar(), "not a scalar kind: {kind}");
        Type {
            name: kind.name().to_string(),
            namespace: String::new(),
            kind,
            pointer: false,
            elem: None,
            template: None,
        }
    }

    /// A non-pointer struct type without a template.
    pub fn structure(name: impl Into<String>, namespace: impl Into<String>) -> Type {
        Type {
            name: name.into(),
            namespace: namespace.into(),
            kind: Kind::Struct,
            pointer: false,
            elem: None,
            template: None,
        }
    }

    /// A non-pointer sequence of `elem`.
    ///
    /// Sequence elements are never nil and never sequences themselves; both
    /// are rejected with `UnsupportedKind`.
    pub fn slice(elem: Type) -> Result<Type> {
        if elem.pointer {
            return Err(Error::unsupported_kind(format!("slice of optional {}", elem.name)));
        }

        if elem.is_slice() {
            return Err(Error::unsupported_kind(format!("slice of {}", elem.name)));
        }

        Ok(Type {
            name: format!("Vec<{}>", elem.name),
            namespace: elem.namespace.clone(),
            kind: Kind::Slice,
            pointer: false,
            elem: Some(Box::new(elem)),
            template: None,
        })
    }

    /// Builds a type from its wire parts.
    pub fn from_parts(
        name: impl Into<String>,
        namespace: impl Into<String>,
        kind: Kind,
        pointer: bool,
        elem: Option<Type>,
    ) -> Result<Type> {
        let mut ty = match (kind, elem) {
            (Kind::Slice, Some(elem)) => Type::slice(elem)?,
            (Kind::Slice, None) => return Err(Error::unsupported_kind("slice without element")),
            (Kind::Struct, _) => Type::structure(name, namespace),
            (kind, _) => Type::scalar(kind),
        };
        ty.pointer = pointer;
        Ok(ty)
    }

    /// Returns the optional form of this type.
    ///
    /// Optional types admit nil values.
    pub fn into_pointer(mut self) -> Type {
        self.pointer = true;
        self
    }

    /// Attaches the template of the nested record to a struct type, or to the
    /// element of a sequence of structs.
    pub fn with_template(mut self, template: Arc<Model>) -> Type {
        match self.elem.as_mut() {
            Some(elem) => elem.template = Some(template),
            None => self.template = Some(template),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace-qualified name, used as cache and lookup key.
    pub fn pkg_key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    pub fn is_slice(&self) -> bool {
        self.kind == Kind::Slice
    }

    pub fn is_struct(&self) -> bool {
        self.kind == Kind::Struct
    }

    /// The item type of a sequence, or the type itself otherwise.
    pub fn elem(&self) -> &Type {
        self.elem.as_deref().unwrap_or(self)
    }

    /// Returns `true` unless the element type is a struct.
    pub fn is_basic(&self) -> bool {
        !self.elem().is_struct()
    }

    /// The struct type this type depends on, for struct and sequence of
    /// struct types.
    pub fn depend(&self) -> Option<&Type> {
        let elem = self.elem();
        elem.is_struct().then_some(elem)
    }

    pub fn template(&self) -> Option<&Arc<Model>> {
        self.template.as_ref()
    }

    /// Allocates a value of this type.
    ///
    /// Without a seed the value holds the zero datum, allocating optional
    /// types. A `NULL` seed yields nil for optional types and the zero datum
    /// otherwise. Any other seed is coerced to this type's kind, so `"42"`
    /// seeds an `i32` as `42` after a range check.
    pub fn construct(&self, seed: Option<&Scalar>) -> Result<Value> {
        let datum = match seed {
            None => Some(self.zero_datum()?),
            Some(Scalar::Null) if self.pointer => None,
            Some(Scalar::Null) => Some(self.zero_datum()?),
            Some(seed) => Some(codec::decode_datum(self, seed)?),
        };

        Value::new(self.clone(), datum)
    }

    /// The zero datum of this type, ignoring pointer-ness.
    pub fn zero_datum(&self) -> Result<Datum> {
        Ok(match self.kind {
            Kind::Bool => Datum::Bool(false),
            Kind::I8 => Datum::I8(0),
            Kind::I16 => Datum::I16(0),
            Kind::I32 => Datum::I32(0),
            Kind::I64 => Datum::I64(0),
            Kind::U8 => Datum::U8(0),
            Kind::U16 => Datum::U16(0),
            Kind::U32 => Datum::U32(0),
            Kind::U64 => Datum::U64(0),
            Kind::F32 => Datum::F32(0.0),
            Kind::F64 => Datum::F64(0.0),
            Kind::String => Datum::String(String::new()),
            Kind::DateTime => Datum::DateTime(Datum::ZERO_DATETIME),
            Kind::Slice => Datum::List(vec![]),
            Kind::Struct => {
                let Some(template) = &self.template else {
                    crate::bail!("struct type `{}` has no template", self.pkg_key());
                };
                Datum::Struct(Box::new(template.copy(&View::Meta)?))
            }
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Type) -> bool {
        self.name == other.name
            && self.namespace == other.namespace
            && self.kind == other.kind
            && self.pointer == other.pointer
            && self.elem == other.elem
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_struct("Type");
        t.field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("pointer", &self.pointer);
        if let Some(elem) = &self.elem {
            t.field("elem", elem);
        }
        t.finish()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer {
            write!(f, "Option<{}>", self.pkg_key())
        } else {
            f.write_str(&self.pkg_key())
        }
    }
}
