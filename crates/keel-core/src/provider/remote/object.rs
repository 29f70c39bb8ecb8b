use crate::{Spec, Type};
use serde::{Deserialize, Serialize};

/// A record on the wire: its shape identity and its fields, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub namespace: String,
    pub fields: Vec<ObjectField>,
}

impl Object {
    pub fn pkg_key(&self) -> String {
        Type::structure(&self.name, &self.namespace).pkg_key()
    }

    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub index: usize,
    pub name: String,
    pub ty: TypeDesc,
    pub spec: SpecDesc,
    pub value: ObjectValue,
}

/// Wire form of a [`Type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDesc {
    pub name: String,
    pub namespace: String,

    /// One of the [`Kind`](crate::Kind) names
    pub kind: String,

    pub pointer: bool,

    /// Element type of a sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<Box<TypeDesc>>,

    /// Template of the nested record, for struct types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Box<Object>>,
}

/// Wire form of a [`Spec`]: the raw declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecDesc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl From<&Spec> for SpecDesc {
    fn from(spec: &Spec) -> SpecDesc {
        SpecDesc {
            spec: spec.spec_decl().map(String::from),
            view: spec.view_decl().map(String::from),
            constraint: spec.constraint_decl().map(String::from),
        }
    }
}

/// A field value on the wire. Datetimes travel as `YYYY-MM-DD hh:mm:ss`
/// strings: sub-second precision is truncated, and the zero datetime is
/// the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ObjectValue {
    Nil,
    Bool(bool),
    Int(i64),
    #[serde(rename = "uint")]
    UInt(u64),
    Float(f64),
    String(String),
    Object(Object),
    List(Vec<ObjectValue>),
}

impl ObjectValue {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            ObjectValue::Nil => "nil",
            ObjectValue::Bool(_) => "bool",
            ObjectValue::Int(_) => "int",
            ObjectValue::UInt(_) => "uint",
            ObjectValue::Float(_) => "float",
            ObjectValue::String(_) => "string",
            ObjectValue::Object(_) => "object",
            ObjectValue::List(_) => "list",
        }
    }
}
