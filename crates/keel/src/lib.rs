pub mod orm;
pub use orm::{Builder, Orm};

pub use keel_macros::Entity;

pub use keel_core::{
    codec, filter, model, provider, relation, schema, AutoStrategy, Cache, Config, Constraint,
    Datum, Entity, Error, Field, Filter, Generator, Kind, Local, Model, Object,
    Primitive, Provider, Relation, Remote, Result, Scalar, Shape, Source, Spec, Type, Value, View,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use keel_core::{
        Datum, Entity, Error, Local, Member, Primitive, Result, Shape, Type,
    };
    pub use std::{
        default::Default,
        iter::{IntoIterator, Iterator},
        option::Option,
        vec,
        vec::Vec,
    };

    /// Placeholder type of a member without `#[orm]`; never consulted.
    pub fn undeclared_type() -> Result<Type> {
        Err(Error::unsupported_kind("undeclared"))
    }

    pub fn undeclared_shape() -> Option<Shape> {
        None
    }
}
