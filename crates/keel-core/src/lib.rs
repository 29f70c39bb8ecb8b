pub mod cache;
pub use cache::{Cache, Source};

pub mod codec;
pub use codec::Scalar;

mod config;
pub use config::Config;

#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod filter;
pub use filter::Filter;

pub mod model;
pub use model::{Datum, Field, Generator, Model, Value};

pub mod provider;
pub use provider::{Entity, Local, Member, Object, Primitive, Provider, Remote, Shape};

pub mod relation;
pub use relation::Relation;

pub mod schema;
pub use schema::{AutoStrategy, Constraint, Kind, Spec, Type, View};

/// A Result type alias that uses Keel's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
