//! Bindings that build [`Model`]s from records.
//!
//! [`Local`] works on native records through their compile-time [`Shape`];
//! [`Remote`] works on wire [`Object`] graphs when the native record type is
//! not available. Both produce models that compare equal field for field.

mod entity;
pub use entity::{Entity, Member, Shape};

mod local;
pub use local::Local;

mod primitive;
pub use primitive::Primitive;

mod remote;
pub use remote::{Object, ObjectField, ObjectValue, Remote, SpecDesc, TypeDesc};

mod traversal;
use traversal::Traversal;

use crate::{Error, Filter, Model, Result, Type, Value, View};

/// Operations shared by every binding, where `E` is the binding's record
/// representation.
pub trait Provider<E: ?Sized> {
    /// The struct type of the record, with its template attached.
    fn get_entity_type(&self, entity: &E) -> Result<Type>;

    /// The record as a struct value.
    fn get_entity_value(&self, entity: &E) -> Result<Value>;

    /// The record as a model, materialized under `view`.
    fn get_entity_model(&self, entity: &E, view: &View) -> Result<Model>;

    /// A filter bound to a copy of `model` materialized under `view`.
    fn get_model_filter(&self, model: &Model, view: &View) -> Result<Filter> {
        Filter::new(model, view)
    }

    /// Copies the fields of a struct value into `model`.
    fn set_model_value(&self, model: &mut Model, value: &Value) -> Result<()> {
        set_model_value(model, value)
    }

    /// Appends `item` to a sequence value.
    fn append_sequence_value(&self, seq: &mut Value, item: Value) -> Result<()> {
        append_sequence_value(seq, item)
    }
}

fn set_model_value(model: &mut Model, value: &Value) -> Result<()> {
    if !value.ty().is_struct() || value.ty().pkg_key() != model.pkg_key() {
        return Err(Error::shape_mismatch(model.pkg_key(), value.ty().pkg_key()));
    }

    let Some(source) = value.get().and_then(|datum| datum.as_struct()) else {
        return Err(Error::set_type_mismatch(model.pkg_key(), "nil"));
    };

    for field in source.fields() {
        if let Some(target) = model.field_mut(field.name()) {
            target.value_mut().set_value(field.value())?;
        }
    }

    Ok(())
}

fn append_sequence_value(seq: &mut Value, item: Value) -> Result<()> {
    let item_ty = item.ty().to_string();
    match item.into_datum() {
        Some(datum) => seq.push(datum),
        None => Err(Error::set_type_mismatch(seq.ty().elem().to_string(), item_ty)),
    }
}
