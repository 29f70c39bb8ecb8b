mod object;
pub use object::{Object, ObjectField, ObjectValue, SpecDesc, TypeDesc};

use super::{Provider, Traversal};
use crate::{
    codec::{self, DATETIME_LAYOUT},
    model::ModelBuilder,
    Cache, Config, Datum, Error, Kind, Model, Result, Scalar, Source, Spec, Type, Value, View,
};
use std::sync::Arc;

/// Builds models from wire [`Object`] graphs, without the native record
/// type.
///
/// Objects describe their own fields, so any object is enough to build the
/// template of its shape. Templates share the cache with [`Local`] under
/// the same keys but are stored as [`Source::Remote`], which `Local` never
/// reuses. A native template, when present, is used as is and every object
/// field must agree with it by index, name and type.
///
/// [`Local`]: super::Local
#[derive(Debug, Clone, Default)]
pub struct Remote {
    cache: Arc<Cache>,
    config: Config,
}

impl Remote {
    pub fn new(cache: Arc<Cache>, config: Config) -> Remote {
        Remote { cache, config }
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    /// The cached template of the object's shape, built on first use.
    pub fn template(&self, object: &Object) -> Result<Arc<Model>> {
        let mut traversal = Traversal::new(self.config.max_depth);
        self.build(object, &mut traversal)
    }

    fn build(&self, object: &Object, traversal: &mut Traversal) -> Result<Arc<Model>> {
        let key = object.pkg_key();
        if let Some(template) = self.cache.get(&key) {
            return Ok(template);
        }

        traversal.enter(&key)?;
        let template = self
            .cache
            .get_or_try_insert_from(&key, Source::Remote, || self.traverse(object, traversal));
        traversal.exit();

        template
    }

    fn traverse(&self, object: &Object, traversal: &mut Traversal) -> Result<Model> {
        tracing::debug!(shape = %object.pkg_key(), "building template from object");

        let mut builder = ModelBuilder::new(&object.name, &object.namespace);

        for field in &object.fields {
            let spec = Spec::parse(
                field.spec.spec.as_deref(),
                field.spec.view.as_deref(),
                field.spec.constraint.as_deref(),
                &field.name,
            );
            let ty = self.type_of(&field.ty, traversal);
            builder.push(field.index, spec, ty)?;
        }

        builder.finish()
    }

    fn type_of(&self, desc: &TypeDesc, traversal: &mut Traversal) -> Result<Type> {
        let kind = Kind::from_name(&desc.kind)?;
        let elem = desc
            .elem
            .as_deref()
            .map(|elem| self.type_of(elem, traversal))
            .transpose()?;

        let ty = Type::from_parts(&desc.name, &desc.namespace, kind, desc.pointer, elem)?;
        if !ty.is_struct() {
            return Ok(ty);
        }

        let template = match &desc.shape {
            Some(shape) => Some(self.build(shape, traversal)?),
            None => self.cache.get(&ty.pkg_key()),
        };

        Ok(match template {
            Some(template) => ty.with_template(template),
            None => ty,
        })
    }

    /// Builds the model of an object with all data present.
    fn populate(&self, object: &Object) -> Result<Model> {
        let key = object.pkg_key();
        let mut model = Model::clone(&*self.template(object)?);

        for field in &object.fields {
            let Some(target) = model.field_by_index_mut(field.index) else {
                return Err(Error::shape_mismatch(
                    format!("{key} with a field at index {}", field.index),
                    format!("{key}.{}", field.name),
                ));
            };

            if target.name() != field.name || !describes(&field.ty, target.ty()) {
                return Err(Error::shape_mismatch(
                    format!("{key}.{} {}", target.name(), target.ty()),
                    format!("{key}.{} {}", field.name, field.ty.kind),
                ));
            }

            let datum = self.datum_of(target.ty(), &field.value)?;
            target.value_mut().set(datum)?;
        }

        Ok(model)
    }

    fn datum_of(&self, ty: &Type, value: &ObjectValue) -> Result<Option<Datum>> {
        let mismatch = || Error::set_type_mismatch(ty.to_string(), value.kind_name());

        let scalar = match value {
            ObjectValue::Nil => return Ok(None),
            ObjectValue::Object(object) if ty.is_struct() => {
                return Ok(Some(Datum::Struct(Box::new(self.populate(object)?))));
            }
            ObjectValue::List(items) if ty.is_slice() => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(self.datum_of(ty.elem(), item)?.ok_or_else(mismatch)?);
                }
                return Ok(Some(Datum::List(list)));
            }
            ObjectValue::Object(_) | ObjectValue::List(_) => return Err(mismatch()),
            _ if ty.is_struct() || ty.is_slice() => return Err(mismatch()),
            ObjectValue::Bool(v) => Scalar::I8(i8::from(*v)),
            ObjectValue::Int(v) => Scalar::I64(*v),
            ObjectValue::UInt(v) => Scalar::U64(*v),
            ObjectValue::Float(v) => Scalar::F64(*v),
            ObjectValue::String(v) => Scalar::String(v.clone()),
        };

        codec::decode_datum(ty, &scalar).map(Some)
    }

    /// Produces the wire graph of a model, whichever binding built it.
    pub fn object_of(model: &Model) -> Result<Object> {
        let fields = model
            .fields()
            .map(|field| {
                Ok(ObjectField {
                    index: field.index(),
                    name: field.name().to_string(),
                    ty: type_desc(field.ty())?,
                    spec: SpecDesc::from(field.spec()),
                    value: object_value(field.value().get())?,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Object {
            name: model.name().to_string(),
            namespace: model.namespace().to_string(),
            fields,
        })
    }

    /// Rebuilds the wire graph from a model's current values.
    pub fn interface(&self, model: &Model) -> Result<Object> {
        Remote::object_of(model)
    }
}

/// Whether a wire type names the same type as `ty`. Nested shapes are
/// checked when their values are populated.
fn describes(desc: &TypeDesc, ty: &Type) -> bool {
    let elem = match &desc.elem {
        Some(elem) => ty.is_slice() && describes(elem, ty.elem()),
        None => !ty.is_slice(),
    };

    let shape = !ty.is_struct() || (desc.name == ty.name() && desc.namespace == ty.namespace());

    elem && shape && desc.kind == ty.kind().name() && desc.pointer == ty.is_pointer()
}

fn type_desc(ty: &Type) -> Result<TypeDesc> {
    let elem = if ty.is_slice() {
        Some(Box::new(type_desc(ty.elem())?))
    } else {
        None
    };

    let shape = match ty.template() {
        Some(template) if ty.is_struct() => Some(Box::new(Remote::object_of(template)?)),
        _ => None,
    };

    Ok(TypeDesc {
        name: ty.name().to_string(),
        namespace: ty.namespace().to_string(),
        kind: ty.kind().name().to_string(),
        pointer: ty.is_pointer(),
        elem,
        shape,
    })
}

fn object_value(datum: Option<&Datum>) -> Result<ObjectValue> {
    let Some(datum) = datum else {
        return Ok(ObjectValue::Nil);
    };

    Ok(match datum {
        Datum::Bool(v) => ObjectValue::Bool(*v),
        Datum::I8(v) => ObjectValue::Int(i64::from(*v)),
        Datum::I16(v) => ObjectValue::Int(i64::from(*v)),
        Datum::I32(v) => ObjectValue::Int(i64::from(*v)),
        Datum::I64(v) => ObjectValue::Int(*v),
        Datum::U8(v) => ObjectValue::UInt(u64::from(*v)),
        Datum::U16(v) => ObjectValue::UInt(u64::from(*v)),
        Datum::U32(v) => ObjectValue::UInt(u64::from(*v)),
        Datum::U64(v) => ObjectValue::UInt(*v),
        Datum::F32(v) => ObjectValue::Float(f64::from(*v)),
        Datum::F64(v) => ObjectValue::Float(*v),
        Datum::String(v) => ObjectValue::String(v.clone()),
        Datum::DateTime(v) if *v == Datum::ZERO_DATETIME => ObjectValue::String(String::new()),
        Datum::DateTime(v) => ObjectValue::String(v.strftime(DATETIME_LAYOUT).to_string()),
        Datum::Struct(model) => ObjectValue::Object(Remote::object_of(model)?),
        Datum::List(items) => ObjectValue::List(
            items
                .iter()
                .map(|item| object_value(Some(item)))
                .collect::<Result<_>>()?,
        ),
    })
}

impl Provider<Object> for Remote {
    fn get_entity_type(&self, object: &Object) -> Result<Type> {
        let template = self.template(object)?;
        Ok(Type::structure(&object.name, &object.namespace).with_template(template))
    }

    fn get_entity_value(&self, object: &Object) -> Result<Value> {
        let model = self.populate(object)?;
        Value::new(self.get_entity_type(object)?, Some(Datum::Struct(Box::new(model))))
    }

    fn get_entity_model(&self, object: &Object, view: &View) -> Result<Model> {
        tracing::debug!(shape = %object.pkg_key(), %view, "remote model");

        let mut model = self.populate(object)?;
        model.materialize(view)?;
        Ok(model)
    }
}
