use super::{Entity, Member, Object, Provider, Remote, Shape, Traversal};
use crate::{
    model::ModelBuilder, Cache, Config, Datum, Error, Filter, Model, Result, Spec, Type, Value,
    View,
};
use std::sync::Arc;

/// Builds models from native records through their [`Shape`].
#[derive(Debug, Clone, Default)]
pub struct Local {
    cache: Arc<Cache>,
    config: Config,
}

impl Local {
    pub fn new(cache: Arc<Cache>, config: Config) -> Local {
        Local { cache, config }
    }

    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cached template of `T`, built on first use.
    pub fn template<T: Entity>(&self) -> Result<Arc<Model>> {
        self.template_of(&T::shape())
    }

    /// The cached template of a shape, built on first use.
    pub fn template_of(&self, shape: &Shape) -> Result<Arc<Model>> {
        let mut traversal = Traversal::new(self.config.max_depth);
        self.build(shape, &mut traversal)
    }

    fn build(&self, shape: &Shape, traversal: &mut Traversal) -> Result<Arc<Model>> {
        let key = shape.pkg_key();
        if let Some(template) = self.cache.get_native(&key) {
            return Ok(template);
        }

        traversal.enter(&key)?;
        let template = self
            .cache
            .get_or_try_insert_with(&key, || self.traverse(shape, traversal));
        traversal.exit();

        template
    }

    fn traverse(&self, shape: &Shape, traversal: &mut Traversal) -> Result<Model> {
        tracing::debug!(shape = %shape.pkg_key(), "building template");

        let mut builder = ModelBuilder::new(shape.name, shape.namespace);

        for member in shape.members.iter().filter(|member| member.is_declared()) {
            let spec = Spec::parse(member.spec, member.view, member.constraint, member.ident);
            let ty = self.member_type(member, traversal);
            builder.push(member.index, spec, ty)?;
        }

        builder.finish()
    }

    fn member_type(&self, member: &Member, traversal: &mut Traversal) -> Result<Type> {
        let ty = (member.ty)()?;

        match (member.shape)() {
            Some(nested) => Ok(ty.with_template(self.build(&nested, traversal)?)),
            None => Ok(ty),
        }
    }

    /// Builds the model of `entity` with all data present.
    pub fn populate<T: Entity>(&self, entity: &T) -> Result<Model> {
        let shape = T::shape();
        let mut model = Model::clone(&*self.template_of(&shape)?);

        for (member, datum) in shape.members.iter().zip(entity.dump(self)?) {
            if let Some(field) = model.field_by_index_mut(member.index) {
                field.value_mut().set(datum)?;
            }
        }

        Ok(model)
    }

    /// Rebuilds a native record from a model's current values.
    ///
    /// Members without a field, or whose field is nil, take their default.
    pub fn interface<T: Entity>(&self, model: &Model) -> Result<T> {
        let shape = T::shape();
        if model.pkg_key() != shape.pkg_key() {
            return Err(Error::shape_mismatch(shape.pkg_key(), model.pkg_key()));
        }

        let data = shape
            .members
            .iter()
            .map(|member| {
                model
                    .field_by_index(member.index)
                    .and_then(|field| field.value().get().cloned())
            })
            .collect();

        T::load(self, data)
    }

    /// Like [`interface`](Local::interface), returning the record boxed.
    pub fn interface_ptr<T: Entity>(&self, model: &Model) -> Result<Box<T>> {
        self.interface(model).map(Box::new)
    }

    /// Rebuilds a native record from its wire object graph.
    ///
    /// The object is checked field by field against the native template of
    /// `T`. Datetimes travel with whole seconds, so any sub-second part of
    /// the sender's value is lost.
    pub fn from_object<T: Entity>(&self, object: &Object) -> Result<T> {
        let shape = T::shape();
        if object.name != shape.name || object.namespace != shape.namespace {
            return Err(Error::shape_mismatch(shape.pkg_key(), object.pkg_key()));
        }
        self.template_of(&shape)?;

        let remote = Remote::new(self.cache.clone(), self.config.clone());
        let model = remote.get_entity_model(object, &View::Origin)?;
        self.interface(&model)
    }

    /// Same as [`Provider::get_model_filter`], callable without naming the
    /// record type.
    pub fn get_model_filter(&self, model: &Model, view: &View) -> Result<Filter> {
        Filter::new(model, view)
    }

    /// Same as [`Provider::set_model_value`].
    pub fn set_model_value(&self, model: &mut Model, value: &Value) -> Result<()> {
        super::set_model_value(model, value)
    }

    /// Same as [`Provider::append_sequence_value`].
    pub fn append_sequence_value(&self, seq: &mut Value, item: Value) -> Result<()> {
        super::append_sequence_value(seq, item)
    }

    /// The struct type of `T` with its template attached.
    pub fn entity_type<T: Entity>(&self) -> Result<Type> {
        let shape = T::shape();
        let template = self.template_of(&shape)?;
        Ok(Type::structure(shape.name, shape.namespace).with_template(template))
    }

    /// Data of a nested entity member.
    pub fn dump_entity<T: Entity>(&self, entity: &T) -> Result<Option<Datum>> {
        Ok(Some(Datum::Struct(Box::new(self.populate(entity)?))))
    }

    /// Rebuilds a nested entity member from its data.
    pub fn load_entity<T: Entity>(&self, datum: Option<Datum>) -> Result<T> {
        match datum {
            Some(Datum::Struct(model)) => self.interface(&model),
            Some(datum) => Err(Error::set_type_mismatch(T::shape().pkg_key(), datum.type_name())),
            None => Err(Error::set_type_mismatch(T::shape().pkg_key(), "nil")),
        }
    }
}

impl<T: Entity> Provider<T> for Local {
    fn get_entity_type(&self, _entity: &T) -> Result<Type> {
        self.entity_type::<T>()
    }

    fn get_entity_value(&self, entity: &T) -> Result<Value> {
        Value::new(self.entity_type::<T>()?, self.dump_entity(entity)?)
    }

    fn get_entity_model(&self, entity: &T, view: &View) -> Result<Model> {
        tracing::debug!(shape = %T::shape().pkg_key(), %view, "local model");

        let mut model = self.populate(entity)?;
        model.materialize(view)?;
        Ok(model)
    }
}
