mod builder;
pub use builder::Builder;

use keel_core::{
    Cache, Config, Entity, Generator, Local, Model, Object, Provider, Remote, Result, View,
};

use std::sync::Arc;

/// Entry point bundling both providers over one shared template cache.
///
/// Cloning is cheap; clones share the cache and the id generator.
#[derive(Debug, Clone)]
pub struct Orm {
    local: Local,
    remote: Remote,
    generator: Arc<Generator>,
    config: Config,
}

impl Orm {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(cache: Arc<Cache>, config: Config) -> Orm {
        Orm {
            local: Local::new(cache.clone(), config.clone()),
            remote: Remote::new(cache, config.clone()),
            generator: Arc::new(Generator::new(config.snowflake_node)),
            config,
        }
    }

    pub fn local(&self) -> &Local {
        &self.local
    }

    pub fn remote(&self) -> &Remote {
        &self.remote
    }

    pub fn cache(&self) -> &Arc<Cache> {
        self.local.cache()
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The model of `entity` materialized under `view`.
    pub fn model<T: Entity>(&self, entity: &T, view: &View) -> Result<Model> {
        self.local.get_entity_model(entity, view)
    }

    /// The wire object graph of `entity`, with every value present.
    pub fn object<T: Entity>(&self, entity: &T) -> Result<Object> {
        Remote::object_of(&self.local.populate(entity)?)
    }

    /// Rebuilds a native record from a wire object graph.
    pub fn entity<T: Entity>(&self, object: &Object) -> Result<T> {
        self.local.from_object(object)
    }

    /// Fills empty client-generated fields of `model`.
    pub fn generate(&self, model: &mut Model) -> Result<()> {
        model.assign_generated(&self.generator)
    }
}

impl Default for Orm {
    fn default() -> Self {
        Orm::new(Arc::new(Cache::new()), Config::default())
    }
}
