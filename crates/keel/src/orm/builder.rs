use super::Orm;
use keel_core::{Cache, Config, Entity, Result, Shape};

use std::sync::Arc;

const MAX_SNOWFLAKE_NODE: u16 = 0x3FF;

#[derive(Default)]
pub struct Builder {
    /// Shapes whose templates are built eagerly
    shapes: Vec<Shape>,

    /// Shared template cache, a fresh one when unset
    cache: Option<Arc<Cache>>,

    config: Config,
}

impl Builder {
    /// Builds the template of `T` when the handle is built, so shape errors
    /// surface up front instead of on first use.
    pub fn register<T: Entity>(&mut self) -> &mut Self {
        self.shapes.push(T::shape());
        self
    }

    /// Bounds the depth of nested record traversal.
    pub fn max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Node id mixed into snowflake ids, `0..=1023`.
    pub fn snowflake_node(&mut self, node: u16) -> &mut Self {
        self.config.snowflake_node = node;
        self
    }

    pub fn cache(&mut self, cache: Arc<Cache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(&mut self) -> Result<Orm> {
        if self.config.snowflake_node > MAX_SNOWFLAKE_NODE {
            keel_core::bail!(
                "snowflake node {} out of range; expected 0..={MAX_SNOWFLAKE_NODE}",
                self.config.snowflake_node
            );
        }

        let cache = self.cache.clone().unwrap_or_default();
        let orm = Orm::new(cache, self.config.clone());

        for shape in &self.shapes {
            orm.local().template_of(shape)?;
        }

        tracing::debug!(
            shapes = self.shapes.len(),
            max_depth = self.config.max_depth,
            "orm built"
        );

        Ok(orm)
    }
}
