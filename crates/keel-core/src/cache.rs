//! Memoized record templates.

use crate::{Model, Result};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Where a cached template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Built from a native record shape.
    Native,

    /// Built from a peer's self-described wire object.
    Remote,
}

impl Source {
    /// Native lookups only trust native templates; remote lookups take any.
    fn accepts(self, stored: Source) -> bool {
        match self {
            Source::Native => stored == Source::Native,
            Source::Remote => true,
        }
    }
}

#[derive(Debug)]
struct Entry {
    template: Arc<Model>,
    source: Source,
}

/// Template models keyed by record shape (`namespace/name`).
///
/// A template holds the fields of a shape with default values and is copied
/// before being populated, so callers never share mutable state through the
/// cache. Failed builds are not stored: every lookup of a broken shape
/// rebuilds it and reports the same error.
///
/// Each entry remembers its [`Source`]. A native build replaces a template a
/// peer described, and never reuses one.
#[derive(Debug, Default)]
pub struct Cache {
    templates: RwLock<HashMap<String, Entry>>,
}

impl Cache {
    pub fn new() -> Cache {
        Cache::default()
    }

    /// The template stored for `key`, whatever its source.
    pub fn get(&self, key: &str) -> Option<Arc<Model>> {
        self.lookup(key, Source::Remote)
    }

    /// The template stored for `key` if it was built from a native shape.
    pub fn get_native(&self, key: &str) -> Option<Arc<Model>> {
        self.lookup(key, Source::Native)
    }

    pub fn source(&self, key: &str) -> Option<Source> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|entry| entry.source)
    }

    fn lookup(&self, key: &str, source: Source) -> Option<Arc<Model>> {
        let templates = self.templates.read().unwrap_or_else(PoisonError::into_inner);
        let template = templates
            .get(key)
            .filter(|entry| source.accepts(entry.source))
            .map(|entry| entry.template.clone());

        if template.is_some() {
            tracing::trace!(key, ?source, "template cache hit");
        }

        template
    }

    /// Stores a native template, replacing any previous one for the same key.
    pub fn insert(&self, key: impl Into<String>, template: Model) -> Arc<Model> {
        self.insert_from(key, Source::Native, template)
    }

    /// Stores a template of the given source, replacing any previous one for
    /// the same key.
    pub fn insert_from(&self, key: impl Into<String>, source: Source, template: Model) -> Arc<Model> {
        let key = key.into();
        let template = Arc::new(template);

        tracing::debug!(key = %key, ?source, fields = template.len(), "caching template");

        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key,
                Entry {
                    template: template.clone(),
                    source,
                },
            );

        template
    }

    /// Returns the native template for `key`, building and storing it on a
    /// miss. A remote template counts as a miss and is replaced.
    ///
    /// `build` runs without holding the lock, so two threads missing on the
    /// same key may both build; the last one stored wins. Errors from
    /// `build` are returned and nothing is stored.
    pub fn get_or_try_insert_with(
        &self,
        key: &str,
        build: impl FnOnce() -> Result<Model>,
    ) -> Result<Arc<Model>> {
        self.get_or_try_insert_from(key, Source::Native, build)
    }

    /// Like [`Cache::get_or_try_insert_with`], for a template of the given
    /// source. Remote lookups reuse a template of either source.
    pub fn get_or_try_insert_from(
        &self,
        key: &str,
        source: Source,
        build: impl FnOnce() -> Result<Model>,
    ) -> Result<Arc<Model>> {
        if let Some(template) = self.lookup(key, source) {
            return Ok(template);
        }

        let template = build().inspect_err(|err| {
            tracing::debug!(key, error = %err, "template build failed");
        })?;

        Ok(self.insert_from(key, source, template))
    }

    pub fn remove(&self, key: &str) -> Option<Arc<Model>> {
        tracing::debug!(key, "evicting template");

        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .map(|entry| entry.template)
    }

    /// Drops every template.
    pub fn reset(&self) {
        tracing::debug!("resetting template cache");

        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
