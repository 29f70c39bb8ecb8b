use crate::{Error, Result};

/// Shapes currently being built by one traversal, outermost first.
///
/// Each top-level build owns its own stack, so concurrent builds of the same
/// shape on other threads never look like re-entry.
#[derive(Debug)]
pub(super) struct Traversal {
    stack: Vec<String>,
    max_depth: usize,
}

impl Traversal {
    pub(super) fn new(max_depth: usize) -> Traversal {
        Traversal {
            stack: vec![],
            max_depth,
        }
    }

    /// Marks `key` as being built. Fails when `key` is already being built
    /// or the nesting limit is reached.
    pub(super) fn enter(&mut self, key: &str) -> Result<()> {
        if self.stack.iter().any(|entry| entry == key) || self.stack.len() >= self.max_depth {
            return Err(Error::recursive_shape(&self.stack, key));
        }

        self.stack.push(key.to_string());
        Ok(())
    }

    pub(super) fn exit(&mut self) {
        self.stack.pop();
    }
}
