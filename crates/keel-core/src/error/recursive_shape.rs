use super::{Error, ErrorKind};

/// Error when traversal re-enters a shape that is still being built, or
/// nests deeper than the configured maximum.
#[derive(Debug)]
pub(super) struct RecursiveShape {
    shape: Box<str>,
    path: Box<str>,
}

impl std::error::Error for RecursiveShape {}

impl core::fmt::Display for RecursiveShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "recursive shape `{}` ({})", self.shape, self.path)
    }
}

impl Error {
    /// Creates a recursive shape error. `stack` lists the shapes being built,
    /// outermost first; `shape` is the one being re-entered.
    pub fn recursive_shape(stack: &[String], shape: impl Into<String>) -> Error {
        let shape = shape.into();
        let mut path = stack.join(" -> ");
        if !path.is_empty() {
            path.push_str(" -> ");
        }
        path.push_str(&shape);

        Error::from(ErrorKind::RecursiveShape(RecursiveShape {
            shape: shape.into(),
            path: path.into(),
        }))
    }

    /// Returns `true` if this error is a recursive shape error.
    pub fn is_recursive_shape(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::RecursiveShape(_)))
    }
}
