mod adhoc;
mod decode;
mod duplicate_field_name;
mod duplicate_primary_key;
mod encode;
mod invalid_filter;
mod no_fields;
mod no_primary_key;
mod recursive_shape;
mod set_type_mismatch;
mod shape_mismatch;
mod unsupported_kind;
mod unsupported_type;

use adhoc::AdhocError;
use decode::DecodeError;
use duplicate_field_name::DuplicateFieldName;
use duplicate_primary_key::DuplicatePrimaryKey;
use encode::EncodeError;
use invalid_filter::InvalidFilter;
use no_fields::NoFields;
use no_primary_key::NoPrimaryKey;
use recursive_shape::RecursiveShape;
use set_type_mismatch::SetTypeMismatch;
use shape_mismatch::ShapeMismatch;
use std::sync::Arc;
use unsupported_kind::UnsupportedKind;
use unsupported_type::UnsupportedType;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building, materializing or encoding models.
///
/// Every error is local and synchronous: it describes a structural defect in
/// a record shape or in a caller-supplied value, never a transient condition,
/// so nothing in this crate retries on error.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        // A consequent shared with another handle cannot be mutated in place;
        // fall back to an ad-hoc copy of its message.
        let unique = err
            .inner
            .as_mut()
            .and_then(Arc::get_mut)
            .map(|inner| inner.cause.is_none())
            .unwrap_or(false);

        if !unique {
            err = Error::from_args(format_args!("{}", err));
        }

        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            inner.cause = Some(self);
        }

        err
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error, or any error in its context chain,
    /// satisfies `f`.
    fn any(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .inner
                .as_ref()
                .and_then(|inner| inner.cause.as_ref())
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnsupportedType(UnsupportedType),
    UnsupportedKind(UnsupportedKind),
    DuplicatePrimaryKey(DuplicatePrimaryKey),
    DuplicateFieldName(DuplicateFieldName),
    NoFields(NoFields),
    NoPrimaryKey(NoPrimaryKey),
    RecursiveShape(RecursiveShape),
    ShapeMismatch(ShapeMismatch),
    Encode(EncodeError),
    Decode(DecodeError),
    SetTypeMismatch(SetTypeMismatch),
    InvalidFilter(InvalidFilter),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            UnsupportedKind(err) => core::fmt::Display::fmt(err, f),
            DuplicatePrimaryKey(err) => core::fmt::Display::fmt(err, f),
            DuplicateFieldName(err) => core::fmt::Display::fmt(err, f),
            NoFields(err) => core::fmt::Display::fmt(err, f),
            NoPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            RecursiveShape(err) => core::fmt::Display::fmt(err, f),
            ShapeMismatch(err) => core::fmt::Display::fmt(err, f),
            Encode(err) => core::fmt::Display::fmt(err, f),
            Decode(err) => core::fmt::Display::fmt(err, f),
            SetTypeMismatch(err) => core::fmt::Display::fmt(err, f),
            InvalidFilter(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown keel error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
