use super::Datum;
use crate::{Error, Kind, Result, Type, View};

/// A typed cell holding one field's current datum.
///
/// The cell is nil (`None`) only for optional types; non-optional cells
/// always hold a datum, the zero datum when nothing else was set. This keeps
/// three states apart: absent, present-but-default and present-with-data.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    ty: Type,
    datum: Option<Datum>,
}

impl Value {
    /// Creates a value, checking `datum` against `ty` the same way
    /// [`Value::set`] does.
    pub fn new(ty: Type, datum: Option<Datum>) -> Result<Value> {
        let mut value = Value { ty, datum: None };
        value.set(datum)?;
        Ok(value)
    }

    /// The default value of `ty`: nil for optional types, the zero datum
    /// otherwise.
    pub fn default_of(ty: Type) -> Result<Value> {
        let mut value = Value { ty, datum: None };
        value.reset_default()?;
        Ok(value)
    }

    /// A sequence of `elem` holding `items`.
    pub fn list(elem: Type, items: Vec<Datum>) -> Result<Value> {
        Value::new(Type::slice(elem)?, Some(Datum::List(items)))
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns `true` for an optional cell with no target.
    pub fn is_nil(&self) -> bool {
        self.datum.is_none()
    }

    /// Returns `true` when the cell is nil or holds the zero datum.
    pub fn is_zero(&self) -> bool {
        self.datum.as_ref().map(Datum::is_zero).unwrap_or(true)
    }

    pub fn get(&self) -> Option<&Datum> {
        self.datum.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Datum> {
        self.datum.as_mut()
    }

    pub fn into_datum(self) -> Option<Datum> {
        self.datum
    }

    /// Replaces the cell's datum.
    ///
    /// A plain datum set into an optional cell becomes its target. Setting
    /// nil into a non-optional cell, or a datum whose kind differs from the
    /// cell's type, fails with `SetTypeMismatch` and leaves the cell as it
    /// was.
    pub fn set(&mut self, datum: Option<Datum>) -> Result<()> {
        match &datum {
            None if !self.ty.is_pointer() => {
                return Err(Error::set_type_mismatch(self.ty.to_string(), "nil"));
            }
            None => {}
            Some(datum) => check(&self.ty, datum)?,
        }

        self.datum = datum;
        Ok(())
    }

    /// Sets the datum held by another value.
    ///
    /// The other value's optional-ness is ignored, so an optional struct
    /// value is dereferenced into a plain struct cell.
    pub fn set_value(&mut self, value: &Value) -> Result<()> {
        self.set(value.datum.clone())
    }

    /// Appends `item` to a sequence cell, allocating a nil sequence first.
    pub fn push(&mut self, item: Datum) -> Result<()> {
        if !self.ty.is_slice() {
            return Err(Error::set_type_mismatch(self.ty.to_string(), item.type_name()));
        }

        check(self.ty.elem(), &item)?;

        match self.datum.get_or_insert_with(|| Datum::List(vec![])) {
            Datum::List(items) => items.push(item),
            datum => return Err(Error::set_type_mismatch(self.ty.to_string(), datum.type_name())),
        }

        Ok(())
    }

    /// Returns an independent duplicate of this value.
    pub fn copy(&self) -> Value {
        self.clone()
    }

    /// Resets to the default: nil for optional cells, the zero datum
    /// otherwise.
    pub(crate) fn reset_default(&mut self) -> Result<()> {
        if self.ty.is_pointer() {
            self.datum = None;
            Ok(())
        } else {
            self.reset_zero()
        }
    }

    /// Resets to the zero datum, allocating optional cells. Nested records
    /// are reset in place.
    pub(crate) fn reset_zero(&mut self) -> Result<()> {
        if let Some(Datum::Struct(model)) = &mut self.datum {
            return model.materialize(&View::Meta);
        }

        self.datum = Some(self.ty.zero_datum()?);
        Ok(())
    }
}

fn check(ty: &Type, datum: &Datum) -> Result<()> {
    let ok = match (ty.kind(), datum) {
        (Kind::Struct, Datum::Struct(model)) => model.pkg_key() == ty.pkg_key(),
        (Kind::Slice, Datum::List(items)) => {
            for item in items {
                check(ty.elem(), item)?;
            }
            true
        }
        (kind, datum) => kind == datum.kind(),
    };

    if ok {
        Ok(())
    } else {
        Err(Error::set_type_mismatch(ty.to_string(), datum.type_name()))
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value {
                        ty: Type::scalar(Kind::$variant),
                        datum: Some(Datum::$variant(value.into())),
                    }
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool)
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
    String(String)
    String(&str)
    DateTime(jiff::civil::DateTime)
}
