use super::{Local, Shape};
use crate::{model::Datum, Error, Kind, Result, Type};
use jiff::civil::DateTime;
use std::collections::{BTreeMap, HashMap};

/// A Rust type usable as a record member.
///
/// Implemented for scalars, `String`, `jiff::civil::DateTime`, `Option<T>`
/// (optional), `Box<T>` (transparent), `Vec<T>` (sequence) and every derived
/// entity. Map types implement it only to be rejected when a model is built.
pub trait Primitive: Sized {
    fn ty() -> Result<Type>;

    /// Shape of the nested record, if any.
    fn shape() -> Option<Shape> {
        None
    }

    fn dump(&self, local: &Local) -> Result<Option<Datum>>;

    /// Rebuilds the member from its data. `None` yields the default.
    fn load(local: &Local, datum: Option<Datum>) -> Result<Self>;
}

fn mismatch(expected: Kind, datum: &Datum) -> Error {
    Error::set_type_mismatch(expected.name(), datum.type_name())
}

macro_rules! impl_primitive {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Result<Type> {
                    Ok(Type::scalar(Kind::$variant))
                }

                fn dump(&self, _local: &Local) -> Result<Option<Datum>> {
                    Ok(Some(Datum::$variant(self.clone())))
                }

                fn load(_local: &Local, datum: Option<Datum>) -> Result<Self> {
                    match datum {
                        None => Ok(Default::default()),
                        Some(Datum::$variant(v)) => Ok(v),
                        Some(datum) => Err(mismatch(Kind::$variant, &datum)),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
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
}

impl Primitive for DateTime {
    fn ty() -> Result<Type> {
        Ok(Type::scalar(Kind::DateTime))
    }

    fn dump(&self, _local: &Local) -> Result<Option<Datum>> {
        Ok(Some(Datum::DateTime(*self)))
    }

    fn load(_local: &Local, datum: Option<Datum>) -> Result<Self> {
        match datum {
            None => Ok(Datum::ZERO_DATETIME),
            Some(Datum::DateTime(v)) => Ok(v),
            Some(datum) => Err(mismatch(Kind::DateTime, &datum)),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Result<Type> {
        let ty = T::ty()?;
        if ty.is_pointer() {
            return Err(Error::unsupported_kind(format!("optional {ty}")));
        }
        Ok(ty.into_pointer())
    }

    fn shape() -> Option<Shape> {
        T::shape()
    }

    fn dump(&self, local: &Local) -> Result<Option<Datum>> {
        match self {
            Some(v) => v.dump(local),
            None => Ok(None),
        }
    }

    fn load(local: &Local, datum: Option<Datum>) -> Result<Self> {
        datum.map(|datum| T::load(local, Some(datum))).transpose()
    }
}

impl<T: Primitive> Primitive for Box<T> {
    fn ty() -> Result<Type> {
        T::ty()
    }

    fn shape() -> Option<Shape> {
        T::shape()
    }

    fn dump(&self, local: &Local) -> Result<Option<Datum>> {
        (**self).dump(local)
    }

    fn load(local: &Local, datum: Option<Datum>) -> Result<Self> {
        T::load(local, datum).map(Box::new)
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Result<Type> {
        Type::slice(T::ty()?)
    }

    fn shape() -> Option<Shape> {
        T::shape()
    }

    fn dump(&self, local: &Local) -> Result<Option<Datum>> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            match item.dump(local)? {
                Some(datum) => items.push(datum),
                None => return Err(Error::set_type_mismatch(T::ty()?.to_string(), "nil")),
            }
        }
        Ok(Some(Datum::List(items)))
    }

    fn load(local: &Local, datum: Option<Datum>) -> Result<Self> {
        match datum {
            None => Ok(vec![]),
            Some(Datum::List(items)) => items
                .into_iter()
                .map(|item| T::load(local, Some(item)))
                .collect(),
            Some(datum) => Err(mismatch(Kind::Slice, &datum)),
        }
    }
}

impl<K, V> Primitive for HashMap<K, V> {
    fn ty() -> Result<Type> {
        Err(Error::unsupported_kind("map"))
    }

    fn dump(&self, _local: &Local) -> Result<Option<Datum>> {
        Err(Error::unsupported_kind("map"))
    }

    fn load(_local: &Local, _datum: Option<Datum>) -> Result<Self> {
        Err(Error::unsupported_kind("map"))
    }
}

impl<K, V> Primitive for BTreeMap<K, V> {
    fn ty() -> Result<Type> {
        Err(Error::unsupported_kind("map"))
    }

    fn dump(&self, _local: &Local) -> Result<Option<Datum>> {
        Err(Error::unsupported_kind("map"))
    }

    fn load(_local: &Local, _datum: Option<Datum>) -> Result<Self> {
        Err(Error::unsupported_kind("map"))
    }
}
