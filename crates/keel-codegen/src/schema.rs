mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod orm_attr;
pub(crate) use orm_attr::OrmAttr;
