//! Static description of record members: their [`Type`], their declared
//! [`Spec`] and the [`View`]s they take part in.

mod auto;
pub use auto::AutoStrategy;

mod constraint;
pub use constraint::Constraint;

mod kind;
pub use kind::Kind;

mod spec;
pub use spec::Spec;

mod ty;
pub use ty::Type;

mod view;
pub use view::View;
