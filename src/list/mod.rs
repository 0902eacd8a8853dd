//! The lazy list and everything built on it.

mod algebra;
mod compare;
mod convert;
mod fmt;
mod generate;
mod node;
mod ops;
mod sort;

pub use compare::natural;
pub use convert::Iter;
pub use generate::until;
pub use node::List;
