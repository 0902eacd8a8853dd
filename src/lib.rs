//! Lazy, memoizing and possibly infinite linked lists.
//!
//! A [`List`] is a persistent cons list whose tails may be deferred: a tail is
//! computed the first time someone reads it and cached in place, so every
//! holder of the list shares the work. Building operations (`map`, `filter`,
//! `append`, ranges, `cycle`, ...) are lazy and work on infinite lists;
//! reducing operations (`length`, `fold`, `sort`, ...) need finite input.
//!
//! # Quick Start
//!
//! ```
//! use lazy_list::{List, list};
//!
//! // Every square number, computed on demand.
//! let squares = List::inf(1).map(|x: &u64| x * x);
//! assert_eq!(squares.take(5), list![1, 4, 9, 16, 25]);
//!
//! // Cycles reuse their own nodes.
//! let abc = List::from("abc").cycle()?;
//! assert_eq!(abc.take(7).to_plain_string(), "abcabca");
//!
//! // Natural merge sort.
//! assert_eq!(list![3, 1, 2].sort(), List::range(1, 3));
//! # Ok::<(), lazy_list::Error>(())
//! ```
//!
//! Partial operations (`head`, `tail`, `index`, ...) return [`Result`] with an
//! [`Error`] naming the operation that failed.

mod macros;

pub mod error;
pub mod profiling;

mod list;

pub use error::Error;
pub use error::Result;
pub use list::Iter;
pub use list::List;
pub use list::natural;
pub use list::until;
