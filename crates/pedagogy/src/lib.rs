//! Worked examples of programming with lazy lists.
//!
//! The examples follow the "generate, then select" style: one function
//! produces an infinite list of approximations, another walks it and decides
//! when to stop. Neither needs to know about the other.
//!
//! # Example
//!
//! ```
//! use pedagogy::newton;
//!
//! let root = newton::sqrt(1.0, 0.0, 144.0).unwrap();
//! assert_eq!(root, 12.0);
//! ```

pub mod newton;
