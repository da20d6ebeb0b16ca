//! # Slice Utilities
//!
//! Stateless helpers over borrowed slices. Every function returns a new owned
//! `Vec` and leaves its input untouched.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sequence`] | Order-level helpers: shuffle, chunk |
//! | [`set`] | Equality-based set operations: unique, contains, intersects, intersection, union, difference |
//!
//! ## Example
//!
//! ```
//! use ukit_array::{chunk, difference, unique};
//!
//! assert_eq!(unique(&[1, 2, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(difference(&[1, 1, 2, 3], &[3]), vec![1, 1, 2]);
//! ```

pub mod sequence;
pub mod set;

pub use sequence::{chunk, shuffle, shuffle_with};
pub use set::{contains, difference, intersection, intersects, union, unique};
