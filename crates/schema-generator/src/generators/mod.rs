//! Per-type value generators.
//!
//! Leaf generators (`string`, `numeric`, `faker`, `pattern`) are free
//! functions over any [`rand::Rng`]. The recursive ones (`object`, `array`,
//! `composition`) are methods on [`Generator`](crate::Generator) because they
//! call back into the main dispatch for their children.

pub mod array;
pub mod composition;
pub mod faker;
pub mod numeric;
pub mod object;
pub mod pattern;
pub mod string;
