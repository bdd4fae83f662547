//! # truthtab: Truth Tables for Boolean Connectives
//!
//! **`truthtab`** is a small library for representing boolean functions of fixed arity
//! by the output columns of their truth tables.
//!
//! ## What is an output column?
//!
//! The truth table of a function of `n` inputs has `2^n` rows, one per input vector,
//! sorted in ascending binary order. The right-most column --- the outputs --- determines
//! the function completely, so a sequence of `2^n` bits **is** a boolean function.
//! Equality of columns is equality of functions, which makes sets of functions behave
//! like honest mathematical sets.
//!
//! ## Key Features
//!
//! - **Validated Construction**: A [`TruthTable`][crate::table::TruthTable] can only be built
//!   from a column whose length is a power of two (or zero) with every entry 0 or 1; anything
//!   else fails fast with a distinct [`TableError`][crate::error::TableError].
//! - **Checked Application**: [`apply`][crate::table::TruthTable::apply] validates arity and
//!   input values, then indexes the column with the inputs read as a binary number
//!   (first input most significant).
//! - **Compiled Evaluation**: [`compile`][crate::table::TruthTable::compile] derives a
//!   collapsed decision tree once, and [`Compiled::eval`][crate::compile::Compiled::eval]
//!   walks it with no validation overhead.
//! - **The 22 Connectives**: every nullary, unary, and binary function is a named static
//!   in [`ops`], and the sets [`NULLARY`][crate::ops::NULLARY], [`UNARY`][crate::ops::UNARY],
//!   [`BINARY`][crate::ops::BINARY], and [`EVERY`][crate::ops::EVERY] are populated once by
//!   exhaustive enumeration.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truthtab::ops;
//! use truthtab::table::TruthTable;
//!
//! // The named connectives are ready to use.
//! assert_eq!(ops::XOR.apply(&[1, 0]).unwrap(), 1);
//! assert_eq!(ops::AND.apply(&[1, 0]).unwrap(), 0);
//!
//! // Any output column of power-of-two length is a function.
//! let f = TruthTable::new([1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
//! assert_eq!(f.arity(), 3);
//! assert_eq!(f.apply(&[1, 1, 0]).unwrap(), 1);
//!
//! // Compile once, evaluate without validation.
//! let fast = f.compile().unwrap();
//! assert_eq!(fast.eval(&[1, 1, 0]), 1);
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: the [`TruthTable`][crate::table::TruthTable] value type --- construction,
//!   validation, and checked application.
//! - **[`compile`]**: the specialized unchecked evaluator.
//! - **[`ops`]**: named connectives, constant sets, and exhaustive enumeration.
//! - **[`sat`]**: satisfying-input queries (`one_sat`, `sat_count`).

pub mod compile;
pub mod error;
pub mod ops;
pub mod sat;
pub mod table;
