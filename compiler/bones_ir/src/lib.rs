//! Bones IR - core data types for the Bones interpreter.
//!
//! This crate contains the data structures shared by the lexer and the
//! evaluator:
//! - `Keyword` and `Reserved`: the fixed statement-keyword and
//!   reserved-word sets
//! - `Statement`: one `;`-delimited program entry with its tokens
//! - `Program`: the ordered statement sequence
//!
//! The keyword sets are process-wide constants; nothing in this crate is
//! mutable at runtime. Heavier dependencies live in the crates that need
//! them, keeping the IR cheap to depend on.

mod keyword;
mod statement;

pub use keyword::{is_reserved_token, Keyword, Reserved};
pub use statement::{Program, Statement};
