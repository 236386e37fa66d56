//! Bones lexer - statement splitting and tokenization.
//!
//! The source format is deliberately tiny: statements are separated by
//! `;`, tokens inside a statement by runs of whitespace. There is no
//! quoting, no escaping and no comment syntax, so both passes are plain
//! scans over the source text.

mod split;
mod tokenize;

pub use split::split_program;
pub use tokenize::tokenize;
