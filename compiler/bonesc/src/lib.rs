//! Bones interpreter CLI.
//!
//! Thin driver over `bones_lexer` and `bones_eval`: read the program
//! file, split and tokenize it, execute it with the trace on stdout, and
//! turn the first taxonomy error into a diagnostic and a non-zero exit.

pub mod commands;
