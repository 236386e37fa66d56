//! `;`-delimited statement splitting.
//!
//! The delimiter scan works on bytes with `memchr`; `;` is ASCII, so the
//! resulting offsets always fall on UTF-8 character boundaries.

use bones_ir::{Program, Statement};
use memchr::memchr_iter;

use crate::tokenize::tokenize;

/// Split raw source into the numbered statement sequence.
///
/// Every segment between delimiters becomes a statement, numbered from 1
/// in source order, blank segments included (they execute as no-ops).
/// Text after the final `;` forms a last statement only when it is
/// non-empty, so a source ending exactly on a delimiter gets no trailing
/// blank statement but a trailing newline still shows up in the trace.
pub fn split_program(source: &str) -> Program {
    let mut statements = Vec::new();
    let mut start = 0usize;
    let mut line: u32 = 0;

    for delim in memchr_iter(b';', source.as_bytes()) {
        line += 1;
        statements.push(statement(line, &source[start..delim]));
        start = delim + 1;
    }

    let tail = &source[start..];
    if !tail.is_empty() {
        line += 1;
        statements.push(statement(line, tail));
    }

    Program::new(statements)
}

fn statement(line: u32, raw: &str) -> Statement {
    let text = raw.trim();
    Statement::new(line, text, tokenize(text))
}
