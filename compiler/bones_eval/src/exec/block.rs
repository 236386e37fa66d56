//! Block resolution and loop execution for `while <var> not 0 do ... end`.

use bones_ir::{Keyword, Reserved, Statement};
use tracing::debug;

use crate::errors::{
    syntax_error, undefined_variable, unexpected_token, unterminated_block, EvalResult,
};

use super::Executor;

impl Executor<'_> {
    /// Execute a `while` statement at `at`: validate the header, resolve
    /// the block once, then re-run it until the guard reads zero.
    ///
    /// Returns the cursor position just past the block's matching `end`.
    pub(super) fn exec_while(
        &mut self,
        statements: &[Statement],
        at: usize,
        stmt: &Statement,
        guard: &str,
    ) -> EvalResult<usize> {
        // The guard must predate the loop; checked before the header
        // shape so `while y ...` on an unknown y reports the variable.
        if !self.store.contains(guard) {
            return Err(undefined_variable(stmt.line, guard));
        }
        check_header_shape(stmt)?;

        let (body, end) = scan_block(statements, at + 1, stmt.line)?;

        let mut iterations: u64 = 0;
        while self.store.get(guard).is_some_and(|value| value != 0) {
            // Fresh context per iteration, reborrowing the same store.
            Executor::new(self.store, self.printer).run_block(body)?;
            iterations += 1;
        }
        debug!(guard, iterations, body_len = body.len(), "while loop exited");

        Ok(end + 1)
    }
}

/// Validate the fixed `while <var> not 0 do` header shape.
///
/// The grammar admits exactly five tokens. Anything shorter is a syntax
/// error; a sixth token, or any deviation from the literal `not 0 do`
/// tail, is reported as the unexpected token.
fn check_header_shape(stmt: &Statement) -> EvalResult<()> {
    if stmt.tokens.len() < 5 {
        return Err(syntax_error(stmt.line));
    }
    if let Some(extra) = stmt.tokens.get(5) {
        return Err(unexpected_token(stmt.line, extra.as_str()));
    }
    if stmt.tokens[2] != Reserved::Not.as_str() {
        return Err(unexpected_token(stmt.line, stmt.tokens[2].as_str()));
    }
    if stmt.tokens[3] != "0" {
        return Err(unexpected_token(stmt.line, stmt.tokens[3].as_str()));
    }
    if stmt.tokens[4] != Reserved::Do.as_str() {
        return Err(unexpected_token(stmt.line, stmt.tokens[4].as_str()));
    }
    Ok(())
}

/// Resolve the statement range belonging to a `while` body.
///
/// `start` indexes the statement just past the header. The nesting
/// counter opens at 1; a statement whose first token is a block opener
/// (`while`/`if`/`func`) raises it, one whose first token is `end`
/// lowers it, and the walk stops when the counter balances to zero. The
/// statements strictly before that point form the body. Matching is
/// exact first-token equality, so a name that merely contains "end"
/// cannot close a block.
fn scan_block<'s>(
    statements: &'s [Statement],
    start: usize,
    header_line: u32,
) -> EvalResult<(&'s [Statement], usize)> {
    let mut depth: u32 = 1;
    for (offset, stmt) in statements[start..].iter().enumerate() {
        match stmt.first_token() {
            Some(first) if Keyword::from_token(first).is_some_and(|k| k.is_block_opener()) => {
                depth += 1;
            }
            Some(first) if first == Reserved::End.as_str() => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset;
                    return Ok((&statements[start..end], end));
                }
            }
            _ => {}
        }
    }
    Err(unterminated_block(header_line))
}
