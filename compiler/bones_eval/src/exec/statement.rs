//! Statement classification, validation and dispatch.
//!
//! Validation order, shared by every keyword: keyword lookup, operand
//! presence, reserved-operand check, then per-keyword shape checks. Only
//! after all of that does a statement touch the store.

use bones_ir::{is_reserved_token, Keyword, Statement};

use crate::errors::{
    reserved_token, syntax_error, undefined_variable, unexpected_token, EvalResult,
};

use super::Executor;

impl Executor<'_> {
    /// Classify, validate and execute one statement.
    ///
    /// Returns the cursor position of the next statement to execute:
    /// `at + 1` for ordinary statements, or the position just past the
    /// matching `end` after a `while` loop completes.
    pub(super) fn exec_statement(
        &mut self,
        statements: &[Statement],
        at: usize,
        stmt: &Statement,
    ) -> EvalResult<usize> {
        let Some(first) = stmt.first_token() else {
            // Blank statement (e.g. a trailing delimiter).
            return Ok(at + 1);
        };
        let Some(keyword) = Keyword::from_token(first) else {
            return Err(unexpected_token(stmt.line, first));
        };
        let Some(operand) = stmt.operand() else {
            return Err(syntax_error(stmt.line));
        };
        if is_reserved_token(operand) {
            return Err(reserved_token(stmt.line, operand));
        }

        match keyword {
            Keyword::Clear => {
                expect_single_operand(stmt)?;
                self.store.clear(operand);
            }
            Keyword::Incr => {
                expect_single_operand(stmt)?;
                self.store
                    .increment(operand)
                    .ok_or_else(|| undefined_variable(stmt.line, operand))?;
            }
            Keyword::Decr => {
                expect_single_operand(stmt)?;
                self.store
                    .decrement(operand)
                    .ok_or_else(|| undefined_variable(stmt.line, operand))?;
            }
            Keyword::Print => {
                expect_single_operand(stmt)?;
                let value = self
                    .store
                    .get(operand)
                    .ok_or_else(|| undefined_variable(stmt.line, operand))?;
                self.print_value(operand, value);
            }
            Keyword::While => return self.exec_while(statements, at, stmt, operand),
            // Reserved for future extension; validated but inert.
            Keyword::If | Keyword::Func => {}
        }
        Ok(at + 1)
    }

    /// Report a variable through the print handler as `name = value`.
    fn print_value(&self, name: &str, value: i64) {
        self.printer.println(&format!("{name} = {value}"));
    }
}

/// `clear`/`incr`/`decr`/`print` take exactly one operand; the first
/// surplus token is the offender.
fn expect_single_operand(stmt: &Statement) -> EvalResult<()> {
    match stmt.tokens.get(2) {
        Some(extra) => Err(unexpected_token(stmt.line, extra.as_str())),
        None => Ok(()),
    }
}
