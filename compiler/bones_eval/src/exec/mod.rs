//! Cursor-driven execution of a statement sequence.
//!
//! Execution is strictly sequential and single-threaded: a cursor walks
//! the statement slice left to right, and a `while` statement resolves
//! its block once, re-runs it until the guard reads zero, then jumps the
//! cursor past the matching `end`. Recursion depth follows `while`
//! *nesting* depth, not iteration count — each iteration's nested
//! context returns before the next one is created.

mod block;
mod statement;

use bones_ir::{Program, Statement};

use crate::errors::EvalResult;
use crate::print_handler::PrintHandler;
use crate::store::VarStore;

/// An execution context: a cursor over a statement slice operating on a
/// borrowed variable store.
///
/// The top-level program and every loop-body iteration each get their
/// own `Executor`, but all of them borrow the *same* store — never a
/// copy — so a loop body's mutations are immediately visible to its
/// enclosing scope.
pub struct Executor<'a> {
    store: &'a mut VarStore,
    printer: &'a PrintHandler,
}

impl<'a> Executor<'a> {
    /// Create an executor over `store`, reporting through `printer`.
    pub fn new(store: &'a mut VarStore, printer: &'a PrintHandler) -> Self {
        Executor { store, printer }
    }

    /// Execute a whole program.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        self.run_block(program.statements())
    }

    /// Execute a statement slice: the whole program, or one resolved
    /// `while` body.
    fn run_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let mut cursor = 0;
        while let Some(stmt) = statements.get(cursor) {
            self.trace(stmt);
            cursor = self.exec_statement(statements, cursor, stmt)?;
        }
        Ok(())
    }

    /// Emit the pre-statement trace: the store snapshot, then the line
    /// number and trimmed statement text.
    fn trace(&self, stmt: &Statement) {
        self.printer.println(&self.store.to_string());
        self.printer.println(&format!("{} - {}", stmt.line, stmt.text));
    }
}
