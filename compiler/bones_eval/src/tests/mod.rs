//! End-to-end executor tests, driven through `bones_lexer`.
//!
//! Shared helpers run a source string to completion; per-topic files
//! cover plain statements, `while` blocks and the error taxonomy.

mod while_tests;

use bones_lexer::split_program;

use crate::{EvalError, Executor, PrintHandler, VarStore};

/// Run `source` with output discarded, returning the final store.
fn run(source: &str) -> Result<VarStore, EvalError> {
    let program = split_program(source);
    let mut store = VarStore::new();
    let printer = PrintHandler::Silent;
    Executor::new(&mut store, &printer).run(&program)?;
    Ok(store)
}

/// Final store of a program expected to succeed.
fn store_of(source: &str) -> VarStore {
    match run(source) {
        Ok(store) => store,
        Err(e) => panic!("program failed: {e}"),
    }
}

/// Captured output (trace + `print` lines) of a program expected to
/// succeed.
fn output_of(source: &str) -> String {
    let program = split_program(source);
    let mut store = VarStore::new();
    let printer = PrintHandler::buffer();
    if let Err(e) = Executor::new(&mut store, &printer).run(&program) {
        panic!("program failed: {e}");
    }
    printer.output()
}

/// Error of a program expected to fail.
fn error_of(source: &str) -> EvalError {
    match run(source) {
        Ok(store) => panic!("program unexpectedly succeeded with {store}"),
        Err(e) => e,
    }
}
