//! The `run` path: split, tokenize and execute a Bones program file.

use bones_eval::{Executor, PrintHandler, VarStore};
use bones_lexer::split_program;

use super::read_file;

/// Interpret a Bones program file.
///
/// The execution trace streams to stdout as the program runs. The first
/// taxonomy error aborts the run with a single diagnostic line on stderr
/// and a non-zero exit; on success the final store is reported under a
/// `Finishing status:` label.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let program = split_program(&source);
    tracing::debug!(path, statements = program.len(), "program loaded");

    let mut store = VarStore::new();
    let printer = PrintHandler::Stdout;
    if let Err(e) = Executor::new(&mut store, &printer).run(&program) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    printer.println("Finishing status:");
    printer.println(&store.to_string());
}
