//! Bones CLI entry point.
//!
//! Usage: `bones <file>` — interpret a `;`-delimited Bones program.

use bonesc::commands::run_file;

fn main() {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("error: no file given to interpret");
        print_usage();
        std::process::exit(1);
    };
    if let Some(extra) = args.next() {
        eprintln!("error: unexpected argument '{extra}'");
        print_usage();
        std::process::exit(1);
    }

    run_file(&path);
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: bones <file>");
    eprintln!();
    eprintln!("Interprets a Bones program: statements separated by ';',");
    eprintln!("tokens inside a statement separated by whitespace.");
}

/// Initialize the tracing subscriber when `RUST_LOG` is set.
///
/// Enable with e.g. `RUST_LOG=bones_eval=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
