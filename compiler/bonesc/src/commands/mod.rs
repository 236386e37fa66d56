//! CLI commands.

mod run;

pub use run::run_file;

/// Read the program file, exiting with a diagnostic if it cannot be read.
///
/// A missing or unreadable program file is a configuration error: there
/// is nothing to recover, so this reports and exits rather than
/// returning a `Result`.
pub(crate) fn read_file(path: &str) -> String {
    use std::io::ErrorKind;

    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            match e.kind() {
                ErrorKind::NotFound => eprintln!("error: program file '{path}' not found"),
                ErrorKind::PermissionDenied => {
                    eprintln!("error: no permission to read program file '{path}'");
                }
                ErrorKind::InvalidData => {
                    eprintln!("error: program file '{path}' is not valid UTF-8");
                }
                _ => eprintln!("error: cannot read program file '{path}': {e}"),
            }
            std::process::exit(1);
        }
    }
}
