//! Print handler for configurable output.
//!
//! The execution trace and `print` statements go through one sink that
//! can be directed to different destinations:
//! - `Stdout`: the process stdout (the CLI default)
//! - `Buffer`: an in-memory buffer, for test assertions
//! - `Silent`: discarded
//!
//! Uses enum dispatch instead of trait objects for static dispatch on
//! this frequently-used path.

use parking_lot::Mutex;

/// Output sink for trace and `print` lines.
pub enum PrintHandler {
    /// Writes to stdout.
    Stdout,
    /// Captures to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    /// Handler that captures output for assertions.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(Mutex::new(String::new()))
    }

    /// Print one line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// All captured output. Empty unless this is a `Buffer` handler.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        PrintHandler::Stdout
    }
}
