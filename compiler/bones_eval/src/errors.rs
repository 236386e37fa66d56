//! The fatal error taxonomy of the executor.
//!
//! Every error is raised at the point of detection and unwinds to the
//! driver via `Result`; there is no recovery, retry or skip-and-continue.
//! Each variant carries the 1-based line of the offending statement and,
//! where one exists, the offending token.

use std::fmt;

/// Result alias for executor operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// A fatal execution error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum EvalError {
    /// A statement keyword with no usable operand shape.
    Syntax { line: u32 },
    /// A token where none, or a specific literal, was expected.
    UnexpectedToken { line: u32, token: String },
    /// A reserved word or statement keyword used as a variable name.
    ReservedToken { line: u32, token: String },
    /// `incr`/`decr`/`print` or a `while` guard on a variable that was
    /// never `clear`-ed.
    UndefinedVariable { line: u32, name: String },
    /// A `while` block with no matching `end` before end of program.
    UnterminatedBlock { line: u32 },
}

impl EvalError {
    /// The statement line the error was raised on.
    pub fn line(&self) -> u32 {
        match self {
            EvalError::Syntax { line }
            | EvalError::UnexpectedToken { line, .. }
            | EvalError::ReservedToken { line, .. }
            | EvalError::UndefinedVariable { line, .. }
            | EvalError::UnterminatedBlock { line } => *line,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax { line } => write!(f, "syntax error on line {line}"),
            EvalError::UnexpectedToken { line, token } => {
                write!(f, "unexpected token on line {line}: {token}")
            }
            EvalError::ReservedToken { line, token } => {
                write!(
                    f,
                    "reserved token used as variable name on line {line}: {token}"
                )
            }
            EvalError::UndefinedVariable { line, name } => {
                write!(f, "undefined variable on line {line}: {name}")
            }
            EvalError::UnterminatedBlock { line } => {
                write!(
                    f,
                    "reached end of program before while on line {line} was closed"
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

// Constructor helpers, one per taxonomy entry.

/// A keyword statement missing its operand shape.
#[inline]
pub fn syntax_error(line: u32) -> EvalError {
    EvalError::Syntax { line }
}

/// A token where none, or a specific literal, was expected.
#[inline]
pub fn unexpected_token(line: u32, token: impl Into<String>) -> EvalError {
    EvalError::UnexpectedToken {
        line,
        token: token.into(),
    }
}

/// A reserved word or keyword in operand position.
#[inline]
pub fn reserved_token(line: u32, token: impl Into<String>) -> EvalError {
    EvalError::ReservedToken {
        line,
        token: token.into(),
    }
}

/// A reference to a variable that was never `clear`-ed.
#[inline]
pub fn undefined_variable(line: u32, name: impl Into<String>) -> EvalError {
    EvalError::UndefinedVariable {
        line,
        name: name.into(),
    }
}

/// A `while` whose block never balanced before end of program.
#[inline]
pub fn unterminated_block(line: u32) -> EvalError {
    EvalError::UnterminatedBlock { line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names_kind_token_and_line() {
        assert_eq!(syntax_error(4).to_string(), "syntax error on line 4");
        assert_eq!(
            unexpected_token(2, "banana").to_string(),
            "unexpected token on line 2: banana"
        );
        assert_eq!(
            reserved_token(9, "end").to_string(),
            "reserved token used as variable name on line 9: end"
        );
        assert_eq!(
            undefined_variable(1, "y").to_string(),
            "undefined variable on line 1: y"
        );
        assert_eq!(
            unterminated_block(5).to_string(),
            "reached end of program before while on line 5 was closed"
        );
    }

    #[test]
    fn every_variant_reports_its_line() {
        assert_eq!(syntax_error(3).line(), 3);
        assert_eq!(unexpected_token(7, "x").line(), 7);
        assert_eq!(reserved_token(8, "do").line(), 8);
        assert_eq!(undefined_variable(11, "v").line(), 11);
        assert_eq!(unterminated_block(2).line(), 2);
    }
}
