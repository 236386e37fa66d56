//! Statements and programs.
//!
//! A program is the ordered sequence of `;`-delimited statements; order
//! is execution order. Statements carry their 1-based line number (their
//! ordinal in the sequence), so a block sliced out of a program keeps
//! stable numbering for the trace and for diagnostics.

/// One program entry: a statement with its line number, trimmed text and
/// whitespace-split tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Statement {
    /// 1-based ordinal of this statement in the program.
    pub line: u32,
    /// Trimmed raw text, as shown in the execution trace.
    pub text: String,
    /// Tokens in source order; empty for a blank statement.
    pub tokens: Vec<String>,
}

impl Statement {
    pub fn new(line: u32, text: impl Into<String>, tokens: Vec<String>) -> Self {
        Statement {
            line,
            text: text.into(),
            tokens,
        }
    }

    /// First token (the keyword position), if any.
    #[inline]
    pub fn first_token(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Operand (second) token, if any.
    #[inline]
    pub fn operand(&self) -> Option<&str> {
        self.tokens.get(1).map(String::as_str)
    }

    /// Whether the statement has no tokens at all.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// An ordered statement sequence.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    /// The statements in execution order.
    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of statements, blank ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stmt(line: u32, text: &str) -> Statement {
        let tokens = text.split_whitespace().map(str::to_owned).collect();
        Statement::new(line, text, tokens)
    }

    #[test]
    fn token_accessors() {
        let s = stmt(3, "incr x");
        assert_eq!(s.first_token(), Some("incr"));
        assert_eq!(s.operand(), Some("x"));
        assert!(!s.is_blank());
    }

    #[test]
    fn blank_statement_has_no_tokens() {
        let s = stmt(7, "");
        assert_eq!(s.first_token(), None);
        assert_eq!(s.operand(), None);
        assert!(s.is_blank());
    }

    #[test]
    fn program_preserves_order() {
        let program = Program::new(vec![stmt(1, "clear x"), stmt(2, "incr x")]);
        assert_eq!(program.len(), 2);
        assert_eq!(program.statements()[1].line, 2);
    }
}
