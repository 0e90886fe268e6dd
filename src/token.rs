use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the reserved words (`local`, `function`, ...).
    Keyword,
    /// Name that is not a keyword.
    Identifier,
    /// Arithmetic, comparison, or length operator.
    Operator,
    /// Decimal literal with at most one `.`.
    NumericLiteral,
    /// Line comment (`-- ...`).
    Comment,
    /// Punctuation, brackets, and the `.` / `...` sequences.
    Unclassified,
}

impl TokenKind {
    /// Stable lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::NumericLiteral => "number",
            Self::Comment => "comment",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its kind, source text, and starting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line of the lexeme's first character.
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.line, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_tab_separated() {
        let token = Token::new(TokenKind::Keyword, "local", 3);
        assert_eq!(token.to_string(), "3\tkeyword\tlocal");
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::NumericLiteral.to_string(), "number");
        assert_eq!(TokenKind::Unclassified.as_str(), "unclassified");
    }
}
