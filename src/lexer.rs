use std::fmt;

use crate::cursor::ScannerState;
use crate::keyword::is_keyword;
use crate::token::{Token, TokenKind};

/// Classifies a rejected lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Byte that cannot start any token.
    UnexpectedCharacter(char),
    /// Exactly two dots (`..`) not followed by a third.
    InvalidDotSequence,
    /// Numeric literal with a second decimal point.
    InvalidNumericLiteral,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {}", ch.escape_default())
            }
            Self::InvalidDotSequence => write!(f, "invalid dot sequence"),
            Self::InvalidNumericLiteral => write!(f, "invalid numeric literal"),
        }
    }
}

/// A rejected lexeme and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

impl ScanError {
    #[must_use]
    pub const fn new(kind: ScanErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// Outcome of a single sub-scan.
pub type ScanResult = Result<Token, ScanError>;

/// What the scanner throws away after rejecting a lexeme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Recovery {
    /// Drop the rest of the current line, valid lexemes included.
    #[default]
    SkipLine,
    /// Drop only the malformed lexeme and keep scanning after it.
    SkipLexeme,
}

impl Recovery {
    fn recover(self, state: &mut ScannerState<'_>, error: &ScanError) {
        match self {
            Self::SkipLine => state.skip_to_line_end(),
            Self::SkipLexeme => match error.kind {
                ScanErrorKind::UnexpectedCharacter(_) => state.advance_char(),
                ScanErrorKind::InvalidNumericLiteral => {
                    state.skip_while(|b| b.is_ascii_digit() || b == b'.');
                }
                // Both dots are already consumed.
                ScanErrorKind::InvalidDotSequence => {}
            },
        }
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub recovery: Recovery,
}

impl ScanOptions {
    #[must_use]
    pub const fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }
}

/// Tokens together with every lexeme that was rejected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<ScanError>,
}

impl Scan {
    /// `true` when no lexeme was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tokenize Lua-like source text with the default line-level recovery.
///
/// Never fails: rejected lexemes are reported through `tracing` and
/// skipped. Use [`tokenize_with`] to also collect them.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, ScanOptions::default()).tokens
}

/// Tokenize with explicit options, returning tokens and diagnostics.
#[must_use]
pub fn tokenize_with(source: &str, options: ScanOptions) -> Scan {
    let mut state = ScannerState::new(source);
    let mut scan = Scan::default();

    while let Some(byte) = state.current() {
        let result = match byte {
            b' ' | b'\t' => {
                state.skip_whitespace();
                continue;
            }
            b'\n' => {
                state.newline();
                continue;
            }
            b'-' if state.peek_next() == Some(b'-') => scan_comment(&mut state),
            b'-' | b'+' | b'*' | b'/' | b'^' | b'%' | b'#' | b'>' | b'<' | b'=' | b'~' => {
                scan_operator(&mut state)
            }
            b'(' | b')' | b'{' | b'}' | b';' | b',' | b'[' | b']' => scan_symbol(&mut state),
            b'.' => scan_dot(&mut state),
            b'0'..=b'9' => scan_numeric_literal(&mut state),
            b if b.is_ascii_alphabetic() || b == b'_' => scan_identifier(&mut state),
            _ => Err(ScanError::new(
                ScanErrorKind::UnexpectedCharacter(
                    state.current_char().unwrap_or(char::REPLACEMENT_CHARACTER),
                ),
                state.line(),
            )),
        };

        match result {
            Ok(token) => {
                tracing::trace!(line = token.line, kind = %token.kind, text = %token.text, "token");
                scan.tokens.push(token);
            }
            Err(error) => {
                tracing::warn!("{error}");
                options.recovery.recover(&mut state, &error);
                scan.diagnostics.push(error);
            }
        }
    }

    scan
}

const fn is_comparison(byte: u8) -> bool {
    matches!(byte, b'<' | b'>' | b'=' | b'~')
}

const fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// `--` through end of line, newline excluded.
fn scan_comment(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    state.skip_to_line_end();
    Ok(Token::new(TokenKind::Comment, state.slice(start), line))
}

/// Single-byte operator, or a comparison starter followed by any of `< > = ~`.
fn scan_operator(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    let first = state.current();
    state.advance();
    if first.is_some_and(is_comparison) && state.current().is_some_and(is_comparison) {
        state.advance();
    }
    Ok(Token::new(TokenKind::Operator, state.slice(start), line))
}

fn scan_symbol(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    state.advance();
    Ok(Token::new(TokenKind::Unclassified, state.slice(start), line))
}

/// `.` or `...`; two dots on their own are rejected.
fn scan_dot(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    state.advance();
    if state.eat(b'.') && !state.eat(b'.') {
        return Err(ScanError::new(ScanErrorKind::InvalidDotSequence, line));
    }
    Ok(Token::new(TokenKind::Unclassified, state.slice(start), line))
}

fn scan_numeric_literal(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    let mut seen_point = false;

    while let Some(byte) = state.current() {
        match byte {
            b'0'..=b'9' => {}
            b'.' if seen_point => {
                return Err(ScanError::new(ScanErrorKind::InvalidNumericLiteral, line));
            }
            b'.' => seen_point = true,
            _ => break,
        }
        state.advance();
    }

    Ok(Token::new(TokenKind::NumericLiteral, state.slice(start), line))
}

fn scan_identifier(state: &mut ScannerState<'_>) -> ScanResult {
    let start = state.position();
    let line = state.line();
    state.skip_while(is_identifier_continue);
    let text = state.slice(start);
    let kind = if is_keyword(&text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Ok(Token::new(kind, text, line))
}
