#![allow(dead_code)]

use lua_tokenizer::{Recovery, Scan, ScanOptions, Token, TokenKind, tokenize_with};

/// `(kind, text)` pairs, for compact assertions.
pub fn lexemes(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

/// Texts only.
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Tokenize and assert that nothing was rejected.
pub fn clean(input: &str) -> Vec<Token> {
    let scan = tokenize_with(input, ScanOptions::default());
    assert!(
        scan.is_clean(),
        "unexpected diagnostics for {input:?}: {:?}",
        scan.diagnostics
    );
    scan.tokens
}

pub fn scan_lexeme(input: &str) -> Scan {
    tokenize_with(input, ScanOptions::default().with_recovery(Recovery::SkipLexeme))
}

pub fn scan_line(input: &str) -> Scan {
    tokenize_with(input, ScanOptions::default())
}
