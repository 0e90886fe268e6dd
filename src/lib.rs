//! Lexical analyzer for Lua-like source text.
//!
//! Turns ASCII source into an ordered list of classified tokens
//! (keywords, identifiers, operators, numbers, comments, and
//! punctuation). Malformed lexemes never abort a scan: each one is
//! reported and skipped, by default together with the rest of its line.
//!
//! # Quick start
//!
//! ```
//! use lua_tokenizer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("local x = 1 -- one\n");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[4].text, "-- one");
//! ```
//!
//! ## Collecting diagnostics
//!
//! ```
//! use lua_tokenizer::{Recovery, ScanOptions, tokenize_with};
//!
//! let options = ScanOptions::default().with_recovery(Recovery::SkipLexeme);
//! let scan = tokenize_with("a $ b", options);
//! assert_eq!(scan.tokens.len(), 2);
//! assert_eq!(scan.diagnostics[0].to_string(), "Error on line 1: unexpected character: $");
//! ```

// Every sub-scanner returns a `ScanResult`, even the ones that
// cannot fail.
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::unnecessary_wraps
)]

pub mod cursor;
pub mod keyword;
pub mod lexer;
pub mod token;

pub use cursor::ScannerState;
pub use keyword::{KEYWORDS, is_keyword};
pub use lexer::{
    Recovery, Scan, ScanError, ScanErrorKind, ScanOptions, ScanResult, tokenize, tokenize_with,
};
pub use token::{Token, TokenKind};
