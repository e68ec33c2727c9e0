/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Error taxonomy shared by the lexer and the parser.
 *
 * License:
 * This file is part of the JFTT front-end project.
 *
 * JFTT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a front-end error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A character outside the legal set. Aborts the whole parse.
    LexicalError,

    /// A token that is not permitted at this grammar position, including
    /// structural mismatches such as a missing `ENDIF`.
    SyntaxError,

    /// A number literal outside the 64-bit signed range.
    MalformedNumber,

    /// The token stream ran out in the middle of a construct.
    UnexpectedEndOfInput,

    /// The caller's cancellation flag was raised mid-parse.
    Cancelled,

    /// The configured diagnostic limit was reached.
    TooManyErrors,
}

impl ErrorKind {
    /// Stable error code (E0001, E0002, …)
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::LexicalError => "E0001",
            ErrorKind::SyntaxError => "E0002",
            ErrorKind::MalformedNumber => "E0003",
            ErrorKind::UnexpectedEndOfInput => "E0004",
            ErrorKind::Cancelled => "E0005",
            ErrorKind::TooManyErrors => "E0006",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexicalError => "LexicalError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::MalformedNumber => "MalformedNumber",
            ErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorKind::Cancelled => "Cancelled",
            ErrorKind::TooManyErrors => "TooManyErrors",
        };
        f.write_str(name)
    }
}

/// Failure to tokenize the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("unknown keyword `{word}`")]
    UnknownKeyword { word: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::UnknownKeyword { span, .. } => {
                *span
            }
        }
    }

    /// Suggestion shown under the rendered diagnostic.
    pub fn help(&self) -> Option<String> {
        match self {
            LexError::UnknownKeyword { .. } => Some(
                "keywords are written in upper case and names in lower case".to_string(),
            ),
            LexError::UnexpectedCharacter { ch: '!', .. } => {
                Some("`!` is only valid as part of `!=`".to_string())
            }
            LexError::UnexpectedCharacter { .. } => None,
        }
    }
}

/// A recoverable parse failure.
///
/// Produced by `expect`-style helpers and bubbled with `?` to the nearest
/// recovery point, where it becomes a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
    /// What the parser would have accepted, in display form.
    pub expected: Vec<String>,
    pub help: Option<String>,
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            expected: Vec::new(),
            help: None,
        }
    }

    /// "expected X, found Y" against the token that was actually present.
    ///
    /// Classified as `UnexpectedEndOfInput` when `found` is the sentinel.
    pub fn expected<S: ToString>(expected: &[S], found: &Token) -> Self {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        let wanted = match expected.as_slice() {
            [single] => single.clone(),
            many => format!("one of {}", many.join(", ")),
        };
        let kind = if found.kind == TokenKind::Eof {
            ErrorKind::UnexpectedEndOfInput
        } else {
            ErrorKind::SyntaxError
        };

        Self {
            kind,
            message: format!("expected {}, found {}", wanted, found.describe()),
            span: found.span,
            expected,
            help: None,
        }
    }

    pub fn malformed_number(token: &Token) -> Self {
        Self::new(
            ErrorKind::MalformedNumber,
            format!(
                "number `{}` does not fit in a 64-bit signed integer",
                token.lexeme
            ),
            token.span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::keywords::Keyword;

    #[test]
    fn expected_message_lists_alternatives() {
        let found = Token::new(TokenKind::Punctuation, ";", Span::new(4, 5, 1, 5));
        let err = ParseError::expected(&[":=", "("], &found);
        assert_eq!(err.kind, ErrorKind::SyntaxError);
        assert_eq!(err.message, "expected one of :=, (, found `;`");
        assert_eq!(err.span.column, 5);
    }

    #[test]
    fn mismatch_at_sentinel_is_end_of_input() {
        let err = ParseError::expected(&[Keyword::End], &Token::eof(Span::at(10, 2, 1)));
        assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.message, "expected END, found end of input");
    }
}
