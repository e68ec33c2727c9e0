/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the JFTT lexer
 *            and consumed by the parser.
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

use crate::lexer::keywords::Keyword;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The **category of a lexical token**.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Text → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// One of the reserved upper-case words (`PROGRAM`, `IF`, `T`, ...).
    Keyword(Keyword),

    /// A user-defined name matching `[_a-z][_a-z0-9]*`.
    Pidentifier,

    /// An integer literal matching `-?[0-9]+`.
    ///
    /// The sign belongs to the literal: `-5` is a single token.
    Number,

    /// Arithmetic and comparison operators:
    /// `+ - * / % = != > < >= <=`
    Operator,

    /// Structural symbols: `:= , ; ( ) [ ] :`
    Punctuation,

    /// A `#` comment. Only produced when the lexer is asked to keep
    /// comments; the parser never sees these.
    Comment,

    /// End-of-input sentinel. Always the final token of a stream.
    Eof,
}

/// A single lexical token.
///
/// # Example Tokens
/// ```text
/// WHILE  →  { kind: Keyword(While), lexeme: "WHILE", span: 3:5 }
/// tab    →  { kind: Pidentifier,    lexeme: "tab",   span: 3:11 }
/// -42    →  { kind: Number,         lexeme: "-42",   span: 4:9 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token sits in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Builds the end-of-input sentinel at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Operator or punctuation whose text is exactly `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Punctuation) && self.lexeme == symbol
    }

    /// True when this token may be the last token of a `value`.
    ///
    /// The lexer uses this to decide whether a following `-digits` is a
    /// negative literal or a subtraction.
    pub fn ends_value(&self) -> bool {
        match self.kind {
            TokenKind::Number | TokenKind::Pidentifier => true,
            TokenKind::Punctuation => self.lexeme == "]",
            _ => false,
        }
    }

    /// Short phrase used in "found ..." parts of diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Pidentifier => format!("identifier `{}`", self.lexeme),
            TokenKind::Number => format!("number `{}`", self.lexeme),
            TokenKind::Comment => "comment".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users want to see in messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
