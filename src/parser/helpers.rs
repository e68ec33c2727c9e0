/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
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

use crate::ast::{Name, Number};
use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::Keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::cursor::Expected;
use crate::parser::parser::Parser;

impl Parser {
    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        self.cursor.peek().is_keyword(kw)
    }

    /// Matches a keyword and consumes it if present.
    pub fn match_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required keyword.
    pub fn consume_keyword(&mut self, kw: Keyword) -> ParseResult<Token> {
        self.cursor.expect(Expected::Keyword(kw))
    }

    /// Checks if the current token is the operator/punctuation `symbol`.
    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.cursor.peek().is_symbol(symbol)
    }

    /// Matches a symbol and consumes it.
    pub fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required symbol.
    pub fn consume_symbol(&mut self, symbol: &'static str) -> ParseResult<Token> {
        self.cursor.expect(Expected::Symbol(symbol))
    }

    pub fn check_pidentifier(&self) -> bool {
        self.cursor.peek_kind() == TokenKind::Pidentifier
    }

    /// Consumes and returns a pidentifier.
    pub fn consume_pidentifier(&mut self) -> ParseResult<Name> {
        let token = self.cursor.expect(Expected::Pidentifier)?;
        Ok(Name::new(token.lexeme, token.span))
    }

    /// Consumes a number literal and converts it.
    ///
    /// # Errors
    /// - `SyntaxError` when the current token is not a number
    /// - `MalformedNumber` when the literal does not fit in an `i64`; the
    ///   token is consumed in that case
    pub fn consume_number(&mut self) -> ParseResult<Number> {
        let token = self.cursor.expect(Expected::Number)?;
        number_from(&token)
    }

    /// An error for the current token, listing the accepted alternatives.
    pub fn unexpected(&self, expected: &[&str]) -> ParseError {
        ParseError::expected(expected, self.cursor.peek())
    }
}

/// Converts a `Number` token to its value.
pub(crate) fn number_from(token: &Token) -> ParseResult<Number> {
    token
        .lexeme
        .parse::<i64>()
        .map(|value| Number {
            value,
            span: token.span,
        })
        .map_err(|_| ParseError::malformed_number(token))
}
