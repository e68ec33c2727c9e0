/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     parser/cursor.rs
 * Purpose:  Position-tracking token cursor with one-token lookahead.
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

use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::Keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use std::fmt;

/// A token shape the parser can demand with [`TokenCursor::expect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Keyword(Keyword),
    /// Operator or punctuation with this exact text.
    Symbol(&'static str),
    Pidentifier,
    Number,
}

impl Expected {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Expected::Keyword(keyword) => token.is_keyword(*keyword),
            Expected::Symbol(symbol) => token.is_symbol(symbol),
            Expected::Pidentifier => token.kind == TokenKind::Pidentifier,
            Expected::Number => token.kind == TokenKind::Number,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Keyword(keyword) => write!(f, "{}", keyword),
            Expected::Symbol(symbol) => write!(f, "`{}`", symbol),
            Expected::Pidentifier => f.write_str("identifier"),
            Expected::Number => f.write_str("number"),
        }
    }
}

/// Cursor over a lexed token stream.
///
/// The stream always ends with an `Eof` token; the cursor never moves past
/// it, so `peek` is total and running out of input shows up as an ordinary
/// token mismatch rather than a special case.
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Wraps `tokens`, appending the sentinel if the caller left it off.
    /// Comment tokens are dropped.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| t.kind != TokenKind::Comment);

        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens
                .last()
                .map(|t| Span::at(t.span.end, t.span.line, t.span.column + t.lexeme.chars().count()))
                .unwrap_or_default();
            tokens.push(Token::eof(end));
        }

        Self { tokens, pos: 0 }
    }

    /// Current token, without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Consumes and returns the current token. At `Eof` the sentinel is
    /// returned again and the position does not change.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// The last consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|i| &self.tokens[i])
    }

    pub fn at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    pub fn check(&self, expected: Expected) -> bool {
        expected.matches(self.peek())
    }

    /// Consumes the current token if it has the expected shape.
    ///
    /// # Errors
    /// `SyntaxError` (or `UnexpectedEndOfInput` at the sentinel) naming
    /// what was expected and what was found. Nothing is consumed.
    pub fn expect(&mut self, expected: Expected) -> ParseResult<Token> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(&[expected], self.peek()))
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Span from `start` up to the end of the last consumed token.
    pub fn span_from(&self, start: Span) -> Span {
        match self.previous() {
            Some(prev) if prev.span.end >= start.start => start.to(prev.span),
            _ => start,
        }
    }

    /// Skips tokens until `stop` holds for the current one (or `Eof`).
    /// Returns how many tokens were skipped.
    pub fn skip_until(&mut self, mut stop: impl FnMut(&Token) -> bool) -> usize {
        let before = self.pos;
        while !self.at_end() && !stop(self.peek()) {
            self.pos += 1;
        }
        self.pos - before
    }

    /// Looks ahead without consuming: the first token (at or after the
    /// current one) for which `stop` holds, and its distance. The sentinel
    /// is returned when nothing matches.
    pub fn find_ahead(&self, mut stop: impl FnMut(&Token) -> bool) -> (usize, &Token) {
        let last = self.tokens.len() - 1;
        let index = (self.pos..last)
            .find(|&i| stop(&self.tokens[i]))
            .unwrap_or(last);
        (index - self.pos, &self.tokens[index])
    }

    /// Skips `count` tokens, never past the sentinel.
    pub fn skip(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.tokens.len() - 1);
    }

    /// Jumps straight to the sentinel.
    pub fn exhaust(&mut self) {
        self.pos = self.tokens.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn advance_stops_at_sentinel() {
        let mut cursor = TokenCursor::new(tokenize("x").unwrap());
        assert_eq!(cursor.advance().lexeme, "x");
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn expect_reports_without_consuming() {
        let mut cursor = TokenCursor::new(tokenize("WRITE x;").unwrap());
        let err = cursor.expect(Expected::Keyword(Keyword::Read)).unwrap_err();
        assert_eq!(err.message, "expected READ, found `WRITE`");
        assert_eq!(cursor.position(), 0);
        assert!(cursor.expect(Expected::Keyword(Keyword::Write)).is_ok());
        assert!(cursor.expect(Expected::Pidentifier).is_ok());
        assert!(cursor.expect(Expected::Symbol(";")).is_ok());
        assert!(cursor.at_end());
    }

    #[test]
    fn sentinel_is_added_when_missing() {
        let cursor = TokenCursor::new(Vec::new());
        assert!(cursor.at_end());
    }

    #[test]
    fn skip_until_counts_skipped_tokens() {
        let mut cursor = TokenCursor::new(tokenize("a b c ; d").unwrap());
        let skipped = cursor.skip_until(|t| t.is_symbol(";"));
        assert_eq!(skipped, 3);
        assert_eq!(cursor.peek().lexeme, ";");
    }

    #[test]
    fn find_ahead_does_not_move() {
        let cursor = TokenCursor::new(tokenize("a b BEGIN c").unwrap());
        let (distance, token) = cursor.find_ahead(|t| t.is_keyword(Keyword::Begin));
        assert_eq!(distance, 2);
        assert_eq!(token.lexeme, "BEGIN");
        assert_eq!(cursor.position(), 0);

        let (_, token) = cursor.find_ahead(|t| t.is_keyword(Keyword::End));
        assert_eq!(token.kind, TokenKind::Eof);
    }
}
