/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     lexer.rs
 * Purpose:  Converts raw JFTT source text into a lazy stream of tokens.
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

use crate::error::LexError;
use crate::lexer::keywords::Keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use regex::Regex;
use std::sync::OnceLock;

/// Terminal patterns, anchored at the current scan position.
fn pidentifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[_a-z][_a-z0-9]*").expect("pidentifier pattern compiles"))
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?[0-9]+").expect("number pattern compiles"))
}

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]+").expect("keyword pattern compiles"))
}

/// Collects the whole token stream, ending with the `Eof` sentinel.
///
/// # Example
/// ```rust
/// let tokens = jftt::lexer::tokenize("WRITE -5;").unwrap();
/// assert_eq!(tokens.len(), 4); // WRITE, -5, ;, Eof
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

/// The JFTT lexer.
///
/// A `Lexer` is an iterator of `Result<Token, LexError>`. It is lazy (one
/// token is scanned per `next()` call), finite (it stops after yielding the
/// `Eof` sentinel or the first error) and restartable: building a new lexer
/// over the same text yields the same sequence.
///
/// Whitespace and `#` comments are skipped between tokens.
pub struct Lexer<'src> {
    source: &'src str,
    current: usize,
    line: usize,
    column: usize,

    /// Whether the last significant token could end a `value`. Decides
    /// between `-` as an operator and `-` as the sign of a literal.
    after_value: bool,

    keep_comments: bool,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
            after_value: false,
            keep_comments: false,
            finished: false,
        }
    }

    /// Emit `#` comments as `TokenKind::Comment` tokens instead of skipping
    /// them.
    pub fn with_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Scans and returns the next significant token.
    ///
    /// # Behavior
    /// - Skips whitespace and (unless kept) comments
    /// - Returns the `Eof` sentinel once the text is exhausted, and keeps
    ///   returning it on further calls
    /// - Uses longest match for names, so `forx` is one pidentifier
    ///
    /// # Errors
    /// `LexError` for a character that starts no token, or for an upper-case
    /// run that is not a keyword.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();

            if self.peek() != Some('#') {
                break;
            }

            let comment = self.comment();
            if self.keep_comments {
                return Ok(comment);
            }
        }

        let (start, line, column) = (self.current, self.line, self.column);

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::eof(Span::at(start, line, column))),
        };

        let token = match ch {
            'a'..='z' | '_' => self.pattern(pidentifier_pattern(), TokenKind::Pidentifier)?,
            '0'..='9' => self.pattern(number_pattern(), TokenKind::Number)?,
            '-' if !self.after_value && self.peek_next().is_some_and(|c| c.is_ascii_digit()) => {
                self.pattern(number_pattern(), TokenKind::Number)?
            }
            'A'..='Z' => self.keyword()?,
            _ => self.symbol(ch)?,
        };

        self.after_value = token.ends_value();
        Ok(token)
    }

    /// Consumes the longest match of `pattern` at the cursor.
    fn pattern(&mut self, pattern: &Regex, kind: TokenKind) -> Result<Token, LexError> {
        let (start, line, column) = (self.current, self.line, self.column);
        let len = pattern
            .find(&self.source[start..])
            .map(|m| m.end())
            .unwrap_or(0);

        if len == 0 {
            let ch = self.peek().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter {
                ch,
                span: Span::new(start, start + ch.len_utf8(), line, column),
            });
        }

        self.bump_bytes(len);
        Ok(Token::new(
            kind,
            &self.source[start..self.current],
            Span::new(start, self.current, line, column),
        ))
    }

    /// Upper-case runs must be exact keywords.
    fn keyword(&mut self) -> Result<Token, LexError> {
        let (start, line, column) = (self.current, self.line, self.column);
        let len = keyword_pattern()
            .find(&self.source[start..])
            .map(|m| m.end())
            .unwrap_or(0);
        let word = &self.source[start..start + len];
        let span = Span::new(start, start + len, line, column);

        match Keyword::lookup(word) {
            Some(keyword) => {
                self.bump_bytes(len);
                Ok(Token::new(TokenKind::Keyword(keyword), word, span))
            }
            None => Err(LexError::UnknownKeyword {
                word: word.to_string(),
                span,
            }),
        }
    }

    /// Operators and punctuation. Two-character forms win over their
    /// one-character prefixes.
    fn symbol(&mut self, ch: char) -> Result<Token, LexError> {
        let (start, line, column) = (self.current, self.line, self.column);

        let (kind, len) = match (ch, self.peek_next()) {
            (':', Some('=')) => (TokenKind::Punctuation, 2),
            ('!', Some('=')) | ('>', Some('=')) | ('<', Some('=')) => (TokenKind::Operator, 2),
            (':' | ',' | ';' | '(' | ')' | '[' | ']', _) => (TokenKind::Punctuation, 1),
            ('+' | '-' | '*' | '/' | '%' | '=' | '>' | '<', _) => (TokenKind::Operator, 1),
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    span: Span::new(start, start + ch.len_utf8(), line, column),
                })
            }
        };

        self.bump_bytes(len);
        Ok(Token::new(
            kind,
            &self.source[start..self.current],
            Span::new(start, self.current, line, column),
        ))
    }

    /// `#` through end of line. The newline itself is left for whitespace.
    fn comment(&mut self) -> Token {
        let (start, line, column) = (self.current, self.line, self.column);

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }

        Token::new(
            TokenKind::Comment,
            &self.source[start..self.current],
            Span::new(start, self.current, line, column),
        )
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes one character, keeping line/column in step.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn bump_bytes(&mut self, len: usize) {
        let end = self.current + len;
        while self.current < end && self.bump().is_some() {}
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if matches!(&result, Ok(token) if token.kind == TokenKind::Eof) || result.is_err() {
            self.finished = true;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn minus_after_value_is_an_operator() {
        let tokens = tokenize("y-1").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[2].lexeme, "1");

        let tokens = tokenize("t[2]-1").unwrap();
        assert_eq!(tokens[4].lexeme, "-");
    }

    #[test]
    fn minus_before_digits_elsewhere_is_a_literal() {
        let tokens = tokenize("x := -1 - -2;").unwrap();
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["x", ":=", "-1", "-", "-2", ";", ""]);
    }

    #[test]
    fn comments_can_be_kept() {
        let tokens: Vec<Token> = Lexer::new("x # note\ny")
            .with_comments(true)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].lexeme, "# note");
        assert_eq!(tokens[2].span.line, 2);
    }

    #[test]
    fn iterator_stops_after_first_error() {
        let items: Vec<_> = Lexer::new("x $ y").collect();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_err());
    }

    #[test]
    fn two_character_symbols_win() {
        assert_eq!(
            kinds(":= : != >= <= > <"),
            vec![
                TokenKind::Punctuation,
                TokenKind::Punctuation,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Eof,
            ]
        );
    }
}
