/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * Expression-Level Parsing Logic
 *
 * Grammar handled here:
 *
 * ```text
 * expression := value | value ( + | - | * | / | % ) value
 * condition  := expression ( = | != | > | < | >= | <= ) expression
 * value      := num | identifier
 * identifier := pidentifier
 *             | pidentifier [ pidentifier ]
 *             | pidentifier [ num ]
 * args       := pidentifier ( , pidentifier )*
 * ```
 *
 * There is no precedence climbing: an expression holds at most one
 * operator, so a second operator is simply left for the caller to reject.
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

use crate::ast::{BinaryOp, Comparator, Condition, Expression, Identifier, Name, Value};
use crate::error::ParseResult;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

const COMPARATORS: &[&str] = &["`=`", "`!=`", "`>`", "`<`", "`>=`", "`<=`"];

impl Parser {
    /// Parses `value` or `value op value`.
    pub fn expression(&mut self) -> ParseResult<Expression> {
        let left = self.value()?;

        let op = match self.peek_binary_op() {
            Some(op) => op,
            None => return Ok(Expression::Single(left)),
        };
        self.cursor.advance();

        let right = self.value()?;
        let span = left.span().to(right.span());

        Ok(Expression::Binary {
            op,
            left,
            right,
            span,
        })
    }

    /// Parses `expression comparator expression`.
    pub fn condition(&mut self) -> ParseResult<Condition> {
        let left = self.expression()?;

        let op = match self.peek_comparator() {
            Some(op) => op,
            None => return Err(self.unexpected(COMPARATORS)),
        };
        self.cursor.advance();

        let right = self.expression()?;
        let span = left.span().to(right.span());

        Ok(Condition {
            left,
            op,
            right,
            span,
        })
    }

    /// Parses a number literal or an identifier.
    pub fn value(&mut self) -> ParseResult<Value> {
        match self.cursor.peek_kind() {
            TokenKind::Number => Ok(Value::Number(self.consume_number()?)),
            TokenKind::Pidentifier => {
                let name = self.consume_pidentifier()?;
                Ok(Value::Identifier(self.identifier_after(name)?))
            }
            _ => Err(self.unexpected(&["number", "identifier"])),
        }
    }

    /// Parses an identifier, including its optional `[index]`.
    pub fn identifier(&mut self) -> ParseResult<Identifier> {
        let name = self.consume_pidentifier()?;
        self.identifier_after(name)
    }

    /// Finishes an identifier whose leading name has already been consumed.
    ///
    /// One token of lookahead after `[` decides between indexing by a
    /// variable and indexing by a literal.
    pub fn identifier_after(&mut self, array: Name) -> ParseResult<Identifier> {
        if !self.match_symbol("[") {
            return Ok(Identifier::Plain(array));
        }

        match self.cursor.peek_kind() {
            TokenKind::Pidentifier => {
                let index = self.consume_pidentifier()?;
                let close = self.consume_symbol("]")?;
                let span = array.span.to(close.span);
                Ok(Identifier::IndexedByName { array, index, span })
            }
            TokenKind::Number => {
                let index = self.consume_number()?;
                let close = self.consume_symbol("]")?;
                let span = array.span.to(close.span);
                Ok(Identifier::IndexedByNumber { array, index, span })
            }
            _ => Err(self.unexpected(&["identifier", "number"])),
        }
    }

    /// Parses the argument list of a procedure call (names only).
    pub fn args(&mut self) -> ParseResult<Vec<Name>> {
        let mut args = vec![self.consume_pidentifier()?];

        while self.match_symbol(",") {
            args.push(self.consume_pidentifier()?);
        }

        Ok(args)
    }

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        let token = self.cursor.peek();
        if token.kind == TokenKind::Operator {
            BinaryOp::from_symbol(&token.lexeme)
        } else {
            None
        }
    }

    fn peek_comparator(&self) -> Option<Comparator> {
        let token = self.cursor.peek();
        if token.kind == TokenKind::Operator {
            Comparator::from_symbol(&token.lexeme)
        } else {
            None
        }
    }
}
