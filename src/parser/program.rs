/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * Program-Level Parsing Logic
 *
 * ```text
 * program      := procedure* main
 * procedure    := PROCEDURE pidentifier ( args_decl ) IS body
 * main         := PROGRAM IS body
 * body         := [declarations] BEGIN commands END
 * declarations := decl ( , decl )*          decl := pid | pid [ num : num ]
 * args_decl    := param ( , param )*        param := pid | T pid
 * ```
 *
 * Both list rules are left-recursive in the reference grammar; here they
 * are loops that append in source order.
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

use tracing::{debug, trace};

use crate::ast::{
    Command, Declaration, ErrorNode, Main, Name, Parameter, Procedure, ProcedureDef, Program,
};
use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::Keyword;
use crate::lexer::token::Token;
use crate::parser::parser::Parser;
use crate::parser::statements::starts_command;
use crate::span::Span;

const BODY_END: &[Keyword] = &[Keyword::End];

/// Keywords that start or delimit a top-level unit.
fn is_unit_keyword(token: &Token) -> bool {
    token.is_keyword(Keyword::Procedure)
        || token.is_keyword(Keyword::Program)
        || token.is_keyword(Keyword::Is)
        || token.is_keyword(Keyword::Begin)
}

impl Parser {
    /// Parses the whole token stream.
    ///
    /// This is the **main driver** of the recursive-descent parser. It
    /// always returns a tree; problems are recorded as diagnostics and
    /// marked in the tree.
    pub fn program(&mut self) -> Program {
        let start = self.cursor.peek().span;

        let mut procedures = Vec::new();
        while self.check_keyword(Keyword::Procedure) {
            procedures.push(self.procedure());
        }

        let main = self.main_block();

        let trailing = if !self.cursor.at_end() && !self.is_halted() {
            Some(self.trailing_input())
        } else {
            None
        };

        Program {
            procedures,
            main,
            trailing,
            span: self.cursor.span_from(start),
        }
    }

    /// Reports and discards everything after main's `END`.
    fn trailing_input(&mut self) -> ErrorNode {
        let start = self.cursor.peek().span;

        let mut error = self.unexpected(&["end of input"]);
        if self.check_keyword(Keyword::Procedure) {
            error = error.with_help("procedures must be declared before `PROGRAM`");
        }
        let message = error.message.clone();
        self.report(error);

        let skipped = self.cursor.skip_until(|_| false);
        debug!(skipped, "discarded trailing input");

        ErrorNode::new(self.cursor.span_from(start), message)
    }

    /// Parses one procedure definition. The current token is `PROCEDURE`.
    pub fn procedure(&mut self) -> Procedure {
        let start = self.cursor.advance().span;

        match self.proc_head() {
            Ok((name, params)) => {
                trace!(name = %name.text, params = params.len(), "procedure");
                let (declarations, commands) = self.body();

                Procedure::Def(ProcedureDef {
                    name,
                    params,
                    declarations,
                    commands,
                    span: self.cursor.span_from(start),
                })
            }
            Err(error) => {
                let message = error.message.clone();
                self.report(error);

                let skipped = self.cursor.skip_until(is_unit_keyword);
                debug!(skipped, "resynchronized after procedure header error");

                // The body is still parsed so its own errors get reported.
                if self.match_keyword(Keyword::Is) || self.check_keyword(Keyword::Begin) {
                    self.body();
                }

                Procedure::Error(ErrorNode::new(self.cursor.span_from(start), message))
            }
        }
    }

    /// `pidentifier ( args_decl ) IS`
    fn proc_head(&mut self) -> ParseResult<(Name, Vec<Parameter>)> {
        let name = self.consume_pidentifier()?;
        self.consume_symbol("(")?;
        let params = self.params();
        self.consume_symbol(")")?;
        self.consume_keyword(Keyword::Is)?;
        Ok((name, params))
    }

    /// Parses `PROGRAM IS body`.
    pub fn main_block(&mut self) -> Main {
        let start = self.cursor.peek().span;
        let mut declarations = Vec::new();

        let header = self
            .consume_keyword(Keyword::Program)
            .and_then(|_| self.consume_keyword(Keyword::Is));

        if let Err(error) = header {
            let node = self.recover_to_body(error, start);
            declarations.push(Declaration::Error(node));
        }

        let (mut parsed, commands) = self.body();
        declarations.append(&mut parsed);

        Main {
            declarations,
            commands,
            span: self.cursor.span_from(start),
        }
    }

    /// Skips a broken `PROGRAM IS` header. Stops after `IS` or before
    /// `BEGIN`.
    fn recover_to_body(&mut self, error: ParseError, start: Span) -> ErrorNode {
        let message = error.message.clone();
        self.report(error);

        let skipped = self
            .cursor
            .skip_until(|t| t.is_keyword(Keyword::Is) || t.is_keyword(Keyword::Begin));
        self.match_keyword(Keyword::Is);
        debug!(skipped, "resynchronized after program header error");

        ErrorNode::new(self.cursor.span_from(start), message)
    }

    /// `[declarations] BEGIN commands END`, shared by procedures and main.
    ///
    /// A missing `BEGIN` or `END` is reported and marked with a
    /// `Command::Error` at the place the keyword should have been.
    fn body(&mut self) -> (Vec<Declaration>, Vec<Command>) {
        let declarations = if self.check_pidentifier() {
            self.declarations()
        } else {
            Vec::new()
        };

        let mut commands = Vec::new();
        if let Err(error) = self.consume_keyword(Keyword::Begin) {
            commands.push(Command::Error(self.recover_begin(error)));
        }

        commands.extend(self.block(BODY_END));

        if let Err(error) = self.consume_keyword(Keyword::End) {
            let node = ErrorNode::new(error.span, error.message.clone());
            self.report(error);
            commands.push(Command::Error(node));
        }

        (declarations, commands)
    }

    /// A missing `BEGIN`: if one follows before the first command ends,
    /// the tokens up to it are discarded; otherwise the keyword is taken
    /// as absent and commands start right here.
    fn recover_begin(&mut self, error: ParseError) -> ErrorNode {
        let start = error.span;
        let message = error.message.clone();
        self.report(error);

        let (distance, token) = self.cursor.find_ahead(|t| {
            t.is_keyword(Keyword::Begin)
                || t.is_symbol(";")
                || t.is_keyword(Keyword::End)
                || t.is_keyword(Keyword::Procedure)
                || t.is_keyword(Keyword::Program)
        });

        if token.is_keyword(Keyword::Begin) {
            self.cursor.skip(distance + 1);
            debug!(skipped = distance, "resynchronized at BEGIN");
            return ErrorNode::new(self.cursor.span_from(start), message);
        }

        if !starts_command(self.cursor.peek()) {
            let skipped = self.cursor.skip_until(|t| {
                starts_command(t) || t.is_keyword(Keyword::End) || is_unit_keyword(t)
            });
            debug!(skipped, "resynchronized at first command");
        }

        ErrorNode::new(start, message)
    }

    /// Parses a non-empty, comma-separated `declarations` list.
    ///
    /// An item that fails is reported, replaced by `Declaration::Error`,
    /// and parsing continues after the next `,`.
    pub fn declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            let start = self.cursor.peek().span;

            match self.declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(error) => {
                    let message = error.message.clone();
                    self.report(error);
                    self.cursor.skip_until(|t| {
                        t.is_symbol(",") || t.is_keyword(Keyword::End) || is_unit_keyword(t)
                    });
                    declarations.push(Declaration::Error(ErrorNode::new(
                        self.cursor.span_from(start),
                        message,
                    )));
                }
            }

            if !self.match_symbol(",") {
                break;
            }
        }

        declarations
    }

    /// `pidentifier` or `pidentifier [ num : num ]`
    fn declaration(&mut self) -> ParseResult<Declaration> {
        let name = self.consume_pidentifier()?;

        if !self.match_symbol("[") {
            return Ok(Declaration::Scalar(name));
        }

        let lower = self.consume_number()?;
        self.consume_symbol(":")?;
        let upper = self.consume_number()?;
        let close = self.consume_symbol("]")?;

        Ok(Declaration::Array {
            span: name.span.to(close.span),
            name,
            lower,
            upper,
        })
    }

    /// Parses a non-empty, comma-separated `args_decl` list, keeping the
    /// `T` marker on each parameter.
    pub fn params(&mut self) -> Vec<Parameter> {
        let mut params = Vec::new();

        loop {
            let start = self.cursor.peek().span;

            match self.param() {
                Ok(param) => params.push(param),
                Err(error) => {
                    let message = error.message.clone();
                    self.report(error);
                    self.cursor
                        .skip_until(|t| t.is_symbol(",") || t.is_symbol(")") || is_unit_keyword(t));
                    params.push(Parameter::Error(ErrorNode::new(
                        self.cursor.span_from(start),
                        message,
                    )));
                }
            }

            if !self.match_symbol(",") {
                break;
            }
        }

        params
    }

    /// `pidentifier` or `T pidentifier`
    fn param(&mut self) -> ParseResult<Parameter> {
        if self.check_keyword(Keyword::T) {
            let marker = self.cursor.advance();
            let name = self.consume_pidentifier()?;
            return Ok(Parameter::ArrayRef {
                span: marker.span.to(name.span),
                name,
            });
        }

        if self.check_pidentifier() {
            return Ok(Parameter::Scalar(self.consume_pidentifier()?));
        }

        Err(self.unexpected(&["T", "identifier"]))
    }
}
