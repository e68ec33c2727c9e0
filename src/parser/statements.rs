/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * Command-Level Parsing Logic
 *
 * This file contains the grammar rules for JFTT **commands** and the
 * statement-level error recovery that lets one parse report several
 * independent syntax errors.
 *
 * It handles:
 * - Command lists (`commands`, parsed as a loop, never recursively)
 * - Assignments and procedure calls (both start with a pidentifier)
 * - `IF ... THEN ... [ELSE ...] ENDIF`
 * - `WHILE`, `REPEAT ... UNTIL`, `FOR ... TO | DOWNTO`
 * - `READ` and `WRITE`
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

use tracing::debug;

use crate::ast::{Command, ErrorNode, Identifier};
use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::Keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

const THEN_BRANCH_END: &[Keyword] = &[Keyword::Else, Keyword::EndIf];
const ELSE_BRANCH_END: &[Keyword] = &[Keyword::EndIf];
const WHILE_END: &[Keyword] = &[Keyword::EndWhile];
const REPEAT_END: &[Keyword] = &[Keyword::Until];
const FOR_END: &[Keyword] = &[Keyword::EndFor];

/// Outcome of parsing the part of a block command that precedes its body.
enum Header<T> {
    Parsed(T),

    /// The header was broken and has been reported. `resumed` tells
    /// whether the keyword that opens the body was found, in which case
    /// the body is parsed normally.
    Broken { message: String, resumed: bool },
}

/// Can this token begin a command?
pub(crate) fn starts_command(token: &Token) -> bool {
    match token.kind {
        TokenKind::Pidentifier => true,
        TokenKind::Keyword(keyword) => keyword.starts_command(),
        _ => false,
    }
}

impl Parser {
    /// Parses a command list that is closed by one of `closers`.
    ///
    /// The closers are pushed on the open-block stack for the duration, so
    /// that nested lists stop (and recovery resynchronizes) on any keyword
    /// that some enclosing construct is waiting for.
    pub fn block(&mut self, closers: &'static [Keyword]) -> Vec<Command> {
        self.open_blocks.push(closers);
        let commands = self.commands();
        self.open_blocks.pop();
        commands
    }

    /// Parses `commands := command+`.
    ///
    /// # Behavior
    /// - Commands are appended in source order
    /// - The list ends at `Eof`, at `PROCEDURE`/`PROGRAM`, or at a keyword
    ///   that closes an open block
    /// - A command that fails is replaced by `Command::Error` and parsing
    ///   resumes after the next `;` (or at the next block boundary)
    /// - A token that cannot start a command is skipped up to the next
    ///   command start, so the command after it survives
    /// - An empty list is itself an error, marked the same way
    pub fn commands(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();

        loop {
            self.poll_cancel();
            if self.at_block_boundary() {
                break;
            }

            let start = self.cursor.peek().span;
            let position = self.cursor.position();
            match self.command() {
                Ok(command) => commands.push(command),
                Err(error) if self.cursor.position() == position => {
                    let node = self.recover_stray(error, start);
                    commands.push(Command::Error(node));
                }
                Err(error) => {
                    let node = self.recover_command(error, start);
                    commands.push(Command::Error(node));
                }
            }
        }

        if commands.is_empty() {
            let error = self.unexpected(&["command"]);
            let node = ErrorNode::new(error.span, error.message.clone());
            self.report(error);
            commands.push(Command::Error(node));
        }

        commands
    }

    /// Parses a single command, dispatching on the leading token.
    pub fn command(&mut self) -> ParseResult<Command> {
        match self.cursor.peek_kind() {
            TokenKind::Pidentifier => self.assignment_or_call(),
            TokenKind::Keyword(Keyword::If) => self.if_command(),
            TokenKind::Keyword(Keyword::While) => self.while_command(),
            TokenKind::Keyword(Keyword::Repeat) => self.repeat_command(),
            TokenKind::Keyword(Keyword::For) => self.for_command(),
            TokenKind::Keyword(Keyword::Read) => self.read_command(),
            TokenKind::Keyword(Keyword::Write) => self.write_command(),
            _ => Err(self.unexpected(&["command"])),
        }
    }

    /// `identifier := expression ;` or `pidentifier ( args ) ;`
    ///
    /// Both begin with a name; the token after it (and after any `[...]`)
    /// decides: `(` is a call, `:=` an assignment.
    fn assignment_or_call(&mut self) -> ParseResult<Command> {
        let name = self.consume_pidentifier()?;
        let start = name.span;

        if self.match_symbol("(") {
            let args = self.args()?;
            self.consume_symbol(")")?;
            self.end_of_command()?;

            return Ok(Command::ProcCall {
                name,
                args,
                span: self.cursor.span_from(start),
            });
        }

        let target = self.identifier_after(name)?;

        if !self.match_symbol(":=") {
            return Err(match target {
                Identifier::Plain(_) => self.unexpected(&["`:=`", "`(`", "`[`"]),
                _ => self.unexpected(&["`:=`"]),
            });
        }

        let value = self.expression()?;
        self.end_of_command()?;

        Ok(Command::Assignment {
            target,
            value,
            span: self.cursor.span_from(start),
        })
    }

    /// `IF condition THEN commands [ELSE commands] ENDIF`
    ///
    /// After the then-branch one token decides the form: `ELSE` opens the
    /// else-branch, anything else must be `ENDIF`. An inner `IF` always
    /// consumes its own `ENDIF` first, so an `ELSE` seen here belongs to
    /// this `IF`.
    fn if_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::If)?.span;

        let header = self.block_header(Keyword::Then, THEN_BRANCH_END, |p| {
            let condition = p.condition()?;
            p.consume_keyword(Keyword::Then)?;
            Ok(condition)
        });
        let then_branch = self.block_body(&header, THEN_BRANCH_END);

        let else_branch = if self.match_keyword(Keyword::Else) {
            Some(self.block(ELSE_BRANCH_END))
        } else if self.check_keyword(Keyword::EndIf) {
            None
        } else {
            return Err(self.unexpected(&["ELSE", "ENDIF"]));
        };

        self.consume_keyword(Keyword::EndIf)?;
        let span = self.cursor.span_from(start);

        Ok(match (header, else_branch) {
            (Header::Broken { message, .. }, _) => Command::Error(ErrorNode::new(span, message)),
            (Header::Parsed(condition), Some(else_branch)) => Command::IfThenElse {
                condition,
                then_branch,
                else_branch,
                span,
            },
            (Header::Parsed(condition), None) => Command::IfThen {
                condition,
                then_branch,
                span,
            },
        })
    }

    /// `WHILE condition DO commands ENDWHILE`
    fn while_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::While)?.span;

        let header = self.block_header(Keyword::Do, WHILE_END, |p| {
            let condition = p.condition()?;
            p.consume_keyword(Keyword::Do)?;
            Ok(condition)
        });
        let body = self.block_body(&header, WHILE_END);

        self.consume_keyword(Keyword::EndWhile)?;
        let span = self.cursor.span_from(start);

        Ok(match header {
            Header::Parsed(condition) => Command::While {
                condition,
                body,
                span,
            },
            Header::Broken { message, .. } => Command::Error(ErrorNode::new(span, message)),
        })
    }

    /// `REPEAT commands UNTIL condition ;`
    fn repeat_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::Repeat)?.span;

        let body = self.block(REPEAT_END);
        self.consume_keyword(Keyword::Until)?;
        let condition = self.condition()?;
        self.end_of_command()?;

        Ok(Command::RepeatUntil {
            body,
            condition,
            span: self.cursor.span_from(start),
        })
    }

    /// `FOR pidentifier FROM value (TO | DOWNTO) value DO commands ENDFOR`
    fn for_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::For)?.span;

        let header = self.block_header(Keyword::Do, FOR_END, |p| {
            let iterator = p.consume_pidentifier()?;
            p.consume_keyword(Keyword::From)?;
            let from = p.value()?;

            let downto = if p.match_keyword(Keyword::To) {
                false
            } else if p.match_keyword(Keyword::Downto) {
                true
            } else {
                return Err(p.unexpected(&["TO", "DOWNTO"]));
            };

            let to = p.value()?;
            p.consume_keyword(Keyword::Do)?;
            Ok((iterator, from, to, downto))
        });
        let body = self.block_body(&header, FOR_END);

        self.consume_keyword(Keyword::EndFor)?;
        let span = self.cursor.span_from(start);

        Ok(match header {
            Header::Parsed((iterator, from, to, false)) => Command::ForTo {
                iterator,
                from,
                to,
                body,
                span,
            },
            Header::Parsed((iterator, from, to, true)) => Command::ForDownto {
                iterator,
                from,
                to,
                body,
                span,
            },
            Header::Broken { message, .. } => Command::Error(ErrorNode::new(span, message)),
        })
    }

    /// `READ identifier ;`
    fn read_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::Read)?.span;
        let target = self.identifier()?;
        self.end_of_command()?;

        Ok(Command::Read {
            target,
            span: self.cursor.span_from(start),
        })
    }

    /// `WRITE value ;`
    fn write_command(&mut self) -> ParseResult<Command> {
        let start = self.consume_keyword(Keyword::Write)?.span;
        let value = self.value()?;
        self.end_of_command()?;

        Ok(Command::Write {
            value,
            span: self.cursor.span_from(start),
        })
    }

    /// The terminating `;` of a simple command.
    fn end_of_command(&mut self) -> ParseResult<()> {
        if self.match_symbol(";") {
            return Ok(());
        }

        let error = self.unexpected(&["`;`"]);
        Err(match self.cursor.peek_kind() {
            TokenKind::Keyword(keyword) if !keyword.starts_command() => {
                error.with_help(format!("add `;` before `{}`", keyword))
            }
            _ => error,
        })
    }

    /// Parses a block command's header with `parse`.
    ///
    /// On failure the error is reported and tokens are discarded up to
    /// `resume` (consumed) or to one of `closers` or an enclosing block's
    /// closer (not consumed), so a broken condition costs exactly one
    /// diagnostic.
    fn block_header<T>(
        &mut self,
        resume: Keyword,
        closers: &'static [Keyword],
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Header<T> {
        let error = match parse(self) {
            Ok(header) => return Header::Parsed(header),
            Err(error) => error,
        };

        let message = error.message.clone();
        self.report(error);

        let open = self.open_closers();
        let skipped = self.cursor.skip_until(|t| {
            t.is_keyword(resume) || closers.iter().any(|&k| t.is_keyword(k)) || is_sync_point(t, &open)
        });
        let resumed = self.match_keyword(resume);

        debug!(skipped, resumed, "resynchronized after block header error");
        Header::Broken { message, resumed }
    }

    /// Body of a block command; skipped when its header never reached the
    /// opening keyword.
    fn block_body<T>(&mut self, header: &Header<T>, closers: &'static [Keyword]) -> Vec<Command> {
        match header {
            Header::Broken { resumed: false, .. } => Vec::new(),
            _ => self.block(closers),
        }
    }

    /// Statement-level recovery.
    ///
    /// Reports `error`, then discards tokens through the next `;` or up to
    /// (not including) a block boundary. Returns the marker covering
    /// everything from `start` to the last discarded token.
    fn recover_command(&mut self, error: ParseError, start: Span) -> ErrorNode {
        let message = error.message.clone();
        let at = error.span;
        self.report(error);

        let open = self.open_closers();
        let skipped = self
            .cursor
            .skip_until(|t| t.is_symbol(";") || is_sync_point(t, &open));
        self.match_symbol(";");

        debug!(
            skipped,
            line = at.line,
            column = at.column,
            "resynchronized after command error"
        );

        ErrorNode::new(self.cursor.span_from(start), message)
    }

    /// Recovery for a token that cannot begin a command.
    ///
    /// The token is discarded along with anything up to the next command
    /// start, `;` (consumed) or block boundary, so the command that
    /// follows is still parsed.
    fn recover_stray(&mut self, error: ParseError, start: Span) -> ErrorNode {
        let message = error.message.clone();
        self.report(error);

        self.cursor.advance();
        let open = self.open_closers();
        let skipped = self
            .cursor
            .skip_until(|t| starts_command(t) || t.is_symbol(";") || is_sync_point(t, &open));
        self.match_symbol(";");

        debug!(
            skipped = skipped + 1,
            line = start.line,
            column = start.column,
            "skipped stray tokens between commands"
        );

        ErrorNode::new(self.cursor.span_from(start), message)
    }

    /// Keywords that currently close some open block.
    fn open_closers(&self) -> Vec<Keyword> {
        self.open_blocks
            .iter()
            .flat_map(|closers| closers.iter().copied())
            .collect()
    }

    fn at_block_boundary(&self) -> bool {
        let open = self.open_closers();
        is_sync_point(self.cursor.peek(), &open)
    }
}

/// Tokens that end every command list: the sentinel, the top-level
/// keywords, and any closer an enclosing construct is waiting for.
fn is_sync_point(token: &Token, open: &[Keyword]) -> bool {
    match token.kind {
        TokenKind::Eof => true,
        TokenKind::Keyword(Keyword::Procedure | Keyword::Program) => true,
        TokenKind::Keyword(keyword) => open.contains(&keyword),
        _ => false,
    }
}
