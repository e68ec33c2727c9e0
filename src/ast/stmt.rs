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

use crate::ast::expr::{Condition, Expression, Identifier, Name, Value};
use crate::ast::ErrorNode;
use crate::span::Span;
use serde::Serialize;

/// All JFTT commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /* ----------------------------- */
    /* ASSIGNMENT & I/O              */
    /* ----------------------------- */

    Assignment {
        target: Identifier,
        value: Expression,
        span: Span,
    },

    Read {
        target: Identifier,
        span: Span,
    },

    Write {
        value: Value,
        span: Span,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    IfThenElse {
        condition: Condition,
        then_branch: Vec<Command>,
        else_branch: Vec<Command>,
        span: Span,
    },

    IfThen {
        condition: Condition,
        then_branch: Vec<Command>,
        span: Span,
    },

    While {
        condition: Condition,
        body: Vec<Command>,
        span: Span,
    },

    RepeatUntil {
        body: Vec<Command>,
        condition: Condition,
        span: Span,
    },

    ForTo {
        iterator: Name,
        from: Value,
        to: Value,
        body: Vec<Command>,
        span: Span,
    },

    ForDownto {
        iterator: Name,
        from: Value,
        to: Value,
        body: Vec<Command>,
        span: Span,
    },

    /* ----------------------------- */
    /* PROCEDURES                    */
    /* ----------------------------- */

    ProcCall {
        name: Name,
        args: Vec<Name>,
        span: Span,
    },

    /* ----------------------------- */
    /* RECOVERY                      */
    /* ----------------------------- */

    /// Stands in for a command that failed to parse.
    Error(ErrorNode),
}

impl Command {
    pub fn span(&self) -> Span {
        match self {
            Command::Assignment { span, .. }
            | Command::Read { span, .. }
            | Command::Write { span, .. }
            | Command::IfThenElse { span, .. }
            | Command::IfThen { span, .. }
            | Command::While { span, .. }
            | Command::RepeatUntil { span, .. }
            | Command::ForTo { span, .. }
            | Command::ForDownto { span, .. }
            | Command::ProcCall { span, .. } => *span,
            Command::Error(node) => node.span,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Command::Error(_))
    }
}
