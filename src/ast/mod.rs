/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  The syntax tree produced by the parser.
 *
 * Nodes are plain data. They are built once during parsing and never
 * mutated afterwards; later passes build their own structures or tag
 * nodes externally (every node carries a `Span` to key on).
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

pub mod expr;
pub mod param;
pub mod program;
pub mod stmt;

use crate::span::Span;
use serde::Serialize;

pub use expr::{BinaryOp, Comparator, Condition, Expression, Identifier, Name, Number, Value};
pub use param::{Declaration, Parameter};
pub use program::{Main, Procedure, ProcedureDef, Program};
pub use stmt::Command;

/// Marker left in the tree wherever the parser recovered from an error.
///
/// The span covers the tokens that were discarded (or the position of the
/// missing token), and `message` repeats the diagnostic that was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNode {
    pub span: Span,
    pub message: String,
}

impl ErrorNode {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}
