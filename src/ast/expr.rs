/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  Values, identifiers, expressions and conditions.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// A pidentifier together with where it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub text: String,
    pub span: Span,
}

impl Name {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// An integer literal. The sign is part of the literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Number {
    pub value: i64,
    pub span: Span,
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Identifier {
    /// `x`
    Plain(Name),

    /// `t[i]`
    IndexedByName { array: Name, index: Name, span: Span },

    /// `t[3]`
    IndexedByNumber { array: Name, index: Number, span: Span },
}

impl Identifier {
    /// The variable (or array) being referenced.
    pub fn base(&self) -> &Name {
        match self {
            Identifier::Plain(name) => name,
            Identifier::IndexedByName { array, .. } | Identifier::IndexedByNumber { array, .. } => {
                array
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Identifier::Plain(name) => name.span,
            Identifier::IndexedByName { span, .. } | Identifier::IndexedByNumber { span, .. } => {
                *span
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Number(Number),
    Identifier(Identifier),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Value::Number(number) => number.span,
            Value::Identifier(identifier) => identifier.span(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "%" => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Either a single value or exactly one operator between two values.
///
/// The language has no precedence or chaining: `a + b + c` is rejected by
/// the parser, never folded into a deeper tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression {
    Single(Value),
    Binary {
        op: BinaryOp,
        left: Value,
        right: Value,
        span: Span,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Single(value) => value.span(),
            Expression::Binary { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Comparator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Comparator::Eq),
            "!=" => Some(Comparator::Neq),
            ">" => Some(Comparator::Gt),
            "<" => Some(Comparator::Lt),
            ">=" => Some(Comparator::Ge),
            "<=" => Some(Comparator::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Neq => "!=",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub left: Expression,
    pub op: Comparator,
    pub right: Expression,
    pub span: Span,
}
