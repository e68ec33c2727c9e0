/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     param.rs
 * Purpose:  Variable declarations and procedure parameters.
 *
 * This file defines the two ordered-list item types of the grammar:
 *  - `Declaration` (`declarations`): scalars and `name[lo:hi]` arrays
 *  - `Parameter`   (`args_decl`):    by-name scalars and `T name` arrays
 *
 * Order in both lists is significant: parameters bind to call arguments
 * by position.
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

use crate::ast::expr::{Name, Number};
use crate::ast::ErrorNode;
use crate::span::Span;
use serde::Serialize;

/// One entry of a `declarations` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Declaration {
    /// `x`
    Scalar(Name),

    /// `t[lower:upper]`
    ///
    /// Bounds are kept exactly as written; `lower <= upper` is a semantic
    /// check and is not enforced here.
    Array {
        name: Name,
        lower: Number,
        upper: Number,
        span: Span,
    },

    /// An item the parser could not read.
    Error(ErrorNode),
}

impl Declaration {
    pub fn name(&self) -> Option<&Name> {
        match self {
            Declaration::Scalar(name) | Declaration::Array { name, .. } => Some(name),
            Declaration::Error(_) => None,
        }
    }

    /// `(lower, upper)` for array declarations.
    pub fn range(&self) -> Option<(i64, i64)> {
        match self {
            Declaration::Array { lower, upper, .. } => Some((lower.value, upper.value)),
            _ => None,
        }
    }
}

/// One entry of an `args_decl` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Parameter {
    /// A plain parameter.
    Scalar(Name),

    /// `T name`: the caller's array is passed by reference.
    ArrayRef { name: Name, span: Span },

    /// An item the parser could not read.
    Error(ErrorNode),
}

impl Parameter {
    pub fn name(&self) -> Option<&Name> {
        match self {
            Parameter::Scalar(name) | Parameter::ArrayRef { name, .. } => Some(name),
            Parameter::Error(_) => None,
        }
    }

    /// Whether the parameter was declared with the `T` marker.
    pub fn is_array_ref(&self) -> bool {
        matches!(self, Parameter::ArrayRef { .. })
    }
}
