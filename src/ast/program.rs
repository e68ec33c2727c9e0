/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     program.rs
 * Purpose:  Top-level structure: the program, its procedures and main.
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

use crate::ast::expr::Name;
use crate::ast::param::{Declaration, Parameter};
use crate::ast::stmt::Command;
use crate::ast::ErrorNode;
use crate::span::Span;
use serde::Serialize;

/// The root of every tree: any number of procedures, then exactly one main.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub procedures: Vec<Procedure>,
    pub main: Main,

    /// Input left over after main's `END`, discarded as one unit.
    pub trailing: Option<ErrorNode>,

    pub span: Span,
}

/// Entry of the procedure list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Procedure {
    Def(ProcedureDef),

    /// A procedure whose header could not be read at all.
    Error(ErrorNode),
}

/// `PROCEDURE name ( args_decl ) IS [declarations] BEGIN commands END`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureDef {
    pub name: Name,
    pub params: Vec<Parameter>,
    pub declarations: Vec<Declaration>,
    pub commands: Vec<Command>,
    pub span: Span,
}

/// `PROGRAM IS [declarations] BEGIN commands END`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Main {
    pub declarations: Vec<Declaration>,
    pub commands: Vec<Command>,
    pub span: Span,
}
