/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the JFTT recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and the public entry points
 *   - Program, procedure and declaration parsing
 *   - Command parsing and statement-level recovery
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Token cursor with one-token lookahead and resync primitives.
pub mod cursor;

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes `parse`, `parse_with` and `parse_tokens`
#[allow(clippy::module_inception)]
pub mod parser;

/// Program-level parsing:
/// - procedures and their parameter lists
/// - the main block
/// - declarations
pub mod program;

/// Command-level parsing:
/// - assignment / call / read / write
/// - if / while / repeat / for
/// - statement recovery
pub mod statements;

/// Expression-level parsing:
/// - expression → value (op value)?
/// - condition, identifier, call arguments
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - keyword and symbol consumption
pub mod helpers;

pub use parser::{parse, parse_tokens, parse_with, ParseOptions, ParseOutput, Parser};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Command, Declaration, Expression, Identifier, Parameter, Procedure, Value};
    use crate::error::ErrorKind;

    fn clean(source: &str) -> crate::ast::Program {
        let output = parse(source);
        assert!(
            output.diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            output.diagnostics
        );
        output.program.expect("tree")
    }

    #[test]
    fn minimal_program() {
        let program = clean("PROGRAM IS BEGIN WRITE 1; END");
        assert!(program.procedures.is_empty());
        assert!(program.main.declarations.is_empty());
        assert_eq!(program.main.commands.len(), 1);
    }

    #[test]
    fn negative_literal_after_write() {
        let program = clean("PROGRAM IS BEGIN WRITE -5; END");
        match &program.main.commands[0] {
            Command::Write {
                value: Value::Number(n),
                ..
            } => assert_eq!(n.value, -5),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn minus_after_identifier_is_subtraction() {
        let program = clean("PROGRAM IS y BEGIN y := y-1; END");
        match &program.main.commands[0] {
            Command::Assignment {
                value: Expression::Binary { op, .. },
                ..
            } => assert_eq!(op.symbol(), "-"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn array_parameter_keeps_marker() {
        let program = clean("PROCEDURE p(T a, n) IS BEGIN a[n] := 0; END PROGRAM IS BEGIN WRITE 1; END");
        let def = match &program.procedures[0] {
            Procedure::Def(def) => def,
            other => panic!("unexpected procedure {:?}", other),
        };
        assert!(def.params[0].is_array_ref());
        assert!(matches!(def.params[1], Parameter::Scalar(_)));
        assert!(matches!(
            def.commands[0],
            Command::Assignment {
                target: Identifier::IndexedByName { .. },
                ..
            }
        ));
    }

    #[test]
    fn array_declaration_bounds() {
        let program = clean("PROGRAM IS t[1:10], n BEGIN READ t[1]; END");
        assert_eq!(program.main.declarations[0].range(), Some((1, 10)));
        assert!(matches!(program.main.declarations[1], Declaration::Scalar(_)));
    }

    #[test]
    fn trailing_tokens_are_reported() {
        let output = parse("PROGRAM IS BEGIN WRITE 1; END x");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, ErrorKind::SyntaxError);

        let trailing = output.program.and_then(|p| p.trailing);
        assert_eq!(trailing.map(|node| node.span.column), Some(31));
    }
}
