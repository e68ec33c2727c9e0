/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     printer.rs
 * Purpose:  Turning trees back into text.
 *
 * Two renderings are provided:
 *   - `print_program`: canonical JFTT source. Parsing the output again
 *     gives a tree of the same shape.
 *   - `dump_program`: an indented, node-per-line dump for debugging.
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

use std::fmt;

use crate::ast::{
    Command, Condition, Declaration, ErrorNode, Expression, Identifier, Main, Parameter, Procedure,
    Program, Value,
};
use crate::span::Span;

/* ----------------------------- */
/* INLINE FORMS                  */
/* ----------------------------- */

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Plain(name) => write!(f, "{}", name.text),
            Identifier::IndexedByName { array, index, .. } => {
                write!(f, "{}[{}]", array.text, index.text)
            }
            Identifier::IndexedByNumber { array, index, .. } => {
                write!(f, "{}[{}]", array.text, index.value)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number.value),
            Value::Identifier(identifier) => write!(f, "{}", identifier),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Single(value) => write!(f, "{}", value),
            Expression::Binary {
                op, left, right, ..
            } => write!(f, "{} {} {}", left, op.symbol(), right),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.symbol(), self.right)
    }
}

/* ----------------------------- */
/* SOURCE PRINTER                */
/* ----------------------------- */

/// Renders `program` as canonical source text.
///
/// Layout is fixed: two-space indentation, one command per line, a blank
/// line between units. Error markers become `#` comments, so the output of
/// a broken tree is still readable but will not parse cleanly.
///
/// # Example
/// ```rust
/// let program = jftt::parse("PROGRAM IS x BEGIN x:=1+2; WRITE x; END")
///     .program
///     .unwrap();
/// let text = jftt::printer::print_program(&program);
/// assert!(text.contains("x := 1 + 2;"));
/// ```
pub fn print_program(program: &Program) -> String {
    let mut printer = SourcePrinter::default();

    for procedure in &program.procedures {
        printer.procedure(procedure);
        printer.blank();
    }
    printer.main(&program.main);
    if let Some(node) = &program.trailing {
        printer.error(node);
    }

    printer.out
}

#[derive(Default)]
struct SourcePrinter {
    out: String,
    depth: usize,
}

impl SourcePrinter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn error(&mut self, node: &ErrorNode) {
        self.line(&format!("# error: {}", node.message));
    }

    fn procedure(&mut self, procedure: &Procedure) {
        let def = match procedure {
            Procedure::Def(def) => def,
            Procedure::Error(node) => return self.error(node),
        };

        let mut params = Vec::new();
        for param in &def.params {
            match param {
                Parameter::Scalar(name) => params.push(name.text.clone()),
                Parameter::ArrayRef { name, .. } => params.push(format!("T {}", name.text)),
                Parameter::Error(node) => self.error(node),
            }
        }

        self.line(&format!(
            "PROCEDURE {}({}) IS",
            def.name.text,
            params.join(", ")
        ));
        self.body(&def.declarations, &def.commands);
    }

    fn main(&mut self, main: &Main) {
        self.line("PROGRAM IS");
        self.body(&main.declarations, &main.commands);
    }

    fn body(&mut self, declarations: &[Declaration], commands: &[Command]) {
        let mut items = Vec::new();
        for declaration in declarations {
            match declaration {
                Declaration::Scalar(name) => items.push(name.text.clone()),
                Declaration::Array {
                    name, lower, upper, ..
                } => items.push(format!("{}[{}:{}]", name.text, lower.value, upper.value)),
                Declaration::Error(node) => self.error(node),
            }
        }

        if !items.is_empty() {
            self.depth += 1;
            self.line(&items.join(", "));
            self.depth -= 1;
        }

        self.line("BEGIN");
        self.commands(commands);
        self.line("END");
    }

    fn commands(&mut self, commands: &[Command]) {
        self.depth += 1;
        for command in commands {
            self.command(command);
        }
        self.depth -= 1;
    }

    fn command(&mut self, command: &Command) {
        match command {
            Command::Assignment { target, value, .. } => {
                self.line(&format!("{} := {};", target, value))
            }
            Command::Read { target, .. } => self.line(&format!("READ {};", target)),
            Command::Write { value, .. } => self.line(&format!("WRITE {};", value)),

            Command::IfThenElse {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.line(&format!("IF {} THEN", condition));
                self.commands(then_branch);
                self.line("ELSE");
                self.commands(else_branch);
                self.line("ENDIF");
            }
            Command::IfThen {
                condition,
                then_branch,
                ..
            } => {
                self.line(&format!("IF {} THEN", condition));
                self.commands(then_branch);
                self.line("ENDIF");
            }

            Command::While {
                condition, body, ..
            } => {
                self.line(&format!("WHILE {} DO", condition));
                self.commands(body);
                self.line("ENDWHILE");
            }
            Command::RepeatUntil {
                body, condition, ..
            } => {
                self.line("REPEAT");
                self.commands(body);
                self.line(&format!("UNTIL {};", condition));
            }

            Command::ForTo {
                iterator,
                from,
                to,
                body,
                ..
            } => {
                self.line(&format!("FOR {} FROM {} TO {} DO", iterator.text, from, to));
                self.commands(body);
                self.line("ENDFOR");
            }
            Command::ForDownto {
                iterator,
                from,
                to,
                body,
                ..
            } => {
                self.line(&format!("FOR {} FROM {} DOWNTO {} DO", iterator.text, from, to));
                self.commands(body);
                self.line("ENDFOR");
            }

            Command::ProcCall { name, args, .. } => {
                let args: Vec<&str> = args.iter().map(|arg| arg.text.as_str()).collect();
                self.line(&format!("{}({});", name.text, args.join(", ")));
            }

            Command::Error(node) => self.error(node),
        }
    }
}

/* ----------------------------- */
/* TREE DUMP                     */
/* ----------------------------- */

/// Renders `program` as an indented tree, one node per line with its
/// position, followed by its attributes and children.
///
/// ```text
/// Program: (line 1, col 1)
///   main:
///     Main: (line 1, col 1)
///       commands:
///         Write: (line 1, col 18)
///           value:
///             Number: (line 1, col 24)
///               value: 5
/// ```
pub fn dump_program(program: &Program) -> String {
    let mut dumper = TreeDumper::default();
    dumper.program(program, 0);
    dumper.out
}

#[derive(Default)]
struct TreeDumper {
    out: String,
}

impl TreeDumper {
    const INDENT: usize = 2;

    fn node(&mut self, indent: usize, kind: &str, span: Span) {
        self.out.push_str(&format!(
            "{}{}: (line {}, col {})\n",
            " ".repeat(indent * Self::INDENT),
            kind,
            span.line,
            span.column
        ));
    }

    fn attr(&mut self, indent: usize, key: &str, value: impl fmt::Display) {
        self.out.push_str(&format!(
            "{}{}: {}\n",
            " ".repeat(indent * Self::INDENT),
            key,
            value
        ));
    }

    fn label(&mut self, indent: usize, key: &str) {
        self.out
            .push_str(&format!("{}{}:\n", " ".repeat(indent * Self::INDENT), key));
    }

    fn error(&mut self, node: &ErrorNode, indent: usize) {
        self.node(indent, "Error", node.span);
        self.attr(indent + 1, "message", &node.message);
    }

    fn program(&mut self, program: &Program, indent: usize) {
        self.node(indent, "Program", program.span);

        if !program.procedures.is_empty() {
            self.label(indent + 1, "procedures");
            for procedure in &program.procedures {
                self.procedure(procedure, indent + 2);
            }
        }

        self.label(indent + 1, "main");
        self.main(&program.main, indent + 2);

        if let Some(node) = &program.trailing {
            self.label(indent + 1, "trailing");
            self.error(node, indent + 2);
        }
    }

    fn procedure(&mut self, procedure: &Procedure, indent: usize) {
        let def = match procedure {
            Procedure::Def(def) => def,
            Procedure::Error(node) => return self.error(node, indent),
        };

        self.node(indent, "Procedure", def.span);
        self.attr(indent + 1, "name", &def.name.text);

        let params: Vec<String> = def
            .params
            .iter()
            .map(|param| match param {
                Parameter::Scalar(name) => name.text.clone(),
                Parameter::ArrayRef { name, .. } => format!("T {}", name.text),
                Parameter::Error(_) => "<error>".to_string(),
            })
            .collect();
        if !params.is_empty() {
            self.attr(indent + 1, "parameters", params.join(", "));
        }

        self.declarations(&def.declarations, indent + 1);
        self.command_list("commands", &def.commands, indent + 1);
    }

    fn main(&mut self, main: &Main, indent: usize) {
        self.node(indent, "Main", main.span);
        self.declarations(&main.declarations, indent + 1);
        self.command_list("commands", &main.commands, indent + 1);
    }

    fn declarations(&mut self, declarations: &[Declaration], indent: usize) {
        if declarations.is_empty() {
            return;
        }

        self.label(indent, "declarations");
        for declaration in declarations {
            match declaration {
                Declaration::Scalar(name) => {
                    self.node(indent + 1, "Declaration", name.span);
                    self.attr(indent + 2, "name", &name.text);
                }
                Declaration::Array {
                    name,
                    lower,
                    upper,
                    span,
                } => {
                    self.node(indent + 1, "Declaration", *span);
                    self.attr(indent + 2, "name", &name.text);
                    self.attr(
                        indent + 2,
                        "array_bounds",
                        format!("[{}:{}]", lower.value, upper.value),
                    );
                }
                Declaration::Error(node) => self.error(node, indent + 1),
            }
        }
    }

    fn command_list(&mut self, key: &str, commands: &[Command], indent: usize) {
        if commands.is_empty() {
            return;
        }

        self.label(indent, key);
        for command in commands {
            self.command(command, indent + 1);
        }
    }

    fn command(&mut self, command: &Command, indent: usize) {
        let inner = indent + 1;

        match command {
            Command::Assignment {
                target,
                value,
                span,
            } => {
                self.node(indent, "Assignment", *span);
                self.label(inner, "target");
                self.identifier(target, inner + 1);
                self.label(inner, "value");
                self.expression(value, inner + 1);
            }
            Command::Read { target, span } => {
                self.node(indent, "Read", *span);
                self.label(inner, "target");
                self.identifier(target, inner + 1);
            }
            Command::Write { value, span } => {
                self.node(indent, "Write", *span);
                self.label(inner, "value");
                self.value(value, inner + 1);
            }
            Command::IfThenElse {
                condition,
                then_branch,
                else_branch,
                span,
            } => {
                self.node(indent, "IfThenElse", *span);
                self.condition(condition, inner);
                self.command_list("then_block", then_branch, inner);
                self.command_list("else_block", else_branch, inner);
            }
            Command::IfThen {
                condition,
                then_branch,
                span,
            } => {
                self.node(indent, "IfThen", *span);
                self.condition(condition, inner);
                self.command_list("then_block", then_branch, inner);
            }
            Command::While {
                condition,
                body,
                span,
            } => {
                self.node(indent, "While", *span);
                self.condition(condition, inner);
                self.command_list("body", body, inner);
            }
            Command::RepeatUntil {
                body,
                condition,
                span,
            } => {
                self.node(indent, "RepeatUntil", *span);
                self.command_list("body", body, inner);
                self.condition(condition, inner);
            }
            Command::ForTo {
                iterator,
                from,
                to,
                body,
                span,
            }
            | Command::ForDownto {
                iterator,
                from,
                to,
                body,
                span,
            } => {
                let kind = if matches!(command, Command::ForTo { .. }) {
                    "ForTo"
                } else {
                    "ForDownto"
                };
                self.node(indent, kind, *span);
                self.attr(inner, "iterator", &iterator.text);
                self.label(inner, "start");
                self.value(from, inner + 1);
                self.label(inner, "end");
                self.value(to, inner + 1);
                self.command_list("body", body, inner);
            }
            Command::ProcCall { name, args, span } => {
                self.node(indent, "ProcCall", *span);
                self.attr(inner, "name", &name.text);
                let args: Vec<&str> = args.iter().map(|arg| arg.text.as_str()).collect();
                self.attr(inner, "arguments", args.join(", "));
            }
            Command::Error(node) => self.error(node, indent),
        }
    }

    fn condition(&mut self, condition: &Condition, indent: usize) {
        self.label(indent, "condition");
        self.node(indent + 1, "Condition", condition.span);
        self.attr(indent + 2, "operator", condition.op.symbol());
        self.label(indent + 2, "left");
        self.expression(&condition.left, indent + 3);
        self.label(indent + 2, "right");
        self.expression(&condition.right, indent + 3);
    }

    fn expression(&mut self, expression: &Expression, indent: usize) {
        match expression {
            Expression::Single(value) => self.value(value, indent),
            Expression::Binary {
                op,
                left,
                right,
                span,
            } => {
                self.node(indent, "BinaryExpression", *span);
                self.attr(indent + 1, "operator", op.symbol());
                self.label(indent + 1, "left");
                self.value(left, indent + 2);
                self.label(indent + 1, "right");
                self.value(right, indent + 2);
            }
        }
    }

    fn value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Number(number) => {
                self.node(indent, "Number", number.span);
                self.attr(indent + 1, "value", number.value);
            }
            Value::Identifier(identifier) => self.identifier(identifier, indent),
        }
    }

    fn identifier(&mut self, identifier: &Identifier, indent: usize) {
        self.node(indent, "Identifier", identifier.span());
        self.attr(indent + 1, "name", &identifier.base().text);

        match identifier {
            Identifier::Plain(_) => {}
            Identifier::IndexedByName { index, .. } => {
                self.label(indent + 1, "array_index");
                self.node(indent + 2, "Identifier", index.span);
                self.attr(indent + 3, "name", &index.text);
            }
            Identifier::IndexedByNumber { index, .. } => {
                self.label(indent + 1, "array_index");
                self.node(indent + 2, "Number", index.span);
                self.attr(indent + 3, "value", index.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn prints_canonical_layout() {
        let program = parse("PROGRAM IS x BEGIN x:=1+2; WRITE x; END")
            .program
            .unwrap();

        assert_eq!(
            print_program(&program),
            "PROGRAM IS\n  x\nBEGIN\n  x := 1 + 2;\n  WRITE x;\nEND\n"
        );
    }

    #[test]
    fn dump_shows_positions_and_attributes() {
        let program = parse("PROGRAM IS t[0:9] BEGIN WRITE t[3]; END")
            .program
            .unwrap();
        let dump = dump_program(&program);

        assert!(dump.starts_with("Program: (line 1, col 1)\n"));
        assert!(dump.contains("array_bounds: [0:9]"));
        assert!(dump.contains("Write: (line 1, col 25)"));
        assert!(dump.contains("array_index:"));
    }
}
