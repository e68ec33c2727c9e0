//! Diagnostics and the trees left behind by recovery.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use jftt::ast::{Command, Declaration, Procedure};
use jftt::{parse, parse_with, ErrorKind, ParseOptions};

#[test]
fn missing_end_is_reported_at_end_of_input() {
    let output = parse("PROGRAM IS x BEGIN IF x = 1 THEN WRITE x; ENDIF");

    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(diagnostic.message, "expected END, found end of input");

    let commands = &output.program.unwrap().main.commands;
    assert!(matches!(commands[0], Command::IfThen { .. }));
    assert!(commands[1].is_error());
}

#[test]
fn missing_final_end_keeps_literal_condition() {
    let output = parse("PROGRAM IS BEGIN IF 1 = 1 THEN WRITE 1; ENDIF");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(output.diagnostics[0].code, "E0004");

    match &output.program.unwrap().main.commands[0] {
        Command::IfThen { then_branch, .. } => {
            assert!(matches!(then_branch[0], Command::Write { .. }))
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn one_stray_token_gives_one_diagnostic() {
    let output = parse("PROGRAM IS x BEGIN READ x; WRITE WRITE x; WRITE 1; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].message,
        "expected one of number, identifier, found `WRITE`"
    );
    assert_eq!(output.diagnostics[0].span.column, 34);

    let commands = &output.program.unwrap().main.commands;
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], Command::Read { .. }));
    assert!(commands[1].is_error());
    assert!(matches!(commands[2], Command::Write { .. }));
}

#[test]
fn stray_token_between_commands_keeps_the_next_command() {
    let cases = [
        ("ENDIF", "`ENDIF`"),
        ("5", "number `5`"),
        (")", "`)`"),
    ];

    for (stray, found) in cases {
        let source = format!("PROGRAM IS x BEGIN READ x; {} WRITE x; END", stray);
        let output = parse(&source);

        assert_eq!(output.diagnostics.len(), 1, "input: {}", source);
        assert_eq!(
            output.diagnostics[0].message,
            format!("expected command, found {}", found)
        );

        let commands = &output.program.unwrap().main.commands;
        assert_eq!(commands.len(), 3, "input: {}", source);
        assert!(matches!(commands[0], Command::Read { .. }));
        assert!(commands[1].is_error());
        assert!(matches!(commands[2], Command::Write { .. }));
    }
}

#[test]
fn independent_errors_are_all_reported_in_order() {
    let output = parse(
        "PROGRAM IS x BEGIN
           x := ;
           WRITE ;
           READ x;
         END",
    );

    assert_eq!(output.diagnostics.len(), 2);
    assert_eq!(output.diagnostics[0].span.line, 2);
    assert_eq!(output.diagnostics[1].span.line, 3);

    let commands = &output.program.unwrap().main.commands;
    assert!(commands[0].is_error());
    assert!(commands[1].is_error());
    assert!(matches!(commands[2], Command::Read { .. }));
}

#[test]
fn missing_semicolon_before_closer_has_help() {
    let output = parse("PROGRAM IS x BEGIN IF x = 1 THEN WRITE x ENDIF END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].message, "expected `;`, found `ENDIF`");
    assert_eq!(
        output.diagnostics[0].help.as_deref(),
        Some("add `;` before `ENDIF`")
    );

    match &output.program.unwrap().main.commands[0] {
        Command::IfThen { then_branch, .. } => assert!(then_branch[0].is_error()),
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn broken_loop_condition_keeps_the_body() {
    let output = parse("PROGRAM IS x BEGIN WHILE x DO READ x ; ENDWHILE WRITE x; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].message.starts_with("expected one of `=`"));

    let commands = &output.program.unwrap().main.commands;
    assert_eq!(commands.len(), 2);
    assert!(commands[0].is_error());
    assert!(matches!(commands[1], Command::Write { .. }));
}

#[test]
fn error_inside_nested_block_does_not_escape_it() {
    let output = parse(
        "PROGRAM IS x BEGIN
           FOR i FROM 1 TO 5 DO
             x := x + ;
           ENDFOR
           WRITE x;
         END",
    );

    assert_eq!(output.diagnostics.len(), 1);
    let commands = &output.program.unwrap().main.commands;
    match &commands[0] {
        Command::ForTo { body, .. } => assert!(body[0].is_error()),
        other => panic!("unexpected command {:?}", other),
    }
    assert!(matches!(commands[1], Command::Write { .. }));
}

#[test]
fn empty_command_list() {
    let output = parse("PROGRAM IS BEGIN END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].message, "expected command, found `END`");
    assert!(output.program.unwrap().main.commands[0].is_error());
}

#[test]
fn missing_begin() {
    let output = parse("PROGRAM IS x WRITE x; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].message, "expected BEGIN, found `WRITE`");

    let commands = &output.program.unwrap().main.commands;
    assert!(commands[0].is_error());
    assert!(matches!(commands[1], Command::Write { .. }));
}

#[test]
fn missing_program_header() {
    let output = parse("x BEGIN WRITE x; END");

    assert_eq!(output.diagnostics.len(), 1);
    let main = output.program.unwrap().main;
    assert!(matches!(main.declarations[0], Declaration::Error(_)));
    assert_eq!(main.commands.len(), 1);
}

#[test]
fn broken_procedure_header() {
    let output = parse(
        "PROCEDURE p(a IS BEGIN WRITE a; END
         PROGRAM IS BEGIN WRITE 1; END",
    );

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].message, "expected `)`, found `IS`");

    let program = output.program.unwrap();
    assert!(matches!(program.procedures[0], Procedure::Error(_)));
    assert_eq!(program.main.commands.len(), 1);
}

#[test]
fn broken_declaration_item() {
    let output = parse("PROGRAM IS t[1:], n BEGIN READ n; END");

    assert_eq!(output.diagnostics.len(), 1);
    let main = output.program.unwrap().main;
    assert!(matches!(main.declarations[0], Declaration::Error(_)));
    assert!(matches!(main.declarations[1], Declaration::Scalar(_)));
}

#[test]
fn procedure_after_main_is_reported() {
    let output = parse("PROGRAM IS BEGIN WRITE 1; END PROCEDURE p(a) IS BEGIN WRITE a; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, ErrorKind::SyntaxError);
    assert!(output.diagnostics[0].help.is_some());

    let program = output.program.unwrap();
    assert!(program.procedures.is_empty());
    let trailing = program.trailing.expect("trailing input is marked");
    assert_eq!(trailing.span.column, 31);
    assert_eq!(trailing.message, "expected end of input, found `PROCEDURE`");
}

#[test]
fn second_main_block_is_marked_as_trailing_input() {
    let output = parse("PROGRAM IS x BEGIN x := 1; END PROGRAM IS BEGIN WRITE 1; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0].help.is_none());

    let program = output.program.unwrap();
    assert_eq!(program.main.commands.len(), 1);
    assert!(program.trailing.is_some());
}

#[test]
fn complete_program_has_no_trailing_marker() {
    let output = parse("PROGRAM IS BEGIN WRITE 1; END");
    assert!(output.program.unwrap().trailing.is_none());
}

#[test]
fn oversized_literal_is_malformed() {
    let output = parse("PROGRAM IS BEGIN WRITE 99999999999999999999; END");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, ErrorKind::MalformedNumber);
    assert!(output.program.unwrap().main.commands[0].is_error());
}

#[test]
fn lexical_error_aborts_without_a_tree() {
    let output = parse("PROGRAM IS x BEGIN x := 1 & 2; END");

    assert!(output.program.is_none());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, ErrorKind::LexicalError);
    assert_eq!(output.diagnostics[0].code, "E0001");
}

#[test]
fn mixed_case_keyword_is_a_lexical_error() {
    let output = parse("PROGRAM IS Begin END");

    assert!(output.program.is_none());
    assert_eq!(output.diagnostics[0].message, "unknown keyword `B`");
}

#[test]
fn diagnostic_limit_stops_the_parse() {
    let options = ParseOptions {
        max_diagnostics: Some(2),
        ..ParseOptions::default()
    };
    let output = parse_with(
        "PROGRAM IS x BEGIN x := ; WRITE ; READ ; WRITE ; END",
        &options,
    );

    assert_eq!(output.diagnostics.len(), 3);
    assert_eq!(output.diagnostics[2].kind, ErrorKind::TooManyErrors);
    assert!(output.program.is_some());
}

#[test]
fn cancelled_parse_reports_once() {
    let cancel = Arc::new(AtomicBool::new(true));
    let options = ParseOptions {
        cancel: Some(cancel),
        ..ParseOptions::default()
    };
    let output = parse_with("PROGRAM IS x BEGIN READ x; WRITE x; END", &options);

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].kind, ErrorKind::Cancelled);
}
