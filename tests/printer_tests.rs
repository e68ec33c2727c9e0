//! Source printing and tree dumps.

use jftt::parse;
use jftt::printer::{dump_program, print_program};

const SORT: &str = "
# bubble sort over a fixed-size array
PROCEDURE swap(T t, i, j) IS tmp BEGIN
  tmp:=t[i]; t[i]:=t[j]; t[j]:=tmp;
END

PROCEDURE sort(T t, n) IS i, j, k BEGIN
  FOR i FROM n DOWNTO 1 DO
    FOR j FROM 1 TO i DO
      k := j+1;
      IF t[j] > t[k] THEN swap(t, j, k); ENDIF
    ENDFOR
  ENDFOR
END

PROGRAM IS t[1:8], n, i BEGIN
  n := 8;
  i := 1;
  REPEAT READ t[i]; i := i + 1; UNTIL i > n;
  sort(t, n);
  WHILE i != 0 DO
    i := i - 1;
    IF i >= 1 THEN WRITE t[i]; ELSE WRITE -1; ENDIF
  ENDWHILE
END
";

fn reprint(source: &str) -> String {
    let output = parse(source);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics: {:#?}",
        output.diagnostics
    );
    print_program(&output.program.unwrap())
}

#[test]
fn printing_is_stable_under_reparsing() {
    let once = reprint(SORT);
    let twice = reprint(&once);
    assert_eq!(once, twice);
}

#[test]
fn reparsed_tree_has_the_same_shape() {
    let first = parse(SORT).program.unwrap();
    let second = parse(&print_program(&first)).program.unwrap();

    assert_eq!(first.procedures.len(), second.procedures.len());
    assert_eq!(first.main.commands.len(), second.main.commands.len());
    assert_eq!(
        first.main.declarations[0].range(),
        second.main.declarations[0].range()
    );
}

#[test]
fn printed_forms() {
    let text = reprint(SORT);

    assert!(text.contains("PROCEDURE swap(T t, i, j) IS\n  tmp\nBEGIN\n"));
    assert!(text.contains("  tmp := t[i];\n"));
    assert!(text.contains("FOR i FROM n DOWNTO 1 DO\n"));
    assert!(text.contains("      k := j + 1;\n"));
    assert!(text.contains("UNTIL i > n;\n"));
    assert!(text.contains("WRITE -1;\n"));
    assert!(text.contains("PROGRAM IS\n  t[1:8], n, i\nBEGIN\n"));
}

#[test]
fn error_markers_print_as_comments() {
    let output = parse("PROGRAM IS x BEGIN x := ; WRITE x; END");
    let text = print_program(&output.program.unwrap());

    assert!(text.contains("  # error: expected one of number, identifier, found `;`\n"));
    assert!(text.contains("  WRITE x;\n"));
}

#[test]
fn trailing_input_is_printed_and_dumped() {
    let output = parse("PROGRAM IS BEGIN WRITE 1; END PROCEDURE p(a) IS BEGIN WRITE a; END");
    let program = output.program.unwrap();

    let text = print_program(&program);
    assert!(text.ends_with("END\n# error: expected end of input, found `PROCEDURE`\n"));

    let dump = dump_program(&program);
    assert!(dump.contains("  trailing:\n    Error: (line 1, col 31)\n"));
}

#[test]
fn tree_dump_lists_procedures_and_parameters() {
    let program = parse(SORT).program.unwrap();
    let dump = dump_program(&program);

    assert!(dump.contains("  procedures:\n    Procedure: (line 3, col 1)\n      name: swap\n"));
    assert!(dump.contains("parameters: T t, i, j"));
    assert!(dump.contains("ForDownto:"));
    assert!(dump.contains("arguments: t, j, k"));
    assert!(dump.contains("operator: >="));
}
