//! Token-level behaviour of the JFTT lexer.

use jftt::lexer::{tokenize, Keyword, Lexer, Token, TokenKind};
use jftt::LexError;

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.lexeme)
        .collect()
}

#[test]
fn keywords_and_names_are_separated_by_case() {
    let tokens = tokenize("PROGRAM IS n BEGIN END").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Program));
    assert_eq!(tokens[1].kind, TokenKind::Keyword(Keyword::Is));
    assert_eq!(tokens[2].kind, TokenKind::Pidentifier);
    assert_eq!(tokens[3].kind, TokenKind::Keyword(Keyword::Begin));
    assert_eq!(tokens[4].kind, TokenKind::Keyword(Keyword::End));
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn names_use_longest_match() {
    assert_eq!(lexemes("forx a1_b _tmp"), vec!["forx", "a1_b", "_tmp", ""]);
}

#[test]
fn array_marker_is_a_keyword() {
    let tokens = tokenize("T t").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::T));
    assert_eq!(tokens[1].kind, TokenKind::Pidentifier);
}

#[test]
fn two_character_symbols_win() {
    assert_eq!(
        lexemes("a:=b != c >= d <= e"),
        vec!["a", ":=", "b", "!=", "c", ">=", "d", "<=", "e", ""]
    );
}

#[test]
fn positions_are_one_based_and_track_lines() {
    let tokens = tokenize("READ x;\n  WRITE x;").unwrap();

    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (1, 6));
    assert_eq!((tokens[3].span.line, tokens[3].span.column), (2, 3));
    assert_eq!(tokens[3].span.len(), 5);
}

#[test]
fn comments_are_skipped_by_default() {
    assert_eq!(
        lexemes("WRITE 1; # trailing note\nWRITE 2;"),
        vec!["WRITE", "1", ";", "WRITE", "2", ";", ""]
    );
}

#[test]
fn write_negative_literal() {
    let tokens = tokenize("WRITE -5;").unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].lexeme, "-5");
}

#[test]
fn subtraction_after_closing_bracket() {
    assert_eq!(lexemes("t[i]-1"), vec!["t", "[", "i", "]", "-", "1", ""]);
}

#[test]
fn unknown_upper_case_word_is_rejected() {
    let err = tokenize("WRITEX 1;").unwrap_err();
    match err {
        LexError::UnknownKeyword { word, span } => {
            assert_eq!(word, "WRITEX");
            assert_eq!(span.column, 1);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn illegal_character_is_rejected() {
    let err = tokenize("x := 1 $ 2;").unwrap_err();
    assert_eq!(err.to_string(), "unexpected character `$`");
    assert_eq!(err.span().column, 8);
}

#[test]
fn lone_bang_has_help() {
    let err = tokenize("x ! y").unwrap_err();
    assert!(err.help().is_some());
}

#[test]
fn lexer_is_restartable() {
    let source = "FOR i FROM 1 TO 10 DO WRITE i; ENDFOR";
    let first: Vec<Token> = Lexer::new(source).collect::<Result<_, _>>().unwrap();
    let second: Vec<Token> = Lexer::new(source).collect::<Result<_, _>>().unwrap();
    assert_eq!(first, second);
}

#[test]
fn lexer_stops_after_sentinel() {
    let mut lexer = Lexer::new("x");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Ok(ref t)) if t.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
}
