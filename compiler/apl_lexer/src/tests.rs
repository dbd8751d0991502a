use apl_ir::{Span, TokenKind};
use pretty_assertions::assert_eq;

use super::{tokenize, Lexer};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source).map(|t| (t.kind, t.literal)).collect()
}

fn pair(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}

#[test]
fn single_character_tokens() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("=+(){},;-!*/< >[]"),
        vec![
            pair(Assign, "="),
            pair(Plus, "+"),
            pair(LParen, "("),
            pair(RParen, ")"),
            pair(LBrace, "{"),
            pair(RBrace, "}"),
            pair(Comma, ","),
            pair(Semicolon, ";"),
            pair(Minus, "-"),
            pair(Bang, "!"),
            pair(Star, "*"),
            pair(Slash, "/"),
            pair(Lt, "<"),
            pair(Gt, ">"),
            pair(LBracket, "["),
            pair(RBracket, "]"),
            pair(Eof, ""),
        ]
    );
}

#[test]
fn two_character_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("== != <> <= >= += -= *= /="),
        vec![
            pair(EqEq, "=="),
            pair(NotEq, "!="),
            pair(NotEq, "<>"),
            pair(LtEq, "<="),
            pair(GtEq, ">="),
            pair(PlusAssign, "+="),
            pair(MinusAssign, "-="),
            pair(StarAssign, "*="),
            pair(SlashAssign, "/="),
            pair(Eof, ""),
        ]
    );
}

#[test]
fn program_with_keywords() {
    use TokenKind::*;
    let source = r#"def five = 5;
def add = fun(x, y) {
  x + y;
};
if (5 < 10) { return true; } elif (x) { false } else { "s" }"#;
    let kinds: Vec<TokenKind> = tokenize(source).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Def, Ident, Assign, Int, Semicolon, //
            Def, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace, //
            Ident, Plus, Ident, Semicolon, //
            RBrace, Semicolon, //
            If, LParen, Int, Lt, Int, RParen, LBrace, Return, True, Semicolon, RBrace, //
            Elif, LParen, Ident, RParen, LBrace, False, RBrace, //
            Else, LBrace, String, RBrace, //
            Eof,
        ]
    );
}

#[test]
fn identifiers_are_letters_and_underscores() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("foo_bar x1 _"),
        vec![
            pair(Ident, "foo_bar"),
            pair(Ident, "x"),
            pair(Int, "1"),
            pair(Ident, "_"),
            pair(Eof, ""),
        ]
    );
    // Keyword prefixes stay identifiers.
    assert_eq!(
        kinds_and_literals("function iffy"),
        vec![pair(Ident, "function"), pair(Ident, "iffy"), pair(Eof, "")]
    );
}

#[test]
fn string_literals() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals(r#""foo bar" "" "a\nb""#),
        vec![
            pair(String, "foo bar"),
            pair(String, ""),
            pair(String, "a\\nb"),
            pair(Eof, ""),
        ]
    );
}

#[test]
fn unterminated_string_runs_to_end() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("x = \"never closed; y"),
        vec![
            pair(Ident, "x"),
            pair(Assign, "="),
            pair(String, "never closed; y"),
            pair(Eof, ""),
        ]
    );
}

#[test]
fn illegal_characters_become_tokens() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("a @ b é 3 $"),
        vec![
            pair(Ident, "a"),
            pair(Illegal, "@"),
            pair(Ident, "b"),
            pair(Illegal, "é"),
            pair(Int, "3"),
            pair(Illegal, "$"),
            pair(Eof, ""),
        ]
    );
}

#[test]
fn spans_cover_source_bytes() {
    let tokens: Vec<_> = tokenize("def  xy = 10;").collect();
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(5, 7),
            Span::new(8, 9),
            Span::new(10, 12),
            Span::new(12, 13),
            Span::new(13, 13),
        ]
    );
}

#[test]
fn iterator_yields_one_eof_then_stops() {
    let mut lexer = tokenize("x");
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Ident));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn next_token_repeats_eof() {
    let mut lexer = Lexer::new("   \n\t");
    for _ in 0..3 {
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Eof);
        assert_eq!(tok.span, Span::new(5, 5));
    }
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds_and_literals(""), vec![pair(TokenKind::Eof, "")]);
}
