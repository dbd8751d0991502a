use apl_ir::TokenKind;

use super::lookup;

#[test]
fn every_keyword_resolves() {
    let table = [
        ("fun", TokenKind::Function),
        ("def", TokenKind::Def),
        ("return", TokenKind::Return),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("elif", TokenKind::Elif),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
    ];
    for (text, kind) in table {
        assert_eq!(lookup(text), Some(kind), "keyword {text}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn near_misses_are_identifiers() {
    for text in ["", "i", "iff", "fn", "function", "Def", "TRUE", "returns", "el", "_if"] {
        assert_eq!(lookup(text), None, "{text:?} is not a keyword");
    }
}
