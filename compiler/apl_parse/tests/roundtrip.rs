//! Property tests: canonical rendering re-parses to itself.

use apl_parse::parse_source;
use proptest::prelude::*;

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "b", "foo", "bar_baz", "true", "false"])
            .prop_map(String::from),
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-z ]{0,5}".prop_map(|s| format!("\"{s}\"")),
    ]
}

/// Unparenthesized operator soup, so the parser's precedence decides the
/// tree shape.
fn expression() -> impl Strategy<Value = String> {
    let binary = prop::sample::select(vec![
        "+", "-", "*", "/", "==", "!=", "<>", "<", ">", "<=", ">=",
    ]);
    atom().prop_recursive(4, 48, 4, move |inner| {
        prop_oneof![
            (inner.clone(), binary.clone(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("({f})({})", args.join(", "))),
            (prop::collection::vec(inner.clone(), 0..3), inner.clone())
                .prop_map(|(items, i)| format!("[{}][{i}]", items.join(", "))),
        ]
    })
}

proptest! {
    #[test]
    fn rendering_reparses_to_same_form(source in expression()) {
        let first = parse_source(&source);
        prop_assert!(first.errors.is_empty(), "{source:?}: {:?}", first.error_messages());
        let rendered = first.program.to_string();

        let second = parse_source(&rendered);
        prop_assert!(second.errors.is_empty(), "{rendered:?}: {:?}", second.error_messages());
        prop_assert_eq!(second.program.to_string(), rendered);
    }

    #[test]
    fn rendering_is_stable_under_extra_parentheses(source in expression()) {
        let bare = parse_source(&source).program.to_string();
        let wrapped = parse_source(&format!("(({source}))")).program.to_string();
        prop_assert_eq!(bare, wrapped);
    }
}

#[test]
fn documented_precedence_example() {
    let output = parse_source("a + b * c + d / e - f");
    assert!(output.errors.is_empty());
    assert_eq!(output.program.to_string(), "(((a + (b * c)) + (d / e)) - f)");
}
