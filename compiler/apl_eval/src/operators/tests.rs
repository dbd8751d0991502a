use apl_ir::BinaryOp;
use pretty_assertions::assert_eq;

use super::{evaluate_binary, evaluate_index};
use crate::Object;

fn int(v: i64) -> Object {
    Object::Integer(v)
}

fn message(result: Result<Object, crate::EvalError>) -> String {
    match result {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn integer_arithmetic() {
    let cases = [
        (BinaryOp::Add, 7, 3, 10),
        (BinaryOp::Sub, 7, 3, 4),
        (BinaryOp::Mul, 7, 3, 21),
        (BinaryOp::Div, 7, 3, 2),
        (BinaryOp::Div, -7, 3, -2),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(evaluate_binary(op, &int(a), &int(b)), Ok(int(expected)));
    }
}

#[test]
fn integer_comparisons() {
    let cases = [
        (BinaryOp::Lt, 1, 2, true),
        (BinaryOp::Gt, 1, 2, false),
        (BinaryOp::LtEq, 2, 2, true),
        (BinaryOp::GtEq, 1, 2, false),
        (BinaryOp::Eq, 3, 3, true),
        (BinaryOp::NotEq, 3, 3, false),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(
            evaluate_binary(op, &int(a), &int(b)),
            Ok(Object::Boolean(expected)),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        message(evaluate_binary(BinaryOp::Div, &int(1), &int(0))),
        "division by zero"
    );
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        message(evaluate_binary(BinaryOp::Add, &int(i64::MAX), &int(1))),
        "integer overflow in addition"
    );
    assert_eq!(
        message(evaluate_binary(BinaryOp::Mul, &int(i64::MIN), &int(2))),
        "integer overflow in multiplication"
    );
    assert_eq!(
        message(evaluate_binary(BinaryOp::Div, &int(i64::MIN), &int(-1))),
        "integer overflow in division"
    );
}

#[test]
fn string_concatenation_only() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &Object::string("Ali "), &Object::string("Ahmadi")),
        Ok(Object::string("Ali Ahmadi"))
    );
    assert_eq!(
        message(evaluate_binary(
            BinaryOp::Sub,
            &Object::string("Hello"),
            &Object::string("World")
        )),
        "unknown operator: STRING - STRING"
    );
    assert_eq!(
        message(evaluate_binary(
            BinaryOp::Eq,
            &Object::string("a"),
            &Object::string("a")
        )),
        "unknown operator: STRING == STRING"
    );
}

#[test]
fn equality_falls_back_to_identity() {
    let t = Object::Boolean(true);
    let f = Object::Boolean(false);
    assert_eq!(evaluate_binary(BinaryOp::Eq, &t, &t), Ok(Object::Boolean(true)));
    assert_eq!(evaluate_binary(BinaryOp::NotEq, &t, &f), Ok(Object::Boolean(true)));
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &Object::Null, &Object::Null),
        Ok(Object::Boolean(true))
    );
    // Mixed types are simply unequal.
    assert_eq!(evaluate_binary(BinaryOp::Eq, &int(1), &t), Ok(Object::Boolean(false)));

    let arr = Object::array(vec![int(1)]);
    let same = arr.clone();
    let copy = Object::array(vec![int(1)]);
    assert_eq!(evaluate_binary(BinaryOp::Eq, &arr, &same), Ok(Object::Boolean(true)));
    assert_eq!(evaluate_binary(BinaryOp::Eq, &arr, &copy), Ok(Object::Boolean(false)));
}

#[test]
fn mismatch_and_unknown_operator() {
    assert_eq!(
        message(evaluate_binary(BinaryOp::Add, &int(5), &Object::Boolean(true))),
        "type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
        message(evaluate_binary(
            BinaryOp::Add,
            &Object::Boolean(true),
            &Object::Boolean(false)
        )),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
    assert_eq!(
        message(evaluate_binary(BinaryOp::Lt, &Object::Null, &Object::Null)),
        "unknown operator: NULL < NULL"
    );
}

#[test]
fn array_indexing() {
    let arr = Object::array(vec![int(1), int(2), int(3)]);
    assert_eq!(evaluate_index(&arr, &int(0)), Ok(int(1)));
    assert_eq!(evaluate_index(&arr, &int(2)), Ok(int(3)));
    assert_eq!(evaluate_index(&arr, &int(3)), Ok(Object::Null));
    assert_eq!(evaluate_index(&arr, &int(-1)), Ok(Object::Null));
    assert_eq!(
        message(evaluate_index(&int(1), &int(0))),
        "index operator not supported: INTEGER[INTEGER]"
    );
    assert_eq!(
        message(evaluate_index(&arr, &Object::string("0"))),
        "index operator not supported: ARRAY[STRING]"
    );
}
