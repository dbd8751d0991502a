use pretty_assertions::assert_eq;

use super::lookup;
use crate::print_handler::{buffer_handler, silent_handler};
use crate::Object;

fn call(name: &str, args: &[Object]) -> Result<Object, String> {
    let builtin = lookup(name).unwrap_or_else(|| panic!("no builtin {name}"));
    (builtin.func)(args, &silent_handler()).map_err(|e| e.to_string())
}

fn ints(values: &[i64]) -> Object {
    Object::array(values.iter().copied().map(Object::Integer).collect())
}

#[test]
fn registry() {
    for name in [
        "len", "first", "last", "pop_front", "pop_back", "push_back", "push_front", "merge", "echo",
    ] {
        assert_eq!(lookup(name).map(|b| b.name), Some(name));
    }
    assert!(lookup("puts").is_none());
}

#[test]
fn len_of_strings_and_arrays() {
    assert_eq!(call("len", &[Object::string("")]), Ok(Object::Integer(0)));
    assert_eq!(call("len", &[Object::string("four")]), Ok(Object::Integer(4)));
    assert_eq!(call("len", &[ints(&[1, 2, 3])]), Ok(Object::Integer(3)));
    assert_eq!(
        call("len", &[Object::Integer(1)]),
        Err("argument to `len` not supported, got INTEGER".to_string())
    );
    assert_eq!(
        call("len", &[Object::string("one"), Object::string("two")]),
        Err("wrong number of arguments. got=2, want=1".to_string())
    );
}

#[test]
fn first_and_last() {
    assert_eq!(call("first", &[ints(&[4, 5, 6])]), Ok(Object::Integer(4)));
    assert_eq!(call("last", &[ints(&[4, 5, 6])]), Ok(Object::Integer(6)));
    assert_eq!(call("first", &[ints(&[])]), Ok(Object::Null));
    assert_eq!(call("last", &[ints(&[])]), Ok(Object::Null));
    assert_eq!(
        call("first", &[Object::Integer(1)]),
        Err("argument to `first` must be ARRAY, got INTEGER".to_string())
    );
}

#[test]
fn pops_return_new_arrays() {
    let original = ints(&[1, 2, 3]);
    assert_eq!(call("pop_front", &[original.clone()]), Ok(ints(&[2, 3])));
    assert_eq!(call("pop_back", &[original.clone()]), Ok(ints(&[1, 2])));
    assert_eq!(original, ints(&[1, 2, 3]));
    assert_eq!(call("pop_front", &[ints(&[])]), Ok(Object::Null));
    assert_eq!(call("pop_back", &[ints(&[])]), Ok(Object::Null));
}

#[test]
fn pushes_return_new_arrays() {
    let original = ints(&[1, 2]);
    assert_eq!(
        call("push_back", &[original.clone(), Object::Integer(3)]),
        Ok(ints(&[1, 2, 3]))
    );
    assert_eq!(
        call("push_front", &[original.clone(), Object::Integer(0)]),
        Ok(ints(&[0, 1, 2]))
    );
    assert_eq!(original, ints(&[1, 2]));
    assert_eq!(
        call("push_back", &[original]),
        Err("wrong number of arguments. got=1, want=2".to_string())
    );
}

#[test]
fn merge_concatenates() {
    assert_eq!(
        call("merge", &[ints(&[1]), ints(&[]), ints(&[2, 3])]),
        Ok(ints(&[1, 2, 3]))
    );
    assert_eq!(
        call("merge", &[ints(&[1])]),
        Err("wrong number of arguments. got=1, want=at least 2".to_string())
    );
    assert_eq!(
        call("merge", &[ints(&[1]), Object::Null]),
        Err("argument to `merge` must be ARRAY, got NULL".to_string())
    );
}

#[test]
fn echo_prints_and_counts() {
    let out = buffer_handler();
    let echo = lookup("echo").map(|b| b.func);
    let result = echo.map(|f| f(&[Object::string("hi"), ints(&[1, 2])], &out));
    assert_eq!(result, Some(Ok(Object::Integer(2))));
    assert_eq!(out.get_output(), "hi\n[1, 2]\n");
}
