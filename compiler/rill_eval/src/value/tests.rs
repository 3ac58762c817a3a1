#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCategory;

#[test]
fn kinds() {
    assert_eq!(Value::int(3).kind(), ValueKind::Integer);
    assert_eq!(Value::string("a").kind(), ValueKind::String);
    assert_eq!(Value::number_array([1]).kind(), ValueKind::NumberArray);
    assert_eq!(Value::string_array(["a"]).kind(), ValueKind::StringArray);
    assert_eq!(Value::NullArray.kind(), ValueKind::NullArray);
}

#[test]
fn truthiness() {
    assert!(Value::int(-1).is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(Value::string("x").is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::number_array([0]).is_truthy());
    assert!(!Value::number_array([]).is_truthy());
    assert!(!Value::NullArray.is_truthy());
}

#[test]
fn display_forms() {
    assert_eq!(Value::int(-7).to_string(), "-7");
    assert_eq!(Value::string("hi there").to_string(), "hi there");
    assert_eq!(Value::number_array([1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(Value::string_array(["a", "b"]).to_string(), "['a', 'b']");
    assert_eq!(Value::NullArray.to_string(), "[]");
}

#[test]
fn array_handles_alias() {
    let a = SharedArray::new(vec![1_i64, 2]);
    let b = a.clone();
    b.push(3);
    assert!(a.ptr_eq(&b));
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
}

#[test]
fn set_and_get_check_bounds() {
    let a = SharedArray::new(vec![10_i64, 20]);
    a.set(1, 25).unwrap();
    assert_eq!(a.get(1).unwrap(), 25);

    let err = a.set(2, 0).unwrap_err();
    assert_eq!(err.kind, crate::EvalErrorKind::IndexOutOfBounds { index: 2, len: 2 });
    let err = a.get(-1).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
}

#[test]
fn pop_removes_last() {
    let a: SharedArray<Rc<str>> = SharedArray::new(vec![Rc::from("x"), Rc::from("y")]);
    assert_eq!(&*a.pop().unwrap(), "y");
    assert_eq!(a.len(), 1);
}

#[test]
fn pop_from_empty_is_an_error() {
    let a: SharedArray<i64> = SharedArray::new(Vec::new());
    let err = a.pop().unwrap_err();
    assert_eq!(err.to_string(), "pop from empty number array");
}

#[test]
fn pop_at_validates_index() {
    let a = SharedArray::new(vec![1_i64, 2, 3]);
    assert_eq!(a.pop_at(&Value::int(1)).unwrap(), 2);
    assert_eq!(a.to_vec(), vec![1, 3]);

    let err = a.pop_at(&Value::string("0")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);

    let err = a.pop_at(&Value::int(5)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert_eq!(a.len(), 2);
}

#[test]
fn equality_compares_contents() {
    assert_eq!(Value::number_array([1, 2]), Value::number_array([1, 2]));
    assert_ne!(Value::number_array([1, 2]), Value::number_array([2, 1]));
    assert_ne!(Value::int(1), Value::string("1"));
}
