#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::{interpreter, TestProgram};
use crate::{ErrorCategory, EvalErrorKind, Value, ValueKind};

#[test]
fn append_to_typed_arrays() {
    let mut p = TestProgram::new();
    let nums = p.ints(&[1]);
    let init_nums = p.assign("a", nums);
    let words = {
        let w = p.str("w");
        p.array(&[w])
    };
    let init_words = p.assign("s", words);
    let push_num = {
        let two = p.int(2);
        p.append("a", Some(two))
    };
    let push_word = {
        let v = p.str("v");
        p.append("s", Some(v))
    };
    let program = p.finish(&[init_nums, init_words, push_num, push_word]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("a"), Some(Value::number_array([1, 2])));
    assert_eq!(interp.variable("s"), Some(Value::string_array(["w", "v"])));
}

#[test]
fn first_append_decides_null_array_kind() {
    let mut p = TestProgram::new();
    let empty = p.array(&[]);
    let init = p.assign("a", empty);
    let push = {
        let five = p.int(5);
        p.append("a", Some(five))
    };
    let program = p.finish(&[init, push]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("a"), Some(Value::number_array([5])));
}

#[test]
fn append_after_inference_enforces_the_kind() {
    let mut p = TestProgram::new();
    let empty = p.array(&[]);
    let init = p.assign("a", empty);
    let push = {
        let five = p.int(5);
        p.append("a", Some(five))
    };
    let bad = {
        let x = p.str("x");
        p.append("a", Some(x))
    };
    let program = p.finish(&[init, push, bad]);

    let mut interp = interpreter(&program);
    let err = interp.run().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MixedArrayMembers {
            array: ValueKind::NumberArray,
            got: ValueKind::String
        }
    );
    assert_eq!(interp.variable("a"), Some(Value::number_array([5])));
}

#[test]
fn null_array_becomes_string_array() {
    let mut p = TestProgram::new();
    let empty = p.array(&[]);
    let init = p.assign("a", empty);
    let push = {
        let s = p.str("s");
        p.append("a", Some(s))
    };
    let program = p.finish(&[init, push]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("a"), Some(Value::string_array(["s"])));
}

#[test]
fn appending_an_array_to_a_null_array_is_unsupported() {
    let mut p = TestProgram::new();
    let empty = p.array(&[]);
    let init = p.assign("a", empty);
    let push = {
        let inner = p.ints(&[1]);
        p.append("a", Some(inner))
    };
    let program = p.finish(&[init, push]);

    let mut interp = interpreter(&program);
    let err = interp.run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnsupportedOperation);
    assert_eq!(interp.variable("a"), Some(Value::NullArray));
}

#[test]
fn append_without_operand_is_structural() {
    let mut p = TestProgram::new();
    let nums = p.ints(&[1]);
    let init = p.assign("a", nums);
    let push = p.append("a", None);
    let program = p.finish(&[init, push]);

    let mut interp = interpreter(&program);
    let err = interp.run().unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MissingAppendElement);
    assert_eq!(err.category(), ErrorCategory::Structural);
}

#[test]
fn append_to_scalar_is_unsupported() {
    let mut p = TestProgram::new();
    let n = p.int(1);
    let init = p.assign("n", n);
    let push = {
        let two = p.int(2);
        p.append("n", Some(two))
    };
    let program = p.finish(&[init, push]);

    let mut interp = interpreter(&program);
    let err = interp.run().unwrap_err();
    assert_eq!(err.to_string(), "append() is not supported for integer");
}

#[test]
fn null_array_in_global_scope_is_settled_from_a_function() {
    let mut p = TestProgram::new();
    let push = {
        let one = p.int(1);
        p.append("g", Some(one))
    };
    let done = {
        let zero = p.int(0);
        p.ret(zero)
    };
    p.function("fill", &[], &[push, done]);
    let empty = p.array(&[]);
    let init = p.assign("g", empty);
    let call = {
        let c = p.call("fill", &[]);
        p.call_stmt(c)
    };
    let program = p.finish(&[init, call]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("g"), Some(Value::number_array([1])));
}

#[test]
fn pop_last_and_at_index() {
    let mut p = TestProgram::new();
    let nums = p.ints(&[10, 20, 30, 40]);
    let init = p.assign("a", nums);
    let pop_last = p.pop("a", None);
    let pop_first = {
        let zero = p.int(0);
        p.pop("a", Some(zero))
    };
    let program = p.finish(&[init, pop_last, pop_first]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("a"), Some(Value::number_array([20, 30])));
}

#[test]
fn pop_from_string_array() {
    let mut p = TestProgram::new();
    let words = {
        let a = p.str("a");
        let b = p.str("b");
        p.array(&[a, b])
    };
    let init = p.assign("s", words);
    let pop = p.pop("s", None);
    let program = p.finish(&[init, pop]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(interp.variable("s"), Some(Value::string_array(["a"])));
}

#[test]
fn pop_errors() {
    let mut p = TestProgram::new();
    let one = p.ints(&[1]);
    let init = p.assign("a", one);
    let empty = p.array(&[]);
    let init_null = p.assign("n", empty);
    let text = p.str("t");
    let init_str = p.assign("t", text);

    let bad_index = {
        let s = p.str("0");
        p.pop("a", Some(s))
    };
    let out_of_range = {
        let five = p.int(5);
        p.pop("a", Some(five))
    };
    let pop_null = p.pop("n", None);
    let pop_str = p.pop("t", None);
    let drain = p.pop("a", None);
    let pop_empty = p.pop("a", None);
    let program = p.finish(&[init, init_null, init_str]);

    let mut interp = interpreter(&program);
    interp.run().unwrap();
    assert_eq!(
        interp.exec_stmt(bad_index).unwrap_err().kind,
        EvalErrorKind::IndexNotInteger { got: ValueKind::String }
    );
    assert_eq!(
        interp.exec_stmt(out_of_range).unwrap_err().kind,
        EvalErrorKind::IndexOutOfBounds { index: 5, len: 1 }
    );
    assert_eq!(
        interp.exec_stmt(pop_null).unwrap_err().to_string(),
        "pop is not supported for null array"
    );
    assert_eq!(
        interp.exec_stmt(pop_str).unwrap_err().category(),
        ErrorCategory::UnsupportedOperation
    );
    interp.exec_stmt(drain).unwrap();
    assert_eq!(
        interp.exec_stmt(pop_empty).unwrap_err().kind,
        EvalErrorKind::PopFromEmpty { kind: ValueKind::NumberArray }
    );
}
