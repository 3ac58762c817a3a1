use super::*;
use rill_ir::StringInterner;

#[test]
fn assign_then_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    assert_eq!(env.lookup(x), None);
    env.assign(x, Value::int(1));
    env.assign(x, Value::int(2));
    assert_eq!(env.lookup(x), Some(Value::int(2)));
}

#[test]
fn call_scope_shadows_global_and_is_discarded() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign(x, Value::int(1));

    env.push_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(Value::int(1)));
    assert!(!env.contains_local(x));
    env.assign(x, Value::string("local"));
    assert!(env.contains_local(x));
    assert_eq!(env.lookup(x), Some(Value::string("local")));

    env.pop_scope();
    assert_eq!(env.depth(), 0);
    assert_eq!(env.lookup(x), Some(Value::int(1)));
}

#[test]
fn callee_cannot_see_caller_locals() {
    let interner = StringInterner::new();
    let y = interner.intern("y");

    let mut env = Environment::new();
    env.push_scope();
    env.assign(y, Value::int(5));
    env.push_scope();
    assert_eq!(env.lookup(y), None);
    env.pop_scope();
    assert_eq!(env.lookup(y), Some(Value::int(5)));
}

#[test]
fn pop_scope_keeps_global() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    env.assign(x, Value::int(3));
    env.pop_scope();
    assert_eq!(env.lookup(x), Some(Value::int(3)));
    assert!(env.contains_local(x));
}

#[test]
fn increment_integer() {
    let interner = StringInterner::new();
    let i = interner.intern("i");

    let mut env = Environment::new();
    env.assign(i, Value::int(4));
    assert_eq!(env.increment(i, -2), Ok(()));
    assert_eq!(env.lookup(i), Some(Value::int(2)));
}

#[test]
fn increment_errors() {
    let interner = StringInterner::new();
    let i = interner.intern("i");
    let s = interner.intern("s");
    let big = interner.intern("big");

    let mut env = Environment::new();
    assert_eq!(env.increment(i, 1), Err(IncrementError::Undefined));

    env.assign(s, Value::string("a"));
    assert_eq!(
        env.increment(s, 1),
        Err(IncrementError::NotInteger(ValueKind::String))
    );

    env.assign(big, Value::int(i64::MAX));
    assert_eq!(env.increment(big, 1), Err(IncrementError::Overflow));
}

#[test]
fn rebind_updates_the_scope_that_holds_the_binding() {
    let interner = StringInterner::new();
    let g = interner.intern("g");
    let fresh = interner.intern("fresh");

    let mut env = Environment::new();
    env.assign(g, Value::NullArray);

    env.push_scope();
    env.rebind(g, Value::number_array([1]));
    env.rebind(fresh, Value::int(0));
    assert!(!env.contains_local(g));
    assert!(env.contains_local(fresh));
    env.pop_scope();

    assert_eq!(env.lookup(g), Some(Value::number_array([1])));
    assert_eq!(env.lookup(fresh), None);
}
