use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages_name_the_offending_kinds() {
    assert_eq!(
        incompatible_array_value(ValueKind::StringArray, ValueKind::Integer).to_string(),
        "array value not of compatible types: cannot store integer in string array"
    );
    assert_eq!(
        mixed_array_members(ValueKind::NumberArray, ValueKind::String).to_string(),
        "members must be of the same type: cannot mix string into number array"
    );
    assert_eq!(
        append_not_supported(ValueKind::Integer).to_string(),
        "append() is not supported for integer"
    );
    assert_eq!(
        pop_not_supported(ValueKind::NullArray).to_string(),
        "pop is not supported for null array"
    );
}

#[test]
fn arity_message_pluralizes() {
    assert_eq!(
        arity_mismatch("f", 1, 2).to_string(),
        "f expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("g", 3, 0).to_string(),
        "g expects 3 arguments, got 0"
    );
}

#[test]
fn categories() {
    assert_eq!(
        index_not_integer(ValueKind::String).category(),
        ErrorCategory::TypeMismatch
    );
    assert_eq!(mismatched_elifs(2, 1).category(), ErrorCategory::Structural);
    assert_eq!(missing_append_element().category(), ErrorCategory::Structural);
    assert_eq!(
        append_not_supported(ValueKind::String).category(),
        ErrorCategory::UnsupportedOperation
    );
    assert_eq!(division_by_zero().category(), ErrorCategory::Runtime);
}

#[test]
fn backtrace_collects_frames_innermost_first() {
    let err = division_by_zero().with_frame("inner").with_frame("outer");
    assert_eq!(err.backtrace.frames(), &["inner".to_string(), "outer".to_string()]);
    assert_eq!(
        err.backtrace.to_string(),
        "call backtrace:\n  0: inner\n  1: outer\n"
    );
}

#[test]
fn empty_backtrace_renders_nothing() {
    let err = zero_range_step();
    assert!(err.backtrace.is_empty());
    assert_eq!(err.backtrace.to_string(), "");
    assert_eq!(err.to_string(), "range() step must not be zero");
}
