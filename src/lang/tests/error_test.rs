use crate::error;
use crate::lang::ErrorCode;

#[test]
fn test_display_code_only() {
    assert_eq!(error!(OutOfMemory).to_string(), "out of memory");
    assert_eq!(error!(Interrupted).to_string(), "interrupted");
}

#[test]
fn test_display_with_position() {
    assert_eq!(error!(Interrupted, 12).to_string(), "interrupted at position 12");
}

#[test]
fn test_display_with_position_and_char() {
    assert_eq!(
        error!(StackUnderflow, 5, '+').to_string(),
        "stack is empty ('+') at position 5"
    );
}

#[test]
fn test_display_with_message() {
    assert_eq!(
        error!(UnmatchedDelimiter, 9, ']'; "no matching '['").to_string(),
        "unmatched delimiter (']') at position 9; no matching '['"
    );
    assert_eq!(
        error!(OutOfMemory; "data stack").to_string(),
        "out of memory; data stack"
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(error!(OutOfMemory).exit_code(), 2);
    assert_eq!(error!(SyntaxError).exit_code(), 1);
    assert_eq!(error!(DivisionByZero).exit_code(), 1);
    assert_eq!(error!(InternalError).exit_code(), 1);
}

#[test]
fn test_code_accessors() {
    let error = error!(UnclosedLiteral, 3);
    assert_eq!(error.code(), ErrorCode::UnclosedLiteral as u16);
    assert_eq!(error.position(), Some(3));
}
