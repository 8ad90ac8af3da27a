mod common;
use common::*;

#[test]
fn test_input_bytes_then_substitute() {
    assert_eq!(run_with(",;,;,;", b"AB", 42), "65 66 42 ");
}

#[test]
fn test_substitute_repeats_after_exhaustion() {
    assert_eq!(run_with(",;,;", &[], 42), "42 42 ");
}

#[test]
fn test_substitute_defaults_to_zero() {
    assert_eq!(run_with(",;", &[], 0), "0 ");
}

#[test]
fn test_cat_program() {
    // copy input to output, stopping at the -e 4 substitute
    assert_eq!(run_with(",4-[4+.,4-]", b"hi", 4), "hi");
}

#[test]
fn test_output_interleaves_bytes_and_decimals() {
    assert_eq!(run("'72'.'105'.'33';"), "Hi33 ");
}
