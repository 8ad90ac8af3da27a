use crate::mach::Program;

#[test]
fn test_get_and_len() {
    let program = Program::from("1+2");
    assert_eq!(program.len(), 3);
    assert_eq!(program.get(0), Some(b'1'));
    assert_eq!(program.get(2), Some(b'2'));
    assert_eq!(program.get(3), None);
}

#[test]
fn test_read_consumes_source() {
    let mut source: &[u8] = b"12+;";
    let program = Program::read(&mut source).unwrap();
    assert_eq!(program.bytes(), b"12+;");
    assert!(source.is_empty());
}

#[test]
fn test_find() {
    let program = Program::from("a\"bc\"d");
    assert_eq!(program.find(0, b'"'), Some(1));
    assert_eq!(program.find(2, b'"'), Some(4));
    assert_eq!(program.find(5, b'"'), None);
    assert_eq!(program.find(100, b'"'), None);
}

#[test]
fn test_match_delim_flat() {
    // Scan starts just after an opening '[' assumed at position -1.
    let program = Program::from("ab]cd");
    assert_eq!(program.match_delim(0, b'[', b']'), Some(2));
}

#[test]
fn test_match_delim_nested() {
    let program = Program::from("a[b]c]");
    assert_eq!(program.match_delim(0, b'[', b']'), Some(5));
}

#[test]
fn test_match_delim_deeply_nested() {
    let program = Program::from("[[]][]]");
    assert_eq!(program.match_delim(0, b'[', b']'), Some(6));
}

#[test]
fn test_match_delim_unmatched() {
    let program = Program::from("a[b]c");
    assert_eq!(program.match_delim(0, b'[', b']'), None);
}

#[test]
fn test_match_delim_ignores_other_pair() {
    let program = Program::from("{}]");
    assert_eq!(program.match_delim(0, b'[', b']'), Some(2));
}
