//! End-to-end tests for `print` output and value formatting.

mod common;

use common::run_ok;

#[test]
fn test_print_addition() {
    assert_eq!(run_ok("print 1 + 2;"), "3\n");
}

#[test]
fn test_print_precedence() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_ok("print (1 + 2) * 3;"), "9\n");
}

#[test]
fn test_multiple_prints() {
    assert_eq!(run_ok("print 1; print 2; print 3;"), "1\n2\n3\n");
}

#[test]
fn test_number_formatting_drops_trailing_zero() {
    assert_eq!(run_ok("print 3.0;"), "3\n");
    assert_eq!(run_ok("print 2.5;"), "2.5\n");
    assert_eq!(run_ok("print 10 / 4;"), "2.5\n");
}

#[test]
fn test_print_booleans_and_nil() {
    assert_eq!(run_ok("print true; print false; print nil;"), "true\nfalse\nnil\n");
}

#[test]
fn test_print_strings_unquoted() {
    assert_eq!(run_ok("print \"hello world\";"), "hello world\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run_ok("print \"foo\" + \"bar\";"), "foobar\n");
}

#[test]
fn test_mixed_concatenation() {
    // number + string concatenates, stringifying the number.
    assert_eq!(run_ok("print \"hi\" + 5;"), "hi5\n");
    assert_eq!(run_ok("print 5 + \"hi\";"), "5hi\n");
    assert_eq!(run_ok("print \"n = \" + 3.0;"), "n = 3\n");
}

#[test]
fn test_print_comparison_results() {
    assert_eq!(run_ok("print 1 < 2; print 2 == 3;"), "true\nfalse\n");
}

#[test]
fn test_print_ternary() {
    assert_eq!(run_ok("print 1 < 2 ? \"yes\" : \"no\";"), "yes\n");
}

#[test]
fn test_comments_produce_no_output() {
    let source = "\
// leading comment
print 1; // trailing comment
/* block
   comment */
print 2; /* nested /* comments */ too */
";
    assert_eq!(run_ok(source), "1\n2\n");
}

#[test]
fn test_empty_script() {
    assert_eq!(run_ok(""), "");
}
