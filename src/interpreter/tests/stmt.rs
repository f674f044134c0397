//! Control flow tests.

use super::*;

#[test]
fn test_if_takes_then_branch() {
    assert_eq!(
        run_and_get("var r = 0; if (1 < 2) r = 1; else r = 2;", "r"),
        Value::Number(1.0)
    );
}

#[test]
fn test_if_takes_else_branch() {
    assert_eq!(
        run_and_get("var r = 0; if (nil) r = 1; else r = 2;", "r"),
        Value::Number(2.0)
    );
}

#[test]
fn test_if_without_else_is_a_no_op_when_falsey() {
    assert_eq!(
        run_and_get("var r = 0; if (false) r = 1;", "r"),
        Value::Number(0.0)
    );
}

#[test]
fn test_if_condition_uses_truthiness() {
    // 0 and "" are truthy.
    assert_eq!(run_and_get("var r = 0; if (0) r = 1;", "r"), Value::Number(1.0));
    assert_eq!(
        run_and_get("var r = 0; if (\"\") r = 1;", "r"),
        Value::Number(1.0)
    );
}

#[test]
fn test_while_loop() {
    assert_eq!(
        run_and_get("var i = 0; while (i < 5) i = i + 1;", "i"),
        Value::Number(5.0)
    );
}

#[test]
fn test_while_false_never_runs() {
    assert_eq!(
        run_and_get("var r = 0; while (false) r = 1;", "r"),
        Value::Number(0.0)
    );
}

#[test]
fn test_break_exits_the_loop() {
    let source = "var i = 0; while (true) { i = i + 1; if (i >= 3) break; }";
    assert_eq!(run_and_get(source, "i"), Value::Number(3.0));
}

#[test]
fn test_break_exits_only_the_inner_loop() {
    let source = "\
var total = 0;
var i = 0;
while (i < 3) {
  i = i + 1;
  while (true) {
    total = total + 1;
    break;
  }
}";
    assert_eq!(run_and_get(source, "total"), Value::Number(3.0));
}

#[test]
fn test_for_loop() {
    let source = "var total = 0; for (var i = 1; i <= 4; i = i + 1) total = total + i;";
    assert_eq!(run_and_get(source, "total"), Value::Number(10.0));
}

#[test]
fn test_for_loop_with_break() {
    let source = "var i = 0; for (;;) { i = i + 1; if (i == 2) break; }";
    assert_eq!(run_and_get(source, "i"), Value::Number(2.0));
}

#[test]
fn test_statements_after_error_are_abandoned() {
    let statements = parse("var a = 1; missing; a = 99;");
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret(&statements).is_err());
    assert_eq!(global(&interpreter, "a"), Value::Number(1.0));
}
