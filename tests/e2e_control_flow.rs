//! End-to-end tests for `if`, `while`, `for`, `break`, and the logical
//! operators.

mod common;

use common::run_ok;

#[test]
fn test_if_else() {
    assert_eq!(run_ok("if (1 < 2) print \"then\"; else print \"else\";"), "then\n");
    assert_eq!(run_ok("if (1 > 2) print \"then\"; else print \"else\";"), "else\n");
}

#[test]
fn test_truthiness_in_conditions() {
    // 0 and "" are truthy; only nil and false are falsey.
    assert_eq!(run_ok("if (0) print \"zero\";"), "zero\n");
    assert_eq!(run_ok("if (\"\") print \"empty\";"), "empty\n");
    assert_eq!(run_ok("if (nil) print \"nil\"; else print \"skipped\";"), "skipped\n");
}

#[test]
fn test_while() {
    let source = "var i = 0; while (i < 3) { print i; i = i + 1; }";
    assert_eq!(run_ok(source), "0\n1\n2\n");
}

#[test]
fn test_for() {
    assert_eq!(
        run_ok("for (var i = 0; i < 3; i = i + 1) print i;"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_for_with_outside_initializer() {
    let source = "var i = 10; for (; i > 7; i = i - 1) print i; print \"done\";";
    assert_eq!(run_ok(source), "10\n9\n8\ndone\n");
}

#[test]
fn test_break() {
    let source = "\
var i = 0;
while (true) {
  i = i + 1;
  if (i == 3) break;
  print i;
}
print \"after\";
";
    assert_eq!(run_ok(source), "1\n2\nafter\n");
}

#[test]
fn test_break_in_nested_loop_is_local() {
    let source = "\
for (var i = 0; i < 2; i = i + 1) {
  for (var j = 0; j < 10; j = j + 1) {
    if (j == 1) break;
    print i + j;
  }
}
";
    assert_eq!(run_ok(source), "0\n1\n");
}

#[test]
fn test_logical_operators_short_circuit() {
    let source = "\
var a = 1;
true or (a = 2);
print a;
false and (a = 3);
print a;
false or (a = 4);
print a;
";
    assert_eq!(run_ok(source), "1\n1\n4\n");
}

#[test]
fn test_logical_operators_return_operands() {
    assert_eq!(run_ok("print nil or \"fallback\";"), "fallback\n");
    assert_eq!(run_ok("print 1 and 2;"), "2\n");
}

#[test]
fn test_fizz_shaped_loop() {
    // Counts down with nested conditions, exercising if/else chains in a loop.
    let source = "\
for (var i = 3; i > 0; i = i - 1) {
  if (i == 1) print \"go\";
  else print i;
}
";
    assert_eq!(run_ok(source), "3\n2\ngo\n");
}
