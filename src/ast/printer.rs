//! Parenthesized prefix rendering of expressions.
//!
//! Used by parser tests to pin down precedence and associativity: the
//! rendered form makes the tree shape explicit, e.g. `1 + 2 * 3` prints as
//! `(+ 1 (* 2 3))`.

use super::expr::{Expr, ExprKind, LiteralValue};

/// Renders expressions in parenthesized prefix form.
pub struct AstPrinter;

impl AstPrinter {
    /// Renders an expression tree as a string.
    pub fn print(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Literal(value) => match value {
                LiteralValue::Number(n) => n.to_string(),
                LiteralValue::Str(s) => s.clone(),
                LiteralValue::Bool(b) => b.to_string(),
                LiteralValue::Nil => "nil".to_string(),
            },
            ExprKind::Grouping(inner) => self.parenthesize("group", &[inner]),
            ExprKind::Unary { operator, right } => {
                self.parenthesize(&operator.lexeme, &[right])
            }
            ExprKind::Binary {
                left,
                operator,
                right,
            }
            | ExprKind::Logical {
                left,
                operator,
                right,
            } => self.parenthesize(&operator.lexeme, &[left, right]),
            ExprKind::Ternary {
                condition,
                question,
                left,
                colon,
                right,
            } => {
                let name = format!("{}{}", question.lexeme, colon.lexeme);
                self.parenthesize(&name, &[condition, left, right])
            }
            ExprKind::Variable { name } => name.lexeme.clone(),
            ExprKind::Assign { name, value } => {
                format!("(= {} {})", name.lexeme, self.print(value))
            }
            ExprKind::Call { callee, args, .. } => {
                let mut parts = vec!["call".to_string(), self.print(callee)];
                parts.extend(args.iter().map(|arg| self.print(arg)));
                format!("({})", parts.join(" "))
            }
        }
    }

    fn parenthesize(&self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&self.print(expr));
        }
        out.push(')');
        out
    }
}
