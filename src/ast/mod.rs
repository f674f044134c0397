//! Abstract Syntax Tree definitions for the Lox language.
//!
//! This module defines the data structures that represent parsed Lox
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`].
//!
//! # Structure
//!
//! - [`Expr`]/[`ExprKind`] - Expression nodes
//! - [`Stmt`]/[`StmtKind`] - Statement nodes
//! - [`FunDecl`] - A function declaration, shared by reference between the
//!   AST and function values
//! - [`AstPrinter`] - Parenthesized prefix rendering of expressions
//!
//! Each AST node carries a [`Span`](crate::token::Span) covering its full
//! extent, and holds at least one [`Token`](crate::token::Token) (operator,
//! keyword, or name) from which error messages recover a source line.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Walks the AST to evaluate the program

mod expr;
mod printer;
mod stmt;


pub use expr::{Expr, ExprKind, LiteralValue};
pub use printer::AstPrinter;
pub use stmt::{FunDecl, Stmt, StmtKind};
