//! The Lox programming language interpreter library.
//!
//! This library provides the core components of the Lox interpreter:
//! lexical analysis, parsing, and tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`interpreter`] - Tree-walking evaluator with lexical environments
//! - [`report`] - Error reporter shared by the pipeline and the CLI
//!
//! # Example
//!
//! ```
//! use lox::interpreter::Interpreter;
//! use lox::lexer::Lexer;
//! use lox::parser::Parser;
//!
//! // Source code to run
//! let source = "print 1 + 2;";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let (tokens, lex_errors) = lexer.tokenize();
//! assert!(lex_errors.is_empty());
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let statements = parser.parse().expect("Parse error");
//!
//! // Evaluation
//! let mut interpreter = Interpreter::new();
//! interpreter.interpret(&statements).expect("Runtime error");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod token;
