//! Tests for identifiers and keywords.

use super::*;

#[test]
fn test_identifier() {
    let (tokens, _) = tokenize("count");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "count");
}

#[test]
fn test_identifier_with_underscores_and_digits() {
    let (tokens, _) = tokenize("_private my_var2");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_private");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "my_var2");
}

#[test]
fn test_all_keywords() {
    let kinds = tokenize_kinds(
        "and class else false fun for if nil or print return super this true var while break",
    );
    assert_eq!(
        kinds,
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::Fun,
            TokenKind::For,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let (tokens, _) = tokenize("orchid android variable");
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_keywords_are_case_sensitive() {
    let (tokens, _) = tokenize("Var VAR vAr");
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
}
