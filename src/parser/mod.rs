//! Recursive-descent parser for Spark SQL
//!
//! [`parse`] turns one statement of text into an [`ast::Statement`](crate::ast::Statement).
//! Errors carry the byte span of the offending token; the formatter facade
//! attaches the source text.

pub mod ddl;
pub mod expr;
pub mod lexer;
pub mod query;
pub mod stmt;

use crate::ast::Statement;
use crate::error::{Error, Result};
use expr::Parser;
use lexer::{tokenize, Token};

/// Parse SQL string into AST
pub fn parse(input: &str) -> Result<Statement> {
    tracing::trace!(bytes = input.len(), "parsing statement");

    // Step 1: Tokenize
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(input, &tokens);

    // Leading semicolons are noise
    while parser.consume(&Token::Semicolon) {}

    if parser.is_eof() {
        return Err(Error::parse("Empty input", Some((0, input.len()))));
    }

    // Step 2: Parse tokens into AST
    let stmt = stmt::parse_statement(&mut parser)?;

    // Step 3: Ensure all tokens were consumed (except trailing semicolons)
    while parser.consume(&Token::Semicolon) {}
    if !parser.is_eof() {
        return Err(parser.error(format!(
            "Unexpected {} after statement",
            parser.current().describe()
        )));
    }

    Ok(stmt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn trailing_semicolons_are_accepted() {
        assert!(matches!(parse("SELECT 1;;"), Ok(Statement::Query(_))));
    }

    #[test]
    fn second_statement_is_rejected() {
        let err = parse("SELECT 1; SELECT 2").expect_err("should fail");
        assert_eq!(err.span().map(|(offset, _)| offset), Some(10));
    }

    #[test]
    fn words_are_keywords_in_any_case() {
        let stmt = parse("sElEcT a FrOm t").expect("should parse");
        let Statement::Query(query) = stmt else {
            panic!("expected query");
        };
        let QueryBody::Select(select) = &query.body else {
            panic!("expected select");
        };
        assert!(select.from.is_some());
    }
}
