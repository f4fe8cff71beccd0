//! Expression parsing
//!
//! Holds the token cursor shared by every parser module, plus expressions,
//! data types, ORDER BY items and window specifications.

use crate::ast::*;
use crate::error::{Error, Result};
use crate::parser::lexer::{SpannedToken, Token};
use crate::parser::query::{is_query_start, parse_query};

/// Words that never start or continue an expression as a bare identifier.
const EXPR_RESERVED: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP", "HAVING", "ORDER", "UNION", "INTERSECT", "EXCEPT", "JOIN",
    "ON", "WHEN", "THEN", "ELSE", "END", "AND", "OR", "AS", "BY", "INTO",
];

/// Words that end an expression instead of being read as an implicit alias.
const ALIAS_STOP: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP", "HAVING", "ORDER", "UNION", "INTERSECT", "EXCEPT",
    "MINUS", "JOIN", "ON", "WHEN", "THEN", "ELSE", "END", "AND", "OR", "AS", "BY", "INTO", "LIMIT",
    "OFFSET", "SORT", "CLUSTER", "DISTRIBUTE", "WINDOW", "INNER", "LEFT", "RIGHT", "FULL", "CROSS",
    "NATURAL", "SEMI", "ANTI", "USING", "LATERAL", "PIVOT", "UNPIVOT", "TABLESAMPLE", "INSERT",
    "SET", "FOR", "IS", "IN", "NOT", "LIKE", "ILIKE", "RLIKE", "REGEXP", "BETWEEN", "WITH",
];

const TYPED_LITERAL_PREFIXES: &[&str] =
    &["DATE", "TIMESTAMP", "TIMESTAMP_NTZ", "TIMESTAMP_LTZ", "X"];

const INTERVAL_UNITS: &[&str] = &[
    "YEAR", "YEARS", "MONTH", "MONTHS", "WEEK", "WEEKS", "DAY", "DAYS", "HOUR", "HOURS", "MINUTE",
    "MINUTES", "SECOND", "SECONDS", "MILLISECOND", "MILLISECONDS", "MICROSECOND", "MICROSECONDS",
    "NANOSECOND", "NANOSECONDS",
];

const DATETIME_UNITS: &[&str] = &[
    "YEAR", "QUARTER", "MONTH", "WEEK", "DAY", "DAYOFYEAR", "HOUR", "MINUTE", "SECOND",
    "MILLISECOND", "MICROSECOND",
];

const DATETIME_ARITH_FUNCTIONS: &[&str] =
    &["TIMESTAMPADD", "TIMESTAMPDIFF", "DATEADD", "DATEDIFF", "DATE_ADD", "DATE_DIFF"];

const CURRENT_FUNCTIONS: &[&str] = &["CURRENT_DATE", "CURRENT_TIMESTAMP", "CURRENT_USER"];

static EOF_TOKEN: Token = Token::Eof;

fn contains_ignore_case(list: &[&str], word: &str) -> bool {
    list.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// Token cursor
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [SpannedToken],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: &'a [SpannedToken]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn current(&self) -> &Token {
        self.peek_nth(0)
    }

    pub fn peek(&self) -> &Token {
        self.peek_nth(1)
    }

    pub fn peek_nth(&self, n: usize) -> &Token {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.token)
            .unwrap_or(&EOF_TOKEN)
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    pub fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    pub fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, token: &Token) -> Result<()> {
        if self.consume(token) {
            Ok(())
        } else {
            Err(self.expected(&token.describe()))
        }
    }

    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current().is_keyword(keyword)
    }

    pub fn peek_keyword(&self, n: usize, keyword: &str) -> bool {
        self.peek_nth(n).is_keyword(keyword)
    }

    /// True when the next tokens are exactly these keywords
    pub fn check_keywords(&self, keywords: &[&str]) -> bool {
        keywords
            .iter()
            .enumerate()
            .all(|(i, kw)| self.peek_keyword(i, kw))
    }

    pub fn consume_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a keyword sequence only if all of it is present
    pub fn consume_keywords(&mut self, keywords: &[&str]) -> bool {
        if self.check_keywords(keywords) {
            self.pos += keywords.len();
            true
        } else {
            false
        }
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.expected(keyword))
        }
    }

    pub fn expect_keywords(&mut self, keywords: &[&str]) -> Result<()> {
        for keyword in keywords {
            self.expect_keyword(keyword)?;
        }
        Ok(())
    }

    /// Upper-cased text of the current word, if it is one
    pub fn current_word(&self) -> Option<String> {
        match self.current() {
            Token::Word(w) => Some(w.to_ascii_uppercase()),
            _ => None,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Byte offset where the current token starts
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|t| t.start)
            .unwrap_or(self.source.len())
    }

    /// Byte offset where the previously consumed token ends
    pub fn previous_end(&self) -> usize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(t) => t.end,
            None => 0,
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    /// Parse error located at the current token
    pub fn error(&self, message: impl Into<String>) -> Error {
        let span = self
            .tokens
            .get(self.pos)
            .map(|t| (t.start, t.end - t.start))
            .unwrap_or((self.source.len(), 0));
        Error::parse(message, Some(span))
    }

    pub fn expected(&self, what: &str) -> Error {
        self.error(format!("Expected {}, found {}", what, self.current().describe()))
    }
}

// =============================================================================
// Names and literals
// =============================================================================

/// Parse a bare or backtick-quoted identifier
pub fn parse_identifier(parser: &mut Parser) -> Result<Ident> {
    match parser.current().clone() {
        Token::Word(w) => {
            parser.advance();
            Ok(Ident::new(w))
        }
        Token::QuotedIdentifier(w) => {
            parser.advance();
            Ok(Ident::quoted(w))
        }
        _ => Err(parser.expected("identifier")),
    }
}

/// Parse a dotted name such as `catalog.db.table`
pub fn parse_object_name(parser: &mut Parser) -> Result<ObjectName> {
    let mut parts = vec![parse_identifier(parser)?];
    while parser.check(&Token::Dot)
        && matches!(parser.peek(), Token::Word(_) | Token::QuotedIdentifier(_))
    {
        parser.advance();
        parts.push(parse_identifier(parser)?);
    }
    Ok(ObjectName(parts))
}

/// Parse `(a, b, c)`
pub fn parse_parenthesized_identifiers(parser: &mut Parser) -> Result<Vec<Ident>> {
    parser.expect(&Token::LParen)?;
    let mut idents = vec![parse_identifier(parser)?];
    while parser.consume(&Token::Comma) {
        idents.push(parse_identifier(parser)?);
    }
    parser.expect(&Token::RParen)?;
    Ok(idents)
}

/// Parse one string literal, returning it with its quotes
pub fn parse_string_literal(parser: &mut Parser) -> Result<String> {
    match parser.current().clone() {
        Token::StringLiteral(s) => {
            parser.advance();
            Ok(s)
        }
        _ => Err(parser.expected("string literal")),
    }
}

pub fn parse_number(parser: &mut Parser) -> Result<String> {
    match parser.current().clone() {
        Token::Number(n) => {
            parser.advance();
            Ok(n)
        }
        _ => Err(parser.expected("number")),
    }
}

fn is_identifier_token(token: &Token) -> bool {
    matches!(token, Token::Word(_) | Token::QuotedIdentifier(_))
}

/// True when the current token may be read as an implicit alias
pub fn can_be_implicit_alias(parser: &Parser) -> bool {
    match parser.current() {
        Token::QuotedIdentifier(_) => true,
        Token::Word(w) => !contains_ignore_case(ALIAS_STOP, w),
        _ => false,
    }
}

// =============================================================================
// Expressions
// =============================================================================

/// Parse an expression
pub fn parse_expression(parser: &mut Parser) -> Result<Expr> {
    parse_or(parser)
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

fn parse_or(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_and(parser)?;
    while parser.consume_keyword("OR") {
        let right = parse_and(parser)?;
        left = binary(left, BinaryOperator::Or, right);
    }
    Ok(left)
}

fn parse_and(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_not(parser)?;
    while parser.consume_keyword("AND") {
        let right = parse_not(parser)?;
        left = binary(left, BinaryOperator::And, right);
    }
    Ok(left)
}

fn parse_not(parser: &mut Parser) -> Result<Expr> {
    if parser.consume_keyword("NOT") || parser.consume(&Token::Bang) {
        let expr = parse_not(parser)?;
        return Ok(Expr::UnaryOp {
            op: UnaryOperator::Not,
            expr: Box::new(expr),
        });
    }
    parse_predicate(parser)
}

fn parse_predicate(parser: &mut Parser) -> Result<Expr> {
    let mut expr = parse_comparison(parser)?;
    loop {
        let start = parser.position();
        let negated = parser.consume_keyword("NOT");

        if parser.consume_keyword("BETWEEN") {
            let low = parse_comparison(parser)?;
            parser.expect_keyword("AND")?;
            let high = parse_comparison(parser)?;
            expr = Expr::Between {
                expr: Box::new(expr),
                negated,
                low: Box::new(low),
                high: Box::new(high),
            };
        } else if parser.consume_keyword("IN") {
            parser.expect(&Token::LParen)?;
            if is_query_start(parser) {
                let subquery = parse_query(parser)?;
                parser.expect(&Token::RParen)?;
                expr = Expr::InSubquery {
                    expr: Box::new(expr),
                    negated,
                    subquery: Box::new(subquery),
                };
            } else {
                let list = parse_comma_separated_exprs(parser)?;
                parser.expect(&Token::RParen)?;
                expr = Expr::InList {
                    expr: Box::new(expr),
                    negated,
                    list,
                };
            }
        } else if let Some(op) = like_operator(parser) {
            parser.advance();
            let pattern = parse_comparison(parser)?;
            let escape = if parser.consume_keyword("ESCAPE") {
                Some(parse_string_literal(parser)?)
            } else {
                None
            };
            expr = Expr::Like {
                expr: Box::new(expr),
                negated,
                op,
                pattern: Box::new(pattern),
                escape,
            };
        } else if !negated && parser.consume_keyword("IS") {
            let negated = parser.consume_keyword("NOT");
            if parser.consume_keywords(&["DISTINCT", "FROM"]) {
                let other = parse_comparison(parser)?;
                expr = Expr::IsDistinctFrom {
                    expr: Box::new(expr),
                    negated,
                    other: Box::new(other),
                };
            } else {
                let test = if parser.consume_keyword("NULL") {
                    IsTest::Null
                } else if parser.consume_keyword("TRUE") {
                    IsTest::True
                } else if parser.consume_keyword("FALSE") {
                    IsTest::False
                } else if parser.consume_keyword("UNKNOWN") {
                    IsTest::Unknown
                } else {
                    return Err(parser.expected("NULL, TRUE, FALSE, UNKNOWN or DISTINCT FROM"));
                };
                expr = Expr::Is {
                    expr: Box::new(expr),
                    negated,
                    test,
                };
            }
        } else {
            parser.restore(start);
            return Ok(expr);
        }
    }
}

fn like_operator(parser: &Parser) -> Option<LikeOperator> {
    let word = parser.current_word()?;
    match word.as_str() {
        "LIKE" => Some(LikeOperator::Like),
        "ILIKE" => Some(LikeOperator::ILike),
        "RLIKE" => Some(LikeOperator::RLike),
        "REGEXP" => Some(LikeOperator::Regexp),
        _ => None,
    }
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_bitwise_or(parser)?;
    loop {
        let op = match parser.current() {
            Token::Eq => BinaryOperator::Eq,
            Token::DoubleEq => BinaryOperator::DoubleEq,
            Token::NotEq => BinaryOperator::NotEq,
            Token::BangEq => BinaryOperator::BangEq,
            Token::Lt => BinaryOperator::Lt,
            Token::LtEq => BinaryOperator::LtEq,
            Token::Gt => BinaryOperator::Gt,
            Token::GtEq => BinaryOperator::GtEq,
            Token::NullSafeEq => BinaryOperator::NullSafeEq,
            _ => return Ok(left),
        };
        parser.advance();
        let right = parse_bitwise_or(parser)?;
        left = binary(left, op, right);
    }
}

fn parse_bitwise_or(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_bitwise_xor(parser)?;
    while parser.consume(&Token::Pipe) {
        let right = parse_bitwise_xor(parser)?;
        left = binary(left, BinaryOperator::BitwiseOr, right);
    }
    Ok(left)
}

fn parse_bitwise_xor(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_bitwise_and(parser)?;
    while parser.consume(&Token::Caret) {
        let right = parse_bitwise_and(parser)?;
        left = binary(left, BinaryOperator::BitwiseXor, right);
    }
    Ok(left)
}

fn parse_bitwise_and(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_additive(parser)?;
    while parser.consume(&Token::Ampersand) {
        let right = parse_additive(parser)?;
        left = binary(left, BinaryOperator::BitwiseAnd, right);
    }
    Ok(left)
}

fn parse_additive(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_multiplicative(parser)?;
    loop {
        let op = match parser.current() {
            Token::Plus => BinaryOperator::Plus,
            Token::Minus => BinaryOperator::Minus,
            Token::Concat => BinaryOperator::Concat,
            _ => return Ok(left),
        };
        parser.advance();
        let right = parse_multiplicative(parser)?;
        left = binary(left, op, right);
    }
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr> {
    let mut left = parse_unary(parser)?;
    loop {
        let op = match parser.current() {
            Token::Star => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            Token::Percent => BinaryOperator::Modulo,
            t if t.is_keyword("DIV") => BinaryOperator::IntegerDivide,
            _ => return Ok(left),
        };
        parser.advance();
        let right = parse_unary(parser)?;
        left = binary(left, op, right);
    }
}

fn parse_unary(parser: &mut Parser) -> Result<Expr> {
    let op = match parser.current() {
        Token::Minus => Some(UnaryOperator::Minus),
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Tilde => Some(UnaryOperator::BitwiseNot),
        _ => None,
    };
    match op {
        Some(op) => {
            parser.advance();
            let expr = parse_unary(parser)?;
            Ok(Expr::UnaryOp {
                op,
                expr: Box::new(expr),
            })
        }
        None => parse_postfix(parser),
    }
}

fn parse_postfix(parser: &mut Parser) -> Result<Expr> {
    let mut expr = parse_primary(parser)?;
    loop {
        if parser.consume(&Token::LBracket) {
            let index = parse_expression(parser)?;
            parser.expect(&Token::RBracket)?;
            expr = Expr::Subscript {
                expr: Box::new(expr),
                index: Box::new(index),
            };
        } else if parser.check(&Token::Dot) && is_identifier_token(parser.peek()) {
            parser.advance();
            let field = parse_identifier(parser)?;
            expr = Expr::FieldAccess {
                expr: Box::new(expr),
                field,
            };
        } else if parser.consume(&Token::DoubleColon) {
            let data_type = parse_data_type(parser)?;
            expr = Expr::Cast {
                expr: Box::new(expr),
                data_type,
                try_cast: false,
                shorthand: true,
            };
        } else {
            return Ok(expr);
        }
    }
}

fn parse_primary(parser: &mut Parser) -> Result<Expr> {
    match parser.current().clone() {
        Token::Number(n) => {
            parser.advance();
            Ok(Expr::Literal(Literal::Number(n)))
        }
        Token::StringLiteral(s) => {
            parser.advance();
            let mut pieces = vec![s];
            while let Token::StringLiteral(next) = parser.current().clone() {
                parser.advance();
                pieces.push(next);
            }
            Ok(Expr::Literal(Literal::String(pieces)))
        }
        Token::Star => {
            parser.advance();
            Ok(Expr::Wildcard)
        }
        Token::LParen => parse_parenthesized(parser),
        Token::QuotedIdentifier(_) => parse_name_expression(parser),
        Token::Word(word) => parse_word_expression(parser, &word.to_ascii_uppercase()),
        _ => Err(parser.expected("expression")),
    }
}

fn parse_word_expression(parser: &mut Parser, upper: &str) -> Result<Expr> {
    let next = parser.peek().clone();
    let call = next == Token::LParen;

    if let Token::StringLiteral(value) = &next {
        if contains_ignore_case(TYPED_LITERAL_PREFIXES, upper) {
            parser.advance();
            parser.advance();
            return Ok(Expr::TypedLiteral {
                data_type: upper.to_string(),
                value: value.clone(),
            });
        }
    }

    match upper {
        "NULL" if !call => {
            parser.advance();
            return Ok(Expr::Literal(Literal::Null));
        }
        "TRUE" | "FALSE" if !call => {
            parser.advance();
            return Ok(Expr::Literal(Literal::Boolean(upper == "TRUE")));
        }
        "INTERVAL"
            if matches!(next, Token::StringLiteral(_) | Token::Number(_) | Token::Minus) =>
        {
            return parse_interval(parser);
        }
        "CASE" => return parse_case(parser),
        "CAST" | "TRY_CAST" if call => return parse_cast(parser, upper == "TRY_CAST"),
        "EXTRACT" if call => return parse_extract(parser),
        "EXISTS" if call && starts_query_after_paren(parser) => {
            parser.advance();
            parser.advance();
            let query = parse_query(parser)?;
            parser.expect(&Token::RParen)?;
            return Ok(Expr::Exists(Box::new(query)));
        }
        "STRUCT" if call => {
            parser.advance();
            parser.advance();
            let fields = if parser.check(&Token::RParen) {
                Vec::new()
            } else {
                parse_select_items(parser)?
            };
            parser.expect(&Token::RParen)?;
            return Ok(Expr::Struct(fields));
        }
        u if !call && contains_ignore_case(CURRENT_FUNCTIONS, u) => {
            parser.advance();
            return Ok(Expr::CurrentLike(upper.to_ascii_lowercase()));
        }
        _ => {}
    }

    if call {
        let special = match upper {
            "SUBSTRING" | "SUBSTR" => try_special(parser, parse_substring)?,
            "TRIM" => try_special(parser, parse_trim)?,
            "POSITION" => try_special(parser, parse_position)?,
            "OVERLAY" => try_special(parser, parse_overlay)?,
            "FIRST" | "LAST" => try_special(parser, parse_first_last)?,
            u if contains_ignore_case(DATETIME_ARITH_FUNCTIONS, u) => {
                try_special(parser, parse_datetime_arith)?
            }
            _ => None,
        };
        if let Some(expr) = special {
            return Ok(expr);
        }
    } else if contains_ignore_case(EXPR_RESERVED, upper) {
        return Err(parser.expected("expression"));
    }

    parse_name_expression(parser)
}

/// Run a special-form parser, rewinding when it does not apply
fn try_special(
    parser: &mut Parser,
    f: fn(&mut Parser) -> Result<Option<Expr>>,
) -> Result<Option<Expr>> {
    let start = parser.position();
    match f(parser) {
        Ok(Some(expr)) => Ok(Some(expr)),
        Ok(None) | Err(_) => {
            parser.restore(start);
            Ok(None)
        }
    }
}

/// Identifier, compound identifier, qualified wildcard, function call or lambda
fn parse_name_expression(parser: &mut Parser) -> Result<Expr> {
    let mut parts = vec![parse_identifier(parser)?];
    while parser.check(&Token::Dot) {
        match parser.peek() {
            Token::Word(_) | Token::QuotedIdentifier(_) => {
                parser.advance();
                parts.push(parse_identifier(parser)?);
            }
            Token::Star => {
                parser.advance();
                parser.advance();
                return Ok(Expr::QualifiedWildcard(ObjectName(parts)));
            }
            _ => break,
        }
    }

    if parser.check(&Token::LParen) {
        return parse_function_call(parser, ObjectName(parts)).map(Expr::Function);
    }

    if parts.len() == 1 && parser.consume(&Token::Arrow) {
        let body = parse_expression(parser)?;
        return Ok(Expr::Lambda {
            params: parts,
            parenthesized: false,
            body: Box::new(body),
        });
    }

    if parts.len() == 1 {
        Ok(Expr::Identifier(parts.remove(0)))
    } else {
        Ok(Expr::CompoundIdentifier(parts))
    }
}

pub fn parse_function_call(parser: &mut Parser, name: ObjectName) -> Result<Function> {
    parser.expect(&Token::LParen)?;
    let mut quantifier = None;
    let mut args = Vec::new();
    if !parser.check(&Token::RParen) {
        if parser.consume_keyword("DISTINCT") {
            quantifier = Some(SetQuantifier::Distinct);
        } else if parser.check_keyword("ALL")
            && !matches!(parser.peek(), Token::RParen | Token::Comma)
        {
            parser.advance();
            quantifier = Some(SetQuantifier::All);
        }
        args = parse_function_args(parser)?;
    }
    parser.expect(&Token::RParen)?;

    let within_group = if parser.consume_keywords(&["WITHIN", "GROUP"]) {
        parser.expect(&Token::LParen)?;
        parser.expect_keywords(&["ORDER", "BY"])?;
        let items = parse_order_by_items(parser)?;
        parser.expect(&Token::RParen)?;
        items
    } else {
        Vec::new()
    };

    let filter = if parser.check_keyword("FILTER") && parser.peek() == &Token::LParen {
        parser.advance();
        parser.advance();
        parser.expect_keyword("WHERE")?;
        let condition = parse_expression(parser)?;
        parser.expect(&Token::RParen)?;
        Some(Box::new(condition))
    } else {
        None
    };

    let null_treatment = if parser.consume_keywords(&["IGNORE", "NULLS"]) {
        Some(NullTreatment::IgnoreNulls)
    } else if parser.consume_keywords(&["RESPECT", "NULLS"]) {
        Some(NullTreatment::RespectNulls)
    } else {
        None
    };

    let over = if parser.consume_keyword("OVER") {
        Some(parse_window_spec(parser)?)
    } else {
        None
    };

    Ok(Function {
        name,
        quantifier,
        args,
        within_group,
        filter,
        null_treatment,
        over,
    })
}

/// Comma-separated arguments, positional or `name => value`
pub fn parse_function_args(parser: &mut Parser) -> Result<Vec<FunctionArg>> {
    let mut args = vec![parse_function_arg(parser)?];
    while parser.consume(&Token::Comma) {
        args.push(parse_function_arg(parser)?);
    }
    Ok(args)
}

fn parse_function_arg(parser: &mut Parser) -> Result<FunctionArg> {
    if is_identifier_token(parser.current()) && parser.peek() == &Token::FatArrow {
        let name = parse_identifier(parser)?;
        parser.advance();
        let value = parse_expression(parser)?;
        return Ok(FunctionArg::Named { name, value });
    }
    parse_expression(parser).map(FunctionArg::Unnamed)
}

pub fn parse_comma_separated_exprs(parser: &mut Parser) -> Result<Vec<Expr>> {
    let mut exprs = vec![parse_expression(parser)?];
    while parser.consume(&Token::Comma) {
        exprs.push(parse_expression(parser)?);
    }
    Ok(exprs)
}

/// `(` at the current position followed by a query
fn starts_query_after_paren(parser: &Parser) -> bool {
    let mut n = 1;
    while parser.peek_nth(n) == &Token::LParen {
        n += 1;
    }
    ["SELECT", "WITH", "FROM", "VALUES"]
        .iter()
        .any(|kw| parser.peek_keyword(n, kw))
}

fn parse_parenthesized(parser: &mut Parser) -> Result<Expr> {
    let start = parser.position();

    if starts_query_after_paren(parser) {
        // `((SELECT 1) + 1)` starts like a query but is an expression
        let doubled = parser.peek() == &Token::LParen;
        parser.advance();
        let attempt = parse_query(parser).and_then(|query| {
            parser.expect(&Token::RParen)?;
            Ok(query)
        });
        match attempt {
            Ok(query) => return Ok(Expr::Subquery(Box::new(query))),
            Err(e) if !doubled => return Err(e),
            Err(_) => parser.restore(start),
        }
    }

    if let Some(lambda) = try_parenthesized_lambda(parser)? {
        return Ok(lambda);
    }

    parser.expect(&Token::LParen)?;
    let first = parse_select_item(parser)?;
    if first.alias.is_none() && parser.consume(&Token::RParen) {
        return Ok(Expr::Parenthesized(Box::new(first.expr)));
    }
    let mut items = vec![first];
    while parser.consume(&Token::Comma) {
        items.push(parse_select_item(parser)?);
    }
    parser.expect(&Token::RParen)?;
    Ok(Expr::Row(items))
}

fn try_parenthesized_lambda(parser: &mut Parser) -> Result<Option<Expr>> {
    let start = parser.position();
    parser.advance();
    let mut params = Vec::new();
    loop {
        if !is_identifier_token(parser.current()) {
            parser.restore(start);
            return Ok(None);
        }
        params.push(parse_identifier(parser)?);
        if parser.consume(&Token::Comma) {
            continue;
        }
        break;
    }
    if !(parser.consume(&Token::RParen) && parser.consume(&Token::Arrow)) {
        parser.restore(start);
        return Ok(None);
    }
    let body = parse_expression(parser)?;
    Ok(Some(Expr::Lambda {
        params,
        parenthesized: true,
        body: Box::new(body),
    }))
}

fn parse_interval(parser: &mut Parser) -> Result<Expr> {
    parser.expect_keyword("INTERVAL")?;
    let mut parts = Vec::new();
    loop {
        let value = match parser.current().clone() {
            Token::StringLiteral(s) | Token::Number(s) => {
                parser.advance();
                s
            }
            Token::Minus => match parser.peek().clone() {
                Token::Number(n) => {
                    parser.advance();
                    parser.advance();
                    format!("-{}", n)
                }
                _ => break,
            },
            _ => break,
        };
        let unit = match parser.current_word() {
            Some(w) if contains_ignore_case(INTERVAL_UNITS, &w) => {
                parser.advance();
                Some(w)
            }
            _ => None,
        };
        parts.push(IntervalPart { value, unit });
    }
    if parts.is_empty() {
        return Err(parser.expected("interval value"));
    }
    let to = if parser.consume_keyword("TO") {
        match parser.current_word() {
            Some(w) if contains_ignore_case(INTERVAL_UNITS, &w) => {
                parser.advance();
                Some(w)
            }
            _ => return Err(parser.expected("interval unit")),
        }
    } else {
        None
    };
    Ok(Expr::Interval(IntervalLiteral { parts, to }))
}

fn parse_case(parser: &mut Parser) -> Result<Expr> {
    parser.expect_keyword("CASE")?;
    let operand = if parser.check_keyword("WHEN") {
        None
    } else {
        Some(Box::new(parse_expression(parser)?))
    };

    let mut when_clauses = Vec::new();
    while parser.consume_keyword("WHEN") {
        let condition = parse_expression(parser)?;
        parser.expect_keyword("THEN")?;
        let result = parse_expression(parser)?;
        when_clauses.push(WhenClause { condition, result });
    }
    if when_clauses.is_empty() {
        return Err(parser.expected("WHEN"));
    }

    let else_clause = if parser.consume_keyword("ELSE") {
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };
    parser.expect_keyword("END")?;

    Ok(Expr::Case(CaseExpression {
        operand,
        when_clauses,
        else_clause,
    }))
}

fn parse_cast(parser: &mut Parser, try_cast: bool) -> Result<Expr> {
    parser.advance();
    parser.expect(&Token::LParen)?;
    let expr = parse_expression(parser)?;
    parser.expect_keyword("AS")?;
    let data_type = parse_data_type(parser)?;
    parser.expect(&Token::RParen)?;
    Ok(Expr::Cast {
        expr: Box::new(expr),
        data_type,
        try_cast,
        shorthand: false,
    })
}

fn parse_extract(parser: &mut Parser) -> Result<Expr> {
    parser.advance();
    parser.expect(&Token::LParen)?;
    let field = match parser.current_word() {
        Some(w) => {
            parser.advance();
            w
        }
        None => return Err(parser.expected("date field")),
    };
    parser.expect_keyword("FROM")?;
    let expr = parse_expression(parser)?;
    parser.expect(&Token::RParen)?;
    Ok(Expr::Extract {
        field,
        expr: Box::new(expr),
    })
}

fn parse_substring(parser: &mut Parser) -> Result<Option<Expr>> {
    let name = match parser.current() {
        Token::Word(w) => w.to_ascii_lowercase(),
        _ => return Ok(None),
    };
    parser.advance();
    parser.expect(&Token::LParen)?;
    let expr = parse_expression(parser)?;
    let (position, length, keyword_form) = if parser.consume_keyword("FROM") {
        let position = parse_expression(parser)?;
        let length = if parser.consume_keyword("FOR") {
            Some(Box::new(parse_expression(parser)?))
        } else {
            None
        };
        (position, length, true)
    } else if parser.consume(&Token::Comma) {
        let position = parse_expression(parser)?;
        let length = if parser.consume(&Token::Comma) {
            Some(Box::new(parse_expression(parser)?))
        } else {
            None
        };
        (position, length, false)
    } else {
        return Ok(None);
    };
    parser.expect(&Token::RParen)?;
    if is_function_suffix(parser) {
        return Ok(None);
    }
    Ok(Some(Expr::Substring {
        name,
        expr: Box::new(expr),
        position: Box::new(position),
        length,
        keyword_form,
    }))
}

fn parse_trim(parser: &mut Parser) -> Result<Option<Expr>> {
    parser.advance();
    parser.expect(&Token::LParen)?;
    let side = match parser.current_word().as_deref() {
        Some("BOTH") => Some(TrimSide::Both),
        Some("LEADING") => Some(TrimSide::Leading),
        Some("TRAILING") => Some(TrimSide::Trailing),
        _ => None,
    };
    if side.is_some() {
        parser.advance();
    }
    let (characters, expr) = if parser.consume_keyword("FROM") {
        (None, parse_expression(parser)?)
    } else {
        let first = parse_expression(parser)?;
        if parser.consume_keyword("FROM") {
            (Some(Box::new(first)), parse_expression(parser)?)
        } else if side.is_none() {
            return Ok(None);
        } else {
            (None, first)
        }
    };
    parser.expect(&Token::RParen)?;
    Ok(Some(Expr::Trim {
        side,
        characters,
        expr: Box::new(expr),
    }))
}

fn parse_position(parser: &mut Parser) -> Result<Option<Expr>> {
    parser.advance();
    parser.expect(&Token::LParen)?;
    let needle = parse_comparison(parser)?;
    if !parser.consume_keyword("IN") {
        return Ok(None);
    }
    let haystack = parse_expression(parser)?;
    parser.expect(&Token::RParen)?;
    Ok(Some(Expr::Position {
        needle: Box::new(needle),
        haystack: Box::new(haystack),
    }))
}

fn parse_overlay(parser: &mut Parser) -> Result<Option<Expr>> {
    parser.advance();
    parser.expect(&Token::LParen)?;
    let expr = parse_expression(parser)?;
    if !parser.consume_keyword("PLACING") {
        return Ok(None);
    }
    let placing = parse_expression(parser)?;
    parser.expect_keyword("FROM")?;
    let from = parse_expression(parser)?;
    let length = if parser.consume_keyword("FOR") {
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };
    parser.expect(&Token::RParen)?;
    Ok(Some(Expr::Overlay {
        expr: Box::new(expr),
        placing: Box::new(placing),
        from: Box::new(from),
        length,
    }))
}

/// `first(x IGNORE NULLS)`; the plain call forms stay ordinary functions
fn parse_first_last(parser: &mut Parser) -> Result<Option<Expr>> {
    let last = parser.check_keyword("LAST");
    parser.advance();
    parser.expect(&Token::LParen)?;
    let expr = parse_expression(parser)?;
    if !parser.consume_keywords(&["IGNORE", "NULLS"]) {
        return Ok(None);
    }
    parser.expect(&Token::RParen)?;
    if is_function_suffix(parser) {
        return Ok(None);
    }
    Ok(Some(Expr::FirstLast {
        last,
        expr: Box::new(expr),
        ignore_nulls: true,
    }))
}

fn parse_datetime_arith(parser: &mut Parser) -> Result<Option<Expr>> {
    let name = match parser.current() {
        Token::Word(w) => w.to_ascii_lowercase(),
        _ => return Ok(None),
    };
    parser.advance();
    parser.expect(&Token::LParen)?;
    let unit = match parser.current_word() {
        Some(w) if contains_ignore_case(DATETIME_UNITS, &w) && parser.peek() == &Token::Comma => w,
        _ => return Ok(None),
    };
    parser.advance();
    parser.advance();
    let args = parse_comma_separated_exprs(parser)?;
    parser.expect(&Token::RParen)?;
    if is_function_suffix(parser) {
        return Ok(None);
    }
    Ok(Some(Expr::DatetimeArith { name, unit, args }))
}

/// Window and aggregate suffixes only an ordinary function call carries
fn is_function_suffix(parser: &Parser) -> bool {
    parser.check_keyword("OVER")
        || parser.check_keywords(&["WITHIN", "GROUP"])
        || (parser.check_keyword("FILTER") && parser.peek() == &Token::LParen)
}

// =============================================================================
// Select items (shared by SELECT, STRUCT, row constructors and PIVOT)
// =============================================================================

pub fn parse_select_items(parser: &mut Parser) -> Result<Vec<SelectItem>> {
    let mut items = vec![parse_select_item(parser)?];
    while parser.consume(&Token::Comma) {
        items.push(parse_select_item(parser)?);
    }
    Ok(items)
}

/// An expression with an optional `[AS] alias` or `AS (a, b)`
pub fn parse_select_item(parser: &mut Parser) -> Result<SelectItem> {
    let expr = parse_expression(parser)?;
    let alias = if parser.consume_keyword("AS") {
        let name = if parser.check(&Token::LParen) {
            AliasName::Multi(parse_parenthesized_identifiers(parser)?)
        } else {
            AliasName::Single(parse_identifier(parser)?)
        };
        Some(Alias {
            explicit_as: true,
            name,
        })
    } else if can_be_implicit_alias(parser) {
        Some(Alias {
            explicit_as: false,
            name: AliasName::Single(parse_identifier(parser)?),
        })
    } else {
        None
    };
    Ok(SelectItem { expr, alias })
}

// =============================================================================
// ORDER BY and window specifications
// =============================================================================

/// Parse ORDER BY items
pub fn parse_order_by_items(parser: &mut Parser) -> Result<Vec<OrderByItem>> {
    let mut items = vec![parse_order_by_item(parser)?];
    while parser.consume(&Token::Comma) {
        items.push(parse_order_by_item(parser)?);
    }
    Ok(items)
}

fn parse_order_by_item(parser: &mut Parser) -> Result<OrderByItem> {
    let expr = parse_expression(parser)?;
    let direction = if parser.consume_keyword("ASC") {
        Some(SortDirection::Asc)
    } else if parser.consume_keyword("DESC") {
        Some(SortDirection::Desc)
    } else {
        None
    };
    let nulls = if parser.consume_keywords(&["NULLS", "FIRST"]) {
        Some(NullsOrder::First)
    } else if parser.consume_keywords(&["NULLS", "LAST"]) {
        Some(NullsOrder::Last)
    } else {
        None
    };
    Ok(OrderByItem {
        expr,
        direction,
        nulls,
    })
}

/// Parse the target of OVER or `WINDOW w AS`
pub fn parse_window_spec(parser: &mut Parser) -> Result<WindowSpec> {
    if !parser.check(&Token::LParen) {
        return parse_identifier(parser).map(WindowSpec::Named);
    }
    if is_identifier_token(parser.peek()) && parser.peek_nth(2) == &Token::RParen {
        parser.advance();
        let name = parse_identifier(parser)?;
        parser.advance();
        return Ok(WindowSpec::NamedParenthesized(name));
    }

    parser.expect(&Token::LParen)?;
    let mut def = WindowDefinition::default();

    if parser.consume_keywords(&["PARTITION", "BY"]) {
        def.partition_by = parse_comma_separated_exprs(parser)?;
    } else if parser.consume_keywords(&["DISTRIBUTE", "BY"]) {
        def.partition_by = parse_comma_separated_exprs(parser)?;
        def.distribute = true;
    }

    if parser.consume_keywords(&["ORDER", "BY"]) {
        def.order_by = parse_order_by_items(parser)?;
    } else if parser.consume_keywords(&["SORT", "BY"]) {
        def.order_by = parse_order_by_items(parser)?;
        def.sort = true;
    } else if parser.consume_keywords(&["CLUSTER", "BY"]) {
        def.cluster_by = parse_comma_separated_exprs(parser)?;
    }

    let unit = if parser.consume_keyword("ROWS") {
        Some(WindowFrameUnit::Rows)
    } else if parser.consume_keyword("RANGE") {
        Some(WindowFrameUnit::Range)
    } else {
        None
    };
    if let Some(unit) = unit {
        let (start, end) = if parser.consume_keyword("BETWEEN") {
            let start = parse_frame_bound(parser)?;
            parser.expect_keyword("AND")?;
            (start, Some(parse_frame_bound(parser)?))
        } else {
            (parse_frame_bound(parser)?, None)
        };
        def.frame = Some(WindowFrame { unit, start, end });
    }

    parser.expect(&Token::RParen)?;
    Ok(WindowSpec::Inline(def))
}

fn parse_frame_bound(parser: &mut Parser) -> Result<WindowFrameBound> {
    if parser.consume_keywords(&["UNBOUNDED", "PRECEDING"]) {
        return Ok(WindowFrameBound::UnboundedPreceding);
    }
    if parser.consume_keywords(&["UNBOUNDED", "FOLLOWING"]) {
        return Ok(WindowFrameBound::UnboundedFollowing);
    }
    if parser.consume_keywords(&["CURRENT", "ROW"]) {
        return Ok(WindowFrameBound::CurrentRow);
    }
    let offset = parse_additive(parser)?;
    if parser.consume_keyword("PRECEDING") {
        Ok(WindowFrameBound::Preceding(Box::new(offset)))
    } else if parser.consume_keyword("FOLLOWING") {
        Ok(WindowFrameBound::Following(Box::new(offset)))
    } else {
        Err(parser.expected("PRECEDING or FOLLOWING"))
    }
}

// =============================================================================
// Data types
// =============================================================================

/// Parse a data type, keeping the spelling of type names
pub fn parse_data_type(parser: &mut Parser) -> Result<DataType> {
    let name = match parser.current().clone() {
        Token::Word(w) => w,
        _ => return Err(parser.expected("data type")),
    };
    parser.advance();
    let upper = name.to_ascii_uppercase();

    match upper.as_str() {
        "ARRAY" if parser.check(&Token::Lt) => {
            parser.advance();
            let element = parse_data_type(parser)?;
            parser.expect(&Token::Gt)?;
            Ok(DataType::Array {
                keyword: name,
                element: Box::new(element),
            })
        }
        "MAP" if parser.check(&Token::Lt) => {
            parser.advance();
            let key = parse_data_type(parser)?;
            parser.expect(&Token::Comma)?;
            let value = parse_data_type(parser)?;
            parser.expect(&Token::Gt)?;
            Ok(DataType::Map {
                keyword: name,
                key: Box::new(key),
                value: Box::new(value),
            })
        }
        "STRUCT" if parser.consume(&Token::NotEq) => Ok(DataType::Struct {
            keyword: name,
            fields: Vec::new(),
        }),
        "STRUCT" if parser.check(&Token::Lt) => {
            parser.advance();
            let mut fields = vec![parse_struct_field(parser)?];
            while parser.consume(&Token::Comma) {
                fields.push(parse_struct_field(parser)?);
            }
            parser.expect(&Token::Gt)?;
            Ok(DataType::Struct {
                keyword: name,
                fields,
            })
        }
        "INTERVAL" => {
            let from = match parser.current_word() {
                Some(w) if contains_ignore_case(INTERVAL_UNITS, &w) => {
                    parser.advance();
                    w
                }
                _ => return Err(parser.expected("interval unit")),
            };
            let to = if parser.consume_keyword("TO") {
                match parser.current_word() {
                    Some(w) => {
                        parser.advance();
                        Some(w)
                    }
                    None => return Err(parser.expected("interval unit")),
                }
            } else {
                None
            };
            Ok(DataType::Interval { from, to })
        }
        _ => {
            let mut params = Vec::new();
            if parser.consume(&Token::LParen) {
                loop {
                    match parser.current().clone() {
                        Token::Number(n) | Token::Word(n) => {
                            parser.advance();
                            params.push(n);
                        }
                        _ => return Err(parser.expected("type parameter")),
                    }
                    if !parser.consume(&Token::Comma) {
                        break;
                    }
                }
                parser.expect(&Token::RParen)?;
            }
            Ok(DataType::Primitive { name, params })
        }
    }
}

fn parse_struct_field(parser: &mut Parser) -> Result<StructField> {
    let name = parse_identifier(parser)?;
    let colon = parser.consume(&Token::Colon);
    let data_type = parse_data_type(parser)?;
    let not_null = parser.consume_keywords(&["NOT", "NULL"]);
    let comment = if parser.consume_keyword("COMMENT") {
        Some(parse_string_literal(parser)?)
    } else {
        None
    };
    Ok(StructField {
        name,
        colon,
        data_type,
        not_null,
        comment,
    })
}
