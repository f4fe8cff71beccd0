//! Query parsing
//!
//! WITH, set operations, SELECT bodies, FROM and JOIN chains, GROUP BY and
//! the trailing ORDER BY / LIMIT clauses.

use crate::ast::*;
use crate::parser::expr::{
    can_be_implicit_alias, parse_comma_separated_exprs, parse_expression, parse_function_args,
    parse_identifier, parse_number, parse_object_name, parse_order_by_items,
    parse_parenthesized_identifiers, parse_select_items, parse_window_spec, Parser,
};
use crate::parser::lexer::Token;
use crate::Result;

/// True when the current token begins a query, looking through leading `(`
pub fn is_query_start(parser: &Parser) -> bool {
    let mut n = 0;
    while parser.peek_nth(n) == &Token::LParen {
        n += 1;
    }
    ["SELECT", "WITH", "FROM", "VALUES"]
        .iter()
        .any(|kw| parser.peek_keyword(n, kw))
        || (n == 0 && parser.check_keyword("TABLE"))
}

/// Parse a full query
pub fn parse_query(parser: &mut Parser) -> Result<Query> {
    let with = if parser.check_keyword("WITH") {
        Some(parse_with_clause(parser)?)
    } else {
        None
    };
    parse_query_after_with(parser, with)
}

pub fn parse_query_after_with(parser: &mut Parser, with: Option<WithClause>) -> Result<Query> {
    let body = parse_set_expression(parser)?;
    let organization = parse_organization(parser)?;
    Ok(Query {
        with,
        body,
        organization,
    })
}

/// Parse `WITH name [(cols)] AS (query), ...`
pub fn parse_with_clause(parser: &mut Parser) -> Result<WithClause> {
    parser.expect_keyword("WITH")?;
    let mut ctes = vec![parse_cte(parser)?];
    while parser.consume(&Token::Comma) {
        ctes.push(parse_cte(parser)?);
    }
    Ok(WithClause { ctes })
}

fn parse_cte(parser: &mut Parser) -> Result<CommonTableExpression> {
    let name = parse_identifier(parser)?;
    let columns = if parser.check(&Token::LParen) {
        parse_parenthesized_identifiers(parser)?
    } else {
        Vec::new()
    };
    parser.consume_keyword("AS");
    parser.expect(&Token::LParen)?;
    let query = parse_query(parser)?;
    parser.expect(&Token::RParen)?;
    Ok(CommonTableExpression {
        name,
        columns,
        query: Box::new(query),
    })
}

// UNION / EXCEPT / MINUS bind looser than INTERSECT
fn parse_set_expression(parser: &mut Parser) -> Result<QueryBody> {
    let mut left = parse_intersect_expression(parser)?;
    loop {
        let op = if parser.check_keyword("UNION") {
            SetOperator::Union
        } else if parser.check_keyword("EXCEPT") {
            SetOperator::Except
        } else if parser.check_keyword("MINUS") {
            SetOperator::Minus
        } else {
            return Ok(left);
        };
        parser.advance();
        let quantifier = parse_set_quantifier(parser);
        let right = parse_intersect_expression(parser)?;
        left = QueryBody::SetOperation {
            left: Box::new(left),
            op,
            quantifier,
            right: Box::new(right),
        };
    }
}

fn parse_intersect_expression(parser: &mut Parser) -> Result<QueryBody> {
    let mut left = parse_query_primary(parser)?;
    while parser.consume_keyword("INTERSECT") {
        let quantifier = parse_set_quantifier(parser);
        let right = parse_query_primary(parser)?;
        left = QueryBody::SetOperation {
            left: Box::new(left),
            op: SetOperator::Intersect,
            quantifier,
            right: Box::new(right),
        };
    }
    Ok(left)
}

fn parse_set_quantifier(parser: &mut Parser) -> Option<SetQuantifier> {
    if parser.consume_keyword("ALL") {
        Some(SetQuantifier::All)
    } else if parser.consume_keyword("DISTINCT") {
        Some(SetQuantifier::Distinct)
    } else {
        None
    }
}

fn parse_query_primary(parser: &mut Parser) -> Result<QueryBody> {
    if parser.check_keyword("SELECT") {
        return parse_select_body(parser, true).map(|s| QueryBody::Select(Box::new(s)));
    }
    if parser.check_keyword("VALUES") {
        let values = parse_values_clause(parser)?;
        let alias = parse_table_alias(parser)?;
        return Ok(QueryBody::Values { values, alias });
    }
    if parser.consume_keyword("TABLE") {
        return parse_object_name(parser).map(QueryBody::Table);
    }
    if parser.check_keyword("FROM") {
        let from = parse_from_clause(parser)?;
        return parse_from_query_bodies(parser, from).map(|q| QueryBody::From(Box::new(q)));
    }
    if parser.consume(&Token::LParen) {
        let query = parse_query(parser)?;
        parser.expect(&Token::RParen)?;
        return Ok(QueryBody::Nested(Box::new(query)));
    }
    Err(parser.expected("SELECT, VALUES, TABLE, FROM or '('"))
}

/// One or more `SELECT ...` bodies after a leading FROM clause
pub fn parse_from_query_bodies(parser: &mut Parser, from: FromClause) -> Result<FromQuery> {
    let mut bodies = Vec::new();
    while parser.check_keyword("SELECT") {
        let select = parse_select_body(parser, false)?;
        let organization = parse_organization(parser)?;
        bodies.push(FromQueryBody {
            select,
            organization,
        });
    }
    if bodies.is_empty() {
        return Err(parser.expected("SELECT"));
    }
    Ok(FromQuery { from, bodies })
}

/// Parse `SELECT ... [FROM ...] [WHERE] [GROUP BY] [HAVING] [WINDOW]`
pub fn parse_select_body(parser: &mut Parser, allow_from: bool) -> Result<SelectBody> {
    parser.expect_keyword("SELECT")?;

    let mut hints = Vec::new();
    while parser.check(&Token::HintStart) {
        hints.push(parse_hint(parser)?);
    }

    let quantifier = if parser.consume_keyword("DISTINCT") {
        Some(SetQuantifier::Distinct)
    } else if parser.consume_keyword("ALL") {
        Some(SetQuantifier::All)
    } else {
        None
    };

    let items = parse_select_items(parser)?;

    let from = if allow_from && parser.check_keyword("FROM") {
        Some(parse_from_clause(parser)?)
    } else {
        None
    };

    let where_clause = if parser.consume_keyword("WHERE") {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    let group_by = if parser.consume_keywords(&["GROUP", "BY"]) {
        Some(parse_group_by(parser)?)
    } else {
        None
    };

    let having = if parser.consume_keyword("HAVING") {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    let mut windows = Vec::new();
    if parser.consume_keyword("WINDOW") {
        loop {
            let name = parse_identifier(parser)?;
            parser.expect_keyword("AS")?;
            let spec = parse_window_spec(parser)?;
            windows.push(NamedWindow { name, spec });
            if !parser.consume(&Token::Comma) {
                break;
            }
        }
    }

    Ok(SelectBody {
        hints,
        quantifier,
        items,
        from,
        where_clause,
        group_by,
        having,
        windows,
    })
}

fn parse_hint(parser: &mut Parser) -> Result<Hint> {
    parser.expect(&Token::HintStart)?;
    let mut functions = Vec::new();
    while !parser.check(&Token::HintEnd) {
        if !functions.is_empty() {
            parser.consume(&Token::Comma);
        }
        let name = parse_identifier(parser)?;
        let args = if parser.consume(&Token::LParen) {
            let args = if parser.check(&Token::RParen) {
                Vec::new()
            } else {
                parse_comma_separated_exprs(parser)?
            };
            parser.expect(&Token::RParen)?;
            Some(args)
        } else {
            None
        };
        functions.push(HintFunction { name, args });
    }
    parser.expect(&Token::HintEnd)?;
    Ok(Hint { functions })
}

// =============================================================================
// FROM
// =============================================================================

/// Parse `FROM relation, ... [LATERAL VIEW ...] [PIVOT (...)]`
pub fn parse_from_clause(parser: &mut Parser) -> Result<FromClause> {
    parser.expect_keyword("FROM")?;
    let mut relations = vec![parse_relation(parser)?];
    while parser.consume(&Token::Comma) {
        relations.push(parse_relation(parser)?);
    }

    let mut lateral_views = Vec::new();
    while parser.check_keywords(&["LATERAL", "VIEW"]) {
        lateral_views.push(parse_lateral_view(parser)?);
    }

    let pivot = if parser.check_keyword("PIVOT") && parser.peek() == &Token::LParen {
        Some(parse_pivot(parser)?)
    } else {
        None
    };

    Ok(FromClause {
        relations,
        lateral_views,
        pivot,
    })
}

pub fn parse_relation(parser: &mut Parser) -> Result<Relation> {
    let primary = parse_table_factor(parser)?;
    let mut joins = Vec::new();
    while let Some(join) = parse_join(parser)? {
        joins.push(join);
    }
    Ok(Relation { primary, joins })
}

fn parse_join(parser: &mut Parser) -> Result<Option<JoinClause>> {
    let start = parser.position();
    let natural = parser.consume_keyword("NATURAL");

    let join_type = if parser.consume_keywords(&["INNER", "JOIN"]) {
        JoinType::Inner { explicit: true }
    } else if parser.consume_keywords(&["CROSS", "JOIN"]) {
        JoinType::Cross
    } else if parser.consume_keywords(&["LEFT", "OUTER", "JOIN"]) {
        JoinType::Left { outer: true }
    } else if parser.consume_keywords(&["LEFT", "SEMI", "JOIN"]) {
        JoinType::Semi { left: true }
    } else if parser.consume_keywords(&["LEFT", "ANTI", "JOIN"]) {
        JoinType::Anti { left: true }
    } else if parser.consume_keywords(&["LEFT", "JOIN"]) {
        JoinType::Left { outer: false }
    } else if parser.consume_keywords(&["RIGHT", "OUTER", "JOIN"]) {
        JoinType::Right { outer: true }
    } else if parser.consume_keywords(&["RIGHT", "JOIN"]) {
        JoinType::Right { outer: false }
    } else if parser.consume_keywords(&["FULL", "OUTER", "JOIN"]) {
        JoinType::Full { outer: true }
    } else if parser.consume_keywords(&["FULL", "JOIN"]) {
        JoinType::Full { outer: false }
    } else if parser.consume_keywords(&["SEMI", "JOIN"]) {
        JoinType::Semi { left: false }
    } else if parser.consume_keywords(&["ANTI", "JOIN"]) {
        JoinType::Anti { left: false }
    } else if parser.consume_keyword("JOIN") {
        JoinType::Inner { explicit: false }
    } else {
        if natural {
            return Err(parser.expected("JOIN"));
        }
        parser.restore(start);
        return Ok(None);
    };

    let relation = parse_table_factor(parser)?;
    let constraint = if parser.consume_keyword("ON") {
        Some(JoinConstraint::On(parse_expression(parser)?))
    } else if parser.consume_keyword("USING") {
        Some(JoinConstraint::Using(parse_parenthesized_identifiers(parser)?))
    } else {
        None
    };

    Ok(Some(JoinClause {
        natural,
        join_type,
        relation,
        constraint,
    }))
}

/// Parse a table, derived table, inline table, table function or nested join
pub fn parse_table_factor(parser: &mut Parser) -> Result<TableFactor> {
    if parser.check(&Token::LParen) {
        parser.advance();
        if is_query_start(parser) {
            let query = parse_query(parser)?;
            parser.expect(&Token::RParen)?;
            let sample = parse_table_sample(parser)?;
            let alias = parse_table_alias(parser)?;
            return Ok(TableFactor::Derived {
                query: Box::new(query),
                sample,
                alias,
            });
        }
        let relation = parse_relation(parser)?;
        parser.expect(&Token::RParen)?;
        let alias = parse_table_alias(parser)?;
        return Ok(TableFactor::Nested {
            relation: Box::new(relation),
            alias,
        });
    }

    if parser.check_keyword("VALUES") {
        let values = parse_values_clause(parser)?;
        let alias = parse_table_alias(parser)?;
        return Ok(TableFactor::Values { values, alias });
    }

    let name = parse_object_name(parser)?;
    if parser.consume(&Token::LParen) {
        let args = if parser.check(&Token::RParen) {
            Vec::new()
        } else {
            parse_function_args(parser)?
        };
        parser.expect(&Token::RParen)?;
        let alias = parse_table_alias(parser)?;
        return Ok(TableFactor::Function { name, args, alias });
    }

    let sample = parse_table_sample(parser)?;
    let alias = parse_table_alias(parser)?;
    Ok(TableFactor::Table {
        name,
        sample,
        alias,
    })
}

/// Parse `[AS] alias [(col, ...)]`
pub fn parse_table_alias(parser: &mut Parser) -> Result<Option<TableAlias>> {
    let explicit_as = parser.consume_keyword("AS");
    if !explicit_as && !can_be_implicit_alias(parser) {
        return Ok(None);
    }
    let name = parse_identifier(parser)?;
    let columns = if parser.check(&Token::LParen) {
        parse_parenthesized_identifiers(parser)?
    } else {
        Vec::new()
    };
    Ok(Some(TableAlias {
        explicit_as,
        name,
        columns,
    }))
}

fn parse_table_sample(parser: &mut Parser) -> Result<Option<TableSample>> {
    if !parser.consume_keyword("TABLESAMPLE") {
        return Ok(None);
    }
    parser.expect(&Token::LParen)?;
    let sample = if parser.consume_keyword("BUCKET") {
        let numerator = parse_number(parser)?;
        parser.expect_keywords(&["OUT", "OF"])?;
        let denominator = parse_number(parser)?;
        let on = if parser.consume_keyword("ON") {
            Some(Box::new(parse_expression(parser)?))
        } else {
            None
        };
        TableSample::Bucket {
            numerator,
            denominator,
            on,
        }
    } else {
        let amount = parse_expression(parser)?;
        if parser.consume_keyword("PERCENT") {
            TableSample::Percent(Box::new(amount))
        } else if parser.consume_keyword("ROWS") {
            TableSample::Rows(Box::new(amount))
        } else {
            return Err(parser.expected("PERCENT or ROWS"));
        }
    };
    parser.expect(&Token::RParen)?;
    Ok(Some(sample))
}

fn parse_lateral_view(parser: &mut Parser) -> Result<LateralView> {
    parser.expect_keywords(&["LATERAL", "VIEW"])?;
    let outer = parser.consume_keyword("OUTER");
    let function = parse_object_name(parser)?;
    parser.expect(&Token::LParen)?;
    let args = if parser.check(&Token::RParen) {
        Vec::new()
    } else {
        parse_comma_separated_exprs(parser)?
    };
    parser.expect(&Token::RParen)?;

    let table_alias = if !parser.check_keyword("AS") && can_be_implicit_alias(parser) {
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let explicit_as = parser.consume_keyword("AS");
    let mut columns = Vec::new();
    if explicit_as || can_be_implicit_alias(parser) {
        columns.push(parse_identifier(parser)?);
        while parser.consume(&Token::Comma) {
            columns.push(parse_identifier(parser)?);
        }
    }

    Ok(LateralView {
        outer,
        function,
        args,
        table_alias,
        explicit_as,
        columns,
    })
}

fn parse_pivot(parser: &mut Parser) -> Result<PivotClause> {
    parser.expect_keyword("PIVOT")?;
    parser.expect(&Token::LParen)?;
    let aggregates = parse_select_items(parser)?;
    parser.expect_keyword("FOR")?;
    let columns = if parser.consume(&Token::LParen) {
        let mut columns = vec![parse_object_name(parser)?];
        while parser.consume(&Token::Comma) {
            columns.push(parse_object_name(parser)?);
        }
        parser.expect(&Token::RParen)?;
        columns
    } else {
        vec![parse_object_name(parser)?]
    };
    parser.expect_keyword("IN")?;
    parser.expect(&Token::LParen)?;
    let values = parse_select_items(parser)?;
    parser.expect(&Token::RParen)?;
    parser.expect(&Token::RParen)?;
    Ok(PivotClause {
        aggregates,
        columns,
        values,
    })
}

/// Parse `VALUES row, row, ...`
pub fn parse_values_clause(parser: &mut Parser) -> Result<ValuesClause> {
    parser.expect_keyword("VALUES")?;
    let rows = parse_comma_separated_exprs(parser)?;
    Ok(ValuesClause { rows })
}

// =============================================================================
// GROUP BY and query organization
// =============================================================================

fn parse_group_by(parser: &mut Parser) -> Result<GroupByClause> {
    let mut items = vec![parse_grouping_item(parser)?];
    while parser.consume(&Token::Comma) {
        items.push(parse_grouping_item(parser)?);
    }
    let modifier = if parser.consume_keywords(&["WITH", "ROLLUP"]) {
        Some(GroupingKind::Rollup)
    } else if parser.consume_keywords(&["WITH", "CUBE"]) {
        Some(GroupingKind::Cube)
    } else {
        None
    };
    Ok(GroupByClause { items, modifier })
}

fn parse_grouping_item(parser: &mut Parser) -> Result<GroupingItem> {
    let kind = if parser.check_keywords(&["GROUPING", "SETS"]) {
        parser.advance();
        Some(GroupingKind::GroupingSets)
    } else if parser.check_keyword("ROLLUP") && parser.peek() == &Token::LParen {
        Some(GroupingKind::Rollup)
    } else if parser.check_keyword("CUBE") && parser.peek() == &Token::LParen {
        Some(GroupingKind::Cube)
    } else {
        None
    };

    let Some(kind) = kind else {
        return parse_expression(parser).map(GroupingItem::Expr);
    };
    parser.advance();
    parser.expect(&Token::LParen)?;
    let mut elements = vec![parse_grouping_element(parser)?];
    while parser.consume(&Token::Comma) {
        elements.push(parse_grouping_element(parser)?);
    }
    parser.expect(&Token::RParen)?;
    Ok(GroupingItem::Analytics { kind, elements })
}

fn parse_grouping_element(parser: &mut Parser) -> Result<GroupingElement> {
    if parser.check(&Token::LParen) && !is_query_start(parser) {
        let start = parser.position();
        parser.advance();
        if parser.consume(&Token::RParen) {
            return Ok(GroupingElement::Set(Vec::new()));
        }
        let exprs = parse_comma_separated_exprs(parser)?;
        if parser.consume(&Token::RParen)
            && (parser.check(&Token::Comma) || parser.check(&Token::RParen))
        {
            return Ok(GroupingElement::Set(exprs));
        }
        // `(a + b) * 2` is an ordinary expression
        parser.restore(start);
    }
    parse_expression(parser).map(GroupingElement::Expr)
}

/// Parse ORDER BY, CLUSTER BY, DISTRIBUTE BY, SORT BY, LIMIT and OFFSET
pub fn parse_organization(parser: &mut Parser) -> Result<QueryOrganization> {
    let mut org = QueryOrganization::default();
    if parser.consume_keywords(&["ORDER", "BY"]) {
        org.order_by = parse_order_by_items(parser)?;
    }
    if parser.consume_keywords(&["CLUSTER", "BY"]) {
        org.cluster_by = parse_comma_separated_exprs(parser)?;
    }
    if parser.consume_keywords(&["DISTRIBUTE", "BY"]) {
        org.distribute_by = parse_comma_separated_exprs(parser)?;
    }
    if parser.consume_keywords(&["SORT", "BY"]) {
        org.sort_by = parse_order_by_items(parser)?;
    }
    if parser.consume_keyword("LIMIT") {
        org.limit = Some(if parser.consume_keyword("ALL") {
            Limit::All
        } else {
            Limit::Count(parse_expression(parser)?)
        });
    }
    if parser.consume_keyword("OFFSET") {
        org.offset = Some(parse_expression(parser)?);
    }
    Ok(org)
}
