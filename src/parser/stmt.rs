//! Statement parsing
//!
//! Dispatches on the leading keyword and parses DML and utility commands.
//! DDL lives in [`crate::parser::ddl`].

use crate::ast::*;
use crate::error::Error;
use crate::parser::ddl;
use crate::parser::expr::{
    parse_comma_separated_exprs, parse_expression, parse_function_args, parse_identifier,
    parse_object_name, parse_parenthesized_identifiers, parse_string_literal, Parser,
};
use crate::parser::lexer::Token;
use crate::parser::query::{
    is_query_start, parse_from_clause, parse_organization, parse_query, parse_query_after_with,
    parse_select_body, parse_table_alias, parse_table_factor, parse_with_clause,
};
use crate::Result;

/// Leading keywords of valid Spark statements that have no syntax tree here
const UNSUPPORTED_STATEMENTS: &[&str] = &[
    "CACHE", "UNCACHE", "REFRESH", "CLEAR", "ADD", "LIST", "GRANT", "REVOKE",
];

/// Parse a SQL statement from tokens
pub fn parse_statement(parser: &mut Parser) -> Result<Statement> {
    if parser.check(&Token::LParen) {
        return parse_query(parser).map(|q| Statement::Query(Box::new(q)));
    }

    let Some(word) = parser.current_word() else {
        return Err(parser.expected("statement"));
    };

    match word.as_str() {
        "SELECT" | "VALUES" | "TABLE" => parse_query(parser).map(|q| Statement::Query(Box::new(q))),
        "WITH" => parse_with_statement(parser),
        "FROM" => parse_from_statement(parser, None),
        "INSERT" => {
            let target = parse_insert_target(parser)?;
            let source = parse_query(parser)?;
            Ok(Statement::Insert(InsertStatement {
                with: None,
                target,
                source: Box::new(source),
            }))
        }
        "UPDATE" => parse_update(parser).map(Statement::Update),
        "DELETE" => parse_delete(parser).map(Statement::Delete),
        "MERGE" if parser.peek_keyword(1, "TABLE") => {
            parse_merge_file(parser).map(Statement::MergeFile)
        }
        "MERGE" => parse_merge(parser).map(Statement::Merge),
        "CREATE" | "REPLACE" => ddl::parse_create(parser),
        "ALTER" => ddl::parse_alter(parser),
        "DROP" => ddl::parse_drop(parser),
        "TRUNCATE" => ddl::parse_truncate(parser).map(Statement::Truncate),
        "MSCK" | "REPAIR" => ddl::parse_repair(parser).map(Statement::RepairTable),
        "ANALYZE" => ddl::parse_analyze(parser),
        "COMMENT" => ddl::parse_comment_on(parser).map(Statement::CommentOn),
        "USE" => parse_use(parser).map(Statement::Use),
        "SET" => parse_set(parser),
        "RESET" => {
            parser.advance();
            let (key, _) = parse_raw_setting(parser);
            Ok(Statement::Reset(key))
        }
        "SHOW" => parse_show(parser).map(Statement::Show),
        "DESCRIBE" | "DESC" => parse_describe(parser).map(Statement::Describe),
        "EXPLAIN" => parse_explain(parser).map(Statement::Explain),
        "CALL" => parse_call(parser).map(Statement::Call),
        "LOAD" => parse_load(parser),
        "EXPORT" => parse_export(parser, None).map(Statement::ExportTable),
        "DATATUNNEL" => parse_datatunnel(parser).map(Statement::DataTunnel),
        w if UNSUPPORTED_STATEMENTS.contains(&w) => Err(Error::Unsupported {
            construct: format!("{} statement", w),
        }),
        _ => Err(parser.expected("statement")),
    }
}

/// `WITH ...` followed by a query, an INSERT or a multi-insert
fn parse_with_statement(parser: &mut Parser) -> Result<Statement> {
    let with = parse_with_clause(parser)?;
    if parser.check_keyword("INSERT") {
        let target = parse_insert_target(parser)?;
        let source = parse_query(parser)?;
        return Ok(Statement::Insert(InsertStatement {
            with: Some(with),
            target,
            source: Box::new(source),
        }));
    }
    if parser.check_keyword("FROM") {
        return parse_from_statement(parser, Some(with));
    }
    if parser.check_keyword("EXPORT") {
        return parse_export(parser, Some(with)).map(Statement::ExportTable);
    }
    parse_query_after_with(parser, Some(with)).map(|q| Statement::Query(Box::new(q)))
}

/// `FROM src SELECT ...` or `FROM src INSERT ... SELECT ... [INSERT ...]`
fn parse_from_statement(parser: &mut Parser, with: Option<WithClause>) -> Result<Statement> {
    let start = parser.position();
    let from = parse_from_clause(parser)?;
    if !parser.check_keyword("INSERT") {
        parser.restore(start);
        return parse_query_after_with(parser, with).map(|q| Statement::Query(Box::new(q)));
    }

    let mut inserts = Vec::new();
    while parser.check_keyword("INSERT") {
        let target = parse_insert_target(parser)?;
        let select = parse_select_body(parser, false)?;
        let organization = parse_organization(parser)?;
        inserts.push(MultiInsertBody {
            target,
            select,
            organization,
        });
    }
    Ok(Statement::MultiInsert(MultiInsertStatement {
        with,
        from,
        inserts,
    }))
}

// =============================================================================
// DML
// =============================================================================

/// Parse `PARTITION (k = v, k2)`
pub fn parse_partition_spec(parser: &mut Parser) -> Result<PartitionSpec> {
    parser.expect_keyword("PARTITION")?;
    parser.expect(&Token::LParen)?;
    let mut values = Vec::new();
    loop {
        let name = parse_identifier(parser)?;
        let value = if parser.consume(&Token::Eq) {
            Some(parse_expression(parser)?)
        } else {
            None
        };
        values.push(PartitionValue { name, value });
        if !parser.consume(&Token::Comma) {
            break;
        }
    }
    parser.expect(&Token::RParen)?;
    Ok(PartitionSpec(values))
}

pub fn parse_optional_partition_spec(parser: &mut Parser) -> Result<Option<PartitionSpec>> {
    if parser.check_keyword("PARTITION") && parser.peek() == &Token::LParen {
        parse_partition_spec(parser).map(Some)
    } else {
        Ok(None)
    }
}

fn parse_insert_target(parser: &mut Parser) -> Result<InsertTarget> {
    parser.expect_keyword("INSERT")?;
    let overwrite = if parser.consume_keyword("OVERWRITE") {
        true
    } else {
        parser.expect_keyword("INTO")?;
        false
    };
    let table_keyword = parser.consume_keyword("TABLE");
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    let if_not_exists = parser.consume_keywords(&["IF", "NOT", "EXISTS"]);
    let columns = if parser.check(&Token::LParen) && !is_query_start(parser) {
        parse_parenthesized_identifiers(parser)?
    } else {
        Vec::new()
    };
    Ok(InsertTarget {
        overwrite,
        table_keyword,
        table,
        partition,
        if_not_exists,
        columns,
    })
}

fn parse_assignments(parser: &mut Parser) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::new();
    loop {
        let target = parse_object_name(parser)?;
        parser.expect(&Token::Eq)?;
        let value = parse_expression(parser)?;
        assignments.push(Assignment { target, value });
        if !parser.consume(&Token::Comma) {
            return Ok(assignments);
        }
    }
}

fn parse_optional_where(parser: &mut Parser) -> Result<Option<Expr>> {
    if parser.consume_keyword("WHERE") {
        parse_expression(parser).map(Some)
    } else {
        Ok(None)
    }
}

fn parse_update(parser: &mut Parser) -> Result<UpdateStatement> {
    parser.expect_keyword("UPDATE")?;
    let table = parse_object_name(parser)?;
    let alias = parse_table_alias(parser)?;
    parser.expect_keyword("SET")?;
    let assignments = parse_assignments(parser)?;
    let where_clause = parse_optional_where(parser)?;
    Ok(UpdateStatement {
        table,
        alias,
        assignments,
        where_clause,
    })
}

fn parse_delete(parser: &mut Parser) -> Result<DeleteStatement> {
    parser.expect_keywords(&["DELETE", "FROM"])?;
    let table = parse_object_name(parser)?;
    let alias = parse_table_alias(parser)?;
    let where_clause = parse_optional_where(parser)?;
    Ok(DeleteStatement {
        table,
        alias,
        where_clause,
    })
}

fn parse_merge(parser: &mut Parser) -> Result<MergeStatement> {
    parser.expect_keywords(&["MERGE", "INTO"])?;
    let target = parse_object_name(parser)?;
    let target_alias = parse_table_alias(parser)?;
    parser.expect_keyword("USING")?;
    let source = parse_table_factor(parser)?;
    parser.expect_keyword("ON")?;
    let condition = parse_expression(parser)?;

    let mut clauses = Vec::new();
    while parser.check_keyword("WHEN") {
        clauses.push(parse_merge_clause(parser)?);
    }
    if clauses.is_empty() {
        return Err(parser.expected("WHEN"));
    }

    Ok(MergeStatement {
        target,
        target_alias,
        source,
        condition,
        clauses,
    })
}

fn parse_merge_clause(parser: &mut Parser) -> Result<MergeClause> {
    parser.expect_keyword("WHEN")?;
    let kind = if parser.consume_keyword("MATCHED") {
        MergeClauseKind::Matched
    } else {
        parser.expect_keywords(&["NOT", "MATCHED"])?;
        if parser.consume_keywords(&["BY", "SOURCE"]) {
            MergeClauseKind::NotMatchedBySource
        } else {
            MergeClauseKind::NotMatched {
                by_target: parser.consume_keywords(&["BY", "TARGET"]),
            }
        }
    };

    let condition = if parser.consume_keyword("AND") {
        Some(parse_expression(parser)?)
    } else {
        None
    };
    parser.expect_keyword("THEN")?;

    let action = if parser.consume_keyword("DELETE") {
        MergeAction::Delete
    } else if parser.consume_keywords(&["UPDATE", "SET"]) {
        if parser.consume(&Token::Star) {
            MergeAction::UpdateAll
        } else {
            MergeAction::Update(parse_assignments(parser)?)
        }
    } else if parser.consume_keyword("INSERT") {
        if parser.consume(&Token::Star) {
            MergeAction::InsertAll
        } else {
            let columns = parse_parenthesized_identifiers(parser)?;
            parser.expect_keyword("VALUES")?;
            parser.expect(&Token::LParen)?;
            let values = parse_comma_separated_exprs(parser)?;
            parser.expect(&Token::RParen)?;
            MergeAction::Insert { columns, values }
        }
    } else {
        return Err(parser.expected("UPDATE, DELETE or INSERT"));
    };

    Ok(MergeClause {
        kind,
        condition,
        action,
    })
}

// =============================================================================
// Commands
// =============================================================================

pub fn parse_namespace_keyword(parser: &mut Parser) -> Option<NamespaceKeyword> {
    let keyword = match parser.current_word().as_deref() {
        Some("DATABASE") => NamespaceKeyword::Database,
        Some("SCHEMA") => NamespaceKeyword::Schema,
        Some("NAMESPACE") => NamespaceKeyword::Namespace,
        _ => return None,
    };
    parser.advance();
    Some(keyword)
}

fn parse_use(parser: &mut Parser) -> Result<UseStatement> {
    parser.expect_keyword("USE")?;
    let keyword = if matches!(parser.peek(), Token::Word(_) | Token::QuotedIdentifier(_)) {
        parse_namespace_keyword(parser)
    } else {
        None
    };
    let name = parse_object_name(parser)?;
    Ok(UseStatement { keyword, name })
}

fn parse_set(parser: &mut Parser) -> Result<Statement> {
    parser.expect_keyword("SET")?;
    if parser.check_keyword("CATALOG") && !matches!(parser.peek(), Token::Eq | Token::Eof) {
        parser.advance();
        let start = parser.offset();
        while !parser.is_eof() && !parser.check(&Token::Semicolon) {
            parser.advance();
        }
        let name = parser.slice(start, parser.previous_end()).to_string();
        return Ok(Statement::SetCatalog(name));
    }
    let (key, value) = parse_raw_setting(parser);
    Ok(Statement::SetConfig(SetConfigStatement { key, value }))
}

/// Source text of `key [= value]` up to the end of the statement
fn parse_raw_setting(parser: &mut Parser) -> (Option<String>, Option<String>) {
    let start = parser.offset();
    let mut key_end = None;
    let mut value_start = None;
    let mut end = start;
    while !parser.is_eof() && !parser.check(&Token::Semicolon) {
        if value_start.is_none() && parser.check(&Token::Eq) {
            key_end = Some(parser.offset());
            parser.advance();
            value_start = Some(parser.offset());
            continue;
        }
        parser.advance();
        end = parser.previous_end();
    }

    let text = |from: usize, to: usize| {
        let s = parser.slice(from, to.max(from)).trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    match (key_end, value_start) {
        (Some(key_end), Some(value_start)) => (text(start, key_end), text(value_start, end)),
        _ => (text(start, end), None),
    }
}

fn parse_scope(parser: &mut Parser) -> Result<Option<Scope>> {
    let keyword = if parser.consume_keyword("FROM") {
        ScopeKeyword::From
    } else if parser.consume_keyword("IN") {
        ScopeKeyword::In
    } else {
        return Ok(None);
    };
    let name = parse_object_name(parser)?;
    Ok(Some(Scope { keyword, name }))
}

fn parse_show_pattern(parser: &mut Parser) -> Result<Option<ShowPattern>> {
    let like = parser.consume_keyword("LIKE");
    if like || matches!(parser.current(), Token::StringLiteral(_)) {
        let pattern = parse_string_literal(parser)?;
        return Ok(Some(ShowPattern { like, pattern }));
    }
    Ok(None)
}

fn parse_show(parser: &mut Parser) -> Result<ShowStatement> {
    parser.expect_keyword("SHOW")?;
    let Some(word) = parser.current_word() else {
        return Err(parser.expected("SHOW target"));
    };

    let namespace_keyword = match word.as_str() {
        "DATABASES" => Some(NamespaceKeyword::Database),
        "SCHEMAS" => Some(NamespaceKeyword::Schema),
        "NAMESPACES" => Some(NamespaceKeyword::Namespace),
        _ => None,
    };
    if let Some(keyword) = namespace_keyword {
        parser.advance();
        let scope = parse_scope(parser)?;
        let pattern = parse_show_pattern(parser)?;
        return Ok(ShowStatement::Namespaces {
            keyword,
            scope,
            pattern,
        });
    }

    match word.as_str() {
        "TABLES" => {
            parser.advance();
            let scope = parse_scope(parser)?;
            let pattern = parse_show_pattern(parser)?;
            Ok(ShowStatement::Tables { scope, pattern })
        }
        "TABLE" => {
            parser.advance();
            parser.expect_keyword("EXTENDED")?;
            let scope = parse_scope(parser)?;
            parser.expect_keyword("LIKE")?;
            let pattern = parse_string_literal(parser)?;
            let partition = parse_optional_partition_spec(parser)?;
            Ok(ShowStatement::TableExtended {
                scope,
                pattern,
                partition,
            })
        }
        "VIEWS" => {
            parser.advance();
            let scope = parse_scope(parser)?;
            let pattern = parse_show_pattern(parser)?;
            Ok(ShowStatement::Views { scope, pattern })
        }
        "COLUMNS" => {
            parser.advance();
            let table = parse_scope(parser)?.ok_or_else(|| parser.expected("FROM or IN"))?;
            let namespace = parse_scope(parser)?;
            Ok(ShowStatement::Columns { table, namespace })
        }
        "PARTITIONS" => {
            parser.advance();
            let table = parse_object_name(parser)?;
            let partition = parse_optional_partition_spec(parser)?;
            Ok(ShowStatement::Partitions { table, partition })
        }
        "TBLPROPERTIES" => {
            parser.advance();
            let table = parse_object_name(parser)?;
            let key = if parser.consume(&Token::LParen) {
                let key = ddl::parse_property_key(parser)?;
                parser.expect(&Token::RParen)?;
                Some(key)
            } else {
                None
            };
            Ok(ShowStatement::TblProperties { table, key })
        }
        "USER" | "SYSTEM" | "ALL" | "FUNCTIONS" => {
            let kind = match word.as_str() {
                "USER" => Some(FunctionKind::User),
                "SYSTEM" => Some(FunctionKind::System),
                "ALL" => Some(FunctionKind::All),
                _ => None,
            };
            if kind.is_some() {
                parser.advance();
            }
            parser.expect_keyword("FUNCTIONS")?;
            let scope = parse_scope(parser)?;
            let pattern = parse_show_pattern(parser)?;
            Ok(ShowStatement::Functions {
                kind,
                scope,
                pattern,
            })
        }
        "CREATE" => {
            parser.advance();
            parser.expect_keyword("TABLE")?;
            let table = parse_object_name(parser)?;
            let as_serde = parser.consume_keywords(&["AS", "SERDE"]);
            Ok(ShowStatement::CreateTable { table, as_serde })
        }
        "CATALOGS" => {
            parser.advance();
            let pattern = parse_show_pattern(parser)?;
            Ok(ShowStatement::Catalogs { pattern })
        }
        "CURRENT" => {
            parser.advance();
            parser.expect_keyword("NAMESPACE")?;
            Ok(ShowStatement::CurrentNamespace)
        }
        _ => Err(parser.expected("SHOW target")),
    }
}

fn parse_describe(parser: &mut Parser) -> Result<DescribeStatement> {
    let short = parser.check_keyword("DESC");
    parser.advance();

    if parser.check_keyword("QUERY") || (is_query_start(parser) && !parser.check_keyword("TABLE")) {
        let query_keyword = parser.consume_keyword("QUERY");
        let query = parse_query(parser)?;
        return Ok(DescribeStatement {
            short,
            target: DescribeTarget::Query {
                query_keyword,
                query: Box::new(query),
            },
        });
    }

    if parser.consume_keyword("FUNCTION") {
        let extended = parser.consume_keyword("EXTENDED");
        let name = parse_object_name(parser)?;
        return Ok(DescribeStatement {
            short,
            target: DescribeTarget::Function { extended, name },
        });
    }

    if matches!(parser.peek(), Token::Word(_) | Token::QuotedIdentifier(_)) {
        if let Some(keyword) = parse_namespace_keyword(parser) {
            let extended = parser.consume_keyword("EXTENDED");
            let name = parse_object_name(parser)?;
            return Ok(DescribeStatement {
                short,
                target: DescribeTarget::Namespace {
                    keyword,
                    extended,
                    name,
                },
            });
        }
    }

    let table_keyword = parser.consume_keyword("TABLE");
    let detail = if parser.consume_keyword("EXTENDED") {
        Some(DescribeDetail::Extended)
    } else if parser.consume_keyword("FORMATTED") {
        Some(DescribeDetail::Formatted)
    } else {
        None
    };
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    let column = if matches!(parser.current(), Token::Word(_) | Token::QuotedIdentifier(_)) {
        Some(parse_object_name(parser)?)
    } else {
        None
    };
    Ok(DescribeStatement {
        short,
        target: DescribeTarget::Table {
            table_keyword,
            detail,
            table,
            partition,
            column,
        },
    })
}

fn parse_explain(parser: &mut Parser) -> Result<ExplainStatement> {
    parser.expect_keyword("EXPLAIN")?;
    let mode = match parser.current_word().as_deref() {
        Some("LOGICAL") => Some(ExplainMode::Logical),
        Some("FORMATTED") => Some(ExplainMode::Formatted),
        Some("EXTENDED") => Some(ExplainMode::Extended),
        Some("CODEGEN") => Some(ExplainMode::Codegen),
        Some("COST") => Some(ExplainMode::Cost),
        _ => None,
    };
    if mode.is_some() {
        parser.advance();
    }
    let statement = parse_statement(parser)?;
    Ok(ExplainStatement {
        mode,
        statement: Box::new(statement),
    })
}

fn parse_call(parser: &mut Parser) -> Result<CallStatement> {
    parser.expect_keyword("CALL")?;
    let procedure = parse_object_name(parser)?;
    parser.expect(&Token::LParen)?;
    let args = if parser.check(&Token::RParen) {
        Vec::new()
    } else {
        parse_function_args(parser)?
    };
    parser.expect(&Token::RParen)?;
    Ok(CallStatement { procedure, args })
}

/// `LOAD DATA [LOCAL] INPATH ..` or the file form `LOAD DATA 'path' [TABLE] t`
fn parse_load(parser: &mut Parser) -> Result<Statement> {
    parser.expect_keywords(&["LOAD", "DATA"])?;
    if !matches!(parser.current(), Token::StringLiteral(_)) {
        return parse_load_data(parser).map(Statement::LoadData);
    }
    let path = parse_string_literal(parser)?;
    let table_keyword = parser.consume_keyword("TABLE");
    let table = parse_object_name(parser)?;
    let options = parse_optional_options(parser)?;
    Ok(Statement::LoadFile(LoadFileStatement {
        path,
        table_keyword,
        table,
        options,
    }))
}

fn parse_load_data(parser: &mut Parser) -> Result<LoadDataStatement> {
    let local = parser.consume_keyword("LOCAL");
    parser.expect_keyword("INPATH")?;
    let path = parse_string_literal(parser)?;
    let overwrite = parser.consume_keyword("OVERWRITE");
    parser.expect_keywords(&["INTO", "TABLE"])?;
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    Ok(LoadDataStatement {
        local,
        path,
        overwrite,
        table,
        partition,
    })
}

fn parse_optional_options(parser: &mut Parser) -> Result<Vec<Property>> {
    if parser.consume_keyword("OPTIONS") {
        ddl::parse_properties(parser)
    } else {
        Ok(Vec::new())
    }
}

fn parse_export(parser: &mut Parser, with: Option<WithClause>) -> Result<ExportTableStatement> {
    parser.expect_keywords(&["EXPORT", "TABLE"])?;
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    parser.expect_keyword("TO")?;
    let path = parse_string_literal(parser)?;
    let options = parse_optional_options(parser)?;
    Ok(ExportTableStatement {
        with,
        table,
        partition,
        path,
        options,
    })
}

fn parse_merge_file(parser: &mut Parser) -> Result<MergeFileStatement> {
    parser.expect_keywords(&["MERGE", "TABLE"])?;
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    let options = parse_optional_options(parser)?;
    Ok(MergeFileStatement {
        table,
        partition,
        options,
    })
}

fn parse_datatunnel(parser: &mut Parser) -> Result<DataTunnelStatement> {
    parser.expect_keyword("DATATUNNEL")?;
    let source = parse_tunnel_endpoint(parser, "SOURCE")?;
    let source_options = parse_tunnel_options(parser)?;
    let transform = if parser.consume_keyword("TRANSFORM") {
        parser.expect(&Token::Eq)?;
        Some(parse_string_literal(parser)?)
    } else {
        None
    };
    let sink = parse_tunnel_endpoint(parser, "SINK")?;
    let sink_options = parse_tunnel_options(parser)?;
    Ok(DataTunnelStatement {
        source,
        source_options,
        transform,
        sink,
        sink_options,
    })
}

/// `SOURCE('kind')` / `SINK('kind')`
fn parse_tunnel_endpoint(parser: &mut Parser, keyword: &str) -> Result<String> {
    parser.expect_keyword(keyword)?;
    parser.expect(&Token::LParen)?;
    let kind = parse_string_literal(parser)?;
    parser.expect(&Token::RParen)?;
    Ok(kind)
}

fn parse_tunnel_options(parser: &mut Parser) -> Result<Vec<TunnelProperty>> {
    parser.expect_keyword("OPTIONS")?;
    parser.expect(&Token::LParen)?;
    let mut properties = Vec::new();
    if parser.consume(&Token::RParen) {
        return Ok(properties);
    }
    loop {
        let key = ddl::parse_property_key(parser)?;
        parser.expect(&Token::Eq)?;
        let value = parse_tunnel_value(parser)?;
        properties.push(TunnelProperty { key, value });
        if !parser.consume(&Token::Comma) {
            break;
        }
    }
    parser.expect(&Token::RParen)?;
    Ok(properties)
}

/// A string, number, word or `[v, ...]` list
fn parse_tunnel_value(parser: &mut Parser) -> Result<TunnelValue> {
    if parser.consume(&Token::LBracket) {
        let mut items = Vec::new();
        if !parser.check(&Token::RBracket) {
            loop {
                items.push(parse_tunnel_value(parser)?);
                if !parser.consume(&Token::Comma) {
                    break;
                }
            }
        }
        parser.expect(&Token::RBracket)?;
        return Ok(TunnelValue::List(items));
    }
    let negative = parser.consume(&Token::Minus);
    let text = match parser.current().clone() {
        Token::StringLiteral(s) | Token::Number(s) | Token::Word(s) => s,
        _ => return Err(parser.expected("option value")),
    };
    parser.advance();
    Ok(TunnelValue::Scalar(if negative {
        format!("-{}", text)
    } else {
        text
    }))
}
