//! DDL parsing: CREATE, ALTER, DROP and table maintenance statements

use crate::ast::*;
use crate::parser::expr::{
    parse_data_type, parse_expression, parse_identifier, parse_number, parse_object_name,
    parse_order_by_items, parse_parenthesized_identifiers, parse_string_literal, Parser,
};
use crate::parser::lexer::Token;
use crate::parser::query::{is_query_start, parse_query};
use crate::parser::stmt::{
    parse_namespace_keyword, parse_optional_partition_spec, parse_partition_spec,
};
use crate::Result;

// =============================================================================
// Shared pieces
// =============================================================================

fn parse_if_not_exists(parser: &mut Parser) -> bool {
    parser.consume_keywords(&["IF", "NOT", "EXISTS"])
}

fn parse_if_exists(parser: &mut Parser) -> bool {
    parser.consume_keywords(&["IF", "EXISTS"])
}

/// Quoted string or dotted identifier, as written
pub fn parse_property_key(parser: &mut Parser) -> Result<String> {
    if let Token::StringLiteral(s) = parser.current().clone() {
        parser.advance();
        return Ok(s);
    }
    parse_object_name(parser).map(|name| name.to_string())
}

/// Parse `(key = value, ...)`
pub fn parse_properties(parser: &mut Parser) -> Result<Vec<Property>> {
    parser.expect(&Token::LParen)?;
    let mut properties = Vec::new();
    if parser.consume(&Token::RParen) {
        return Ok(properties);
    }
    loop {
        let key = parse_property_key(parser)?;
        let value = if parser.consume(&Token::Eq)
            || !matches!(parser.current(), Token::Comma | Token::RParen)
        {
            Some(parse_expression(parser)?)
        } else {
            None
        };
        properties.push(Property { key, value });
        if !parser.consume(&Token::Comma) {
            break;
        }
    }
    parser.expect(&Token::RParen)?;
    Ok(properties)
}

/// Parse `(key, ...)`, as used by UNSET TBLPROPERTIES
fn parse_property_keys(parser: &mut Parser) -> Result<Vec<Property>> {
    parser.expect(&Token::LParen)?;
    let mut keys = vec![Property {
        key: parse_property_key(parser)?,
        value: None,
    }];
    while parser.consume(&Token::Comma) {
        keys.push(Property {
            key: parse_property_key(parser)?,
            value: None,
        });
    }
    parser.expect(&Token::RParen)?;
    Ok(keys)
}

fn parse_optional_comment(parser: &mut Parser) -> Result<Option<String>> {
    if parser.consume_keyword("COMMENT") {
        parse_string_literal(parser).map(Some)
    } else {
        Ok(None)
    }
}

/// `name type [NOT NULL] [DEFAULT expr] [COMMENT '..'] [FIRST | AFTER col]`
fn parse_column_definition(parser: &mut Parser) -> Result<ColumnDefinition> {
    let name = parse_object_name(parser)?;
    let data_type = parse_data_type(parser)?;
    let not_null = parser.consume_keywords(&["NOT", "NULL"]);
    let default = if parser.consume_keyword("DEFAULT") {
        Some(parse_expression(parser)?)
    } else {
        None
    };
    let comment = parse_optional_comment(parser)?;
    let position = parse_column_position(parser)?;
    Ok(ColumnDefinition {
        name,
        data_type,
        not_null,
        default,
        comment,
        position,
    })
}

fn parse_column_position(parser: &mut Parser) -> Result<Option<ColumnPosition>> {
    if parser.consume_keyword("FIRST") {
        Ok(Some(ColumnPosition::First))
    } else if parser.consume_keyword("AFTER") {
        parse_object_name(parser).map(|c| Some(ColumnPosition::After(c)))
    } else {
        Ok(None)
    }
}

fn parse_column_definitions(parser: &mut Parser) -> Result<Vec<ColumnDefinition>> {
    parser.expect(&Token::LParen)?;
    let mut columns = vec![parse_column_definition(parser)?];
    while parser.consume(&Token::Comma) {
        columns.push(parse_column_definition(parser)?);
    }
    parser.expect(&Token::RParen)?;
    Ok(columns)
}

/// Skip a balanced parenthesized group starting at the current token
fn skip_parenthesized(parser: &mut Parser) {
    let mut depth = 0usize;
    loop {
        match parser.current() {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Eof => return,
            _ => {}
        }
        parser.advance();
        if depth == 0 {
            return;
        }
    }
}

// =============================================================================
// CREATE
// =============================================================================

/// CREATE / REPLACE statements
pub fn parse_create(parser: &mut Parser) -> Result<Statement> {
    if parser.consume_keyword("REPLACE") {
        parser.expect_keyword("TABLE")?;
        return parse_create_table(parser, CreateMode::Replace, false).map(Statement::CreateTable);
    }
    parser.expect_keyword("CREATE")?;
    let or_replace = parser.consume_keywords(&["OR", "REPLACE"]);

    if parser.consume_keyword("EXTERNAL") {
        parser.expect_keyword("TABLE")?;
        return parse_create_table(parser, create_mode(or_replace), true)
            .map(Statement::CreateTable);
    }
    if parser.consume_keyword("TABLE") {
        return parse_create_table(parser, create_mode(or_replace), false)
            .map(Statement::CreateTable);
    }

    let global = parser.consume_keyword("GLOBAL");
    let temporary = parser.consume_keyword("TEMPORARY") || parser.consume_keyword("TEMP");
    if parser.consume_keyword("VIEW") {
        return parse_create_view(parser, or_replace, global, temporary);
    }
    if global {
        return Err(parser.expected("TEMPORARY VIEW"));
    }
    if parser.consume_keyword("FUNCTION") {
        return parse_create_function(parser, or_replace, temporary).map(Statement::CreateFunction);
    }
    if temporary {
        return Err(parser.expected("VIEW or FUNCTION"));
    }
    if let Some(keyword) = parse_namespace_keyword(parser) {
        return parse_create_namespace(parser, keyword).map(Statement::CreateNamespace);
    }
    if parser.consume_keyword("INDEX") {
        return parse_create_index(parser).map(Statement::CreateIndex);
    }
    Err(parser.expected("TABLE, VIEW, DATABASE, FUNCTION or INDEX"))
}

fn create_mode(or_replace: bool) -> CreateMode {
    if or_replace {
        CreateMode::CreateOrReplace
    } else {
        CreateMode::Create
    }
}

fn parse_create_table(
    parser: &mut Parser,
    mode: CreateMode,
    external: bool,
) -> Result<CreateTableStatement> {
    let if_not_exists = parse_if_not_exists(parser);
    let name = parse_object_name(parser)?;

    let columns = if parser.check(&Token::LParen) && !is_query_start(parser) {
        Some(parse_column_definitions(parser)?)
    } else {
        None
    };

    let provider = if parser.consume_keyword("USING") {
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    let clauses = parse_table_clauses(parser)?;

    let query = if parser.consume_keyword("AS") || is_query_start(parser) {
        Some(Box::new(parse_query(parser)?))
    } else {
        None
    };

    Ok(CreateTableStatement {
        mode,
        external,
        if_not_exists,
        name,
        columns,
        provider,
        clauses,
        query,
    })
}

/// Optional table clauses in any source order
fn parse_table_clauses(parser: &mut Parser) -> Result<TableClauses> {
    let mut clauses = TableClauses::default();
    loop {
        if parser.consume_keywords(&["PRIMARY", "KEY"]) {
            clauses.primary_key = parse_parenthesized_identifiers(parser)?;
        } else if parser.consume_keywords(&["PARTITIONED", "BY"]) {
            clauses.partitioned_by = parse_partition_fields(parser)?;
        } else if parser.consume_keywords(&["CLUSTERED", "BY"]) {
            let columns = parse_parenthesized_identifiers(parser)?;
            let sorted_by = if parser.consume_keywords(&["SORTED", "BY"]) {
                parser.expect(&Token::LParen)?;
                let items = parse_order_by_items(parser)?;
                parser.expect(&Token::RParen)?;
                items
            } else {
                Vec::new()
            };
            parser.expect_keyword("INTO")?;
            let buckets = parse_number(parser)?;
            parser.expect_keyword("BUCKETS")?;
            clauses.clustered_by = Some(BucketSpec {
                columns,
                sorted_by,
                buckets,
            });
        } else if parser.consume_keywords(&["STORED", "AS"]) {
            clauses.stored_as = Some(parse_identifier(parser)?);
        } else if parser.consume_keyword("LOCATION") {
            clauses.location = Some(parse_string_literal(parser)?);
        } else if parser.consume_keyword("LIFECYCLE") {
            clauses.lifecycle = Some(parse_number(parser)?);
        } else if parser.consume_keyword("OPTIONS") {
            clauses.options = parse_properties(parser)?;
        } else if parser.consume_keyword("TBLPROPERTIES") {
            clauses.tbl_properties = parse_properties(parser)?;
        } else if parser.consume_keyword("COMMENT") {
            clauses.comment = Some(parse_string_literal(parser)?);
        } else {
            return Ok(clauses);
        }
    }
}

fn parse_partition_fields(parser: &mut Parser) -> Result<Vec<PartitionField>> {
    parser.expect(&Token::LParen)?;
    let mut fields = vec![parse_partition_field(parser)?];
    while parser.consume(&Token::Comma) {
        fields.push(parse_partition_field(parser)?);
    }
    parser.expect(&Token::RParen)?;
    Ok(fields)
}

fn parse_partition_field(parser: &mut Parser) -> Result<PartitionField> {
    let is_name = matches!(parser.current(), Token::Word(_) | Token::QuotedIdentifier(_));
    if is_name {
        match parser.peek() {
            Token::Comma | Token::RParen => {
                return parse_identifier(parser).map(PartitionField::Column);
            }
            Token::Word(_) => {
                let name = parse_identifier(parser)?;
                let data_type = parse_data_type(parser)?;
                return Ok(PartitionField::Typed { name, data_type });
            }
            _ => {}
        }
    }
    parse_expression(parser).map(PartitionField::Transform)
}

fn parse_create_view(
    parser: &mut Parser,
    or_replace: bool,
    global: bool,
    temporary: bool,
) -> Result<Statement> {
    let if_not_exists = parse_if_not_exists(parser);
    let name = parse_object_name(parser)?;

    if temporary && is_view_using(parser) {
        let columns = if parser.check(&Token::LParen) {
            Some(parse_column_definitions(parser)?)
        } else {
            None
        };
        parser.expect_keyword("USING")?;
        let provider = parse_identifier(parser)?;
        let options = if parser.consume_keyword("OPTIONS") {
            parse_properties(parser)?
        } else {
            Vec::new()
        };
        return Ok(Statement::CreateTempViewUsing(CreateTempViewUsingStatement {
            or_replace,
            global,
            name,
            columns,
            provider,
            options,
        }));
    }

    let columns = if parser.check(&Token::LParen) {
        parser.advance();
        let mut columns = Vec::new();
        loop {
            let name = parse_identifier(parser)?;
            let comment = parse_optional_comment(parser)?;
            columns.push(ViewColumn { name, comment });
            if !parser.consume(&Token::Comma) {
                break;
            }
        }
        parser.expect(&Token::RParen)?;
        Some(columns)
    } else {
        None
    };

    let mut comment = None;
    let mut partitioned_on = Vec::new();
    let mut tbl_properties = Vec::new();
    loop {
        if parser.consume_keyword("COMMENT") {
            comment = Some(parse_string_literal(parser)?);
        } else if parser.consume_keywords(&["PARTITIONED", "ON"]) {
            partitioned_on = parse_parenthesized_identifiers(parser)?;
        } else if parser.consume_keyword("TBLPROPERTIES") {
            tbl_properties = parse_properties(parser)?;
        } else {
            break;
        }
    }

    parser.expect_keyword("AS")?;
    let query = parse_query(parser)?;

    Ok(Statement::CreateView(CreateViewStatement {
        or_replace,
        global,
        temporary,
        if_not_exists,
        name,
        columns,
        comment,
        partitioned_on,
        tbl_properties,
        query: Box::new(query),
    }))
}

/// A temporary view over a data source: `[(cols)] USING` follows the name
fn is_view_using(parser: &mut Parser) -> bool {
    let start = parser.position();
    if parser.check(&Token::LParen) {
        skip_parenthesized(parser);
    }
    let using = parser.check_keyword("USING");
    parser.restore(start);
    using
}

fn parse_create_namespace(
    parser: &mut Parser,
    keyword: NamespaceKeyword,
) -> Result<CreateNamespaceStatement> {
    let if_not_exists = parse_if_not_exists(parser);
    let name = parse_object_name(parser)?;
    let mut statement = CreateNamespaceStatement {
        keyword,
        if_not_exists,
        name,
        comment: None,
        location: None,
        db_properties: true,
        properties: Vec::new(),
    };
    loop {
        if parser.consume_keyword("COMMENT") {
            statement.comment = Some(parse_string_literal(parser)?);
        } else if parser.consume_keyword("LOCATION") {
            statement.location = Some(parse_string_literal(parser)?);
        } else if parser.consume_keywords(&["WITH", "DBPROPERTIES"]) {
            statement.db_properties = true;
            statement.properties = parse_properties(parser)?;
        } else if parser.consume_keywords(&["WITH", "PROPERTIES"]) {
            statement.db_properties = false;
            statement.properties = parse_properties(parser)?;
        } else {
            return Ok(statement);
        }
    }
}

fn parse_create_function(
    parser: &mut Parser,
    or_replace: bool,
    temporary: bool,
) -> Result<CreateFunctionStatement> {
    let if_not_exists = parse_if_not_exists(parser);
    let name = parse_object_name(parser)?;
    parser.expect_keyword("AS")?;
    let class_name = parse_string_literal(parser)?;
    let mut resources = Vec::new();
    if parser.consume_keyword("USING") {
        loop {
            let kind = match parser.current_word().as_deref() {
                Some("JAR") => ResourceKind::Jar,
                Some("FILE") => ResourceKind::File,
                Some("ARCHIVE") => ResourceKind::Archive,
                _ => return Err(parser.expected("JAR, FILE or ARCHIVE")),
            };
            parser.advance();
            let uri = parse_string_literal(parser)?;
            resources.push(FunctionResource { kind, uri });
            if !parser.consume(&Token::Comma) {
                break;
            }
        }
    }
    Ok(CreateFunctionStatement {
        or_replace,
        temporary,
        if_not_exists,
        name,
        class_name,
        resources,
    })
}

fn parse_create_index(parser: &mut Parser) -> Result<CreateIndexStatement> {
    let if_not_exists = parse_if_not_exists(parser);
    let name = parse_identifier(parser)?;
    parser.expect_keyword("ON")?;
    let table_keyword = parser.consume_keyword("TABLE");
    let table = parse_object_name(parser)?;
    let index_type = if parser.consume_keyword("USING") {
        Some(parse_identifier(parser)?)
    } else {
        None
    };

    parser.expect(&Token::LParen)?;
    let mut columns = Vec::new();
    loop {
        let name = parse_object_name(parser)?;
        let options = if parser.consume_keyword("OPTIONS") {
            parse_properties(parser)?
        } else {
            Vec::new()
        };
        columns.push(IndexColumn { name, options });
        if !parser.consume(&Token::Comma) {
            break;
        }
    }
    parser.expect(&Token::RParen)?;

    let options = if parser.consume_keyword("OPTIONS") {
        parse_properties(parser)?
    } else {
        Vec::new()
    };

    Ok(CreateIndexStatement {
        if_not_exists,
        name,
        table_keyword,
        table,
        index_type,
        columns,
        options,
    })
}

// =============================================================================
// ALTER
// =============================================================================

/// ALTER TABLE / VIEW / DATABASE
pub fn parse_alter(parser: &mut Parser) -> Result<Statement> {
    parser.expect_keyword("ALTER")?;

    if let Some(keyword) = parse_namespace_keyword(parser) {
        let name = parse_object_name(parser)?;
        parser.expect_keyword("SET")?;
        let action = if parser.consume_keyword("LOCATION") {
            AlterNamespaceAction::SetLocation(parse_string_literal(parser)?)
        } else if parser.consume_keyword("DBPROPERTIES") {
            AlterNamespaceAction::SetProperties {
                db_properties: true,
                properties: parse_properties(parser)?,
            }
        } else if parser.consume_keyword("PROPERTIES") {
            AlterNamespaceAction::SetProperties {
                db_properties: false,
                properties: parse_properties(parser)?,
            }
        } else {
            return Err(parser.expected("DBPROPERTIES, PROPERTIES or LOCATION"));
        };
        return Ok(Statement::AlterNamespace(AlterNamespaceStatement {
            keyword,
            name,
            action,
        }));
    }

    let view = if parser.consume_keyword("VIEW") {
        true
    } else {
        parser.expect_keyword("TABLE")?;
        false
    };
    let name = parse_object_name(parser)?;

    if view && parser.consume_keyword("AS") {
        let query = parse_query(parser)?;
        return Ok(Statement::AlterViewQuery(AlterViewQueryStatement {
            name,
            query: Box::new(query),
        }));
    }

    let action = parse_alter_table_action(parser)?;
    Ok(Statement::AlterTable(AlterTableStatement { view, name, action }))
}

fn parse_alter_table_action(parser: &mut Parser) -> Result<AlterTableAction> {
    let partition = parse_optional_partition_spec(parser)?;

    if let Some(from) = partition.clone() {
        if parser.consume_keywords(&["RENAME", "TO"]) {
            let to = parse_partition_spec(parser)?;
            return Ok(AlterTableAction::RenamePartition { from, to });
        }
    }

    if parser.consume_keywords(&["SET", "LOCATION"]) {
        let location = parse_string_literal(parser)?;
        return Ok(AlterTableAction::SetLocation {
            partition,
            location,
        });
    }

    if parser.consume_keywords(&["REPLACE", "COLUMNS"]) {
        let columns = parse_column_definitions(parser)?;
        return Ok(AlterTableAction::ReplaceColumns { partition, columns });
    }

    if parser.check_keyword("CHANGE") {
        return parse_change_column(parser, partition);
    }

    if partition.is_some() {
        return Err(parser.expected("RENAME TO, SET LOCATION, REPLACE COLUMNS or CHANGE"));
    }

    if parser.consume_keyword("TOUCH") {
        return parse_optional_partition_spec(parser).map(AlterTableAction::Touch);
    }

    if parser.consume_keyword("RENAME") {
        if parser.consume_keyword("COLUMN") {
            let from = parse_object_name(parser)?;
            parser.expect_keyword("TO")?;
            let to = parse_identifier(parser)?;
            return Ok(AlterTableAction::RenameColumn { from, to });
        }
        parser.expect_keyword("TO")?;
        return parse_object_name(parser).map(AlterTableAction::RenameTo);
    }

    if parser.consume_keywords(&["SET", "TBLPROPERTIES"]) {
        return parse_properties(parser).map(AlterTableAction::SetProperties);
    }

    if parser.consume_keywords(&["UNSET", "TBLPROPERTIES"]) {
        let if_exists = parse_if_exists(parser);
        let keys = parse_property_keys(parser)?;
        return Ok(AlterTableAction::UnsetProperties { if_exists, keys });
    }

    if parser.consume_keyword("ADD") {
        if parser.check_keyword("COLUMN") || parser.check_keyword("COLUMNS") {
            let plural = parser.check_keyword("COLUMNS");
            parser.advance();
            let parenthesized = parser.check(&Token::LParen);
            let columns = if parenthesized {
                parse_column_definitions(parser)?
            } else {
                let mut columns = vec![parse_column_definition(parser)?];
                while parser.consume(&Token::Comma) {
                    columns.push(parse_column_definition(parser)?);
                }
                columns
            };
            return Ok(AlterTableAction::AddColumns {
                plural,
                parenthesized,
                columns,
            });
        }
        let if_not_exists = parse_if_not_exists(parser);
        let mut partitions = Vec::new();
        while parser.check_keyword("PARTITION") {
            let spec = parse_partition_spec(parser)?;
            let location = if parser.consume_keyword("LOCATION") {
                Some(parse_string_literal(parser)?)
            } else {
                None
            };
            partitions.push((spec, location));
        }
        if partitions.is_empty() {
            return Err(parser.expected("COLUMNS or PARTITION"));
        }
        return Ok(AlterTableAction::AddPartitions {
            if_not_exists,
            partitions,
        });
    }

    if parser.consume_keyword("DROP") {
        if parser.check_keyword("COLUMN") || parser.check_keyword("COLUMNS") {
            let plural = parser.check_keyword("COLUMNS");
            parser.advance();
            let if_exists = parse_if_exists(parser);
            let parenthesized = parser.consume(&Token::LParen);
            let mut columns = vec![parse_object_name(parser)?];
            while parser.consume(&Token::Comma) {
                columns.push(parse_object_name(parser)?);
            }
            if parenthesized {
                parser.expect(&Token::RParen)?;
            }
            return Ok(AlterTableAction::DropColumns {
                plural,
                if_exists,
                parenthesized,
                columns,
            });
        }
        let if_exists = parse_if_exists(parser);
        let mut partitions = vec![parse_partition_spec(parser)?];
        while parser.consume(&Token::Comma) {
            partitions.push(parse_partition_spec(parser)?);
        }
        let purge = parser.consume_keyword("PURGE");
        return Ok(AlterTableAction::DropPartitions {
            if_exists,
            partitions,
            purge,
        });
    }

    if parser.check_keyword("ALTER") {
        return parse_change_column(parser, None);
    }

    if parser.consume_keywords(&["RECOVER", "PARTITIONS"]) {
        return Ok(AlterTableAction::RecoverPartitions);
    }

    Err(parser.expected("ALTER TABLE action"))
}

/// `ALTER|CHANGE [COLUMN] c <change>` or hive style `CHANGE [COLUMN] old new type`
fn parse_change_column(
    parser: &mut Parser,
    partition: Option<PartitionSpec>,
) -> Result<AlterTableAction> {
    let change_keyword = parser.check_keyword("CHANGE");
    parser.advance();
    let column_keyword = parser.consume_keyword("COLUMN");
    let column = parse_object_name(parser)?;

    let change = if parser.consume_keyword("TYPE") {
        Some(ColumnChange::Type(parse_data_type(parser)?))
    } else if parser.consume_keyword("COMMENT") {
        Some(ColumnChange::Comment(parse_string_literal(parser)?))
    } else if parser.consume_keywords(&["SET", "NOT", "NULL"]) {
        Some(ColumnChange::SetNotNull)
    } else if parser.consume_keywords(&["DROP", "NOT", "NULL"]) {
        Some(ColumnChange::DropNotNull)
    } else if let Some(position) = parse_column_position(parser)? {
        Some(ColumnChange::Position(position))
    } else {
        None
    };

    match change {
        Some(change) if partition.is_none() => Ok(AlterTableAction::AlterColumn {
            change_keyword,
            column_keyword,
            column,
            change,
        }),
        Some(_) => Err(parser.expected("column definition")),
        None if change_keyword => {
            let definition = parse_column_definition(parser)?;
            Ok(AlterTableAction::ChangeColumn {
                partition,
                column_keyword,
                column,
                definition,
            })
        }
        None => Err(parser.expected("TYPE, COMMENT, FIRST, AFTER, SET or DROP")),
    }
}

// =============================================================================
// DROP and maintenance
// =============================================================================

/// DROP TABLE / VIEW / DATABASE / FUNCTION / INDEX
pub fn parse_drop(parser: &mut Parser) -> Result<Statement> {
    parser.expect_keyword("DROP")?;

    if let Some(keyword) = parse_namespace_keyword(parser) {
        let if_exists = parse_if_exists(parser);
        let name = parse_object_name(parser)?;
        let behavior = if parser.consume_keyword("RESTRICT") {
            Some(DropBehavior::Restrict)
        } else if parser.consume_keyword("CASCADE") {
            Some(DropBehavior::Cascade)
        } else {
            None
        };
        return Ok(Statement::DropNamespace(DropNamespaceStatement {
            keyword,
            if_exists,
            name,
            behavior,
        }));
    }

    let temporary = parser.consume_keyword("TEMPORARY");
    if parser.consume_keyword("FUNCTION") {
        let if_exists = parse_if_exists(parser);
        let name = parse_object_name(parser)?;
        return Ok(Statement::DropFunction(DropFunctionStatement {
            temporary,
            if_exists,
            name,
        }));
    }
    if temporary {
        return Err(parser.expected("FUNCTION"));
    }

    if parser.consume_keyword("INDEX") {
        let if_exists = parse_if_exists(parser);
        let name = parse_identifier(parser)?;
        parser.expect_keyword("ON")?;
        let table_keyword = parser.consume_keyword("TABLE");
        let table = parse_object_name(parser)?;
        return Ok(Statement::DropIndex(DropIndexStatement {
            if_exists,
            name,
            table_keyword,
            table,
        }));
    }

    let view = if parser.consume_keyword("VIEW") {
        true
    } else {
        parser.expect_keyword("TABLE")?;
        false
    };
    let if_exists = parse_if_exists(parser);
    let name = parse_object_name(parser)?;
    let purge = !view && parser.consume_keyword("PURGE");
    Ok(Statement::Drop(DropStatement {
        view,
        if_exists,
        name,
        purge,
    }))
}

pub fn parse_truncate(parser: &mut Parser) -> Result<TruncateStatement> {
    parser.expect_keywords(&["TRUNCATE", "TABLE"])?;
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    Ok(TruncateStatement { table, partition })
}

pub fn parse_repair(parser: &mut Parser) -> Result<RepairTableStatement> {
    let msck = parser.consume_keyword("MSCK");
    parser.expect_keywords(&["REPAIR", "TABLE"])?;
    let table = parse_object_name(parser)?;
    let option = match parser.current_word().as_deref() {
        Some("ADD") => Some(RepairOption::Add),
        Some("DROP") => Some(RepairOption::Drop),
        Some("SYNC") => Some(RepairOption::Sync),
        _ => None,
    };
    if option.is_some() {
        parser.advance();
        parser.expect_keyword("PARTITIONS")?;
    }
    Ok(RepairTableStatement {
        msck,
        table,
        option,
    })
}

/// ANALYZE TABLE ... or ANALYZE TABLES ...
pub fn parse_analyze(parser: &mut Parser) -> Result<Statement> {
    parser.expect_keyword("ANALYZE")?;

    if parser.consume_keyword("TABLES") {
        let keyword = if parser.consume_keyword("FROM") {
            Some(ScopeKeyword::From)
        } else if parser.consume_keyword("IN") {
            Some(ScopeKeyword::In)
        } else {
            None
        };
        let scope = match keyword {
            Some(keyword) => Some(Scope {
                keyword,
                name: parse_object_name(parser)?,
            }),
            None => None,
        };
        parser.expect_keywords(&["COMPUTE", "STATISTICS"])?;
        let noscan = parser.consume_keyword("NOSCAN");
        return Ok(Statement::AnalyzeTables(AnalyzeTablesStatement { scope, noscan }));
    }

    parser.expect_keyword("TABLE")?;
    let table = parse_object_name(parser)?;
    let partition = parse_optional_partition_spec(parser)?;
    parser.expect_keywords(&["COMPUTE", "STATISTICS"])?;
    let target = if parser.consume_keyword("NOSCAN") {
        AnalyzeTarget::NoScan
    } else if parser.consume_keywords(&["FOR", "ALL", "COLUMNS"]) {
        AnalyzeTarget::AllColumns
    } else if parser.consume_keywords(&["FOR", "COLUMNS"]) {
        let mut columns = vec![parse_object_name(parser)?];
        while parser.consume(&Token::Comma) {
            columns.push(parse_object_name(parser)?);
        }
        AnalyzeTarget::Columns(columns)
    } else {
        AnalyzeTarget::Table
    };
    Ok(Statement::Analyze(AnalyzeStatement {
        table,
        partition,
        target,
    }))
}

pub fn parse_comment_on(parser: &mut Parser) -> Result<CommentOnStatement> {
    parser.expect_keywords(&["COMMENT", "ON"])?;
    let target = if parser.consume_keyword("TABLE") {
        CommentTarget::Table
    } else if let Some(keyword) = parse_namespace_keyword(parser) {
        CommentTarget::Namespace(keyword)
    } else {
        return Err(parser.expected("TABLE, DATABASE, SCHEMA or NAMESPACE"));
    };
    let name = parse_object_name(parser)?;
    parser.expect_keyword("IS")?;
    let comment = if parser.consume_keyword("NULL") {
        None
    } else {
        Some(parse_string_literal(parser)?)
    };
    Ok(CommentOnStatement {
        target,
        name,
        comment,
    })
}
