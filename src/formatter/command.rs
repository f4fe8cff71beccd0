//! Session and catalog commands: USE, SET, SHOW, DESCRIBE, EXPLAIN, CALL, LOAD

use super::{rules, Formatter};
use crate::ast::*;

impl Formatter<'_> {
    /// ` FROM db` / ` IN db`
    pub(super) fn format_scope(&mut self, scope: Option<&Scope>) {
        if let Some(scope) = scope {
            self.write(" ");
            self.write(rules::scope_keyword(scope.keyword));
            self.write(" ");
            self.write(&scope.name.to_string());
        }
    }

    fn format_show_pattern(&mut self, pattern: &Option<ShowPattern>) {
        if let Some(pattern) = pattern {
            self.write(if pattern.like { " LIKE " } else { " " });
            self.write(&pattern.pattern);
        }
    }

    pub(super) fn format_use(&mut self, stmt: &UseStatement) {
        self.write("USE ");
        if let Some(keyword) = stmt.keyword {
            self.write(rules::namespace_keyword(keyword));
            self.write(" ");
        }
        self.write(&stmt.name.to_string());
    }

    /// Key and value are replayed as written
    pub(super) fn format_set_config(&mut self, set: &SetConfigStatement) {
        self.write("SET");
        self.write_string_opt(" ", &set.key);
        self.write_string_opt(" = ", &set.value);
    }

    pub(super) fn format_show(&mut self, show: &ShowStatement) {
        self.write("SHOW ");
        match show {
            ShowStatement::Namespaces {
                keyword,
                scope,
                pattern,
            } => {
                self.write(rules::namespace_keyword_plural(*keyword));
                self.format_scope(scope.as_ref());
                self.format_show_pattern(pattern);
            }
            ShowStatement::Tables { scope, pattern } => {
                self.write("TABLES");
                self.format_scope(scope.as_ref());
                self.format_show_pattern(pattern);
            }
            ShowStatement::TableExtended {
                scope,
                pattern,
                partition,
            } => {
                self.write("TABLE EXTENDED");
                self.format_scope(scope.as_ref());
                self.write(" LIKE ");
                self.write(pattern);
                self.format_optional_partition(partition);
            }
            ShowStatement::Views { scope, pattern } => {
                self.write("VIEWS");
                self.format_scope(scope.as_ref());
                self.format_show_pattern(pattern);
            }
            ShowStatement::Columns { table, namespace } => {
                self.write("COLUMNS");
                self.format_scope(Some(table));
                self.format_scope(namespace.as_ref());
            }
            ShowStatement::Partitions { table, partition } => {
                self.write("PARTITIONS ");
                self.write(&table.to_string());
                self.format_optional_partition(partition);
            }
            ShowStatement::TblProperties { table, key } => {
                self.write("TBLPROPERTIES ");
                self.write(&table.to_string());
                if let Some(key) = key {
                    self.write(" (");
                    self.write(key);
                    self.write(")");
                }
            }
            ShowStatement::Functions {
                kind,
                scope,
                pattern,
            } => {
                if let Some(kind) = kind {
                    self.write(rules::function_kind(*kind));
                    self.write(" ");
                }
                self.write("FUNCTIONS");
                self.format_scope(scope.as_ref());
                self.format_show_pattern(pattern);
            }
            ShowStatement::CreateTable { table, as_serde } => {
                self.write("CREATE TABLE ");
                self.write(&table.to_string());
                if *as_serde {
                    self.write(" AS SERDE");
                }
            }
            ShowStatement::Catalogs { pattern } => {
                self.write("CATALOGS");
                self.format_show_pattern(pattern);
            }
            ShowStatement::CurrentNamespace => self.write("CURRENT NAMESPACE"),
        }
    }

    pub(super) fn format_describe(&mut self, describe: &DescribeStatement) {
        self.write(if describe.short { "DESC" } else { "DESCRIBE" });
        match &describe.target {
            DescribeTarget::Table {
                table_keyword,
                detail,
                table,
                partition,
                column,
            } => {
                if *table_keyword {
                    self.write(" TABLE");
                }
                if let Some(detail) = detail {
                    self.write(" ");
                    self.write(rules::describe_detail(*detail));
                }
                self.write(" ");
                self.write(&table.to_string());
                self.format_optional_partition(partition);
                if let Some(column) = column {
                    self.write(" ");
                    self.write(&column.to_string());
                }
            }
            DescribeTarget::Function { extended, name } => {
                self.write(" FUNCTION");
                if *extended {
                    self.write(" EXTENDED");
                }
                self.write(" ");
                self.write(&name.to_string());
            }
            DescribeTarget::Namespace {
                keyword,
                extended,
                name,
            } => {
                self.write(" ");
                self.write(rules::namespace_keyword(*keyword));
                if *extended {
                    self.write(" EXTENDED");
                }
                self.write(" ");
                self.write(&name.to_string());
            }
            DescribeTarget::Query {
                query_keyword,
                query,
            } => {
                if *query_keyword {
                    self.write(" QUERY");
                }
                self.write(" ");
                self.format_query(query);
            }
        }
    }

    pub(super) fn format_explain(&mut self, explain: &ExplainStatement) {
        self.write("EXPLAIN ");
        if let Some(mode) = explain.mode {
            self.write(rules::explain_mode(mode));
            self.write(" ");
        }
        self.format_statement(&explain.statement);
    }

    pub(super) fn format_call(&mut self, call: &CallStatement) {
        self.write("CALL ");
        self.write(&call.procedure.to_string());
        self.write_block(&call.args, |f, arg| f.format_function_arg(arg));
    }

    pub(super) fn format_load_data(&mut self, load: &LoadDataStatement) {
        self.write("LOAD DATA ");
        if load.local {
            self.write("LOCAL ");
        }
        self.write("INPATH ");
        self.write(&load.path);
        if load.overwrite {
            self.write(" OVERWRITE");
        }
        self.write(" INTO TABLE ");
        self.write(&load.table.to_string());
        self.format_optional_partition(&load.partition);
    }

    pub(super) fn format_load_file(&mut self, load: &LoadFileStatement) {
        self.write("LOAD DATA ");
        self.write(&load.path);
        self.write(if load.table_keyword { " TABLE " } else { " " });
        self.write(&load.table.to_string());
        if !load.options.is_empty() {
            self.format_properties(" OPTIONS", &load.options);
        }
    }

    /// A partition pushes `TO` onto its own line
    pub(super) fn format_export_table(&mut self, export: &ExportTableStatement) {
        if let Some(with) = &export.with {
            self.format_with_clause(with);
            self.newline();
        }
        self.write("EXPORT TABLE ");
        self.write(&export.table.to_string());
        match &export.partition {
            Some(partition) => {
                self.write(" ");
                self.format_partition_spec(partition);
                self.newline();
            }
            None => self.write(" "),
        }
        self.write("TO ");
        self.write(&export.path);
        if !export.options.is_empty() {
            self.format_properties(" OPTIONS", &export.options);
        }
    }

    pub(super) fn format_datatunnel(&mut self, tunnel: &DataTunnelStatement) {
        self.write("DATATUNNEL ");
        self.format_tunnel_endpoint("SOURCE", &tunnel.source, &tunnel.source_options);
        if let Some(transform) = &tunnel.transform {
            self.newline();
            self.write("TRANSFORM = ");
            self.write(transform);
        }
        self.newline();
        self.format_tunnel_endpoint("SINK", &tunnel.sink, &tunnel.sink_options);
    }

    fn format_tunnel_endpoint(&mut self, keyword: &str, kind: &str, options: &[TunnelProperty]) {
        self.write(keyword);
        self.write("(");
        self.write(kind);
        self.write(") OPTIONS");
        self.write_block(options, |f, option| {
            f.write(&option.key);
            f.write(" = ");
            f.format_tunnel_value(&option.value);
        });
    }

    fn format_tunnel_value(&mut self, value: &TunnelValue) {
        match value {
            TunnelValue::Scalar(text) => self.write(text),
            TunnelValue::List(items) => {
                self.write("[");
                self.write_separated(items, ", ", |f, item| f.format_tunnel_value(item));
                self.write("]");
            }
        }
    }

    pub(super) fn format_merge_file(&mut self, merge: &MergeFileStatement) {
        self.write("MERGE TABLE ");
        self.write(&merge.table.to_string());
        self.format_optional_partition(&merge.partition);
        if !merge.options.is_empty() {
            self.newline();
            self.format_properties("OPTIONS", &merge.options);
        }
    }
}
