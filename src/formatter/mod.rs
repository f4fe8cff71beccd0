//! SQL formatting / pretty-printing logic
//!
//! A [`Formatter`] walks one [`Statement`] and writes into a [`Printer`].
//! Rendering is split by statement family into the `query`, `expr`, `dml`,
//! `ddl` and `command` submodules, each adding an `impl Formatter` block.

mod command;
mod ddl;
mod dml;
mod expr;
pub mod printer;
mod query;
pub mod rules;

use crate::ast::*;
use crate::config::FormatConfig;
use crate::error::Result;
use crate::parser;
use printer::Printer;

/// Format SQL string with the default configuration
pub fn format_sql(input: &str) -> Result<String> {
    format_sql_with(input, &FormatConfig::default())
}

/// Format SQL string with an explicit configuration
pub fn format_sql_with(input: &str, config: &FormatConfig) -> Result<String> {
    let sql = input.trim();

    let ast = match parser::parse(sql) {
        Ok(ast) => ast,
        Err(e) => {
            let e = e.with_source(sql);
            tracing::warn!(error = %e, "failed to parse statement");
            return Err(e);
        }
    };

    let formatted = format_ast(&ast, config)?;
    tracing::debug!(
        kind = ast.kind(),
        bytes = formatted.len(),
        "formatted statement"
    );
    Ok(formatted)
}

/// Format AST to string
pub fn format_ast(stmt: &Statement, config: &FormatConfig) -> Result<String> {
    let mut formatter = Formatter::new(config);
    formatter.format_statement(stmt);
    formatter.printer.finish()
}

pub(crate) struct Formatter<'c> {
    printer: Printer,
    config: &'c FormatConfig,
}

impl<'c> Formatter<'c> {
    fn new(config: &'c FormatConfig) -> Self {
        Self {
            printer: Printer::new(config.indent_width),
            config,
        }
    }

    fn format_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Query(query) => self.format_query(query),
            Statement::Insert(insert) => self.format_insert(insert),
            Statement::MultiInsert(insert) => self.format_multi_insert(insert),
            Statement::Update(update) => self.format_update(update),
            Statement::Delete(delete) => self.format_delete(delete),
            Statement::Merge(merge) => self.format_merge(merge),
            Statement::CreateTable(create) => self.format_create_table(create),
            Statement::CreateView(create) => self.format_create_view(create),
            Statement::CreateTempViewUsing(create) => self.format_create_temp_view_using(create),
            Statement::AlterViewQuery(alter) => self.format_alter_view_query(alter),
            Statement::AlterTable(alter) => self.format_alter_table(alter),
            Statement::Drop(drop) => self.format_drop(drop),
            Statement::CreateNamespace(create) => self.format_create_namespace(create),
            Statement::AlterNamespace(alter) => self.format_alter_namespace(alter),
            Statement::DropNamespace(drop) => self.format_drop_namespace(drop),
            Statement::CreateFunction(create) => self.format_create_function(create),
            Statement::DropFunction(drop) => self.format_drop_function(drop),
            Statement::CreateIndex(create) => self.format_create_index(create),
            Statement::DropIndex(drop) => self.format_drop_index(drop),
            Statement::Truncate(truncate) => self.format_truncate(truncate),
            Statement::RepairTable(repair) => self.format_repair_table(repair),
            Statement::Analyze(analyze) => self.format_analyze(analyze),
            Statement::AnalyzeTables(analyze) => self.format_analyze_tables(analyze),
            Statement::CommentOn(comment) => self.format_comment_on(comment),
            Statement::Use(stmt) => self.format_use(stmt),
            Statement::SetCatalog(name) => {
                self.write("SET CATALOG ");
                self.write(name);
            }
            Statement::SetConfig(set) => self.format_set_config(set),
            Statement::Reset(key) => {
                self.write("RESET");
                if let Some(key) = key {
                    self.write(" ");
                    self.write(key);
                }
            }
            Statement::Show(show) => self.format_show(show),
            Statement::Describe(describe) => self.format_describe(describe),
            Statement::Explain(explain) => self.format_explain(explain),
            Statement::Call(call) => self.format_call(call),
            Statement::LoadData(load) => self.format_load_data(load),
            Statement::LoadFile(load) => self.format_load_file(load),
            Statement::ExportTable(export) => self.format_export_table(export),
            Statement::DataTunnel(tunnel) => self.format_datatunnel(tunnel),
            Statement::MergeFile(merge) => self.format_merge_file(merge),
        }
    }

    // -------------------------------------------------------------------------
    // Shared helpers
    // -------------------------------------------------------------------------

    fn write(&mut self, text: &str) {
        self.printer.write(text);
    }

    fn newline(&mut self) {
        self.printer.newline();
    }

    /// Run `f` one indent level deeper
    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.printer.indent();
        f(self);
        self.printer.dedent();
    }

    /// Items separated by `sep` on the current line
    fn write_separated<T>(&mut self, items: &[T], sep: &str, mut f: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            f(self, item);
        }
    }

    fn write_idents(&mut self, idents: &[Ident]) {
        self.write_separated(idents, ", ", |f, ident| f.write(&ident.to_string()));
    }

    fn write_names(&mut self, names: &[ObjectName]) {
        self.write_separated(names, ", ", |f, name| f.write(&name.to_string()));
    }

    /// Run `f` with the depth reset to that of the current output line.
    /// Text that starts inline after a keyword breaks relative to the line.
    fn at_line_depth(&mut self, f: impl FnOnce(&mut Self)) {
        let extra = self.printer.depth().saturating_sub(self.printer.line_depth());
        for _ in 0..extra {
            self.printer.dedent();
        }
        f(self);
        for _ in 0..extra {
            self.printer.indent();
        }
    }

    /// Each item on its own line one level deeper, comma-terminated except the last
    fn write_lines<T>(&mut self, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        self.nested(|this| {
            for (i, item) in items.iter().enumerate() {
                this.newline();
                f(this, item);
                if i + 1 < items.len() {
                    this.write(",");
                }
            }
        });
    }

    /// `items` after `keyword`: a single item stays inline, otherwise one per line
    fn write_list<T>(&mut self, keyword: &str, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        self.write(keyword);
        if let [item] = items {
            self.write(" ");
            f(self, item);
        } else {
            self.write_lines(items, f);
        }
    }

    /// Clause keyword and its items, laid out according to the configured layout.
    /// An inline item keeps the depth it would have on its own line.
    fn write_clause<T>(&mut self, keyword: &str, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        self.write(keyword);
        match items {
            [item] if self.config.is_compact() => {
                self.write(" ");
                self.nested(|this| f(this, item));
            }
            _ => self.write_lines(items, f),
        }
    }

    /// `(` entries at d+1 `)` at d; the caller writes the text before `(`
    fn write_block<T>(&mut self, items: &[T], f: impl FnMut(&mut Self, &T)) {
        self.write("(");
        if !items.is_empty() {
            self.write_lines(items, f);
            self.newline();
        }
        self.write(")");
    }

    fn write_string_opt(&mut self, prefix: &str, value: &Option<String>) {
        if let Some(value) = value {
            self.write(prefix);
            self.write(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClauseLayout;

    fn format(input: &str) -> String {
        format_sql(input).expect("should format")
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(format("select a from t"), "SELECT a\nFROM\n  t");
    }

    #[test]
    fn test_compact_layout() {
        let config = FormatConfig::default().with_layout(ClauseLayout::Compact);
        let output = format_sql_with("select a from t order by a", &config).expect("should format");
        assert_eq!(output, "SELECT a\nFROM t\nORDER BY a");
    }

    #[test]
    fn test_indent_width() {
        let config = FormatConfig::default().with_indent_width(4);
        let output = format_sql_with("select a, b from t", &config).expect("should format");
        assert_eq!(output, "SELECT\n    a,\n    b\nFROM\n    t");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(format("  \n select 1;\n"), "SELECT 1");
    }

    #[test]
    fn test_parse_error_carries_source() {
        let err = format_sql("select 1 +").expect_err("should fail");
        assert!(err.span().is_some());
    }
}
