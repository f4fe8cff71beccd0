//! DDL rendering
//!
//! Whether a `(` is preceded by a space varies by construct: `OPTIONS(`,
//! `SET TBLPROPERTIES(` and `ADD COLUMNS(` are written tight, while
//! `TBLPROPERTIES (`, `WITH DBPROPERTIES (` and `REPLACE COLUMNS (` are not.
//! Each call site spells its own prefix.

use super::{rules, Formatter};
use crate::ast::*;

impl Formatter<'_> {
    pub(super) fn format_property(&mut self, property: &Property) {
        self.write(&property.key);
        if let Some(value) = &property.value {
            self.write(" = ");
            self.format_expr(value);
        }
    }

    /// `prefix(` then one property per line, `)` at the current depth
    pub(super) fn format_properties(&mut self, prefix: &str, properties: &[Property]) {
        self.write(prefix);
        self.write_block(properties, |f, property| f.format_property(property));
    }

    fn format_column_definition(&mut self, column: &ColumnDefinition) {
        self.write(&column.name.to_string());
        self.write(" ");
        self.format_data_type(&column.data_type);
        if column.not_null {
            self.write(" NOT NULL");
        }
        if let Some(default) = &column.default {
            self.write(" DEFAULT ");
            self.format_expr(default);
        }
        self.write_string_opt(" COMMENT ", &column.comment);
        if let Some(position) = &column.position {
            self.write(" ");
            self.format_column_position(position);
        }
    }

    fn format_column_position(&mut self, position: &ColumnPosition) {
        match position {
            ColumnPosition::First => self.write("FIRST"),
            ColumnPosition::After(column) => {
                self.write("AFTER ");
                self.write(&column.to_string());
            }
        }
    }

    fn format_column_block(&mut self, prefix: &str, columns: &[ColumnDefinition]) {
        self.write(prefix);
        self.write_block(columns, |f, column| f.format_column_definition(column));
    }

    // -------------------------------------------------------------------------
    // Tables and views
    // -------------------------------------------------------------------------

    pub(super) fn format_create_table(&mut self, create: &CreateTableStatement) {
        self.write(match create.mode {
            CreateMode::Create => "CREATE ",
            CreateMode::CreateOrReplace => "CREATE OR REPLACE ",
            CreateMode::Replace => "REPLACE ",
        });
        if create.external {
            self.write("EXTERNAL ");
        }
        self.write("TABLE ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write(&create.name.to_string());

        if let Some(columns) = &create.columns {
            self.format_column_block(" ", columns);
        }
        if let Some(provider) = &create.provider {
            if create.columns.is_some() {
                self.newline();
            } else {
                self.write(" ");
            }
            self.write("USING ");
            self.write(&provider.to_string());
        }

        self.format_table_clauses(&create.clauses);

        if let Some(query) = &create.query {
            self.write(" AS");
            self.newline();
            self.format_query(query);
        }
    }

    fn format_table_clauses(&mut self, clauses: &TableClauses) {
        if !clauses.primary_key.is_empty() {
            self.newline();
            self.write("PRIMARY KEY (");
            self.write_idents(&clauses.primary_key);
            self.write(")");
        }
        if !clauses.partitioned_by.is_empty() {
            self.newline();
            self.write("PARTITIONED BY (");
            self.write_separated(&clauses.partitioned_by, ", ", |f, field| match field {
                PartitionField::Column(name) => f.write(&name.to_string()),
                PartitionField::Typed { name, data_type } => {
                    f.write(&name.to_string());
                    f.write(" ");
                    f.format_data_type(data_type);
                }
                PartitionField::Transform(expr) => f.format_expr(expr),
            });
            self.write(")");
        }
        if let Some(bucket) = &clauses.clustered_by {
            self.newline();
            self.write("CLUSTERED BY (");
            self.write_idents(&bucket.columns);
            self.write(")");
            if !bucket.sorted_by.is_empty() {
                self.write(" SORTED BY (");
                self.write_separated(&bucket.sorted_by, ", ", |f, item| {
                    f.format_order_by_item(item)
                });
                self.write(")");
            }
            self.write(" INTO ");
            self.write(&bucket.buckets);
            self.write(" BUCKETS");
        }
        if let Some(format) = &clauses.stored_as {
            self.newline();
            self.write("STORED AS ");
            self.write(&format.to_string());
        }
        if let Some(location) = &clauses.location {
            self.newline();
            self.write("LOCATION ");
            self.write(location);
        }
        if let Some(lifecycle) = &clauses.lifecycle {
            self.newline();
            self.write("LIFECYCLE ");
            self.write(lifecycle);
        }
        if !clauses.options.is_empty() {
            self.newline();
            self.format_properties("OPTIONS", &clauses.options);
        }
        if !clauses.tbl_properties.is_empty() {
            self.newline();
            self.format_properties("TBLPROPERTIES ", &clauses.tbl_properties);
        }
        if let Some(comment) = &clauses.comment {
            self.newline();
            self.write("COMMENT ");
            self.write(comment);
        }
    }

    pub(super) fn format_create_view(&mut self, create: &CreateViewStatement) {
        self.write("CREATE ");
        if create.or_replace {
            self.write("OR REPLACE ");
        }
        if create.global {
            self.write("GLOBAL ");
        }
        if create.temporary {
            self.write("TEMPORARY ");
        }
        self.write("VIEW ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write(&create.name.to_string());

        if let Some(columns) = &create.columns {
            self.write_block(columns, |f, column| {
                f.write(&column.name.to_string());
                f.write_string_opt(" COMMENT ", &column.comment);
            });
        }
        if let Some(comment) = &create.comment {
            self.newline();
            self.write("COMMENT ");
            self.write(comment);
        }
        if !create.partitioned_on.is_empty() {
            self.newline();
            self.write("PARTITIONED ON (");
            self.write_idents(&create.partitioned_on);
            self.write(")");
        }
        if !create.tbl_properties.is_empty() {
            self.newline();
            self.format_properties("TBLPROPERTIES ", &create.tbl_properties);
        }

        self.newline();
        self.write("AS ");
        self.format_query(&create.query);
    }

    pub(super) fn format_create_temp_view_using(&mut self, create: &CreateTempViewUsingStatement) {
        self.write("CREATE ");
        if create.or_replace {
            self.write("OR REPLACE ");
        }
        if create.global {
            self.write("GLOBAL ");
        }
        self.write("TEMPORARY VIEW ");
        self.write(&create.name.to_string());
        if let Some(columns) = &create.columns {
            self.format_column_block(" ", columns);
        }
        self.newline();
        self.write("USING ");
        self.write(&create.provider.to_string());
        if !create.options.is_empty() {
            self.newline();
            self.format_properties("OPTIONS", &create.options);
        }
    }

    pub(super) fn format_alter_view_query(&mut self, alter: &AlterViewQueryStatement) {
        self.write("ALTER VIEW ");
        self.write(&alter.name.to_string());
        self.write(" AS");
        self.newline();
        self.format_query(&alter.query);
    }

    pub(super) fn format_alter_table(&mut self, alter: &AlterTableStatement) {
        self.write(if alter.view {
            "ALTER VIEW "
        } else {
            "ALTER TABLE "
        });
        self.write(&alter.name.to_string());
        self.write(" ");
        self.format_alter_table_action(&alter.action);
    }

    fn format_partition_prefix(&mut self, partition: &Option<PartitionSpec>) {
        if let Some(spec) = partition {
            self.format_partition_spec(spec);
            self.write(" ");
        }
    }

    fn format_alter_table_action(&mut self, action: &AlterTableAction) {
        match action {
            AlterTableAction::RenameTo(name) => {
                self.write("RENAME TO ");
                self.write(&name.to_string());
            }
            AlterTableAction::SetProperties(properties) => {
                self.format_properties("SET TBLPROPERTIES", properties);
            }
            AlterTableAction::UnsetProperties { if_exists, keys } => {
                let prefix = if *if_exists {
                    "UNSET TBLPROPERTIES IF EXISTS "
                } else {
                    "UNSET TBLPROPERTIES"
                };
                self.format_properties(prefix, keys);
            }
            AlterTableAction::AddColumns {
                plural,
                parenthesized,
                columns,
            } => {
                let keyword = if *plural { "ADD COLUMNS" } else { "ADD COLUMN" };
                if *parenthesized {
                    self.format_column_block(keyword, columns);
                } else {
                    self.write(keyword);
                    self.write_lines(columns, |f, column| f.format_column_definition(column));
                }
            }
            AlterTableAction::DropColumns {
                plural,
                if_exists,
                parenthesized,
                columns,
            } => {
                self.write(if *plural { "DROP COLUMNS" } else { "DROP COLUMN" });
                if *if_exists {
                    self.write(" IF EXISTS");
                }
                if *parenthesized {
                    self.write(" (");
                    self.write_names(columns);
                    self.write(")");
                } else {
                    self.write(" ");
                    self.write_names(columns);
                }
            }
            AlterTableAction::RenameColumn { from, to } => {
                self.write("RENAME COLUMN ");
                self.write(&from.to_string());
                self.write(" TO ");
                self.write(&to.to_string());
            }
            AlterTableAction::AlterColumn {
                change_keyword,
                column_keyword,
                column,
                change,
            } => {
                self.write(if *change_keyword { "CHANGE" } else { "ALTER" });
                if *column_keyword {
                    self.write(" COLUMN");
                }
                self.write(" ");
                self.write(&column.to_string());
                self.write(" ");
                match change {
                    ColumnChange::Type(data_type) => {
                        self.write("TYPE ");
                        self.format_data_type(data_type);
                    }
                    ColumnChange::Comment(comment) => {
                        self.write("COMMENT ");
                        self.write(comment);
                    }
                    ColumnChange::Position(position) => self.format_column_position(position),
                    ColumnChange::SetNotNull => self.write("SET NOT NULL"),
                    ColumnChange::DropNotNull => self.write("DROP NOT NULL"),
                }
            }
            AlterTableAction::ChangeColumn {
                partition,
                column_keyword,
                column,
                definition,
            } => {
                self.format_partition_prefix(partition);
                self.write("CHANGE");
                if *column_keyword {
                    self.write(" COLUMN");
                }
                self.write(" ");
                self.write(&column.to_string());
                self.write(" ");
                self.format_column_definition(definition);
            }
            AlterTableAction::ReplaceColumns { partition, columns } => {
                self.format_partition_prefix(partition);
                self.format_column_block("REPLACE COLUMNS ", columns);
            }
            AlterTableAction::AddPartitions {
                if_not_exists,
                partitions,
            } => {
                self.write("ADD");
                if *if_not_exists {
                    self.write(" IF NOT EXISTS");
                }
                self.nested(|f| {
                    for (spec, location) in partitions {
                        f.newline();
                        f.format_partition_spec(spec);
                        f.write_string_opt(" LOCATION ", location);
                    }
                });
            }
            AlterTableAction::DropPartitions {
                if_exists,
                partitions,
                purge,
            } => {
                self.write("DROP");
                if *if_exists {
                    self.write(" IF EXISTS");
                }
                self.write_lines(partitions, |f, spec| f.format_partition_spec(spec));
                if *purge {
                    self.write(" PURGE");
                }
            }
            AlterTableAction::RenamePartition { from, to } => {
                self.format_partition_spec(from);
                self.write(" RENAME TO ");
                self.format_partition_spec(to);
            }
            AlterTableAction::SetLocation {
                partition,
                location,
            } => {
                self.format_partition_prefix(partition);
                self.write("SET LOCATION ");
                self.write(location);
            }
            AlterTableAction::RecoverPartitions => self.write("RECOVER PARTITIONS"),
            AlterTableAction::Touch(partition) => {
                self.write("TOUCH");
                self.format_optional_partition(partition);
            }
        }
    }

    pub(super) fn format_drop(&mut self, drop: &DropStatement) {
        self.write(if drop.view { "DROP VIEW " } else { "DROP TABLE " });
        if drop.if_exists {
            self.write("IF EXISTS ");
        }
        self.write(&drop.name.to_string());
        if drop.purge {
            self.write(" PURGE");
        }
    }

    // -------------------------------------------------------------------------
    // Namespaces
    // -------------------------------------------------------------------------

    pub(super) fn format_create_namespace(&mut self, create: &CreateNamespaceStatement) {
        self.write("CREATE ");
        self.write(rules::namespace_keyword(create.keyword));
        self.write(" ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write(&create.name.to_string());
        if let Some(comment) = &create.comment {
            self.newline();
            self.write("COMMENT ");
            self.write(comment);
        }
        if let Some(location) = &create.location {
            self.newline();
            self.write("LOCATION ");
            self.write(location);
        }
        if !create.properties.is_empty() {
            self.newline();
            let prefix = if create.db_properties {
                "WITH DBPROPERTIES "
            } else {
                "WITH PROPERTIES "
            };
            self.format_properties(prefix, &create.properties);
        }
    }

    pub(super) fn format_alter_namespace(&mut self, alter: &AlterNamespaceStatement) {
        self.write("ALTER ");
        self.write(rules::namespace_keyword(alter.keyword));
        self.write(" ");
        self.write(&alter.name.to_string());
        match &alter.action {
            AlterNamespaceAction::SetProperties {
                db_properties,
                properties,
            } => {
                let prefix = if *db_properties {
                    " SET DBPROPERTIES "
                } else {
                    " SET PROPERTIES "
                };
                self.format_properties(prefix, properties);
            }
            AlterNamespaceAction::SetLocation(location) => {
                self.write(" SET LOCATION ");
                self.write(location);
            }
        }
    }

    pub(super) fn format_drop_namespace(&mut self, drop: &DropNamespaceStatement) {
        self.write("DROP ");
        self.write(rules::namespace_keyword(drop.keyword));
        self.write(" ");
        if drop.if_exists {
            self.write("IF EXISTS ");
        }
        self.write(&drop.name.to_string());
        if let Some(behavior) = drop.behavior {
            self.write(" ");
            self.write(rules::drop_behavior(behavior));
        }
    }

    // -------------------------------------------------------------------------
    // Functions and indexes
    // -------------------------------------------------------------------------

    pub(super) fn format_create_function(&mut self, create: &CreateFunctionStatement) {
        self.write("CREATE ");
        if create.or_replace {
            self.write("OR REPLACE ");
        }
        if create.temporary {
            self.write("TEMPORARY ");
        }
        self.write("FUNCTION ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write(&create.name.to_string());
        self.write(" AS ");
        self.write(&create.class_name);
        if !create.resources.is_empty() {
            self.write(" USING");
            self.write_lines(&create.resources, |f, resource| {
                f.write(rules::resource_kind(resource.kind));
                f.write(" ");
                f.write(&resource.uri);
            });
        }
    }

    pub(super) fn format_drop_function(&mut self, drop: &DropFunctionStatement) {
        self.write("DROP ");
        if drop.temporary {
            self.write("TEMPORARY ");
        }
        self.write("FUNCTION ");
        if drop.if_exists {
            self.write("IF EXISTS ");
        }
        self.write(&drop.name.to_string());
    }

    pub(super) fn format_create_index(&mut self, create: &CreateIndexStatement) {
        self.write("CREATE INDEX ");
        if create.if_not_exists {
            self.write("IF NOT EXISTS ");
        }
        self.write(&create.name.to_string());
        self.write(if create.table_keyword { " ON TABLE " } else { " ON " });
        self.write(&create.table.to_string());

        self.newline();
        if let Some(index_type) = &create.index_type {
            self.write("USING ");
            self.write(&index_type.to_string());
            self.write(" ");
        }
        match create.columns.as_slice() {
            [column] if column.options.is_empty() => {
                self.write("(");
                self.write(&column.name.to_string());
                self.write(")");
            }
            columns => self.write_block(columns, |f, column| {
                f.write(&column.name.to_string());
                if !column.options.is_empty() {
                    f.write(" OPTIONS (");
                    f.write_separated(&column.options, ", ", |f, option| f.format_property(option));
                    f.write(")");
                }
            }),
        }

        if !create.options.is_empty() {
            self.newline();
            self.format_properties("OPTIONS ", &create.options);
        }
    }

    pub(super) fn format_drop_index(&mut self, drop: &DropIndexStatement) {
        self.write("DROP INDEX ");
        if drop.if_exists {
            self.write("IF EXISTS ");
        }
        self.write(&drop.name.to_string());
        self.write(if drop.table_keyword { " ON TABLE " } else { " ON " });
        self.write(&drop.table.to_string());
    }

    // -------------------------------------------------------------------------
    // Maintenance
    // -------------------------------------------------------------------------

    pub(super) fn format_truncate(&mut self, truncate: &TruncateStatement) {
        self.write("TRUNCATE TABLE ");
        self.write(&truncate.table.to_string());
        self.format_optional_partition(&truncate.partition);
    }

    pub(super) fn format_repair_table(&mut self, repair: &RepairTableStatement) {
        if repair.msck {
            self.write("MSCK ");
        }
        self.write("REPAIR TABLE ");
        self.write(&repair.table.to_string());
        if let Some(option) = repair.option {
            self.write(" ");
            self.write(rules::repair_option(option));
        }
    }

    pub(super) fn format_analyze(&mut self, analyze: &AnalyzeStatement) {
        self.write("ANALYZE TABLE ");
        self.write(&analyze.table.to_string());
        self.format_optional_partition(&analyze.partition);
        self.write(" COMPUTE STATISTICS");
        match &analyze.target {
            AnalyzeTarget::Table => {}
            AnalyzeTarget::NoScan => self.write(" NOSCAN"),
            AnalyzeTarget::Columns(columns) => {
                self.write(" FOR COLUMNS ");
                self.write_names(columns);
            }
            AnalyzeTarget::AllColumns => self.write(" FOR ALL COLUMNS"),
        }
    }

    pub(super) fn format_analyze_tables(&mut self, analyze: &AnalyzeTablesStatement) {
        self.write("ANALYZE TABLES");
        self.format_scope(analyze.scope.as_ref());
        self.write(" COMPUTE STATISTICS");
        if analyze.noscan {
            self.write(" NOSCAN");
        }
    }

    pub(super) fn format_comment_on(&mut self, comment: &CommentOnStatement) {
        self.write("COMMENT ON ");
        match comment.target {
            CommentTarget::Namespace(keyword) => self.write(rules::namespace_keyword(keyword)),
            CommentTarget::Table => self.write("TABLE"),
        }
        self.write(" ");
        self.write(&comment.name.to_string());
        self.write(" IS ");
        match &comment.comment {
            Some(text) => self.write(text),
            None => self.write("NULL"),
        }
    }
}
