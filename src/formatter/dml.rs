//! DML rendering: INSERT, multi-insert, UPDATE, DELETE, MERGE

use super::{rules, Formatter};
use crate::ast::*;

impl Formatter<'_> {
    /// `PARTITION(k = v, k2)`
    pub(super) fn format_partition_spec(&mut self, spec: &PartitionSpec) {
        self.write("PARTITION(");
        self.write_separated(&spec.0, ", ", |f, value| {
            f.write(&value.name.to_string());
            if let Some(expr) = &value.value {
                f.write(" = ");
                f.format_expr(expr);
            }
        });
        self.write(")");
    }

    pub(super) fn format_optional_partition(&mut self, spec: &Option<PartitionSpec>) {
        if let Some(spec) = spec {
            self.write(" ");
            self.format_partition_spec(spec);
        }
    }

    fn format_insert_target(&mut self, target: &InsertTarget) {
        self.write(if target.overwrite {
            "INSERT OVERWRITE"
        } else {
            "INSERT INTO"
        });
        if target.table_keyword {
            self.write(" TABLE");
        }
        self.write(" ");
        self.write(&target.table.to_string());
        self.format_optional_partition(&target.partition);
        if target.if_not_exists {
            self.write(" IF NOT EXISTS");
        }
        if !target.columns.is_empty() {
            self.write(" (");
            self.write_idents(&target.columns);
            self.write(")");
        }
    }

    pub(super) fn format_insert(&mut self, insert: &InsertStatement) {
        if let Some(with) = &insert.with {
            self.format_with_clause(with);
            self.newline();
        }
        self.format_insert_target(&insert.target);

        let source = &insert.source;
        match &source.body {
            QueryBody::Table(_) if source.with.is_none() && source.organization.is_empty() => {
                self.write(" ");
            }
            _ => self.newline(),
        }
        self.format_query(source);
    }

    pub(super) fn format_multi_insert(&mut self, insert: &MultiInsertStatement) {
        if let Some(with) = &insert.with {
            self.format_with_clause(with);
            self.newline();
        }
        self.format_from_clause(&insert.from);
        for body in &insert.inserts {
            self.newline();
            self.format_insert_target(&body.target);
            self.newline();
            self.format_select(&body.select);
            self.format_organization(&body.organization);
        }
    }

    fn format_assignment(&mut self, assignment: &Assignment) {
        self.write(&assignment.target.to_string());
        self.write(" = ");
        self.format_expr(&assignment.value);
    }

    pub(super) fn format_update(&mut self, update: &UpdateStatement) {
        self.write("UPDATE ");
        self.write(&update.table.to_string());
        self.format_table_alias(&update.alias);
        self.write(" SET");
        self.write_lines(&update.assignments, |f, assignment| {
            f.format_assignment(assignment)
        });
        if let Some(condition) = &update.where_clause {
            self.newline();
            self.format_condition_clause("WHERE", condition);
        }
    }

    pub(super) fn format_delete(&mut self, delete: &DeleteStatement) {
        self.write("DELETE FROM ");
        self.write(&delete.table.to_string());
        self.format_table_alias(&delete.alias);
        if let Some(condition) = &delete.where_clause {
            self.newline();
            self.format_condition_clause("WHERE", condition);
        }
    }

    pub(super) fn format_merge(&mut self, merge: &MergeStatement) {
        self.write("MERGE INTO ");
        self.write(&merge.target.to_string());
        self.format_table_alias(&merge.target_alias);

        self.newline();
        self.write("USING ");
        self.format_table_factor(&merge.source);

        self.newline();
        self.write("ON ");
        self.nested(|f| f.format_condition(&merge.condition));

        for clause in &merge.clauses {
            self.newline();
            self.write(rules::merge_clause_kind(clause.kind));
            if let Some(condition) = &clause.condition {
                self.write(" AND ");
                self.format_expr(condition);
            }
            self.write(" THEN");
            self.nested(|f| {
                f.newline();
                f.format_merge_action(&clause.action);
            });
        }
    }

    fn format_merge_action(&mut self, action: &MergeAction) {
        match action {
            MergeAction::UpdateAll => self.write("UPDATE SET *"),
            MergeAction::Update(assignments) => {
                self.write("UPDATE SET");
                self.write_lines(assignments, |f, assignment| f.format_assignment(assignment));
            }
            MergeAction::Delete => self.write("DELETE"),
            MergeAction::InsertAll => self.write("INSERT *"),
            MergeAction::Insert { columns, values } => {
                self.write("INSERT (");
                self.write_idents(columns);
                self.write(") VALUES (");
                self.write_separated(values, ", ", |f, value| f.format_expr(value));
                self.write(")");
            }
        }
    }
}
