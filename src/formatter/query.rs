//! Query rendering: CTEs, set operations, SELECT and its clauses

use super::{rules, Formatter};
use crate::ast::*;

impl Formatter<'_> {
    pub(super) fn format_query(&mut self, query: &Query) {
        if let Some(with) = &query.with {
            self.format_with_clause(with);
            self.newline();
        }
        self.format_query_body(&query.body);
        self.format_organization(&query.organization);
    }

    pub(super) fn format_with_clause(&mut self, with: &WithClause) {
        self.write("WITH ");
        for (i, cte) in with.ctes.iter().enumerate() {
            if i > 0 {
                self.write(",");
                self.newline();
            }
            self.write(&cte.name.to_string());
            if !cte.columns.is_empty() {
                self.write("(");
                self.write_idents(&cte.columns);
                self.write(")");
            }
            self.write(" AS ");
            self.format_parenthesized_query(&cte.query);
        }
    }

    /// `(`, the query one level deeper, `)` back at the current depth
    pub(super) fn format_parenthesized_query(&mut self, query: &Query) {
        self.write("(");
        self.nested(|f| {
            f.newline();
            f.format_query(query);
        });
        self.newline();
        self.write(")");
    }

    fn format_query_body(&mut self, body: &QueryBody) {
        match body {
            QueryBody::Select(select) => self.format_select(select),
            QueryBody::SetOperation {
                left,
                op,
                quantifier,
                right,
            } => {
                self.format_query_body(left);
                self.newline();
                self.write(rules::set_operator(*op));
                if let Some(quantifier) = quantifier {
                    self.write(" ");
                    self.write(rules::set_quantifier(*quantifier));
                }
                self.newline();
                self.format_query_body(right);
            }
            QueryBody::Nested(query) => self.format_parenthesized_query(query),
            QueryBody::Values { values, alias } => {
                self.format_values(values);
                self.format_table_alias(alias);
            }
            QueryBody::Table(name) => {
                self.write("TABLE ");
                self.write(&name.to_string());
            }
            QueryBody::From(from_query) => {
                self.format_from_clause(&from_query.from);
                for body in &from_query.bodies {
                    self.newline();
                    self.format_select(&body.select);
                    self.format_organization(&body.organization);
                }
            }
        }
    }

    /// `VALUES` then one row per line, one level below the line it starts on
    pub(super) fn format_values(&mut self, values: &ValuesClause) {
        self.write("VALUES");
        self.at_line_depth(|f| f.write_lines(&values.rows, |f, row| f.format_expr(row)));
    }

    pub(super) fn format_select(&mut self, select: &SelectBody) {
        self.write("SELECT");
        for hint in &select.hints {
            self.write(" /*+ ");
            self.write_separated(&hint.functions, ", ", |f, function| {
                f.write(&function.name.to_string());
                if let Some(args) = &function.args {
                    f.write("(");
                    f.write_separated(args, ", ", |f, arg| f.format_expr(arg));
                    f.write(")");
                }
            });
            self.write(" */");
        }
        if let Some(quantifier) = select.quantifier {
            self.write(" ");
            self.write(rules::set_quantifier(quantifier));
        }
        self.write_list("", &select.items, |f, item| f.format_select_item(item));

        if let Some(from) = &select.from {
            self.newline();
            self.format_from_clause(from);
        }

        if let Some(condition) = &select.where_clause {
            self.newline();
            self.format_condition_clause("WHERE", condition);
        }

        if let Some(group_by) = &select.group_by {
            self.newline();
            self.format_group_by(group_by);
        }

        if let Some(condition) = &select.having {
            self.newline();
            self.format_condition_clause("HAVING", condition);
        }

        if !select.windows.is_empty() {
            self.newline();
            self.write("WINDOW ");
            for (i, window) in select.windows.iter().enumerate() {
                if i == 0 {
                    self.format_named_window(window);
                } else {
                    self.write(",");
                    self.nested(|f| {
                        f.newline();
                        f.format_named_window(window);
                    });
                }
            }
        }
    }

    fn format_named_window(&mut self, window: &NamedWindow) {
        self.write(&window.name.to_string());
        self.write(" AS ");
        self.format_window_spec(&window.spec);
    }

    pub(super) fn format_select_item(&mut self, item: &SelectItem) {
        self.format_expr(&item.expr);
        if let Some(alias) = &item.alias {
            self.format_alias(alias);
        }
    }

    fn format_alias(&mut self, alias: &Alias) {
        self.write(if alias.explicit_as { " AS " } else { " " });
        match &alias.name {
            AliasName::Single(name) => self.write(&name.to_string()),
            AliasName::Multi(names) => {
                self.write("(");
                self.write_idents(names);
                self.write(")");
            }
        }
    }

    /// `WHERE` / `HAVING` keyword with the condition one level deeper
    pub(super) fn format_condition_clause(&mut self, keyword: &str, condition: &Expr) {
        self.write(keyword);
        self.nested(|f| {
            f.newline();
            f.format_condition(condition);
        });
    }

    // -------------------------------------------------------------------------
    // FROM
    // -------------------------------------------------------------------------

    pub(super) fn format_from_clause(&mut self, from: &FromClause) {
        self.write_clause("FROM", &from.relations, |f, relation| f.format_relation(relation));

        if !from.lateral_views.is_empty() || from.pivot.is_some() {
            self.nested(|f| {
                for view in &from.lateral_views {
                    f.newline();
                    f.format_lateral_view(view);
                }
                if let Some(pivot) = &from.pivot {
                    f.newline();
                    f.format_pivot(pivot);
                }
            });
        }
    }

    fn format_relation(&mut self, relation: &Relation) {
        self.format_table_factor(&relation.primary);
        for join in &relation.joins {
            self.newline();
            self.format_join(join);
        }
    }

    fn format_join(&mut self, join: &JoinClause) {
        if join.natural {
            self.write("NATURAL ");
        }
        self.write(rules::join_type(join.join_type));
        self.write(" ");
        self.format_table_factor(&join.relation);
        match &join.constraint {
            Some(JoinConstraint::On(condition)) => {
                self.write(" ON ");
                self.nested(|f| f.format_condition(condition));
            }
            Some(JoinConstraint::Using(columns)) => {
                self.write(" USING (");
                self.write_idents(columns);
                self.write(")");
            }
            None => {}
        }
    }

    pub(super) fn format_table_factor(&mut self, factor: &TableFactor) {
        match factor {
            TableFactor::Table {
                name,
                sample,
                alias,
            } => {
                self.write(&name.to_string());
                self.format_table_sample(sample);
                self.format_table_alias(alias);
            }
            TableFactor::Derived {
                query,
                sample,
                alias,
            } => {
                self.format_parenthesized_query(query);
                self.format_table_sample(sample);
                self.format_table_alias(alias);
            }
            TableFactor::Values { values, alias } => {
                self.format_values(values);
                self.format_table_alias(alias);
            }
            TableFactor::Function { name, args, alias } => {
                self.write(&name.to_string());
                self.write("(");
                self.write_separated(args, ", ", |f, arg| f.format_function_arg(arg));
                self.write(")");
                self.format_table_alias(alias);
            }
            TableFactor::Nested { relation, alias } => {
                self.write("(");
                self.nested(|f| {
                    f.newline();
                    f.format_relation(relation);
                });
                self.newline();
                self.write(")");
                self.format_table_alias(alias);
            }
        }
    }

    pub(super) fn format_table_alias(&mut self, alias: &Option<TableAlias>) {
        let Some(alias) = alias else {
            return;
        };
        self.write(if alias.explicit_as { " AS " } else { " " });
        self.write(&alias.name.to_string());
        if !alias.columns.is_empty() {
            self.write("(");
            self.write_idents(&alias.columns);
            self.write(")");
        }
    }

    fn format_table_sample(&mut self, sample: &Option<TableSample>) {
        let Some(sample) = sample else {
            return;
        };
        self.write(" TABLESAMPLE (");
        match sample {
            TableSample::Percent(expr) => {
                self.format_expr(expr);
                self.write(" PERCENT");
            }
            TableSample::Rows(expr) => {
                self.format_expr(expr);
                self.write(" ROWS");
            }
            TableSample::Bucket {
                numerator,
                denominator,
                on,
            } => {
                self.write("BUCKET ");
                self.write(numerator);
                self.write(" OUT OF ");
                self.write(denominator);
                if let Some(on) = on {
                    self.write(" ON ");
                    self.format_expr(on);
                }
            }
        }
        self.write(")");
    }

    fn format_lateral_view(&mut self, view: &LateralView) {
        self.write("LATERAL VIEW ");
        if view.outer {
            self.write("OUTER ");
        }
        self.write(&view.function.to_string());
        self.write("(");
        if !view.args.is_empty() {
            self.write_lines(&view.args, |f, arg| f.format_expr(arg));
            self.newline();
        }
        self.write(")");
        if let Some(table) = &view.table_alias {
            self.write(" ");
            self.write(&table.to_string());
        }
        if view.explicit_as {
            self.write(" AS");
        }
        if !view.columns.is_empty() {
            self.write(" ");
            self.write_idents(&view.columns);
        }
    }

    fn format_pivot(&mut self, pivot: &PivotClause) {
        self.write("PIVOT (");
        self.nested(|f| {
            for (i, aggregate) in pivot.aggregates.iter().enumerate() {
                f.newline();
                f.format_select_item(aggregate);
                if i + 1 < pivot.aggregates.len() {
                    f.write(",");
                }
            }
            f.newline();
            f.write("FOR ");
            if let [column] = pivot.columns.as_slice() {
                f.write(&column.to_string());
            } else {
                f.write("(");
                f.write_names(&pivot.columns);
                f.write(")");
            }
            f.write(" IN (");
            f.write_separated(&pivot.values, ", ", |f, value| f.format_select_item(value));
            f.write(")");
        });
        self.newline();
        self.write(")");
    }

    // -------------------------------------------------------------------------
    // GROUP BY and trailing clauses
    // -------------------------------------------------------------------------

    fn format_group_by(&mut self, group_by: &GroupByClause) {
        self.write_clause("GROUP BY", &group_by.items, |f, item| match item {
            GroupingItem::Expr(expr) => f.format_expr(expr),
            GroupingItem::Analytics { kind, elements } => {
                f.write(rules::grouping_kind(*kind));
                f.write(" ");
                f.write_block(elements, |f, element| match element {
                    GroupingElement::Set(exprs) => {
                        f.write("(");
                        f.write_separated(exprs, ", ", |f, expr| f.format_expr(expr));
                        f.write(")");
                    }
                    GroupingElement::Expr(expr) => f.format_expr(expr),
                });
            }
        });
        if let Some(modifier) = group_by.modifier {
            self.write(" WITH ");
            self.write(rules::grouping_kind(modifier));
        }
    }

    pub(super) fn format_organization(&mut self, organization: &QueryOrganization) {
        if !organization.order_by.is_empty() {
            self.newline();
            self.write_clause("ORDER BY", &organization.order_by, |f, item| {
                f.format_order_by_item(item)
            });
        }
        if !organization.cluster_by.is_empty() {
            self.newline();
            self.write_clause("CLUSTER BY", &organization.cluster_by, |f, expr| {
                f.format_expr(expr)
            });
        }
        if !organization.distribute_by.is_empty() {
            self.newline();
            self.write_clause("DISTRIBUTE BY", &organization.distribute_by, |f, expr| {
                f.format_expr(expr)
            });
        }
        if !organization.sort_by.is_empty() {
            self.newline();
            self.write_clause("SORT BY", &organization.sort_by, |f, item| {
                f.format_order_by_item(item)
            });
        }
        match &organization.limit {
            Some(Limit::All) => {
                self.newline();
                self.write("LIMIT ALL");
            }
            Some(Limit::Count(count)) => {
                self.newline();
                self.write("LIMIT ");
                self.format_expr(count);
            }
            None => {}
        }
        if let Some(offset) = &organization.offset {
            self.newline();
            self.write("OFFSET ");
            self.format_expr(offset);
        }
    }

    pub(super) fn format_order_by_item(&mut self, item: &OrderByItem) {
        self.format_expr(&item.expr);
        if let Some(direction) = item.direction {
            self.write(" ");
            self.write(rules::sort_direction(direction));
        }
        if let Some(nulls) = item.nulls {
            self.write(" ");
            self.write(rules::nulls_order(nulls));
        }
    }
}
