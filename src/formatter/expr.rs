//! Expression rendering

use super::{rules, Formatter};
use crate::ast::*;

impl Formatter<'_> {
    /// Render a boolean condition, breaking a top-level AND/OR chain so each
    /// operand after the first starts a new line prefixed by its connective
    pub(super) fn format_condition(&mut self, expr: &Expr) {
        let mut parts = Vec::new();
        collect_and_or_parts(expr, None, &mut parts);

        for (i, (op, part)) in parts.into_iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            if let Some(op) = op {
                self.write(rules::binary_operator(op));
                self.write(" ");
            }
            self.format_expr(part);
        }
    }

    pub(super) fn format_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(ident) => self.write(&ident.to_string()),
            Expr::CompoundIdentifier(parts) => {
                self.write_separated(parts, ".", |f, part| f.write(&part.to_string()));
            }
            Expr::Wildcard => self.write("*"),
            Expr::QualifiedWildcard(name) => {
                self.write(&name.to_string());
                self.write(".*");
            }
            Expr::Literal(literal) => self.format_literal(literal),
            Expr::TypedLiteral { data_type, value } => {
                self.write(data_type);
                // hex literals are a single token: X'1F'
                if data_type != "X" {
                    self.write(" ");
                }
                self.write(value);
            }
            Expr::Interval(interval) => self.format_interval(interval),
            Expr::UnaryOp { op, expr } => {
                self.write(rules::unary_operator(*op));
                // `--` would start a comment
                if *op == UnaryOperator::Minus
                    && matches!(
                        expr.as_ref(),
                        Expr::UnaryOp {
                            op: UnaryOperator::Minus,
                            ..
                        }
                    )
                {
                    self.write(" ");
                }
                self.format_expr(expr);
            }
            Expr::BinaryOp { left, op, right } => {
                self.format_expr(left);
                self.write(" ");
                self.write(rules::binary_operator(*op));
                self.write(" ");
                self.format_expr(right);
            }
            Expr::Between {
                expr,
                negated,
                low,
                high,
            } => {
                self.format_expr(expr);
                self.write(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                self.format_expr(low);
                self.write(" AND ");
                self.format_expr(high);
            }
            Expr::InList {
                expr,
                negated,
                list,
            } => {
                self.format_expr(expr);
                self.write(if *negated { " NOT IN (" } else { " IN (" });
                self.write_separated(list, ", ", |f, item| f.format_expr(item));
                self.write(")");
            }
            Expr::InSubquery {
                expr,
                negated,
                subquery,
            } => {
                self.format_expr(expr);
                self.write(if *negated { " NOT IN " } else { " IN " });
                self.format_parenthesized_query(subquery);
            }
            Expr::Like {
                expr,
                negated,
                op,
                pattern,
                escape,
            } => {
                self.format_expr(expr);
                self.write(if *negated { " NOT " } else { " " });
                self.write(rules::like_operator(*op));
                self.write(" ");
                self.format_expr(pattern);
                self.write_string_opt(" ESCAPE ", escape);
            }
            Expr::Is {
                expr,
                negated,
                test,
            } => {
                self.format_expr(expr);
                self.write(if *negated { " IS NOT " } else { " IS " });
                self.write(rules::is_test(*test));
            }
            Expr::IsDistinctFrom {
                expr,
                negated,
                other,
            } => {
                self.format_expr(expr);
                self.write(if *negated {
                    " IS NOT DISTINCT FROM "
                } else {
                    " IS DISTINCT FROM "
                });
                self.format_expr(other);
            }
            Expr::Function(function) => self.format_function(function),
            Expr::Case(case) => self.format_case(case),
            Expr::Cast {
                expr,
                data_type,
                try_cast,
                shorthand,
            } => {
                if *shorthand {
                    self.format_expr(expr);
                    self.write("::");
                    self.format_data_type(data_type);
                } else {
                    self.write(if *try_cast { "try_cast(" } else { "cast(" });
                    self.format_expr(expr);
                    self.write(" AS ");
                    self.format_data_type(data_type);
                    self.write(")");
                }
            }
            Expr::Extract { field, expr } => {
                self.write("extract(");
                self.write(field);
                self.write(" FROM ");
                self.format_expr(expr);
                self.write(")");
            }
            Expr::Substring {
                name,
                expr,
                position,
                length,
                keyword_form,
            } => {
                self.write(name);
                self.write("(");
                self.format_expr(expr);
                self.write(if *keyword_form { " FROM " } else { ", " });
                self.format_expr(position);
                if let Some(length) = length {
                    self.write(if *keyword_form { " FOR " } else { ", " });
                    self.format_expr(length);
                }
                self.write(")");
            }
            Expr::Trim {
                side,
                characters,
                expr,
            } => {
                self.write("trim(");
                if let Some(side) = side {
                    self.write(rules::trim_side(*side));
                    self.write(" ");
                }
                if let Some(characters) = characters {
                    self.format_expr(characters);
                    self.write(" ");
                }
                if side.is_some() || characters.is_some() {
                    self.write("FROM ");
                }
                self.format_expr(expr);
                self.write(")");
            }
            Expr::Position { needle, haystack } => {
                self.write("position(");
                self.format_expr(needle);
                self.write(" IN ");
                self.format_expr(haystack);
                self.write(")");
            }
            Expr::Overlay {
                expr,
                placing,
                from,
                length,
            } => {
                self.write("overlay(");
                self.format_expr(expr);
                self.write(" PLACING ");
                self.format_expr(placing);
                self.write(" FROM ");
                self.format_expr(from);
                if let Some(length) = length {
                    self.write(" FOR ");
                    self.format_expr(length);
                }
                self.write(")");
            }
            Expr::FirstLast {
                last,
                expr,
                ignore_nulls,
            } => {
                self.write(if *last { "last(" } else { "first(" });
                self.format_expr(expr);
                if *ignore_nulls {
                    self.write(" IGNORE NULLS");
                }
                self.write(")");
            }
            Expr::DatetimeArith { name, unit, args } => {
                self.write(name);
                self.write("(");
                self.write(unit);
                for arg in args {
                    self.write(", ");
                    self.format_expr(arg);
                }
                self.write(")");
            }
            Expr::CurrentLike(name) => self.write(name),
            Expr::Struct(fields) => {
                self.write("STRUCT(");
                self.write_separated(fields, ", ", |f, field| f.format_select_item(field));
                self.write(")");
            }
            Expr::Exists(query) => {
                self.write("EXISTS ");
                self.format_parenthesized_query(query);
            }
            Expr::Subquery(query) => self.format_parenthesized_query(query),
            Expr::Row(items) => {
                self.write("(");
                self.write_separated(items, ", ", |f, item| f.format_select_item(item));
                self.write(")");
            }
            Expr::Parenthesized(inner) => {
                self.write("(");
                self.format_expr(inner);
                self.write(")");
            }
            Expr::Lambda {
                params,
                parenthesized,
                body,
            } => {
                if *parenthesized {
                    self.write("(");
                    self.write_idents(params);
                    self.write(")");
                } else {
                    self.write_idents(params);
                }
                self.write(" -> ");
                self.format_expr(body);
            }
            Expr::Subscript { expr, index } => {
                self.format_expr(expr);
                self.write("[");
                self.format_expr(index);
                self.write("]");
            }
            Expr::FieldAccess { expr, field } => {
                self.format_expr(expr);
                self.write(".");
                self.write(&field.to_string());
            }
        }
    }

    fn format_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.write("NULL"),
            Literal::Boolean(true) => self.write("TRUE"),
            Literal::Boolean(false) => self.write("FALSE"),
            Literal::Number(n) => self.write(n),
            Literal::String(pieces) => {
                self.write_separated(pieces, " ", |f, piece| f.write(piece));
            }
        }
    }

    fn format_interval(&mut self, interval: &IntervalLiteral) {
        self.write("INTERVAL");
        for part in &interval.parts {
            self.write(" ");
            self.write(&part.value);
            self.write_string_opt(" ", &part.unit);
        }
        self.write_string_opt(" TO ", &interval.to);
    }

    pub(super) fn format_function_arg(&mut self, arg: &FunctionArg) {
        match arg {
            FunctionArg::Unnamed(expr) => self.format_expr(expr),
            FunctionArg::Named { name, value } => {
                self.write(&name.to_string());
                self.write(" => ");
                self.format_expr(value);
            }
        }
    }

    fn format_function(&mut self, function: &Function) {
        self.write(&function.name.to_string());
        self.write("(");
        if let Some(quantifier) = function.quantifier {
            self.write(rules::set_quantifier(quantifier));
            self.write(" ");
        }
        self.write_separated(&function.args, ", ", |f, arg| f.format_function_arg(arg));
        self.write(")");

        if !function.within_group.is_empty() {
            self.write(" WITHIN GROUP (ORDER BY ");
            self.write_separated(&function.within_group, ", ", |f, item| {
                f.format_order_by_item(item)
            });
            self.write(")");
        }

        if let Some(filter) = &function.filter {
            self.write(" FILTER (");
            self.nested(|f| {
                f.newline();
                f.format_condition_clause("WHERE", filter);
            });
            self.newline();
            self.write(")");
        }

        if let Some(treatment) = function.null_treatment {
            self.write(" ");
            self.write(rules::null_treatment(treatment));
        }

        if let Some(over) = &function.over {
            self.write(" OVER ");
            self.format_window_spec(over);
        }
    }

    fn format_case(&mut self, case: &CaseExpression) {
        self.write("CASE");
        if let Some(operand) = &case.operand {
            self.write(" ");
            self.format_expr(operand);
        }
        self.nested(|f| {
            for when in &case.when_clauses {
                f.newline();
                f.write("WHEN ");
                f.format_expr(&when.condition);
                f.write(" THEN ");
                f.format_expr(&when.result);
            }
        });
        self.newline();
        if let Some(else_clause) = &case.else_clause {
            self.write("ELSE ");
            self.format_expr(else_clause);
            self.write(" ");
        }
        self.write("END");
    }

    pub(super) fn format_window_spec(&mut self, spec: &WindowSpec) {
        match spec {
            WindowSpec::Named(name) => self.write(&name.to_string()),
            WindowSpec::NamedParenthesized(name) => {
                self.write("(");
                self.write(&name.to_string());
                self.write(")");
            }
            WindowSpec::Inline(definition) => self.format_window_definition(definition),
        }
    }

    fn format_window_definition(&mut self, definition: &WindowDefinition) {
        self.write("(");
        let mut sep = "";
        if !definition.partition_by.is_empty() {
            self.write(if definition.distribute {
                "DISTRIBUTE BY "
            } else {
                "PARTITION BY "
            });
            self.write_separated(&definition.partition_by, ", ", |f, expr| f.format_expr(expr));
            sep = " ";
        }
        if !definition.order_by.is_empty() {
            self.write(sep);
            self.write(if definition.sort { "SORT BY " } else { "ORDER BY " });
            self.write_separated(&definition.order_by, ", ", |f, item| {
                f.format_order_by_item(item)
            });
            sep = " ";
        }
        if !definition.cluster_by.is_empty() {
            self.write(sep);
            self.write("CLUSTER BY ");
            self.write_separated(&definition.cluster_by, ", ", |f, expr| f.format_expr(expr));
        }
        if let Some(frame) = &definition.frame {
            self.nested(|f| {
                f.newline();
                f.format_window_frame(frame);
            });
            self.newline();
        }
        self.write(")");
    }

    fn format_window_frame(&mut self, frame: &WindowFrame) {
        self.write(rules::frame_unit(frame.unit));
        self.write(" ");
        match &frame.end {
            Some(end) => {
                self.write("BETWEEN ");
                self.format_frame_bound(&frame.start);
                self.write(" AND ");
                self.format_frame_bound(end);
            }
            None => self.format_frame_bound(&frame.start),
        }
    }

    fn format_frame_bound(&mut self, bound: &WindowFrameBound) {
        match bound {
            WindowFrameBound::CurrentRow => self.write("CURRENT ROW"),
            WindowFrameBound::UnboundedPreceding => self.write("UNBOUNDED PRECEDING"),
            WindowFrameBound::UnboundedFollowing => self.write("UNBOUNDED FOLLOWING"),
            WindowFrameBound::Preceding(expr) => {
                self.format_expr(expr);
                self.write(" PRECEDING");
            }
            WindowFrameBound::Following(expr) => {
                self.format_expr(expr);
                self.write(" FOLLOWING");
            }
        }
    }

    pub(super) fn format_data_type(&mut self, data_type: &DataType) {
        match data_type {
            DataType::Primitive { name, params } => {
                self.write(name);
                if !params.is_empty() {
                    self.write("(");
                    self.write_separated(params, ", ", |f, param| f.write(param));
                    self.write(")");
                }
            }
            DataType::Array { keyword, element } => {
                self.write(keyword);
                self.write("<");
                self.format_data_type(element);
                self.write(">");
            }
            DataType::Map {
                keyword,
                key,
                value,
            } => {
                self.write(keyword);
                self.write("<");
                self.format_data_type(key);
                self.write(", ");
                self.format_data_type(value);
                self.write(">");
            }
            DataType::Struct { keyword, fields } => {
                self.write(keyword);
                self.write("<");
                self.write_separated(fields, ", ", |f, field| f.format_struct_field(field));
                self.write(">");
            }
            DataType::Interval { from, to } => {
                self.write("INTERVAL ");
                self.write(from);
                self.write_string_opt(" TO ", to);
            }
        }
    }

    fn format_struct_field(&mut self, field: &StructField) {
        self.write(&field.name.to_string());
        self.write(if field.colon { ": " } else { " " });
        self.format_data_type(&field.data_type);
        if field.not_null {
            self.write(" NOT NULL");
        }
        self.write_string_opt(" COMMENT ", &field.comment);
    }
}

/// Flatten an AND/OR chain into `(connective, operand)` pairs. The first
/// operand has no connective. Parenthesized groups stay whole.
fn collect_and_or_parts<'a>(
    expr: &'a Expr,
    leading: Option<BinaryOperator>,
    parts: &mut Vec<(Option<BinaryOperator>, &'a Expr)>,
) {
    match expr {
        Expr::BinaryOp {
            left,
            op: op @ (BinaryOperator::And | BinaryOperator::Or),
            right,
        } => {
            collect_and_or_parts(left, leading, parts);
            collect_and_or_parts(right, Some(*op), parts);
        }
        _ => parts.push((leading, expr)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expr {
        Expr::Identifier(Ident::new(name))
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    #[test]
    fn and_or_chain_keeps_connectives() {
        // a AND b OR c
        let expr = binary(
            binary(ident("a"), BinaryOperator::And, ident("b")),
            BinaryOperator::Or,
            ident("c"),
        );
        let mut parts = Vec::new();
        collect_and_or_parts(&expr, None, &mut parts);
        let ops: Vec<_> = parts.iter().map(|(op, _)| *op).collect();
        assert_eq!(
            ops,
            vec![None, Some(BinaryOperator::And), Some(BinaryOperator::Or)]
        );
    }

    #[test]
    fn parenthesized_group_is_one_part() {
        let expr = binary(
            ident("a"),
            BinaryOperator::And,
            Expr::Parenthesized(Box::new(binary(ident("b"), BinaryOperator::Or, ident("c")))),
        );
        let mut parts = Vec::new();
        collect_and_or_parts(&expr, None, &mut parts);
        assert_eq!(parts.len(), 2);
    }
}
