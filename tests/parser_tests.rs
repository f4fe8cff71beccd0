//! Parser tests for sparkfmt
//!
//! Tests for the syntax tree produced from SQL text.

use pretty_assertions::assert_eq;
use sparkfmt::ast::*;
use sparkfmt::parser::parse;

fn parse_ok(input: &str) -> Statement {
    parse(input).expect("should parse")
}

/// The SELECT body of a plain query
fn select_of(input: &str) -> SelectBody {
    match parse_ok(input) {
        Statement::Query(query) => match query.body {
            QueryBody::Select(select) => *select,
            other => panic!("expected select body, got {:?}", other),
        },
        other => panic!("expected query, got {:?}", other),
    }
}

/// First select item expression
fn first_expr(input: &str) -> Expr {
    select_of(input).items.remove(0).expr
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

fn number(n: &str) -> Expr {
    Expr::Literal(Literal::Number(n.to_string()))
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn statement_kinds() {
        let cases = [
            ("select 1", "query"),
            ("insert into t select 1", "insert"),
            ("from s insert into t select a", "multi_insert"),
            ("update t set a = 1", "update"),
            ("delete from t", "delete"),
            ("merge into t using s on t.id = s.id when matched then delete", "merge"),
            ("create table t (a int)", "create_table"),
            ("create view v as select 1", "create_view"),
            ("create temporary view v using csv", "create_temp_view_using"),
            ("alter table t rename to u", "alter_table"),
            ("drop table t", "drop"),
            ("create database d", "create_namespace"),
            ("drop schema d", "drop_namespace"),
            ("create function f as 'x'", "create_function"),
            ("truncate table t", "truncate"),
            ("msck repair table t", "repair_table"),
            ("analyze table t compute statistics", "analyze"),
            ("use db", "use"),
            ("set a = b", "set"),
            ("show tables", "show"),
            ("describe t", "describe"),
            ("explain select 1", "explain"),
            ("call p()", "call"),
            ("load data inpath 'x' into table t", "load_data"),
            ("load data 'x' table t", "load_file"),
            ("export table t to 'f'", "export_table"),
            ("with c as (select 1) export table c to 'f'", "export_table"),
            ("datatunnel source('a') options() sink('b') options()", "datatunnel"),
            ("merge table t", "merge_file"),
        ];
        for (input, kind) in cases {
            assert_eq!(parse_ok(input).kind(), kind, "kind of {:?}", input);
        }
    }

    #[test]
    fn current_user_is_a_keyword_value() {
        let Statement::Query(query) = parse_ok("select current_user") else {
            panic!("expected query");
        };
        let QueryBody::Select(select) = query.body else {
            panic!("expected select");
        };
        assert_eq!(select.items[0].expr, Expr::CurrentLike("current_user".to_string()));
    }

    #[test]
    fn datatunnel_values_keep_their_text() {
        let Statement::DataTunnel(tunnel) =
            parse_ok("datatunnel source('s') options(cols = ['a', 1], n = -2) sink('k') options()")
        else {
            panic!("expected datatunnel");
        };
        assert_eq!(tunnel.source, "'s'");
        assert_eq!(tunnel.sink, "'k'");
        assert_eq!(
            tunnel.source_options[0].value,
            TunnelValue::List(vec![
                TunnelValue::Scalar("'a'".to_string()),
                TunnelValue::Scalar("1".to_string()),
            ])
        );
        assert_eq!(tunnel.source_options[1].value, TunnelValue::Scalar("-2".to_string()));
        assert!(tunnel.sink_options.is_empty());
    }

    #[test]
    fn load_file_remembers_table_keyword() {
        let Statement::LoadFile(load) = parse_ok("load data '/a.csv' table t") else {
            panic!("expected load file");
        };
        assert!(load.table_keyword);
        assert_eq!(load.table.to_string(), "t");
    }

    #[test]
    fn from_first_query() {
        let Statement::Query(query) = parse_ok("from t select a") else {
            panic!("expected query");
        };
        assert!(matches!(query.body, QueryBody::From(_)));
    }

    #[test]
    fn multi_insert_bodies() {
        let Statement::MultiInsert(insert) =
            parse_ok("from s insert into t1 select a insert overwrite table t2 select b")
        else {
            panic!("expected multi insert");
        };
        assert_eq!(insert.inserts.len(), 2);
        assert!(insert.inserts[1].target.overwrite);
        assert!(insert.inserts[1].target.table_keyword);
    }

    #[test]
    fn top_level_values_alias() {
        let Statement::Query(query) = parse_ok("values (1, 2) as t(a, b)") else {
            panic!("expected query");
        };
        let QueryBody::Values { values, alias } = query.body else {
            panic!("expected values body");
        };
        assert_eq!(values.rows.len(), 1);
        assert_eq!(
            alias,
            Some(TableAlias {
                explicit_as: true,
                name: Ident::new("t"),
                columns: vec![Ident::new("a"), Ident::new("b")],
            })
        );
    }

    #[test]
    fn leading_and_trailing_semicolons() {
        assert!(matches!(parse(";; select 1 ;;"), Ok(Statement::Query(_))));
    }
}

mod select {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn implicit_alias() {
        let select = select_of("select a b from t");
        let alias = select.items[0].alias.as_ref().expect("alias");
        assert!(!alias.explicit_as);
        assert_eq!(alias.name, AliasName::Single(Ident::new("b")));
    }

    #[test]
    fn keyword_like_word_as_column() {
        assert_eq!(first_expr("select date from t"), ident("date"));
    }

    #[test]
    fn quoted_identifier() {
        assert_eq!(
            first_expr("select `my col` from t"),
            Expr::Identifier(Ident::quoted("my col"))
        );
    }

    #[test]
    fn qualified_wildcard() {
        assert_eq!(
            first_expr("select t.* from t"),
            Expr::QualifiedWildcard(ObjectName(vec![Ident::new("t")]))
        );
    }

    #[test]
    fn join_types() {
        let select = select_of(
            "select * from a left semi join b on a.x = b.x full outer join c using (k) natural join d",
        );
        let from = select.from.expect("from");
        let joins = &from.relations[0].joins;
        assert_eq!(joins[0].join_type, JoinType::Semi { left: true });
        assert_eq!(joins[1].join_type, JoinType::Full { outer: true });
        assert!(matches!(joins[1].constraint, Some(JoinConstraint::Using(_))));
        assert!(joins[2].natural);
        assert_eq!(joins[2].join_type, JoinType::Inner { explicit: false });
    }

    #[test]
    fn named_windows() {
        let select = select_of("select sum(x) over w from t window w as (partition by y)");
        assert_eq!(select.windows.len(), 1);
        let Expr::Function(function) = &select.items[0].expr else {
            panic!("expected function");
        };
        assert_eq!(function.over, Some(WindowSpec::Named(Ident::new("w"))));
    }

    #[test]
    fn lateral_view_parts() {
        let select = select_of("select c from t lateral view outer explode(xs) e as c");
        let from = select.from.expect("from");
        let view = &from.lateral_views[0];
        assert!(view.outer);
        assert_eq!(view.table_alias, Some(Ident::new("e")));
        assert!(view.explicit_as);
        assert_eq!(view.columns, vec![Ident::new("c")]);
    }

    #[test]
    fn hints_attach_to_select() {
        let select = select_of("select /*+ BROADCAST(t), COALESCE(3) */ a from t");
        assert_eq!(select.hints[0].functions.len(), 2);
    }

    #[test]
    fn limit_all() {
        let Statement::Query(query) = parse_ok("select a from t limit all") else {
            panic!("expected query");
        };
        assert_eq!(query.organization.limit, Some(Limit::All));
    }
}

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = first_expr("select 1 + 2 * 3");
        let Expr::BinaryOp { op, right, .. } = expr else {
            panic!("expected binary op");
        };
        assert_eq!(op, BinaryOperator::Plus);
        assert!(matches!(
            *right,
            Expr::BinaryOp {
                op: BinaryOperator::Multiply,
                ..
            }
        ));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = first_expr("select a or b and c");
        let Expr::BinaryOp { op, right, .. } = expr else {
            panic!("expected binary op");
        };
        assert_eq!(op, BinaryOperator::Or);
        assert!(matches!(
            *right,
            Expr::BinaryOp {
                op: BinaryOperator::And,
                ..
            }
        ));
    }

    #[test]
    fn bang_is_not() {
        assert_eq!(
            first_expr("select !a"),
            Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: Box::new(ident("a")),
            }
        );
    }

    #[test]
    fn row_versus_parenthesized() {
        assert!(matches!(first_expr("select (1, 2)"), Expr::Row(items) if items.len() == 2));
        assert_eq!(
            first_expr("select (1)"),
            Expr::Parenthesized(Box::new(number("1")))
        );
    }

    #[test]
    fn parenthesized_subquery_inside_arithmetic() {
        let Expr::Parenthesized(inner) = first_expr("select ((select 1) + 1)") else {
            panic!("expected parenthesized");
        };
        let Expr::BinaryOp { left, .. } = *inner else {
            panic!("expected binary op");
        };
        assert!(matches!(*left, Expr::Subquery(_)));
    }

    #[test]
    fn adjacent_strings_are_one_literal() {
        assert_eq!(
            first_expr("select 'a' 'b'"),
            Expr::Literal(Literal::String(vec!["'a'".into(), "'b'".into()]))
        );
    }

    #[test]
    fn typed_literal_prefix_is_uppercased() {
        assert_eq!(
            first_expr("select date '2024-01-01'"),
            Expr::TypedLiteral {
                data_type: "DATE".into(),
                value: "'2024-01-01'".into(),
            }
        );
    }

    #[test]
    fn nested_cast_type() {
        let Expr::Cast { data_type, .. } = first_expr("select cast(a as map<string, array<int>>)")
        else {
            panic!("expected cast");
        };
        assert!(matches!(data_type, DataType::Map { .. }));
    }

    #[test]
    fn lambda_parameters() {
        let Expr::Function(function) = first_expr("select aggregate(xs, 0, (acc, x) -> acc + x)")
        else {
            panic!("expected function");
        };
        let FunctionArg::Unnamed(Expr::Lambda { params, parenthesized, .. }) = &function.args[2]
        else {
            panic!("expected lambda");
        };
        assert!(*parenthesized);
        assert_eq!(params, &vec![Ident::new("acc"), Ident::new("x")]);
    }

    #[test]
    fn special_forms() {
        assert!(matches!(
            first_expr("select trim(both 'x' from y)"),
            Expr::Trim {
                side: Some(TrimSide::Both),
                characters: Some(_),
                ..
            }
        ));
        assert!(matches!(
            first_expr("select substring(s from 2 for 3)"),
            Expr::Substring {
                keyword_form: true,
                length: Some(_),
                ..
            }
        ));
        assert!(matches!(
            first_expr("select substr(s, 1)"),
            Expr::Substring {
                keyword_form: false,
                ..
            }
        ));
        assert!(matches!(
            first_expr("select extract(year from d)"),
            Expr::Extract { field, .. } if field == "YEAR"
        ));
    }

    #[test]
    fn datetime_arith_needs_a_unit() {
        assert!(matches!(
            first_expr("select datediff(day, a, b)"),
            Expr::DatetimeArith { unit, args, .. } if unit == "DAY" && args.len() == 2
        ));
        assert!(matches!(first_expr("select datediff(a, b)"), Expr::Function(_)));
    }

    #[test]
    fn subscript_and_field_access() {
        assert!(matches!(first_expr("select a[0]"), Expr::Subscript { .. }));
        assert!(matches!(
            first_expr("select a[0].b"),
            Expr::FieldAccess { field, .. } if field == Ident::new("b")
        ));
    }
}

mod commands {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_is_kept_raw() {
        assert_eq!(
            parse_ok("set a.b = c d"),
            Statement::SetConfig(SetConfigStatement {
                key: Some("a.b".into()),
                value: Some("c d".into()),
            })
        );
    }

    #[test]
    fn set_without_value() {
        assert_eq!(
            parse_ok("set -v"),
            Statement::SetConfig(SetConfigStatement {
                key: Some("-v".into()),
                value: None,
            })
        );
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unexpected_trailing_token_span() {
        let err = parse("select a frm t").expect_err("should fail");
        assert_eq!(err.span(), Some((13, 1)));
        assert_eq!(err.to_string(), "Unexpected 't' after statement");
    }

    #[test]
    fn reserved_word_is_not_an_expression() {
        let err = parse("select from t").expect_err("should fail");
        assert_eq!(err.to_string(), "Expected expression, found 'from'");
    }

    #[test]
    fn empty_statement() {
        let err = parse(";").expect_err("should fail");
        assert_eq!(err.to_string(), "Empty input");
    }
}
