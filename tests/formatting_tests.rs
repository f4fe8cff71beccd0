//! Formatting tests for sparkfmt
//!
//! Query layout: keyword casing, clause breaking, joins, subqueries and
//! expressions.

use pretty_assertions::assert_eq;
use sparkfmt::{format, format_sql_with, FormatConfig};

/// Helper to format and compare
fn assert_formats_to(input: &str, expected: &str) {
    let result = format(input).expect("format should succeed");
    assert_eq!(result, expected);
}

/// Helper to verify formatting is idempotent
fn assert_idempotent(input: &str) {
    let formatted = format(input).expect("first format should succeed");
    let reformatted = format(&formatted).expect("second format should succeed");
    assert_eq!(formatted, reformatted, "formatting should be idempotent");
}

// =============================================================================
// KEYWORD TESTS - Keywords upper-cased, everything else as written
// =============================================================================

mod keywords {
    use super::*;

    #[test]
    fn lowercase_keywords_are_uppercased() {
        assert_formats_to("select a from t", "SELECT a\nFROM\n  t");
    }

    #[test]
    fn identifier_case_is_preserved() {
        assert_formats_to("SeLeCt Id FrOm UsErS", "SELECT Id\nFROM\n  UsErS");
    }

    #[test]
    fn backtick_identifiers_are_preserved() {
        assert_formats_to(
            "select `order` from `my table`",
            "SELECT `order`\nFROM\n  `my table`",
        );
    }

    #[test]
    fn literal_keywords_are_uppercased() {
        assert_formats_to("select null, true", "SELECT\n  NULL,\n  TRUE");
    }

    #[test]
    fn type_names_keep_their_spelling() {
        assert_formats_to("select cast(a as int) from t", "SELECT cast(a AS int)\nFROM\n  t");
    }
}

// =============================================================================
// SELECT
// =============================================================================

mod select {
    use super::*;

    #[test]
    fn distinct_single_column() {
        assert_formats_to(
            "select distinct name from users",
            "SELECT DISTINCT name\nFROM\n  users",
        );
    }

    #[test]
    fn multiple_columns_break_one_per_line() {
        assert_formats_to(
            "SELECT name, age FROM person ORDER BY age DESC, name asc NULLS FIRST;",
            "SELECT\n  name,\n  age\nFROM\n  person\nORDER BY\n  age DESC,\n  name ASC NULLS FIRST",
        );
    }

    #[test]
    fn select_without_from() {
        assert_formats_to("select 1", "SELECT 1");
    }

    #[test]
    fn explicit_and_implicit_aliases() {
        assert_formats_to(
            "select a as x, b y from t",
            "SELECT\n  a AS x,\n  b y\nFROM\n  t",
        );
    }

    #[test]
    fn where_breaks_and_or_chain() {
        assert_formats_to(
            "select a from t where x = 1 and y = 2 or z = 3",
            "SELECT a\nFROM\n  t\nWHERE\n  x = 1\n  AND y = 2\n  OR z = 3",
        );
    }

    #[test]
    fn group_by_and_having() {
        assert_formats_to(
            "select a, count(*) from t group by a having count(*) > 1",
            "SELECT\n  a,\n  count(*)\nFROM\n  t\nGROUP BY\n  a\nHAVING\n  count(*) > 1",
        );
    }

    #[test]
    fn limit_is_inline() {
        assert_formats_to("select a from t limit 10", "SELECT a\nFROM\n  t\nLIMIT 10");
    }

    #[test]
    fn distinct_aggregate_argument() {
        assert_formats_to(
            "select count(distinct a) from t",
            "SELECT count(DISTINCT a)\nFROM\n  t",
        );
    }

    #[test]
    fn hint_follows_select_keyword() {
        assert_formats_to(
            "select /*+ REPARTITION(10) */ a from t",
            "SELECT /*+ REPARTITION(10) */ a\nFROM\n  t",
        );
    }

    #[test]
    fn semicolon_is_dropped() {
        assert_formats_to("select 1;", "SELECT 1");
    }

    #[test]
    fn comments_are_dropped() {
        assert_formats_to("select a -- the column\nfrom t /* done */", "SELECT a\nFROM\n  t");
    }
}

// =============================================================================
// SET OPERATIONS AND CTES
// =============================================================================

mod set_operations {
    use super::*;

    #[test]
    fn union_all_between_selects() {
        assert_formats_to(
            "select a from t union all select a from u",
            "SELECT a\nFROM\n  t\nUNION ALL\nSELECT a\nFROM\n  u",
        );
    }

    #[test]
    fn parenthesized_operands() {
        assert_formats_to(
            "(select a from t) union (select b from u)",
            "(\n  SELECT a\n  FROM\n    t\n)\nUNION\n(\n  SELECT b\n  FROM\n    u\n)",
        );
    }
}

mod ctes {
    use super::*;

    #[test]
    fn single_cte() {
        assert_formats_to(
            "with c as (select a from t) select a from c",
            "WITH c AS (\n  SELECT a\n  FROM\n    t\n)\nSELECT a\nFROM\n  c",
        );
    }

    #[test]
    fn multiple_ctes() {
        assert_formats_to(
            "with a as (select 1), b as (select 2) select * from a, b",
            "WITH a AS (\n  SELECT 1\n),\nb AS (\n  SELECT 2\n)\nSELECT *\nFROM\n  a,\n  b",
        );
    }

    #[test]
    fn cte_column_list() {
        assert_formats_to(
            "with c (x, y) as (select 1, 2) select x from c",
            "WITH c(x, y) AS (\n  SELECT\n    1,\n    2\n)\nSELECT x\nFROM\n  c",
        );
    }
}

// =============================================================================
// JOINS
// =============================================================================

mod joins {
    use super::*;

    #[test]
    fn left_join_on_its_own_line() {
        assert_formats_to(
            "SELECT * FROM demo1 t1 LEFT JOIN demo2 t2 on t1.col1 = t2.col2",
            "SELECT *\nFROM\n  demo1 t1\n  LEFT JOIN demo2 t2 ON t1.col1 = t2.col2",
        );
    }

    #[test]
    fn join_condition_chain_is_indented() {
        assert_formats_to(
            "select * from a join b on a.id = b.id and a.x = b.x",
            "SELECT *\nFROM\n  a\n  JOIN b ON a.id = b.id\n    AND a.x = b.x",
        );
    }

    #[test]
    fn using_columns() {
        assert_formats_to(
            "select * from a left outer join b using (id)",
            "SELECT *\nFROM\n  a\n  LEFT OUTER JOIN b USING (id)",
        );
    }

    #[test]
    fn cross_and_semi_joins() {
        assert_formats_to(
            "select * from a cross join b left semi join c on b.k = c.k",
            "SELECT *\nFROM\n  a\n  CROSS JOIN b\n  LEFT SEMI JOIN c ON b.k = c.k",
        );
    }
}

// =============================================================================
// SUBQUERIES
// =============================================================================

mod subqueries {
    use super::*;

    #[test]
    fn derived_table() {
        assert_formats_to(
            "select x from (select a as x from t) sub",
            "SELECT x\nFROM\n  (\n    SELECT a AS x\n    FROM\n      t\n  ) sub",
        );
    }

    #[test]
    fn in_subquery() {
        assert_formats_to(
            "select a from t where a in (select b from u)",
            "SELECT a\nFROM\n  t\nWHERE\n  a IN (\n    SELECT b\n    FROM\n      u\n  )",
        );
    }

    #[test]
    fn exists_subquery() {
        assert_formats_to(
            "select a from t where exists (select 1 from u)",
            "SELECT a\nFROM\n  t\nWHERE\n  EXISTS (\n    SELECT 1\n    FROM\n      u\n  )",
        );
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

mod expressions {
    use super::*;

    #[test]
    fn doubled_quote_literal_is_unchanged() {
        assert_formats_to("select 'It''s' as s", "SELECT 'It''s' AS s");
    }

    #[test]
    fn current_functions_without_parens() {
        assert_formats_to(
            "select CURRENT_DATE, current_user, current_timestamp() from t",
            "SELECT\n  current_date,\n  current_user,\n  current_timestamp()\nFROM\n  t",
        );
    }

    #[test]
    fn case_when_lines() {
        assert_formats_to(
            "select case when a = 1 then 'one' when a = 2 then 'two' else 'many' end as label from t",
            "SELECT CASE\n  WHEN a = 1 THEN 'one'\n  WHEN a = 2 THEN 'two'\nELSE 'many' END AS label\nFROM\n  t",
        );
    }

    #[test]
    fn case_inside_select_list() {
        assert_formats_to(
            "select id, case x when 1 then 'a' end from t",
            "SELECT\n  id,\n  CASE x\n    WHEN 1 THEN 'a'\n  END\nFROM\n  t",
        );
    }

    #[test]
    fn predicates_stay_inline() {
        assert_formats_to(
            "select a from t where b between 1 and 10 and c like 'x%' and d is not null",
            "SELECT a\nFROM\n  t\nWHERE\n  b BETWEEN 1 AND 10\n  AND c LIKE 'x%'\n  AND d IS NOT NULL",
        );
    }

    #[test]
    fn negated_in_list() {
        assert_formats_to(
            "select a from t where b not in (1, 2)",
            "SELECT a\nFROM\n  t\nWHERE\n  b NOT IN (1, 2)",
        );
    }

    #[test]
    fn bang_renders_as_not() {
        assert_formats_to("select a from t where !b", "SELECT a\nFROM\n  t\nWHERE\n  NOT b");
    }

    #[test]
    fn window_function_inline() {
        assert_formats_to(
            "select row_number() over (partition by a order by b desc) as rn from t",
            "SELECT row_number() OVER (PARTITION BY a ORDER BY b DESC) AS rn\nFROM\n  t",
        );
    }

    #[test]
    fn window_frame_on_its_own_line() {
        assert_formats_to(
            "select sum(x) over (order by d rows between unbounded preceding and current row) from t",
            "SELECT sum(x) OVER (ORDER BY d\n  ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW\n)\nFROM\n  t",
        );
    }

    #[test]
    fn interval_units_are_uppercased() {
        assert_formats_to(
            "select interval 2 hours 30 minutes",
            "SELECT INTERVAL 2 HOURS 30 MINUTES",
        );
    }

    #[test]
    fn typed_and_hex_literals() {
        assert_formats_to(
            "select date '2024-01-01', x'1F'",
            "SELECT\n  DATE '2024-01-01',\n  X'1F'",
        );
    }

    #[test]
    fn double_negation_keeps_a_space() {
        assert_formats_to("select - -1", "SELECT - -1");
    }

    #[test]
    fn lambda_argument() {
        assert_formats_to(
            "select transform(xs, x -> x + 1) from t",
            "SELECT transform(xs, x -> x + 1)\nFROM\n  t",
        );
    }

    #[test]
    fn struct_constructor() {
        assert_formats_to("select struct(a, b as c)", "SELECT STRUCT(a, b AS c)");
    }

    #[test]
    fn cast_shorthand() {
        assert_formats_to("select a::int from t", "SELECT a::int\nFROM\n  t");
    }

    #[test]
    fn adjacent_string_literals() {
        assert_formats_to("select 'a' 'b'", "SELECT 'a' 'b'");
    }

    #[test]
    fn special_form_functions() {
        assert_formats_to(
            "select extract(year from d), trim(both 'x' from s), position('a' in s)",
            "SELECT\n  extract(YEAR FROM d),\n  trim(BOTH 'x' FROM s),\n  position('a' IN s)",
        );
    }

    #[test]
    fn filter_clause_breaks() {
        assert_formats_to(
            "select count(*) filter (where x > 1) as c from t",
            "SELECT count(*) FILTER (\n  WHERE\n    x > 1\n) AS c\nFROM\n  t",
        );
    }
}

// =============================================================================
// GROUPING ANALYTICS, LATERAL VIEW, VALUES
// =============================================================================

mod grouping {
    use super::*;

    #[test]
    fn grouping_sets_block() {
        assert_formats_to(
            "select a, b, sum(c) from t group by grouping sets ((a, b), (a), ())",
            "SELECT\n  a,\n  b,\n  sum(c)\nFROM\n  t\nGROUP BY\n  GROUPING SETS (\n    (a, b),\n    (a),\n    ()\n  )",
        );
    }

    #[test]
    fn rollup_block() {
        assert_formats_to(
            "select a from t group by rollup(a, b)",
            "SELECT a\nFROM\n  t\nGROUP BY\n  ROLLUP (\n    a,\n    b\n  )",
        );
    }

    #[test]
    fn with_rollup_modifier() {
        assert_formats_to(
            "select a from t group by a, b with rollup",
            "SELECT a\nFROM\n  t\nGROUP BY\n  a,\n  b WITH ROLLUP",
        );
    }
}

mod lateral_views {
    use super::*;

    #[test]
    fn explode_with_alias() {
        assert_formats_to(
            "select id, col from t lateral view explode(arr) e as col",
            "SELECT\n  id,\n  col\nFROM\n  t\n  LATERAL VIEW explode(\n    arr\n  ) e AS col",
        );
    }
}

mod values {
    use super::*;

    #[test]
    fn several_rows_break() {
        assert_formats_to(
            "values (1, 'a'), (2, 'b')",
            "VALUES\n  (1, 'a'),\n  (2, 'b')",
        );
    }

    #[test]
    fn inline_table_with_alias() {
        assert_formats_to(
            "select * from values (1, 2) as v(a, b)",
            "SELECT *\nFROM\n  VALUES\n    (1, 2) AS v(a, b)",
        );
    }

    #[test]
    fn top_level_values_with_alias() {
        assert_formats_to(
            "VALUES (1, 2) AS t(a, b)",
            "VALUES\n  (1, 2) AS t(a, b)",
        );
    }

    #[test]
    fn top_level_values_with_implicit_alias() {
        assert_formats_to(
            "values (1), (2) t(a)",
            "VALUES\n  (1),\n  (2) t(a)",
        );
    }

    #[test]
    fn values_alias_before_set_operation() {
        assert_formats_to(
            "values (1) as t(a) union all select 2",
            "VALUES\n  (1) AS t(a)\nUNION ALL\nSELECT 2",
        );
    }
}

// =============================================================================
// QUERY ORGANIZATION
// =============================================================================

mod organization {
    use super::*;

    #[test]
    fn cluster_by() {
        assert_formats_to(
            "select a from t cluster by a",
            "SELECT a\nFROM\n  t\nCLUSTER BY\n  a",
        );
    }

    #[test]
    fn distribute_and_sort_by() {
        assert_formats_to(
            "select a from t distribute by a sort by b desc",
            "SELECT a\nFROM\n  t\nDISTRIBUTE BY\n  a\nSORT BY\n  b DESC",
        );
    }

    #[test]
    fn limit_and_offset() {
        assert_formats_to(
            "select a from t order by a limit 5 offset 10",
            "SELECT a\nFROM\n  t\nORDER BY\n  a\nLIMIT 5\nOFFSET 10",
        );
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

mod config {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_layout_keeps_single_items_inline() {
        let output = format_sql_with(
            "select a, b from t join u on t.id = u.id where x = 1 group by a order by a",
            &FormatConfig::compact(),
        )
        .expect("format should succeed");
        assert_eq!(
            output,
            "SELECT\n  a,\n  b\nFROM t\n  JOIN u ON t.id = u.id\nWHERE\n  x = 1\nGROUP BY a\nORDER BY a"
        );
    }

    #[test]
    fn compact_layout_still_breaks_lists() {
        let output = format_sql_with("select a from t, u order by a, b", &FormatConfig::compact())
            .expect("format should succeed");
        assert_eq!(output, "SELECT a\nFROM\n  t,\n  u\nORDER BY\n  a,\n  b");
    }

    fn compact(input: &str) -> String {
        format_sql_with(input, &FormatConfig::compact()).expect("format should succeed")
    }

    #[test]
    fn compact_derived_table_keeps_logical_depth() {
        assert_eq!(
            compact("select a from (select b from t where b > 1) x"),
            "SELECT a\nFROM (\n    SELECT b\n    FROM t\n    WHERE\n      b > 1\n  ) x"
        );
    }

    #[test]
    fn compact_inline_table_rows_follow_the_from_line() {
        assert_eq!(
            compact("select first(col), last(col ignore nulls) from values (10), (5), (20) as tab(col)"),
            "SELECT\n  first(col),\n  last(col IGNORE NULLS)\nFROM VALUES\n  (10),\n  (5),\n  (20) AS tab(col)"
        );
    }

    #[test]
    fn compact_joins_with_derived_relation() {
        assert_eq!(
            compact(
                "select * from a left join (select k from b) bb on a.k = bb.k and a.x = 1 \
                 cross join c"
            ),
            "SELECT *\nFROM a\n  LEFT JOIN (\n    SELECT k\n    FROM b\n  ) bb ON a.k = bb.k\n    \
             AND a.x = 1\n  CROSS JOIN c"
        );
    }

    #[test]
    fn compact_group_by_rollup_block() {
        assert_eq!(
            compact("select a, count(*) from t group by rollup(a, b) order by a desc"),
            "SELECT\n  a,\n  count(*)\nFROM t\nGROUP BY ROLLUP (\n    a,\n    b\n  )\nORDER BY a DESC"
        );
    }

    #[test]
    fn compact_group_by_list_breaks() {
        assert_eq!(
            compact("select a, b from t group by a, b"),
            "SELECT\n  a,\n  b\nFROM t\nGROUP BY\n  a,\n  b"
        );
    }

    #[test]
    fn compact_multi_insert() {
        assert_eq!(
            compact(
                "from staging s insert into table a select s.id where s.k = 1 \
                 insert into table b select s.id, s.v"
            ),
            "FROM staging s\nINSERT INTO TABLE a\nSELECT s.id\nWHERE\n  s.k = 1\n\
             INSERT INTO TABLE b\nSELECT\n  s.id,\n  s.v"
        );
    }

    #[test]
    fn compact_explain_over_inline_table() {
        assert_eq!(
            compact("explain select k, sum(v) from values (1, 2), (1, 3) t(k, v) group by k"),
            "EXPLAIN SELECT\n  k,\n  sum(v)\nFROM VALUES\n  (1, 2),\n  (1, 3) t(k, v)\nGROUP BY k"
        );
    }

    #[test]
    fn compact_top_level_values_with_alias() {
        assert_eq!(compact("values (1, 2) as t(a, b)"), "VALUES\n  (1, 2) AS t(a, b)");
    }

    #[test]
    fn compact_insert_values() {
        assert_eq!(
            compact("insert into t values (1), (2)"),
            "INSERT INTO t\nVALUES\n  (1),\n  (2)"
        );
    }

    #[test]
    fn compact_output_is_stable() {
        let inputs = [
            "select a from (select b from t) x",
            "select * from values (1), (2) as v(a) join u on v.a = u.a",
            "from s insert into table a select s.id insert into table b select s.v",
        ];
        for input in inputs {
            let once = compact(input);
            assert_eq!(compact(&once), once, "not stable for {:?}", input);
        }
    }

    #[test]
    fn wider_indent() {
        let config = FormatConfig::default().with_indent_width(4);
        let output = format_sql_with("with c as (select a from t) select a from c", &config)
            .expect("format should succeed");
        assert_eq!(
            output,
            "WITH c AS (\n    SELECT a\n    FROM\n        t\n)\nSELECT a\nFROM\n    c"
        );
    }
}

// =============================================================================
// IDEMPOTENCY
// =============================================================================

mod idempotency {
    use super::*;

    #[test]
    fn select_with_joins() {
        assert_idempotent(
            "select a.x, b.y from a left join b on a.id = b.id and a.k = b.k where a.z > 0",
        );
    }

    #[test]
    fn nested_subqueries() {
        assert_idempotent(
            "select * from (select a from (select a from t) s1 where a in (select b from u)) s2",
        );
    }

    #[test]
    fn case_and_windows() {
        assert_idempotent(
            "select case when a then 1 else 2 end, sum(x) over (partition by y order by z rows 2 preceding) from t",
        );
    }

    #[test]
    fn grouping_sets() {
        assert_idempotent("select a, b from t group by cube(a, b)");
    }

    #[test]
    fn ctes_and_set_operations() {
        assert_idempotent(
            "with c as (select 1 as a) select a from c union select a from c order by a",
        );
    }
}
