//! Snapshot tests for larger statements
//!
//! Each case formats a realistic statement and compares the whole layout.

use insta::assert_snapshot;
use sparkfmt::format;

fn fmt(input: &str) -> String {
    format(input).expect("format should succeed")
}

#[test]
fn analytics_query() {
    let sql = "with recent as (select user_id, max(ts) as last_seen from events \
               where ts > date '2024-01-01' group by user_id) \
               select u.id, u.name, r.last_seen from users u join recent r on u.id = r.user_id \
               where u.active = true and r.last_seen is not null \
               order by r.last_seen desc limit 100";
    assert_snapshot!(fmt(sql), @r"
WITH recent AS (
  SELECT
    user_id,
    max(ts) AS last_seen
  FROM
    events
  WHERE
    ts > DATE '2024-01-01'
  GROUP BY
    user_id
)
SELECT
  u.id,
  u.name,
  r.last_seen
FROM
  users u
  JOIN recent r ON u.id = r.user_id
WHERE
  u.active = TRUE
  AND r.last_seen IS NOT NULL
ORDER BY
  r.last_seen DESC
LIMIT 100
");
}

#[test]
fn pivot_query() {
    let sql = "select * from sales pivot (sum(amount) as total for quarter in ('Q1' as q1, 'Q2' as q2))";
    assert_snapshot!(fmt(sql), @r"
SELECT *
FROM
  sales
  PIVOT (
    sum(amount) AS total
    FOR quarter IN ('Q1' AS q1, 'Q2' AS q2)
  )
");
}

#[test]
fn named_windows() {
    let sql = "select a, rank() over w1, sum(b) over w2 from t \
               window w1 as (partition by a order by b), w2 as (partition by a)";
    assert_snapshot!(fmt(sql), @r"
SELECT
  a,
  rank() OVER w1,
  sum(b) OVER w2
FROM
  t
WINDOW w1 AS (PARTITION BY a ORDER BY b),
  w2 AS (PARTITION BY a)
");
}

#[test]
fn nested_case_in_select_list() {
    let sql = "select id, case when score > 90 then 'a' when score > 80 then \
               case when bonus then 'a' else 'b' end else 'c' end as grade from results";
    assert_snapshot!(fmt(sql), @r"
SELECT
  id,
  CASE
    WHEN score > 90 THEN 'a'
    WHEN score > 80 THEN CASE
      WHEN bonus THEN 'a'
    ELSE 'b' END
  ELSE 'c' END AS grade
FROM
  results
");
}

#[test]
fn multi_insert() {
    let sql = "from staging s insert overwrite table daily partition (dt = '2024-01-01') \
               select s.id, s.v where s.kind = 'd' \
               insert into table errors select s.id where s.v is null";
    assert_snapshot!(fmt(sql), @r"
FROM
  staging s
INSERT OVERWRITE TABLE daily PARTITION(dt = '2024-01-01')
SELECT
  s.id,
  s.v
WHERE
  s.kind = 'd'
INSERT INTO TABLE errors
SELECT s.id
WHERE
  s.v IS NULL
");
}

#[test]
fn create_table_as_select() {
    let sql = "create table if not exists mart.daily_users using delta \
               partitioned by (dt) tblproperties ('delta.appendOnly' = 'true') \
               as select dt, count(distinct user_id) as users from events group by dt";
    assert_snapshot!(fmt(sql), @r"
CREATE TABLE IF NOT EXISTS mart.daily_users USING delta
PARTITIONED BY (dt)
TBLPROPERTIES (
  'delta.appendOnly' = 'true'
) AS
SELECT
  dt,
  count(DISTINCT user_id) AS users
FROM
  events
GROUP BY
  dt
");
}

#[test]
fn merge_with_subquery_source() {
    let sql = "merge into customers c using (select id, name from updates where ok) u \
               on c.id = u.id and c.region = 'eu' \
               when matched then update set c.name = u.name, c.updated = current_timestamp \
               when not matched then insert (id, name) values (u.id, u.name) \
               when not matched by source then delete";
    assert_snapshot!(fmt(sql), @r"
MERGE INTO customers c
USING (
  SELECT
    id,
    name
  FROM
    updates
  WHERE
    ok
) u
ON c.id = u.id
  AND c.region = 'eu'
WHEN MATCHED THEN
  UPDATE SET
    c.name = u.name,
    c.updated = current_timestamp
WHEN NOT MATCHED THEN
  INSERT (id, name) VALUES (u.id, u.name)
WHEN NOT MATCHED BY SOURCE THEN
  DELETE
");
}
