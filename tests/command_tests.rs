//! Session and catalog command tests

use pretty_assertions::assert_eq;
use sparkfmt::format;

fn assert_formats_to(input: &str, expected: &str) {
    let result = format(input).expect("format should succeed");
    assert_eq!(result, expected);
}

mod use_and_set {
    use super::*;

    #[test]
    fn use_database() {
        assert_formats_to("use db", "USE db");
        assert_formats_to("use database db", "USE DATABASE db");
    }

    #[test]
    fn set_config_is_replayed_as_written() {
        assert_formats_to(
            "set spark.sql.shuffle.partitions=10",
            "SET spark.sql.shuffle.partitions = 10",
        );
    }

    #[test]
    fn set_value_keeps_inner_spacing() {
        assert_formats_to("set a.b = c  d", "SET a.b = c  d");
    }

    #[test]
    fn bare_set_and_reset() {
        assert_formats_to("set", "SET");
        assert_formats_to("reset", "RESET");
        assert_formats_to("reset spark.x", "RESET spark.x");
    }

    #[test]
    fn set_catalog() {
        assert_formats_to("set catalog my_cat", "SET CATALOG my_cat");
    }
}

mod show {
    use super::*;

    #[test]
    fn tables_with_scope_and_pattern() {
        assert_formats_to("show tables in db like 'x*'", "SHOW TABLES IN db LIKE 'x*'");
        assert_formats_to("show tables from db 'x*'", "SHOW TABLES FROM db 'x*'");
    }

    #[test]
    fn namespaces() {
        assert_formats_to("show databases", "SHOW DATABASES");
        assert_formats_to("show schemas like 's*'", "SHOW SCHEMAS LIKE 's*'");
    }

    #[test]
    fn columns() {
        assert_formats_to("show columns in t in db", "SHOW COLUMNS IN t IN db");
    }

    #[test]
    fn table_properties() {
        assert_formats_to("show tblproperties t ('k')", "SHOW TBLPROPERTIES t ('k')");
    }

    #[test]
    fn functions() {
        assert_formats_to("show user functions like 'f*'", "SHOW USER FUNCTIONS LIKE 'f*'");
        assert_formats_to("show functions", "SHOW FUNCTIONS");
    }

    #[test]
    fn create_table() {
        assert_formats_to("show create table t as serde", "SHOW CREATE TABLE t AS SERDE");
    }

    #[test]
    fn partitions() {
        assert_formats_to(
            "show partitions t partition (dt = '1')",
            "SHOW PARTITIONS t PARTITION(dt = '1')",
        );
    }

    #[test]
    fn table_extended() {
        assert_formats_to(
            "show table extended in db like 't*'",
            "SHOW TABLE EXTENDED IN db LIKE 't*'",
        );
    }

    #[test]
    fn current_namespace() {
        assert_formats_to("show current namespace", "SHOW CURRENT NAMESPACE");
    }
}

mod describe {
    use super::*;

    #[test]
    fn table() {
        assert_formats_to("describe table extended t", "DESCRIBE TABLE EXTENDED t");
    }

    #[test]
    fn short_form_with_column() {
        assert_formats_to("desc t col", "DESC t col");
    }

    #[test]
    fn function() {
        assert_formats_to("describe function extended abs", "DESCRIBE FUNCTION EXTENDED abs");
    }

    #[test]
    fn namespace() {
        assert_formats_to("describe database extended db", "DESCRIBE DATABASE EXTENDED db");
    }

    #[test]
    fn query() {
        assert_formats_to(
            "describe query select a from t",
            "DESCRIBE QUERY SELECT a\nFROM\n  t",
        );
    }

    #[test]
    fn query_over_inline_table() {
        assert_formats_to(
            "DESC QUERY VALUES(100, 'John', 10000.20D) AS employee(id, name, salary);",
            "DESC QUERY VALUES\n  (100, 'John', 10000.20D) AS employee(id, name, salary)",
        );
    }
}

mod explain {
    use super::*;

    #[test]
    fn explain_mode() {
        assert_formats_to("explain extended select 1", "EXPLAIN EXTENDED SELECT 1");
    }

    #[test]
    fn explain_wraps_any_statement() {
        assert_formats_to(
            "explain insert into t select a from s",
            "EXPLAIN INSERT INTO t\nSELECT a\nFROM\n  s",
        );
    }
}

mod call_and_load {
    use super::*;

    #[test]
    fn call_arguments_break() {
        assert_formats_to(
            "call cat.sys.proc(a => 1, 'x')",
            "CALL cat.sys.proc(\n  a => 1,\n  'x'\n)",
        );
    }

    #[test]
    fn call_without_arguments() {
        assert_formats_to("call p()", "CALL p()");
    }

    #[test]
    fn load_data() {
        assert_formats_to(
            "load data local inpath '/tmp/f' overwrite into table t partition (dt = '1')",
            "LOAD DATA LOCAL INPATH '/tmp/f' OVERWRITE INTO TABLE t PARTITION(dt = '1')",
        );
    }
}

// =============================================================================
// FILE AND TUNNEL STATEMENTS
// =============================================================================

mod data_movement {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_file_with_options() {
        assert_formats_to(
            "load data '/user/dataworks/users/qianxiao/demo.csv' table tdl_spark_test \
             options( delimiter=',',header='true');",
            "LOAD DATA '/user/dataworks/users/qianxiao/demo.csv' TABLE tdl_spark_test OPTIONS(\n  \
             delimiter = ',',\n  header = 'true'\n)",
        );
    }

    #[test]
    fn load_file_without_table_keyword() {
        assert_formats_to("load data '/tmp/a.csv' t", "LOAD DATA '/tmp/a.csv' t");
    }

    #[test]
    fn export_partition_moves_target_down() {
        assert_formats_to(
            "export table raw_activity_flat PARTITION (year=2018, month=3, day=12) \
             TO 'activity_20180312.csv' options(delimiter=';')",
            "EXPORT TABLE raw_activity_flat PARTITION(year = 2018, month = 3, day = 12)\n\
             TO 'activity_20180312.csv' OPTIONS(\n  delimiter = ';'\n)",
        );
    }

    #[test]
    fn export_after_with() {
        assert_formats_to(
            "with tdl_raw_activity_qunaer as (select email, idnumber, wifi from raw_activity_flat \
             where year=2018 and month=3 and partnerCode='qunaer' ) \
             export table tdl_raw_activity_qunaer TO 'activity_20180312.csv'",
            "WITH tdl_raw_activity_qunaer AS (\n  SELECT\n    email,\n    idnumber,\n    wifi\n  \
             FROM\n    raw_activity_flat\n  WHERE\n    year = 2018\n    AND month = 3\n    \
             AND partnerCode = 'qunaer'\n)\n\
             EXPORT TABLE tdl_raw_activity_qunaer TO 'activity_20180312.csv'",
        );
    }

    #[test]
    fn datatunnel_source_and_sink() {
        assert_formats_to(
            "datatunnel source(\"mysql\") options(\n\
             username=\"dataworks\",\n\
             password=\"dataworks2021\",\n\
             host='10.5.20.20',\n\
             port=3306,\n\
             databaseName='dataworks', tableName='dc_dtunnel_datasource', columns=[\"*\"])\n\
             sink(\"hive\") options(databaseName=\"bigdata\", tableName='hive_dtunnel_datasource', \
             writeMode='overwrite', columns=[\"*\"]);",
            "DATATUNNEL SOURCE(\"mysql\") OPTIONS(\n  \
             username = \"dataworks\",\n  \
             password = \"dataworks2021\",\n  \
             host = '10.5.20.20',\n  \
             port = 3306,\n  \
             databaseName = 'dataworks',\n  \
             tableName = 'dc_dtunnel_datasource',\n  \
             columns = [\"*\"]\n\
             )\n\
             SINK(\"hive\") OPTIONS(\n  \
             databaseName = \"bigdata\",\n  \
             tableName = 'hive_dtunnel_datasource',\n  \
             writeMode = 'overwrite',\n  \
             columns = [\"*\"]\n\
             )",
        );
    }

    #[test]
    fn datatunnel_with_transform() {
        assert_formats_to(
            "datatunnel source('mysql') options(username='dataworks', port=3306, columns=['*']) \
             transform = 'select * from tdl_dc_job where type=\"spark_sql\"' \
             sink('log') options(numRows = 10)",
            "DATATUNNEL SOURCE('mysql') OPTIONS(\n  username = 'dataworks',\n  port = 3306,\n  \
             columns = ['*']\n)\n\
             TRANSFORM = 'select * from tdl_dc_job where type=\"spark_sql\"'\n\
             SINK('log') OPTIONS(\n  numRows = 10\n)",
        );
    }

    #[test]
    fn datatunnel_empty_options_and_negative_value() {
        assert_formats_to(
            "datatunnel source('a') options() sink('b') options(position = -1, keys = [])",
            "DATATUNNEL SOURCE('a') OPTIONS()\nSINK('b') OPTIONS(\n  position = -1,\n  keys = []\n)",
        );
    }

    #[test]
    fn merge_table_files() {
        assert_formats_to(
            "merge table bigdata.test_user11_dt PARTITION (ds=20211204) options(dd='ss', ssd=12)",
            "MERGE TABLE bigdata.test_user11_dt PARTITION(ds = 20211204)\n\
             OPTIONS(\n  dd = 'ss',\n  ssd = 12\n)",
        );
    }

    #[test]
    fn merge_table_without_options() {
        assert_formats_to("merge table t", "MERGE TABLE t");
    }

    #[test]
    fn dialect_statements_are_stable() {
        let inputs = [
            "load data '/x.csv' table t options (header = 'true')",
            "export table t partition (dt = 1) to 'f.csv'",
            "datatunnel source('s') options(a = 1) transform = 'select 1' \
             sink('k') options(b = [1, 2])",
            "merge table t partition (ds = 1) options (k = 'v')",
        ];
        for input in inputs {
            let once = format(input).expect("format should succeed");
            let twice = format(&once).expect("formatted output should parse");
            assert_eq!(once, twice, "not stable for {:?}", input);
        }
    }
}
