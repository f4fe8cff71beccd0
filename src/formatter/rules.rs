//! Formatting rules
//!
//! The opinionated rules for sparkfmt:
//! - Keywords: uppercase
//! - Identifiers, literals and type names: as written
//! - Indentation: 2 spaces by default
//! - Commas: trailing
//!
//! The functions below spell the keyword text for each AST enum.

use crate::ast::*;

pub fn binary_operator(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Plus => "+",
        BinaryOperator::Minus => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Modulo => "%",
        BinaryOperator::IntegerDivide => "DIV",
        BinaryOperator::Concat => "||",
        BinaryOperator::BitwiseAnd => "&",
        BinaryOperator::BitwiseOr => "|",
        BinaryOperator::BitwiseXor => "^",
        BinaryOperator::Eq => "=",
        BinaryOperator::DoubleEq => "==",
        BinaryOperator::NotEq => "<>",
        BinaryOperator::BangEq => "!=",
        BinaryOperator::Lt => "<",
        BinaryOperator::LtEq => "<=",
        BinaryOperator::Gt => ">",
        BinaryOperator::GtEq => ">=",
        BinaryOperator::NullSafeEq => "<=>",
        BinaryOperator::And => "AND",
        BinaryOperator::Or => "OR",
    }
}

pub fn unary_operator(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Not => "NOT ",
        UnaryOperator::Minus => "-",
        UnaryOperator::Plus => "+",
        UnaryOperator::BitwiseNot => "~",
    }
}

pub fn set_operator(op: SetOperator) -> &'static str {
    match op {
        SetOperator::Union => "UNION",
        SetOperator::Intersect => "INTERSECT",
        SetOperator::Except => "EXCEPT",
        SetOperator::Minus => "MINUS",
    }
}

pub fn set_quantifier(quantifier: SetQuantifier) -> &'static str {
    match quantifier {
        SetQuantifier::All => "ALL",
        SetQuantifier::Distinct => "DISTINCT",
    }
}

/// JOIN keyword sequence, including the word JOIN
pub fn join_type(join_type: JoinType) -> &'static str {
    match join_type {
        JoinType::Inner { explicit: true } => "INNER JOIN",
        JoinType::Inner { explicit: false } => "JOIN",
        JoinType::Cross => "CROSS JOIN",
        JoinType::Left { outer: true } => "LEFT OUTER JOIN",
        JoinType::Left { outer: false } => "LEFT JOIN",
        JoinType::Right { outer: true } => "RIGHT OUTER JOIN",
        JoinType::Right { outer: false } => "RIGHT JOIN",
        JoinType::Full { outer: true } => "FULL OUTER JOIN",
        JoinType::Full { outer: false } => "FULL JOIN",
        JoinType::Semi { left: true } => "LEFT SEMI JOIN",
        JoinType::Semi { left: false } => "SEMI JOIN",
        JoinType::Anti { left: true } => "LEFT ANTI JOIN",
        JoinType::Anti { left: false } => "ANTI JOIN",
    }
}

pub fn sort_direction(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

pub fn nulls_order(nulls: NullsOrder) -> &'static str {
    match nulls {
        NullsOrder::First => "NULLS FIRST",
        NullsOrder::Last => "NULLS LAST",
    }
}

pub fn grouping_kind(kind: GroupingKind) -> &'static str {
    match kind {
        GroupingKind::GroupingSets => "GROUPING SETS",
        GroupingKind::Rollup => "ROLLUP",
        GroupingKind::Cube => "CUBE",
    }
}

pub fn like_operator(op: LikeOperator) -> &'static str {
    match op {
        LikeOperator::Like => "LIKE",
        LikeOperator::ILike => "ILIKE",
        LikeOperator::RLike => "RLIKE",
        LikeOperator::Regexp => "REGEXP",
    }
}

pub fn is_test(test: IsTest) -> &'static str {
    match test {
        IsTest::Null => "NULL",
        IsTest::True => "TRUE",
        IsTest::False => "FALSE",
        IsTest::Unknown => "UNKNOWN",
    }
}

pub fn trim_side(side: TrimSide) -> &'static str {
    match side {
        TrimSide::Both => "BOTH",
        TrimSide::Leading => "LEADING",
        TrimSide::Trailing => "TRAILING",
    }
}

pub fn null_treatment(treatment: NullTreatment) -> &'static str {
    match treatment {
        NullTreatment::IgnoreNulls => "IGNORE NULLS",
        NullTreatment::RespectNulls => "RESPECT NULLS",
    }
}

pub fn frame_unit(unit: WindowFrameUnit) -> &'static str {
    match unit {
        WindowFrameUnit::Rows => "ROWS",
        WindowFrameUnit::Range => "RANGE",
    }
}

pub fn namespace_keyword(keyword: NamespaceKeyword) -> &'static str {
    match keyword {
        NamespaceKeyword::Database => "DATABASE",
        NamespaceKeyword::Schema => "SCHEMA",
        NamespaceKeyword::Namespace => "NAMESPACE",
    }
}

/// Plural spelling used by SHOW
pub fn namespace_keyword_plural(keyword: NamespaceKeyword) -> &'static str {
    match keyword {
        NamespaceKeyword::Database => "DATABASES",
        NamespaceKeyword::Schema => "SCHEMAS",
        NamespaceKeyword::Namespace => "NAMESPACES",
    }
}

pub fn scope_keyword(keyword: ScopeKeyword) -> &'static str {
    match keyword {
        ScopeKeyword::From => "FROM",
        ScopeKeyword::In => "IN",
    }
}

pub fn drop_behavior(behavior: DropBehavior) -> &'static str {
    match behavior {
        DropBehavior::Restrict => "RESTRICT",
        DropBehavior::Cascade => "CASCADE",
    }
}

pub fn resource_kind(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Jar => "JAR",
        ResourceKind::File => "FILE",
        ResourceKind::Archive => "ARCHIVE",
    }
}

pub fn repair_option(option: RepairOption) -> &'static str {
    match option {
        RepairOption::Add => "ADD PARTITIONS",
        RepairOption::Drop => "DROP PARTITIONS",
        RepairOption::Sync => "SYNC PARTITIONS",
    }
}

pub fn function_kind(kind: FunctionKind) -> &'static str {
    match kind {
        FunctionKind::User => "USER",
        FunctionKind::System => "SYSTEM",
        FunctionKind::All => "ALL",
    }
}

pub fn describe_detail(detail: DescribeDetail) -> &'static str {
    match detail {
        DescribeDetail::Extended => "EXTENDED",
        DescribeDetail::Formatted => "FORMATTED",
    }
}

pub fn explain_mode(mode: ExplainMode) -> &'static str {
    match mode {
        ExplainMode::Logical => "LOGICAL",
        ExplainMode::Formatted => "FORMATTED",
        ExplainMode::Extended => "EXTENDED",
        ExplainMode::Codegen => "CODEGEN",
        ExplainMode::Cost => "COST",
    }
}

pub fn merge_clause_kind(kind: MergeClauseKind) -> &'static str {
    match kind {
        MergeClauseKind::Matched => "WHEN MATCHED",
        MergeClauseKind::NotMatched { by_target: true } => "WHEN NOT MATCHED BY TARGET",
        MergeClauseKind::NotMatched { by_target: false } => "WHEN NOT MATCHED",
        MergeClauseKind::NotMatchedBySource => "WHEN NOT MATCHED BY SOURCE",
    }
}
