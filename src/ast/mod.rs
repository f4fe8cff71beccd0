//! AST node definitions for Spark SQL statements
//!
//! The tree is produced once by [`crate::parser::parse`] and read by the
//! formatter. Identifier, literal and data type text is kept as written so
//! the formatter can reproduce it byte for byte.

use std::fmt;

// =============================================================================
// Statements
// =============================================================================

/// A complete SQL statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Query(Box<Query>),
    Insert(InsertStatement),
    MultiInsert(MultiInsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Merge(MergeStatement),
    CreateTable(CreateTableStatement),
    CreateView(CreateViewStatement),
    CreateTempViewUsing(CreateTempViewUsingStatement),
    AlterViewQuery(AlterViewQueryStatement),
    AlterTable(AlterTableStatement),
    Drop(DropStatement),
    CreateNamespace(CreateNamespaceStatement),
    AlterNamespace(AlterNamespaceStatement),
    DropNamespace(DropNamespaceStatement),
    CreateFunction(CreateFunctionStatement),
    DropFunction(DropFunctionStatement),
    CreateIndex(CreateIndexStatement),
    DropIndex(DropIndexStatement),
    Truncate(TruncateStatement),
    RepairTable(RepairTableStatement),
    Analyze(AnalyzeStatement),
    AnalyzeTables(AnalyzeTablesStatement),
    CommentOn(CommentOnStatement),
    Use(UseStatement),
    SetCatalog(String),
    SetConfig(SetConfigStatement),
    Reset(Option<String>),
    Show(ShowStatement),
    Describe(DescribeStatement),
    Explain(ExplainStatement),
    Call(CallStatement),
    LoadData(LoadDataStatement),
    LoadFile(LoadFileStatement),
    ExportTable(ExportTableStatement),
    DataTunnel(DataTunnelStatement),
    MergeFile(MergeFileStatement),
}

impl Statement {
    /// Short statement kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Query(_) => "query",
            Statement::Insert(_) => "insert",
            Statement::MultiInsert(_) => "multi_insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::Merge(_) => "merge",
            Statement::CreateTable(_) => "create_table",
            Statement::CreateView(_) => "create_view",
            Statement::CreateTempViewUsing(_) => "create_temp_view_using",
            Statement::AlterViewQuery(_) => "alter_view_query",
            Statement::AlterTable(_) => "alter_table",
            Statement::Drop(_) => "drop",
            Statement::CreateNamespace(_) => "create_namespace",
            Statement::AlterNamespace(_) => "alter_namespace",
            Statement::DropNamespace(_) => "drop_namespace",
            Statement::CreateFunction(_) => "create_function",
            Statement::DropFunction(_) => "drop_function",
            Statement::CreateIndex(_) => "create_index",
            Statement::DropIndex(_) => "drop_index",
            Statement::Truncate(_) => "truncate",
            Statement::RepairTable(_) => "repair_table",
            Statement::Analyze(_) => "analyze",
            Statement::AnalyzeTables(_) => "analyze_tables",
            Statement::CommentOn(_) => "comment_on",
            Statement::Use(_) => "use",
            Statement::SetCatalog(_) => "set_catalog",
            Statement::SetConfig(_) => "set",
            Statement::Reset(_) => "reset",
            Statement::Show(_) => "show",
            Statement::Describe(_) => "describe",
            Statement::Explain(_) => "explain",
            Statement::Call(_) => "call",
            Statement::LoadData(_) => "load_data",
            Statement::LoadFile(_) => "load_file",
            Statement::ExportTable(_) => "export_table",
            Statement::DataTunnel(_) => "datatunnel",
            Statement::MergeFile(_) => "merge_file",
        }
    }
}

// =============================================================================
// Names
// =============================================================================

/// A single identifier. `value` is the source text between backticks when
/// `quoted`, otherwise the bare word as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "`{}`", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

/// A dotted multi-part name such as `db.table`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName(pub Vec<Ident>);

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

// =============================================================================
// Queries
// =============================================================================

/// A query: optional CTEs, a body and trailing ORDER BY / LIMIT style clauses
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub with: Option<WithClause>,
    pub body: QueryBody,
    pub organization: QueryOrganization,
}

/// WITH clause (CTEs)
#[derive(Debug, Clone, PartialEq)]
pub struct WithClause {
    pub ctes: Vec<CommonTableExpression>,
}

/// A single CTE definition
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    pub name: Ident,
    pub columns: Vec<Ident>,
    pub query: Box<Query>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryBody {
    Select(Box<SelectBody>),
    SetOperation {
        left: Box<QueryBody>,
        op: SetOperator,
        quantifier: Option<SetQuantifier>,
        right: Box<QueryBody>,
    },
    /// `( query )` used as a set operation operand
    Nested(Box<Query>),
    /// `VALUES row, ... [[AS] alias(cols)]`
    Values {
        values: ValuesClause,
        alias: Option<TableAlias>,
    },
    /// `TABLE name`
    Table(ObjectName),
    /// `FROM src SELECT ...`
    From(Box<FromQuery>),
}

/// Set operation keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
    Minus,
}

/// `ALL` / `DISTINCT`, for set operations, SELECT and aggregate calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantifier {
    All,
    Distinct,
}

/// SELECT ... FROM ... WHERE ... GROUP BY ... HAVING ... WINDOW ...
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectBody {
    pub hints: Vec<Hint>,
    pub quantifier: Option<SetQuantifier>,
    pub items: Vec<SelectItem>,
    pub from: Option<FromClause>,
    pub where_clause: Option<Expr>,
    pub group_by: Option<GroupByClause>,
    pub having: Option<Expr>,
    pub windows: Vec<NamedWindow>,
}

/// One `/*+ ... */` block
#[derive(Debug, Clone, PartialEq)]
pub struct Hint {
    pub functions: Vec<HintFunction>,
}

/// `REPARTITION(100)` inside a hint; `args` is `None` for a bare name
#[derive(Debug, Clone, PartialEq)]
pub struct HintFunction {
    pub name: Ident,
    pub args: Option<Vec<Expr>>,
}

/// An expression with an optional alias
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<Alias>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub explicit_as: bool,
    pub name: AliasName,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AliasName {
    Single(Ident),
    /// `AS (a, b)` for generators
    Multi(Vec<Ident>),
}

/// FROM clause
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub relations: Vec<Relation>,
    pub lateral_views: Vec<LateralView>,
    pub pivot: Option<PivotClause>,
}

/// A table factor followed by its join chain
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub primary: TableFactor,
    pub joins: Vec<JoinClause>,
}

/// A table reference
#[derive(Debug, Clone, PartialEq)]
pub enum TableFactor {
    Table {
        name: ObjectName,
        sample: Option<TableSample>,
        alias: Option<TableAlias>,
    },
    Derived {
        query: Box<Query>,
        sample: Option<TableSample>,
        alias: Option<TableAlias>,
    },
    Values {
        values: ValuesClause,
        alias: Option<TableAlias>,
    },
    /// Table-valued function such as `range(10)`
    Function {
        name: ObjectName,
        args: Vec<FunctionArg>,
        alias: Option<TableAlias>,
    },
    /// `( a JOIN b )`
    Nested {
        relation: Box<Relation>,
        alias: Option<TableAlias>,
    },
}

/// `[AS] name[(col, ...)]`
#[derive(Debug, Clone, PartialEq)]
pub struct TableAlias {
    pub explicit_as: bool,
    pub name: Ident,
    pub columns: Vec<Ident>,
}

/// `TABLESAMPLE (...)`
#[derive(Debug, Clone, PartialEq)]
pub enum TableSample {
    Percent(Box<Expr>),
    Rows(Box<Expr>),
    Bucket {
        numerator: String,
        denominator: String,
        on: Option<Box<Expr>>,
    },
}

/// JOIN clause
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub natural: bool,
    pub join_type: JoinType,
    pub relation: TableFactor,
    pub constraint: Option<JoinConstraint>,
}

/// JOIN types, remembering which optional words were written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner { explicit: bool },
    Cross,
    Left { outer: bool },
    Right { outer: bool },
    Full { outer: bool },
    Semi { left: bool },
    Anti { left: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
}

/// `LATERAL VIEW [OUTER] f(args) tbl AS c1, c2`
#[derive(Debug, Clone, PartialEq)]
pub struct LateralView {
    pub outer: bool,
    pub function: ObjectName,
    pub args: Vec<Expr>,
    pub table_alias: Option<Ident>,
    pub explicit_as: bool,
    pub columns: Vec<Ident>,
}

/// `PIVOT (aggs FOR col IN (values))`
#[derive(Debug, Clone, PartialEq)]
pub struct PivotClause {
    pub aggregates: Vec<SelectItem>,
    pub columns: Vec<ObjectName>,
    pub values: Vec<SelectItem>,
}

/// Inline table rows
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesClause {
    pub rows: Vec<Expr>,
}

/// `FROM src` followed by one or more select bodies
#[derive(Debug, Clone, PartialEq)]
pub struct FromQuery {
    pub from: FromClause,
    pub bodies: Vec<FromQueryBody>,
}

/// A select body in a FROM-first query; `select.from` is always `None`
#[derive(Debug, Clone, PartialEq)]
pub struct FromQueryBody {
    pub select: SelectBody,
    pub organization: QueryOrganization,
}

/// GROUP BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByClause {
    pub items: Vec<GroupingItem>,
    /// Trailing `WITH ROLLUP` / `WITH CUBE`
    pub modifier: Option<GroupingKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingItem {
    Expr(Expr),
    Analytics {
        kind: GroupingKind,
        elements: Vec<GroupingElement>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingKind {
    GroupingSets,
    Rollup,
    Cube,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupingElement {
    /// `(a, b)` or `()`
    Set(Vec<Expr>),
    Expr(Expr),
}

/// `WINDOW name AS spec`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedWindow {
    pub name: Ident,
    pub spec: WindowSpec,
}

/// ORDER BY / SORT BY / CLUSTER BY / DISTRIBUTE BY / LIMIT / OFFSET
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOrganization {
    pub order_by: Vec<OrderByItem>,
    pub cluster_by: Vec<Expr>,
    pub distribute_by: Vec<Expr>,
    pub sort_by: Vec<OrderByItem>,
    pub limit: Option<Limit>,
    pub offset: Option<Expr>,
}

impl QueryOrganization {
    pub fn is_empty(&self) -> bool {
        self.order_by.is_empty()
            && self.cluster_by.is_empty()
            && self.distribute_by.is_empty()
            && self.sort_by.is_empty()
            && self.limit.is_none()
            && self.offset.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Limit {
    All,
    Count(Expr),
}

/// A single ORDER BY item
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    pub expr: Expr,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// NULLS ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Ident),
    CompoundIdentifier(Vec<Ident>),
    Wildcard,
    QualifiedWildcard(ObjectName),
    Literal(Literal),
    /// `DATE '2020-01-01'`; `data_type` is stored upper-cased
    TypedLiteral {
        data_type: String,
        value: String,
    },
    Interval(IntervalLiteral),
    UnaryOp {
        op: UnaryOperator,
        expr: Box<Expr>,
    },
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    InList {
        expr: Box<Expr>,
        negated: bool,
        list: Vec<Expr>,
    },
    InSubquery {
        expr: Box<Expr>,
        negated: bool,
        subquery: Box<Query>,
    },
    Like {
        expr: Box<Expr>,
        negated: bool,
        op: LikeOperator,
        pattern: Box<Expr>,
        escape: Option<String>,
    },
    Is {
        expr: Box<Expr>,
        negated: bool,
        test: IsTest,
    },
    IsDistinctFrom {
        expr: Box<Expr>,
        negated: bool,
        other: Box<Expr>,
    },
    Function(Function),
    Case(CaseExpression),
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
        try_cast: bool,
        /// `expr::type`
        shorthand: bool,
    },
    Extract {
        field: String,
        expr: Box<Expr>,
    },
    /// `substring(s FROM p FOR l)` or `substr(s, p, l)`
    Substring {
        name: String,
        expr: Box<Expr>,
        position: Box<Expr>,
        length: Option<Box<Expr>>,
        keyword_form: bool,
    },
    /// `trim(BOTH 'x' FROM s)`
    Trim {
        side: Option<TrimSide>,
        characters: Option<Box<Expr>>,
        expr: Box<Expr>,
    },
    /// `position(a IN b)`
    Position {
        needle: Box<Expr>,
        haystack: Box<Expr>,
    },
    Overlay {
        expr: Box<Expr>,
        placing: Box<Expr>,
        from: Box<Expr>,
        length: Option<Box<Expr>>,
    },
    /// `first(x IGNORE NULLS)` / `last(...)`
    FirstLast {
        last: bool,
        expr: Box<Expr>,
        ignore_nulls: bool,
    },
    /// `timestampadd(HOUR, n, ts)` and relatives; `name` is lower-cased
    DatetimeArith {
        name: String,
        unit: String,
        args: Vec<Expr>,
    },
    /// `current_date` and friends without parentheses; stored lower-cased
    CurrentLike(String),
    Struct(Vec<SelectItem>),
    Exists(Box<Query>),
    Subquery(Box<Query>),
    /// `(a, b, c)`
    Row(Vec<SelectItem>),
    Parenthesized(Box<Expr>),
    Lambda {
        params: Vec<Ident>,
        parenthesized: bool,
        body: Box<Expr>,
    },
    Subscript {
        expr: Box<Expr>,
        index: Box<Expr>,
    },
    FieldAccess {
        expr: Box<Expr>,
        field: Ident,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    /// Numeric text as written, including suffixes
    Number(String),
    /// Quoted string pieces as written; adjacent literals concatenate
    String(Vec<String>),
}

/// `INTERVAL 5 HOURS 30 SECONDS` or `INTERVAL '2021-11' YEAR TO MONTH`
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalLiteral {
    pub parts: Vec<IntervalPart>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalPart {
    pub value: String,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    IntegerDivide,
    Concat,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Eq,
    DoubleEq,
    NotEq,
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    NullSafeEq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
    BitwiseNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOperator {
    Like,
    ILike,
    RLike,
    Regexp,
}

/// Right-hand side of `IS [NOT] ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsTest {
    Null,
    True,
    False,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
    Both,
    Leading,
    Trailing,
}

/// A function call with its trailing modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: ObjectName,
    pub quantifier: Option<SetQuantifier>,
    pub args: Vec<FunctionArg>,
    /// WITHIN GROUP (ORDER BY ...)
    pub within_group: Vec<OrderByItem>,
    /// FILTER (WHERE ...)
    pub filter: Option<Box<Expr>>,
    pub null_treatment: Option<NullTreatment>,
    pub over: Option<WindowSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArg {
    Unnamed(Expr),
    /// `name => value`
    Named { name: Ident, value: Expr },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullTreatment {
    IgnoreNulls,
    RespectNulls,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    pub operand: Option<Box<Expr>>,
    pub when_clauses: Vec<WhenClause>,
    pub else_clause: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    pub condition: Expr,
    pub result: Expr,
}

/// Target of OVER / WINDOW
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSpec {
    /// `OVER w`
    Named(Ident),
    /// `OVER (w)`
    NamedParenthesized(Ident),
    Inline(WindowDefinition),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowDefinition {
    pub partition_by: Vec<Expr>,
    /// `DISTRIBUTE BY` spelling of the partition list
    pub distribute: bool,
    pub order_by: Vec<OrderByItem>,
    /// `SORT BY` spelling of the order list
    pub sort: bool,
    pub cluster_by: Vec<Expr>,
    pub frame: Option<WindowFrame>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub unit: WindowFrameUnit,
    pub start: WindowFrameBound,
    pub end: Option<WindowFrameBound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameUnit {
    Rows,
    Range,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WindowFrameBound {
    CurrentRow,
    UnboundedPreceding,
    UnboundedFollowing,
    Preceding(Box<Expr>),
    Following(Box<Expr>),
}

/// Data types keep the spelling of their names
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Primitive {
        name: String,
        params: Vec<String>,
    },
    Array {
        keyword: String,
        element: Box<DataType>,
    },
    Map {
        keyword: String,
        key: Box<DataType>,
        value: Box<DataType>,
    },
    Struct {
        keyword: String,
        fields: Vec<StructField>,
    },
    /// `INTERVAL DAY TO SECOND`; units stored upper-cased
    Interval {
        from: String,
        to: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: Ident,
    pub colon: bool,
    pub data_type: DataType,
    pub not_null: bool,
    pub comment: Option<String>,
}

// =============================================================================
// DML
// =============================================================================

/// `PARTITION (k = v, k2)`
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionSpec(pub Vec<PartitionValue>);

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionValue {
    pub name: Ident,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub with: Option<WithClause>,
    pub target: InsertTarget,
    pub source: Box<Query>,
}

/// `INSERT INTO|OVERWRITE [TABLE] t [PARTITION ...] [IF NOT EXISTS] [(cols)]`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertTarget {
    pub overwrite: bool,
    pub table_keyword: bool,
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
    pub if_not_exists: bool,
    pub columns: Vec<Ident>,
}

/// `FROM src INSERT ... SELECT ... INSERT ... SELECT ...`
#[derive(Debug, Clone, PartialEq)]
pub struct MultiInsertStatement {
    pub with: Option<WithClause>,
    pub from: FromClause,
    pub inserts: Vec<MultiInsertBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiInsertBody {
    pub target: InsertTarget,
    pub select: SelectBody,
    pub organization: QueryOrganization,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: ObjectName,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table: ObjectName,
    pub alias: Option<TableAlias>,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table: ObjectName,
    pub alias: Option<TableAlias>,
    pub where_clause: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeStatement {
    pub target: ObjectName,
    pub target_alias: Option<TableAlias>,
    /// A `Table` or `Derived` factor carrying its own alias
    pub source: TableFactor,
    pub condition: Expr,
    pub clauses: Vec<MergeClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeClause {
    pub kind: MergeClauseKind,
    pub condition: Option<Expr>,
    pub action: MergeAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeClauseKind {
    Matched,
    /// `by_target` records an explicit `BY TARGET`
    NotMatched { by_target: bool },
    NotMatchedBySource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeAction {
    UpdateAll,
    Update(Vec<Assignment>),
    Delete,
    InsertAll,
    Insert {
        columns: Vec<Ident>,
        values: Vec<Expr>,
    },
}

// =============================================================================
// DDL
// =============================================================================

/// `key = value` inside OPTIONS / TBLPROPERTIES / DBPROPERTIES
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Dotted identifier or quoted string, as written
    pub key: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: ObjectName,
    pub data_type: DataType,
    pub not_null: bool,
    pub default: Option<Expr>,
    pub comment: Option<String>,
    pub position: Option<ColumnPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnPosition {
    First,
    After(ObjectName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMode {
    Create,
    CreateOrReplace,
    Replace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub mode: CreateMode,
    pub external: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Option<Vec<ColumnDefinition>>,
    pub provider: Option<Ident>,
    pub clauses: TableClauses,
    pub query: Option<Box<Query>>,
}

/// Optional CREATE TABLE clauses; rendered in a fixed order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableClauses {
    pub primary_key: Vec<Ident>,
    pub partitioned_by: Vec<PartitionField>,
    pub clustered_by: Option<BucketSpec>,
    pub stored_as: Option<Ident>,
    pub location: Option<String>,
    pub lifecycle: Option<String>,
    pub options: Vec<Property>,
    pub tbl_properties: Vec<Property>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartitionField {
    Column(Ident),
    Typed { name: Ident, data_type: DataType },
    Transform(Expr),
}

/// `CLUSTERED BY (cols) [SORTED BY (cols)] INTO n BUCKETS`
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    pub columns: Vec<Ident>,
    pub sorted_by: Vec<OrderByItem>,
    pub buckets: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewColumn {
    pub name: Ident,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateViewStatement {
    pub or_replace: bool,
    pub global: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Option<Vec<ViewColumn>>,
    pub comment: Option<String>,
    pub partitioned_on: Vec<Ident>,
    pub tbl_properties: Vec<Property>,
    pub query: Box<Query>,
}

/// `CREATE TEMPORARY VIEW v [(cols)] USING fmt [OPTIONS (...)]`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTempViewUsingStatement {
    pub or_replace: bool,
    pub global: bool,
    pub name: ObjectName,
    pub columns: Option<Vec<ColumnDefinition>>,
    pub provider: Ident,
    pub options: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterViewQueryStatement {
    pub name: ObjectName,
    pub query: Box<Query>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStatement {
    pub view: bool,
    pub name: ObjectName,
    pub action: AlterTableAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    RenameTo(ObjectName),
    SetProperties(Vec<Property>),
    UnsetProperties {
        if_exists: bool,
        keys: Vec<Property>,
    },
    AddColumns {
        plural: bool,
        parenthesized: bool,
        columns: Vec<ColumnDefinition>,
    },
    DropColumns {
        plural: bool,
        if_exists: bool,
        parenthesized: bool,
        columns: Vec<ObjectName>,
    },
    RenameColumn {
        from: ObjectName,
        to: Ident,
    },
    /// `ALTER|CHANGE [COLUMN] c <change>`
    AlterColumn {
        change_keyword: bool,
        column_keyword: bool,
        column: ObjectName,
        change: ColumnChange,
    },
    /// Hive style `CHANGE [COLUMN] old new type ...`
    ChangeColumn {
        partition: Option<PartitionSpec>,
        column_keyword: bool,
        column: ObjectName,
        definition: ColumnDefinition,
    },
    ReplaceColumns {
        partition: Option<PartitionSpec>,
        columns: Vec<ColumnDefinition>,
    },
    AddPartitions {
        if_not_exists: bool,
        partitions: Vec<(PartitionSpec, Option<String>)>,
    },
    DropPartitions {
        if_exists: bool,
        partitions: Vec<PartitionSpec>,
        purge: bool,
    },
    RenamePartition {
        from: PartitionSpec,
        to: PartitionSpec,
    },
    SetLocation {
        partition: Option<PartitionSpec>,
        location: String,
    },
    RecoverPartitions,
    /// `TOUCH [PARTITION (..)]`
    Touch(Option<PartitionSpec>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnChange {
    Type(DataType),
    Comment(String),
    Position(ColumnPosition),
    SetNotNull,
    DropNotNull,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropStatement {
    pub view: bool,
    pub if_exists: bool,
    pub name: ObjectName,
    pub purge: bool,
}

/// DATABASE / SCHEMA / NAMESPACE spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceKeyword {
    Database,
    Schema,
    Namespace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateNamespaceStatement {
    pub keyword: NamespaceKeyword,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub comment: Option<String>,
    pub location: Option<String>,
    /// `DBPROPERTIES` when true, `PROPERTIES` otherwise
    pub db_properties: bool,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterNamespaceStatement {
    pub keyword: NamespaceKeyword,
    pub name: ObjectName,
    pub action: AlterNamespaceAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterNamespaceAction {
    SetProperties {
        db_properties: bool,
        properties: Vec<Property>,
    },
    SetLocation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehavior {
    Restrict,
    Cascade,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropNamespaceStatement {
    pub keyword: NamespaceKeyword,
    pub if_exists: bool,
    pub name: ObjectName,
    pub behavior: Option<DropBehavior>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Jar,
    File,
    Archive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResource {
    pub kind: ResourceKind,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFunctionStatement {
    pub or_replace: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub class_name: String,
    pub resources: Vec<FunctionResource>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropFunctionStatement {
    pub temporary: bool,
    pub if_exists: bool,
    pub name: ObjectName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexColumn {
    pub name: ObjectName,
    pub options: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStatement {
    pub if_not_exists: bool,
    pub name: Ident,
    pub table_keyword: bool,
    pub table: ObjectName,
    pub index_type: Option<Ident>,
    pub columns: Vec<IndexColumn>,
    pub options: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropIndexStatement {
    pub if_exists: bool,
    pub name: Ident,
    pub table_keyword: bool,
    pub table: ObjectName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TruncateStatement {
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOption {
    Add,
    Drop,
    Sync,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairTableStatement {
    pub msck: bool,
    pub table: ObjectName,
    pub option: Option<RepairOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeTarget {
    Table,
    NoScan,
    Columns(Vec<ObjectName>),
    AllColumns,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeStatement {
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
    pub target: AnalyzeTarget,
}

/// FROM / IN spelling in SHOW and ANALYZE scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKeyword {
    From,
    In,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub keyword: ScopeKeyword,
    pub name: ObjectName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeTablesStatement {
    pub scope: Option<Scope>,
    pub noscan: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget {
    Namespace(NamespaceKeyword),
    Table,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentOnStatement {
    pub target: CommentTarget,
    pub name: ObjectName,
    /// `None` for `IS NULL`
    pub comment: Option<String>,
}

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct UseStatement {
    pub keyword: Option<NamespaceKeyword>,
    pub name: ObjectName,
}

/// `SET key = value`; both sides are raw source text
#[derive(Debug, Clone, PartialEq)]
pub struct SetConfigStatement {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// `[LIKE] 'pattern'`
#[derive(Debug, Clone, PartialEq)]
pub struct ShowPattern {
    pub like: bool,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    User,
    System,
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShowStatement {
    Namespaces {
        keyword: NamespaceKeyword,
        scope: Option<Scope>,
        pattern: Option<ShowPattern>,
    },
    Tables {
        scope: Option<Scope>,
        pattern: Option<ShowPattern>,
    },
    TableExtended {
        scope: Option<Scope>,
        pattern: String,
        partition: Option<PartitionSpec>,
    },
    Views {
        scope: Option<Scope>,
        pattern: Option<ShowPattern>,
    },
    Columns {
        table: Scope,
        namespace: Option<Scope>,
    },
    Partitions {
        table: ObjectName,
        partition: Option<PartitionSpec>,
    },
    TblProperties {
        table: ObjectName,
        key: Option<String>,
    },
    Functions {
        kind: Option<FunctionKind>,
        scope: Option<Scope>,
        pattern: Option<ShowPattern>,
    },
    CreateTable {
        table: ObjectName,
        as_serde: bool,
    },
    Catalogs {
        pattern: Option<ShowPattern>,
    },
    CurrentNamespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeDetail {
    Extended,
    Formatted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeStatement {
    /// `DESC` when true, `DESCRIBE` otherwise
    pub short: bool,
    pub target: DescribeTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescribeTarget {
    Table {
        table_keyword: bool,
        detail: Option<DescribeDetail>,
        table: ObjectName,
        partition: Option<PartitionSpec>,
        column: Option<ObjectName>,
    },
    Function {
        extended: bool,
        name: ObjectName,
    },
    Namespace {
        keyword: NamespaceKeyword,
        extended: bool,
        name: ObjectName,
    },
    Query {
        query_keyword: bool,
        query: Box<Query>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainMode {
    Logical,
    Formatted,
    Extended,
    Codegen,
    Cost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainStatement {
    pub mode: Option<ExplainMode>,
    pub statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStatement {
    pub procedure: ObjectName,
    pub args: Vec<FunctionArg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadDataStatement {
    pub local: bool,
    pub path: String,
    pub overwrite: bool,
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
}

/// `LOAD DATA 'path' [TABLE] t [OPTIONS (..)]`: load a file into a temporary table
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFileStatement {
    pub path: String,
    pub table_keyword: bool,
    pub table: ObjectName,
    pub options: Vec<Property>,
}

/// `[WITH ..] EXPORT TABLE t [PARTITION (..)] TO 'file' [OPTIONS (..)]`
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTableStatement {
    pub with: Option<WithClause>,
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
    pub path: String,
    pub options: Vec<Property>,
}

/// `DATATUNNEL SOURCE('kind') OPTIONS (..) [TRANSFORM = '..'] SINK('kind') OPTIONS (..)`
#[derive(Debug, Clone, PartialEq)]
pub struct DataTunnelStatement {
    pub source: String,
    pub source_options: Vec<TunnelProperty>,
    pub transform: Option<String>,
    pub sink: String,
    pub sink_options: Vec<TunnelProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TunnelProperty {
    pub key: String,
    pub value: TunnelValue,
}

/// Tunnel option values are kept as written; lists use brackets
#[derive(Debug, Clone, PartialEq)]
pub enum TunnelValue {
    Scalar(String),
    List(Vec<TunnelValue>),
}

/// `MERGE TABLE t [PARTITION (..)] [OPTIONS (..)]`: compact a table's small files
#[derive(Debug, Clone, PartialEq)]
pub struct MergeFileStatement {
    pub table: ObjectName,
    pub partition: Option<PartitionSpec>,
    pub options: Vec<Property>,
}
