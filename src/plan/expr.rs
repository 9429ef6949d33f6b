//! Expression types shared by the plan and the description surface

use serde::Deserialize;

/// A column reference
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Table alias or name; empty for unqualified references
    pub table: String,
    /// Column name
    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Create an unqualified column reference (no table prefix)
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: String::new(),
            name: name.into(),
        }
    }

    /// Parse the `table.column` or bare `column` text form
    pub fn parse(text: &str) -> Self {
        match text.split_once('.') {
            Some((table, name)) => Self::new(table, name),
            None => Self::unqualified(text),
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.table.is_empty()
    }

    /// Fully qualified name: table.column
    pub fn qualified_name(&self) -> String {
        if self.table.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.table, self.name)
        }
    }
}

/// Comparison operators allowed in WHERE and HAVING predicates
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    IsNull,
    IsNotNull,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::GtEq => ">=",
            CompareOp::LtEq => "<=",
            CompareOp::IsNull => "IS NULL",
            CompareOp::IsNotNull => "IS NOT NULL",
        }
    }

    /// Null tests are postfix and carry no comparison value
    pub fn is_null_test(&self) -> bool {
        matches!(self, CompareOp::IsNull | CompareOp::IsNotNull)
    }
}

/// Scalar comparison values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// A single WHERE or HAVING predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: Column,
    pub op: CompareOp,
    /// Absent for null-test operators
    pub value: Option<ScalarValue>,
}

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateFn {
    Count,
    CountDistinct,
    Sum,
    Avg,
}

/// An aggregate output: func(column) AS alias
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSpec {
    pub func: AggregateFn,
    pub column: Column,
    pub alias: String,
}
