//! Builder errors

use std::fmt;

/// Errors returned by `QueryPlanBuilder` append operations.
///
/// A failed append never changes builder state.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// A table alias is already bound within this plan
    DuplicateAlias {
        alias: String,
    },
    /// A clause references a table alias that was never registered
    UnknownAlias {
        alias: String,
        clause: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::DuplicateAlias { alias } => {
                write!(f, "Alias '{}' is already bound to a table in this plan", alias)
            }
            BuildError::UnknownAlias { alias, clause } => {
                write!(f, "{} references unknown table alias '{}'", clause, alias)
            }
        }
    }
}

impl std::error::Error for BuildError {}
