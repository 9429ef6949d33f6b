//! Renderer errors

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Plan has no tables to render a FROM clause from
    EmptyPlan,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyPlan => {
                write!(f, "Plan has no tables; nothing to render")
            }
        }
    }
}

impl std::error::Error for RenderError {}
