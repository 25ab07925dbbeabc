use gocheck_core::types::{Kind, Position, Shape};
use serde::{Deserialize, Serialize};

/// One broken naming rule, reported at the declaration site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub name: String,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

/// Violations for one checked file, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub file: String,
    pub violations: Vec<Violation>,
}

impl AnalyzeResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// An identifier's declaration site, classified. Lives for one pass only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub position: Position,
    pub kind: Kind,
    pub shape: Shape,
}

impl Binding {
    pub fn violation(&self, message: String) -> Violation {
        Violation {
            name: self.name.clone(),
            message,
            line: self.position.line,
            column: self.position.column,
        }
    }
}
