use serde::{Deserialize, Serialize};

/// Declarative role of an identifier-introducing construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Global,
    Local,
    Parameter,
    TypeName,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Global => "global",
            Kind::Local => "local",
            Kind::Parameter => "parameter",
            Kind::TypeName => "type_name",
        }
    }

    /// Whether shape rules apply to bindings of this kind.
    pub fn is_variable(&self) -> bool {
        matches!(self, Kind::Global | Kind::Local)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural category of a binding's resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Scalar,
    Sequence,
    Map,
    Struct,
    Channel,
    /// The type provider could not resolve a type. Rules treat this like `Scalar`.
    Unresolved,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::Sequence => "sequence",
            Shape::Map => "map",
            Shape::Struct => "struct",
            Shape::Channel => "channel",
            Shape::Unresolved => "unresolved",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based line and byte column, the way Go reports `token.Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Convert a 0-based tree-sitter row/column pair.
    pub fn from_zero_based(row: usize, column: usize) -> Self {
        Self {
            line: row as u32 + 1,
            column: column as u32 + 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The blank identifier. Never produces a binding.
pub const BLANK_IDENT: &str = "_";
