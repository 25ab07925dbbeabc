//! Construct recognition and kind classification.

use gocheck_core::types::Kind;

/// Identifier-introducing constructs the walker hands to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `var x T` or a parenthesized `var (...)` group.
    VarGroup,
    /// `x := expr`, including `if`/`for`/`switch` initializers.
    ShortVar,
    /// Parameter list of a function or method declaration.
    Params,
    /// `type T ...` declaration, grouped or not.
    TypeDef,
}

impl Construct {
    /// Recognize a construct from a tree-sitter-go node kind.
    ///
    /// Function literals are deliberately absent: their parameters are not
    /// checked, only the bodies they open.
    pub fn from_node(kind: &str) -> Option<Self> {
        match kind {
            "var_declaration" => Some(Construct::VarGroup),
            "short_var_declaration" => Some(Construct::ShortVar),
            "function_declaration" | "method_declaration" => Some(Construct::Params),
            "type_declaration" => Some(Construct::TypeDef),
            _ => None,
        }
    }
}

/// Where a construct sits relative to function bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMarker {
    Package,
    FunctionBody,
}

impl ScopeMarker {
    /// Function, method and function-literal nodes open a body scope.
    pub fn enter(self, node_kind: &str) -> Self {
        match node_kind {
            "function_declaration" | "method_declaration" | "func_literal" => {
                ScopeMarker::FunctionBody
            }
            _ => self,
        }
    }
}

pub fn classify(construct: Construct, scope: ScopeMarker) -> Kind {
    match (construct, scope) {
        (Construct::VarGroup, ScopeMarker::Package) => Kind::Global,
        (Construct::VarGroup, ScopeMarker::FunctionBody) => Kind::Local,
        (Construct::ShortVar, _) => Kind::Local,
        (Construct::Params, _) => Kind::Parameter,
        (Construct::TypeDef, _) => Kind::TypeName,
    }
}
