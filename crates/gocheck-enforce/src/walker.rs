//! Single pre-order pass over the syntax tree.

use gocheck_core::types::{Kind, Shape};
use gocheck_parsers::resolver::TypeProvider;
use gocheck_parsers::treesitter::{position_of, ParsedFile};
use tree_sitter::Node;

use crate::classify::{classify, Construct, ScopeMarker};
use crate::collector::ViolationCollector;
use crate::rules::RuleTable;
use crate::shape::shape_of;
use crate::types::Binding;

/// Visits every node once, in source order, feeding bindings to the collector.
pub struct TreeWalker<'a> {
    file: &'a ParsedFile,
    types: &'a dyn TypeProvider,
    rules: &'a RuleTable,
    collector: ViolationCollector,
}

impl<'a> TreeWalker<'a> {
    pub fn new(file: &'a ParsedFile, types: &'a dyn TypeProvider, rules: &'a RuleTable) -> Self {
        Self {
            file,
            types,
            rules,
            collector: ViolationCollector::new(),
        }
    }

    /// Walk the whole file and hand back the collected violations.
    pub fn walk(mut self) -> ViolationCollector {
        let root = self.file.root();
        self.visit(root, ScopeMarker::Package);
        self.collector
    }

    fn visit(&mut self, node: Node<'a>, scope: ScopeMarker) {
        if let Some(construct) = Construct::from_node(node.kind()) {
            let kind = classify(construct, scope);
            match construct {
                Construct::VarGroup => self.var_group(node, kind),
                Construct::ShortVar => self.short_var(node, kind),
                Construct::Params => self.params(node, kind),
                Construct::TypeDef => self.type_def(node, kind),
            }
        }

        let inner = scope.enter(node.kind());
        let mut cursor = node.walk();
        let children: Vec<Node<'a>> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, inner);
        }
    }

    fn bind(&mut self, ident: Node<'a>, kind: Kind, shape: Shape) {
        let binding = Binding {
            name: self.file.text(ident).to_string(),
            position: position_of(ident),
            kind,
            shape,
        };
        self.collector.record(&binding, self.rules);
    }

    fn bind_variable(&mut self, ident: Node<'a>, kind: Kind) {
        let shape = shape_of(ident.start_byte(), self.types);
        if shape == Shape::Unresolved {
            tracing::debug!(
                name = self.file.text(ident),
                line = ident.start_position().row + 1,
                "shape unresolved, treating as scalar"
            );
        }
        self.bind(ident, kind, shape);
    }

    fn var_group(&mut self, decl: Node<'a>, kind: Kind) {
        let mut specs = Vec::new();
        let mut cursor = decl.walk();
        for child in decl.named_children(&mut cursor) {
            match child.kind() {
                "var_spec" => specs.push(child),
                "var_spec_list" => {
                    let mut inner = child.walk();
                    specs.extend(
                        child
                            .named_children(&mut inner)
                            .filter(|s| s.kind() == "var_spec"),
                    );
                }
                _ => {}
            }
        }
        for spec in specs {
            let mut name_cursor = spec.walk();
            let names: Vec<Node<'a>> = spec
                .children_by_field_name("name", &mut name_cursor)
                .collect();
            for name in names {
                self.bind_variable(name, kind);
            }
        }
    }

    fn short_var(&mut self, stmt: Node<'a>, kind: Kind) {
        let Some(left) = stmt.child_by_field_name("left") else {
            return;
        };
        let mut cursor = left.walk();
        let names: Vec<Node<'a>> = if left.kind() == "expression_list" {
            left.named_children(&mut cursor)
                .filter(|n| n.kind() == "identifier")
                .collect()
        } else if left.kind() == "identifier" {
            vec![left]
        } else {
            vec![]
        };
        for name in names {
            self.bind_variable(name, kind);
        }
    }

    /// Parameters of a function or method. Receivers and results are skipped.
    fn params(&mut self, func: Node<'a>, kind: Kind) {
        let Some(list) = func.child_by_field_name("parameters") else {
            return;
        };
        let mut cursor = list.walk();
        let params: Vec<Node<'a>> = list.named_children(&mut cursor).collect();
        for param in params {
            if !matches!(
                param.kind(),
                "parameter_declaration" | "variadic_parameter_declaration"
            ) {
                continue;
            }
            let mut name_cursor = param.walk();
            let names: Vec<Node<'a>> = param
                .children_by_field_name("name", &mut name_cursor)
                .collect();
            for name in names {
                self.bind(name, kind, Shape::Scalar);
            }
        }
    }

    /// Type names whose definition resolves to a struct.
    fn type_def(&mut self, decl: Node<'a>, kind: Kind) {
        let mut cursor = decl.walk();
        let specs: Vec<Node<'a>> = decl
            .named_children(&mut cursor)
            .filter(|s| matches!(s.kind(), "type_spec" | "type_alias"))
            .collect();
        for spec in specs {
            let Some(name) = spec.child_by_field_name("name") else {
                continue;
            };
            let shape = shape_of(name.start_byte(), self.types);
            if shape == Shape::Struct {
                self.bind(name, kind, shape);
            }
        }
    }
}
