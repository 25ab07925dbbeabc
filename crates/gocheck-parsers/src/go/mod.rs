//! Single-file type resolution for Go.
//!
//! [`TypeChecker`] stands in for `go/types` without an importer: it records a
//! declared or inferred type for every identifier it can, keyed by the byte
//! offset of the declaring identifier, and leaves everything else unresolved.
//! Imported packages, generic type parameters and type-switch bindings are
//! never resolved.
//!
//! Type names are scoped like values: a `type` declared inside a function is
//! stored under `name@offset` and only references inside its scope see it.
//! Type parameters shadow package types of the same name.

mod infer;
pub mod type_resolution;

use std::collections::{HashMap, HashSet};

use tree_sitter::Node;

use crate::resolver::{Field, GoType, TypeProvider};
use crate::treesitter::{node_text, ParsedFile};
use type_resolution::{
    parse_results, parse_type, receiver_type_name, receiver_type_params, type_param_names,
};

/// Node kinds that open a lexical scope.
const SCOPE_KINDS: &[&str] = &[
    "block",
    "if_statement",
    "for_statement",
    "expression_switch_statement",
    "type_switch_statement",
    "select_statement",
    "expression_case",
    "type_case",
    "default_case",
    "communication_case",
];

/// Result of type-checking one file.
#[derive(Debug, Default)]
pub struct TypeInfo {
    defs: HashMap<usize, GoType>,
    named: HashMap<String, GoType>,
    funcs: HashMap<String, Vec<GoType>>,
    unresolved: usize,
}

impl TypeInfo {
    /// Number of declarations whose type could not be determined.
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }

    pub fn resolved_count(&self) -> usize {
        self.defs.len()
    }

    /// Result types of a function, or of a method keyed as `Type.Method`.
    pub fn results_of(&self, func: &str) -> Option<&[GoType]> {
        self.funcs.get(func).map(Vec::as_slice)
    }
}

impl TypeProvider for TypeInfo {
    fn type_of(&self, decl_offset: usize) -> Option<&GoType> {
        self.defs.get(&decl_offset)
    }

    fn named_type(&self, name: &str) -> Option<&GoType> {
        self.named.get(name)
    }
}

/// What a type name means inside a function scope.
#[derive(Debug)]
enum LocalType {
    /// A local `type` declaration, keyed into [`TypeInfo`] as `name@offset`.
    Declared(String),
    Param,
}

/// Walks a parsed file once to build its [`TypeInfo`].
pub struct TypeChecker<'a> {
    source: &'a [u8],
    info: TypeInfo,
    globals: HashMap<String, Option<GoType>>,
    scopes: Vec<HashMap<String, Option<GoType>>>,
    type_scopes: Vec<HashMap<String, LocalType>>,
    pending: HashSet<usize>,
}

impl<'a> TypeChecker<'a> {
    /// Type-check `file`. Never fails; unknown types are simply absent.
    pub fn check(file: &'a ParsedFile) -> TypeInfo {
        let mut checker = TypeChecker {
            source: file.bytes(),
            info: TypeInfo::default(),
            globals: HashMap::new(),
            scopes: Vec::new(),
            type_scopes: Vec::new(),
            pending: HashSet::new(),
        };
        let root = file.root();
        checker.collect_package_decls(root);
        // Package-level vars may refer to each other in any order; the second
        // round sees every name the first round resolved.
        for _ in 0..2 {
            checker.declare_package_values(root);
        }
        checker.visit_children(root);
        checker.info.unresolved = checker.pending.len();

        tracing::debug!(
            resolved = checker.info.defs.len(),
            unresolved = checker.info.unresolved,
            named_types = checker.info.named.len(),
            "type check finished"
        );
        checker.info
    }

    fn text(&self, node: Node<'_>) -> &'a str {
        node_text(node, self.source)
    }

    // -- package level --------------------------------------------------

    fn collect_package_decls(&mut self, root: Node<'_>) {
        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            match decl.kind() {
                "type_declaration" => self.declare_types(decl),
                "function_declaration" => {
                    let Some(name) = decl.child_by_field_name("name") else {
                        continue;
                    };
                    let params =
                        type_param_names(decl.child_by_field_name("type_parameters"), self.source);
                    let results = self.results_with_params(decl, params);
                    let name = self.text(name).to_string();
                    self.globals
                        .insert(name.clone(), Some(GoType::Func(results.clone())));
                    self.info.funcs.insert(name, results);
                }
                "method_declaration" => {
                    let (Some(name), Some(receiver)) = (
                        decl.child_by_field_name("name"),
                        decl.child_by_field_name("receiver"),
                    ) else {
                        continue;
                    };
                    let Some(recv) = receiver_type_name(receiver, self.source) else {
                        continue;
                    };
                    let params = receiver_type_params(receiver, self.source);
                    let results = self.results_with_params(decl, params);
                    let key = format!("{recv}.{}", self.text(name));
                    self.info.funcs.insert(key, results);
                }
                _ => {}
            }
        }
    }

    fn declare_package_values(&mut self, root: Node<'_>) {
        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if matches!(decl.kind(), "var_declaration" | "const_declaration") {
                self.declare_values(decl);
            }
        }
    }

    /// Results of a function or method, its type parameters in scope.
    fn results_with_params(&mut self, decl: Node<'_>, params: Vec<String>) -> Vec<GoType> {
        self.type_scopes.push(param_scope(params));
        let results = self.results_from(decl.child_by_field_name("result"));
        self.type_scopes.pop();
        results
    }

    /// Record every `type_spec`/`type_alias` of a `type` declaration.
    ///
    /// Package types are keyed by name, the first declaration winning. A
    /// local type is bound in the innermost scope before its right-hand side
    /// is converted, so `type node struct{ next *node }` refers to itself.
    fn declare_types(&mut self, decl: Node<'_>) {
        let mut cursor = decl.walk();
        let specs: Vec<Node<'_>> = decl.named_children(&mut cursor).collect();
        for spec in specs {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            let (Some(name), Some(ty_node)) = (
                spec.child_by_field_name("name"),
                spec.child_by_field_name("type"),
            ) else {
                continue;
            };
            let type_name = self.text(name);
            let key = match self.type_scopes.last_mut() {
                Some(scope) => {
                    let key = format!("{type_name}@{}", name.start_byte());
                    scope.insert(type_name.to_string(), LocalType::Declared(key.clone()));
                    Some(key)
                }
                None => None,
            };

            let params = type_param_names(spec.child_by_field_name("type_parameters"), self.source);
            self.type_scopes.push(param_scope(params));
            let ty = self.type_from(ty_node);
            self.type_scopes.pop();

            self.info.defs.insert(name.start_byte(), ty.clone());
            match key {
                Some(key) => {
                    self.info.named.insert(key, ty);
                }
                None => {
                    self.info.named.entry(type_name.to_string()).or_insert(ty);
                }
            }
        }
    }

    // -- type names -----------------------------------------------------

    /// Convert a type expression, resolving names from the current scope out.
    pub(super) fn type_from(&self, node: Node<'_>) -> GoType {
        self.scoped(parse_type(node, self.source))
    }

    pub(super) fn results_from(&self, result: Option<Node<'_>>) -> Vec<GoType> {
        parse_results(result, self.source)
            .into_iter()
            .map(|t| self.scoped(t))
            .collect()
    }

    /// What a bare type name refers to at this point of the traversal.
    pub(super) fn resolve_type_name(&self, name: &str) -> GoType {
        for scope in self.type_scopes.iter().rev() {
            match scope.get(name) {
                Some(LocalType::Declared(key)) => return GoType::Named(key.clone()),
                Some(LocalType::Param) => return GoType::TypeParam(name.to_string()),
                None => {}
            }
        }
        GoType::Named(name.to_string())
    }

    fn scoped(&self, ty: GoType) -> GoType {
        if self.type_scopes.is_empty() {
            return ty;
        }
        let wrap = |inner: Box<GoType>| Box::new(self.scoped(*inner));
        match ty {
            GoType::Named(name) => self.resolve_type_name(&name),
            GoType::Pointer(inner) => GoType::Pointer(wrap(inner)),
            GoType::Slice(elem) => GoType::Slice(wrap(elem)),
            GoType::Array(elem) => GoType::Array(wrap(elem)),
            GoType::Chan(elem) => GoType::Chan(wrap(elem)),
            GoType::Map(key, value) => GoType::Map(wrap(key), wrap(value)),
            GoType::Struct(fields) => GoType::Struct(
                fields
                    .into_iter()
                    .map(|f| Field {
                        name: f.name,
                        ty: self.scoped(f.ty),
                    })
                    .collect(),
            ),
            GoType::Func(results) => {
                GoType::Func(results.into_iter().map(|t| self.scoped(t)).collect())
            }
            other => other,
        }
    }

    // -- scopes ---------------------------------------------------------

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
        self.type_scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
        self.type_scopes.pop();
    }

    fn lookup(&self, name: &str) -> Option<GoType> {
        for scope in self.scopes.iter().rev() {
            if let Some(ty) = scope.get(name) {
                return ty.clone();
            }
        }
        self.globals.get(name).cloned().flatten()
    }

    /// Bind `ident` in the innermost scope (package scope when none is open).
    fn declare(&mut self, ident: Node<'_>, ty: Option<GoType>) {
        let name = self.text(ident);
        if name == "_" {
            return;
        }
        let offset = ident.start_byte();
        match &ty {
            Some(t) => {
                self.info.defs.insert(offset, t.clone());
                self.pending.remove(&offset);
            }
            None => {
                if !self.info.defs.contains_key(&offset) && self.pending.insert(offset) {
                    tracing::trace!(name, line = ident.start_position().row + 1, "unresolved type");
                }
            }
        }
        let slot = match self.scopes.last_mut() {
            Some(scope) => scope,
            None => &mut self.globals,
        };
        // Keep what an earlier package round already resolved.
        let keep_existing = ty.is_none() && matches!(slot.get(name), Some(Some(_)));
        if !keep_existing {
            slot.insert(name.to_string(), ty);
        }
    }

    // -- declarations ---------------------------------------------------

    /// `var`/`const` declarations, grouped or not.
    fn declare_values(&mut self, decl: Node<'_>) {
        let mut cursor = decl.walk();
        let specs: Vec<Node<'_>> = decl.named_children(&mut cursor).collect();
        for spec in specs {
            match spec.kind() {
                "var_spec" | "const_spec" => self.declare_spec(spec),
                "var_spec_list" | "const_spec_list" => {
                    let mut inner = spec.walk();
                    let nested: Vec<Node<'_>> = spec.named_children(&mut inner).collect();
                    for s in nested {
                        if matches!(s.kind(), "var_spec" | "const_spec") {
                            self.declare_spec(s);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn declare_spec(&mut self, spec: Node<'_>) {
        let mut cursor = spec.walk();
        let names: Vec<Node<'_>> = spec.children_by_field_name("name", &mut cursor).collect();
        let declared = spec
            .child_by_field_name("type")
            .map(|t| self.type_from(t));
        let values = spec
            .child_by_field_name("value")
            .map(|list| self.expression_list(list))
            .unwrap_or_default();

        for (i, name) in names.iter().enumerate() {
            let ty = match &declared {
                Some(t) => Some(t.clone()),
                None => self.infer_value(&values, i, names.len()),
            };
            self.declare(*name, ty);
        }
    }

    fn declare_short_var(&mut self, node: Node<'_>) {
        let (Some(left), Some(right)) = (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) else {
            return;
        };
        let names = self.expression_list(left);
        let values = self.expression_list(right);
        for (i, name) in names.iter().enumerate() {
            if name.kind() != "identifier" {
                continue;
            }
            let ty = self.infer_value(&values, i, names.len());
            self.declare(*name, ty);
        }
    }

    fn declare_params(&mut self, list: Node<'_>) {
        let mut cursor = list.walk();
        let params: Vec<Node<'_>> = list.named_children(&mut cursor).collect();
        for param in params {
            let Some(type_node) = param.child_by_field_name("type") else {
                continue;
            };
            let mut ty = self.type_from(type_node);
            if param.kind() == "variadic_parameter_declaration" {
                ty = GoType::Slice(Box::new(ty));
            }
            let mut name_cursor = param.walk();
            let names: Vec<Node<'_>> = param
                .children_by_field_name("name", &mut name_cursor)
                .collect();
            for name in names {
                self.declare(name, Some(ty.clone()));
            }
        }
    }

    /// `for k, v := range x` binds key/element types for later inference.
    fn declare_range(&mut self, clause: Node<'_>) {
        let mut cursor = clause.walk();
        let defines = clause.children(&mut cursor).any(|c| c.kind() == ":=");
        let (Some(left), Some(right)) = (
            clause.child_by_field_name("left"),
            clause.child_by_field_name("right"),
        ) else {
            return;
        };
        if !defines {
            return;
        }
        let ranged = self.infer(right);
        let (key, value) = match ranged.as_ref().and_then(|t| self.info.underlying(t)) {
            Some(GoType::Slice(elem)) | Some(GoType::Array(elem)) => {
                (Some(GoType::basic("int")), Some(elem.as_ref().clone()))
            }
            Some(GoType::Pointer(inner)) => match self.info.underlying(inner) {
                Some(GoType::Array(elem)) => {
                    (Some(GoType::basic("int")), Some(elem.as_ref().clone()))
                }
                _ => (None, None),
            },
            Some(GoType::Map(k, v)) => (Some(k.as_ref().clone()), Some(v.as_ref().clone())),
            Some(GoType::Chan(elem)) => (Some(elem.as_ref().clone()), None),
            Some(GoType::Basic(name)) if name == "string" => {
                (Some(GoType::basic("int")), Some(GoType::basic("rune")))
            }
            Some(GoType::Basic(name)) if name.starts_with("int") || name.starts_with("uint") => {
                (Some(GoType::Basic(name.clone())), None)
            }
            _ => (None, None),
        };
        let names = self.expression_list(left);
        for (i, name) in names.iter().enumerate() {
            let ty = if i == 0 { key.clone() } else { value.clone() };
            self.declare(*name, ty);
        }
    }

    fn expression_list<'t>(&self, list: Node<'t>) -> Vec<Node<'t>> {
        if list.kind() != "expression_list" {
            return vec![list];
        }
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|c| c.kind() != "comment")
            .collect()
    }

    // -- traversal ------------------------------------------------------

    fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            "function_declaration" | "method_declaration" | "func_literal" => {
                self.visit_function(node)
            }
            "var_declaration" | "const_declaration" => {
                self.visit_children(node);
                if !self.scopes.is_empty() {
                    self.declare_values(node);
                }
            }
            "short_var_declaration" => {
                if let Some(right) = node.child_by_field_name("right") {
                    self.visit(right);
                }
                self.declare_short_var(node);
            }
            "type_declaration" => {
                if !self.scopes.is_empty() {
                    self.declare_types(node);
                }
            }
            "range_clause" => {
                if let Some(right) = node.child_by_field_name("right") {
                    self.visit(right);
                }
                self.declare_range(node);
            }
            kind if SCOPE_KINDS.contains(&kind) => {
                self.push_scope();
                self.visit_children(node);
                self.pop_scope();
            }
            _ => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child);
        }
    }

    fn visit_function(&mut self, node: Node<'_>) {
        self.push_scope();
        let mut params = type_param_names(node.child_by_field_name("type_parameters"), self.source);
        if let Some(receiver) = node.child_by_field_name("receiver") {
            params.extend(receiver_type_params(receiver, self.source));
        }
        if let Some(scope) = self.type_scopes.last_mut() {
            scope.extend(params.into_iter().map(|p| (p, LocalType::Param)));
        }
        for field in ["receiver", "parameters", "result"] {
            if let Some(list) = node.child_by_field_name(field) {
                if list.kind() == "parameter_list" {
                    self.declare_params(list);
                }
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.visit(body);
        }
        self.pop_scope();
    }
}

fn param_scope(params: Vec<String>) -> HashMap<String, LocalType> {
    params.into_iter().map(|p| (p, LocalType::Param)).collect()
}
