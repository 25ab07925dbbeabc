//! Expression type inference for the single-file checker.

use tree_sitter::Node;

use super::TypeChecker;
use crate::resolver::{is_basic_type_name, GoType, TypeProvider};

const BOOL_OPERATORS: &[&str] = &["==", "!=", "<", "<=", ">", ">=", "&&", "||"];

impl<'a> TypeChecker<'a> {
    /// Type of the `index`-th name in `names = values`.
    ///
    /// With one value per name each value is inferred on its own; a single
    /// value feeding several names is a multi-value call or a comma-ok form.
    pub(super) fn infer_value(
        &self,
        values: &[Node<'_>],
        index: usize,
        name_count: usize,
    ) -> Option<GoType> {
        if values.len() == name_count {
            return self.infer(*values.get(index)?);
        }
        let [value] = values else {
            return None;
        };
        let value = strip_parens(*value);
        match value.kind() {
            "call_expression" => self.infer_call(value, index),
            "index_expression" | "type_assertion_expression" | "unary_expression"
                if name_count == 2 =>
            {
                if index == 0 {
                    self.infer(value)
                } else {
                    Some(GoType::basic("bool"))
                }
            }
            _ => None,
        }
    }

    pub(super) fn infer(&self, node: Node<'_>) -> Option<GoType> {
        match node.kind() {
            "identifier" => self.lookup(self.text(node)),
            "true" | "false" => Some(GoType::basic("bool")),
            "int_literal" => Some(GoType::basic("int")),
            "float_literal" => Some(GoType::basic("float64")),
            "imaginary_literal" => Some(GoType::basic("complex128")),
            "rune_literal" => Some(GoType::basic("rune")),
            "interpreted_string_literal" | "raw_string_literal" => Some(GoType::basic("string")),
            "iota" => Some(GoType::basic("int")),
            "composite_literal" => node
                .child_by_field_name("type")
                .map(|t| self.type_from(t)),
            "func_literal" => Some(GoType::Func(
                self.results_from(node.child_by_field_name("result")),
            )),
            "parenthesized_expression" => self.infer(node.named_child(0)?),
            "unary_expression" => self.infer_unary(node),
            "binary_expression" => {
                let op = node.child_by_field_name("operator")?.kind();
                if BOOL_OPERATORS.contains(&op) {
                    return Some(GoType::basic("bool"));
                }
                let left = node.child_by_field_name("left").and_then(|l| self.infer(l));
                left.or_else(|| node.child_by_field_name("right").and_then(|r| self.infer(r)))
            }
            "call_expression" => self.infer_call(node, 0),
            "type_conversion_expression" | "type_assertion_expression" => node
                .child_by_field_name("type")
                .map(|t| self.type_from(t)),
            "index_expression" => {
                let operand = self.infer(node.child_by_field_name("operand")?)?;
                match self.info.underlying(&operand)? {
                    GoType::Slice(elem) | GoType::Array(elem) => Some(elem.as_ref().clone()),
                    GoType::Map(_, value) => Some(value.as_ref().clone()),
                    GoType::Pointer(inner) => match self.info.underlying(inner)? {
                        GoType::Array(elem) => Some(elem.as_ref().clone()),
                        _ => None,
                    },
                    t if t.is_string() => Some(GoType::basic("byte")),
                    _ => None,
                }
            }
            "slice_expression" => {
                let operand = self.infer(node.child_by_field_name("operand")?)?;
                match self.info.underlying(&operand)? {
                    GoType::Array(elem) => Some(GoType::Slice(elem.clone())),
                    GoType::Pointer(inner) => match self.info.underlying(inner)? {
                        GoType::Array(elem) => Some(GoType::Slice(elem.clone())),
                        _ => None,
                    },
                    GoType::Slice(_) | GoType::Basic(_) => Some(operand.clone()),
                    _ => None,
                }
            }
            "selector_expression" => {
                let operand = self.infer(node.child_by_field_name("operand")?)?;
                let field = self.text(node.child_by_field_name("field")?);
                self.field_type(&operand, field)
            }
            _ => None,
        }
    }

    fn infer_unary(&self, node: Node<'_>) -> Option<GoType> {
        let op = node.child_by_field_name("operator")?.kind();
        let operand = node.child_by_field_name("operand")?;
        match op {
            "&" => Some(GoType::Pointer(Box::new(self.infer(operand)?))),
            "!" => Some(GoType::basic("bool")),
            "<-" => {
                let chan = self.infer(operand)?;
                match self.info.underlying(&chan)? {
                    GoType::Chan(elem) => Some(elem.as_ref().clone()),
                    _ => None,
                }
            }
            "*" => {
                let ptr = self.infer(operand)?;
                match self.info.underlying(&ptr)? {
                    GoType::Pointer(inner) => Some(inner.as_ref().clone()),
                    _ => None,
                }
            }
            _ => self.infer(operand),
        }
    }

    /// The `index`-th result of a call, builtins and conversions included.
    pub(super) fn infer_call(&self, node: Node<'_>, index: usize) -> Option<GoType> {
        let function = strip_parens(node.child_by_field_name("function")?);
        let first_arg = node
            .child_by_field_name("arguments")
            .and_then(|args| args.named_child(0));

        match function.kind() {
            "identifier" => {
                let name = self.text(function);
                match name {
                    "make" if index == 0 => first_arg.map(|t| self.type_from(t)),
                    "new" if index == 0 => {
                        Some(GoType::Pointer(Box::new(self.type_from(first_arg?))))
                    }
                    "append" if index == 0 => self.infer(first_arg?),
                    "len" | "cap" | "copy" => Some(GoType::basic("int")),
                    "real" | "imag" => Some(GoType::basic("float64")),
                    "complex" => Some(GoType::basic("complex128")),
                    _ => match self.lookup(name) {
                        Some(callee) => match self.info.underlying(&callee)? {
                            GoType::Func(results) => results.get(index).cloned(),
                            _ => None,
                        },
                        None if is_basic_type_name(name) => Some(GoType::basic(name)),
                        // Conversion to a type name: `Ids(raw)`, `T(v)`.
                        None => match self.resolve_type_name(name) {
                            GoType::Named(key) if self.info.named_type(&key).is_some() => {
                                Some(GoType::Named(key))
                            }
                            param @ GoType::TypeParam(_) => Some(param),
                            _ => None,
                        },
                    },
                }
            }
            "selector_expression" => {
                let method = self.text(function.child_by_field_name("field")?);
                let receiver = self.infer(function.child_by_field_name("operand")?)?;
                if let Some(type_name) = receiver.receiver_name() {
                    if let Some(results) = self.info.results_of(&format!("{type_name}.{method}")) {
                        return results.get(index).cloned();
                    }
                }
                // A func-typed struct field called like a method.
                let field = self.field_type(&receiver, method)?;
                match self.info.underlying(&field)? {
                    GoType::Func(results) => results.get(index).cloned(),
                    _ => None,
                }
            }
            "func_literal" => {
                self.results_from(function.child_by_field_name("result"))
                    .get(index)
                    .cloned()
            }
            // Conversions spelled as types: `[]byte(s)`, `map[string]int(m)`.
            "slice_type" | "array_type" | "map_type" | "channel_type" | "pointer_type"
                if index == 0 =>
            {
                Some(self.type_from(function))
            }
            _ => None,
        }
    }

    /// Type of `operand.field`, looking through one pointer.
    fn field_type(&self, operand: &GoType, field: &str) -> Option<GoType> {
        let mut base = self.info.underlying(operand)?;
        if let GoType::Pointer(inner) = base {
            base = self.info.underlying(inner)?;
        }
        match base {
            GoType::Struct(fields) => fields
                .iter()
                .find(|f| f.name == field)
                .map(|f| f.ty.clone()),
            _ => None,
        }
    }
}

fn strip_parens(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}
