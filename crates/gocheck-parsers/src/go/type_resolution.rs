//! Go type syntax → [`GoType`]: declared types, struct fields, result lists, receivers.

use tree_sitter::Node;

use crate::resolver::{basic_or_named, Field, GoType};
use crate::treesitter::node_text;

/// Convert a type expression node into a [`GoType`].
pub fn parse_type(node: Node<'_>, source: &[u8]) -> GoType {
    let inner = |field: &str| -> GoType {
        match node.child_by_field_name(field) {
            Some(child) => parse_type(child, source),
            None => GoType::Interface,
        }
    };
    match node.kind() {
        "type_identifier" | "identifier" => basic_or_named(node_text(node, source)),
        "qualified_type" => GoType::Qualified(node_text(node, source).to_string()),
        "generic_type" => inner("type"),
        "pointer_type" => match node.named_child(0) {
            Some(child) => GoType::Pointer(Box::new(parse_type(child, source))),
            None => GoType::Interface,
        },
        "slice_type" => GoType::Slice(Box::new(inner("element"))),
        "array_type" | "implicit_length_array_type" => GoType::Array(Box::new(inner("element"))),
        "map_type" => GoType::Map(Box::new(inner("key")), Box::new(inner("value"))),
        "channel_type" => GoType::Chan(Box::new(inner("value"))),
        "struct_type" => GoType::Struct(parse_fields(node, source)),
        "interface_type" | "negated_type" => GoType::Interface,
        "function_type" => GoType::Func(parse_results(node.child_by_field_name("result"), source)),
        "parenthesized_type" => match node.named_child(0) {
            Some(child) => parse_type(child, source),
            None => GoType::Interface,
        },
        _ => GoType::Named(node_text(node, source).to_string()),
    }
}

/// Fields of a `struct_type`, embedded fields named after their type.
pub fn parse_fields(struct_node: Node<'_>, source: &[u8]) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut cursor = struct_node.walk();
    let Some(list) = struct_node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "field_declaration_list")
    else {
        return fields;
    };

    let mut list_cursor = list.walk();
    for decl in list.named_children(&mut list_cursor) {
        if decl.kind() != "field_declaration" {
            continue;
        }
        let Some(type_node) = decl.child_by_field_name("type") else {
            continue;
        };
        let ty = parse_type(type_node, source);
        let mut name_cursor = decl.walk();
        let names: Vec<&str> = decl
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| node_text(n, source))
            .collect();
        if names.is_empty() {
            let embedded = node_text(type_node, source).trim_start_matches('*');
            let name = embedded.rsplit('.').next().unwrap_or(embedded);
            fields.push(Field {
                name: name.to_string(),
                ty,
            });
        } else {
            for name in names {
                fields.push(Field {
                    name: name.to_string(),
                    ty: ty.clone(),
                });
            }
        }
    }
    fields
}

/// Result types of a function signature, one entry per value.
pub fn parse_results(result: Option<Node<'_>>, source: &[u8]) -> Vec<GoType> {
    let Some(result) = result else {
        return vec![];
    };
    if result.kind() != "parameter_list" {
        return vec![parse_type(result, source)];
    }
    let mut results = Vec::new();
    let mut cursor = result.walk();
    for param in result.named_children(&mut cursor) {
        let Some(type_node) = param.child_by_field_name("type") else {
            continue;
        };
        let ty = parse_type(type_node, source);
        let mut name_cursor = param.walk();
        let count = param
            .children_by_field_name("name", &mut name_cursor)
            .count()
            .max(1);
        results.extend(std::iter::repeat(ty).take(count));
    }
    results
}

/// Base type name of a method receiver: `(s *Stack[T])` -> `Stack`.
pub fn receiver_type_name(receiver: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = receiver.walk();
    let param = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")?;
    let mut ty = param.child_by_field_name("type")?;
    loop {
        match ty.kind() {
            "pointer_type" | "parenthesized_type" => ty = ty.named_child(0)?,
            "generic_type" => ty = ty.child_by_field_name("type")?,
            "type_identifier" => return Some(node_text(ty, source).to_string()),
            _ => return None,
        }
    }
}

/// Names introduced by a `type_parameter_list`: `[K comparable, V any]` -> `K`, `V`.
pub fn type_param_names(list: Option<Node<'_>>, source: &[u8]) -> Vec<String> {
    let Some(list) = list else {
        return vec![];
    };
    let mut names = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        if decl.kind() != "type_parameter_declaration" {
            continue;
        }
        let mut name_cursor = decl.walk();
        names.extend(
            decl.children_by_field_name("name", &mut name_cursor)
                .map(|n| node_text(n, source).to_string()),
        );
    }
    names
}

/// Type parameters a method receiver rebinds: `(s *Stack[T])` -> `T`.
pub fn receiver_type_params(receiver: Node<'_>, source: &[u8]) -> Vec<String> {
    let mut cursor = receiver.walk();
    let Some(mut ty) = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")
        .and_then(|p| p.child_by_field_name("type"))
    else {
        return vec![];
    };
    while matches!(ty.kind(), "pointer_type" | "parenthesized_type") {
        match ty.named_child(0) {
            Some(inner) => ty = inner,
            None => return vec![],
        }
    }
    let Some(args) = ty
        .child_by_field_name("type_arguments")
        .filter(|_| ty.kind() == "generic_type")
    else {
        return vec![];
    };
    let mut names = Vec::new();
    collect_type_identifiers(args, source, &mut names);
    names
}

fn collect_type_identifiers(node: Node<'_>, source: &[u8], out: &mut Vec<String>) {
    if node.kind() == "type_identifier" {
        out.push(node_text(node, source).to_string());
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_type_identifiers(child, source, out);
    }
}
