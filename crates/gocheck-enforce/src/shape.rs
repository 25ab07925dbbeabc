use gocheck_core::types::Shape;
use gocheck_parsers::resolver::{GoType, TypeProvider};

/// Shape of the binding declared at `decl_offset`.
pub fn shape_of(decl_offset: usize, types: &dyn TypeProvider) -> Shape {
    match types.type_of(decl_offset) {
        Some(ty) => shape_of_type(ty, types),
        None => Shape::Unresolved,
    }
}

/// Reduce a type to its shape, looking through named and alias wrappers.
pub fn shape_of_type(ty: &GoType, types: &dyn TypeProvider) -> Shape {
    match types.underlying(ty) {
        Some(GoType::Slice(_)) | Some(GoType::Array(_)) => Shape::Sequence,
        Some(GoType::Map(_, _)) => Shape::Map,
        Some(GoType::Struct(_)) => Shape::Struct,
        Some(GoType::Chan(_)) => Shape::Channel,
        Some(_) => Shape::Scalar,
        None => Shape::Unresolved,
    }
}
