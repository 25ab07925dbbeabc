// ---------------------------------------------------------------------------
// TypeProvider contract
// The enforcement walker only ever sees types through this trait.
// ---------------------------------------------------------------------------

/// Upper bound on named-type indirections followed before giving up.
/// Guards against `type A B; type B A`.
pub const MAX_NAMED_DEPTH: usize = 16;

/// Best-effort type information for one Go file.
///
/// Implementors answer "what type does the identifier declared at this byte
/// offset have" and "what does this named type stand for". Both queries may
/// fail; callers must treat a missing answer as unresolved, never as an error.
pub trait TypeProvider {
    /// Declared or inferred type of the identifier starting at `decl_offset`.
    fn type_of(&self, decl_offset: usize) -> Option<&GoType>;

    /// Right-hand side of the `type` declaration named `name`.
    fn named_type(&self, name: &str) -> Option<&GoType>;

    /// Strip named and alias wrappers down to the structural type.
    /// Returns `None` when the chain leaves the file or never terminates.
    fn underlying<'a>(&'a self, ty: &'a GoType) -> Option<&'a GoType> {
        let mut current = ty;
        for _ in 0..MAX_NAMED_DEPTH {
            match current {
                GoType::Named(name) => current = self.named_type(name)?,
                GoType::Qualified(_) | GoType::TypeParam(_) => return None,
                other => return Some(other),
            }
        }
        None
    }
}

/// Structural model of a Go type, as far as one file can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// Predeclared non-interface type (`int`, `string`, `byte`, ...).
    Basic(String),
    /// A type name declared in this file, or unknown to it. Types declared
    /// inside a function are keyed `name@offset` of their declaring identifier.
    Named(String),
    /// A generic type parameter; its shape depends on the instantiation.
    TypeParam(String),
    /// `pkg.Type` from an import. Never resolvable without the package.
    Qualified(String),
    Pointer(Box<GoType>),
    Slice(Box<GoType>),
    Array(Box<GoType>),
    Map(Box<GoType>, Box<GoType>),
    Chan(Box<GoType>),
    Struct(Vec<Field>),
    Interface,
    /// Function type; only its results matter for inference.
    Func(Vec<GoType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: GoType,
}

const BASIC_TYPES: &[&str] = &[
    "bool", "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
    "uint32", "uint64", "uintptr", "byte", "rune", "float32", "float64", "complex64",
    "complex128",
];

/// Map a bare type name to a predeclared type, or a `Named` reference.
pub fn basic_or_named(name: &str) -> GoType {
    if BASIC_TYPES.contains(&name) {
        GoType::Basic(name.to_string())
    } else if name == "error" || name == "any" {
        GoType::Interface
    } else {
        GoType::Named(name.to_string())
    }
}

pub fn is_basic_type_name(name: &str) -> bool {
    BASIC_TYPES.contains(&name)
}

impl GoType {
    pub fn basic(name: &str) -> Self {
        GoType::Basic(name.to_string())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, GoType::Basic(name) if name == "string")
    }

    /// Name used to key methods: `T` for both `T` and `*T`.
    pub fn receiver_name(&self) -> Option<&str> {
        match self {
            GoType::Named(name) => Some(name),
            GoType::Pointer(inner) => match inner.as_ref() {
                GoType::Named(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}
