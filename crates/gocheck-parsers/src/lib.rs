//! Go parsing and single-file type resolution for gocheck.
//!
//! - [`treesitter`] — tree-sitter-go parsing, rejecting files with syntax errors
//! - [`resolver`] — the [`resolver::TypeProvider`] contract and the [`resolver::GoType`] model
//! - [`go`] — [`go::TypeChecker`], the provider built from one parsed file

pub mod resolver;
pub mod treesitter;

pub mod go;
