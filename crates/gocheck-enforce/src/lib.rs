//! Naming-convention enforcement for Go bindings.
//!
//! One pass over a parsed file classifies every identifier-introducing
//! construct by kind and by the shape of its resolved type, then checks the
//! name against the pattern the rule table requires:
//! - Global, Local, Parameter: required prefix
//! - TypeName: required suffix on struct types
//! - Sequence, Map, Struct, Channel: required suffix on variables

pub mod types;
pub mod classify;
pub mod shape;
pub mod rules;
pub mod collector;
pub mod walker;
pub mod engine;
