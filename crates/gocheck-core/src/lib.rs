//! Core types and configuration for gocheck.
//!
//! This crate provides the foundational data structures used across all gocheck crates:
//! - [`types`] — Binding kinds, type shapes, and source positions
//! - [`config`] — Naming patterns and rule toggles loaded from `.gocheck.json`

pub mod config;
pub mod types;
