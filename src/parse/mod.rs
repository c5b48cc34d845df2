//! Parsing front-ends: lower a concrete tree-sitter syntax tree into the
//! language-agnostic model in [`crate::ast`].
//!
//! The locator core consumes only the lowered tree, so adding a language
//! means adding one lowering here and nothing elsewhere.

mod java;

pub use java::{java_parser, parse_java};

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
