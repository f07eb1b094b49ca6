//! TypeScript-compatible syntax and type interfaces for the transpiler.
//! This crate is the boundary to the parser and checker: it describes the
//! shapes the semantic queries read, and never parses or infers anything itself.

pub mod builder;
pub mod node;
pub mod syntax_kind;
pub mod type_checker;

pub use builder::*;
pub use node::*;
pub use syntax_kind::*;
pub use type_checker::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// A diagnostic anchored to a node of a source file.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: i32,
    pub file: Option<String>,
    pub start: usize,
    pub length: usize,
    pub message_text: String,
}
