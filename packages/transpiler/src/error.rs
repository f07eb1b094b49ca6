//! Errors surfaced to the transformation pass.

use thiserror::Error;
use ts::{Diagnostic, DiagnosticCategory, Node, SyntaxKind, TextRange};

pub type Result<T> = std::result::Result<T, TranspileError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A documentation line starts with `!` but names no known directive.
    UnrecognizedDirective = 100001,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("unrecognized directive '!{name}' on '{symbol}'")]
    UnrecognizedDirective {
        /// Directive name as written, without the marker.
        name: String,
        /// The whole documentation line.
        line: String,
        symbol: String,
    },
}

impl DirectiveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DirectiveError::UnrecognizedDirective { .. } => ErrorCode::UnrecognizedDirective,
        }
    }
}

/// A [`DirectiveError`] tied to the node whose query triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{pos}: {source}", pos = .range.pos)]
pub struct TranspileError {
    pub code: ErrorCode,
    pub kind: SyntaxKind,
    pub file: String,
    pub range: TextRange,
    #[source]
    pub source: DirectiveError,
}

impl TranspileError {
    pub fn at(node: Node<'_>, source: DirectiveError) -> Self {
        Self {
            code: source.code(),
            kind: node.syntax_kind(),
            file: node.source_file().file_name().to_string(),
            range: node.range(),
            source,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            category: DiagnosticCategory::Error,
            code: self.code.code(),
            file: Some(self.file.clone()),
            start: self.range.pos,
            length: self.range.width(),
            message_text: self.source.to_string(),
        }
    }
}
