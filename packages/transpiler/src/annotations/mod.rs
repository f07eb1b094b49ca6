//! Annotations
//!
//! Author directives embedded in documentation comments (`!TupleReturn`,
//! `!PureAbstract`, ...) and the extractor that reads them off a type's symbol.

mod directive;
mod extractor;

pub use directive::{Directive, DirectiveKind, DirectiveSet, DIRECTIVE_MARKER};
pub use extractor::{
    directive_lines, get_custom_directives, get_custom_directives_of_symbol,
    parse_directive_line, DirectiveExtractor,
};
