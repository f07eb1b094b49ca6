#![deny(clippy::all)]

/**
 * Transpiler semantic queries
 *
 * Read-only questions the transformation pass asks about syntax nodes and
 * their resolved types: author directives, base classes, string/array-ness,
 * destructuring and statement context, accessors and compound operators.
 */
pub use ts;

pub mod annotations;
pub mod config;
pub mod context;
pub mod enums;
pub mod error;
pub mod heritage;
pub mod logging;
pub mod operators;
pub mod predicates;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use annotations::{
    get_custom_directives, get_custom_directives_of_symbol, Directive, DirectiveExtractor,
    DirectiveKind, DirectiveSet,
};
pub use config::TranspilerConfig;
pub use context::QueryContext;
pub use enums::{enum_name, enum_names, flag_table, UNKNOWN_ENUM_NAME};
pub use error::{DirectiveError, ErrorCode, Result, TranspileError};
pub use heritage::get_extended_type;
pub use operators::{compound_base_operator, is_compound_assignment};
pub use predicates::*;
