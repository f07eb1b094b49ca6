use super::directive::{Directive, DirectiveKind, DirectiveSet, DIRECTIVE_MARKER};
use crate::error::DirectiveError;
use crate::logging::{Logger, NULL_LOGGER};
use once_cell::sync::Lazy;
use regex::Regex;
use ts::{Symbol, SymbolDisplayPart, Type};

static DIRECTIVE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!(?P<name>\S*)(?:\s+(?P<args>.*))?$").unwrap());

/// Reads directives out of symbol documentation.
///
/// A marker line naming no known directive always fails the extraction; the
/// caller decides whether that stops the transformation.
#[derive(Clone, Copy)]
pub struct DirectiveExtractor<'l> {
    logger: &'l dyn Logger,
}

impl Default for DirectiveExtractor<'static> {
    fn default() -> Self {
        Self {
            logger: &NULL_LOGGER,
        }
    }
}

impl<'l> DirectiveExtractor<'l> {
    pub fn new(logger: &'l dyn Logger) -> Self {
        Self { logger }
    }

    /// Directives declared on the symbol of `ty`. A type without a symbol has none.
    pub fn extract(&self, ty: &dyn Type) -> Result<DirectiveSet, DirectiveError> {
        match ty.symbol() {
            Some(symbol) => self.extract_from_symbol(symbol),
            None => Ok(DirectiveSet::new()),
        }
    }

    pub fn extract_from_symbol(&self, symbol: &dyn Symbol) -> Result<DirectiveSet, DirectiveError> {
        let documentation = symbol.get_documentation_comment();
        let mut directives = DirectiveSet::new();

        for line in directive_lines(&documentation) {
            match parse_directive_line(line) {
                Some(directive) => {
                    if let Some(previous) = directives.insert(directive) {
                        self.logger.debug(&format!(
                            "'{}' declares !{} more than once; keeping the last one",
                            symbol.name(),
                            previous.kind
                        ));
                    }
                }
                None => {
                    return Err(DirectiveError::UnrecognizedDirective {
                        name: directive_name(line).to_string(),
                        line: line.to_string(),
                        symbol: symbol.name(),
                    });
                }
            }
        }

        if !directives.is_empty() {
            self.logger.debug(&format!(
                "'{}' carries {} directive(s): {}",
                symbol.name(),
                directives.len(),
                directives.kinds().map(|k| k.name()).collect::<Vec<_>>().join(", ")
            ));
        }
        Ok(directives)
    }
}

/// Lines of the plain-text documentation parts that start with the marker,
/// in documentation order.
pub fn directive_lines(parts: &[SymbolDisplayPart]) -> Vec<&str> {
    parts
        .iter()
        .filter(|part| part.is_text())
        .flat_map(|part| part.text.trim().lines())
        .filter(|line| line.starts_with(DIRECTIVE_MARKER))
        .collect()
}

/// Parses one `!Name args...` line; `None` when the name is not a directive.
pub fn parse_directive_line(line: &str) -> Option<Directive> {
    let captures = DIRECTIVE_LINE.captures(line.trim_end())?;
    let kind = DirectiveKind::from_name(&captures["name"])?;
    let args = captures
        .name("args")
        .map(|args| args.as_str().split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    Some(Directive::new(kind, line, args))
}

fn directive_name(line: &str) -> &str {
    line.strip_prefix(DIRECTIVE_MARKER)
        .unwrap_or(line)
        .split_whitespace()
        .next()
        .unwrap_or("")
}

/// Directives on the symbol of `ty`, failing on unknown names.
pub fn get_custom_directives(ty: &dyn Type) -> Result<DirectiveSet, DirectiveError> {
    DirectiveExtractor::default().extract(ty)
}

pub fn get_custom_directives_of_symbol(symbol: &dyn Symbol) -> Result<DirectiveSet, DirectiveError> {
    DirectiveExtractor::default().extract_from_symbol(symbol)
}
