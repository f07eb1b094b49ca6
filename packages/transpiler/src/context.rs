use crate::annotations::{DirectiveExtractor, DirectiveKind, DirectiveSet};
use crate::error::{Result, TranspileError};
use crate::logging::{Logger, NULL_LOGGER};
use std::fmt;
use ts::{Node, TypeChecker};

/// Everything a node query needs besides the node: the checker and the logger
/// the directive extractor reports to.
///
/// Holds only shared borrows, so one context can serve a whole traversal.
#[derive(Clone, Copy)]
pub struct QueryContext<'a> {
    checker: &'a dyn TypeChecker,
    extractor: DirectiveExtractor<'a>,
    logger: &'a dyn Logger,
}

impl<'a> QueryContext<'a> {
    /// Default configuration, no logging.
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self {
            checker,
            extractor: DirectiveExtractor::default(),
            logger: &NULL_LOGGER,
        }
    }

    pub fn with_logger(checker: &'a dyn TypeChecker, logger: &'a dyn Logger) -> Self {
        Self {
            checker,
            extractor: DirectiveExtractor::new(logger),
            logger,
        }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.checker
    }

    pub fn extractor(&self) -> DirectiveExtractor<'a> {
        self.extractor
    }

    pub fn logger(&self) -> &'a dyn Logger {
        self.logger
    }

    /// Directives on the type the checker resolves at `node`. Errors are
    /// reported against `node`.
    pub fn directives_at(&self, node: Node<'_>) -> Result<DirectiveSet> {
        match self.checker.get_type_at_location(node) {
            Some(ty) => self
                .extractor
                .extract(ty.as_ref())
                .map_err(|err| TranspileError::at(node, err)),
            None => Ok(DirectiveSet::new()),
        }
    }

    pub fn has_directive_at(&self, node: Node<'_>, kind: DirectiveKind) -> Result<bool> {
        Ok(self.directives_at(node)?.has(kind))
    }
}

impl fmt::Debug for QueryContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("checker", &self.checker)
            .field("log_level", &self.logger.level())
            .finish()
    }
}
