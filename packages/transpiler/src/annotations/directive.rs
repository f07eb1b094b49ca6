//! Directive model
//!
//! A directive is a documentation-comment line of the form `!Name arg1 arg2`
//! that changes how the symbol it documents is translated.

use indexmap::map::{IndexMap, Iter};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Marker that opens a directive line.
pub const DIRECTIVE_MARKER: char = '!';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectiveKind {
    /// Class members are attached to an existing table instead of a new class.
    Extension,
    /// Like `Extension`, but targets the metatable of a built-in type.
    MetaExtension,
    /// Construction goes through the named function instead of `new`.
    CustomConstructor,
    /// Only the members of the declaration are emitted, not the declaration itself.
    CompileMembersOnly,
    /// The class exists only to declare a shape; subclasses do not inherit from it.
    PureAbstract,
    /// The namespace is flattened into its parent scope.
    Phantom,
    /// The function returns several values instead of one array.
    TupleReturn,
    /// Identifiers referring to the symbol are emitted verbatim.
    NoResolution,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 8] = [
        DirectiveKind::Extension,
        DirectiveKind::MetaExtension,
        DirectiveKind::CustomConstructor,
        DirectiveKind::CompileMembersOnly,
        DirectiveKind::PureAbstract,
        DirectiveKind::Phantom,
        DirectiveKind::TupleReturn,
        DirectiveKind::NoResolution,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::Extension => "Extension",
            DirectiveKind::MetaExtension => "MetaExtension",
            DirectiveKind::CustomConstructor => "CustomConstructor",
            DirectiveKind::CompileMembersOnly => "CompileMembersOnly",
            DirectiveKind::PureAbstract => "PureAbstract",
            DirectiveKind::Phantom => "Phantom",
            DirectiveKind::TupleReturn => "TupleReturn",
            DirectiveKind::NoResolution => "NoResolution",
        }
    }

    /// Looks a directive name up, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<DirectiveKind> {
        DIRECTIVE_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }
}

static DIRECTIVE_NAMES: Lazy<HashMap<String, DirectiveKind>> = Lazy::new(|| {
    DirectiveKind::ALL
        .iter()
        .map(|kind| (kind.name().to_ascii_lowercase(), *kind))
        .collect()
});

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// The documentation line as written, marker included.
    pub text: String,
    /// Whitespace-separated words after the directive name.
    pub args: Vec<String>,
}

impl Directive {
    pub fn new(kind: DirectiveKind, text: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            args,
        }
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// Directives of one symbol, keyed by kind in first-declaration order.
///
/// Inserting a kind that is already present replaces the earlier directive
/// and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    directives: IndexMap<DirectiveKind, Directive>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the directive this one replaced, if any.
    pub fn insert(&mut self, directive: Directive) -> Option<Directive> {
        self.directives.insert(directive.kind, directive)
    }

    pub fn has(&self, kind: DirectiveKind) -> bool {
        self.directives.contains_key(&kind)
    }

    pub fn get(&self, kind: DirectiveKind) -> Option<&Directive> {
        self.directives.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = DirectiveKind> + '_ {
        self.directives.keys().copied()
    }

    pub fn iter(&self) -> Iter<'_, DirectiveKind, Directive> {
        self.directives.iter()
    }
}

impl<'a> IntoIterator for &'a DirectiveSet {
    type Item = (&'a DirectiveKind, &'a Directive);
    type IntoIter = Iter<'a, DirectiveKind, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}

impl FromIterator<Directive> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        let mut set = DirectiveSet::new();
        for directive in iter {
            set.insert(directive);
        }
        set
    }
}
