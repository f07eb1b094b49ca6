use crate::syntax_kind::SyntaxKind;
use bitflags::bitflags;
use std::fmt;

/// Index of a node inside its [`SourceFile`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub pos: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(pos: usize, end: usize) -> Self {
        Self { pos, end }
    }

    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }
}

bitflags! {
    /// Modifiers written on a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE = 0;
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ABSTRACT = 1 << 7;
        const ASYNC = 1 << 8;
        const DEFAULT = 1 << 9;
        const CONST = 1 << 11;
    }
}

/// The closed set of node shapes the semantic layer inspects.
///
/// Children are referenced by [`NodeId`]; the arena owns every node and each
/// node knows its parent, so a child never owns its ancestors.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    SourceFile {
        statements: Vec<NodeId>,
    },
    Identifier {
        text: String,
    },
    NumericLiteral {
        text: String,
    },
    StringLiteral {
        text: String,
    },
    ClassDeclaration {
        name: Option<NodeId>,
        heritage_clauses: Vec<NodeId>,
    },
    /// `extends A` or `implements I, J`.
    HeritageClause {
        token: SyntaxKind,
        types: Vec<NodeId>,
    },
    ExpressionWithTypeArguments {
        expression: NodeId,
    },
    FunctionDeclaration {
        name: Option<NodeId>,
        parameters: Vec<NodeId>,
        body: Option<NodeId>,
    },
    Parameter {
        name: NodeId,
    },
    Block {
        statements: Vec<NodeId>,
    },
    VariableStatement {
        declarations: Vec<NodeId>,
    },
    VariableDeclaration {
        name: NodeId,
        initializer: Option<NodeId>,
    },
    ArrayBindingPattern {
        elements: Vec<NodeId>,
    },
    BindingElement {
        name: NodeId,
    },
    ExpressionStatement {
        expression: NodeId,
    },
    ReturnStatement {
        expression: Option<NodeId>,
    },
    ForStatement {
        initializer: Option<NodeId>,
        condition: Option<NodeId>,
        incrementor: Option<NodeId>,
        statement: NodeId,
    },
    /// `export = x` / `export default x`.
    ExportAssignment {
        expression: NodeId,
    },
    /// `export { a, b }` / `export * from "m"`.
    ExportDeclaration {
        module_specifier: Option<NodeId>,
    },
    BinaryExpression {
        left: NodeId,
        operator: SyntaxKind,
        right: NodeId,
    },
    ArrayLiteralExpression {
        elements: Vec<NodeId>,
    },
    CallExpression {
        expression: NodeId,
        arguments: Vec<NodeId>,
    },
    PropertyAccessExpression {
        expression: NodeId,
        name: NodeId,
    },
}

impl NodeKind {
    pub fn syntax_kind(&self) -> SyntaxKind {
        match self {
            NodeKind::SourceFile { .. } => SyntaxKind::SourceFile,
            NodeKind::Identifier { .. } => SyntaxKind::Identifier,
            NodeKind::NumericLiteral { .. } => SyntaxKind::NumericLiteral,
            NodeKind::StringLiteral { .. } => SyntaxKind::StringLiteral,
            NodeKind::ClassDeclaration { .. } => SyntaxKind::ClassDeclaration,
            NodeKind::HeritageClause { .. } => SyntaxKind::HeritageClause,
            NodeKind::ExpressionWithTypeArguments { .. } => SyntaxKind::ExpressionWithTypeArguments,
            NodeKind::FunctionDeclaration { .. } => SyntaxKind::FunctionDeclaration,
            NodeKind::Parameter { .. } => SyntaxKind::Parameter,
            NodeKind::Block { .. } => SyntaxKind::Block,
            NodeKind::VariableStatement { .. } => SyntaxKind::VariableStatement,
            NodeKind::VariableDeclaration { .. } => SyntaxKind::VariableDeclaration,
            NodeKind::ArrayBindingPattern { .. } => SyntaxKind::ArrayBindingPattern,
            NodeKind::BindingElement { .. } => SyntaxKind::BindingElement,
            NodeKind::ExpressionStatement { .. } => SyntaxKind::ExpressionStatement,
            NodeKind::ReturnStatement { .. } => SyntaxKind::ReturnStatement,
            NodeKind::ForStatement { .. } => SyntaxKind::ForStatement,
            NodeKind::ExportAssignment { .. } => SyntaxKind::ExportAssignment,
            NodeKind::ExportDeclaration { .. } => SyntaxKind::ExportDeclaration,
            NodeKind::BinaryExpression { .. } => SyntaxKind::BinaryExpression,
            NodeKind::ArrayLiteralExpression { .. } => SyntaxKind::ArrayLiteralExpression,
            NodeKind::CallExpression { .. } => SyntaxKind::CallExpression,
            NodeKind::PropertyAccessExpression { .. } => SyntaxKind::PropertyAccessExpression,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeKind::Identifier { .. }
            | NodeKind::NumericLiteral { .. }
            | NodeKind::StringLiteral { .. } => {}
            NodeKind::SourceFile { statements } | NodeKind::Block { statements } => {
                out.extend(statements.iter().copied())
            }
            NodeKind::ClassDeclaration {
                name,
                heritage_clauses,
            } => {
                out.extend(*name);
                out.extend(heritage_clauses.iter().copied());
            }
            NodeKind::HeritageClause { types, .. } => out.extend(types.iter().copied()),
            NodeKind::ExpressionWithTypeArguments { expression }
            | NodeKind::ExpressionStatement { expression }
            | NodeKind::ExportAssignment { expression } => out.push(*expression),
            NodeKind::FunctionDeclaration {
                name,
                parameters,
                body,
            } => {
                out.extend(*name);
                out.extend(parameters.iter().copied());
                out.extend(*body);
            }
            NodeKind::Parameter { name } | NodeKind::BindingElement { name } => out.push(*name),
            NodeKind::VariableStatement { declarations } => {
                out.extend(declarations.iter().copied())
            }
            NodeKind::VariableDeclaration { name, initializer } => {
                out.push(*name);
                out.extend(*initializer);
            }
            NodeKind::ArrayBindingPattern { elements }
            | NodeKind::ArrayLiteralExpression { elements } => out.extend(elements.iter().copied()),
            NodeKind::ReturnStatement { expression } => out.extend(*expression),
            NodeKind::ForStatement {
                initializer,
                condition,
                incrementor,
                statement,
            } => {
                out.extend(*initializer);
                out.extend(*condition);
                out.extend(*incrementor);
                out.push(*statement);
            }
            NodeKind::ExportDeclaration { module_specifier } => out.extend(*module_specifier),
            NodeKind::BinaryExpression { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            NodeKind::CallExpression {
                expression,
                arguments,
            } => {
                out.push(*expression);
                out.extend(arguments.iter().copied());
            }
            NodeKind::PropertyAccessExpression { expression, name } => {
                out.push(*expression);
                out.push(*name);
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) modifiers: ModifierFlags,
    pub(crate) range: TextRange,
}

/// A parsed compilation unit: an arena of nodes rooted at a `SourceFile` node.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub(crate) file_name: String,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) root: NodeId,
}

impl SourceFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn root(&self) -> Node<'_> {
        self.node(self.root)
    }

    /// Cursor for `id`.
    ///
    /// Panics if `id` was not produced for this file.
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.index() < self.nodes.len(), "node {:?} is not part of {}", id, self.file_name);
        Node { file: self, id }
    }

    pub fn statements(&self) -> impl Iterator<Item = Node<'_>> {
        self.root().children()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Borrowed, copyable view of one node and the file it lives in.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    file: &'a SourceFile,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.file.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.data().kind
    }

    pub fn syntax_kind(&self) -> SyntaxKind {
        self.data().kind.syntax_kind()
    }

    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.syntax_kind() == kind
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.file.node(id))
    }

    /// Ancestors, starting at the immediate parent and ending at the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors { next: self.parent() }
    }

    pub fn has_modifier(&self, flag: ModifierFlags) -> bool {
        self.data().modifiers.intersects(flag)
    }

    pub fn range(&self) -> TextRange {
        self.data().range
    }

    pub fn source_file(&self) -> &'a SourceFile {
        self.file
    }

    /// Resolves a child id of this node's file.
    pub fn node(&self, id: NodeId) -> Node<'a> {
        self.file.node(id)
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> {
        let file = self.file;
        self.kind().children().into_iter().map(move |id| file.node(id))
    }

    /// Identifier or literal text.
    pub fn text(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Identifier { text }
            | NodeKind::NumericLiteral { text }
            | NodeKind::StringLiteral { text } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Heritage clauses of a class declaration, in source order.
    pub fn heritage_clauses(&self) -> Vec<Node<'a>> {
        match self.kind() {
            NodeKind::ClassDeclaration {
                heritage_clauses, ..
            } => heritage_clauses.iter().map(|id| self.file.node(*id)).collect(),
            _ => Vec::new(),
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{:?}#{}({:?})", self.syntax_kind(), self.id.0, text),
            None => write!(f, "{:?}#{}", self.syntax_kind(), self.id.0),
        }
    }
}

pub struct Ancestors<'a> {
    next: Option<Node<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
