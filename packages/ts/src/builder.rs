use crate::node::{ModifierFlags, NodeData, NodeId, NodeKind, SourceFile, TextRange};
use crate::syntax_kind::SyntaxKind;

/// Assembles a [`SourceFile`] bottom-up.
///
/// Children are pushed before their parent; pushing a node links every child
/// it references back to it. A node that is never referenced keeps no parent,
/// which is how detached expression fragments are represented.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        self.push_with_modifiers(kind, ModifierFlags::NONE)
    }

    pub fn push_with_modifiers(&mut self, kind: NodeKind, modifiers: ModifierFlags) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in kind.children() {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(NodeData {
            kind,
            parent: None,
            modifiers,
            range: TextRange::default(),
        });
        id
    }

    pub fn set_range(&mut self, id: NodeId, range: TextRange) {
        self.nodes[id.index()].range = range;
    }

    pub fn identifier(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Identifier {
            text: text.to_string(),
        })
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::NumericLiteral {
            text: text.to_string(),
        })
    }

    pub fn string_literal(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::StringLiteral {
            text: text.to_string(),
        })
    }

    pub fn call(&mut self, expression: NodeId, arguments: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::CallExpression {
            expression,
            arguments,
        })
    }

    pub fn property_access(&mut self, expression: NodeId, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.push(NodeKind::PropertyAccessExpression { expression, name })
    }

    pub fn binary(&mut self, left: NodeId, operator: SyntaxKind, right: NodeId) -> NodeId {
        self.push(NodeKind::BinaryExpression {
            left,
            operator,
            right,
        })
    }

    pub fn expression_statement(&mut self, expression: NodeId) -> NodeId {
        self.push(NodeKind::ExpressionStatement { expression })
    }

    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Block { statements })
    }

    /// `function name() { ...body }`
    pub fn function_declaration(&mut self, name: &str, body: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        let body = self.block(body);
        self.push(NodeKind::FunctionDeclaration {
            name: Some(name),
            parameters: Vec::new(),
            body: Some(body),
        })
    }

    /// `extends A` / `implements I, J`, one type expression per name.
    pub fn heritage_clause(&mut self, token: SyntaxKind, type_names: &[&str]) -> NodeId {
        let types = type_names
            .iter()
            .map(|name| {
                let expression = self.identifier(name);
                self.push(NodeKind::ExpressionWithTypeArguments { expression })
            })
            .collect();
        self.push(NodeKind::HeritageClause { token, types })
    }

    pub fn class_declaration(&mut self, name: &str, heritage_clauses: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.push(NodeKind::ClassDeclaration {
            name: Some(name),
            heritage_clauses,
        })
    }

    /// `let name = initializer` wrapped in a variable statement; returns
    /// `(statement, declaration)`.
    pub fn variable_statement(&mut self, name: NodeId, initializer: Option<NodeId>) -> (NodeId, NodeId) {
        let declaration = self.push(NodeKind::VariableDeclaration { name, initializer });
        let statement = self.push(NodeKind::VariableStatement {
            declarations: vec![declaration],
        });
        (statement, declaration)
    }

    /// `[a, b]` as a binding pattern.
    pub fn array_binding_pattern(&mut self, names: &[&str]) -> NodeId {
        let elements = names
            .iter()
            .map(|name| {
                let name = self.identifier(name);
                self.push(NodeKind::BindingElement { name })
            })
            .collect();
        self.push(NodeKind::ArrayBindingPattern { elements })
    }

    pub fn finish(mut self, file_name: &str, statements: Vec<NodeId>) -> SourceFile {
        let root = self.push(NodeKind::SourceFile { statements });
        SourceFile {
            file_name: file_name.to_string(),
            nodes: self.nodes,
            root,
        }
    }
}
