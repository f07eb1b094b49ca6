//! AST predicates
//!
//! Point queries the transformation pass asks about a node while it walks the
//! tree. None of them walk downwards; the ones that look around a node only
//! follow parent links.

use crate::annotations::DirectiveKind;
use crate::context::QueryContext;
use crate::error::{DirectiveError, Result};
use ts::{
    ModifierFlags, Node, NodeKind, SourceFile, SymbolFlags, SyntaxKind, Type, TypeChecker, TypeFlags,
    TypeNodeKind,
};

/// A file is a module when any top-level statement exports something.
pub fn is_file_module(source_file: &SourceFile) -> bool {
    source_file.statements().any(is_statement_exported)
}

pub fn is_statement_exported(statement: Node<'_>) -> bool {
    match statement.kind() {
        NodeKind::ExportAssignment { .. } | NodeKind::ExportDeclaration { .. } => true,
        _ => statement.has_modifier(ModifierFlags::EXPORT),
    }
}

/// Whether `node` is the value side of an array destructuring:
/// `let [a, b] = node` or `[a, b] = node`.
pub fn is_in_destructuring_assignment(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    match parent.kind() {
        NodeKind::VariableDeclaration { name, .. } => {
            parent.node(*name).is(SyntaxKind::ArrayBindingPattern)
        }
        NodeKind::BinaryExpression {
            left,
            operator: SyntaxKind::EqualsToken,
            ..
        } => parent.node(*left).is(SyntaxKind::ArrayLiteralExpression),
        _ => false,
    }
}

pub fn is_string_type(ty: &dyn Type) -> bool {
    let flags = ty.flags();
    flags.intersects(TypeFlags::STRING)
        || flags.intersects(TypeFlags::STRING_LIKE)
        || flags.intersects(TypeFlags::STRING_LITERAL)
}

/// Array-ness is a property of how the type is spelled, not of its flags.
pub fn is_array_type(ty: &dyn Type, checker: &dyn TypeChecker) -> bool {
    matches!(
        checker.type_to_type_node(ty),
        Some(TypeNodeKind::ArrayType | TypeNodeKind::TupleType)
    )
}

/// Whether a function type is marked `!TupleReturn`. Has no node to report
/// against, so a bad directive comes back unlocated.
pub fn is_tuple_return_function(
    ty: &dyn Type,
    ctx: &QueryContext<'_>,
) -> std::result::Result<bool, DirectiveError> {
    Ok(ctx.extractor().extract(ty)?.has(DirectiveKind::TupleReturn))
}

/// Whether the callee of a call expression is marked `!TupleReturn`.
pub fn is_tuple_return_call(node: Node<'_>, ctx: &QueryContext<'_>) -> Result<bool> {
    match node.kind() {
        NodeKind::CallExpression { expression, .. } => {
            ctx.has_directive_at(node.node(*expression), DirectiveKind::TupleReturn)
        }
        _ => Ok(false),
    }
}

/// Whether the function declaration enclosing `node` is marked `!TupleReturn`.
/// Used to decide how a `return [a, b]` inside it is emitted.
pub fn is_in_tuple_return_function(node: Node<'_>, ctx: &QueryContext<'_>) -> Result<bool> {
    match find_first_node_above(node, |n| n.is(SyntaxKind::FunctionDeclaration)) {
        Some(function) => ctx.has_directive_at(function, DirectiveKind::TupleReturn),
        None => Ok(false),
    }
}

/// Closest ancestor of `node` (excluding `node` itself) matching `predicate`.
pub fn find_first_node_above<'a>(
    node: Node<'a>,
    predicate: impl Fn(Node<'a>) -> bool,
) -> Option<Node<'a>> {
    node.ancestors().find(|ancestor| predicate(*ancestor))
}

pub fn has_get_accessor(node: Node<'_>, checker: &dyn TypeChecker) -> bool {
    accessed_member_has_flag(node, checker, SymbolFlags::GET_ACCESSOR)
}

pub fn has_set_accessor(node: Node<'_>, checker: &dyn TypeChecker) -> bool {
    accessed_member_has_flag(node, checker, SymbolFlags::SET_ACCESSOR)
}

fn accessed_member_has_flag(node: Node<'_>, checker: &dyn TypeChecker, flag: SymbolFlags) -> bool {
    let NodeKind::PropertyAccessExpression { expression, name } = node.kind() else {
        return false;
    };
    let Some(name) = node.node(*name).text() else {
        return false;
    };
    let Some(ty) = checker.get_type_at_location(node.node(*expression)) else {
        return false;
    };
    ty.symbol()
        .and_then(|symbol| symbol.members())
        .and_then(|members| members.get(name))
        .is_some_and(|member| member.flags().contains(flag))
}

/// Whether the value of `expr` is discarded: it stands alone as a statement,
/// is a detached fragment, or is the condition or incrementor of a `for`.
pub fn is_expression_statement(expr: Node<'_>) -> bool {
    let Some(parent) = expr.parent() else {
        return true;
    };
    match parent.kind() {
        NodeKind::ExpressionStatement { .. } => true,
        NodeKind::ForStatement {
            condition,
            incrementor,
            ..
        } => *condition == Some(expr.id()) || *incrementor == Some(expr.id()),
        _ => false,
    }
}

/// A declaration is global unless some ancestor is a block.
pub fn is_in_global_scope(node: Node<'_>) -> bool {
    find_first_node_above(node, |n| n.is(SyntaxKind::Block)).is_none()
}

#[cfg(test)]
mod test;
