//! Base class resolution
//!
//! Only the immediate base is inspected; a `!PureAbstract` base counts as no
//! base at all, so no inheritance code is generated for it.

use crate::annotations::DirectiveKind;
use crate::context::QueryContext;
use crate::enums::describe_type_flags;
use crate::error::{Result, TranspileError};
use ts::{Node, NodeKind, SyntaxKind, Type};

/// First type expression of the first `extends` clause of a class.
pub fn extended_type_expression<'a>(class: Node<'a>) -> Option<Node<'a>> {
    class
        .heritage_clauses()
        .into_iter()
        .find_map(|clause| match clause.kind() {
            NodeKind::HeritageClause {
                token: SyntaxKind::ExtendsKeyword,
                types,
            } => Some(types.first().map(|id| clause.node(*id))),
            _ => None,
        })
        .flatten()
}

/// Resolved base type of `class`, or `None` when it extends nothing, the base
/// does not resolve, or the base is marked `!PureAbstract`.
pub fn get_extended_type(class: Node<'_>, ctx: &QueryContext<'_>) -> Result<Option<Box<dyn Type>>> {
    let Some(base) = extended_type_expression(class) else {
        return Ok(None);
    };
    let Some(ty) = ctx.checker().get_type_at_location(base) else {
        return Ok(None);
    };

    let directives = ctx
        .extractor()
        .extract(ty.as_ref())
        .map_err(|err| TranspileError::at(base, err))?;
    if directives.has(DirectiveKind::PureAbstract) {
        ctx.logger().debug(&format!(
            "base '{}' [{}] of {:?} is pure abstract; not inheriting from it",
            ctx.checker().type_to_string(ty.as_ref()),
            describe_type_flags(ty.flags()),
            class
        ));
        return Ok(None);
    }
    Ok(Some(ty))
}
