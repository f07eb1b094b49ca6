//! Compound assignment operators
//!
//! `a op= b` is lowered to `a = a op b`; this module names the `op`.

use ts::SyntaxKind;

/// `(true, Some(base))` for the twelve arithmetic, bitwise and shift compound
/// assignments, `(false, None)` for any other token.
///
/// Logical assignments (`&&=`, `||=`, `??=`) are not compound in this sense:
/// they short-circuit and are lowered separately.
pub fn is_compound_assignment(token: SyntaxKind) -> (bool, Option<SyntaxKind>) {
    match compound_base_operator(token) {
        Some(base) => (true, Some(base)),
        None => (false, None),
    }
}

pub fn compound_base_operator(token: SyntaxKind) -> Option<SyntaxKind> {
    let base = match token {
        SyntaxKind::BarEqualsToken => SyntaxKind::BarToken,
        SyntaxKind::PlusEqualsToken => SyntaxKind::PlusToken,
        SyntaxKind::CaretEqualsToken => SyntaxKind::CaretToken,
        SyntaxKind::MinusEqualsToken => SyntaxKind::MinusToken,
        SyntaxKind::SlashEqualsToken => SyntaxKind::SlashToken,
        SyntaxKind::PercentEqualsToken => SyntaxKind::PercentToken,
        SyntaxKind::AsteriskEqualsToken => SyntaxKind::AsteriskToken,
        SyntaxKind::AmpersandEqualsToken => SyntaxKind::AmpersandToken,
        SyntaxKind::AsteriskAsteriskEqualsToken => SyntaxKind::AsteriskAsteriskToken,
        SyntaxKind::LessThanLessThanEqualsToken => SyntaxKind::LessThanLessThanToken,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => {
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken
        }
        _ => return None,
    };
    Some(base)
}
