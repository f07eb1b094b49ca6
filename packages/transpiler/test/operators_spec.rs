//! Compound assignment decomposition tests

use transpiler::ts::SyntaxKind;
use transpiler::{compound_base_operator, is_compound_assignment};

const COMPOUND: [(SyntaxKind, SyntaxKind); 12] = [
    (SyntaxKind::BarEqualsToken, SyntaxKind::BarToken),
    (SyntaxKind::PlusEqualsToken, SyntaxKind::PlusToken),
    (SyntaxKind::CaretEqualsToken, SyntaxKind::CaretToken),
    (SyntaxKind::MinusEqualsToken, SyntaxKind::MinusToken),
    (SyntaxKind::SlashEqualsToken, SyntaxKind::SlashToken),
    (SyntaxKind::PercentEqualsToken, SyntaxKind::PercentToken),
    (SyntaxKind::AsteriskEqualsToken, SyntaxKind::AsteriskToken),
    (SyntaxKind::AmpersandEqualsToken, SyntaxKind::AmpersandToken),
    (SyntaxKind::AsteriskAsteriskEqualsToken, SyntaxKind::AsteriskAsteriskToken),
    (SyntaxKind::LessThanLessThanEqualsToken, SyntaxKind::LessThanLessThanToken),
    (SyntaxKind::GreaterThanGreaterThanEqualsToken, SyntaxKind::GreaterThanGreaterThanToken),
    (
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
    ),
];

#[test]
fn should_decompose_add_assign() {
    assert_eq!(
        is_compound_assignment(SyntaxKind::PlusEqualsToken),
        (true, Some(SyntaxKind::PlusToken))
    );
}

#[test]
fn should_reject_plain_assignment() {
    assert_eq!(is_compound_assignment(SyntaxKind::EqualsToken), (false, None));
}

#[test]
fn should_decompose_every_compound_operator() {
    for (token, base) in COMPOUND {
        assert_eq!(is_compound_assignment(token), (true, Some(base)), "{:?}", token);
        assert_eq!(compound_base_operator(token), Some(base));
        assert_eq!(
            format!("{}=", base.token_text().unwrap()),
            token.token_text().unwrap()
        );
    }
}

#[test]
fn should_reject_logical_assignments_and_other_tokens() {
    for token in [
        SyntaxKind::AmpersandAmpersandEqualsToken,
        SyntaxKind::BarBarEqualsToken,
        SyntaxKind::QuestionQuestionEqualsToken,
        SyntaxKind::PlusToken,
        SyntaxKind::EqualsEqualsToken,
        SyntaxKind::LessThanEqualsToken,
        SyntaxKind::ExtendsKeyword,
        SyntaxKind::CallExpression,
    ] {
        assert_eq!(is_compound_assignment(token), (false, None), "{:?}", token);
    }
}

#[test]
fn should_only_decompose_assignment_operators() {
    for (token, _) in COMPOUND {
        assert!(token.is_assignment_operator());
    }
    assert!(SyntaxKind::EqualsToken.is_assignment_operator());
    assert!(!SyntaxKind::PlusToken.is_assignment_operator());
}
