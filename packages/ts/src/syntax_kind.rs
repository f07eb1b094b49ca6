/// Kind tags for tokens, keywords and nodes.
///
/// Node kinds mirror the variants of [`crate::NodeKind`]; token kinds are what
/// binary expressions and heritage clauses carry as their operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    // Punctuation
    DotToken,
    EqualsToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsToken,
    ExclamationEqualsEqualsToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionQuestionToken,
    CommaToken,

    // Compound assignments
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken,

    // Keywords
    ExtendsKeyword,
    ImplementsKeyword,

    // Nodes
    SourceFile,
    Identifier,
    NumericLiteral,
    StringLiteral,
    ClassDeclaration,
    HeritageClause,
    ExpressionWithTypeArguments,
    FunctionDeclaration,
    Parameter,
    Block,
    VariableStatement,
    VariableDeclaration,
    ArrayBindingPattern,
    BindingElement,
    ExpressionStatement,
    ReturnStatement,
    ForStatement,
    ExportAssignment,
    ExportDeclaration,
    BinaryExpression,
    ArrayLiteralExpression,
    CallExpression,
    PropertyAccessExpression,
}

impl SyntaxKind {
    /// Whether this kind is any assignment operator token, plain or compound.
    pub fn is_assignment_operator(self) -> bool {
        self == SyntaxKind::EqualsToken
            || (SyntaxKind::PlusEqualsToken..=SyntaxKind::QuestionQuestionEqualsToken)
                .contains(&self)
    }

    /// Source text of a token or keyword kind.
    pub fn token_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::DotToken => ".",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::AsteriskAsteriskToken => "**",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::QuestionQuestionToken => "??",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::AsteriskAsteriskEqualsToken => "**=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::CaretEqualsToken => "^=",
            SyntaxKind::AmpersandAmpersandEqualsToken => "&&=",
            SyntaxKind::BarBarEqualsToken => "||=",
            SyntaxKind::QuestionQuestionEqualsToken => "??=",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::ImplementsKeyword => "implements",
            _ => return None,
        };
        Some(text)
    }
}
