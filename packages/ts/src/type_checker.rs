use crate::node::Node;
use bitflags::bitflags;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt::Debug;

pub trait TypeChecker: Debug {
    /// Type of the expression or declaration at `node`, if one was resolved.
    fn get_type_at_location(&self, node: Node<'_>) -> Option<Box<dyn Type>>;

    /// Projects a type back onto the syntax that would spell it.
    fn type_to_type_node(&self, ty: &dyn Type) -> Option<TypeNodeKind>;

    fn type_to_string(&self, ty: &dyn Type) -> String;
}

/// Members of a class, interface or object type, in declaration order.
pub type SymbolTable = IndexMap<String, Box<dyn Symbol>>;

pub trait Symbol: Debug {
    fn name(&self) -> String;
    fn flags(&self) -> SymbolFlags;

    /// Rendered documentation comment attached to the symbol's declarations.
    fn get_documentation_comment(&self) -> Vec<SymbolDisplayPart>;

    fn members(&self) -> Option<&SymbolTable>;
}

pub trait Type: Debug {
    fn flags(&self) -> TypeFlags;
    fn symbol(&self) -> Option<&dyn Symbol>;

    /// Access to the concrete type, for checkers that need their own data back.
    fn as_any(&self) -> &dyn Any;
}

/// Syntactic shape of a type, as produced by [`TypeChecker::type_to_type_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeNodeKind {
    ArrayType,
    TupleType,
    TypeReference,
    TypeLiteral,
    UnionType,
    IntersectionType,
    FunctionType,
    LiteralType,
    KeywordType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolDisplayPartKind {
    Text,
    LineBreak,
    Space,
    Punctuation,
    Keyword,
    Link,
    LinkName,
    LinkText,
}

/// One fragment of rendered documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDisplayPart {
    pub text: String,
    pub kind: SymbolDisplayPartKind,
}

impl SymbolDisplayPart {
    pub fn new(text: impl Into<String>, kind: SymbolDisplayPartKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SymbolDisplayPartKind::Text)
    }

    pub fn line_break() -> Self {
        Self::new("\n", SymbolDisplayPartKind::LineBreak)
    }

    pub fn is_text(&self) -> bool {
        self.kind == SymbolDisplayPartKind::Text
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1;
        const UNKNOWN = 2;
        const STRING = 4;
        const NUMBER = 8;
        const BOOLEAN = 16;
        const ENUM = 32;
        const BIGINT = 64;
        const STRING_LITERAL = 128;
        const NUMBER_LITERAL = 256;
        const BOOLEAN_LITERAL = 512;
        const ENUM_LITERAL = 1024;
        const BIGINT_LITERAL = 2048;
        const ESSYMBOL = 4096;
        const UNIQUE_ESSYMBOL = 8192;
        const VOID = 16384;
        const UNDEFINED = 32768;
        const NULL = 65536;
        const NEVER = 131072;
        const TYPE_PARAMETER = 262144;
        const OBJECT = 524288;
        const UNION = 1048576;
        const INTERSECTION = 2097152;
        const INDEX = 4194304;
        const INDEXED_ACCESS = 8388608;
        const CONDITIONAL = 16777216;
        const SUBSTITUTION = 33554432;
        const NON_PRIMITIVE = 67108864;
        const TEMPLATE_LITERAL = 134217728;
        const STRING_MAPPING = 268435456;

        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const NONE = 0;
        const FUNCTION_SCOPED_VARIABLE = 1;
        const BLOCK_SCOPED_VARIABLE = 2;
        const PROPERTY = 4;
        const ENUM_MEMBER = 8;
        const FUNCTION = 16;
        const CLASS = 32;
        const INTERFACE = 64;
        const CONST_ENUM = 128;
        const REGULAR_ENUM = 256;
        const VALUE_MODULE = 512;
        const NAMESPACE_MODULE = 1024;
        const TYPE_LITERAL = 2048;
        const OBJECT_LITERAL = 4096;
        const METHOD = 8192;
        const CONSTRUCTOR = 16384;
        const GET_ACCESSOR = 32768;
        const SET_ACCESSOR = 65536;
        const SIGNATURE = 131072;
        const TYPE_PARAMETER = 262144;
        const TYPE_ALIAS = 524288;
        const EXPORT_VALUE = 1048576;
        const ALIAS = 2097152;
        const PROTOTYPE = 4194304;
        const EXPORT_STAR = 8388608;
        const OPTIONAL = 16777216;
        const TRANSIENT = 33554432;
        const ASSIGNMENT = 67108864;
        const MODULE_EXPORTS = 134217728;
    }
}
