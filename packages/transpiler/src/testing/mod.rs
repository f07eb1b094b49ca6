//! Testing utilities
//!
//! In-memory stand-ins for the checker collaborator, shared by unit and
//! integration tests.

use crate::logging::{LogLevel, Logger};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use ts::{
    Node, NodeId, Symbol, SymbolDisplayPart, SymbolFlags, SymbolTable, Type, TypeChecker, TypeFlags,
    TypeNodeKind,
};

#[derive(Debug)]
pub struct TestSymbol {
    name: String,
    flags: SymbolFlags,
    documentation: Vec<SymbolDisplayPart>,
    members: Option<SymbolTable>,
}

impl TestSymbol {
    pub fn new(name: &str, flags: SymbolFlags) -> Self {
        Self {
            name: name.to_string(),
            flags,
            documentation: Vec::new(),
            members: None,
        }
    }

    /// Appends one plain-text documentation part.
    pub fn with_doc(mut self, text: &str) -> Self {
        self.documentation.push(SymbolDisplayPart::text(text));
        self
    }

    pub fn with_parts(mut self, parts: Vec<SymbolDisplayPart>) -> Self {
        self.documentation.extend(parts);
        self
    }

    pub fn with_member(mut self, member: TestSymbol) -> Self {
        self.members
            .get_or_insert_with(SymbolTable::new)
            .insert(member.name.clone(), Box::new(member));
        self
    }

    /// Gives the symbol an empty member table.
    pub fn with_members(mut self) -> Self {
        self.members.get_or_insert_with(SymbolTable::new);
        self
    }
}

impl Symbol for TestSymbol {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn flags(&self) -> SymbolFlags {
        self.flags
    }

    fn get_documentation_comment(&self) -> Vec<SymbolDisplayPart> {
        self.documentation.clone()
    }

    fn members(&self) -> Option<&SymbolTable> {
        self.members.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct TestType {
    name: String,
    flags: TypeFlags,
    symbol: Option<Rc<TestSymbol>>,
    shape: Option<TypeNodeKind>,
}

impl TestType {
    pub fn new(name: &str, flags: TypeFlags) -> Self {
        Self {
            name: name.to_string(),
            flags,
            symbol: None,
            shape: None,
        }
    }

    /// An object type whose symbol is `symbol`.
    pub fn object(symbol: TestSymbol) -> Self {
        Self::new(&symbol.name.clone(), TypeFlags::OBJECT).with_symbol(symbol)
    }

    pub fn with_symbol(mut self, symbol: TestSymbol) -> Self {
        self.symbol = Some(Rc::new(symbol));
        self
    }

    pub fn with_shape(mut self, shape: TypeNodeKind) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Type for TestType {
    fn flags(&self) -> TypeFlags {
        self.flags
    }

    fn symbol(&self) -> Option<&dyn Symbol> {
        self.symbol.as_deref().map(|symbol| symbol as &dyn Symbol)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Checker that answers from a node → type table filled in by the test.
#[derive(Debug, Default)]
pub struct TestChecker {
    types: HashMap<NodeId, TestType>,
}

impl TestChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, node: NodeId, ty: TestType) -> &mut Self {
        self.types.insert(node, ty);
        self
    }
}

impl TypeChecker for TestChecker {
    fn get_type_at_location(&self, node: Node<'_>) -> Option<Box<dyn Type>> {
        self.types
            .get(&node.id())
            .map(|ty| Box::new(ty.clone()) as Box<dyn Type>)
    }

    fn type_to_type_node(&self, ty: &dyn Type) -> Option<TypeNodeKind> {
        ty.as_any().downcast_ref::<TestType>().and_then(|ty| ty.shape)
    }

    fn type_to_string(&self, ty: &dyn Type) -> String {
        match ty.as_any().downcast_ref::<TestType>() {
            Some(ty) => ty.name.clone(),
            None => format!("{:?}", ty.flags()),
        }
    }
}

/// Logger that keeps every enabled message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    level: LogLevel,
    messages: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.borrow().clone()
    }

    fn record(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            self.messages.borrow_mut().push((level, msg.to_string()));
        }
    }
}

impl Logger for RecordingLogger {
    fn level(&self) -> LogLevel {
        self.level
    }
    fn debug(&self, msg: &str) {
        self.record(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.record(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.record(LogLevel::Error, msg);
    }
}
