// Predicate Tests

use super::*;
use crate::testing::{TestChecker, TestSymbol, TestType};
use ts::{TreeBuilder, TypeNodeKind};

mod module_tests {
    use super::*;

    #[test]
    fn should_not_treat_script_as_module() {
        let mut b = TreeBuilder::new();
        let f = b.function_declaration("f", vec![]);
        let file = b.finish("script.ts", vec![f]);
        assert!(!is_file_module(&file));
    }

    #[test]
    fn should_detect_export_modifier() {
        let mut b = TreeBuilder::new();
        let name = b.identifier("C");
        let class = b.push_with_modifiers(
            NodeKind::ClassDeclaration {
                name: Some(name),
                heritage_clauses: vec![],
            },
            ModifierFlags::EXPORT,
        );
        let file = b.finish("module.ts", vec![class]);
        assert!(is_file_module(&file));
    }

    #[test]
    fn should_detect_export_assignment_and_declaration() {
        let mut b = TreeBuilder::new();
        let value = b.identifier("x");
        let assignment = b.push(NodeKind::ExportAssignment { expression: value });
        let file = b.finish("a.ts", vec![assignment]);
        assert!(is_file_module(&file));

        let mut b = TreeBuilder::new();
        let declaration = b.push(NodeKind::ExportDeclaration {
            module_specifier: None,
        });
        let file = b.finish("b.ts", vec![declaration]);
        assert!(is_file_module(&file));
    }

    #[test]
    fn should_ignore_nested_exports() {
        let mut b = TreeBuilder::new();
        let value = b.identifier("x");
        let inner = b.push(NodeKind::ExportAssignment { expression: value });
        let block = b.block(vec![inner]);
        let file = b.finish("c.ts", vec![block]);
        assert!(!is_file_module(&file));
    }
}

mod destructuring_tests {
    use super::*;

    #[test]
    fn should_detect_array_binding_declaration() {
        let mut b = TreeBuilder::new();
        let pattern = b.array_binding_pattern(&["a", "b"]);
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let (stmt, _) = b.variable_statement(pattern, Some(call));
        let file = b.finish("a.ts", vec![stmt]);

        assert!(is_in_destructuring_assignment(file.node(call)));
    }

    #[test]
    fn should_reject_plain_declaration() {
        let mut b = TreeBuilder::new();
        let name = b.identifier("a");
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let (stmt, _) = b.variable_statement(name, Some(call));
        let file = b.finish("a.ts", vec![stmt]);

        assert!(!is_in_destructuring_assignment(file.node(call)));
    }

    #[test]
    fn should_detect_array_literal_assignment() {
        let mut b = TreeBuilder::new();
        let a = b.identifier("a");
        let target = b.push(NodeKind::ArrayLiteralExpression { elements: vec![a] });
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let assign = b.binary(target, SyntaxKind::EqualsToken, call);
        let stmt = b.expression_statement(assign);
        let file = b.finish("a.ts", vec![stmt]);

        assert!(is_in_destructuring_assignment(file.node(call)));
    }

    #[test]
    fn should_reject_array_literal_in_non_assignment_binary() {
        let mut b = TreeBuilder::new();
        let target = b.push(NodeKind::ArrayLiteralExpression { elements: vec![] });
        let rhs = b.identifier("x");
        let sum = b.binary(target, SyntaxKind::PlusToken, rhs);
        let stmt = b.expression_statement(sum);
        let file = b.finish("a.ts", vec![stmt]);

        assert!(!is_in_destructuring_assignment(file.node(rhs)));
    }

    #[test]
    fn should_reject_detached_node() {
        let mut b = TreeBuilder::new();
        let x = b.identifier("x");
        let file = b.finish("a.ts", vec![]);
        assert!(!is_in_destructuring_assignment(file.node(x)));
    }
}

mod type_tests {
    use super::*;

    #[test]
    fn should_classify_string_types() {
        assert!(is_string_type(&TestType::new("string", TypeFlags::STRING)));
        assert!(is_string_type(&TestType::new("\"a\"", TypeFlags::STRING_LITERAL)));
        assert!(is_string_type(&TestType::new("`a${b}`", TypeFlags::TEMPLATE_LITERAL)));
        assert!(is_string_type(&TestType::new("Uppercase<T>", TypeFlags::STRING_MAPPING)));
        assert!(!is_string_type(&TestType::new("number", TypeFlags::NUMBER)));
        assert!(!is_string_type(&TestType::new("object", TypeFlags::OBJECT)));
    }

    #[test]
    fn should_classify_array_types_by_shape() {
        let checker = TestChecker::new();
        let array = TestType::new("number[]", TypeFlags::OBJECT).with_shape(TypeNodeKind::ArrayType);
        let tuple = TestType::new("[number, string]", TypeFlags::OBJECT).with_shape(TypeNodeKind::TupleType);
        let reference = TestType::new("Foo", TypeFlags::OBJECT).with_shape(TypeNodeKind::TypeReference);
        let unprojected = TestType::new("Foo", TypeFlags::OBJECT);

        assert!(is_array_type(&array, &checker));
        assert!(is_array_type(&tuple, &checker));
        assert!(!is_array_type(&reference, &checker));
        assert!(!is_array_type(&unprojected, &checker));
    }
}

mod ancestor_tests {
    use super::*;

    #[test]
    fn should_find_closest_matching_ancestor() {
        let mut b = TreeBuilder::new();
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let stmt = b.expression_statement(call);
        let inner = b.block(vec![stmt]);
        let outer = b.block(vec![inner]);
        let file = b.finish("a.ts", vec![outer]);

        let found = find_first_node_above(file.node(callee), |n| n.is(SyntaxKind::Block));
        assert_eq!(found.map(|n| n.id()), Some(inner));
    }

    #[test]
    fn should_not_match_the_start_node_itself() {
        let mut b = TreeBuilder::new();
        let block = b.block(vec![]);
        let file = b.finish("a.ts", vec![block]);

        let found = find_first_node_above(file.node(block), |n| n.is(SyntaxKind::Block));
        assert!(found.is_none());
    }

    #[test]
    fn should_return_none_at_root() {
        let mut b = TreeBuilder::new();
        let x = b.identifier("x");
        let stmt = b.expression_statement(x);
        let file = b.finish("a.ts", vec![stmt]);

        assert!(find_first_node_above(file.node(x), |_| false).is_none());
        assert!(find_first_node_above(file.root(), |_| true).is_none());
    }
}

mod accessor_tests {
    use super::*;

    fn property_access(member: &str) -> (ts::SourceFile, ts::NodeId, ts::NodeId) {
        let mut b = TreeBuilder::new();
        let object = b.identifier("obj");
        let access = b.property_access(object, member);
        let stmt = b.expression_statement(access);
        (b.finish("a.ts", vec![stmt]), object, access)
    }

    fn object_type() -> TestType {
        TestType::object(
            TestSymbol::new("Obj", SymbolFlags::CLASS)
                .with_member(TestSymbol::new("getter", SymbolFlags::GET_ACCESSOR))
                .with_member(TestSymbol::new("setter", SymbolFlags::SET_ACCESSOR))
                .with_member(TestSymbol::new(
                    "both",
                    SymbolFlags::GET_ACCESSOR | SymbolFlags::SET_ACCESSOR,
                ))
                .with_member(TestSymbol::new("field", SymbolFlags::PROPERTY)),
        )
    }

    #[test]
    fn should_report_accessor_kinds() {
        for (member, get, set) in [
            ("getter", true, false),
            ("setter", false, true),
            ("both", true, true),
            ("field", false, false),
            ("missing", false, false),
        ] {
            let (file, object, access) = property_access(member);
            let mut checker = TestChecker::new();
            checker.set_type(object, object_type());

            assert_eq!(has_get_accessor(file.node(access), &checker), get, "get {}", member);
            assert_eq!(has_set_accessor(file.node(access), &checker), set, "set {}", member);
        }
    }

    #[test]
    fn should_be_false_when_type_symbol_or_members_are_absent() {
        let (file, object, access) = property_access("getter");

        let checker = TestChecker::new();
        assert!(!has_get_accessor(file.node(access), &checker));

        let mut checker = TestChecker::new();
        checker.set_type(object, TestType::new("number", TypeFlags::NUMBER));
        assert!(!has_get_accessor(file.node(access), &checker));

        let mut checker = TestChecker::new();
        checker.set_type(object, TestType::object(TestSymbol::new("Obj", SymbolFlags::CLASS)));
        assert!(!has_get_accessor(file.node(access), &checker));

        let mut checker = TestChecker::new();
        checker.set_type(
            object,
            TestType::object(TestSymbol::new("Obj", SymbolFlags::CLASS).with_members()),
        );
        assert!(!has_set_accessor(file.node(access), &checker));
    }

    #[test]
    fn should_be_false_for_non_property_access() {
        let (file, object, _) = property_access("getter");
        let mut checker = TestChecker::new();
        checker.set_type(object, object_type());
        assert!(!has_get_accessor(file.node(object), &checker));
    }
}

mod statement_context_tests {
    use super::*;

    #[test]
    fn should_accept_detached_and_statement_expressions() {
        let mut b = TreeBuilder::new();
        let detached = b.identifier("x");
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let stmt = b.expression_statement(call);
        let file = b.finish("a.ts", vec![stmt]);

        assert!(is_expression_statement(file.node(detached)));
        assert!(is_expression_statement(file.node(call)));
        assert!(!is_expression_statement(file.node(callee)));
    }

    #[test]
    fn should_accept_for_condition_and_incrementor_only() {
        let mut b = TreeBuilder::new();
        let i = b.identifier("i");
        let zero = b.numeric_literal("0");
        let init = b.binary(i, SyntaxKind::EqualsToken, zero);
        let i2 = b.identifier("i");
        let ten = b.numeric_literal("10");
        let condition = b.binary(i2, SyntaxKind::LessThanToken, ten);
        let i3 = b.identifier("i");
        let one = b.numeric_literal("1");
        let incrementor = b.binary(i3, SyntaxKind::PlusEqualsToken, one);
        let body = b.block(vec![]);
        let for_stmt = b.push(NodeKind::ForStatement {
            initializer: Some(init),
            condition: Some(condition),
            incrementor: Some(incrementor),
            statement: body,
        });
        let file = b.finish("a.ts", vec![for_stmt]);

        assert!(is_expression_statement(file.node(condition)));
        assert!(is_expression_statement(file.node(incrementor)));
        assert!(!is_expression_statement(file.node(init)));
        assert!(!is_expression_statement(file.node(i3)));
    }
}

mod global_scope_tests {
    use super::*;

    #[test]
    fn should_treat_top_level_function_as_global() {
        let mut b = TreeBuilder::new();
        let f = b.function_declaration("f", vec![]);
        let file = b.finish("a.ts", vec![f]);
        assert!(is_in_global_scope(file.node(f)));
    }

    #[test]
    fn should_treat_nested_function_as_local() {
        let mut b = TreeBuilder::new();
        let inner = b.function_declaration("inner", vec![]);
        let outer = b.function_declaration("outer", vec![inner]);
        let file = b.finish("a.ts", vec![outer]);
        assert!(!is_in_global_scope(file.node(inner)));
        assert!(is_in_global_scope(file.node(outer)));
    }
}
