use quill::{
    ast::{BinaryOperator, LiteralValue, Node, TypeRef, UnaryOperator},
    error::{ParseError, RuntimeError, SemanticError},
    evaluate,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Lexer, Token, tokenize},
        parser::core::Parser,
        semantic::{analyzer::SemanticAnalyzer, symbol::Symbol, table::SymbolTable},
        value::Value,
    },
    parse,
};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src).unwrap()
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

fn literal(n: i64, line: usize) -> Box<Node> {
    Box::new(Node::Literal { value: LiteralValue::Integer(n),
                             line })
}

fn variable(name: &str, line: usize) -> Box<Node> {
    Box::new(Node::Variable { name: name.to_string(),
                              line })
}

fn expression(src: &str) -> Node {
    Parser::new(Lexer::new(src)).unwrap()
                                .parse_expression_only()
                                .unwrap()
}

#[test]
fn lexer_produces_typed_tokens() {
    assert_eq!(tokens("12 + 3.5"),
               vec![Token::Integer(12), Token::Plus, Token::Float(3.5), Token::Eof]);
    assert_eq!(tokens("+ - * / ( ) { } = ; : , ."),
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Equals,
                    Token::Semicolon,
                    Token::Colon,
                    Token::Comma,
                    Token::Dot,
                    Token::Eof]);
}

#[test]
fn lexer_keywords_and_identifiers() {
    assert_eq!(tokens("main var proc Int Float mainly x_1"),
               vec![Token::Main,
                    Token::Var,
                    Token::Proc,
                    Token::IntType,
                    Token::FloatType,
                    Token::Identifier("mainly".to_string()),
                    Token::Identifier("x_1".to_string()),
                    Token::Eof]);
}

#[test]
fn lexer_accepts_unicode_whitespace_and_letters() {
    assert_eq!(tokens("main {\u{A0}x = 1\u{0B}}"),
               vec![Token::Main,
                    Token::LBrace,
                    Token::Identifier("x".to_string()),
                    Token::Equals,
                    Token::Integer(1),
                    Token::RBrace,
                    Token::Eof]);
    assert_eq!(tokens("déjà_2 = Ωmega"),
               vec![Token::Identifier("déjà_2".to_string()),
                    Token::Equals,
                    Token::Identifier("Ωmega".to_string()),
                    Token::Eof]);
    assert_eq!(tokenize("x\u{2003}=\n\u{0C}1").unwrap(),
               vec![(Token::Identifier("x".to_string()), 1),
                    (Token::Equals, 1),
                    (Token::Integer(1), 2),
                    (Token::Eof, 2)]);

    let outcome = quill::run("main { var é: Int = 1;\u{A0}é = é + 1 }").unwrap();
    assert_eq!(outcome.variables["é"], Value::Float(2.0));
}

#[test]
fn lexer_float_without_fraction() {
    assert_eq!(tokens("3."), vec![Token::Float(3.0), Token::Eof]);
    assert_eq!(tokens("3.x"),
               vec![Token::Float(3.0), Token::Identifier("x".to_string()), Token::Eof]);
}

#[test]
fn lexer_skips_comments_and_tracks_lines() {
    let spanned = tokenize("# header\nx # note\n\n= 1").unwrap();
    assert_eq!(spanned,
               vec![(Token::Identifier("x".to_string()), 2),
                    (Token::Equals, 4),
                    (Token::Integer(1), 4),
                    (Token::Eof, 4)]);
}

#[test]
fn lexer_on_empty_input_yields_eof_forever() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
}

#[test]
fn lexer_reports_invalid_character_position() {
    let err = tokenize("main {\n  x = @\n}").unwrap_err();
    assert_eq!(err,
               ParseError::InvalidCharacter { character: '@',
                                              line:      2,
                                              column:    7, });
    assert_eq!(err.to_string(),
               "Error on line 2, column 7: Invalid character '@'.");
    assert_eq!(err.line(), 2);

    let err = tokenize("main {\n\n  x\u{A0}= é @").unwrap_err();
    assert_eq!(err,
               ParseError::InvalidCharacter { character: '@',
                                              line:      3,
                                              column:    9, });
}

#[test]
fn lexer_rejects_oversized_integers() {
    let err = tokenize("x = 99999999999999999999").unwrap_err();
    assert!(matches!(err, ParseError::LiteralTooLarge { ref literal, line: 1 }
                          if literal == "99999999999999999999"));
}

#[test]
fn parser_builds_left_leaning_trees() {
    let expected = Node::BinaryOp { left:  Box::new(Node::BinaryOp { left:  literal(10, 1),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: literal(2, 1),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Sub,
                                    right: literal(3, 1),
                                    line:  1, };
    assert_eq!(expression("10 - 2 - 3"), expected);
}

#[test]
fn parser_respects_precedence() {
    let expected = Node::BinaryOp { left:  literal(2, 1),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Node::BinaryOp { left:  literal(3, 1),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: literal(4, 1),
                                                                     line:  1, }),
                                    line:  1, };
    assert_eq!(expression("2 + 3 * 4"), expected);
}

#[test]
fn parser_nests_unary_operators() {
    let expected = Node::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(Node::UnaryOp { op:   UnaryOperator::Negate,
                                                                  expr: variable("x", 1),
                                                                  line: 1, }),
                                   line: 1, };
    assert_eq!(expression("--x"), expected);
}

#[test]
fn parser_wraps_declarator_lists() {
    let root = parse("main {\n  var a: Int = 1, b: Float\n}").unwrap();
    let expected = Node::Compound { children: vec![Node::Compound { children:
                                                                        vec![Node::VariableDecl { name:        "a".to_string(),
                                                                                                  type_ref:
                                                                                                      TypeRef { name: "Int".to_string(),
                                                                                                                line: 2, },
                                                                                                  initializer:
                                                                                                      Some(literal(1, 2)),
                                                                                                  line:        2, },
                                                                             Node::VariableDecl { name:        "b".to_string(),
                                                                                                  type_ref:
                                                                                                      TypeRef { name: "Float".to_string(),
                                                                                                                line: 2, },
                                                                                                  initializer: None,
                                                                                                  line:        2, }],
                                                                    line:     2, }],
                                    line:     1, };
    assert_eq!(root, expected);
}

#[test]
fn parser_keeps_procedure_bodies() {
    let root = parse("main proc p { }").unwrap();
    assert_eq!(root,
               Node::ProcedureDecl { name: "p".to_string(),
                                     body: Box::new(Node::Compound { children: vec![Node::NoOp],
                                                                     line:     1, }),
                                     line: 1, });
}

#[test]
fn parser_reports_expected_and_found() {
    let Err(err) = Parser::new(Lexer::new("main {\n  x = 1\n  y = 2\n}")).unwrap().parse() else {
        panic!("expected a syntax error");
    };
    assert_eq!(err,
               ParseError::UnexpectedToken { expected: "';' or '}'".to_string(),
                                             found:    "identifier 'y'".to_string(),
                                             line:     3, });
    assert_eq!(err.line(), 3);

    let Err(err) = Parser::new(Lexer::new("")).unwrap().parse() else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.to_string(),
               "Error on line 1: Invalid syntax. Expected 'main', found end of input.");
}

#[test]
fn symbol_table_is_seeded_with_builtins() {
    let table = SymbolTable::new();
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("Int").as_deref(), Some(&Symbol::builtin("Int")));
    assert_eq!(table.lookup("Float").as_deref(), Some(&Symbol::builtin("Float")));
}

#[test]
fn symbol_table_insert_overwrites() {
    let mut table = SymbolTable::new();
    let int = table.lookup("Int").unwrap();
    let float = table.lookup("Float").unwrap();

    table.insert(Symbol::Variable { name:          "x".to_string(),
                                    declared_type: int, });
    table.insert(Symbol::Variable { name:          "x".to_string(),
                                    declared_type: float, });

    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("x")
                    .unwrap()
                    .declared_type()
                    .map(Symbol::name),
               Some("Float"));
    assert_eq!(table.to_string(),
               "SymbolTable contents\n--------------------\n * Float = BuiltinTypeSymbol(name='Float')\n * Int = BuiltinTypeSymbol(name='Int')\n * x = VarSymbol(name='x', type='Float')\n--------------------");
}

#[test]
fn analyzer_rejects_unknown_types() {
    let root = Node::VariableDecl { name:        "x".to_string(),
                                    type_ref:    TypeRef { name: "Str".to_string(),
                                                           line: 4, },
                                    initializer: None,
                                    line:        4, };
    let err = SemanticAnalyzer::new().analyze(&root).unwrap_err();
    assert_eq!(err,
               SemanticError::UnknownType { name: "Str".to_string(),
                                            line: 4, });
}

#[test]
fn analyzer_rejects_variables_used_as_types() {
    let declare = |name: &str, type_name: &str| Node::VariableDecl { name:        name.to_string(),
                                                                     type_ref:
                                                                         TypeRef { name: type_name.to_string(),
                                                                                   line: 1, },
                                                                     initializer: None,
                                                                     line:        1, };
    let root = Node::Compound { children: vec![declare("x", "Int"), declare("y", "x")],
                                line:     1, };
    let err = SemanticAnalyzer::new().analyze(&root).unwrap_err();
    assert!(matches!(err, SemanticError::UnknownType { .. }));
    assert_eq!(err.name(), "x");
}

#[test]
fn analyzer_visits_assignment_value_before_target() {
    let err = quill::analyze("main { a = b }").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Identifier 'b' not found.");

    let root = parse("main { var a: Int;\n  a = 1;\n  var a: Float }").unwrap();
    let err = SemanticAnalyzer::new().analyze(&root).unwrap_err();
    assert!(matches!(err, SemanticError::DuplicateIdentifier { line: 3, .. }));
    assert_eq!(err.name(), "a");
}

#[test]
fn analyzer_keeps_partial_table_on_failure() {
    let root = parse("main { var x: Int; y = 1 }").unwrap();
    let mut analyzer = SemanticAnalyzer::new();
    assert!(analyzer.visit(&root).is_err());
    assert!(analyzer.symbol_table().lookup("x").is_some());
}

#[test]
fn analysis_is_repeatable() {
    let ok = parse("main { var x: Int = 1, y: Float; y = x * 2 }").unwrap();
    let first = SemanticAnalyzer::new().analyze(&ok).unwrap();
    let second = SemanticAnalyzer::new().analyze(&ok).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.iter().map(Symbol::name).collect::<Vec<_>>(),
               vec!["Float", "Int", "x", "y"]);

    let bad = parse("main { var x: Int; var x: Int }").unwrap();
    assert_eq!(SemanticAnalyzer::new().analyze(&bad),
               SemanticAnalyzer::new().analyze(&bad));
}

#[test]
fn evaluate_standalone_expressions() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Float(14.0));
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Value::Float(20.0));
    assert_eq!(evaluate("10 - 2 - 3").unwrap(), Value::Float(5.0));
    assert_eq!(evaluate("1.5").unwrap(), Value::Float(1.5));
    assert!(evaluate("2 +").is_err());
    assert!(evaluate("x").is_err());
}

#[test]
fn interpreter_starts_fresh_each_run() {
    let first = parse("main { var x: Int = 1 }").unwrap();
    let second = parse("main { var y: Int = 2 }").unwrap();

    let mut interpreter = Interpreter::new();
    interpreter.interpret(&first).unwrap();
    interpreter.interpret(&second).unwrap();

    assert_eq!(interpreter.variable("x"), None);
    assert_eq!(interpreter.variable("y"), Some(Value::Integer(2)));
    assert_eq!(interpreter.variables().len(), 1);
}

#[test]
fn interpreter_reports_type_mismatch_and_overflow() {
    let err = Interpreter::eval_unary(UnaryOperator::Negate, Value::Float(1.5), 3).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { line: 3, .. }));

    let err = Interpreter::eval_unary(UnaryOperator::Negate, Value::Integer(i64::MIN), 2).unwrap_err();
    assert_eq!(err, RuntimeError::Overflow { line: 2 });

    assert_eq!(Interpreter::eval_unary(UnaryOperator::Plus, Value::Integer(4), 1).unwrap(),
               Value::Integer(4));
}

#[test]
fn interpreter_rejects_statements_in_value_position() {
    let node = Node::BinaryOp { left:  literal(1, 1),
                                op:    BinaryOperator::Add,
                                right: Box::new(Node::NoOp),
                                line:  1, };
    let err = Interpreter::new().interpret(&node).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}
