use sexpr_calc::{
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    evaluate_line,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::core::parse_expression,
    },
};

fn assert_result(src: &str, expected: f64) {
    match evaluate_line(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_message(src: &str, expected: &str) {
    match evaluate_line(src) {
        Ok(value) => panic!("{src} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

fn token_texts(src: &str) -> Vec<String> {
    tokenize(src).iter().map(ToString::to_string).collect()
}

fn atoms(texts: &[&str]) -> Vec<Expr> {
    texts.iter().copied().map(Expr::atom).collect()
}

#[test]
fn tokenizer_splits_parentheses_and_atoms() {
    assert_eq!(token_texts("(+ 1 2)"), ["(", "+", "1", "2", ")"]);
    assert_eq!(token_texts("(+ 10 (* 5 2))"),
               ["(", "+", "10", "(", "*", "5", "2", ")", ")"]);
    assert_eq!(tokenize("((7"),
               [Token::LParen, Token::LParen, Token::Atom("7".to_string())]);
}

#[test]
fn tokenizer_skips_repeated_whitespace() {
    assert_eq!(token_texts("  (+   1\t2 )  "), ["(", "+", "1", "2", ")"]);
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t ").is_empty());
}

#[test]
fn parser_builds_flat_list() {
    let expr = parse_expression("(+ 10 10 10)").unwrap();
    assert_eq!(expr, Expr::List(atoms(&["+", "10", "10", "10"])));
}

#[test]
fn parser_builds_nested_lists_in_source_order() {
    let expr = parse_expression("(+ 10 (* 5 2) (- 8 3))").unwrap();
    let Expr::List(elements) = expr else {
        panic!("expected a list");
    };

    assert_eq!(elements.len(), 4);
    assert_eq!(elements[0], Expr::atom("+"));
    assert_eq!(elements[1], Expr::atom("10"));
    assert_eq!(elements[2], Expr::List(atoms(&["*", "5", "2"])));
    assert_eq!(elements[3], Expr::List(atoms(&["-", "8", "3"])));
}

#[test]
fn parser_accepts_single_atom() {
    assert_eq!(parse_expression("42").unwrap(), Expr::atom("42"));
    assert_result("42", 42.0);
}

#[test]
fn parser_does_not_validate_operators() {
    let expr = parse_expression("(foo 1 2)").unwrap();
    assert_eq!(expr, Expr::List(atoms(&["foo", "1", "2"])));
}

#[test]
fn parser_errors() {
    assert_eq!(parse_expression(""), Err(ParseError::UnexpectedEndOfExpression));
    assert_eq!(parse_expression("(+ 1 2"), Err(ParseError::UnexpectedEndOfExpression));
    assert_eq!(parse_expression("(+ 1 (* 2 3)"), Err(ParseError::UnexpectedEndOfExpression));
    assert_eq!(parse_expression(")"), Err(ParseError::UnexpectedClosingParen));
    assert_eq!(parse_expression("(+ 1 2))"), Err(ParseError::UnexpectedClosingParen));
    assert_eq!(parse_expression("(+ 1)"), Err(ParseError::InvalidExpression));
    assert_eq!(parse_expression("()"), Err(ParseError::InvalidExpression));
    assert_eq!(parse_expression("(+ 1 (2))"), Err(ParseError::InvalidExpression));
    assert_eq!(parse_expression("(+ 1 2) 3"), Err(ParseError::InvalidExpression));
}

#[test]
fn bare_operator_application_is_syntax_error() {
    let err = evaluate_line("- 8 3").unwrap_err();
    assert!(matches!(err,
                     Error::Syntax(ParseError::InvalidExpression
                                   | ParseError::UnexpectedEndOfExpression)));
}

#[test]
fn basic_arithmetic() {
    assert_result("(+ 10 10 10)", 30.0);
    assert_result("(* 2 3 4)", 24.0);
    assert_result("(- 8 3)", 5.0);
    assert_result("(/ 20 4)", 5.0);
    assert_result("(+ 1.5 2.25)", 3.75);
    assert_result("(* -2 3)", -6.0);
}

#[test]
fn nested_expression() {
    assert_result("(+ 10 (* 5 2) (- 8 3) (/ 20 4))", 30.0);
    assert_result("(* (+ 1 2) (- 10 4) (/ 9 3))", 54.0);
}

#[test]
fn subtraction_and_division_combine_the_tail() {
    assert_result("(- 10 2 3)", 5.0);
    assert_result("(/ 100 5 2)", 10.0);
    assert_result("(- 1 1 1 1)", -2.0);
}

#[test]
fn whitespace_around_parentheses_is_irrelevant() {
    assert_result("( + 1 ( * 2 3 ) )", 7.0);
    assert_result("(+ 1(* 2 3))", 7.0);
}

#[test]
fn error_messages() {
    assert_message("(+ 1)", "SYNTAX ERROR - Invalid Expression");
    assert_message("(+ 1 2", "SYNTAX ERROR - Unexpected end of expression");
    assert_message(")", "SYNTAX ERROR - Unexpected closing parenthesis");
    assert_message("(% 1 2)", "SYNTAX ERROR - Unknown operator %");
    assert_message("(+ 1 abc)", "RUNTIME ERROR - Invalid number abc");
    assert_message("(/ 1 0)", "RUNTIME ERROR - Division by zero");
}

#[test]
fn unknown_operator_is_reported_before_operands() {
    let err = evaluate_line("(% x y)").unwrap_err();
    assert_eq!(err, Error::Eval(RuntimeError::UnknownOperator { op: "%".to_string() }));
}

#[test]
fn list_in_operator_position_is_unknown_operator() {
    let err = evaluate_line("((+ 1 2) 3 4)").unwrap_err();
    assert_eq!(err,
               Error::Eval(RuntimeError::UnknownOperator { op: "(+ 1 2)".to_string() }));
}

#[test]
fn operator_in_operand_position_is_invalid_number() {
    let err = evaluate_line("(+ 1 +)").unwrap_err();
    assert_eq!(err, Error::Eval(RuntimeError::InvalidNumber { token: "+".to_string() }));
}

#[test]
fn division_by_zero_in_nested_divisor() {
    assert_message("(/ 10 2 (- 3 3))", "RUNTIME ERROR - Division by zero");
    assert_result("(/ 0 5)", 0.0);
}

#[test]
fn empty_list_built_by_hand_is_missing_operator() {
    assert_eq!(evaluate(&Expr::List(Vec::new())), Err(RuntimeError::MissingOperator));
}

#[test]
fn short_lists_built_by_hand_use_identities() {
    assert_eq!(evaluate(&Expr::List(atoms(&["+"]))), Ok(0.0));
    assert_eq!(evaluate(&Expr::List(atoms(&["*"]))), Ok(1.0));
    assert_eq!(evaluate(&Expr::List(atoms(&["-", "7"]))), Ok(7.0));
    assert_eq!(evaluate(&Expr::List(atoms(&["/", "7"]))), Ok(7.0));
}

#[test]
fn reserialized_tree_evaluates_identically() {
    let sources = ["(+ 10 10 10)",
                   "(+ 10 (* 5 2) (- 8 3) (/ 20 4))",
                   "(  -   10 2 3 )",
                   "(/ 100 (* 5 1 1) (+ 1 1))",
                   "(*(+ 1.5 2.5)(- 9 4 1)(/ 8 2))"];

    for src in sources {
        let expr = parse_expression(src).unwrap();
        let rendered = expr.to_string();
        let reparsed = parse_expression(&rendered).unwrap();

        assert_eq!(reparsed, expr, "{src} rendered as {rendered}");
        assert_eq!(evaluate(&reparsed).unwrap(), evaluate(&expr).unwrap());
    }
}
