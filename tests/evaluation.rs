use bodmas::{
    error::ErrorKind,
    evaluate, evaluate_with,
    interpreter::evaluator::core::{Context, ZeroPowerPolicy},
    parse,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail with {kind}"),
        Err(e) => assert_eq!(e.kind(), kind, "{src} failed with {e}"),
    }
}

#[test]
fn basic_operations_from_text() {
    assert_value("1+2", 3.0);
    assert_value("2-1", 1.0);
    assert_value("0-1", -1.0);
    assert_value("2*1", 2.0);
    assert_value("2/1", 2.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 1 +\t2 ", 3.0);
    assert_value("1 2 + 3", 15.0);
    assert_value("4 + (3 * (2 + 1)) - (5 - 2)^2", 4.0);
}

#[test]
fn adjacent_signs_collapse() {
    assert_value("1--1", 2.0);
    assert_value("1+-1", 0.0);
    assert_value("1-+1", 0.0);
    assert_value("3*+5", 15.0);
    assert_value("3/+5", 0.6);
    assert_value("1*-4", -4.0);
    assert_value("4/-1", -4.0);
    assert_value("-4/-1", 4.0);
    assert_value("1++2++3", 6.0);
    assert_value("1*-4*-4", 16.0);
    assert_value("1*+4*+4", 16.0);
    assert_value("1+-2+-3", -4.0);
    assert_value("1-+2-+3", -4.0);
    assert_value("1---1", 0.0);
}

#[test]
fn leading_signs() {
    assert_value("-10+1*2+3*4/2", -2.0);
    assert_value("+10+1*2+3*4/2", 18.0);
    assert_value("-5", -5.0);
    assert_value("+5", 5.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_value("1+2+3", 6.0);
    assert_value("1-2+3", 2.0);
    assert_value("1+2+3-1", 5.0);
    assert_value("1-2-3", -4.0);
    assert_value("8/2*7/-4*9", -63.0);
    assert_value("100/10/5", 2.0);
    assert_value("2*3/4", 1.5);
}

#[test]
fn products_bind_tighter_than_sums() {
    assert_value("11*2+3", 25.0);
    assert_value("1+22*3", 67.0);
    assert_value("1+22*3+44*5", 287.0);
    assert_value("1-2*2-3", -6.0);
    assert_value("1-2*22-33", -76.0);
    assert_value("1*+44-5/-1", 49.0);
    assert_value("10.4+1.3*2.6+3.1*4.1/5.1", 10.4 + 1.3 * 2.6 + 3.1 * 4.1 / 5.1);
}

#[test]
fn parenthesized_groups() {
    assert_value("(1+2)", 3.0);
    assert_value("(4-5)", -1.0);
    assert_value("(3*7)", 21.0);
    assert_value("(6/3)", 2.0);
    assert_value("(1+1-1)", 1.0);
    assert_value("(1-1)+1", 1.0);
    assert_value("(1*1)+1", 2.0);
    assert_value("5*(6/3)+1", 11.0);
    assert_value("67*87+(-68+89)-38*2", 5774.0);
    assert_value("67*87/(-68+89)-38*2", 67.0 * 87.0 / 21.0 - 76.0);
}

#[test]
fn nested_groups_resolve_innermost_first() {
    assert_value("((1+1))", 2.0);
    assert_value("((1-1))", 0.0);
    assert_value("((1*1))", 1.0);
    assert_value("((1/1))", 1.0);
    assert_value("((1/1)+3)*3", 12.0);
    assert_value("((1+3)+4*6+(7*8))*8", 672.0);
    assert_value("((1+3)+4*6+(7*8)-(4-(8*3)))*8", 832.0);
}

#[test]
fn exponents() {
    assert_value("2^2", 4.0);
    assert_value("2^0", 1.0);
    assert_value("2^1", 2.0);
    assert_value("2^+3", 8.0);
    assert_value("2.8^2", 2.8 * 2.8);
    assert_value("3*2^2/5", 2.4);
    assert_value("2^(2*2)", 16.0);
    assert_value("(1/3)^2", 1.0 / 9.0);
    assert_value("10^-3", 0.001);
}

#[test]
fn exponents_are_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("68+2^(2*2)^2*3-45", 196_631.0);
    assert_value("2^-2^2", 1.0 / 16.0);
}

#[test]
fn signs_bind_looser_than_exponents() {
    assert_value("-2^2", -4.0);
    assert_value("3*-2^2", -12.0);
    assert_value("-3*-2^2/5+5*8", 42.4);
    assert_value("-3*-2^2/5+5*8+3^2", 51.4);
    assert_value("(-2)^2", 4.0);
    assert_value("(-2)^3", -8.0);
}

#[test]
fn mixed_expressions_follow_bodmas() {
    assert_value("(2^3 + 1) * (3 + 4^2)", 171.0);
    assert_value("2 * (3 + (4 - 1) * (6 / 2))^2", 288.0);
    assert_value("5-4+8*3/4*2^2-(7-4)", 22.0);
    assert_value("-3*((2)^2/5+5*8)-(4+3*(2.5^2-(1/3)^2)/4)+(7-2.5)*(6/2)^2",
                 -3.0 * (4.0 / 5.0 + 40.0)
                 - (4.0 + 3.0 * (2.5 * 2.5 - 1.0 / 9.0) / 4.0)
                 + 4.5 * 9.0);

    let expected = 2.0
                   * ((2.0 + 16.0 * 2.0 + 2.0)
                      + 5.0
                      + (2.5 * 20.0 / (1.0 + 5.0 - 5.0 * 4.0) + 2.0)
                      + 8.0 / 2.0 * 7.0
                      + 2.0
                      + 8.0 * (200.0 / 5.0 - 15.0 * 5.0));
    assert_value("2*((2+(1+3)^2*2+2)+5+(2.5*20/(1+5-5*4)+2)+8/2*7+2--8*(200/5-15*5))",
                 expected);
}

#[test]
fn decimal_literal_forms() {
    assert_value(".5+.5", 1.0);
    assert_value("4.*2", 8.0);
    assert_value("007", 7.0);
}

#[test]
fn disallowed_operator_pairs_are_rejected() {
    for src in ["1+*1", "1-*1", "1+/1", "1-/1", "1+1+*1", "1+1+/1", "2**3", "6/*2", "6//2"] {
        assert_failure(src, ErrorKind::InvalidExpression);
    }
}

#[test]
fn malformed_structure_is_an_invalid_expression() {
    for src in ["", "   ", "1+", "*2", "(1+2", "1+2)", "((1)", "()", "(1)(2)", "2^", "1*^2", "-"] {
        assert_failure(src, ErrorKind::InvalidExpression);
    }
}

#[test]
fn malformed_literals_fail_to_parse() {
    for src in ["1.2.3", ".", "2x3", "1,5", "pi"] {
        assert_failure(src, ErrorKind::NumericParseFailure);
    }
}

#[test]
fn division_by_zero() {
    assert_failure("1/0", ErrorKind::DivisionByZero);
    assert_failure("0/0", ErrorKind::DivisionByZero);
    assert_failure("5/(2-2)", ErrorKind::DivisionByZero);
    assert_failure("1+2/(3*0)", ErrorKind::DivisionByZero);
    assert_failure("0^-1", ErrorKind::DivisionByZero);
}

#[test]
fn fractional_exponents_are_rejected() {
    assert_failure("2^0.5", ErrorKind::InvalidExpression);
    assert_failure("4^(1/2)", ErrorKind::InvalidExpression);
}

#[test]
fn zero_to_the_zero_follows_the_context() {
    assert_value("0^0", 1.0);

    let strict = Context::new().with_zero_power(ZeroPowerPolicy::Reject);
    let err = evaluate_with("0^0", &strict).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    assert_eq!(evaluate_with("2^0", &strict).unwrap(), 1.0);
    assert_eq!(evaluate_with("0^2", &strict).unwrap(), 0.0);
}

#[test]
fn errors_point_at_the_failing_operator() {
    let err = evaluate("1+2/0").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 4: Division by zero.");

    let err = evaluate("1 + 1 + / 1").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 4: Invalid operator combination '+/'.");
}

#[test]
fn rendered_results_evaluate_to_themselves() {
    for src in ["1/3", "-7/3", "0.1+0.2", "2^60", "10^-7", "1-1", "(2.5*20/(1+5-5*4)+2)"] {
        let value = evaluate(src).unwrap();
        assert_eq!(evaluate(&value.to_string()).unwrap(), value, "{src}");
    }
}

#[test]
fn rendered_trees_evaluate_to_the_same_value() {
    for src in ["(1+2)*3",
                "2^(1+1)^2",
                "(-2)^2",
                "8/(2*2)",
                "8/2*2",
                "1-(2-3)",
                "-3*-2^2/5+5*8",
                "2*-(-3)",
                "1-(0-2)*3",
                "((1+3)+4*6+(7*8)-(4-(8*3)))*8"]
    {
        let expr = parse(src).unwrap();
        let rendered = expr.to_string();
        let expected = evaluate(src).unwrap();
        let actual = evaluate(&rendered).unwrap();
        assert!((actual - expected).abs() <= 1e-12,
                "{src} rendered as {rendered}: {actual} != {expected}");
    }
}

#[test]
fn results_out_of_range_are_rejected() {
    assert_failure("10^400", ErrorKind::InvalidExpression);
    assert_failure("10^400-10^400", ErrorKind::InvalidExpression);
    assert_failure("10^308*10", ErrorKind::InvalidExpression);
    assert_failure("-10^308*10", ErrorKind::InvalidExpression);

    let err = evaluate("10^400").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 3: Result is out of range.");

    assert_value("10^308", 1e308);
}

#[test]
fn literals_too_large_for_a_double_are_rejected() {
    let literal = format!("1{}", "0".repeat(400));
    assert_failure(&literal, ErrorKind::NumericParseFailure);
}

#[test]
fn operator_only_input_is_invalid() {
    for src in ["+", "++", " + ", "-", "--", "*", "^", "(", ")"] {
        assert!(evaluate(src).is_err(), "{src}");
    }
    assert_failure("+", ErrorKind::InvalidExpression);
    assert_failure("--", ErrorKind::InvalidExpression);
}

#[test]
fn tree_nodes_keep_their_columns() {
    assert_eq!(parse("7").unwrap().column(), 1);
    assert_eq!(parse("1+2*3").unwrap().column(), 2);
    assert_eq!(parse("(1+2)*3").unwrap().column(), 6);
    assert_eq!(parse("2^3^2").unwrap().column(), 2);
}
