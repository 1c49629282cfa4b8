use num_bigint::BigInt;
use trigrid::{
    ast::{BinaryOp, Expr, UnaryOp},
    error::{EvalError, ParseError, TabulateError},
    eval::{
        BigIntEvaluator, CheckedIntEvaluator, DoubleEvaluator, Evaluator, LongEvaluator,
        ShortEvaluator, WrappingIntEvaluator, evaluate,
    },
    parse,
    parser::{GENERIC_OPERATORS, Parser},
    tabulate,
    tabulator::Value,
};

fn eval_int(expression: &str, x: i32, y: i32, z: i32) -> Result<i32, EvalError> {
    let tree =
        parse(expression).unwrap_or_else(|e| panic!("'{expression}' failed to parse: {e}"));
    evaluate::<CheckedIntEvaluator>(&tree, x, y, z)
}

fn assert_int(expression: &str, x: i32, y: i32, z: i32, expected: i32) {
    match eval_int(expression, x, y, z) {
        Ok(value) => assert_eq!(value, expected, "'{expression}' at ({x}, {y}, {z})"),
        Err(e) => panic!("'{expression}' failed to evaluate: {e}"),
    }
}

fn eval_generic<E: Evaluator>(expression: &str, x: i32, y: i32, z: i32)
                              -> Result<E::Value, EvalError> {
    let parser = Parser::<E>::new(expression, &GENERIC_OPERATORS);
    let tree = parser.parse()
                     .unwrap_or_else(|e| panic!("'{expression}' failed to parse: {e}"));
    evaluate::<E>(&tree, x, y, z)
}

fn parse_error(expression: &str) -> ParseError {
    match parse(expression) {
        Ok(tree) => panic!("'{expression}' parsed as {tree} but should fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_int("10-3-2", 0, 0, 0, 5);
    assert_int("100/10/5", 0, 0, 0, 2);
    assert_int("2+3*4", 0, 0, 0, 14);
    assert_int("(2+3)*4", 0, 0, 0, 20);
    assert_int("10-2*3", 0, 0, 0, 4);
    assert_int("2*3+4*5", 0, 0, 0, 26);
    assert_int("1 set 3 + 2", 0, 0, 0, 33);
}

#[test]
fn trees_are_fully_parenthesized_when_displayed() {
    assert_eq!(parse("2+3*x").unwrap().to_string(), "(2 + (3 * x))");
    assert_eq!(parse("10-3-2").unwrap().to_string(), "((10 - 3) - 2)");
    assert_eq!(parse("x*y + z/2 set 1").unwrap().to_string(),
               "(((x * y) + (z / 2)) set 1)");
    assert_eq!(parse("-2*3").unwrap().to_string(), "(-2 * 3)");
    assert_eq!(parse("count 2 + 3").unwrap().to_string(), "(count(2) + 3)");
}

#[test]
fn parsing_is_deterministic() {
    let first = parse("x*y + z/2 set 1").unwrap();
    let second = parse("x*y + z/2 set 1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn variables_take_coordinate_values() {
    assert_int("x", 7, 0, 0, 7);
    assert_int("y", 0, -3, 0, -3);
    assert_int("z", 0, 0, 11, 11);
    assert_int("x*y+z", 2, 3, 4, 10);
    assert_int("x-y-z", 10, 3, 2, 5);
}

#[test]
fn whitespace_is_insignificant() {
    assert_int("  2  +  3  ", 0, 0, 0, 5);
    assert_int("\t2\n+\n3", 0, 0, 0, 5);
    assert_int("2+3", 0, 0, 0, 5);
}

#[test]
fn unary_minus_and_literal_signs() {
    assert_int("-2*3", 0, 0, 0, -6);
    assert_int("-(2+3)", 0, 0, 0, -5);
    assert_int("--2", 0, 0, 0, 2);
    assert_int("-x", 5, 0, 0, -5);
    assert_int("-2147483648", 0, 0, 0, i32::MIN);
    assert_int("-2147483648+1", 0, 0, 0, i32::MIN + 1);
}

#[test]
fn detached_sign_is_negation_not_a_literal() {
    // "- 2147483648" negates the constant 2147483648, which does not fit.
    let error = parse_error("- 2147483648");
    assert!(matches!(error, ParseError::ConstantOverflow { .. }));
    assert_int("- 2", 0, 0, 0, -2);
}

#[test]
fn unary_words_bind_tighter_than_binary_operators() {
    assert_int("count 2 + 3", 0, 0, 0, 4);
    assert_int("pow10 3 * 2", 0, 0, 0, 2000);
    let squared = eval_generic::<CheckedIntEvaluator>("square x + 1", 3, 0, 0).unwrap();
    assert_eq!(squared, 10);
    let magnitude = eval_generic::<CheckedIntEvaluator>("abs -5", 0, 0, 0).unwrap();
    assert_eq!(magnitude, 5);
}

#[test]
fn checked_arithmetic_reports_overflow() {
    assert!(matches!(eval_int("2147483647+1", 0, 0, 0), Err(EvalError::Overflow)));
    assert!(matches!(eval_int("-2147483648-1", 0, 0, 0), Err(EvalError::Overflow)));
    assert!(matches!(eval_int("2147483647*2", 0, 0, 0), Err(EvalError::Overflow)));
    assert!(matches!(eval_int("-(-2147483648)", 0, 0, 0), Err(EvalError::Overflow)));
    assert!(matches!(eval_int("x/y", 0, 0, 0), Err(EvalError::DivisionByZero)));
    assert!(matches!(eval_int("-2147483648/-1", 0, 0, 0), Err(EvalError::Overflow)));
    assert_int("2147483647+0", 0, 0, 0, i32::MAX);
}

#[test]
fn fixed_width_modulo_follows_the_dividend_sign() {
    let remainder = eval_generic::<CheckedIntEvaluator>("-7 mod 3", 0, 0, 0).unwrap();
    assert_eq!(remainder, -1);
    let remainder = eval_generic::<CheckedIntEvaluator>("7 mod 3", 0, 0, 0).unwrap();
    assert_eq!(remainder, 1);
    assert_eq!(eval_generic::<WrappingIntEvaluator>("-7 mod 3", 0, 0, 0).unwrap(), -1);
    assert_eq!(eval_generic::<LongEvaluator>("-7 mod 3", 0, 0, 0).unwrap(), -1);
    assert_eq!(eval_generic::<ShortEvaluator>("-7 mod 3", 0, 0, 0).unwrap(), -1);
    // The remainder of i32::MIN by -1 is 0, not an overflow.
    let remainder = eval_generic::<CheckedIntEvaluator>("x mod y", i32::MIN, -1, 0).unwrap();
    assert_eq!(remainder, 0);
    let error = eval_generic::<CheckedIntEvaluator>("7 mod 0", 0, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::DivisionByZero));
}

#[test]
fn wrapping_arithmetic_never_overflows() {
    assert_eq!(eval_generic::<WrappingIntEvaluator>("x+1", i32::MAX, 0, 0).unwrap(),
               i32::MIN);
    assert_eq!(eval_generic::<WrappingIntEvaluator>("x*2", i32::MAX, 0, 0).unwrap(), -2);
    assert_eq!(eval_generic::<WrappingIntEvaluator>("x/y", i32::MIN, -1, 0).unwrap(),
               i32::MIN);
    assert_eq!(eval_generic::<WrappingIntEvaluator>("abs x", i32::MIN, 0, 0).unwrap(),
               i32::MIN);
    assert_eq!(eval_generic::<WrappingIntEvaluator>("0-x", i32::MIN, 0, 0).unwrap(),
               i32::MIN);
    let error = eval_generic::<WrappingIntEvaluator>("x/y", 1, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::DivisionByZero));
}

#[test]
fn long_arithmetic_works_past_the_int_range() {
    assert_eq!(eval_generic::<LongEvaluator>("2147483648*2", 0, 0, 0).unwrap(),
               4_294_967_296);
    assert_eq!(eval_generic::<LongEvaluator>("9223372036854775807+1", 0, 0, 0).unwrap(),
               i64::MIN);
    assert_eq!(eval_generic::<LongEvaluator>("x*x", i32::MAX, 0, 0).unwrap(),
               i64::from(i32::MAX) * i64::from(i32::MAX));
}

#[test]
fn short_arithmetic_truncates_to_sixteen_bits() {
    assert_eq!(eval_generic::<ShortEvaluator>("x+1", 32_767, 0, 0).unwrap(), i16::MIN);
    assert_eq!(eval_generic::<ShortEvaluator>("200*200", 0, 0, 0).unwrap(), -25_536);
    assert_eq!(eval_generic::<ShortEvaluator>("abs x", i32::from(i16::MIN), 0, 0).unwrap(),
               i16::MIN);
    // Coordinates are truncated on entry too.
    assert_eq!(eval_generic::<ShortEvaluator>("x", 65_536, 0, 0).unwrap(), 0);
    let error = Parser::<ShortEvaluator>::new("40000", &GENERIC_OPERATORS).parse()
                                                                          .unwrap_err();
    assert!(matches!(error, ParseError::ConstantOverflow { .. }));
}

#[test]
fn double_arithmetic_is_pure_ieee() {
    assert_eq!(eval_generic::<DoubleEvaluator>("x/2", 5, 0, 0).unwrap(), 2.5);
    assert_eq!(eval_generic::<DoubleEvaluator>("1/0", 0, 0, 0).unwrap(), f64::INFINITY);
    assert_eq!(eval_generic::<DoubleEvaluator>("-1/0", 0, 0, 0).unwrap(),
               f64::NEG_INFINITY);
    assert!(eval_generic::<DoubleEvaluator>("0/0", 0, 0, 0).unwrap().is_nan());
    assert_eq!(eval_generic::<DoubleEvaluator>("-7 mod 2", 0, 0, 0).unwrap(), -1.0);
    assert_eq!(eval_generic::<DoubleEvaluator>("2147483648+1", 0, 0, 0).unwrap(),
               2_147_483_649.0);
}

#[test]
fn big_integers_never_overflow() {
    assert_eq!(eval_generic::<BigIntEvaluator>("2147483647+1", 0, 0, 0).unwrap(),
               BigInt::from(2_147_483_648_i64));
    assert_eq!(eval_generic::<BigIntEvaluator>("2147483648*2147483648", 0, 0, 0).unwrap(),
               BigInt::from(4_611_686_018_427_387_904_i64));
    let tree = Parser::<BigIntEvaluator>::new("123456789012345678901234567890",
                                              &GENERIC_OPERATORS).parse()
                                                                 .unwrap();
    assert_eq!(evaluate::<BigIntEvaluator>(&tree, 0, 0, 0).unwrap().to_string(),
               "123456789012345678901234567890");
}

#[test]
fn big_integer_modulo_is_a_true_modulus() {
    assert_eq!(eval_generic::<BigIntEvaluator>("-7 mod 3", 0, 0, 0).unwrap(),
               BigInt::from(2));
    assert_eq!(eval_generic::<BigIntEvaluator>("7 mod 3", 0, 0, 0).unwrap(),
               BigInt::from(1));
    let error = eval_generic::<BigIntEvaluator>("7 mod -3", 0, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::IllegalOperand { .. }));
    let error = eval_generic::<BigIntEvaluator>("7 mod 0", 0, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::DivisionByZero));
}

#[test]
fn bit_manipulation_in_the_integer_grammar() {
    assert_int("1 set 3", 0, 0, 0, 9);
    assert_int("8 set 0", 0, 0, 0, 9);
    assert_int("15 clear 0", 0, 0, 0, 14);
    assert_int("9 clear 3", 0, 0, 0, 1);
    assert_int("x set 31", 0, 0, 0, i32::MIN);
    assert_int("-1 clear 31", 0, 0, 0, i32::MAX);
}

#[test]
fn count_pow10_and_log10() {
    assert_int("count 5", 0, 0, 0, 1);
    assert_int("count 0", 0, 0, 0, 0);
    assert_int("count -3", 0, 0, 0, 1);
    assert_int("pow10 0", 0, 0, 0, 1);
    assert_int("pow10 9", 0, 0, 0, 1_000_000_000);
    assert!(matches!(eval_int("pow10 10", 0, 0, 0), Err(EvalError::Overflow)));
    assert!(matches!(eval_int("pow10 -1", 0, 0, 0), Err(EvalError::IllegalOperand { .. })));
    assert_int("log10 1", 0, 0, 0, 0);
    assert_int("log10 9", 0, 0, 0, 0);
    assert_int("log10 10", 0, 0, 0, 1);
    assert_int("log10 999", 0, 0, 0, 2);
    assert_int("log10 1000000000", 0, 0, 0, 9);
    assert!(matches!(eval_int("log10 0", 0, 0, 0), Err(EvalError::IllegalOperand { .. })));
    assert!(matches!(eval_int("log10 -5", 0, 0, 0), Err(EvalError::IllegalOperand { .. })));
}

#[test]
fn each_grammar_rejects_the_other_vocabulary() {
    let error = parse_error("x mod 3");
    assert!(matches!(error, ParseError::UnexpectedIdentifier { ref identifier, position: 3 }
                     if identifier == "mod"));

    let error = parse_error("abs 5");
    assert!(matches!(error, ParseError::InvalidIdentifier { ref identifier, position: 1 }
                     if identifier == "abs"));

    let error = Parser::<CheckedIntEvaluator>::new("x set 1", &GENERIC_OPERATORS).parse()
                                                                                 .unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedIdentifier { ref identifier, position: 3 }
                     if identifier == "set"));
}

#[test]
fn identifiers_munch_maximally() {
    let error = parse_error("2mod3");
    assert!(matches!(error, ParseError::UnexpectedIdentifier { ref identifier, position: 2 }
                     if identifier == "mod3"));

    let error = Parser::<CheckedIntEvaluator>::new("2mod3", &GENERIC_OPERATORS).parse()
                                                                               .unwrap_err();
    assert!(matches!(error, ParseError::UnexpectedIdentifier { ref identifier, position: 2 }
                     if identifier == "mod3"));

    let error = parse_error("x foo y");
    assert!(matches!(error, ParseError::UnexpectedIdentifier { ref identifier, position: 3 }
                     if identifier == "foo"));
}

#[test]
fn missing_operands_are_positioned_exactly() {
    let error = parse_error("2+");
    assert!(matches!(error,
                     ParseError::MissingRightOperand { operator: BinaryOp::Add,
                                                       position: 3 }));

    let error = parse_error("2 + * 3");
    assert!(matches!(error,
                     ParseError::MissingRightOperand { operator: BinaryOp::Add,
                                                       position: 5 }));

    let error = parse_error("*3");
    assert!(matches!(error,
                     ParseError::MissingLeftOperand { operator: BinaryOp::Multiply,
                                                      position: 2 }));

    let error = parse_error("2+-");
    assert!(matches!(error,
                     ParseError::MissingUnaryOperand { operator: UnaryOp::Negate,
                                                       position: 4 }));

    let error = parse_error("count");
    assert!(matches!(error,
                     ParseError::MissingUnaryOperand { operator: UnaryOp::Count,
                                                       position: 6 }));

    let error = parse_error("(2+)");
    assert!(matches!(error,
                     ParseError::MissingRightOperand { operator: BinaryOp::Add,
                                                       position: 4 }));
}

#[test]
fn parenthesis_and_character_errors() {
    let error = parse_error("(2+3");
    assert!(matches!(error, ParseError::ExpectedClosingParen { position: 5 }));

    let error = parse_error("(2+3]");
    assert!(matches!(error, ParseError::ExpectedClosingParen { position: 5 }));

    let error = parse_error("()");
    assert!(matches!(error, ParseError::UnexpectedCharacter { character: ')',
                                                              position:  2, }));

    let error = parse_error("&3");
    assert!(matches!(error, ParseError::UnexpectedCharacter { character: '&',
                                                              position:  1, }));

    let error = parse_error("");
    assert!(matches!(error, ParseError::ExpressionExpected { position: 1 }));

    let error = parse_error("   ");
    assert!(matches!(error, ParseError::ExpressionExpected { position: 4 }));
}

#[test]
fn trailing_input_is_rejected() {
    let error = parse_error("2 3");
    assert!(matches!(error, ParseError::TrailingCharacters { position: 3 }));

    let error = parse_error("(1+2))");
    assert!(matches!(error, ParseError::TrailingCharacters { position: 6 }));

    let error = parse_error("1+2)");
    assert!(matches!(error, ParseError::TrailingCharacters { position: 4 }));
}

#[test]
fn constants_overflow_at_parse_time() {
    let error = parse_error("2147483648");
    assert!(matches!(error, ParseError::ConstantOverflow { ref literal, position: 11 }
                     if literal == "2147483648"));

    let error = parse_error("99999999999999999999");
    assert!(matches!(error, ParseError::ConstantOverflow { .. }));

    let error = Parser::<WrappingIntEvaluator>::new("2147483648", &GENERIC_OPERATORS).parse()
                                                                                     .unwrap_err();
    assert!(matches!(error, ParseError::ConstantOverflow { .. }));

    // Wider domains accept the same literal.
    assert!(Parser::<LongEvaluator>::new("2147483648", &GENERIC_OPERATORS).parse().is_ok());
    assert!(Parser::<DoubleEvaluator>::new("2147483648", &GENERIC_OPERATORS).parse().is_ok());
    assert!(Parser::<BigIntEvaluator>::new("2147483648", &GENERIC_OPERATORS).parse().is_ok());
}

#[test]
fn errors_render_in_plain_language() {
    assert_eq!(parse_error("2+").to_string(),
               "Error at position 3: Missing right operand for '+'.");
    assert_eq!(parse_error("()").to_string(),
               "Error at position 2: Unexpected character: ')'.");
    assert_eq!(parse_error("2 3").to_string(),
               "Error at position 3: End of expression or a binary operator expected.");
    assert_eq!(eval_int("1/0", 0, 0, 0).unwrap_err().to_string(), "Division by zero.");
}

#[test]
fn positions_are_exposed_uniformly() {
    assert_eq!(parse_error("2+").position(), 3);
    assert_eq!(parse_error("*3").position(), 2);
    assert_eq!(parse_error("2  +").position(), 5);
    assert_eq!(parse_error("bogus").position(), 1);
}

#[test]
fn unsupported_operations_fail_outside_their_domain() {
    let tree = Expr::Binary { op:    BinaryOp::Set,
                              left:  Box::new(Expr::Const(1.0)),
                              right: Box::new(Expr::Const(2.0)), };
    let error = evaluate::<DoubleEvaluator>(&tree, 0, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::IllegalOperand { .. }));

    let tree = Expr::Unary { op:      UnaryOp::Pow10,
                             operand: Box::new(Expr::Const(BigInt::from(2))), };
    let error = evaluate::<BigIntEvaluator>(&tree, 0, 0, 0).unwrap_err();
    assert!(matches!(error, EvalError::IllegalOperand { .. }));
}

#[test]
fn tabulation_isolates_failing_cells() {
    let grid = tabulate("i", "10/x", -1..=1, 0..=0, 0..=0).unwrap();
    assert_eq!(grid.dimensions(), (3, 1, 1));
    assert_eq!(grid[(0, 0, 0)], Some(Value::Int(-10)));
    assert_eq!(grid[(1, 0, 0)], None);
    assert_eq!(grid[(2, 0, 0)], Some(Value::Int(10)));
    assert_eq!(grid.value(0, 0, 0), Some(&None));
    assert_eq!(grid.value(-1, 0, 0), Some(&Some(Value::Int(-10))));
    assert_eq!(grid.value(5, 0, 0), None);
}

#[test]
fn tabulation_covers_the_whole_box_in_order() {
    let grid = tabulate("i", "x+y+z", 0..=1, 0..=1, 0..=1).unwrap();
    assert_eq!(grid.dimensions(), (2, 2, 2));
    assert_eq!(grid.origin(), (0, 0, 0));

    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells.len(), 8);
    assert_eq!(cells[0], (0, 0, 0, &Some(Value::Int(0))));
    // z varies fastest, x slowest.
    assert_eq!(cells[1], (0, 0, 1, &Some(Value::Int(1))));
    assert_eq!(cells[2], (0, 1, 0, &Some(Value::Int(1))));
    assert_eq!(cells[7], (1, 1, 1, &Some(Value::Int(3))));
}

#[test]
fn tabulation_modes_choose_the_domain() {
    let grid = tabulate("d", "1/x", 0..=0, 0..=0, 0..=0).unwrap();
    assert_eq!(grid[(0, 0, 0)], Some(Value::Double(f64::INFINITY)));

    let grid = tabulate("u", "x+1", i32::MAX..=i32::MAX, 0..=0, 0..=0).unwrap();
    assert_eq!(grid[(0, 0, 0)], Some(Value::Int(i32::MIN)));

    let grid = tabulate("s", "x+1", 32_767..=32_767, 0..=0, 0..=0).unwrap();
    assert_eq!(grid[(0, 0, 0)], Some(Value::Short(i16::MIN)));

    let grid = tabulate("l", "x*x", i32::MAX..=i32::MAX, 0..=0, 0..=0).unwrap();
    assert_eq!(grid[(0, 0, 0)],
               Some(Value::Long(i64::from(i32::MAX) * i64::from(i32::MAX))));

    let grid = tabulate("bi", "-7 mod 3", 0..=0, 0..=0, 0..=0).unwrap();
    assert_eq!(grid[(0, 0, 0)], Some(Value::Big(BigInt::from(2))));
}

#[test]
fn tabulation_rejects_bad_modes_and_bad_expressions() {
    let error = tabulate("q", "x", 0..=0, 0..=0, 0..=0).unwrap_err();
    assert!(matches!(error, TabulateError::UnsupportedMode { ref mode } if mode == "q"));

    let error = tabulate("i", "2+", 0..=0, 0..=0, 0..=0).unwrap_err();
    assert!(matches!(error,
                     TabulateError::Parse(ParseError::MissingRightOperand { .. })));

    // The integer-grammar words do not exist in tabulation modes.
    let error = tabulate("i", "x set 1", 0..=0, 0..=0, 0..=0).unwrap_err();
    assert!(matches!(error,
                     TabulateError::Parse(ParseError::UnexpectedIdentifier { .. })));
}

#[test]
fn inverted_ranges_produce_empty_grids() {
    let grid = tabulate("i", "x", 5..=4, 0..=0, 0..=0).unwrap();
    assert_eq!(grid.dimensions(), (0, 0, 0));
    assert_eq!(grid.to_string(), "");
    assert_eq!(grid.cells().count(), 0);
}

#[test]
fn grids_render_one_cell_per_line() {
    let grid = tabulate("i", "x*y", 2..=3, 1..=2, 0..=0).unwrap();
    assert_eq!(grid.to_string(),
               "f(2, 1, 0) = 2\nf(2, 2, 0) = 4\nf(3, 1, 0) = 3\nf(3, 2, 0) = 6\n");
}
