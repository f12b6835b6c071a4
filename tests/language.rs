use pascalite::{
    Config,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{lexer::Position, memory::Memory, value::Value},
};
use pretty_assertions::assert_eq;

/// Wraps `body` in a program header that declares `a` and `b`.
fn program(body: &str) -> String {
    format!("PROGRAM p;\nVAR a, b : INTEGER;\nBEGIN\n{body}\nEND.")
}

fn run_with(body: &str, config: Config) -> Result<Memory, Error> {
    pascalite::interpret(&program(body), config)
}

fn run(body: &str) -> Result<Memory, Error> {
    run_with(body, Config::default())
}

fn assert_success(body: &str, expected: &[(&str, Value)]) {
    match run(body) {
        Ok(memory) => assert_eq!(memory, expected.iter().copied().collect::<Memory>()),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn assert_failure(body: &str) -> Error {
    match run(body) {
        Ok(memory) => panic!("Program succeeded but was expected to fail:\n{memory}"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_success("a := 2 + 3 * 4;", &[("a", Value::Integer(14))]);
    assert_success("a := (2 + 3) * 4", &[("a", Value::Integer(20))]);
}

#[test]
fn div_is_floor_division() {
    assert_success("a := 10 DIV 3;", &[("a", Value::Integer(3))]);
    assert_success("a := -7 DIV 2", &[("a", Value::Integer(-4))]);
}

#[test]
fn slash_is_real_division() {
    let memory = run("a := 10 / 3;").unwrap();
    let Some(Value::Real(a)) = memory.lookup("a") else {
        panic!("expected a real, got {memory}");
    };
    assert!((a - 10.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_success("a := 20 / 4 + 1; b := 2 * 1.5",
                   &[("a", Value::Real(6.0)), ("b", Value::Real(3.0))]);
}

#[test]
fn if_else_picks_one_branch() {
    assert_success("IF 5 > 3 BEGIN a := 1; END ELSE BEGIN a := 2; END",
                   &[("a", Value::Integer(1))]);
    assert_success("IF 3 > 5 BEGIN a := 1; END ELSE BEGIN a := 2; END",
                   &[("a", Value::Integer(2))]);
}

#[test]
fn while_terminates_once_the_condition_fails() {
    assert_success("a := 0; WHILE a < 3 BEGIN a := a + 1; END",
                   &[("a", Value::Integer(3))]);
}

#[test]
fn non_terminating_loop_hits_the_guard() {
    let config = Config::default().with_max_loop_iterations(1_000);
    let result = run_with("a := 0; WHILE a < 1 BEGIN b := a END", config);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::IterationLimitExceeded { limit: 1_000,
                                                                              .. }))));
}

#[test]
fn for_leaves_the_variable_one_past_the_end() {
    assert_success("FOR a := 1; a <= 3; a := a + 1 BEGIN b := a; END",
                   &[("a", Value::Integer(4)), ("b", Value::Integer(3))]);
}

#[test]
fn for_with_false_condition_runs_only_init() {
    assert_success("FOR a := 5; a < 3; a := a + 1 BEGIN b := a END",
                   &[("a", Value::Integer(5))]);
}

#[test]
fn unset_variable_is_an_error() {
    let error = assert_failure("a := b + 1");
    assert_eq!(error.to_string(), "Error at 4:6: Undefined variable 'b'.");
}

#[test]
fn declared_types_are_not_enforced() {
    // `a` is declared INTEGER; storing a real in it is accepted.
    assert_success("a := 2.5", &[("a", Value::Real(2.5))]);
}

#[test]
fn declaring_a_variable_does_not_assign_it() {
    assert_success("", &[]);
    assert!(matches!(assert_failure("b := a"),
                     Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(assert_failure("a := 1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("a := 1 DIV 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn numeric_condition_is_a_type_error() {
    assert!(matches!(assert_failure("WHILE 1 BEGIN a := 1 END"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn comparisons_can_be_stored() {
    assert_success("a := 1 < 2; b := 2 == 3",
                   &[("a", Value::Bool(true)), ("b", Value::Bool(false))]);
}

#[test]
fn lex_errors_are_reported_with_position() {
    let error = assert_failure("a := 1 % 2");
    assert_eq!(error,
               Error::Lex(LexError::UnexpectedCharacter { character: '%',
                                                          position:  Position::new(4, 8), }));
}

#[test]
fn parse_errors_abort_before_evaluation() {
    assert!(matches!(assert_failure("a := 1 b := 2"),
                     Error::Parse(ParseError::UnexpectedStatement { .. })));
    assert!(matches!(pascalite::interpret("PROGRAM p; BEGIN a := 1 END", Config::default()),
                     Err(Error::Parse(ParseError::MissingTerminator { .. }))));
    assert!(matches!(pascalite::interpret("PROGRAM p; BEGIN a := 1 END. END.", Config::default()),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn runs_do_not_share_variables() {
    assert_success("a := 1", &[("a", Value::Integer(1))]);
    assert!(matches!(assert_failure("b := a"),
                     Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn store_prints_in_assignment_order() {
    let memory = run("b := 2; a := 1.0; b := 3").unwrap();
    assert_eq!(memory.to_string(), "b = 3\na = 1.0\n");
}

#[test]
fn newlines_advance_positions() {
    let error = pascalite::interpret("PROGRAM p;\nBEGIN\n  a := 1 DIV 0\nEND.", Config::default())
        .unwrap_err();
    assert_eq!(error,
               Error::Runtime(RuntimeError::DivisionByZero { position: Position::new(3, 10), }));
}

#[test]
fn large_integers_promote_to_real() {
    let big = "a := 9007199254740993";
    assert_success(&format!("{big}; b := a / 1"),
                   &[("a", Value::Integer(9_007_199_254_740_993)),
                     ("b", Value::Real(9_007_199_254_740_992.0))]);
    assert_success(&format!("{big}; b := a > 0.5"),
                   &[("a", Value::Integer(9_007_199_254_740_993)), ("b", Value::Bool(true))]);
    assert_success(&format!("{big}; b := a + 0.5"),
                   &[("a", Value::Integer(9_007_199_254_740_993)),
                     ("b", Value::Real(9_007_199_254_740_992.0))]);
}

#[test]
fn integer_overflow_is_still_an_error() {
    assert!(matches!(assert_failure("a := 9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn vertical_tab_and_unicode_spaces_are_whitespace() {
    for space in ['\u{0B}', '\u{A0}', '\u{2003}'] {
        let source = format!("PROGRAM p;{space}BEGIN{space}a := 1 END.");
        let memory = pascalite::interpret(&source, Config::default())
            .unwrap_or_else(|e| panic!("{space:?} rejected: {e}"));
        assert_eq!(memory.lookup("a"), Some(Value::Integer(1)));
    }
}

const DEEP: usize = 100_000;

#[test]
fn deeply_parenthesized_expression_runs() {
    let source = format!("PROGRAM p; BEGIN a := {}1{} END.", "(".repeat(DEEP), ")".repeat(DEEP));
    let memory = pascalite::interpret(&source, Config::default()).unwrap();
    assert_eq!(memory.lookup("a"), Some(Value::Integer(1)));
}

#[test]
fn deeply_nested_signs_run() {
    let source = format!("PROGRAM p; BEGIN a := {}1 END.", "- ".repeat(DEEP));
    let memory = pascalite::interpret(&source, Config::default()).unwrap();
    assert_eq!(memory.lookup("a"), Some(Value::Integer(1)));
}

#[test]
fn deeply_nested_blocks_run() {
    let source = format!("PROGRAM p; BEGIN {}a := 1{} END.", "BEGIN ".repeat(DEEP), " END".repeat(DEEP));
    let memory = pascalite::interpret(&source, Config::default()).unwrap();
    assert_eq!(memory.lookup("a"), Some(Value::Integer(1)));
}

#[test]
fn very_long_expression_runs() {
    let source = format!("PROGRAM p; BEGIN a := 0{} END.", " + 1".repeat(DEEP));
    let memory = pascalite::interpret(&source, Config::default()).unwrap();
    assert_eq!(memory.lookup("a"), Some(Value::Integer(100_000)));
}
