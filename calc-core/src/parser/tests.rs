use crate::{
    lexer::prelude::{Lexer, Token},
    parser::prelude::{parse_source, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

#[test]
fn test_precedence() -> Result<(), ParseError> {
    assert_eq!(parse_source("2+3*4")?.to_string(), "2 + (3 * 4)");
    assert_eq!(parse_source("(2+3)*4")?.to_string(), "(2 + 3) * 4");
    assert_eq!(parse_source("2*3+4")?.to_string(), "(2 * 3) + 4");
    assert_eq!(parse_source("6/2")?.to_string(), "6 / 2");

    Ok(())
}

#[test]
fn test_associativity() -> Result<(), ParseError> {
    assert_eq!(parse_source("10-3-2")?.to_string(), "(10 - 3) - 2");
    assert_eq!(parse_source("8/4/2")?.to_string(), "(8 / 4) / 2");
    assert_eq!(parse_source("1+2+3")?.to_string(), "(1 + 2) + 3");

    Ok(())
}

#[test]
fn test_assignments_and_sequences() -> Result<(), ParseError> {
    assert_eq!(
        parse_source("x = 4; (x + 5) * 2")?.to_string(),
        "x = 4; (x + 5) * 2"
    );
    assert_eq!(parse_source("a=1;b=2;a+b")?.to_string(), "a = 1; b = 2; a + b");

    // Parenthesized assignments may sit inside arithmetic.
    assert_eq!(parse_source("(x = 2) * 3")?.to_string(), "(x = 2) * 3");
    assert_eq!(parse_source("(a = 1; a + 2) * 2")?.to_string(), "(a = 1; a + 2) * 2");

    Ok(())
}

#[test]
fn test_locations() -> Result<(), ParseError> {
    let expression = parse_source("x = 4; (x + 5) * 2")?;

    assert_eq!(expression.location(), SrcSpan { start: 0, end: 18 });

    Ok(())
}

#[test]
fn test_chained_assignment_is_rejected() {
    let err = parse_source("x = y = 1").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Assign, .. }
    ));
    assert_eq!(err.span, SrcSpan { start: 6, end: 7 });
}

#[test]
fn test_incomplete_inputs() {
    for input in ["", "1 +", "2 *", "x =", "1;", "a = 1;"] {
        let err = parse_source(input).unwrap_err();

        assert!(
            matches!(err.error, ParseErrorType::UnexpectedEof),
            "{input:?} should run out of input, got {:?}",
            err.error
        );
    }
}

#[test]
fn test_trailing_input_is_rejected() {
    let err = parse_source("1 2").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Number(_), .. }
    ));
}

#[test]
fn test_unclosed_parenthesis() {
    // Input simply runs out: the error points back at the `(`.
    let err = parse_source("(1 + 2").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnclosedParenthesis { open: SrcSpan { start: 0, end: 1 } }
    ));
    assert_eq!(err.span, SrcSpan { start: 0, end: 1 });

    // Something other than `)` follows: the error points at it instead.
    let err = parse_source("(1 2").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnclosedParenthesis { open: SrcSpan { start: 0, end: 1 } }
    ));
    assert_eq!(err.span, SrcSpan { start: 3, end: 4 });
}

#[test]
fn test_bad_term_start() {
    let err = parse_source("()").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::RParen, .. }
    ));

    let err = parse_source("1 + * 2").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::UnexpectedToken { token: Token::Mult, .. }
    ));
}

#[test]
fn test_number_out_of_range() -> Result<(), ParseError> {
    assert_eq!(parse_source("9223372036854775807")?.to_string(), "9223372036854775807");

    let err = parse_source("9223372036854775808").unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::NumberOutOfRange { .. }
    ));

    Ok(())
}

#[test]
fn test_lexical_error_takes_precedence() {
    let err = parse_source("1 & 2").unwrap_err();

    match err.error {
        ParseErrorType::LexError { error } => {
            assert_eq!(error.details().0, "Unknown character: `&`");
        },
        other => panic!("Expected a wrapped lexical error, got {other:?}")
    }
}

#[test]
fn test_reparse_is_identical() -> Result<(), ParseError> {
    let input = "x = 4; (x + 5) * 2 - 10 / 5";

    let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    let first = parser.parse()?;
    let second = parse_source(input)?;

    assert_eq!(first, second);

    Ok(())
}
