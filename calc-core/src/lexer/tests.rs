use super::prelude::{tokenize, Lexer, LexicalError, LexicalErrorType, Token};
use crate::utils::prelude::SrcSpan;

#[test]
fn test_input() -> std::result::Result<(), LexicalError> {
    let input = r#"
        x = 4;
        (x + 5) * 2 - 10 / two
    "#;

    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let tokens = vec![
        Token::Name(String::from("x")),
        Token::Assign,
        Token::Number(String::from("4")),
        Token::Semicolon,

        Token::LParen,
        Token::Name(String::from("x")),
        Token::Plus,
        Token::Number(String::from("5")),
        Token::RParen,
        Token::Mult,
        Token::Number(String::from("2")),
        Token::Minus,
        Token::Number(String::from("10")),
        Token::Div,
        Token::Name(String::from("two")),
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = match lexer.next_token() {
            Ok(Some(next_token)) => next_token,
            Ok(None) => panic!("ran out of tokens at {token:?} ({idx})"),
            Err(err) => {
                println!("stopped at {token:?} ({idx})");
                panic!("{err:?}")
            }
        };

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }

    assert_eq!(lexer.next_token(), Ok(None));

    Ok(())
}

#[test]
fn test_spans() -> std::result::Result<(), LexicalError> {
    let tokens = tokenize("x = 40; y")?;

    assert_eq!(tokens, vec![
        (0, Token::Name(String::from("x")), 1),
        (2, Token::Assign, 3),
        (4, Token::Number(String::from("40")), 6),
        (6, Token::Semicolon, 7),
        (8, Token::Name(String::from("y")), 9),
    ]);

    Ok(())
}

#[test]
fn test_adjacent_runs() -> std::result::Result<(), LexicalError> {
    let tokens = tokenize("12ab34cd")?;

    assert_eq!(tokens, vec![
        (0, Token::Number(String::from("12")), 2),
        (2, Token::Name(String::from("ab")), 4),
        (4, Token::Number(String::from("34")), 6),
        (6, Token::Name(String::from("cd")), 8),
    ]);

    Ok(())
}

#[test]
fn test_unknown_character() {
    let mut lexer = Lexer::new("1 & 2".char_indices().map(|(i, c)| (i as u32, c)));

    assert_eq!(lexer.next_token(), Ok(Some((0, Token::Number(String::from("1")), 1))));

    let err = match lexer.next_token() {
        Err(err) => err,
        Ok(value) => panic!("Expected Err but got Ok({value:?})")
    };

    assert_eq!(err.error, LexicalErrorType::UnrecognizedCharacter { ch: '&' });
    assert_eq!(err.location, SrcSpan { start: 2, end: 3 });
    assert_eq!(err.details().0, "Unknown character: `&`");

    // The offending character is consumed, so lexing resumes after it.
    assert_eq!(lexer.next_token(), Ok(Some((4, Token::Number(String::from("2")), 5))));
}

#[test]
fn test_empty_input() -> std::result::Result<(), LexicalError> {
    assert_eq!(tokenize("")?, vec![]);
    assert_eq!(tokenize(" \t\r\n")?, vec![]);

    Ok(())
}
