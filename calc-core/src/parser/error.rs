use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedEof,
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    UnclosedParenthesis { open: SrcSpan },
    NumberOutOfRange { lexeme: String },
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedEof => ("Unexpected end of input".into(), vec![]),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = match token {
                    Token::Number(_) => "a number".to_string(),
                    Token::Name(_) => "a name".to_string(),
                    _ => format!("`{}`", token.as_literal())
                };

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this".into(), messages)
            },
            ParseErrorType::UnclosedParenthesis { .. } => ("Unclosed parenthesis".into(), vec![]),
            ParseErrorType::NumberOutOfRange { .. } => (
                "Number is too large".into(),
                vec!["Values must fit in a signed 64-bit integer".into()]
            ),
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
