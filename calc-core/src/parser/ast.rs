use std::fmt::Display;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, Parse, ParseErrorType},
    utils::prelude::SrcSpan
};

// expression -> <literal> | <identifier> | <assignment> | <infix> | <sequence>
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Assignment(Assignment),
    Infix(Infix),
    Sequence(Sequence),
}

// sequence -> <assignment> {; <assignment>}
impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let mut expression = Self::parse_assignment(parser)?;

        while matches!(parser.current_token, Some((_, Token::Semicolon, _))) {
            parser.step();

            let second = Self::parse_assignment(parser)?;
            let location = SrcSpan {
                start: expression.location().start,
                end: second.location().end
            };

            expression = Self::Sequence(Sequence {
                first: Box::new(expression),
                second: Box::new(second),
                location
            });
        }

        Ok(expression)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Infix(infix) => write!(f, "{infix}"),
            Self::Sequence(sequence) => write!(f, "{sequence}")
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Literal(literal) => literal.location,
            Self::Identifier(identifier) => identifier.location,
            Self::Assignment(assignment) => assignment.location,
            Self::Infix(infix) => infix.location,
            Self::Sequence(sequence) => sequence.location
        }
    }

    // assignment -> <identifier> = <addition> | <addition>
    //
    // Both tokens of the lookahead have to match before anything is
    // consumed, so a bare name still falls through to <addition>.
    fn parse_assignment<T: Iterator<Item = LexResult>>(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        match (&parser.current_token, &parser.next_token) {
            (Some((_, Token::Name(_), _)), Some((_, Token::Assign, _))) => {
                Ok(Self::Assignment(Assignment::parse(parser)?))
            },
            _ => Self::parse_addition(parser)
        }
    }

    // addition -> <multiplication> {(+ | -) <multiplication>}
    fn parse_addition<T: Iterator<Item = LexResult>>(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let mut expression = Self::parse_multiplication(parser)?;

        loop {
            let operator = match &parser.current_token {
                Some((_, Token::Plus, _)) => BinaryOp::Add,
                Some((_, Token::Minus, _)) => BinaryOp::Sub,
                _ => break
            };

            parser.step();

            let right = Self::parse_multiplication(parser)?;
            let location = SrcSpan {
                start: expression.location().start,
                end: right.location().end
            };

            expression = Self::Infix(Infix {
                left: Box::new(expression),
                operator,
                right: Box::new(right),
                location
            });
        }

        Ok(expression)
    }

    // multiplication -> <term> {(* | /) <term>}
    fn parse_multiplication<T: Iterator<Item = LexResult>>(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let mut expression = Self::parse_term(parser)?;

        loop {
            let operator = match &parser.current_token {
                Some((_, Token::Mult, _)) => BinaryOp::Mul,
                Some((_, Token::Div, _)) => BinaryOp::Div,
                _ => break
            };

            parser.step();

            let right = Self::parse_term(parser)?;
            let location = SrcSpan {
                start: expression.location().start,
                end: right.location().end
            };

            expression = Self::Infix(Infix {
                left: Box::new(expression),
                operator,
                right: Box::new(right),
                location
            });
        }

        Ok(expression)
    }

    // term -> <number> | <identifier> | ( <expression> )
    fn parse_term<T: Iterator<Item = LexResult>>(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        match parser.next_token() {
            Some((start, Token::Number(lexeme), end)) => {
                let location = SrcSpan { start, end };

                match lexeme.parse::<i64>() {
                    Ok(value) => Ok(Self::Literal(Literal { value, location })),
                    Err(_) => parse_error(
                        ParseErrorType::NumberOutOfRange { lexeme },
                        location
                    )
                }
            },
            Some((start, Token::Name(value), end)) => {
                Ok(Self::Identifier(Identifier::from((start, value, end))))
            },
            Some((start, Token::LParen, end)) => {
                let open = SrcSpan { start, end };

                let expression = Expression::parse(parser)?;

                match parser.expect_one(Token::RParen) {
                    Ok(_) => Ok(expression),
                    Err(err) => {
                        let span = match err.error {
                            ParseErrorType::UnexpectedEof => open,
                            _ => err.span
                        };

                        parse_error(
                            ParseErrorType::UnclosedParenthesis { open },
                            span
                        )
                    }
                }
            },
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec![
                        "a number".to_string(),
                        "a name".to_string(),
                        "`(`".to_string()
                    ]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

// literal -> <number>
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: i64,
    pub location: SrcSpan
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// identifier -> <letter> {<letter>}
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// assignment -> <identifier> = <addition>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Assignment {
    fn parse(
        parser: &mut crate::parser::prelude::Parser<T>
    ) -> Result<Self, crate::parser::prelude::ParseError> {
        let ident = parser.expect_name()?;
        let start = ident.0;

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse_addition(parser)?;
        let end = value.location().end;

        Ok(Self {
            identifier: ident.into(),
            value: Box::new(value),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.value)
    }
}

// infix -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: BinaryOp,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "{} {} {}",
            display_operand(&self.left),
            self.operator,
            display_operand(&self.right)
        )
    }
}

// Compound operands get parenthesized so the printed tree reads back
// with the same structure it was parsed with.
fn display_operand(expression: &Expression) -> String {
    match expression {
        Expression::Literal(_) | Expression::Identifier(_) => expression.to_string(),
        _ => format!("({expression})")
    }
}

// sequence -> <assignment> {; <assignment>}
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub first: Box<Expression>,
    pub second: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; {}", self.first, self.second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/"
        };

        write!(f, "{operator}")
    }
}
