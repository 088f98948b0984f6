#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <цифра>{<цифра>}
    // The lexeme is kept verbatim; conversion to an integer happens in the parser.
    Number(String),
    // <буква>{<буква>}
    Name(String),

    // Операции
    Plus, // +
    Minus, // -
    Mult, // *
    Div, // /

    // Присваивание
    Assign, // =

    // Разделители
    Semicolon, // ;
    LParen, // (
    RParen, // )
}

impl Token {
    pub fn as_literal(&self) -> String {
        match self {
            Token::Number(lexeme) => lexeme.clone(),
            Token::Name(name) => name.clone(),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Mult => "*".to_string(),
            Token::Div => "/".to_string(),

            Token::Assign => "=".to_string(),

            Token::Semicolon => ";".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}
