use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::error::RuntimeError,
    lexer::prelude::LexicalError,
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Label, Location};

/// Everything a single input line can fail with, paired with the line
/// itself so the failure can be rendered against its source. An error is
/// terminal for that line only; the session carries on with the same
/// environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to tokenize input")]
    Lex {
        path: PathBuf,
        src: String,
        error: LexicalError
    },
    #[error("failed to parse input")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("evaluation failed")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
}

impl Error {
    /// Splits a parser-surfaced failure back into the lexical and
    /// syntactic taxa: the parser reports a lexical error it ran into as a
    /// `ParseErrorType::LexError` wrapper, which is unwrapped here.
    pub fn from_parse(path: PathBuf, src: String, error: ParseError) -> Self {
        match error.error {
            ParseErrorType::LexError { error } => Error::Lex { path, src, error },
            _ => Error::Parse { path, src, error },
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lex { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                vec![Diagnostic {
                    title: "Lexical error".into(),
                    text,
                    location: Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label),
                            span: error.location,
                        },
                        extra_labels: vec![],
                    },
                }]
            },
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                // An error raised at end of input carries no usable span of
                // its own; point it at the end of the line instead.
                let adjusted_location = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan {
                        start: src.len() as u32,
                        end: src.len() as u32,
                    }
                } else {
                    error.span
                };

                let extra_labels = match &error.error {
                    ParseErrorType::UnclosedParenthesis { open }
                        if *open != error.span =>
                    {
                        vec![Label {
                            text: Some("parenthesis opened here".into()),
                            span: *open,
                        }]
                    },
                    _ => vec![]
                };

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text,
                    location: Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label),
                            span: adjusted_location,
                        },
                        extra_labels,
                    },
                }]
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                vec![Diagnostic {
                    title: "Runtime error".into(),
                    text,
                    location: Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label),
                            span: error.location,
                        },
                        extra_labels: vec![],
                    },
                }]
            },
        }
    }
}
