use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    DivisionByZero,
    UndefinedVariable { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            RuntimeErrorType::DivisionByZero => ("Cannot divide by 0".into(), vec![]),
            RuntimeErrorType::UndefinedVariable { name } => {
                (format!("Undefined variable `{name}`"), vec![])
            }
        }
    }
}
