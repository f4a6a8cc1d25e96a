use crate::converter::operator::OperatorDescriptor;
use crate::converter::symbols::{FunctionDescriptor, Symbol};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number { literal: String, value: f64 },
    Function(FunctionDescriptor),
    ArgumentDivider(String),
    Operator(OperatorDescriptor),
    OpeningBracket(String),
    ClosingBracket(String),
}

impl Token {
    /// Creates a number token with a canonical literal: integral values are
    /// written without a fractional part, so `+5` and `5.0` both become `5`.
    pub fn new_number(value: f64) -> Token {
        let literal = if value.fract() == 0.0 {
            // Adding zero folds -0 into 0.
            format!("{:.0}", value + 0.0)
        } else {
            value.to_string()
        };
        Token::Number { literal, value }
    }

    /// The text this token stands for in the output.
    pub fn literal(&self) -> &str {
        match self {
            Token::Number { literal, .. } => literal.as_str(),
            Token::Function(function) => function.name(),
            Token::Operator(operator) => operator.name(),
            Token::ArgumentDivider(literal)
            | Token::OpeningBracket(literal)
            | Token::ClosingBracket(literal) => literal.as_str(),
        }
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(self, Token::Operator(operator) if operator.is_binary())
    }

    pub fn is_opening_bracket(&self) -> bool {
        matches!(self, Token::OpeningBracket(_))
    }

    /// Whether a number may follow this token. A sign character after anything
    /// else is read as an operator instead.
    pub fn accepts_number_after(&self) -> bool {
        matches!(
            self,
            Token::Operator(_) | Token::ArgumentDivider(_) | Token::OpeningBracket(_)
        )
    }
}

impl From<Symbol<'_>> for Token {
    fn from(symbol: Symbol<'_>) -> Self {
        match symbol {
            Symbol::Function(function) => Token::Function(function.clone()),
            Symbol::Operator(operator) => Token::Operator(operator.clone()),
            Symbol::OpeningBracket(literal) => Token::OpeningBracket(literal.to_string()),
            Symbol::ClosingBracket(literal) => Token::ClosingBracket(literal.to_string()),
            Symbol::ArgumentDivider(literal) => Token::ArgumentDivider(literal.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}
