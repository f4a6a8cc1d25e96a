//! Error types for every stage of a conversion.
//!
//! [`ConfigurationError`] is raised while building a symbol table, [`LexError`]
//! while splitting an expression into tokens and [`ConversionError`] by the
//! shunting-yard pass and the validator. Lexing failures convert into
//! [`ConversionError::Lex`] through `#[from]`, so `?` works across stages.
use crate::converter::token::Token;
use std::num::ParseFloatError;
use thiserror::Error;

/// A symbol table could not be built from the given descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("operator {name:?} has arity {arity}, but operators take 1 or 2 arguments")]
    InvalidOperatorArity { name: String, arity: i64 },

    #[error("function {name:?} has negative arity {arity}")]
    NegativeFunctionArity { name: String, arity: i64 },

    #[error("malformed descriptor {description:?}: {reason}")]
    MalformedDescription {
        description: String,
        reason: &'static str,
    },

    #[error("symbol names must not be empty")]
    EmptyName,
}

/// The lexer could not form a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("expected a token at offset {offset}, found end of expression")]
    UnexpectedEndOfInput { offset: usize },

    #[error("unrecognized symbol {symbol:?} at offset {offset}")]
    UnrecognizedSymbol { symbol: String, offset: usize },

    #[error("malformed number {literal:?} at offset {offset}")]
    MalformedNumber {
        literal: String,
        offset: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// How brackets failed to pair up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketMismatch {
    #[error("closing bracket at token {token_index} has no matching opening bracket")]
    UnmatchedClosing { token_index: usize },

    #[error("more opening brackets than closing ones")]
    UnclosedOpening,
}

/// Any failure while converting an infix expression to postfix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("argument divider at token {token_index} is outside a bracketed argument list")]
    MismatchedDivider { token_index: usize },

    #[error(transparent)]
    UnbalancedBrackets(#[from] BracketMismatch),

    #[error("token {token} at position {token_index} cannot appear there")]
    InvalidAdjacency { token_index: usize, token: Token },
}
