use crate::converter::error::ConversionError;
use crate::converter::token::Token;
use itertools::Itertools;
use log::debug;

/// Checks that neighbouring tokens fit together, rejecting expressions the
/// shunting-yard pass would otherwise convert into something meaningless.
///
/// Every token with a neighbour on both sides is checked against them, and the
/// first and last token are checked against the ends of the expression.
pub(crate) fn validate(tokens: &[Token]) -> Result<(), ConversionError> {
    for (index, (previous, current, next)) in tokens.iter().tuple_windows().enumerate() {
        if !fits_between(previous, current, next) {
            return Err(invalid_adjacency(index + 1, current));
        }
    }

    if let Some(first) = tokens.first() {
        if !can_start_expression(first) {
            return Err(invalid_adjacency(0, first));
        }
    }
    if let Some(last) = tokens.last() {
        if !can_end_expression(last) {
            return Err(invalid_adjacency(tokens.len() - 1, last));
        }
    }
    Ok(())
}

fn fits_between(previous: &Token, current: &Token, next: &Token) -> bool {
    match current {
        Token::Operator(operator) => {
            let operand_expected = previous.is_binary_operator()
                || matches!(
                    previous,
                    Token::Function(_) | Token::ArgumentDivider(_) | Token::OpeningBracket(_)
                );
            let operand_missing = operator.is_binary()
                && matches!(
                    next,
                    Token::Operator(_) | Token::ArgumentDivider(_) | Token::OpeningBracket(_)
                );
            !operand_expected && !operand_missing
        }
        Token::Function(function) if function.arity() > 0 => next.is_opening_bracket(),
        Token::Function(_) => !next.is_opening_bracket(),
        _ => true,
    }
}

fn can_start_expression(token: &Token) -> bool {
    !matches!(token, Token::Operator(operator) if operator.is_binary() && operator.is_left_associative())
}

fn can_end_expression(token: &Token) -> bool {
    match token {
        Token::Function(function) => function.arity() == 0,
        Token::Operator(operator) => operator.is_unary() && !operator.is_left_associative(),
        _ => true,
    }
}

fn invalid_adjacency(token_index: usize, token: &Token) -> ConversionError {
    debug!("Rejected {:?} at token {}", token, token_index);
    ConversionError::InvalidAdjacency {
        token_index,
        token: token.clone(),
    }
}
