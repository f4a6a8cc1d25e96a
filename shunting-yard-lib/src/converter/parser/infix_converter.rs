use crate::converter::error::{BracketMismatch, ConversionError};
use crate::converter::lexer::Lexer;
use crate::converter::operator::OperatorDescriptor;
use crate::converter::symbols::Configuration;
use crate::converter::token::Token;
use log::trace;

/// The result of the shunting-yard pass.
#[derive(Debug)]
pub(crate) struct Conversion {
    /// The expression in postfix order.
    pub postfix: Vec<Token>,
    /// Every token read, in input order.
    pub tokens: Vec<Token>,
}

/// Reorders an infix expression into postfix order, pulling tokens from the
/// lexer as it goes. All state lives in this call, so conversions never
/// influence each other.
pub(crate) fn infix_to_postfix(
    expression: &str,
    configuration: &Configuration,
) -> Result<Conversion, ConversionError> {
    let mut lexer = Lexer::new(expression, configuration);
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];
    let mut tokens: Vec<Token> = vec![];

    while lexer.has_next() {
        let token = lexer.next_token()?;
        let token_index = tokens.len();
        match &token {
            Token::Number { .. } => output.push(token.clone()),
            Token::Function(function) if function.arity() == 0 => output.push(token.clone()),
            Token::Function(_) | Token::OpeningBracket(_) => operators.push(token.clone()),
            Token::ArgumentDivider(_) => {
                parse_argument_divider_token(&mut operators, &mut output, token_index)?
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, &token, operator)
            }
            Token::ClosingBracket(_) => {
                parse_closing_bracket_token(&mut operators, &mut output, token_index)?
            }
        };
        tokens.push(token);
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(Conversion {
        postfix: output,
        tokens,
    })
}

fn transfer_top_operator(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    if let Some(operator) = operators.pop() {
        trace!("Moved {:?} from operator stack to output", operator);
        output.push(operator);
    }
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ConversionError> {
    while let Some(operator) = operators.pop() {
        if operator.is_opening_bracket() {
            return Err(BracketMismatch::UnclosedOpening.into());
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_argument_divider_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token_index: usize,
) -> Result<(), ConversionError> {
    loop {
        match operators.last() {
            Some(Token::OpeningBracket(_)) => return Ok(()),
            Some(Token::Operator(_)) => transfer_top_operator(operators, output),
            _ => return Err(ConversionError::MismatchedDivider { token_index }),
        }
    }
}

fn parse_closing_bracket_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token_index: usize,
) -> Result<(), ConversionError> {
    loop {
        match operators.last() {
            Some(Token::OpeningBracket(_)) => break,
            Some(Token::Operator(_)) => transfer_top_operator(operators, output),
            _ => return Err(BracketMismatch::UnmatchedClosing { token_index }.into()),
        }
    }

    // Discard the opening bracket.
    operators.pop();

    // A function is applied once its argument list closes.
    if let Some(Token::Function(_)) = operators.last() {
        transfer_top_operator(operators, output);
    }
    Ok(())
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token: &Token,
    operator: &OperatorDescriptor,
) {
    while let Some(Token::Operator(other_operator)) = operators.last() {
        let binds_tighter = other_operator.precedence_gt(operator)
            || (other_operator.precedence_eq(operator) && operator.is_left_associative());
        if !binds_tighter {
            break;
        }
        transfer_top_operator(operators, output);
    }

    operators.push(token.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn postfix(expression: &str) -> Result<Vec<String>, ConversionError> {
        let conversion = infix_to_postfix(expression, &Configuration::default())?;
        Ok(conversion
            .postfix
            .iter()
            .map(|token| token.literal().to_string())
            .collect())
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        assert_eq!(postfix("1 + 2").unwrap(), ["1", "2", "+"]);
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        assert_eq!(postfix("1 - (2 + 3)").unwrap(), ["1", "2", "3", "+", "-"]);
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        assert_eq!(
            postfix("1 + 2 * 3 / (4 - 5)^6^7").unwrap(),
            ["1", "2", "3", "*", "4", "5", "-", "6", "7", "^", "^", "/", "+"]
        );
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        assert_eq!(
            postfix("1 + 2 * 3 - 4").unwrap(),
            ["1", "2", "3", "*", "+", "4", "-"]
        );
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        assert_eq!(
            postfix("1 + ((2 + 3) * 4)").unwrap(),
            ["1", "2", "3", "+", "4", "*", "+"]
        );
    }

    #[test]
    fn function_is_emitted_when_its_arguments_close() {
        assert_eq!(
            postfix("sin(1, 2 + 3) * 4").unwrap(),
            ["1", "2", "3", "+", "sin", "4", "*"]
        );
    }

    #[test]
    fn unary_operator_binds_tighter_than_binary() {
        assert_eq!(postfix("3! + 1").unwrap(), ["3", "!", "1", "+"]);
    }

    #[test]
    fn token_log_keeps_input_order() {
        let conversion = infix_to_postfix("(1)", &Configuration::default()).unwrap();
        let literals: Vec<&str> = conversion.tokens.iter().map(Token::literal).collect();
        assert_eq!(literals, ["(", "1", ")"]);
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        assert_eq!(
            postfix("(1 + 2))").unwrap_err(),
            ConversionError::UnbalancedBrackets(BracketMismatch::UnmatchedClosing {
                token_index: 5
            })
        );
    }

    #[test]
    fn unclosed_bracket_is_rejected() {
        assert_eq!(
            postfix("(1 + 2").unwrap_err(),
            ConversionError::UnbalancedBrackets(BracketMismatch::UnclosedOpening)
        );
    }

    #[test]
    fn divider_outside_brackets_is_rejected() {
        assert_eq!(
            postfix("1, 2").unwrap_err(),
            ConversionError::MismatchedDivider { token_index: 1 }
        );
    }

    #[test]
    fn lexing_errors_are_propagated() {
        assert!(matches!(
            postfix("1 + y").unwrap_err(),
            ConversionError::Lex(_)
        ));
    }
}
