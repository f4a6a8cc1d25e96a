mod infix_converter;
mod validator;

use crate::converter::error::ConversionError;
use crate::converter::parser::infix_converter::infix_to_postfix;
use crate::converter::parser::validator::validate;
use crate::converter::symbols::Configuration;
use crate::converter::token::Token;
use log::debug;

/// Parses the given infix expression into the equivalent postfix token sequence.
///
/// The expression is first reordered with the shunting-yard algorithm, then
/// every token it contained is checked against its neighbours.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `configuration`: The symbol table to read it against.
///
/// returns: The tokens in postfix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use shunting_yard::converter::parser::parse;
/// use shunting_yard::converter::symbols::Configuration;
///
/// let postfix_tokens = parse("(1 + 2) * 3", &Configuration::default())?;
/// let literals: Vec<&str> = postfix_tokens.iter().map(|token| token.literal()).collect();
/// assert_eq!(literals, ["1", "2", "+", "3", "*"]);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(expression: &str, configuration: &Configuration) -> Result<Vec<Token>, ConversionError> {
    let conversion = infix_to_postfix(expression, configuration)?;
    validate(&conversion.tokens)?;
    debug!("Converted {:?} into {:?}", expression, conversion.postfix);
    Ok(conversion.postfix)
}
