pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod symbols;
pub mod token;

use crate::converter::error::ConversionError;
use crate::converter::symbols::Configuration;
use crate::converter::token::Token;
use itertools::Itertools;

/// Converts an infix expression into postfix (Reverse Polish) notation, using
/// the default symbol table.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The postfix expression, tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use shunting_yard::converter::convert;
///
/// assert_eq!(convert("1 + 2 * 3").unwrap(), "1 2 3 * +");
/// assert!(convert("1 +").is_err());
/// ```
pub fn convert(expression: &str) -> Result<String, ConversionError> {
    convert_with(expression, &Configuration::default())
}

/// Converts an infix expression into postfix notation against the given
/// symbol table.
///
/// Every call starts from a clean slate, so the same configuration can be
/// used for any number of conversions, also concurrently.
///
/// # Examples
///
/// ```
/// use shunting_yard::converter::convert_with;
/// use shunting_yard::converter::symbols::Configuration;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let configuration = Configuration::from_descriptions(
///     "0123456789",
///     &["max:2"],
///     &[";"],
///     &["+:2:l:1"],
///     &["["],
///     &["]"],
/// )?;
/// assert_eq!(convert_with("max[1; 2] + 3", &configuration)?, "1 2 max 3 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert_with(
    expression: &str,
    configuration: &Configuration,
) -> Result<String, ConversionError> {
    let postfix_tokens = parser::parse(expression, configuration)?;
    Ok(tokens_to_string(&postfix_tokens))
}

/// Joins the literals of the given tokens with single spaces.
///
/// # Examples
///
/// ```
/// use shunting_yard::converter::tokens_to_string;
/// use shunting_yard::converter::token::Token;
///
/// let tokens = vec![Token::new_number(1.0), Token::new_number(0.5)];
/// assert_eq!(tokens_to_string(&tokens), "1 0.5");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::literal)
        .join(" ")
        .trim()
        .to_string()
}
