use crate::converter::error::LexError;
use crate::converter::symbols::Configuration;
use crate::converter::token::Token;
use log::trace;
use std::iter::FusedIterator;

/// Splits an expression into tokens, one at a time, against a symbol table.
///
/// The lexer remembers the token it produced last, since whether a `+` or `-`
/// starts a signed number or is an operator depends on what came before it.
/// Iterating yields every token up to the end of the expression and stops
/// after the first error.
pub struct Lexer<'a> {
    configuration: &'a Configuration,
    characters: Vec<char>,
    cursor: usize,
    previous: Option<Token>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &str, configuration: &'a Configuration) -> Self {
        Lexer {
            configuration,
            characters: expression.chars().collect(),
            cursor: 0,
            previous: None,
            failed: false,
        }
    }

    /// Character offset of the next unread character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether anything other than whitespace is left to read.
    pub fn has_next(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor < self.characters.len()
    }

    /// Reads the next token.
    ///
    /// Leading whitespace is skipped. Numbers are read greedily; any other
    /// literal grows one character at a time until it matches a symbol, so
    /// multi-character names like `sin` are found as well as single-character
    /// operators.
    ///
    /// returns: The token, or an error if the expression is exhausted or no
    /// symbol can be formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::converter::lexer::Lexer;
    /// use shunting_yard::converter::symbols::Configuration;
    ///
    /// let configuration = Configuration::default();
    /// let mut lexer = Lexer::new("sin(-1)", &configuration);
    /// assert_eq!(lexer.next_token().unwrap().literal(), "sin");
    /// assert_eq!(lexer.next_token().unwrap().literal(), "(");
    /// assert_eq!(lexer.next_token().unwrap().literal(), "-1");
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let offset = self.cursor;
        let first = self
            .next_char()
            .ok_or(LexError::UnexpectedEndOfInput { offset })?;

        let token = if self.starts_number(first) {
            self.read_number(first, offset)?
        } else {
            self.read_symbol(first, offset)?
        };

        trace!("Lexed {:?} at offset {}", token, offset);
        self.previous = Some(token.clone());
        Ok(token)
    }

    /// A number may only start where an operand is expected. A sign only
    /// starts one when a number character follows it.
    fn starts_number(&self, first: char) -> bool {
        if !self.configuration.is_number_char(first) {
            return false;
        }
        let operand_expected = self
            .previous
            .as_ref()
            .map_or(true, Token::accepts_number_after);
        if !operand_expected {
            return false;
        }
        match first {
            '+' | '-' => self
                .peek_char()
                .map_or(false, |next| self.configuration.is_number_char(next)),
            _ => true,
        }
    }

    fn read_number(&mut self, first: char, offset: usize) -> Result<Token, LexError> {
        let mut literal = String::from(first);
        // A sign ends a number once it has started, so `1+2` is not one literal.
        while let Some(next) = self.peek_char() {
            if next == '+' || next == '-' || !self.configuration.is_number_char(next) {
                break;
            }
            literal.push(next);
            self.cursor += 1;
        }

        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::new_number(value)),
            Err(source) => Err(LexError::MalformedNumber {
                literal,
                offset,
                source,
            }),
        }
    }

    fn read_symbol(&mut self, first: char, offset: usize) -> Result<Token, LexError> {
        let mut literal = String::from(first);
        loop {
            if let Some(symbol) = self.configuration.lookup(&literal) {
                return Ok(symbol.into());
            }
            match self.peek_char() {
                Some(next) if !next.is_whitespace() => {
                    literal.push(next);
                    self.cursor += 1;
                }
                _ => {
                    return Err(LexError::UnrecognizedSymbol {
                        symbol: literal,
                        offset,
                    })
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .peek_char()
            .map_or(false, |character| character.is_whitespace())
        {
            self.cursor += 1;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.characters.get(self.cursor).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let character = self.peek_char()?;
        self.cursor += 1;
        Some(character)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.has_next() {
            return None;
        }
        let token = self.next_token();
        self.failed = token.is_err();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Splits the whole expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `configuration`: The symbol table to read it against.
///
/// returns: The tokens in the order they appear.
///
/// # Examples
///
/// ```
/// use shunting_yard::converter::lexer::tokenize;
/// use shunting_yard::converter::symbols::Configuration;
///
/// let tokens = tokenize("1 + -2", &Configuration::default()).unwrap();
/// let literals: Vec<&str> = tokens.iter().map(|token| token.literal()).collect();
/// assert_eq!(literals, ["1", "+", "-2"]);
/// ```
pub fn tokenize(expression: &str, configuration: &Configuration) -> Result<Vec<Token>, LexError> {
    Lexer::new(expression, configuration).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn literals(expression: &str) -> Vec<String> {
        tokenize(expression, &Configuration::default())
            .unwrap()
            .iter()
            .map(|token| token.literal().to_string())
            .collect()
    }

    #[parameterized(
        expression = {
            "1+2",
            "1 + 2",
            "-1",
            "+5",
            "1-2",
            "1 -2",
            "1--2",
            "(-1)",
            "sin(0.5,-2)",
            "3!",
            "2.50*4.0",
            "  7  ",
        },
        expected = {
            &["1", "+", "2"],
            &["1", "+", "2"],
            &["-1"],
            &["5"],
            &["1", "-", "2"],
            &["1", "-", "2"],
            &["1", "-", "-2"],
            &["(", "-1", ")"],
            &["sin", "(", "0.5", ",", "-2", ")"],
            &["3", "!"],
            &["2.5", "*", "4"],
            &["7"],
        }
    )]
    fn expression_is_split_into_tokens(expression: &str, expected: &[&str]) {
        self::assert_eq!(literals(expression), expected);
    }

    #[test]
    fn tokens_carry_their_descriptors() {
        let tokens = tokenize("cos(1)^2", &Configuration::default()).unwrap();
        assert!(matches!(&tokens[0], Token::Function(f) if f.arity() == 1));
        assert!(matches!(&tokens[2], Token::Number { value, .. } if *value == 1.0));
        assert!(tokens[4].is_binary_operator());
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert_eq!(literals(""), Vec::<String>::new());
        assert_eq!(literals("   "), Vec::<String>::new());
    }

    #[test]
    fn next_token_fails_at_end_of_input() {
        let configuration = Configuration::default();
        let mut lexer = Lexer::new("1 ", &configuration);
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token().unwrap_err(),
            LexError::UnexpectedEndOfInput { offset: 2 }
        );
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = tokenize("1 + x", &Configuration::default()).unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedSymbol {
                symbol: "x".to_string(),
                offset: 4
            }
        );
    }

    #[test]
    fn unknown_symbol_grows_until_whitespace() {
        let err = tokenize("tan(0) + 1", &Configuration::default()).unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedSymbol {
                symbol: "tan(0)".to_string(),
                offset: 0
            }
        );
    }

    #[test]
    fn number_after_number_is_not_a_number() {
        let err = tokenize("2 3", &Configuration::default()).unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedSymbol { offset: 2, .. }));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = tokenize("1.2.3", &Configuration::default()).unwrap_err();
        assert!(matches!(
            err,
            LexError::MalformedNumber { ref literal, offset: 0, .. } if literal == "1.2.3"
        ));
    }

    #[test]
    fn iteration_stops_after_first_error() {
        let configuration = Configuration::default();
        let results: Vec<_> = Lexer::new("1 $ 2", &configuration).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn multi_character_operators_are_matched() {
        let configuration =
            Configuration::from_descriptions("0123456789", &[], &[], &["**:2:r:3"], &[], &[])
                .unwrap();
        let tokens = tokenize("2**3", &configuration).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].literal(), "**");
    }
}
