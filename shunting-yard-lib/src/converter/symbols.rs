//! The symbol table an expression is read against.
//!
//! A [`Configuration`] lists which characters make up numbers, and which
//! literals are functions, operators, argument dividers and brackets. It is
//! validated once when built and exposes read-only views afterwards, so one
//! configuration can back any number of conversions, also across threads.
use crate::converter::error::ConfigurationError;
use crate::converter::operator::{Associativity, OperatorDescriptor};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

pub const DEFAULT_NUMBER_CHARS: &str = "0123456789.-+";
pub const DEFAULT_FUNCTIONS: [&str; 2] = ["sin:1", "cos:1"];
pub const DEFAULT_ARGUMENT_DIVIDERS: [&str; 1] = [","];
pub const DEFAULT_OPERATORS: [&str; 6] = [
    "+:2:l:1", "-:2:l:1", "*:2:l:2", "/:2:l:2", "^:2:r:3", "!:1:r:4",
];
pub const DEFAULT_OPENING_BRACKETS: [&str; 1] = ["("];
pub const DEFAULT_CLOSING_BRACKETS: [&str; 1] = [")"];

/// A named function and the number of arguments it takes.
///
/// A function with no arguments behaves like a named constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDescriptor {
    name: String,
    arity: usize,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, arity: usize) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        Ok(FunctionDescriptor { name, arity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Renders the textual form `name:arity`, e.g. `sin:1`.
impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.arity)
    }
}

impl FromStr for FunctionDescriptor {
    type Err = ConfigurationError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ConfigurationError::MalformedDescription {
            description: description.to_string(),
            reason,
        };
        let (name, arity) = description
            .split_once(':')
            .ok_or_else(|| malformed("expected name:arity"))?;
        let arity = arity
            .parse::<i64>()
            .map_err(|_| malformed("arity is not an integer"))?;
        if arity < 0 {
            return Err(ConfigurationError::NegativeFunctionArity {
                name: name.to_string(),
                arity,
            });
        }
        FunctionDescriptor::new(name, arity as usize)
    }
}

/// What a literal resolved to in the symbol table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol<'a> {
    Function(&'a FunctionDescriptor),
    Operator(&'a OperatorDescriptor),
    OpeningBracket(&'a str),
    ClosingBracket(&'a str),
    ArgumentDivider(&'a str),
}

/// An immutable symbol table.
///
/// Literals should not collide across categories. If they do, [`Configuration::lookup`]
/// resolves them in the order functions, operators, opening brackets, closing
/// brackets, argument dividers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    number_chars: String,
    functions: Vec<FunctionDescriptor>,
    argument_dividers: Vec<String>,
    operators: Vec<OperatorDescriptor>,
    opening_brackets: Vec<String>,
    closing_brackets: Vec<String>,
}

impl Configuration {
    /// Builds a symbol table from already validated descriptors.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::converter::operator::{Associativity, OperatorDescriptor};
    /// use shunting_yard::converter::symbols::{Configuration, FunctionDescriptor};
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let configuration = Configuration::new(
    ///     "0123456789",
    ///     vec![FunctionDescriptor::new("max", 2)?],
    ///     vec![";".to_string()],
    ///     vec![OperatorDescriptor::new("+", 2, Associativity::Left, 1)?],
    ///     vec!["[".to_string()],
    ///     vec!["]".to_string()],
    /// )?;
    /// assert_eq!(configuration.functions().len(), 1);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn new(
        number_chars: impl Into<String>,
        functions: Vec<FunctionDescriptor>,
        argument_dividers: Vec<String>,
        operators: Vec<OperatorDescriptor>,
        opening_brackets: Vec<String>,
        closing_brackets: Vec<String>,
    ) -> Result<Self, ConfigurationError> {
        let literals = argument_dividers
            .iter()
            .chain(&opening_brackets)
            .chain(&closing_brackets);
        for literal in literals {
            if literal.is_empty() {
                return Err(ConfigurationError::EmptyName);
            }
        }
        Ok(Configuration {
            number_chars: number_chars.into(),
            functions,
            argument_dividers,
            operators,
            opening_brackets,
            closing_brackets,
        })
    }

    /// Builds a symbol table from colon-separated descriptions, such as
    /// `sin:1` for functions and `+:2:l:1` for operators.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::converter::symbols::Configuration;
    ///
    /// let configuration = Configuration::from_descriptions(
    ///     "0123456789.",
    ///     &["pi:0", "sqrt:1"],
    ///     &[","],
    ///     &["+:2:l:1", "*:2:l:2"],
    ///     &["("],
    ///     &[")"],
    /// );
    /// assert!(configuration.is_ok());
    ///
    /// let invalid = Configuration::from_descriptions("0", &[], &[], &["~:3:l:1"], &[], &[]);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_descriptions<S: AsRef<str>>(
        number_chars: &str,
        functions: &[S],
        argument_dividers: &[S],
        operators: &[S],
        opening_brackets: &[S],
        closing_brackets: &[S],
    ) -> Result<Self, ConfigurationError> {
        let functions = functions
            .iter()
            .map(|description| description.as_ref().parse())
            .collect::<Result<Vec<FunctionDescriptor>, _>>()?;
        let operators = operators
            .iter()
            .map(|description| description.as_ref().parse())
            .collect::<Result<Vec<OperatorDescriptor>, _>>()?;
        Configuration::new(
            number_chars,
            functions,
            to_owned_literals(argument_dividers),
            operators,
            to_owned_literals(opening_brackets),
            to_owned_literals(closing_brackets),
        )
    }

    pub fn number_chars(&self) -> &str {
        &self.number_chars
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    pub fn argument_dividers(&self) -> &[String] {
        &self.argument_dividers
    }

    pub fn operators(&self) -> &[OperatorDescriptor] {
        &self.operators
    }

    pub fn opening_brackets(&self) -> &[String] {
        &self.opening_brackets
    }

    pub fn closing_brackets(&self) -> &[String] {
        &self.closing_brackets
    }

    pub fn is_number_char(&self, character: char) -> bool {
        self.number_chars.contains(character)
    }

    /// Finds the symbol that exactly matches the given literal, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::converter::symbols::{Configuration, Symbol};
    ///
    /// let configuration = Configuration::default();
    /// assert!(matches!(configuration.lookup("sin"), Some(Symbol::Function(_))));
    /// assert!(matches!(configuration.lookup(","), Some(Symbol::ArgumentDivider(","))));
    /// assert_eq!(configuration.lookup("si"), None);
    /// ```
    pub fn lookup(&self, literal: &str) -> Option<Symbol<'_>> {
        if let Some(function) = self.functions.iter().find(|f| f.name() == literal) {
            return Some(Symbol::Function(function));
        }
        if let Some(operator) = self.operators.iter().find(|o| o.name() == literal) {
            return Some(Symbol::Operator(operator));
        }
        if let Some(bracket) = find_literal(&self.opening_brackets, literal) {
            return Some(Symbol::OpeningBracket(bracket));
        }
        if let Some(bracket) = find_literal(&self.closing_brackets, literal) {
            return Some(Symbol::ClosingBracket(bracket));
        }
        find_literal(&self.argument_dividers, literal).map(Symbol::ArgumentDivider)
    }
}

impl Default for Configuration {
    /// Digits with sign and decimal point, `sin` and `cos`, `,` as divider,
    /// `+ - * /` and right-associative `^` as binary operators, `!` as unary
    /// operator, and round brackets.
    fn default() -> Self {
        let function = |name: &str| FunctionDescriptor {
            name: name.to_string(),
            arity: 1,
        };
        let operator = OperatorDescriptor::from_parts;
        Configuration {
            number_chars: DEFAULT_NUMBER_CHARS.to_string(),
            functions: vec![function("sin"), function("cos")],
            argument_dividers: to_owned_literals(&DEFAULT_ARGUMENT_DIVIDERS),
            operators: vec![
                operator("+", 2, Associativity::Left, 1),
                operator("-", 2, Associativity::Left, 1),
                operator("*", 2, Associativity::Left, 2),
                operator("/", 2, Associativity::Left, 2),
                operator("^", 2, Associativity::Right, 3),
                operator("!", 1, Associativity::Right, 4),
            ],
            opening_brackets: to_owned_literals(&DEFAULT_OPENING_BRACKETS),
            closing_brackets: to_owned_literals(&DEFAULT_CLOSING_BRACKETS),
        }
    }
}

fn find_literal<'a>(literals: &'a [String], literal: &str) -> Option<&'a str> {
    literals
        .iter()
        .find(|candidate| candidate.as_str() == literal)
        .map(String::as_str)
}

fn to_owned_literals<S: AsRef<str>>(literals: &[S]) -> Vec<String> {
    literals
        .iter()
        .map(|literal| literal.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_from_descriptions() -> Configuration {
        Configuration::from_descriptions(
            DEFAULT_NUMBER_CHARS,
            &DEFAULT_FUNCTIONS,
            &DEFAULT_ARGUMENT_DIVIDERS,
            &DEFAULT_OPERATORS,
            &DEFAULT_OPENING_BRACKETS,
            &DEFAULT_CLOSING_BRACKETS,
        )
        .unwrap()
    }

    #[test]
    fn default_configuration_matches_default_descriptions() {
        assert_eq!(Configuration::default(), default_from_descriptions());
    }

    #[test]
    fn descriptors_render_back_to_their_descriptions() {
        let configuration = Configuration::default();
        let functions: Vec<String> = configuration
            .functions()
            .iter()
            .map(ToString::to_string)
            .collect();
        let operators: Vec<String> = configuration
            .operators()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(functions, DEFAULT_FUNCTIONS);
        assert_eq!(operators, DEFAULT_OPERATORS);
    }

    #[test]
    fn lookup_resolves_every_category() {
        let configuration = Configuration::default();
        assert!(matches!(
            configuration.lookup("cos"),
            Some(Symbol::Function(f)) if f.arity() == 1
        ));
        assert!(matches!(
            configuration.lookup("!"),
            Some(Symbol::Operator(o)) if o.is_unary()
        ));
        assert_eq!(configuration.lookup("("), Some(Symbol::OpeningBracket("(")));
        assert_eq!(configuration.lookup(")"), Some(Symbol::ClosingBracket(")")));
        assert_eq!(configuration.lookup(","), Some(Symbol::ArgumentDivider(",")));
        assert_eq!(configuration.lookup("tan"), None);
    }

    #[test]
    fn lookup_prefers_functions_over_operators() {
        let configuration =
            Configuration::from_descriptions("0", &["x:1"], &[], &["x:2:l:1"], &[], &[])
                .unwrap();
        assert!(matches!(
            configuration.lookup("x"),
            Some(Symbol::Function(_))
        ));
    }

    #[test]
    fn lookup_prefers_brackets_over_dividers() {
        let configuration =
            Configuration::from_descriptions("0", &[], &["|"], &[], &["|"], &[]).unwrap();
        assert_eq!(configuration.lookup("|"), Some(Symbol::OpeningBracket("|")));
    }

    #[test]
    fn negative_function_arity_is_rejected() {
        let err = "f:-1".parse::<FunctionDescriptor>().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NegativeFunctionArity {
                name: "f".to_string(),
                arity: -1
            }
        );
    }

    #[test]
    fn zero_arity_function_is_accepted() {
        let pi: FunctionDescriptor = "pi:0".parse().unwrap();
        assert_eq!(pi.name(), "pi");
        assert_eq!(pi.arity(), 0);
    }

    #[test]
    fn malformed_function_description_is_rejected() {
        for description in ["sin", "sin:one", ":1"] {
            assert!(description.parse::<FunctionDescriptor>().is_err());
        }
    }

    #[test]
    fn empty_bracket_literal_is_rejected() {
        let err = Configuration::from_descriptions("0", &[], &[], &[], &[""], &[")"]).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyName);
    }

    #[test]
    fn configuration_is_shareable_across_threads() {
        fn _assert_send_sync<T: Send + Sync>() {}
        _assert_send_sync::<Configuration>();
    }
}
