use crate::converter::error::ConfigurationError;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

const PROPERTIES_DIVIDER: char = ':';
const LEFT_ASSOCIATIVE_SYMBOL: &str = "l";
const RIGHT_ASSOCIATIVE_SYMBOL: &str = "r";

/// Which side equal-precedence operators group towards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// A configured operator: its symbol, how many operands it takes, how it groups
/// and how tightly it binds.
///
/// The arity is checked on construction, so a descriptor always takes
/// either one or two operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorDescriptor {
    name: String,
    arity: u8,
    associativity: Associativity,
    precedence: i32,
}

impl OperatorDescriptor {
    /// Creates a new operator descriptor.
    ///
    /// # Arguments
    ///
    /// * `name`: The symbol of the operator, e.g. `+`.
    /// * `arity`: The number of operands, must be 1 or 2.
    /// * `associativity`: How equal-precedence operators group.
    /// * `precedence`: Higher values bind tighter.
    ///
    /// returns: The descriptor, or an error if the name is empty or the arity invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunting_yard::converter::operator::{Associativity, OperatorDescriptor};
    ///
    /// let plus = OperatorDescriptor::new("+", 2, Associativity::Left, 1).unwrap();
    /// assert!(plus.is_binary());
    /// assert!(OperatorDescriptor::new("?", 3, Associativity::Left, 1).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        arity: i64,
        associativity: Associativity,
        precedence: i32,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        if arity != 1 && arity != 2 {
            return Err(ConfigurationError::InvalidOperatorArity { name, arity });
        }
        Ok(OperatorDescriptor {
            name,
            arity: arity as u8,
            associativity,
            precedence,
        })
    }

    /// Builds a descriptor whose arity is known to be 1 or 2.
    pub(crate) fn from_parts(
        name: &str,
        arity: u8,
        associativity: Associativity,
        precedence: i32,
    ) -> Self {
        debug_assert!(arity == 1 || arity == 2);
        OperatorDescriptor {
            name: name.to_string(),
            arity,
            associativity,
            precedence,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn is_unary(&self) -> bool {
        self.arity == 1
    }

    pub fn is_binary(&self) -> bool {
        self.arity == 2
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence.eq(&other.precedence)
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence.gt(&other.precedence)
    }
}

/// Renders the textual form `name:arity:associativity:precedence`, e.g. `!:1:r:4`.
impl fmt::Display for OperatorDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let associativity = match self.associativity {
            Associativity::Left => LEFT_ASSOCIATIVE_SYMBOL,
            Associativity::Right => RIGHT_ASSOCIATIVE_SYMBOL,
        };
        write!(
            f,
            "{name}{d}{arity}{d}{associativity}{d}{precedence}",
            name = self.name,
            d = PROPERTIES_DIVIDER,
            arity = self.arity,
            associativity = associativity,
            precedence = self.precedence,
        )
    }
}

impl FromStr for OperatorDescriptor {
    type Err = ConfigurationError;

    fn from_str(description: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ConfigurationError::MalformedDescription {
            description: description.to_string(),
            reason,
        };

        // The name is everything before the first divider, so ':' itself cannot be an operator.
        let mut properties = description.splitn(4, PROPERTIES_DIVIDER);
        let (name, arity, associativity, precedence) = match (
            properties.next(),
            properties.next(),
            properties.next(),
            properties.next(),
        ) {
            (Some(name), Some(arity), Some(associativity), Some(precedence)) => {
                (name, arity, associativity, precedence)
            }
            _ => return Err(malformed("expected name:arity:associativity:precedence")),
        };

        let arity = arity
            .parse::<i64>()
            .map_err(|_| malformed("arity is not an integer"))?;
        let associativity = match associativity {
            LEFT_ASSOCIATIVE_SYMBOL => Associativity::Left,
            RIGHT_ASSOCIATIVE_SYMBOL => Associativity::Right,
            _ => return Err(malformed("associativity must be 'l' or 'r'")),
        };
        let precedence = precedence
            .parse::<i32>()
            .map_err(|_| malformed("precedence is not an integer"))?;

        OperatorDescriptor::new(name, arity, associativity, precedence)
    }
}
