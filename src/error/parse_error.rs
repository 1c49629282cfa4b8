use crate::ast::{BinaryOp, UnaryOp};

#[derive(Debug)]
/// Represents all errors that can occur while parsing an expression.
///
/// Every variant carries the one-based character position the error refers
/// to: the offending character itself, or one past the end of the input when
/// the parser ran out of text.
pub enum ParseError {
    /// Found a character that cannot start a primary or an operator.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// One-based position of the character.
        position:  usize,
    },
    /// Found an identifier where a binary operator was expected.
    UnexpectedIdentifier {
        /// The identifier encountered.
        identifier: String,
        /// One-based position of the identifier's first character.
        position:   usize,
    },
    /// Found an identifier that is neither a variable nor a unary operator
    /// where a primary was expected.
    InvalidIdentifier {
        /// The identifier encountered.
        identifier: String,
        /// One-based position of the identifier's first character.
        position:   usize,
    },
    /// A binary operator appeared with nothing to its left.
    MissingLeftOperand {
        /// The operator missing its left operand.
        operator: BinaryOp,
        /// One-based position just past the operator.
        position: usize,
    },
    /// A binary operator appeared with nothing to its right.
    MissingRightOperand {
        /// The operator missing its right operand.
        operator: BinaryOp,
        /// One-based position where the operand should have started.
        position: usize,
    },
    /// A unary operator appeared with no operand following it.
    MissingUnaryOperand {
        /// The operator missing its operand.
        operator: UnaryOp,
        /// One-based position where the operand should have started.
        position: usize,
    },
    /// A parenthesized expression was not closed with `)`.
    ExpectedClosingParen {
        /// One-based position of the offending character.
        position: usize,
    },
    /// The input was empty or contained no expression at all.
    ExpressionExpected {
        /// One-based position at which an expression should have started.
        position: usize,
    },
    /// A numeric literal does not fit the active numeric domain.
    ConstantOverflow {
        /// The literal text, including a leading `-` if present.
        literal:  String,
        /// One-based position just past the literal.
        position: usize,
    },
    /// A complete expression was parsed but input characters remain.
    TrailingCharacters {
        /// One-based position of the first unconsumed character.
        position: usize,
    },
}

impl ParseError {
    /// Gets the one-based position this error refers to.
    ///
    /// # Example
    /// ```
    /// let err = trigrid::parse("2+").unwrap_err();
    /// assert_eq!(err.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedIdentifier { position, .. }
            | Self::InvalidIdentifier { position, .. }
            | Self::MissingLeftOperand { position, .. }
            | Self::MissingRightOperand { position, .. }
            | Self::MissingUnaryOperand { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::ExpressionExpected { position }
            | Self::ConstantOverflow { position, .. }
            | Self::TrailingCharacters { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                       "Error at position {position}: Unexpected character: '{character}'."),

            Self::UnexpectedIdentifier { identifier, position } => {
                write!(f, "Error at position {position}: Unexpected identifier: {identifier}.")
            },

            Self::InvalidIdentifier { identifier, position } => write!(f,
                                                                      "Error at position {position}: Invalid identifier at expression start: '{identifier}'."),

            Self::MissingLeftOperand { operator, position } => {
                write!(f, "Error at position {position}: Missing left operand for '{operator}'.")
            },

            Self::MissingRightOperand { operator, position } => {
                write!(f, "Error at position {position}: Missing right operand for '{operator}'.")
            },

            Self::MissingUnaryOperand { operator, position } => {
                write!(f, "Error at position {position}: Missing operand for '{operator}'.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected ')' or a binary operator."),

            Self::ExpressionExpected { position } => {
                write!(f, "Error at position {position}: Expression expected.")
            },

            Self::ConstantOverflow { literal, position } => {
                write!(f, "Error at position {position}: Constant overflow: {literal}.")
            },
            Self::TrailingCharacters { position } => write!(f,
                                                            "Error at position {position}: End of expression or a binary operator expected."),
        }
    }
}

impl std::error::Error for ParseError {}
