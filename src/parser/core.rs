use std::marker::PhantomData;

use crate::{
    ast::{BinaryOp, Expr},
    error::ParseError,
    eval::Evaluator,
    parser::{cursor::Cursor, operators::OperatorSet},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A single-use recursive-descent parser for one expression string.
///
/// Tokenization is folded into parsing: the parser reads raw characters off a
/// [`Cursor`] and decides at each point whether it is looking at a number, an
/// identifier, a symbol operator or a parenthesis. There is no token stream
/// and no lookahead beyond one character, plus a one-slot pushback that holds
/// a binary operator consumed by a sub-expression that was not allowed to use
/// it.
///
/// The evaluator type parameter fixes the numeric domain constants are read
/// in, so `9999999999` already fails at parse time for 32-bit domains.
///
/// Grammar:
/// ```text
///     expression := primary (binary_operator primary)*
///     primary    := "(" expression ")"
///                 | "-" digits
///                 | "-" primary
///                 | digits
///                 | variable
///                 | unary_word primary
/// ```
/// Operator precedence is not encoded in the grammar; it is enforced by the
/// priority floor passed down through the binary-operator chain.
pub struct Parser<E> {
    pub(crate) cursor:    Cursor,
    pub(crate) operators: &'static OperatorSet,
    pub(crate) pending:   Option<BinaryOp>,
    evaluator:            PhantomData<E>,
}

impl<E: Evaluator> Parser<E> {
    /// Creates a parser over `expression` that recognizes the operator
    /// vocabulary in `operators`.
    #[must_use]
    pub fn new(expression: &str, operators: &'static OperatorSet) -> Self {
        Self { cursor: Cursor::new(expression),
               operators,
               pending: None,
               evaluator: PhantomData }
    }

    /// Parses the whole input into an expression tree.
    ///
    /// The parser is consumed; parsing the same text twice means building two
    /// parsers, and both produce the same tree.
    ///
    /// # Returns
    /// The root of the expression tree.
    ///
    /// # Errors
    /// Any [`ParseError`], including [`ParseError::TrailingCharacters`] when
    /// a complete expression was parsed but input remains.
    ///
    /// # Example
    /// ```
    /// use trigrid::{
    ///     eval::LongEvaluator,
    ///     parser::{GENERIC_OPERATORS, Parser},
    /// };
    ///
    /// let tree = Parser::<LongEvaluator>::new("x mod 3", &GENERIC_OPERATORS).parse()
    ///                                                                       .unwrap();
    /// assert_eq!(tree.to_string(), "(x mod 3)");
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr<E::Value>> {
        let result = self.parse_expression()?;
        if self.cursor.at_end() {
            Ok(result)
        } else {
            Err(ParseError::TrailingCharacters { position: self.cursor.position(), })
        }
    }

    /// Parses one complete sub-expression and diagnoses an empty parse.
    ///
    /// This is the entry point for the root expression and for the body of
    /// every parenthesized group. It runs the binary-operator chain with the
    /// lowest possible floor and then turns "nothing was parsed" into the
    /// most specific error available: a dangling operator ahead means a
    /// missing left operand, end of input means a missing expression, and
    /// anything else is an unexpected character.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr<E::Value>> {
        let result = self.parse_binary_chain(0)?;
        if let Some(operator) = self.pending.take() {
            return Err(ParseError::MissingRightOperand { operator,
                                                         position: self.cursor.position() });
        }
        if let Some(expression) = result {
            return Ok(expression);
        }
        if let Some(operator) = self.parse_binary_operator()? {
            return Err(ParseError::MissingLeftOperand { operator,
                                                        position: self.cursor.position() });
        }
        let position = self.cursor.position();
        match self.cursor.peek() {
            Some(character) => Err(ParseError::UnexpectedCharacter { character, position }),
            None => Err(ParseError::ExpressionExpected { position }),
        }
    }

    /// Parses a left-associative chain of binary operations.
    ///
    /// After an initial primary, the chain repeatedly reads a binary operator
    /// and decides who owns it. An operator with priority above `floor` binds
    /// here: its right operand is parsed by a recursive call whose floor is
    /// the operator's own priority, which is what makes equal-priority
    /// operators associate to the left. An operator at or below the floor
    /// belongs to an enclosing call, so it is parked in the pushback slot and
    /// the chain returns what it has.
    ///
    /// # Returns
    /// `None` when no primary starts at the current position; the caller
    /// decides whether that is an error.
    fn parse_binary_chain(&mut self, floor: u8) -> ParseResult<Option<Expr<E::Value>>> {
        let Some(mut left) = self.parse_primary()? else {
            return Ok(None);
        };
        self.cursor.skip_whitespace();
        while !self.cursor.at_end() {
            let Some(operator) = self.parse_binary_operator()? else {
                break;
            };
            if operator.priority() <= floor {
                self.pending = Some(operator);
                break;
            }
            let Some(right) = self.parse_binary_chain(operator.priority())? else {
                // The operand is missing; the outermost wrapper reports it.
                self.pending = Some(operator);
                break;
            };
            left = Expr::Binary { op:    operator,
                                  left:  Box::new(left),
                                  right: Box::new(right), };
            self.cursor.skip_whitespace();
        }
        Ok(Some(left))
    }

    /// Reads one binary operator, if one is next.
    ///
    /// A parked pushback operator is returned first without touching the
    /// input. Otherwise the operator is either a single symbol character or a
    /// whole identifier word from the active [`OperatorSet`].
    ///
    /// # Returns
    /// `None` when the next character starts neither a symbol operator nor an
    /// identifier; nothing is consumed in that case.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedIdentifier`] when an identifier is next but is
    /// not a binary-operator word of the active vocabulary.
    fn parse_binary_operator(&mut self) -> ParseResult<Option<BinaryOp>> {
        if let Some(operator) = self.pending.take() {
            return Ok(Some(operator));
        }
        if let Some(character) = self.cursor.peek()
           && let Some(operator) = self.operators.binary_symbol(character)
        {
            self.cursor.take();
            return Ok(Some(operator));
        }
        let start = self.cursor.position();
        let identifier = self.parse_identifier();
        if identifier.is_empty() {
            return Ok(None);
        }
        match self.operators.binary_word(&identifier) {
            Some(operator) => Ok(Some(operator)),
            None => Err(ParseError::UnexpectedIdentifier { identifier,
                                                           position: start, }),
        }
    }

    /// Reads a maximal identifier starting at the current position.
    ///
    /// An identifier starts with a letter or `_` and continues through
    /// letters, digits and `_`. The munch is maximal, so `mod3` is one
    /// identifier and never the word `mod` followed by `3`.
    ///
    /// # Returns
    /// The identifier text; empty when no identifier starts here, in which
    /// case nothing is consumed.
    pub(crate) fn parse_identifier(&mut self) -> String {
        let mut identifier = String::new();
        if let Some(character) = self.cursor.peek()
           && is_identifier_start(character)
        {
            identifier.push(character);
            self.cursor.take();
            while let Some(character) = self.cursor.peek() {
                if !is_identifier_part(character) {
                    break;
                }
                identifier.push(character);
                self.cursor.take();
            }
        }
        identifier
    }
}

fn is_identifier_start(character: char) -> bool {
    character.is_alphabetic() || character == '_'
}

fn is_identifier_part(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}
