use crate::{
    ast::{Axis, Expr, UnaryOp},
    error::ParseError,
    eval::Evaluator,
    parser::core::{ParseResult, Parser},
};

impl<E: Evaluator> Parser<E> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primaries are parenthesized groups, numeric literals, variables and
    /// unary operations. A leading `-` is sign and negation at once: glued
    /// directly to a digit it becomes part of the literal, which is how the
    /// most negative value of a bounded domain gets parsed; otherwise it is
    /// unary negation of the primary that follows.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | "-" digits
    ///              | "-" primary
    ///              | digits
    ///              | variable
    ///              | unary_word primary
    /// ```
    /// # Returns
    /// `None` when nothing that can start a primary is next; nothing has been
    /// consumed past leading whitespace in that case.
    ///
    /// # Errors
    /// - [`ParseError::ExpectedClosingParen`] when a group is not closed.
    /// - [`ParseError::ConstantOverflow`] when a literal does not fit the
    ///   numeric domain.
    /// - [`ParseError::InvalidIdentifier`] when an identifier is neither a
    ///   variable nor a unary-operator word.
    /// - [`ParseError::MissingUnaryOperand`] when a unary operator has no
    ///   operand.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Option<Expr<E::Value>>> {
        self.cursor.skip_whitespace();
        if self.cursor.take_if('(') {
            let expression = self.parse_expression()?;
            self.cursor.skip_whitespace();
            if self.cursor.take_if(')') {
                return Ok(Some(expression));
            }
            return Err(ParseError::ExpectedClosingParen { position: self.cursor.position(), });
        }
        let negative = self.cursor.take_if('-');
        if matches!(self.cursor.peek(), Some('0'..='9')) {
            return self.parse_constant(negative).map(Some);
        }
        if negative {
            return self.parse_unary(UnaryOp::Negate).map(Some);
        }
        let start = self.cursor.position();
        let identifier = self.parse_identifier();
        if identifier.is_empty() {
            return Ok(None);
        }
        if let Some(axis) = Axis::from_name(&identifier) {
            return Ok(Some(Expr::Variable(axis)));
        }
        if let Some(operator) = self.operators.unary_word(&identifier) {
            return self.parse_unary(operator).map(Some);
        }
        Err(ParseError::InvalidIdentifier { identifier,
                                            position: start, })
    }

    /// Parses a run of digits into a constant of the evaluator's domain.
    ///
    /// The sign, when present, has already been consumed by
    /// [`Parser::parse_primary`] and is folded into the literal text before
    /// conversion, never applied as a separate negation.
    fn parse_constant(&mut self, negative: bool) -> ParseResult<Expr<E::Value>> {
        let mut literal = String::new();
        if negative {
            literal.push('-');
        }
        while let Some(digit) = self.cursor.peek() {
            if !digit.is_ascii_digit() {
                break;
            }
            literal.push(digit);
            self.cursor.take();
        }
        match E::from_text(&literal) {
            Some(value) => Ok(Expr::Const(value)),
            None => Err(ParseError::ConstantOverflow { literal,
                                                       position: self.cursor.position(), }),
        }
    }

    /// Parses the operand of a unary operator and builds the node.
    ///
    /// The operand is a single primary, so unary operators bind tighter than
    /// every binary operator: `count 2 + 3` is `count(2) + 3`.
    fn parse_unary(&mut self, operator: UnaryOp) -> ParseResult<Expr<E::Value>> {
        match self.parse_primary()? {
            Some(operand) => Ok(Expr::Unary { op:      operator,
                                              operand: Box::new(operand), }),
            None => Err(ParseError::MissingUnaryOperand { operator,
                                                          position: self.cursor.position(), }),
        }
    }
}
