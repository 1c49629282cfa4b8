use crate::ast::{BinaryOp, UnaryOp};

/// The operator vocabulary a parser run recognizes.
///
/// An operator either looks like a single symbol character (`+`, `*`) or like
/// a whole identifier word (`mod`, `count`). Word operators are matched
/// against a maximally-munched identifier, so `2mod3` is the identifier
/// `mod3` rather than the word `mod` squeezed between digits.
///
/// Unary `-` is not listed here; the parser handles it directly because it
/// doubles as the sign of a numeric literal.
#[derive(Debug)]
pub struct OperatorSet {
    binary_symbols: &'static [(char, BinaryOp)],
    binary_words:   &'static [(&'static str, BinaryOp)],
    unary_words:    &'static [(&'static str, UnaryOp)],
}

impl OperatorSet {
    /// Looks up the binary operator written as the symbol `character`.
    #[must_use]
    pub fn binary_symbol(&self, character: char) -> Option<BinaryOp> {
        self.binary_symbols
            .iter()
            .find(|(symbol, _)| *symbol == character)
            .map(|(_, operator)| *operator)
    }

    /// Looks up the binary operator written as the word `identifier`.
    #[must_use]
    pub fn binary_word(&self, identifier: &str) -> Option<BinaryOp> {
        self.binary_words
            .iter()
            .find(|(word, _)| *word == identifier)
            .map(|(_, operator)| *operator)
    }

    /// Looks up the unary operator written as the word `identifier`.
    #[must_use]
    pub fn unary_word(&self, identifier: &str) -> Option<UnaryOp> {
        self.unary_words
            .iter()
            .find(|(word, _)| *word == identifier)
            .map(|(_, operator)| *operator)
    }
}

/// Operators of the checked 32-bit integer grammar: the four arithmetic
/// symbols, the bit-manipulating words `set` and `clear`, and the unary words
/// `count`, `pow10` and `log10`.
pub static INTEGER_OPERATORS: OperatorSet =
    OperatorSet { binary_symbols: &[('+', BinaryOp::Add),
                                    ('-', BinaryOp::Subtract),
                                    ('*', BinaryOp::Multiply),
                                    ('/', BinaryOp::Divide)],
                  binary_words:   &[("set", BinaryOp::Set), ("clear", BinaryOp::Clear)],
                  unary_words:    &[("count", UnaryOp::Count),
                                    ("pow10", UnaryOp::Pow10),
                                    ("log10", UnaryOp::Log10)], };

/// Operators of the generic multi-domain grammar: the four arithmetic
/// symbols, the word `mod`, and the unary words `abs` and `square`.
pub static GENERIC_OPERATORS: OperatorSet =
    OperatorSet { binary_symbols: &[('+', BinaryOp::Add),
                                    ('-', BinaryOp::Subtract),
                                    ('*', BinaryOp::Multiply),
                                    ('/', BinaryOp::Divide)],
                  binary_words:   &[("mod", BinaryOp::Mod)],
                  unary_words:    &[("abs", UnaryOp::Abs), ("square", UnaryOp::Square)], };
