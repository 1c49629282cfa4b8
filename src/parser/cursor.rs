/// A character cursor over expression text.
///
/// The cursor owns the characters of the input and hands them out one at a
/// time. Parsing never looks further ahead than the single character exposed
/// by [`Cursor::peek`], and nothing is ever un-consumed; the parser keeps its
/// own one-slot pushback for operators instead.
#[derive(Debug)]
pub struct Cursor {
    characters: Vec<char>,
    index:      usize,
}

impl Cursor {
    /// Creates a cursor positioned at the first character of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { characters: text.chars().collect(),
               index:      0, }
    }

    /// Gets the next unconsumed character without consuming it.
    ///
    /// # Returns
    /// `None` once the input is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.characters.get(self.index).copied()
    }

    /// Consumes and returns the next character.
    ///
    /// # Returns
    /// `None` once the input is exhausted.
    pub fn take(&mut self) -> Option<char> {
        let taken = self.peek();
        if taken.is_some() {
            self.index += 1;
        }
        taken
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// # Returns
    /// `true` when the character matched and was consumed.
    pub fn take_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            return true;
        }
        false
    }

    /// Consumes characters as long as they are whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(character) = self.peek() {
            if !character.is_whitespace() {
                break;
            }
            self.index += 1;
        }
    }

    /// Checks whether every character has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.index >= self.characters.len()
    }

    /// Gets the one-based position of the next unconsumed character.
    ///
    /// Once the input is exhausted this is one past the final character, so
    /// errors raised at the end of input still point at a meaningful spot.
    ///
    /// # Example
    /// ```
    /// use trigrid::parser::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.position(), 1);
    /// cursor.take();
    /// assert_eq!(cursor.position(), 2);
    /// cursor.take();
    /// assert_eq!(cursor.position(), 3);
    /// assert!(cursor.at_end());
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index + 1
    }
}
