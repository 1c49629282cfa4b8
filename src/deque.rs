const INITIAL_CAPACITY: usize = 2;

/// A growable double-ended queue over a ring buffer.
///
/// Elements live in a circular window of `len` slots starting at `head`;
/// every slot outside that window is `None`. The buffer doubles when full
/// and is never empty, so the ring arithmetic always has a modulus.
#[derive(Debug)]
pub struct ArrayDeque<T> {
    elements: Vec<Option<T>>,
    head:     usize,
    len:      usize,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty queue.
    ///
    /// # Example
    /// ```
    /// use trigrid::deque::ArrayDeque;
    ///
    /// let mut queue = ArrayDeque::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { elements: empty_buffer(INITIAL_CAPACITY),
               head:     0,
               len:      0, }
    }

    /// Gets the number of queued elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `element` at the tail.
    pub fn push_back(&mut self, element: T) {
        self.ensure_capacity(self.len + 1);
        let slot = self.slot(self.len);
        self.elements[slot] = Some(element);
        self.len += 1;
    }

    /// Prepends `element` at the head.
    pub fn push_front(&mut self, element: T) {
        self.ensure_capacity(self.len + 1);
        self.head = self.head
                        .checked_sub(1)
                        .unwrap_or(self.elements.len() - 1);
        self.elements[self.head] = Some(element);
        self.len += 1;
    }

    /// Removes and returns the head element.
    pub fn pop_front(&mut self) -> Option<T> {
        let item = self.elements[self.head].take();
        if item.is_some() {
            self.head = (self.head + 1) % self.elements.len();
            self.len -= 1;
        }
        item
    }

    /// Removes and returns the tail element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.slot(self.len - 1);
        let item = self.elements[slot].take();
        self.len -= 1;
        item
    }

    /// Gets the head element without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.elements[self.head].as_ref()
    }

    /// Gets the tail element without removing it.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.elements[self.slot(self.len - 1)].as_ref()
    }

    /// Drops every element and returns the buffer to its initial capacity.
    pub fn clear(&mut self) {
        self.elements = empty_buffer(INITIAL_CAPACITY);
        self.head = 0;
        self.len = 0;
    }

    /// Iterates over the elements from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self,
               index: 0, }
    }

    /// Copies the elements into a `Vec`, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }

    /// Checks whether some element equals `target`.
    #[must_use]
    pub fn contains(&self, target: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|element| element == target)
    }

    /// Removes the first element equal to `target`, keeping the order of the
    /// rest.
    ///
    /// Runs in linear time: elements behind the removed one shift forward.
    ///
    /// # Returns
    /// `true` when an element was found and removed.
    pub fn remove_first(&mut self, target: &T) -> bool
        where T: PartialEq
    {
        let found = (0..self.len).find(|&index| {
                                     self.elements[self.slot(index)].as_ref() == Some(target)
                                 });
        let Some(found) = found else {
            return false;
        };
        for index in found..self.len - 1 {
            let to = self.slot(index);
            let from = self.slot(index + 1);
            self.elements.swap(to, from);
        }
        let last = self.slot(self.len - 1);
        self.elements[last] = None;
        self.len -= 1;
        true
    }

    // Buffer index of the queue position `index` counted from the head.
    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.elements.len()
    }

    fn ensure_capacity(&mut self, needed: usize) {
        if needed <= self.elements.len() {
            return;
        }
        let capacity = needed.max(self.elements.len() * 2);
        let mut elements = Vec::with_capacity(capacity);
        for index in 0..self.len {
            let from = self.slot(index);
            elements.push(self.elements[from].take());
        }
        elements.resize_with(capacity, || None);
        self.elements = elements;
        self.head = 0;
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A head-to-tail iterator over a borrowed [`ArrayDeque`].
pub struct Iter<'a, T> {
    deque: &'a ArrayDeque<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index >= self.deque.len {
            return None;
        }
        let slot = self.deque.slot(self.index);
        self.index += 1;
        self.deque.elements[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

fn empty_buffer<T>(capacity: usize) -> Vec<Option<T>> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    buffer
}
