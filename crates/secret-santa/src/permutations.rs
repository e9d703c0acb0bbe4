//! Lazy permutation enumeration.
//!
//! [`Permutations`] walks every arrangement of a base sequence using the
//! iterative form of Heap's algorithm. Each step performs a single swap, so
//! the streaming [`Permutations::advance`] never allocates. The base order
//! itself is always the first arrangement produced.

/// Lazily enumerates every permutation of a base sequence exactly once.
///
/// A sequence of `n` items yields `n!` arrangements; an empty sequence
/// yields a single empty arrangement.
///
/// # Example
///
/// ```
/// use secret_santa::Permutations;
///
/// let all: Vec<Vec<char>> = Permutations::new(vec!['a', 'b', 'c']).collect();
///
/// assert_eq!(all.len(), 6);
/// assert_eq!(all.first(), Some(&vec!['a', 'b', 'c']));
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl<T> Permutations<T> {
    /// Creates an enumeration starting from `items` in their given order.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            cursor: 0,
            started: false,
        }
    }

    /// Moves to the next arrangement and borrows it.
    ///
    /// Returns `None` once every arrangement has been produced, and keeps
    /// returning `None` afterwards.
    pub fn advance(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }

        while let Some(counter) = self.counters.get_mut(self.cursor) {
            let index = self.cursor;
            if *counter < index {
                let swap_with = if index & 1 == 0 { 0 } else { *counter };
                *counter += 1;
                self.items.swap(swap_with, index);
                self.cursor = 0;
                return Some(&self.items);
            }
            *counter = 0;
            self.cursor += 1;
        }

        None
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[T]>::to_vec)
    }
}
