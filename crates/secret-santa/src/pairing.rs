//! Pairing primitives shared by the generator operations.
//!
//! This module defines the directional ban list, the finished assignment
//! mapping, and the validity rule that every candidate pairing must pass.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::slice;

/// A set of directional `(gifter, giftee)` pairs that must never be assigned.
///
/// Banning `(a, b)` says nothing about `(b, a)`.
///
/// # Example
///
/// ```
/// use secret_santa::BannedPairs;
///
/// let banned: BannedPairs<&str> = [("ana", "bo")].into_iter().collect();
///
/// assert!(banned.contains(&"ana", &"bo"));
/// assert!(!banned.contains(&"bo", &"ana"));
/// ```
#[derive(Debug, Clone)]
pub struct BannedPairs<T> {
    by_gifter: HashMap<T, HashSet<T>>,
}

impl<T: Eq + Hash> BannedPairs<T> {
    /// Creates an empty ban list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_gifter: HashMap::new(),
        }
    }

    /// Bans `gifter` from giving to `giftee`.
    ///
    /// Returns `false` when the pair was already banned.
    pub fn insert(&mut self, gifter: T, giftee: T) -> bool {
        self.by_gifter.entry(gifter).or_default().insert(giftee)
    }

    /// Returns `true` when `gifter` may not give to `giftee`.
    #[must_use]
    pub fn contains(&self, gifter: &T, giftee: &T) -> bool {
        self.by_gifter
            .get(gifter)
            .is_some_and(|giftees| giftees.contains(giftee))
    }

    /// Number of distinct banned pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_gifter.values().map(HashSet::len).sum()
    }

    /// Returns `true` when nothing is banned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_gifter.values().all(HashSet::is_empty)
    }

    /// Iterates over the banned `(gifter, giftee)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.by_gifter
            .iter()
            .flat_map(|(gifter, giftees)| giftees.iter().map(move |giftee| (gifter, giftee)))
    }
}

impl<T: Eq + Hash> Default for BannedPairs<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<(T, T)> for BannedPairs<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut banned = Self::new();
        banned.extend(iter);
        banned
    }
}

impl<T: Eq + Hash> Extend<(T, T)> for BannedPairs<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (gifter, giftee) in iter {
            self.insert(gifter, giftee);
        }
    }
}

/// A complete gifter-to-giftee mapping.
///
/// Every participant appears exactly once as a gifter and exactly once as a
/// giftee. Pairs are kept in the order the participants were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<T> {
    pairs: Vec<(T, T)>,
}

impl<T> Assignment<T> {
    pub(crate) const fn from_pairs(pairs: Vec<(T, T)>) -> Self {
        Self { pairs }
    }

    /// Number of gifters in the assignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` for the assignment of an empty roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Looks up who `gifter` gives to.
    #[must_use]
    pub fn giftee_for(&self, gifter: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.pairs
            .iter()
            .find(|(from, _)| from == gifter)
            .map(|(_, to)| to)
    }

    /// Iterates over `(gifter, giftee)` in participant order.
    pub fn iter(&self) -> Pairs<'_, T> {
        Pairs {
            inner: self.pairs.iter(),
        }
    }

    /// Borrows the underlying pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(T, T)] {
        &self.pairs
    }

    /// Consumes the assignment, returning its pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(T, T)> {
        self.pairs
    }
}

impl<'a, T> IntoIterator for &'a Assignment<T> {
    type Item = (&'a T, &'a T);
    type IntoIter = Pairs<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`Assignment`].
#[derive(Debug, Clone)]
pub struct Pairs<'a, T> {
    inner: slice::Iter<'a, (T, T)>,
}

impl<'a, T> Iterator for Pairs<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(from, to)| (from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Pairs<'_, T> {}

/// Checks a positional pairing of `gifters` against `giftees`.
///
/// The pairing is valid when no one gives to themselves and no
/// `(gifter, giftee)` pair is banned.
///
/// # Example
///
/// ```
/// use secret_santa::{BannedPairs, is_valid_pairing};
///
/// let banned: BannedPairs<char> = [('a', 'b')].into_iter().collect();
///
/// assert!(is_valid_pairing(&['a', 'b'], &['b', 'a'], &BannedPairs::new()));
/// assert!(!is_valid_pairing(&['a', 'b'], &['b', 'a'], &banned));
/// assert!(!is_valid_pairing(&['a', 'b'], &['a', 'b'], &BannedPairs::new()));
/// ```
#[must_use]
pub fn is_valid_pairing<T: Eq + Hash>(
    gifters: &[T],
    giftees: &[T],
    banned: &BannedPairs<T>,
) -> bool {
    gifters
        .iter()
        .zip(giftees)
        .all(|(gifter, giftee)| gifter != giftee && !banned.contains(gifter, giftee))
}

/// Returns `true` when any item occurs more than once.
#[must_use]
pub fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item))
}
