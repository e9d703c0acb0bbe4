//! Randomised Secret Santa assignment generation.
//!
//! Both operations shuffle the giftee side once with the caller's RNG and
//! then walk every permutation of that shuffled order, pairing the
//! participants (in their given order) positionally against each one.
//! The shuffle gives an unbiased starting point; the walk guarantees that a
//! valid assignment is found whenever one exists.

use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::GenerationError;
use crate::pairing::{Assignment, BannedPairs, has_duplicates, is_valid_pairing};
use crate::permutations::Permutations;

/// Generates one random assignment that avoids self-pairing and every ban.
///
/// # Errors
///
/// Returns [`GenerationError::DuplicateParticipants`] if a participant is
/// listed twice, and [`GenerationError::NoValidAssignment`] if the bans leave
/// no possible assignment.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use secret_santa::{BannedPairs, generate};
///
/// let participants = ["Ana", "Bo", "Cy", "Di"];
/// let banned: BannedPairs<&str> = [("Ana", "Cy")].into_iter().collect();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let assignment = generate(&participants, &banned, &mut rng).expect("assignment exists");
///
/// assert_eq!(assignment.len(), 4);
/// assert_ne!(assignment.giftee_for(&"Ana"), Some(&"Cy"));
/// assert!(assignment.iter().all(|(gifter, giftee)| gifter != giftee));
/// ```
pub fn generate<T, R>(
    participants: &[T],
    banned: &BannedPairs<T>,
    rng: &mut R,
) -> Result<Assignment<T>, GenerationError>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    let mut permutations = shuffled_permutations(participants, rng)?;
    let mut attempts: usize = 0;

    while let Some(giftees) = permutations.advance() {
        attempts += 1;
        if is_valid_pairing(participants, giftees, banned) {
            debug!(
                participants = participants.len(),
                banned = banned.len(),
                attempts,
                "found valid assignment"
            );
            return Ok(zip_assignment(participants, giftees));
        }
    }

    debug!(
        participants = participants.len(),
        banned = banned.len(),
        attempts,
        "no permutation satisfies the pairing rules"
    );
    Err(GenerationError::NoValidAssignment)
}

/// Lazily enumerates every valid assignment from a random starting order.
///
/// The returned iterator is finite (at most `n!` candidates are examined)
/// and may be empty. Its order is not meaningful. Large rosters make full
/// consumption impractical, so pull only as many results as needed.
///
/// # Errors
///
/// Returns [`GenerationError::DuplicateParticipants`] if a participant is
/// listed twice.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use secret_santa::{BannedPairs, generate_all};
///
/// let participants = ["a", "b", "c", "d"];
/// let banned = BannedPairs::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let all = generate_all(&participants, &banned, &mut rng).expect("no duplicates");
///
/// assert_eq!(all.count(), 9);
/// ```
pub fn generate_all<'a, T, R>(
    participants: &'a [T],
    banned: &'a BannedPairs<T>,
    rng: &mut R,
) -> Result<AllAssignments<'a, T>, GenerationError>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    let permutations = shuffled_permutations(participants, rng)?;
    debug!(
        participants = participants.len(),
        banned = banned.len(),
        "enumerating all assignments"
    );
    Ok(AllAssignments {
        participants,
        banned,
        permutations,
    })
}

/// Iterator returned by [`generate_all`].
#[derive(Debug, Clone)]
pub struct AllAssignments<'a, T> {
    participants: &'a [T],
    banned: &'a BannedPairs<T>,
    permutations: Permutations<T>,
}

impl<T> Iterator for AllAssignments<'_, T>
where
    T: Eq + Hash + Clone,
{
    type Item = Assignment<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(giftees) = self.permutations.advance() {
            if is_valid_pairing(self.participants, giftees, self.banned) {
                return Some(zip_assignment(self.participants, giftees));
            }
        }
        None
    }
}

fn shuffled_permutations<T, R>(
    participants: &[T],
    rng: &mut R,
) -> Result<Permutations<T>, GenerationError>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    if has_duplicates(participants) {
        return Err(GenerationError::DuplicateParticipants);
    }

    let mut giftees = participants.to_vec();
    giftees.shuffle(rng);
    Ok(Permutations::new(giftees))
}

fn zip_assignment<T: Clone>(gifters: &[T], giftees: &[T]) -> Assignment<T> {
    let pairs = gifters
        .iter()
        .cloned()
        .zip(giftees.iter().cloned())
        .collect();
    Assignment::from_pairs(pairs)
}
