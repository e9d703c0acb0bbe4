//! Randomised Secret Santa assignments.
//!
//! Given an ordered list of participants and a set of directional banned
//! pairs, this crate produces an assignment in which everyone gives to
//! exactly one other participant, nobody gives to themselves, and no banned
//! pair occurs. When the bans make that impossible the generator says so
//! with a typed error instead of panicking.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - One random valid assignment ([`generate`])
//! - Lazy enumeration of every valid assignment ([`generate_all`])
//! - Reading rosters and ban lists from line-oriented files
//! - Writing `"<gifter> -> <giftee>"` lines atomically
//! - A `secret-santa` command-line entry point ([`cli`])
//!
//! Randomness is always supplied by the caller, so a seeded RNG gives
//! reproducible results.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use secret_santa::{BannedPairs, GenerationError, generate};
//!
//! let participants = ["A", "B", "C", "D"];
//! let mut rng = ChaCha8Rng::seed_from_u64(2026);
//!
//! let banned: BannedPairs<&str> = [("A", "C"), ("B", "D")].into_iter().collect();
//! let assignment = generate(&participants, &banned, &mut rng).expect("valid assignment");
//! assert_eq!(assignment.len(), 4);
//!
//! let hopeless: BannedPairs<&str> = [("A", "B"), ("A", "C"), ("A", "D")].into_iter().collect();
//! assert_eq!(
//!     generate(&participants, &hopeless, &mut rng),
//!     Err(GenerationError::NoValidAssignment)
//! );
//! ```

mod atomic_io;
pub mod cli;
mod config;
mod error;
mod generator;
mod output;
mod pairing;
mod permutations;
mod roster;

pub use config::SantaSettings;
pub use error::{GenerationError, OutputError, RosterError};
pub use generator::{AllAssignments, generate, generate_all};
pub use output::{
    DEFAULT_SEPARATOR, render_assignment, render_assignments, write_assignment, write_output,
};
pub use pairing::{Assignment, BannedPairs, Pairs, has_duplicates, is_valid_pairing};
pub use permutations::Permutations;
pub use roster::{parse_banned_pairs, parse_participants, read_banned_pairs, read_participants};
