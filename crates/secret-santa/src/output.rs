//! Rendering and writing assignments.

use std::fmt::{self, Display};

use camino::Utf8Path;
use cap_std::fs::Dir;

use crate::atomic_io::write_atomic;
use crate::error::OutputError;
use crate::pairing::Assignment;

/// Separator placed between gifter and giftee when none is configured.
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Renders one `<gifter><separator><giftee>` line per pair.
///
/// Lines follow the assignment's participant order and each ends with a
/// newline.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use secret_santa::{BannedPairs, DEFAULT_SEPARATOR, generate, render_assignment};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let assignment = generate(&["Ana", "Bo"], &BannedPairs::new(), &mut rng).expect("pairs");
///
/// assert_eq!(
///     render_assignment(&assignment, DEFAULT_SEPARATOR),
///     "Ana -> Bo\nBo -> Ana\n"
/// );
/// ```
#[must_use]
pub fn render_assignment<T: Display>(assignment: &Assignment<T>, separator: &str) -> String {
    AssignmentLines {
        assignment,
        separator,
    }
    .to_string()
}

/// Renders assignments as they are produced, separated by a blank line.
///
/// `assignments` is consumed lazily, so a [`crate::AllAssignments`]
/// iterator never has to be collected first.
#[must_use]
pub fn render_assignments<T, I>(assignments: I, separator: &str) -> String
where
    T: Display,
    I: IntoIterator<Item = Assignment<T>>,
{
    let mut rendered = String::new();
    for (index, assignment) in assignments.into_iter().enumerate() {
        if index > 0 {
            rendered.push('\n');
        }
        rendered.push_str(&render_assignment(&assignment, separator));
    }
    rendered
}

struct AssignmentLines<'a, T> {
    assignment: &'a Assignment<T>,
    separator: &'a str,
}

impl<T: Display> Display for AssignmentLines<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (gifter, giftee) in self.assignment {
            writeln!(f, "{gifter}{}{giftee}", self.separator)?;
        }
        Ok(())
    }
}

/// Atomically writes already-rendered output to `path` inside `dir`.
///
/// # Errors
///
/// Returns [`OutputError::InvalidPath`] when `path` is not a bare file name,
/// or [`OutputError::Write`] when the file cannot be written.
pub fn write_output(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), OutputError> {
    write_atomic(dir, path, contents)
}

/// Renders `assignment` and writes it atomically to `path` inside `dir`.
///
/// # Errors
///
/// See [`write_output`].
pub fn write_assignment<T: Display>(
    dir: &Dir,
    path: &Utf8Path,
    assignment: &Assignment<T>,
    separator: &str,
) -> Result<(), OutputError> {
    write_output(dir, path, &render_assignment(assignment, separator))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::generator::generate_all;
    use crate::pairing::BannedPairs;

    fn sample() -> Assignment<&'static str> {
        Assignment::from_pairs(vec![("A", "B"), ("B", "C"), ("C", "A")])
    }

    #[test]
    fn renders_one_line_per_pair_in_order() {
        assert_eq!(
            render_assignment(&sample(), DEFAULT_SEPARATOR),
            "A -> B\nB -> C\nC -> A\n"
        );
    }

    #[test]
    fn honours_custom_separator() {
        assert_eq!(render_assignment(&sample(), "\t"), "A\tB\nB\tC\nC\tA\n");
    }

    #[test]
    fn empty_assignment_renders_nothing() {
        let empty: Assignment<&str> = Assignment::from_pairs(Vec::new());

        assert!(render_assignment(&empty, DEFAULT_SEPARATOR).is_empty());
    }

    #[test]
    fn multiple_assignments_are_blank_line_separated() {
        let other = Assignment::from_pairs(vec![("A", "C"), ("B", "A"), ("C", "B")]);

        assert_eq!(
            render_assignments([sample(), other], ":"),
            "A:B\nB:C\nC:A\n\nA:C\nB:A\nC:B\n"
        );
    }

    #[test]
    fn renders_straight_from_lazy_enumeration() {
        let participants = ["A", "B", "C", "D"];
        let banned = BannedPairs::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let all = generate_all(&participants, &banned, &mut rng).expect("no duplicates");

        let rendered = render_assignments(all, DEFAULT_SEPARATOR);

        assert_eq!(rendered.split("\n\n").count(), 9);
        assert_eq!(rendered.lines().filter(|line| line.is_empty()).count(), 8);
        assert_eq!(rendered.lines().filter(|line| !line.is_empty()).count(), 36);
    }

    #[test]
    fn empty_enumeration_renders_nothing() {
        let none: Vec<Assignment<&str>> = Vec::new();

        assert!(render_assignments(none, DEFAULT_SEPARATOR).is_empty());
    }
}
