//! Reading participants and banned pairs from line-oriented text.
//!
//! Participants are one name per line. Banned pairs are one `gifter,giftee`
//! per line. Surrounding whitespace is trimmed and blank lines are ignored
//! in both formats.

use camino::Utf8Path;
use cap_std::fs::Dir;

use crate::error::RosterError;
use crate::pairing::BannedPairs;

/// Parses participant names, one per line.
///
/// # Example
///
/// ```
/// use secret_santa::parse_participants;
///
/// let names = parse_participants("  Ana \n\nBo\r\n");
/// assert_eq!(names, vec!["Ana".to_owned(), "Bo".to_owned()]);
/// ```
#[must_use]
pub fn parse_participants(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses directional bans, one `gifter,giftee` pair per line.
///
/// # Errors
///
/// Returns [`RosterError::MalformedBannedPair`] for a line that does not hold
/// exactly two non-empty comma-separated names.
///
/// # Example
///
/// ```
/// use secret_santa::parse_banned_pairs;
///
/// let banned = parse_banned_pairs("Ana, Bo\nBo ,Cy\n").expect("valid pairs");
///
/// assert!(banned.contains(&"Ana".to_owned(), &"Bo".to_owned()));
/// assert!(!banned.contains(&"Bo".to_owned(), &"Ana".to_owned()));
/// ```
pub fn parse_banned_pairs(text: &str) -> Result<BannedPairs<String>, RosterError> {
    let mut banned = BannedPairs::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (gifter, giftee) = split_pair(line).ok_or_else(|| RosterError::MalformedBannedPair {
            line: index + 1,
            content: line.to_owned(),
        })?;
        banned.insert(gifter.to_owned(), giftee.to_owned());
    }
    Ok(banned)
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split(',').map(str::trim);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(gifter), Some(giftee), None) if !gifter.is_empty() && !giftee.is_empty() => {
            Some((gifter, giftee))
        }
        _ => None,
    }
}

/// Reads the participants file at `path` relative to `dir`.
///
/// # Errors
///
/// Returns [`RosterError::Read`] if the file cannot be read as UTF-8 text.
pub fn read_participants(dir: &Dir, path: &Utf8Path) -> Result<Vec<String>, RosterError> {
    read_text(dir, path).map(|text| parse_participants(&text))
}

/// Reads the banned-pairs file at `path` relative to `dir`.
///
/// # Errors
///
/// Returns [`RosterError::Read`] if the file cannot be read, or
/// [`RosterError::MalformedBannedPair`] if a line cannot be parsed.
pub fn read_banned_pairs(
    dir: &Dir,
    path: &Utf8Path,
) -> Result<BannedPairs<String>, RosterError> {
    read_text(dir, path).and_then(|text| parse_banned_pairs(&text))
}

fn read_text(dir: &Dir, path: &Utf8Path) -> Result<String, RosterError> {
    dir.read_to_string(path).map_err(|err| RosterError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn participants_are_trimmed_and_blank_lines_skipped() {
        let names = parse_participants("Ana\n  Bo  \n\n   \n\tCy\n");

        assert_eq!(names, ["Ana", "Bo", "Cy"]);
    }

    #[test]
    fn participant_order_is_preserved() {
        let names = parse_participants("Zed\nAmy\nMo");

        assert_eq!(names, ["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn banned_pairs_trim_each_field() {
        let banned = parse_banned_pairs("  Ana ,  Bo \n").expect("valid pairs");

        assert_eq!(banned.len(), 1);
        assert!(banned.contains(&"Ana".to_owned(), &"Bo".to_owned()));
    }

    #[test]
    fn empty_banned_source_bans_nothing() {
        let banned = parse_banned_pairs("\n\n").expect("valid pairs");

        assert!(banned.is_empty());
    }

    #[rstest]
    #[case("Ana\nBo", 1, "Ana")]
    #[case("Ana,Bo\nBo,Cy,Di", 2, "Bo,Cy,Di")]
    #[case("Ana,Bo\n\n , Cy", 3, ", Cy")]
    #[case("Ana,", 1, "Ana,")]
    fn malformed_lines_are_reported(
        #[case] text: &str,
        #[case] line: usize,
        #[case] content: &str,
    ) {
        let err = parse_banned_pairs(text).expect_err("line should be rejected");

        assert_eq!(
            err,
            RosterError::MalformedBannedPair {
                line,
                content: content.to_owned(),
            }
        );
    }
}
