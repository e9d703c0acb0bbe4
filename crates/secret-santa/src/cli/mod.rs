//! Command-line support for generating Secret Santa lists.
//!
//! The binary delegates to these functions so the whole run can be
//! exercised in tests without spawning a subprocess.

mod error;

use std::ffi::OsString;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use clap::error::ErrorKind;
use ortho_config::OrthoConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

pub use error::CliError;

use crate::config::SantaSettings;
use crate::error::{GenerationError, OutputError, RosterError};
use crate::generator::{generate, generate_all};
use crate::output::{render_assignment, render_assignments, write_output};
use crate::pairing::BannedPairs;
use crate::roster::{read_banned_pairs, read_participants};

const PROGRAM_NAME: &str = "secret-santa";

/// Parsed `secret-santa` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "secret-santa",
    about = "Assign each participant a Secret Santa giftee",
    version
)]
pub struct Args {
    /// File with one participant name per line.
    #[arg(value_name = "PARTICIPANTS")]
    participants: Utf8PathBuf,
    /// File the assignment is written to.
    #[arg(value_name = "OUTPUT")]
    output: Utf8PathBuf,
    /// Optional file of `gifter,giftee` pairs that must not be assigned.
    #[arg(value_name = "BANNED")]
    banned: Option<Utf8PathBuf>,
    /// Seed for a reproducible assignment.
    #[arg(long, value_name = "u64")]
    seed: Option<u64>,
    /// Write every valid assignment instead of one.
    #[arg(long)]
    all: bool,
}

impl Args {
    /// Returns the output path supplied on the command line.
    #[must_use]
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }
}

/// Outcome of parsing command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Print the rendered help or version text and exit successfully.
    Help(String),
    /// Continue with the parsed arguments.
    Run(Args),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Path the assignment was written to.
    pub output: Utf8PathBuf,
    /// Seed that drove the shuffle.
    pub seed: u64,
    /// Number of assignments written.
    pub assignments: usize,
    /// Number of pairs in each assignment.
    pub pairs: usize,
}

/// Parses command-line arguments, including the program name.
///
/// # Errors
///
/// Returns [`CliError::InvalidArguments`] when required arguments are
/// missing or values cannot be parsed.
///
/// # Example
///
/// ```
/// use secret_santa::cli::{ParseOutcome, parse_args};
///
/// let outcome = parse_args(["secret-santa", "people.txt", "pairs.txt"]).expect("parse");
/// let ParseOutcome::Run(args) = outcome else {
///     panic!("expected run arguments");
/// };
///
/// assert_eq!(args.output(), "pairs.txt");
/// ```
pub fn parse_args<I, S>(args: I) -> Result<ParseOutcome, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(parsed) => Ok(ParseOutcome::Run(parsed)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParseOutcome::Help(err.to_string()))
        }
        Err(err) => Err(CliError::InvalidArguments {
            message: err.to_string(),
        }),
    }
}

/// Loads run settings from the environment and any configuration file.
///
/// # Errors
///
/// Returns [`CliError::Settings`] if the settings cannot be parsed.
pub fn load_settings() -> Result<SantaSettings, CliError> {
    SantaSettings::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
        CliError::Settings {
            message: err.to_string(),
        }
    })
}

/// Reads the roster, generates assignments and writes the output file.
///
/// The output file is only written when generation succeeds. A seed from
/// `args` wins over one from `settings`; without either a random seed is
/// drawn and logged. Either `--all` or the `all` setting enumerates every
/// valid assignment, rendering each as it is produced.
///
/// # Errors
///
/// Returns [`CliError`] when a roster file cannot be read, no valid
/// assignment exists, or the output cannot be written.
pub fn run(args: &Args, settings: &SantaSettings) -> Result<Report, CliError> {
    let participants = read_roster_file(&args.participants, read_participants)?;
    let banned = match &args.banned {
        Some(path) => read_roster_file(path, read_banned_pairs)?,
        None => BannedPairs::new(),
    };

    let seed = args.seed.or(settings.seed).unwrap_or_else(random_seed);
    debug!(seed, participants = participants.len(), banned = banned.len(), "starting run");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let separator = settings.separator();

    let (contents, assignments) = if args.all || settings.all {
        let mut all = generate_all(&participants, &banned, &mut rng)?.peekable();
        if all.peek().is_none() {
            return Err(GenerationError::NoValidAssignment.into());
        }
        let mut count = 0;
        let rendered = render_assignments(all.inspect(|_| count += 1), separator);
        (rendered, count)
    } else {
        let assignment = generate(&participants, &banned, &mut rng)?;
        (render_assignment(&assignment, separator), 1)
    };

    write_output_file(&args.output, &contents)?;
    info!(output = %args.output, assignments, "wrote assignment");

    Ok(Report {
        output: args.output.clone(),
        seed,
        assignments,
        pairs: participants.len(),
    })
}

/// Formats the success message printed by the binary.
///
/// # Example
///
/// ```
/// use secret_santa::cli::{Report, success_message};
///
/// let report = Report {
///     output: "pairs.txt".into(),
///     seed: 7,
///     assignments: 1,
///     pairs: 4,
/// };
///
/// assert_eq!(success_message(&report), "Wrote 4 pairs to pairs.txt");
/// ```
#[must_use]
pub fn success_message(report: &Report) -> String {
    if report.assignments == 1 {
        format!("Wrote {} pairs to {}", report.pairs, report.output)
    } else {
        format!(
            "Wrote {} assignments of {} pairs to {}",
            report.assignments, report.pairs, report.output
        )
    }
}

fn read_roster_file<T>(
    path: &Utf8Path,
    read: impl FnOnce(&Dir, &Utf8Path) -> Result<T, RosterError>,
) -> Result<T, RosterError> {
    let (dir, file_name) = open_parent(path).map_err(|err| RosterError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    read(&dir, file_name).map_err(|err| match err {
        RosterError::Read { message, .. } => RosterError::Read {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

fn write_output_file(path: &Utf8Path, contents: &str) -> Result<(), OutputError> {
    let (dir, file_name) = open_parent(path).map_err(|err| OutputError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    write_output(&dir, file_name, contents).map_err(|err| match err {
        OutputError::InvalidPath { .. } => OutputError::InvalidPath {
            path: path.to_path_buf(),
        },
        OutputError::Write { message, .. } => OutputError::Write {
            path: path.to_path_buf(),
            message,
        },
    })
}

/// Opens the directory containing `path` and returns it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(Dir, &Utf8Path)> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, Utf8Path::new(file_name)))
}

fn random_seed() -> u64 {
    rand::rng().random()
}
