use crate::programs::{self, PROGRAMS};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use uwu_diagnostic::{Diagnostic, Location, Message, Position, Source};
use uwu_eval::sort;
use uwu_match::NonExhaustiveMatch;
use uwu_value::json::{self, DecodeError};

pub struct Config {
    pub program: Option<String>,
    pub list: bool,
    pub sort: Option<PathBuf>,
}

#[derive(Debug)]
pub enum RunError {
    UnknownProgram(String),
    FileDoesNotExist(PathBuf),
    DecodeError { path: PathBuf, error: DecodeError },
    MatchError(NonExhaustiveMatch),
    IoError(io::Error),
}

impl From<NonExhaustiveMatch> for RunError {
    fn from(err: NonExhaustiveMatch) -> Self {
        RunError::MatchError(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::IoError(err)
    }
}

impl RunError {
    pub fn report(&self, diagnostic: &mut Diagnostic) {
        match self {
            RunError::UnknownProgram(name) => diagnostic.item(
                None,
                Message {
                    content: format!("unknown program {:?}", name),
                    addendum: Some(format!(
                        "available programs: {}",
                        PROGRAMS
                            .iter()
                            .map(|program| program.name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    )),
                },
            ),
            RunError::FileDoesNotExist(path) => diagnostic.item(
                None,
                Message {
                    content: format!("file {} does not exist", path.display()),
                    addendum: None,
                },
            ),
            RunError::DecodeError { path, error } => diagnostic.item(
                Some(Location {
                    source: Source::File { path: path.clone() },
                    position: error
                        .position()
                        .map(|(line, column)| Position { line, column }),
                }),
                Message {
                    content: error.to_string(),
                    addendum: None,
                },
            ),
            RunError::MatchError(err) => err.report(diagnostic),
            RunError::IoError(err) => diagnostic.item(
                None,
                Message {
                    content: format!("io error: {}", err),
                    addendum: None,
                },
            ),
        }
    }
}

fn sort_file(path: &Path, out: &mut dyn Write) -> Result<(), RunError> {
    let input = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => RunError::FileDoesNotExist(path.to_path_buf()),
        _ => RunError::IoError(err),
    })?;
    let value = json::parse(&input).map_err(|error| RunError::DecodeError {
        path: path.to_path_buf(),
        error,
    })?;
    tracing::info!(path = %path.display(), "sorting");

    writeln!(out, "bubble_sort: {}", sort::bubble_sort(sort::natural_cmp, &value)?)?;
    writeln!(out, "merge_sort: {}", sort::merge_sort(&value)?)?;
    Ok(())
}

pub fn run(config: Config, out: &mut dyn Write) -> Result<(), RunError> {
    if config.list {
        for program in PROGRAMS {
            writeln!(out, "{:<10}{}", program.name, program.description)?;
        }
        return Ok(());
    }

    if let Some(path) = config.sort {
        return sort_file(&path, out);
    }

    match config.program {
        Some(name) => match programs::find(&name) {
            Some(program) => program.run(out),
            None => Err(RunError::UnknownProgram(name)),
        },
        None => {
            for program in PROGRAMS {
                writeln!(out, "-- {} --", program.name)?;
                program.run(out)?;
            }
            Ok(())
        }
    }
}
