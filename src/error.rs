// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::io;
use std::path::PathBuf;

use super::grid::RegionError;
use super::instruction::ParseError;

/// What went wrong with a single input line.
#[derive(PartialEq, Debug, Clone)]
pub enum InputError {
    Parse(ParseError),
    Region(RegionError),
}
impl From<ParseError> for InputError {
    fn from(other: ParseError) -> Self {
        InputError::Parse(other)
    }
}
impl From<RegionError> for InputError {
    fn from(other: RegionError) -> Self {
        InputError::Region(other)
    }
}
impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            InputError::Parse(x)  => x.to_string(),
            InputError::Region(x) => x.to_string(),
        })
    }
}

// ------------------------------------------------

#[derive(Debug)]
pub enum Error {
    Cli(clap::Error),
    Config(String),
    Io(PathBuf, io::Error),
    Read(io::Error),
    Input {
        line_num: usize,
        line: String,
        kind: InputError,
    },
    Logging(log::SetLoggerError),
}
impl Error {
    pub fn input<E: Into<InputError>>(line_num: usize, line: &str, kind: E) -> Self {
        Error::Input {
            line_num,
            line: line.to_string(),
            kind: kind.into(),
        }
    }
}
impl From<clap::Error> for Error {
    fn from(other: clap::Error) -> Self {
        Error::Cli(other)
    }
}
impl From<log::SetLoggerError> for Error {
    fn from(other: log::SetLoggerError) -> Self {
        Error::Logging(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Cli(e)          => write!(f, "{}", e),
            Error::Config(msg)     => write!(f, "{}", msg),
            Error::Io(path, e)     => write!(f, "cannot open {}: {}", path.display(), e),
            Error::Read(e)         => write!(f, "cannot read input: {}", e),
            Error::Input { line_num, line, kind }
                                   => write!(f, "line {}: {}: {}", line_num, kind, line),
            Error::Logging(e)      => write!(f, "cannot set up logging: {}", e),
        }
    }
}
impl std::error::Error for Error {}
