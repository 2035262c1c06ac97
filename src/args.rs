// vim: set ai et ts=4 sts=4 sw=4:
use std::ffi::OsString;
use std::path::PathBuf;
use clap::{App, Arg, crate_version};

use super::error::Error;
use super::policy::Policy;

pub const DEFAULT_GRID_SIZE: usize = 1000;
pub const MAX_GRID_SIZE: usize = 10_000;

/// Everything a run needs from the command line.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Args {
    pub input_path: PathBuf,
    pub grid_size: usize,
    pub policy: Policy,
    pub verbosity: u64,
}

impl Args {
    pub fn new<P: Into<PathBuf>>(input_path: P) -> Self {
        Args {
            input_path: input_path.into(),
            grid_size: DEFAULT_GRID_SIZE,
            policy: Policy::default(),
            verbosity: 0,
        }
    }

    fn app() -> App<'static, 'static> {
        App::new("lightgrid")
            .version(crate_version!())
            .about("Follows turn on / turn off / toggle instructions over a square grid of lights")
            .arg(Arg::with_name("digital")
                 .long("digital")
                 .multiple(true)
                 .help("Lights have a brightness; report the total brightness"))
            .arg(Arg::with_name("analog")
                 .long("analog")
                 .multiple(true)
                 .help("Lights are either on or off; report how many are on (default)"))
            .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Log more to stderr (-v info, -vv debug, -vvv trace)"))
            .arg(Arg::with_name("input")
                 .required(true)
                 .index(1)
                 .help("File with one instruction per line"))
            .arg(Arg::with_name("grid-size")
                 .index(2)
                 .validator(|s| parse_grid_size(&s).map(|_| ()))
                 .help("Width and height of the grid [default: 1000]"))
    }

    pub fn from_iter_safe<I, T>(iter: I) -> Result<Self, Error>
        where I: IntoIterator<Item = T>,
              T: Into<OsString> + Clone
    {
        let matches = Self::app().get_matches_from_safe(iter)?;

        let input_path = matches.value_of_os("input")
                                .map(PathBuf::from)
                                .ok_or_else(|| Error::Config("no input file given".to_string()))?;
        let grid_size = match matches.value_of("grid-size") {
            Some(s) => parse_grid_size(s).map_err(Error::Config)?,
            None    => DEFAULT_GRID_SIZE,
        };
        // flags may repeat and mix; the one given last decides
        let last_digital = matches.indices_of("digital").and_then(|i| i.max());
        let last_analog  = matches.indices_of("analog").and_then(|i| i.max());
        let policy = match (last_digital, last_analog) {
            (Some(d), Some(a)) if d > a => Policy::Integer,
            (Some(_), None)             => Policy::Integer,
            _                           => Policy::Boolean,
        };

        Ok(Args {
            input_path,
            grid_size,
            policy,
            verbosity: matches.occurrences_of("verbose"),
        })
    }
}

fn parse_grid_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 && n <= MAX_GRID_SIZE => Ok(n),
        _ => Err(format!("grid size must be a whole number from 1 to {}, got {:?}", MAX_GRID_SIZE, s)),
    }
}
