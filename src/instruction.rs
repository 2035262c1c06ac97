// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use std::convert::TryFrom;
use regex::{Captures, Regex};

use super::grid::Region;

// anchored at the start only: anything after the last coordinate is ignored
const INSTRUCTION_PATTERN: &str = r"^(.*?) ([0-9]+),([0-9]+) through ([0-9]+),([0-9]+)";

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}
impl Action {
    /// Column of this action in the transform tables.
    pub fn index(&self) -> usize {
        match *self {
            Action::TurnOn  => 0,
            Action::TurnOff => 1,
            Action::Toggle  => 2,
        }
    }
}
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Action::TurnOn  => "turn on",
            Action::TurnOff => "turn off",
            Action::Toggle  => "toggle",
        })
    }
}
impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "turn on"  => Ok(Action::TurnOn),
            "turn off" => Ok(Action::TurnOff),
            "toggle"   => Ok(Action::Toggle),
            _          => Err("Not a valid Action value")
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub enum ParseError {
    Malformed,              // line doesn't look like "<action> x,y through x,y"
    UnknownAction(String),  // well-formed line, but the action isn't one we know
    BadCoordinate(String),  // digits only, but too large to be a coordinate
    NotUtf8,                // raw line isn't text at all
}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Malformed              => write!(f, "bad line"),
            ParseError::UnknownAction(action)  => write!(f, "bad line action {:?}", action),
            ParseError::BadCoordinate(digits)  => write!(f, "coordinate {} is out of range", digits),
            ParseError::NotUtf8                => write!(f, "line is not valid UTF-8"),
        }
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Instruction {
    pub action: Action,
    pub region: Region,
}
impl Instruction {
    pub fn new(action: Action, region: Region) -> Self {
        Self { action, region }
    }
}
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.action, self.region)
    }
}

/// Turns instruction lines into `Instruction`s. Compiles its pattern once,
/// so build one per run and reuse it for every line.
pub struct Parser {
    pattern: Regex,
}
impl Parser {
    pub fn new() -> Self {
        Parser {
            pattern: Regex::new(INSTRUCTION_PATTERN).expect("instruction pattern compiles"),
        }
    }

    pub fn parse(&self, line: &str) -> Result<Instruction, ParseError> {
        let caps = self.pattern.captures(line).ok_or(ParseError::Malformed)?;
        let action = Action::try_from(&caps[1])
            .map_err(|_| ParseError::UnknownAction(caps[1].to_string()))?;

        let from = (Self::_coordinate(&caps, 2)?, Self::_coordinate(&caps, 3)?);
        let to   = (Self::_coordinate(&caps, 4)?, Self::_coordinate(&caps, 5)?);
        Ok(Instruction::new(action, Region::new(from, to)))
    }

    fn _coordinate(caps: &Captures, group: usize) -> Result<usize, ParseError> {
        let digits = &caps[group];
        digits.parse().map_err(|_| ParseError::BadCoordinate(digits.to_string()))
    }
}
impl Default for Parser {
    fn default() -> Self { Self::new() }
}
