// vim: set ai et ts=4 sts=4 sw=4:
use std::fs::File;
use std::io::{BufRead, BufReader};
use log::{debug, info, trace};

use super::args::Args;
use super::error::Error;
use super::grid::{Grid, Summary};
use super::instruction::{Parser, ParseError};
use super::policy::{Light, Policy};

/// Runs the instructions in `args.input_path` against a fresh grid and returns
/// its summary.
pub fn run(args: &Args) -> Result<Summary, Error> {
    let file = File::open(&args.input_path)
        .map_err(|e| Error::Io(args.input_path.clone(), e))?;
    info!("reading instructions from {}", args.input_path.display());
    run_reader(BufReader::new(file), args.grid_size, args.policy)
}

pub fn run_reader<R: BufRead>(reader: R, grid_size: usize, policy: Policy)
    -> Result<Summary, Error>
{
    match policy {
        Policy::Boolean => execute::<bool, R>(reader, grid_size),
        Policy::Integer => execute::<u32, R>(reader, grid_size),
    }
}

fn execute<L: Light, R: BufRead>(reader: R, grid_size: usize)
    -> Result<Summary, Error>
{
    let mut grid = Grid::<L>::new(grid_size);
    let parser = Parser::new();
    info!("running on {:?}", grid);

    let mut applied = 0;
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line_num = index + 1;
        let bytes = bytes.map_err(Error::Read)?;
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e)   => {
                let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
                return Err(Error::input(line_num, lossy.trim_end_matches('\r'), ParseError::NotUtf8));
            }
        };
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            trace!("line {}: blank, skipped", line_num);
            continue;
        }

        let instruction = parser.parse(line)
            .map_err(|e| Error::input(line_num, line, e))?;
        grid.apply(&instruction.region, L::transform(instruction.action))
            .map_err(|e| Error::input(line_num, line, e))?;
        debug!("line {}: {} ({} cells)", line_num, instruction, instruction.region.area().unwrap_or(0));
        applied += 1;
    }

    let summary = grid.summarize();
    info!("applied {} instructions, {}", applied, summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::grid::RegionError;

    #[test]
    fn blank_and_crlf_lines() {
        let input = "\r\nturn on 0,0 through 1,1\r\n   \n\ntoggle 0,0 through 0,0\r\n";
        assert_eq!(run_reader(input.as_bytes(), 4, Policy::Boolean).unwrap(),
                   Summary::LightsOn(3));
    }

    #[test]
    fn error_reports_line_number_of_first_bad_line() {
        let input = "turn on 0,0 through 1,1\n\nturn sideways 0,0 through 1,1\nbogus\n";
        match run_reader(input.as_bytes(), 4, Policy::Integer) {
            Err(Error::Input { line_num, line, kind }) => {
                assert_eq!(line_num, 3);
                assert_eq!(line, "turn sideways 0,0 through 1,1");
                assert_eq!(kind, InputError::Parse(ParseError::UnknownAction("turn sideways".to_string())));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_reported_with_its_line() {
        let input: &[u8] = b"turn on 0,0 through 1,1\n\xff\xfe 0,0 through 1,1\r\ntoggle 0,0 through 1,1\n";
        match run_reader(input, 4, Policy::Boolean) {
            Err(e @ Error::Input { line_num: 2, kind: InputError::Parse(ParseError::NotUtf8), .. }) => {
                let message = e.to_string();
                assert!(message.starts_with("line 2:"), "{}", message);
                assert!(message.ends_with("\u{FFFD}\u{FFFD} 0,0 through 1,1"), "{}", message);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn last_line_without_newline() {
        let input = "turn on 0,0 through 1,1\ntoggle 0,0 through 0,0";
        assert_eq!(run_reader(input.as_bytes(), 4, Policy::Integer).unwrap(),
                   Summary::TotalBrightness(4 + 2));
    }

    #[test]
    fn region_errors_are_attributed_to_their_line() {
        let input = "toggle 2,2 through 1,1\n";
        match run_reader(input.as_bytes(), 4, Policy::Boolean) {
            Err(Error::Input { line_num: 1, kind: InputError::Region(RegionError::Reversed(_)), .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
