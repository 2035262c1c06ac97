// vim: set ai et ts=4 sts=4 sw=4:
use std::path::PathBuf;

use lightgrid::{
    error::{Error, InputError},
    grid::RegionError,
    instruction::ParseError,
    run, run_reader, Args, Policy, Region, Summary,
};

fn lights(input: &str, size: usize) -> Result<Summary, Error> {
    run_reader(input.as_bytes(), size, Policy::Boolean)
}

fn brightness(input: &str, size: usize) -> Result<Summary, Error> {
    run_reader(input.as_bytes(), size, Policy::Integer)
}

#[test]
fn empty_input() {
    assert_eq!(lights("", 1000).unwrap().to_string(), "Lights on: 0");
    assert_eq!(brightness("\n\n", 1000).unwrap().to_string(), "Total brightness: 0");
}

#[test]
fn whole_small_grid() {
    let summary = lights("turn on 0,0 through 2,2\n", 3).unwrap();
    assert_eq!(summary.to_string(), "Lights on: 9");
}

#[test]
fn full_size_mixed_instructions() {
    let input = "\
turn on 0,0 through 999,999
toggle 0,0 through 999,0
turn off 499,499 through 500,500
";
    let summary = lights(input, 1000).unwrap();
    assert_eq!(summary.to_string(), "Lights on: 998996");
}

#[test]
fn brightness_accumulates() {
    let input = "turn on 0,0 through 0,0\nturn on 0,0 through 0,0\n";
    assert_eq!(brightness(input, 1000).unwrap().to_string(), "Total brightness: 2");
}

#[test]
fn brightness_mixed_instructions() {
    let input = "\
toggle 0,0 through 999,999
turn off 0,0 through 999,999
turn off 0,0 through 999,999
turn off 0,0 through 999,999
turn on 0,0 through 0,0
";
    // 2_000_000 after the toggle, floored back to zero, then one light at 1
    assert_eq!(brightness(input, 1000).unwrap(), Summary::TotalBrightness(1));
}

#[test]
fn same_input_under_both_policies() {
    let input = "toggle 0,0 through 9,9\ntoggle 0,0 through 4,9\nturn on 0,0 through 0,9\n";
    assert_eq!(lights(input, 10).unwrap(), Summary::LightsOn(50 + 10));
    assert_eq!(brightness(input, 10).unwrap(), Summary::TotalBrightness(200 + 100 + 10));
}

#[test]
fn bogus_action_aborts_the_run() {
    let err = lights("turn on 0,0 through 1,1\nbogus 0,0 through 1,1\n", 10).unwrap_err();
    assert!(matches!(err,
        Error::Input { line_num: 2, kind: InputError::Parse(ParseError::UnknownAction(_)), .. }));
    let message = err.to_string();
    assert!(message.contains("bogus 0,0 through 1,1"), "{}", message);
    assert!(message.starts_with("line 2:"), "{}", message);
}

#[test]
fn malformed_line_aborts_the_run() {
    let err = brightness("turn on 0,0 thru 1,1\n", 10).unwrap_err();
    assert!(matches!(err, Error::Input { line_num: 1, kind: InputError::Parse(ParseError::Malformed), .. }));
}

#[test]
fn out_of_range_coordinates_are_fatal() {
    let err = lights("turn on 0,0 through 2,3\n", 3).unwrap_err();
    match err {
        Error::Input { kind: InputError::Region(RegionError::OutOfBounds(region, 3)), .. } =>
            assert_eq!(region, Region::new((0, 0), (2, 3))),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_input_file() {
    let mut args = Args::new(PathBuf::from("this/file/does/not/exist.txt"));
    args.grid_size = 3;
    match run(&args) {
        Err(Error::Io(path, _)) => assert_eq!(path, args.input_path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn reads_instructions_from_a_file() {
    let path = std::env::temp_dir().join(format!("lightgrid-{}.txt", std::process::id()));
    std::fs::write(&path, "turn on 0,0 through 2,2\ntoggle 1,1 through 1,1\n").unwrap();

    let mut args = Args::from_iter_safe(vec![
        "lightgrid".into(), "--digital".into(), path.clone().into_os_string(), "3".into(),
    ]).unwrap();
    let digital = run(&args);
    args.policy = Policy::Boolean;
    let analog = run(&args);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(digital.unwrap(), Summary::TotalBrightness(9 + 2));
    assert_eq!(analog.unwrap(), Summary::LightsOn(8));
}
