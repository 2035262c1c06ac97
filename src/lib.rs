// vim: set ai et ts=4 sts=4 sw=4:
pub mod args;
pub mod error;
pub mod grid;
pub mod instruction;
pub mod logging;
pub mod policy;
pub mod run;
pub mod util;

pub use self::args::Args;
pub use self::error::Error;
pub use self::grid::{Grid, Region, Summary};
pub use self::policy::{Light, Policy};
pub use self::run::{run, run_reader};
