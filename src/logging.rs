// vim: set ai et ts=4 sts=4 sw=4:
use std::io;
use ansi_term::Colour::{Blue, Green, Purple, Red, Yellow};
use log::{Level, LevelFilter};

use super::util::maybe_color;

pub fn level_for(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sends log records to stderr, keeping stdout for the answer.
pub fn init(verbosity: u64, emit_color: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level().to_string();
            let label = match record.level() {
                Level::Error => Red.bold().paint(level),
                Level::Warn  => Yellow.paint(level),
                Level::Info  => Green.paint(level),
                Level::Debug => Blue.paint(level),
                Level::Trace => Purple.paint(level),
            };
            out.finish(format_args!("[{}] {}: {}",
                maybe_color(&label, emit_color),
                record.target(),
                message))
        })
        .level(level_for(verbosity))
        .chain(io::stderr())
        .apply()
}
