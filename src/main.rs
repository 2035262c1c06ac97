// vim: set ai et ts=4 sts=4 sw=4:
use std::env;
use std::io;
use std::process;
use ansi_term::Colour::Red;
use log::warn;

use lightgrid::{logging, run, Args, Error};
use lightgrid::util::{is_a_tty, maybe_color};

fn fail(err: &Error, emit_color: bool) -> ! {
    eprintln!("{} {}", maybe_color(&Red.bold().paint("error:"), emit_color), err);
    process::exit(1);
}

fn main() {
    let emit_color = is_a_tty(io::stderr());
    let args = match Args::from_iter_safe(env::args_os()) {
        Ok(args)            => args,
        Err(Error::Cli(e))  => e.exit(),
        Err(e)              => fail(&e, emit_color),
    };
    if let Err(e) = logging::init(args.verbosity, emit_color) {
        fail(&Error::from(e), emit_color);
    }
    if args.grid_size * args.grid_size > 10_000_000 {
        warn!("{}x{} grid, this may take a while", args.grid_size, args.grid_size);
    }

    match run(&args) {
        Ok(summary) => println!("{}", summary),
        Err(e)      => fail(&e, emit_color),
    }
}
