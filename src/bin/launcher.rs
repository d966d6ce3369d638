use launcher::run;
use std::{env::args_os, process::exit};

fn main() {
    env_logger::try_init().unwrap_or_default();

    // `run` only returns if the interpreter could not be started.
    let err = run(args_os());
    eprintln!("{err}");
    exit(err.exit_code());
}
