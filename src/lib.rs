use log::debug;
use std::ffi::OsString;

mod command;
pub use command::{Launcher, argument_vector};

mod config;
pub use config::{DEFAULT_INTERPRETER, DEFAULT_SCRIPT, INTERPRETER_VAR, SCRIPT_VAR};

mod error;
pub use error::LaunchError;

/// Replace the current process with `<interpreter> <script> <args>...`.
///
/// `args` is the process's full argument list, e.g., [`std::env::args_os`]. Its first element
/// names the program in the usage message. The remaining elements are forwarded.
///
/// Returns only on failure.
pub fn run<I>(args: I) -> LaunchError
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args
        .next()
        .unwrap_or_else(|| OsString::from(env!("CARGO_PKG_NAME")));
    let args = args.collect::<Vec<_>>();
    let launcher = Launcher::from_env();
    debug!("{launcher:?}");
    launcher.exec(&program, &args)
}

#[cfg(test)]
mod test {
    use super::{LaunchError, run};
    use std::ffi::OsString;

    #[test]
    fn usage_names_first_argument() {
        let err = run([OsString::from("./launcher")]);
        assert_eq!("Usage: ./launcher <args>", err.to_string());
    }

    #[test]
    fn usage_without_any_arguments() {
        let err = run(Vec::new());
        assert!(
            matches!(&err, LaunchError::Usage { program } if program == env!("CARGO_PKG_NAME")),
            "unexpected error: {err:?}"
        );
    }
}
