use super::{LaunchError, config};
use log::debug;
use std::{
    ffi::{OsStr, OsString},
    process::Command,
};

/// Build `[interpreter, script, args...]`. Each argument is copied verbatim and keeps its position.
#[must_use]
pub fn argument_vector<T: AsRef<OsStr>>(
    interpreter: &OsStr,
    script: &OsStr,
    args: &[T],
) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(args.len() + 2);
    argv.push(interpreter.to_owned());
    argv.push(script.to_owned());
    argv.extend(args.iter().map(|arg| arg.as_ref().to_owned()));
    argv
}

/// Hands the current process over to `<interpreter> <script> <args>...`.
#[derive(Clone, Debug)]
pub struct Launcher {
    interpreter: OsString,
    script: OsString,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    /// `python main.py`
    #[must_use]
    pub fn new() -> Self {
        Self {
            interpreter: OsString::from(config::DEFAULT_INTERPRETER),
            script: OsString::from(config::DEFAULT_SCRIPT),
        }
    }

    /// Like [`Launcher::new`], but honors `LAUNCHER_INTERPRETER` and `LAUNCHER_SCRIPT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            interpreter: config::interpreter_from_env(),
            script: config::script_from_env(),
        }
    }

    #[must_use]
    pub fn interpreter<S: AsRef<OsStr>>(mut self, interpreter: S) -> Self {
        interpreter.as_ref().clone_into(&mut self.interpreter);
        self
    }

    #[must_use]
    pub fn script<S: AsRef<OsStr>>(mut self, script: S) -> Self {
        script.as_ref().clone_into(&mut self.script);
        self
    }

    /// The argument vector that [`Launcher::exec`] would pass to the interpreter.
    ///
    /// `program` is only used for the usage message when `args` is empty.
    pub fn argv<T: AsRef<OsStr>>(
        &self,
        program: &OsStr,
        args: &[T],
    ) -> Result<Vec<OsString>, LaunchError> {
        check_usage(program, args)?;
        Ok(argument_vector(&self.interpreter, &self.script, args))
    }

    pub fn command<T: AsRef<OsStr>>(
        &self,
        program: &OsStr,
        args: &[T],
    ) -> Result<Command, LaunchError> {
        check_usage(program, args)?;
        let mut command = Command::new(&self.interpreter);
        command.arg(&self.script);
        command.args(args);
        Ok(command)
    }

    /// Replace the current process. Returns only if that was not possible.
    pub fn exec<T: AsRef<OsStr>>(&self, program: &OsStr, args: &[T]) -> LaunchError {
        let mut command = match self.command(program, args) {
            Ok(command) => command,
            Err(err) => return err,
        };
        debug!("exec: {command:?}");
        os_specific::exec(&mut command)
    }
}

fn check_usage<T>(program: &OsStr, args: &[T]) -> Result<(), LaunchError> {
    if args.is_empty() {
        return Err(LaunchError::Usage {
            program: program.to_string_lossy().into_owned(),
        });
    }
    Ok(())
}

#[cfg(unix)]
mod os_specific {
    use super::LaunchError;
    use std::{os::unix::process::CommandExt, process::Command};

    // `Command::exec` searches `PATH` the way `execvp` does.
    pub fn exec(command: &mut Command) -> LaunchError {
        let source = command.exec();
        LaunchError::Exec {
            call: "execvp",
            source,
        }
    }
}

#[cfg(not(unix))]
mod os_specific {
    use super::LaunchError;
    use log::debug;
    use std::process::{Command, exit};

    // No image replacement here. Wait for the child and exit with its status instead.
    pub fn exec(command: &mut Command) -> LaunchError {
        match command.status() {
            Ok(status) => {
                debug!("child exited: {status}");
                exit(status.code().unwrap_or(1))
            }
            Err(source) => LaunchError::Exec {
                call: "spawn",
                source,
            },
        }
    }
}
