use std::{
    env::var_os,
    ffi::{OsStr, OsString},
};

pub const DEFAULT_INTERPRETER: &str = "python";
pub const DEFAULT_SCRIPT: &str = "main.py";

pub const INTERPRETER_VAR: &str = "LAUNCHER_INTERPRETER";
pub const SCRIPT_VAR: &str = "LAUNCHER_SCRIPT";

pub fn interpreter_from_env() -> OsString {
    or_default(var_os(INTERPRETER_VAR), DEFAULT_INTERPRETER)
}

pub fn script_from_env() -> OsString {
    or_default(var_os(SCRIPT_VAR), DEFAULT_SCRIPT)
}

// An empty value is treated as unset. `execvp("")` can only fail.
fn or_default(value: Option<OsString>, default: &str) -> OsString {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| OsStr::new(default).to_owned())
}
