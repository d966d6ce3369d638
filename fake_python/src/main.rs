//! Stands in for `python` in the launcher's tests. Prints what it was started with as JSON and
//! exits with `FAKE_PYTHON_EXIT_CODE`, if set.

use anyhow::{Context, Result};
use serde_json::json;
use std::{
    env::{args_os, current_dir, var, var_os},
    process::exit,
};

fn main() -> Result<()> {
    let argv = args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    let cwd = current_dir()?;
    let marker = var_os("FAKE_PYTHON_MARKER").map(|value| value.to_string_lossy().into_owned());
    let report = json!({
        "argv": argv,
        "cwd": cwd.to_string_lossy(),
        "marker": marker,
    });
    println!("{report}");

    if let Ok(code) = var("FAKE_PYTHON_EXIT_CODE") {
        let code = code
            .parse::<i32>()
            .with_context(|| format!("failed to parse `FAKE_PYTHON_EXIT_CODE`: {code:?}"))?;
        exit(code);
    }

    Ok(())
}
