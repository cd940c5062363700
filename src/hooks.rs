//! Post-generation hooks: shell commands from the `post_generate` answer, run in the
//! generated project after the user agreed to it.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Asks whether the hooks may run, unless there are none or the check is skipped.
pub fn confirm_hook_execution(
    prompter: &dyn Prompter,
    commands: &[String],
    skip_hooks_check: bool,
) -> Result<bool> {
    if commands.is_empty() {
        return Ok(false);
    }
    if skip_hooks_check {
        return Ok(true);
    }
    let prompt = format!(
        concat!(
            "WARNING: the configuration runs {} command(s) on your system after generation:\n",
            "  {}\nDo you want to run them?",
        ),
        commands.len(),
        commands.join("\n  ")
    );
    prompter.confirm(&prompt, false)
}

/// Runs one command with `sh -c` in `project_root`.
///
/// # Errors
/// * `Error::HookError` if the command cannot be started or exits unsuccessfully
pub fn run_hook<P: AsRef<Path>>(project_root: P, command: &str) -> Result<()> {
    debug!("Running hook '{}'", command);
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(project_root.as_ref())
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::HookError(format!("cannot run '{command}': {e}")))?;

    if !status.success() {
        return Err(Error::HookError(format!("'{command}' failed with status: {status}")));
    }
    Ok(())
}

/// Runs every command in order. A failing hook is a warning; the rest still run.
///
/// Returns the warnings.
pub fn run_hooks<P: AsRef<Path>>(project_root: P, commands: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();
    for command in commands {
        if let Err(e) = run_hook(project_root.as_ref(), command) {
            warn!("{}", e);
            warnings.push(e.to_string());
        }
    }
    warnings
}
