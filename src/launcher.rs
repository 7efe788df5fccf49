//! Locate and run a prebuilt `lithos` executable.
//!
//! Build systems put the binary in different places depending on platform and
//! generator (multi-config Visual Studio layouts nest it under `Debug/` or
//! `Release/`). `candidates` lists those layouts in a fixed priority order and
//! `find_executable` picks the first one that exists, not the "best" one.
//!
//! `launch` runs the child with the remaining arguments and waits for it. A
//! Ctrl+C while the child is running is treated as a clean exit (code 0).

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Name of the game executable without extension.
pub const GAME_NAME: &str = "lithos";

/// How the launched child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The child exited normally with this code.
    Exited(i32),
    /// The child was killed by a signal.
    Signaled(i32),
    /// The user pressed Ctrl+C while the child was running.
    Interrupted,
}

impl Outcome {
    /// Process exit code the launcher should return.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Exited(code) => code,
            Outcome::Signaled(sig) => 128 + sig,
            Outcome::Interrupted => 0,
        }
    }
}

/// Candidate paths for `build_type`, relative to `root`, in priority order.
pub fn candidates(root: &Path, build_type: &str) -> Vec<PathBuf> {
    let base = root.join("build").join(build_type);
    let exe = format!("{}.exe", GAME_NAME);
    vec![
        base.join("Debug").join(&exe),
        base.join("Release").join(&exe),
        base.join(&exe),
        base.join(GAME_NAME),
    ]
}

/// First candidate that exists on disk. Whether it is actually executable is
/// left to the OS when spawning.
pub fn find_executable(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|p| p.exists())
}

/// Route Ctrl+C to a flag instead of killing the launcher, so the child's
/// termination can be observed and mapped to exit code 0.
///
/// The flag is stored from inside the signal handler, so it is already set by
/// the time waiting on the child returns.
pub fn install_interrupt_handler() -> Result<Arc<AtomicBool>, String> {
    let flag = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        .map_err(|e| format!("failed to install Ctrl+C handler: {}", e))?;
    Ok(flag)
}

/// Run `path` with `args` forwarded unchanged and wait for it to finish.
///
/// `interrupted` is checked once the child is gone; when set, the outcome is
/// `Interrupted` whatever the child returned.
pub fn launch(
    path: &Path,
    args: &[OsString],
    interrupted: &AtomicBool,
) -> Result<Outcome, String> {
    let status = Command::new(path)
        .args(args)
        .status()
        .map_err(|e| format!("failed to execute {}: {}", path.display(), e))?;

    if interrupted.load(Ordering::SeqCst) {
        return Ok(Outcome::Interrupted);
    }
    Ok(outcome_from_status(status))
}

#[cfg(unix)]
fn outcome_from_status(status: ExitStatus) -> Outcome {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => Outcome::Exited(code),
        (None, Some(sig)) => Outcome::Signaled(sig),
        (None, None) => Outcome::Exited(1),
    }
}

#[cfg(not(unix))]
fn outcome_from_status(status: ExitStatus) -> Outcome {
    Outcome::Exited(status.code().unwrap_or(1))
}

/// Find and run the game for `build_type` under `root`, returning the exit
/// code the launcher should use.
///
/// Prints `Running <path>...` before launching. When nothing is found, prints
/// an `Error:` line and the searched paths and returns 1.
pub fn run(
    root: &Path,
    build_type: &str,
    args: &[OsString],
    interrupted: &AtomicBool,
) -> i32 {
    let paths = candidates(root, build_type);
    let Some(exe) = find_executable(&paths) else {
        let searched: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        println!("Error: Could not find executable for {} build.", build_type);
        println!("Searched in: {:?}", searched);
        return 1;
    };

    println!("Running {}...", exe.display());
    match launch(exe, args, interrupted) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}
