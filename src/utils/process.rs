use crate::{Context, Result};
use std::process::Command;

/// Runs `program` with `args`, inheriting stdio, and waits for it to finish.
///
/// The child's output streams go straight to the terminal; only the exit
/// status is inspected.
///
/// # Errors
///
/// Returns an error if the program could not be spawned or exited with a
/// non-zero status. The error names the full command line so CI logs show
/// which step broke the run.
pub fn run_checked(program: &str, args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute {program}"))?;

    if !status.success() {
        anyhow::bail!(
            "`{}` failed with {status}",
            render_command_line(program, args)
        );
    }

    Ok(())
}

/// Runs `cargo` with `args` in the current directory, checking the exit status.
///
/// # Errors
///
/// Same failure modes as [`run_checked`].
pub fn run_cargo(args: &[&str]) -> Result<()> {
    let args: Vec<String> = args.iter().map(|arg| (*arg).to_string()).collect();
    run_checked("cargo", &args)
}

fn render_command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| (*a).to_string()).collect()
    }

    #[test]
    fn test_run_checked_success() {
        run_checked("true", &[]).expect("true should succeed");
    }

    #[test]
    fn test_run_checked_nonzero_exit() {
        let err = run_checked("false", &[]).expect_err("false should fail");
        assert!(err.to_string().contains("`false` failed"));
    }

    #[test]
    fn test_run_checked_missing_program() {
        let err = run_checked("matrix-ci-no-such-tool", &[]).expect_err("spawn should fail");
        assert!(err.to_string().contains("Failed to execute"));
    }

    #[test]
    fn test_command_line_rendering() {
        assert_eq!(
            render_command_line("cross", &args_of(&["build", "--target", "t"])),
            "cross build --target t"
        );
        assert_eq!(render_command_line("cargo", &[]), "cargo");
    }
}
