use crate::Result;
use crate::config::{CiConfig, Overrides};
use crate::pipeline::{self, Invocation};
use crate::utils;

/// Runs the full CI matrix for the resolved configuration.
///
/// A release tag short-circuits the whole run before anything executes, and
/// a disabled test suite stops the matrix after the two build steps.
/// Execution is fail-fast: the first failing command aborts the run and no
/// later step executes.
///
/// # Errors
///
/// Returns an error if:
/// - No target triple is configured on the main path
/// - Any matrix command fails to spawn
/// - Any matrix command exits with a non-zero status
pub fn run_matrix(overrides: &Overrides, dry_run: bool) -> Result<()> {
    let config = CiConfig::resolve(overrides)?;

    if let Some(tag) = &config.release_tag {
        utils::print_warning(&format!(
            "⚠ Release tag {tag} detected, skipping the CI matrix"
        ));
        return Ok(());
    }

    let invocations = pipeline::plan(&config);

    if dry_run {
        for invocation in &invocations {
            println!("{}", invocation.command_line());
        }
        return Ok(());
    }

    utils::print_header(&format!(
        "Running CI matrix for {} with {}...",
        config.target,
        config.tool().program()
    ));

    pipeline::run_with(&invocations, run_step)?;

    if config.skip_tests {
        utils::print_warning("⚠ Tests disabled, verification steps skipped");
    }

    utils::print_success("✓ CI matrix completed successfully!");
    Ok(())
}

fn run_step(invocation: &Invocation) -> Result<()> {
    utils::print_step(invocation.step.name(), &invocation.command_line());

    if let Err(error) = pipeline::execute(invocation) {
        utils::print_step_error(&format!("✗ {} failed", invocation.step.name()));
        return Err(error);
    }

    utils::print_step_success(invocation.step.name());
    Ok(())
}
