use crate::Result;
use crate::utils;

/// Runs one clippy pass over the crate, with the same argument shape the
/// matrix lint step uses.
///
/// # Errors
///
/// Returns an error if clippy fails to execute or finds any violation.
pub fn run_clippy() -> Result<()> {
    utils::print_header("Running clippy...");

    utils::run_cargo(&["clippy"])?;

    utils::print_success("✓ Clippy found no issues!");
    Ok(())
}
