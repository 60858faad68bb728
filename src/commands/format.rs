use crate::Result;
use crate::utils;

pub fn check_formatting() -> Result<()> {
    utils::print_header("Checking code formatting...");

    utils::run_cargo(&["fmt", "--", "--check"])?;

    utils::print_success("✓ Formatting is clean!");
    Ok(())
}

pub fn fix_formatting() -> Result<()> {
    utils::print_header("Fixing code formatting...");

    utils::run_cargo(&["fmt", "--all"])?;

    utils::print_success("✓ All formatting issues fixed!");
    Ok(())
}
