use crate::Result;
use crate::utils;
use std::path::Path;

/// Removes build artifacts for the crate in the current directory.
///
/// Inside a workspace every member discovered from the root manifest is
/// cleaned through its own manifest path; a single-crate layout gets one
/// plain `cargo clean`.
///
/// # Errors
///
/// Returns an error if:
/// - The root manifest cannot be read or parsed
/// - Any cargo clean command execution fails
pub fn clean_all() -> Result<()> {
    utils::print_header("Cleaning build artifacts...");

    let members = utils::workspace_members(Path::new("."))?;

    if members.is_empty() {
        utils::run_cargo(&["clean"])?;
    } else {
        for member in members {
            let manifest = format!("{}/Cargo.toml", member.display());

            utils::print_step("Cleaning", &member.display().to_string());
            utils::run_cargo(&["clean", "--manifest-path", manifest.as_str()])?;
        }
    }

    utils::print_success("✓ All build artifacts cleaned!");
    Ok(())
}
