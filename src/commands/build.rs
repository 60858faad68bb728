use crate::Result;
use crate::utils;

/// Builds the crate in the requested profile with native cargo.
///
/// # Errors
///
/// Returns an error if the cargo build command fails to execute or returns
/// a non-zero exit code.
pub fn run_build(target: Option<&str>, release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };
    utils::print_header(&format!("Building crate ({profile})..."));

    let mut args = vec!["build"];
    if let Some(target) = target {
        args.extend(["--target", target]);
    }
    if release {
        args.push("--release");
    }

    utils::run_cargo(&args)?;

    utils::print_success("✓ Build finished successfully!");
    Ok(())
}
