use crate::Result;
use crate::utils;

pub fn run_tests(target: Option<&str>, release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };
    utils::print_header(&format!("Running test suite ({profile})..."));

    let mut args = vec!["test"];
    if let Some(target) = target {
        args.extend(["--target", target]);
    }
    if release {
        args.push("--release");
    }

    utils::run_cargo(&args)?;

    utils::print_success("✓ All tests passed!");
    Ok(())
}
