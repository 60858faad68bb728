//! Matrix planning and fail-fast execution.
//!
//! A configuration expands into an ordered list of [`Invocation`]s through
//! [`plan`], which is a pure function so the exact command lines of a matrix
//! run can be inspected (and tested) without spawning anything. Execution is
//! strictly sequential: the first non-zero exit status aborts the run and
//! every later invocation stays unexecuted.

use crate::Result;
use crate::config::{CiConfig, Tool};
use crate::utils;

/// One step of the verification matrix, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `<tool> build --target <T>`
    BuildDebug,
    /// `<tool> build --target <T> --release`
    BuildRelease,
    /// `<tool> fmt -- --check`
    FormatCheck,
    /// `<tool> clippy`
    Lint,
    /// `<tool> test --target <T>`
    TestDebug,
    /// `<tool> test --target <T> --release`
    TestRelease,
}

impl Step {
    /// Human-readable step name used in progress output.
    pub fn name(self) -> &'static str {
        match self {
            Self::BuildDebug => "build (debug)",
            Self::BuildRelease => "build (release)",
            Self::FormatCheck => "format check",
            Self::Lint => "clippy",
            Self::TestDebug => "test (debug)",
            Self::TestRelease => "test (release)",
        }
    }

    /// Arguments passed to the build tool for this step.
    pub fn args(self, target: &str) -> Vec<String> {
        let args: Vec<&str> = match self {
            Self::BuildDebug => vec!["build", "--target", target],
            Self::BuildRelease => vec!["build", "--target", target, "--release"],
            Self::FormatCheck => vec!["fmt", "--", "--check"],
            Self::Lint => vec!["clippy"],
            Self::TestDebug => vec!["test", "--target", target],
            Self::TestRelease => vec!["test", "--target", target, "--release"],
        };

        args.into_iter().map(String::from).collect()
    }
}

/// A fully resolved command of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub step: Step,
    pub program: &'static str,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(step: Step, tool: Tool, target: &str) -> Self {
        Self {
            step,
            program: tool.program(),
            args: step.args(target),
        }
    }

    /// Rendered command line, used for dry runs and failure reports.
    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Expands a configuration into the ordered list of commands to run.
///
/// A release tag empties the plan entirely (deploy builds never re-run
/// verification); `skip_tests` keeps only the two build steps.
pub fn plan(config: &CiConfig) -> Vec<Invocation> {
    if config.release_tag.is_some() {
        return Vec::new();
    }

    let tool = config.tool();
    let mut steps = vec![Step::BuildDebug, Step::BuildRelease];

    if !config.skip_tests {
        steps.extend([
            Step::FormatCheck,
            Step::Lint,
            Step::TestDebug,
            Step::TestRelease,
        ]);
    }

    steps
        .into_iter()
        .map(|step| Invocation::new(step, tool, &config.target))
        .collect()
}

/// Runs every invocation in order through `run`, stopping at the first error.
pub fn run_with<F>(invocations: &[Invocation], mut run: F) -> Result<()>
where
    F: FnMut(&Invocation) -> Result<()>,
{
    for invocation in invocations {
        run(invocation)?;
    }

    Ok(())
}

/// Executes one invocation with inherited stdio.
///
/// # Errors
///
/// Returns an error if the tool could not be spawned or exited with a
/// non-zero status.
pub fn execute(invocation: &Invocation) -> Result<()> {
    utils::run_checked(invocation.program, &invocation.args)
}
