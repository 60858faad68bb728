use clap::{Parser, Subcommand};
use matrix_ci::config::Overrides;
use matrix_ci::{Result, commands};

#[derive(Parser)]
#[command(name = "matrix-ci")]
#[command(about = "CI matrix automation for Rust crates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full CI matrix (build, format check, clippy, tests)
    Ci {
        /// CI host OS name, overrides TRAVIS_OS_NAME
        #[arg(long)]
        os: Option<String>,
        /// Target triple, overrides TARGET
        #[arg(long)]
        target: Option<String>,
        /// Stop after the build steps, skipping all verification
        #[arg(long)]
        skip_tests: bool,
        /// Print the planned commands without executing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Build the crate with native cargo
    Build {
        /// Target triple to build for
        #[arg(long)]
        target: Option<String>,
        /// Build with optimizations
        #[arg(long)]
        release: bool,
    },
    /// Run the test suite
    Test {
        /// Target triple to test on
        #[arg(long)]
        target: Option<String>,
        /// Test the release profile
        #[arg(long)]
        release: bool,
    },
    /// Check code formatting
    Format {
        /// Check formatting without making changes
        #[arg(long, conflicts_with = "fix")]
        check: bool,
        /// Fix formatting issues
        #[arg(long, conflicts_with = "check")]
        fix: bool,
    },
    /// Run clippy on the crate
    Clippy,
    /// Clean all build artifacts
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci {
            os,
            target,
            skip_tests,
            dry_run,
        } => {
            let overrides = Overrides {
                os_name: os,
                target,
                skip_tests,
            };
            commands::ci::run_matrix(&overrides, dry_run)
        }
        Commands::Build { target, release } => {
            commands::build::run_build(target.as_deref(), release)
        }
        Commands::Test { target, release } => {
            commands::test::run_tests(target.as_deref(), release)
        }
        Commands::Format { check, fix } => {
            if check {
                commands::format::check_formatting()
            } else if fix {
                commands::format::fix_formatting()
            } else {
                // Default to checking if no flag is provided
                commands::format::check_formatting()
            }
        }
        Commands::Clippy => commands::clippy::run_clippy(),
        Commands::Clean => commands::clean::clean_all(),
    }
}
