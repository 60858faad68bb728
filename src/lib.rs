//! # matrix-ci - CI Matrix Automation
//!
//! A build automation library that drives a continuous-integration test matrix
//! for a Rust crate following the [xtask pattern](https://github.com/matklad/cargo-xtask).
//! Given the operating system of the CI host and a target triple, it builds the
//! crate in debug and release mode and then runs the formatting check, the
//! clippy lint pass and the test suite in both build profiles, aborting on the
//! first failing command.
//!
//! On linux hosts the matrix is driven through [`cross`](https://github.com/cross-rs/cross)
//! so foreign target triples can be exercised; every other host uses plain
//! `cargo`. A tagged release skips the whole matrix, since deploy builds must
//! not re-run verification.
//!
//! ## Usage as a Library
//!
//! The binary is a thin clap wrapper; all orchestration logic is reachable from
//! the library so it can be exercised without spawning real build tools:
//!
//! ```rust
//! use matrix_ci::config::CiConfig;
//! use matrix_ci::pipeline;
//!
//! let config = CiConfig {
//!     os_name: "linux".to_string(),
//!     target: "x86_64-unknown-linux-gnu".to_string(),
//!     skip_tests: false,
//!     release_tag: None,
//! };
//!
//! for invocation in pipeline::plan(&config) {
//!     println!("{}", invocation.command_line());
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - The user-facing subcommands (ci, build, test, format, clippy, clean)
//! - [`config`] - Environment resolution and build-tool selection
//! - [`pipeline`] - Matrix planning and fail-fast execution
//! - [`utils`] - Process spawning, terminal output and workspace discovery

pub mod commands;
pub mod config;
pub mod pipeline;

/// Utility functions and helpers
///
/// Common utilities used across commands: command execution, workspace
/// member discovery and formatted output helpers.
pub mod utils;

// Re-export commonly used types and functions
pub use anyhow::{Context, Result};
pub use colored::Colorize;
