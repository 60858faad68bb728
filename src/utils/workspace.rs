use crate::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the member directories of the workspace rooted at `root`.
///
/// Reads the `workspace.members` section of the root `Cargo.toml` and expands
/// `*` glob patterns to every matching directory that contains its own
/// `Cargo.toml`. A manifest without a `[workspace]` table yields an empty
/// list, which callers treat as a single-crate layout.
///
/// # Errors
///
/// Returns an error if the root `Cargo.toml` is missing or cannot be parsed,
/// or if a glob pattern in the members list is malformed.
pub fn workspace_members(root: &Path) -> Result<Vec<PathBuf>> {
    let manifest_path = root.join("Cargo.toml");

    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    let Some(members) = manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("members"))
        .and_then(|members| members.as_array())
    else {
        return Ok(Vec::new());
    };

    let mut paths = Vec::new();
    for member in members {
        let Some(member) = member.as_str() else {
            continue;
        };

        if member.contains('*') {
            let pattern = root.join(member);
            for entry in glob::glob(&pattern.to_string_lossy())?.flatten() {
                if entry.join("Cargo.toml").exists() {
                    paths.push(relative_to(root, &entry));
                }
            }
        } else {
            paths.push(PathBuf::from(member));
        }
    }

    paths.sort();
    Ok(paths)
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
