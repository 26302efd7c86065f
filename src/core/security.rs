//! Path containment for indexing requests.
//!
//! Every directory handed to the indexer is resolved against the
//! project root and must stay inside it. Resolution is purely
//! lexical: `.` and `..` are folded without touching the file
//! system, so a request is rejected before any I/O happens.

use std::path::{Component, Path, PathBuf};

use crate::core::error::{RagError, Result};

/// Fold `.` and `..` components without consulting the file system.
///
/// `..` at the root stays at the root, as the OS would do.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // Never pops past the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Resolve `requested` against `project_root` and require containment.
///
/// `project_root` must be absolute. Containment is component-wise,
/// so `/repo-old` is not considered inside `/repo`.
pub fn confine(requested: &str, project_root: &Path) -> Result<PathBuf> {
    let root = normalize_lexically(project_root);
    let resolved = normalize_lexically(&root.join(requested));

    if resolved.starts_with(&root) {
        Ok(resolved)
    } else {
        tracing::warn!(
            "Rejected directory {:?}: resolves to {:?} outside {:?}",
            requested,
            resolved,
            root
        );
        Err(RagError::PathTraversal {
            requested: requested.to_string(),
            root: root.display().to_string(),
        })
    }
}
