//! Branch head resolution.

use std::fs;
use std::io;
use std::path::{Component, Path};

use commitviz_object::ObjectId;
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Resolves a branch name to the identifier of its head commit.
///
/// Looks up the loose ref `refs/heads/<branch>` first and falls back to the
/// `packed-refs` file.
///
/// # Errors
///
/// Returns [`CoreError::BranchNotFound`] if neither holds the branch and
/// [`CoreError::EmptyRef`] if the loose ref file is blank.
pub fn resolve_branch(git_dir: impl AsRef<Path>, branch: &str) -> CoreResult<ObjectId> {
    let git_dir = git_dir.as_ref();
    let ref_path = git_dir.join("refs").join("heads").join(branch);

    let not_found = || CoreError::BranchNotFound {
        branch: branch.to_string(),
        path: ref_path.clone(),
    };

    if branch.is_empty()
        || Path::new(branch)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(not_found());
    }

    match fs::read_to_string(&ref_path) {
        Ok(content) => {
            let head = content.trim();
            if head.is_empty() {
                return Err(CoreError::EmptyRef(ref_path.clone()));
            }
            debug!(branch, head, "resolved loose ref");
            return Ok(ObjectId::new(head));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let full_name = format!("refs/heads/{branch}");
    if let Some(head) = find_packed_ref(git_dir, &full_name)? {
        debug!(branch, head = %head, "resolved packed ref");
        return Ok(head);
    }

    Err(not_found())
}

/// Searches `packed-refs` for `full_name`.
fn find_packed_ref(git_dir: &Path, full_name: &str) -> CoreResult<Option<ObjectId>> {
    let content = match fs::read_to_string(git_dir.join("packed-refs")) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let found = content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('^'))
        .filter_map(|line| line.split_once(' '))
        .find(|(_, name)| name.trim() == full_name)
        .map(|(id, _)| ObjectId::new(id));

    Ok(found)
}
