//! Loose object store access.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::{Decompress, FlushDecompress, Status};
use tracing::{debug, trace};

use crate::{ObjectError, ObjectId, ObjectResult};

/// Largest decompressed object accepted (100 MiB).
///
/// Bounds memory use when a small compressed file expands without limit.
pub const MAX_OBJECT_SIZE: usize = 100 * 1024 * 1024;

/// A source of decompressed object bytes.
pub trait ObjectReader {
    /// Returns the decompressed bytes of the object named by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is absent or cannot be decoded.
    fn read(&self, id: &ObjectId) -> ObjectResult<Vec<u8>>;
}

/// Reads objects stored one file per object under `objects/`.
#[derive(Debug, Clone)]
pub struct LooseObjectStore {
    git_dir: PathBuf,
    max_object_size: usize,
}

impl LooseObjectStore {
    /// Creates a store rooted at a git directory (the one holding `objects/`).
    #[must_use]
    pub fn new(git_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
            max_object_size: MAX_OBJECT_SIZE,
        }
    }

    /// Sets the largest decompressed object size accepted.
    #[must_use]
    pub fn with_max_object_size(mut self, max_object_size: usize) -> Self {
        self.max_object_size = max_object_size;
        self
    }

    /// Opens the store of a working tree or a bare git directory.
    ///
    /// A `.git` entry is preferred when present. A `.git` file containing a
    /// `gitdir:` line (linked worktrees, submodules) is followed.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::NotARepo`] if no object directory is found.
    pub fn open(path: impl AsRef<Path>) -> ObjectResult<Self> {
        let path = path.as_ref();
        let dot_git = path.join(".git");

        let git_dir = if dot_git.is_dir() {
            dot_git
        } else if dot_git.is_file() {
            read_gitdir_link(&dot_git)
                .ok_or_else(|| ObjectError::NotARepo(path.to_path_buf()))?
        } else {
            path.to_path_buf()
        };

        if !git_dir.join("objects").is_dir() {
            return Err(ObjectError::NotARepo(path.to_path_buf()));
        }

        debug!(git_dir = ?git_dir, "opened object store");
        Ok(Self::new(git_dir))
    }

    /// Returns the git directory this store reads from.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Returns the path of the file holding `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidId`] if the identifier cannot be split
    /// into a directory prefix and a file name.
    pub fn object_path(&self, id: &ObjectId) -> ObjectResult<PathBuf> {
        let (prefix, suffix) = id
            .split()
            .ok_or_else(|| ObjectError::InvalidId(id.to_string()))?;
        Ok(self.git_dir.join("objects").join(prefix).join(suffix))
    }
}

impl ObjectReader for LooseObjectStore {
    fn read(&self, id: &ObjectId) -> ObjectResult<Vec<u8>> {
        let path = self.object_path(id)?;
        trace!(%id, path = ?path, "reading object");

        let compressed = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ObjectError::NotFound {
                    id: id.clone(),
                    path,
                });
            }
            Err(source) => return Err(ObjectError::Io { path, source }),
        };

        inflate(&compressed, self.max_object_size).map_err(|source| ObjectError::Corrupt {
            id: id.clone(),
            source,
        })
    }
}

/// Reads and decompresses the object `id` from the git directory `repo_root`.
///
/// # Errors
///
/// Returns [`ObjectError::NotFound`] if no file exists for the identifier and
/// [`ObjectError::Corrupt`] if its content does not decompress.
pub fn read_object(repo_root: impl AsRef<Path>, id: &ObjectId) -> ObjectResult<Vec<u8>> {
    LooseObjectStore::new(repo_root.as_ref()).read(id)
}

/// Decompresses a complete zlib stream of at most `max_size` bytes.
///
/// Input that ends before the end-of-stream marker is an error rather than a
/// short result.
fn inflate(compressed: &[u8], max_size: usize) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(
        compressed
            .len()
            .saturating_mul(2)
            .max(64)
            .min(max_size.saturating_add(1)),
    );

    loop {
        let consumed = usize::try_from(inflater.total_in()).unwrap_or(usize::MAX);
        let produced = inflater.total_out();
        let input = compressed.get(consumed..).unwrap_or_default();

        let status = inflater
            .decompress_vec(input, &mut output, FlushDecompress::Finish)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if output.len() > max_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("object exceeds {max_size} bytes when decompressed"),
            ));
        }

        if status == Status::StreamEnd {
            return Ok(output);
        }

        if output.len() == output.capacity() {
            output.reserve(output.capacity().max(64));
        } else if inflater.total_out() == produced
            && usize::try_from(inflater.total_in()).is_ok_and(|n| n == consumed)
        {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated zlib stream",
            ));
        }
    }
}

/// Resolves a `.git` file of the form `gitdir: <path>`.
fn read_gitdir_link(dot_git: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(dot_git).ok()?;
    let target = content.lines().find_map(|l| l.strip_prefix("gitdir:"))?.trim();
    let target = PathBuf::from(target);

    if target.is_absolute() {
        Some(target)
    } else {
        dot_git.parent().map(|base| base.join(target))
    }
}
