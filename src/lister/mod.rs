//! Recursive file listing
//!
//! Walks a directory tree depth-first and collects the path of every entry
//! that is not a directory. Within a directory entries are visited in lexical
//! order of their file names. The first traversal error aborts the walk and is
//! returned unchanged.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod filter;

pub use filter::is_listed;

/// Result type for listing operations. The error is the walk's own error,
/// carrying the failing path and the underlying I/O error.
pub type ListResult<T> = Result<T, walkdir::Error>;

/// Build the walker used by every listing.
///
/// Links are never followed, including when the root itself is a link.
fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name()
}

/// Lazily yield the path of every non-directory entry under `root`.
///
/// Errors are yielded in place; collecting into a `Result` stops at the first
/// one.
pub fn iter_files<P: AsRef<Path>>(root: P) -> impl Iterator<Item = ListResult<PathBuf>> {
    walker(root.as_ref()).into_iter().filter_map(|entry| match entry {
        Ok(entry) if is_listed(&entry) => {
            tracing::trace!(path = %entry.path().display(), "listed");
            Some(Ok(entry.into_path()))
        }
        Ok(entry) => {
            tracing::debug!(dir = %entry.path().display(), depth = entry.depth(), "entering directory");
            None
        }
        Err(err) => Some(Err(err)),
    })
}

/// List every non-directory entry under `root`, in traversal order.
///
/// A root that is a regular file yields just that path. An empty or missing
/// root is reported as an error, as is any failure while reading an entry
/// further down; no partial listing is returned.
pub fn list_files<P: AsRef<Path>>(root: P) -> ListResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let files = iter_files(root)
        .collect::<ListResult<Vec<_>>>()
        .inspect_err(|err| {
            tracing::debug!(root = %root.display(), error = %err, "listing aborted");
        })?;

    tracing::debug!(root = %root.display(), count = files.len(), "listing complete");
    Ok(files)
}
