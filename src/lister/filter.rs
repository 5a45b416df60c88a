use walkdir::DirEntry;

/// Return true if the entry belongs in a listing.
///
/// Only directories are left out. The type is taken as reported by the walk
/// without following links, so a symlink to a directory is listed like any
/// other leaf entry.
pub fn is_listed(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir()
}
