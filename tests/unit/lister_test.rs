use dirlist::lister::{self, is_listed};
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(path: PathBuf) -> PathBuf {
    let mut f = File::create(&path).unwrap();
    writeln!(f, "{}", path.display()).unwrap();
    path
}

#[test]
fn test_flat_directory_lists_every_file() {
    let td = TempDir::new().unwrap();
    let expected: Vec<PathBuf> = ["a.txt", "b.json", "c"]
        .iter()
        .map(|name| touch(td.path().join(name)))
        .collect();

    let files = lister::list_files(td.path()).unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files, expected);
    assert!(files.iter().all(|p| p.starts_with(td.path()) && p.is_file()));
}

#[test]
fn test_empty_directory_lists_nothing() {
    let td = TempDir::new().unwrap();
    let files = lister::list_files(td.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_nested_directories_are_never_listed() {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("one/two/three")).unwrap();
    fs::create_dir_all(td.path().join("other")).unwrap();
    touch(td.path().join("one/two/deep.txt"));
    touch(td.path().join("one/top.txt"));

    let files = lister::list_files(td.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| !p.is_dir()));
}

#[test]
fn test_entries_visited_in_name_order() {
    let td = TempDir::new().unwrap();
    fs::create_dir(td.path().join("m")).unwrap();
    touch(td.path().join("z.txt"));
    touch(td.path().join("m/inner.txt"));
    touch(td.path().join("a.txt"));

    let files = lister::list_files(td.path()).unwrap();
    assert_eq!(
        files,
        vec![
            td.path().join("a.txt"),
            td.path().join("m/inner.txt"),
            td.path().join("z.txt"),
        ]
    );
}

#[test]
fn test_file_root_lists_itself() {
    let td = TempDir::new().unwrap();
    let file = touch(td.path().join("only.txt"));

    let files = lister::list_files(&file).unwrap();
    assert_eq!(files, vec![file]);
}

#[test]
fn test_missing_root_is_error() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("missing");

    let err = lister::list_files(&missing).unwrap_err();
    assert_eq!(err.path(), Some(missing.as_path()));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(std::io::ErrorKind::NotFound)
    );
}

#[test]
fn test_is_listed_matches_file_type() {
    let td = TempDir::new().unwrap();
    touch(td.path().join("f"));

    let decisions: Vec<(PathBuf, bool)> = walkdir::WalkDir::new(td.path())
        .sort_by_file_name()
        .into_iter()
        .map(|e| {
            let e = e.unwrap();
            let listed = is_listed(&e);
            (e.into_path(), listed)
        })
        .collect();

    assert_eq!(
        decisions,
        vec![(td.path().to_path_buf(), false), (td.path().join("f"), true)]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_listed_but_not_followed() {
    use std::os::unix::fs::symlink;

    let td = TempDir::new().unwrap();
    let target = td.path().join("target");
    fs::create_dir(&target).unwrap();
    touch(target.join("inside.txt"));
    symlink(&target, td.path().join("link_dir")).unwrap();
    symlink(target.join("inside.txt"), td.path().join("link_file")).unwrap();

    let files = lister::list_files(td.path()).unwrap();
    assert_eq!(
        files,
        vec![
            td.path().join("link_dir"),
            td.path().join("link_file"),
            target.join("inside.txt"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_symlink_root_is_not_followed() {
    use std::os::unix::fs::symlink;

    let td = TempDir::new().unwrap();
    let target = td.path().join("target");
    fs::create_dir(&target).unwrap();
    touch(target.join("inside.txt"));
    let link = td.path().join("link");
    symlink(&target, &link).unwrap();

    let files = lister::list_files(&link).unwrap();
    assert_eq!(files, vec![link]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_aborts_listing() {
    use std::os::unix::fs::PermissionsExt;

    let td = TempDir::new().unwrap();
    touch(td.path().join("a.txt"));
    let locked = td.path().join("locked");
    fs::create_dir(&locked).unwrap();
    touch(locked.join("secret.txt"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory anyway.
    let readable = fs::read_dir(&locked).is_ok();
    let result = lister::list_files(td.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if readable {
        return;
    }
    let err = result.unwrap_err();
    assert_eq!(err.path(), Some(locked.as_path()));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(std::io::ErrorKind::PermissionDenied)
    );
}
