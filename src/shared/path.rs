use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically cleans a path: drops `.` segments and folds `..` into the
/// preceding segment. The file system is never consulted, so symlinks
/// are left untouched.
///
/// `..` directly under the root is dropped (`/..` is `/`), while leading
/// `..` segments of a relative path are kept. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut kept: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match kept.last() {
                Some(Component::Normal(_)) => {
                    kept.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => kept.push(component),
            },
            other => kept.push(other),
        }
    }

    if kept.is_empty() {
        return PathBuf::from(".");
    }
    kept.into_iter().collect()
}

/// Makes `path` absolute against the current directory and cleans it.
///
/// # Errors
/// Returns an error if the path is empty or the current directory
/// cannot be determined.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(clean(&absolute))
}
