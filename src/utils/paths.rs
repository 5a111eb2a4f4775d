// Path labels for reports
//
// Units are reported relative to the working directory with `/` separators,
// so the same input prints the same heading on every platform.

use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Strip `root` from `path` and normalize separators to `/`
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "'{}' is not within '{}'",
            path.display(),
            root.display()
        )
    })?;
    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    Ok(if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    })
}

/// Label for a unit heading; falls back to the path as given
pub fn unit_label(path: &Path, root: &Path) -> String {
    to_relative_unix_style(path, root).unwrap_or_else(|_| path.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_to_root() {
        let root = PathBuf::from("/home/dev/project");
        let path = PathBuf::from("/home/dev/project/pkg/model/user.go");

        assert_eq!(
            to_relative_unix_style(&path, &root).unwrap(),
            "pkg/model/user.go"
        );
    }

    #[test]
    fn test_outside_root_is_an_error() {
        let root = PathBuf::from("/home/dev/project");
        let outside = PathBuf::from("/tmp/other.go");

        let err = to_relative_unix_style(&outside, &root).unwrap_err();
        assert!(err.to_string().contains("is not within"));
    }

    #[test]
    fn test_unit_label_falls_back_to_given_path() {
        let root = PathBuf::from("/home/dev/project");

        assert_eq!(
            unit_label(Path::new("/home/dev/project/a.go"), &root),
            "a.go"
        );
        assert_eq!(unit_label(Path::new("/tmp/b.go"), &root), "/tmp/b.go");
    }

    #[test]
    fn test_spaces_and_unicode_survive() {
        let root = PathBuf::from("/home/dev/my projects");
        let path = PathBuf::from("/home/dev/my projects/src/日本語.go");

        assert_eq!(
            to_relative_unix_style(&path, &root).unwrap(),
            "src/日本語.go"
        );
    }
}
