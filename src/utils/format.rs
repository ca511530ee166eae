//! Path and label formatting helpers.

/// Last path segment, used as the short label for a file.
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

/// Everything before the last segment, without a trailing slash.
///
/// Returns an empty string for top-level paths.
pub fn parent_dir(path: &str) -> &str {
    match path.trim_end_matches('/').rsplit_once('/') {
        Some((parent, _)) => parent,
        None => "",
    }
}

/// Joins a directory and a name with exactly one separator.
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("train.py"), "train.py");
        assert_eq!(file_name("src/models/train.py"), "train.py");
        assert_eq!(file_name("data/"), "data");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("train.py"), "");
        assert_eq!(parent_dir("src/train.py"), "src");
        assert_eq!(parent_dir("src/models/train.py"), "src/models");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "train.py"), "train.py");
        assert_eq!(join_path("src", "train.py"), "src/train.py");
        assert_eq!(join_path("src/", "/train.py"), "src/train.py");
    }

    #[test]
    fn test_rename_target_round_trip() {
        // The editor builds a rename target from the parent of the old path.
        let old = "notebooks/eda.ipynb";
        let renamed = join_path(parent_dir(old), "analysis.ipynb");
        assert_eq!(renamed, "notebooks/analysis.ipynb");
    }
}
