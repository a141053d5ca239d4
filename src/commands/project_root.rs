use std::path::{Path, PathBuf};

use airlift::infrastructure::project::{PROJECT_FILE, PUBSPEC_FILE};

/// Discover the Flutter project root from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `airlift.yaml` (an initialized project)
/// - `pubspec.yaml` (a Flutter project not yet initialized)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    let marked = |marker: &str| {
        start
            .ancestors()
            .find(|dir| dir.join(marker).is_file())
            .map(Path::to_path_buf)
    };
    marked(PROJECT_FILE)
        .or_else(|| marked(PUBSPEC_FILE))
        .unwrap_or_else(|| start.to_path_buf())
}
