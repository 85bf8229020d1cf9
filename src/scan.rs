use crate::error::Result;
use ignore::{WalkBuilder, WalkState};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Directory names that are never worth descending into.
pub const DEFAULT_PRUNE: &[&str] = &["vendor", "node_modules"];

/// Directory names whose presence marks the parent as a repository root.
pub const DEFAULT_MARKERS: &[&str] = &[".git", ".jj"];

/// Walk `root` in parallel and collect every directory whose direct child is
/// a version-control marker directory. The marker directory itself is never
/// descended into, so repositories nested inside another repository's
/// worktree are still found.
///
/// Any unreadable directory anywhere in the tree aborts the whole scan.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    scan_with_prune(root, DEFAULT_PRUNE)
}

pub fn scan_with_prune(root: &Path, prune: &[&str]) -> Result<Vec<PathBuf>> {
    let prune: Vec<String> = prune.iter().map(|s| s.to_string()).collect();

    let repos: Arc<Mutex<HashSet<PathBuf>>> = Arc::new(Mutex::new(HashSet::new()));
    let failure: Arc<Mutex<Option<ignore::Error>>> = Arc::new(Mutex::new(None));

    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    WalkBuilder::new(root)
        .threads(threads)
        .follow_links(false)
        .standard_filters(false)
        .hidden(false)
        .filter_entry(move |entry| {
            let name = entry.file_name().to_str().unwrap_or("");
            !prune.iter().any(|p| p == name)
        })
        .build_parallel()
        .run(|| {
            let repos = Arc::clone(&repos);
            let failure = Arc::clone(&failure);
            Box::new(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        let mut slot = failure.lock().unwrap_or_else(|e| e.into_inner());
                        slot.get_or_insert(err);
                        return WalkState::Quit;
                    }
                };

                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let is_marker = DEFAULT_MARKERS.iter().any(|m| entry.file_name() == *m);
                if is_dir && is_marker {
                    if let Some(parent) = entry.path().parent() {
                        let mut set = repos.lock().unwrap_or_else(|e| e.into_inner());
                        set.insert(parent.to_path_buf());
                    }
                    return WalkState::Skip;
                }

                WalkState::Continue
            })
        });

    let mut slot = failure.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(err) = slot.take() {
        return Err(err.into());
    }

    let mut set = repos.lock().unwrap_or_else(|e| e.into_inner());
    Ok(set.drain().collect())
}
