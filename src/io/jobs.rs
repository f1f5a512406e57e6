use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::types::Job;

/// Produces the list of items to frame.
pub trait JobEnumerator: Send + Sync {
    fn jobs(&self) -> Result<Vec<Job>>;
}

/// Enumerates `<root>/<collection>/<item>.png`, one job per PNG.
///
/// Collections (the catalog's days, e.g. `1`..`9`, `10+`, `event`) come out in
/// name order, items in name order within a collection.
#[derive(Debug, Clone)]
pub struct DirectoryJobs {
    root: PathBuf,
    collections: Vec<String>,
}

impl DirectoryJobs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            collections: Vec::new(),
        }
    }

    /// Restrict enumeration to the named collections; empty means all.
    pub fn with_collections(mut self, collections: Vec<String>) -> Self {
        self.collections = collections;
        self
    }

    fn wanted(&self, collection: &str) -> bool {
        self.collections.is_empty() || self.collections.iter().any(|c| c == collection)
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

fn is_png(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

impl JobEnumerator for DirectoryJobs {
    fn jobs(&self) -> Result<Vec<Job>> {
        let mut jobs = Vec::new();

        for collection_dir in sorted_entries(&self.root)? {
            if !collection_dir.is_dir() {
                debug!("Skipping non-directory: {:?}", collection_dir);
                continue;
            }
            let Some(collection) = collection_dir.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            if !self.wanted(&collection) {
                continue;
            }

            let before = jobs.len();
            for path in sorted_entries(&collection_dir)? {
                if !is_png(&path) {
                    continue;
                }
                if let Some(item) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) {
                    jobs.push(Job::new(collection.clone(), item));
                }
            }
            info!("Collection '{}': {} items", collection, jobs.len() - before);
        }

        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: PathBuf) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn lists_pngs_per_collection() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path().join("2").join("Zeta.png"));
        touch(dir.path().join("2").join("Alpha.PNG"));
        touch(dir.path().join("2").join("notes.txt"));
        touch(dir.path().join("event").join("Boss.png"));
        touch(dir.path().join("stray.png"));

        let jobs = DirectoryJobs::new(dir.path()).jobs().unwrap();
        assert_eq!(
            jobs,
            vec![
                Job::new("2", "Alpha"),
                Job::new("2", "Zeta"),
                Job::new("event", "Boss"),
            ]
        );
    }

    #[test]
    fn enumerator_can_be_shared_across_threads() {
        fn shared<T: Send + Sync + ?Sized>(_: &T) {}
        let jobs: Box<dyn JobEnumerator> = Box::new(DirectoryJobs::new("captures"));
        shared(jobs.as_ref());
    }

    #[test]
    fn filters_collections() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path().join("1").join("A.png"));
        touch(dir.path().join("10+").join("B.png"));

        let jobs = DirectoryJobs::new(dir.path())
            .with_collections(vec!["10+".to_string()])
            .jobs()
            .unwrap();
        assert_eq!(jobs, vec![Job::new("10+", "B")]);
    }
}
