//! Log file location and rotation.
//!
//! The log lives in the platform cache directory (XDG on Linux, standard
//! locations on macOS/Windows) or, failing that, in the working directory.
//! Both locations are rotated the same way.

use std::fs::{self, File};
use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;

use crate::error::DemoError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabula";
const APPLICATION: &str = "tabula-demo";

/// Archived logs kept by default.
pub const KEEP_LOGS: usize = 25;

/// The demo's log file and its archived predecessors.
///
/// The current log is `<dir>/<stem>.log`; archives sit next to it as
/// `<stem>.<timestamp>.log`, so name order is age order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    dir: PathBuf,
    stem: String,
}

impl LogFile {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    /// `latest.log` in the cache directory, or `./tabula-demo.log`.
    ///
    /// - Linux: `$XDG_CACHE_HOME/tabula-demo` or `~/.cache/tabula-demo`
    /// - macOS: `~/Library/Caches/dev.tabula.tabula-demo`
    /// - Windows: `C:\Users\<User>\AppData\Local\tabula\tabula-demo\cache`
    pub fn locate() -> Self {
        match ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
            Some(dirs) => Self::new(dirs.cache_dir(), "latest"),
            None => Self::new(".", APPLICATION),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.stem))
    }

    fn archive_path(&self, stamp: &str) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.stem, stamp))
    }

    /// Archived logs, oldest first.
    pub fn archives(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let prefix = format!("{}.", self.stem);
        let current = format!("{}.log", self.stem);

        let mut archives: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                let name = e.file_name();
                let name = name.to_string_lossy();
                name.starts_with(&prefix) && name.ends_with(".log") && name != current
            })
            .map(|e| e.path())
            .collect();
        archives.sort();
        archives
    }

    /// Archive the current log under `stamp` and prune all but the newest
    /// `keep` archives. Failures are logged and otherwise ignored.
    pub fn rotate_as(&self, stamp: &str, keep: usize) {
        let current = self.path();
        if current.exists() {
            let archived = self.archive_path(stamp);
            if let Err(e) = fs::rename(&current, &archived) {
                warn!("Could not archive {}: {}", current.display(), e);
            }
        }

        let archives = self.archives();
        let excess = archives.len().saturating_sub(keep);
        for old in &archives[..excess] {
            if let Err(e) = fs::remove_file(old) {
                warn!("Could not remove {}: {}", old.display(), e);
            }
        }
    }

    /// Rotate using the current local time as the archive stamp.
    pub fn rotate(&self, keep: usize) {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S-%3f").to_string();
        self.rotate_as(&stamp, keep);
    }

    /// Create the directory if needed and truncate the current log.
    pub fn create(&self) -> Result<File, DemoError> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir).map_err(|e| DemoError::io(&self.dir, e))?;
        }
        let path = self.path();
        File::create(&path).map_err(|e| DemoError::io(&path, e))
    }
}
