//! File-backed task storage.
//!
//! [`TaskStore`] binds the [`codec`](crate::codec) to a path on disk. The
//! file is always rewritten wholesale; there is no incremental update.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec::{self, MalformedLine, RecordLayout};
use crate::error::Result;
use crate::task::Task;

/// Temporary file suffix for atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// Tasks read back from disk, plus any lines that had to be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub tasks: Vec<Task>,
    pub malformed: Vec<MalformedLine>,
    /// True when the file did not exist and was created by this load.
    pub created: bool,
}

/// Task file at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
    layout: RecordLayout,
}

impl TaskStore {
    /// Creates a store for the given file.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: RecordLayout::default(),
        }
    }

    /// Sets the record layout used by [`save`](Self::save).
    #[must_use]
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// The file that saves actually replace: symlinks are followed so the
    /// link itself survives. Falls back to the configured path when it
    /// cannot be resolved yet.
    fn target_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn tmp_path(target: &Path) -> PathBuf {
        let mut name = target
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(TMP_SUFFIX);
        target.with_file_name(name)
    }

    /// Loads tasks from the file.
    ///
    /// A missing file is created empty and the session starts with the
    /// single placeholder task, which is not written until the next save.
    /// Any other read failure is returned. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD rather than failing the whole file.
    pub fn load(&self) -> Result<Loaded> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Task file {} not found, creating it", self.path.display());
                fs::write(&self.path, "")?;
                return Ok(Loaded {
                    tasks: vec![Task::placeholder()],
                    malformed: Vec::new(),
                    created: true,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let decoded = codec::decode(&String::from_utf8_lossy(&bytes));
        for line in &decoded.malformed {
            warn!(
                "Skipping malformed line {} in {}: {:?}",
                line.line_number,
                self.path.display(),
                line.content
            );
        }
        debug!(
            "Loaded {} task(s) from {}",
            decoded.tasks.len(),
            self.path.display()
        );

        Ok(Loaded {
            tasks: decoded.tasks,
            malformed: decoded.malformed,
            created: false,
        })
    }

    /// Overwrites the file with the given tasks.
    ///
    /// Content goes to a temporary sibling first and is renamed into place,
    /// so a failed write leaves the previous file intact. If the path is a
    /// symlink its target is replaced, and an existing file keeps its
    /// permissions.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let target = self.target_path();
        let tmp_path = Self::tmp_path(&target);
        let content = codec::encode(tasks, self.layout);
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

        let write = || -> Result<()> {
            let mut tmp_file = fs::File::create(&tmp_path)?;
            tmp_file.write_all(content.as_bytes())?;
            tmp_file.sync_all()?;
            if let Some(permissions) = permissions {
                fs::set_permissions(&tmp_path, permissions)?;
            }
            fs::rename(&tmp_path, &target)?;
            Ok(())
        };

        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Whether the file currently holds any line at all.
    ///
    /// An unreadable or missing file counts as empty.
    #[must_use]
    pub fn has_records(&self) -> bool {
        fs::read(&self.path)
            .map(|bytes| !bytes.is_empty())
            .unwrap_or(false)
    }
}
