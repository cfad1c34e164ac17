//! Size-rotated, append-only log file
//!
//! Each write goes straight to the file. When the next write would take the
//! file to `max_bytes` or beyond, the file is rotated first.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{VeeamrunError, VeeamrunResult};

/// Log file writer with size-based rotation
///
/// Rotated files are named after the active file with a numeric suffix; `.1`
/// is always the most recent. At most `backups` rotated files are kept. With
/// zero backups or a zero threshold the file is never rotated.
#[derive(Debug)]
pub struct RotatingFile {
    /// Path to the active log file
    path: PathBuf,
    /// Rotation threshold, 0 disables rotation
    max_bytes: u64,
    /// Number of rotated files kept
    backups: usize,
    file: File,
    /// Current size of the active file
    size: u64,
}

impl RotatingFile {
    /// Open (or create) the log file at `path` for appending
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64, backups: usize) -> VeeamrunResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    VeeamrunError::Log(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = open_append(&path).map_err(|e| {
            VeeamrunError::Log(format!("Failed to open log file {}: {}", path.display(), e))
        })?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            path,
            max_bytes,
            backups,
            file,
            size,
        })
    }

    /// Get the path to the active log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the rotated file with the given index (`veeamrun.log.3`)
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// No rotation without backups: the file keeps growing.
    fn should_rotate(&self, incoming: usize) -> bool {
        self.max_bytes > 0
            && self.backups > 0
            && self.size > 0
            && self.size + incoming as u64 >= self.max_bytes
    }

    /// Shift every rotated file up by one and move the active file to `.1`
    fn rotate(&mut self) -> io::Result<()> {
        for index in (1..self.backups).rev() {
            let source = self.backup_path(index);
            if source.exists() {
                let target = self.backup_path(index + 1);
                if target.exists() {
                    fs::remove_file(&target)?;
                }
                fs::rename(&source, &target)?;
            }
        }

        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first)?;
        }
        fs::rename(&self.path, &first)?;

        self.file = open_append(&self.path)?;
        self.size = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len()) {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
