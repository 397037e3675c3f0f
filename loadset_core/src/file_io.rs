//! # File I/O Module
//!
//! Draft file operations:
//! - **Atomic saves**: write to `.tmp`, sync, rename over the target
//! - **File locking**: keep two editors from changing the same draft
//! - **Version validation**: refuse drafts written by an incompatible schema
//!
//! ## File Format
//!
//! Drafts are `.lsf` files containing JSON. A lock is an OS-level exclusive
//! lock on `<draft>.lock`, which also carries JSON metadata about the holder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use loadset_core::draft::FormDraft;
//! use loadset_core::file_io::{save_draft, FileLock};
//! use std::path::Path;
//!
//! let draft = FormDraft::default();
//! let path = Path::new("beam.lsf");
//!
//! let lock = FileLock::acquire(path, "engineer@company.com")?;
//! save_draft(&draft, path)?;
//! drop(lock);
//! # Ok::<(), loadset_core::errors::FormError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::draft::{FormDraft, SCHEMA_VERSION};
use crate::errors::{FormError, FormResult};

/// Metadata written into lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was taken
    pub machine: String,
    /// Process holding the lock
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// Exclusive lock on a draft, released on drop.
///
/// The OS lock on `<draft>.lock` decides who holds the draft. The JSON
/// metadata in that file only describes the holder, so metadata left behind
/// by a crashed process is overwritten by the next editor.
pub struct FileLock {
    draft_path: PathBuf,
    lock_path: PathBuf,
    /// Holds the OS lock for as long as the guard lives
    _handle: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Take the lock for `path`.
    ///
    /// Fails with [`FormError::FileLocked`] when another handle holds the OS lock.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> FormResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // No truncate here: a losing contender must not wipe the holder's metadata
        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                FormError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        if handle.try_lock_exclusive().is_err() {
            return Err(locked_error(path, read_lock_info(&lock_path)));
        }

        if let Some(previous) = read_lock_info(&lock_path) {
            warn!(
                "taking over abandoned lock on {} left by {} (pid {})",
                path.display(),
                previous.user_id,
                previous.pid
            );
        }

        let json = serde_json::to_string_pretty(&info)?;
        handle
            .set_len(0)
            .and_then(|_| handle.seek(SeekFrom::Start(0)))
            .and_then(|_| handle.write_all(json.as_bytes()))
            .and_then(|_| handle.sync_all())
            .map_err(|e| {
                FormError::file_error("write lock", lock_path.display().to_string(), e.to_string())
            })?;

        debug!("locked {} for {}", path.display(), info.user_id);
        Ok(FileLock {
            draft_path: path.to_path_buf(),
            lock_path,
            _handle: handle,
            info,
        })
    }

    /// Current lock holder for `path`, if the OS lock is actually held
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        let handle = OpenOptions::new().read(true).open(&lock_path).ok()?;
        if handle.try_lock_exclusive().is_ok() {
            let _ = handle.unlock();
            return None;
        }
        read_lock_info(&lock_path)
    }

    /// Path of the locked draft
    pub fn draft_path(&self) -> &Path {
        &self.draft_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn locked_error(path: &Path, holder: Option<LockInfo>) -> FormError {
    match holder {
        Some(holder) => FormError::file_locked(
            path.display().to_string(),
            format!("{} ({})", holder.user_id, holder.machine),
            holder.locked_at.to_rfc3339(),
        ),
        None => FormError::file_locked(path.display().to_string(), "another process", "unknown"),
    }
}

/// `beam.lsf` -> `beam.lsf.lock`
fn lock_path_for(draft_path: &Path) -> PathBuf {
    let mut lock_path = draft_path.to_path_buf();
    let extension = draft_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a draft atomically (temp file, fsync, rename).
pub fn save_draft(draft: &FormDraft, path: &Path) -> FormResult<()> {
    let json = serde_json::to_string_pretty(draft)?;
    let tmp_path = path.with_extension("lsf.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FormError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            FormError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FormError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("saved draft to {}", path.display());
    Ok(())
}

/// Load a draft and check its schema version.
pub fn load_draft(path: &Path) -> FormResult<FormDraft> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FormError::file_error("read", path.display().to_string(), e.to_string()))?;

    let draft: FormDraft =
        serde_json::from_str(&contents).map_err(|e| FormError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&draft.meta.version)?;

    debug!(
        "loaded draft '{}' ({} load rows) from {}",
        draft.meta.label,
        draft.form.rows.len(),
        path.display()
    );
    Ok(draft)
}

/// Load a draft and report who, if anyone, holds its lock.
pub fn load_draft_with_lock_check(path: &Path) -> FormResult<(FormDraft, Option<LockInfo>)> {
    let draft = load_draft(path)?;
    Ok((draft, FileLock::check(path)))
}

/// Major versions must match; within 0.x the file's minor version may not be
/// newer than ours.
fn validate_version(file_version: &str) -> FormResult<()> {
    let mismatch = || FormError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => {
            Err(mismatch())
        }
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}
