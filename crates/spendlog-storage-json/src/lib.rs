use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use spendlog_core::{storage::SnapshotBackupInfo, validate_snapshot, CoreError, SnapshotStorage};
use spendlog_domain::{Expense, Snapshot, User, CURRENT_SCHEMA_VERSION};
use tracing::{debug, warn};

const SNAPSHOT_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%6f";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem locations used by [`JsonSnapshotStorage`].
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub snapshot_file: PathBuf,
    pub backup_root: PathBuf,
}

/// Filesystem-backed JSON persistence for the session snapshot and its backups.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStorage {
    snapshot_file: PathBuf,
    backup_root: PathBuf,
    retention: usize,
}

impl JsonSnapshotStorage {
    pub fn new(paths: StoragePaths) -> Result<Self, CoreError> {
        Self::with_retention(paths, DEFAULT_RETENTION)
    }

    pub fn with_retention(paths: StoragePaths, retention: usize) -> Result<Self, CoreError> {
        if let Some(parent) = paths.snapshot_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(&paths.backup_root)?;
        Ok(Self {
            snapshot_file: paths.snapshot_file,
            backup_root: paths.backup_root,
            retention: retention.max(1),
        })
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_file
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    fn snapshot_stem(&self) -> String {
        self.snapshot_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(canonical_name)
            .unwrap_or_else(|| "snapshot".into())
    }

    fn backup_existing_file(&self) -> Result<Option<PathBuf>, CoreError> {
        if !self.snapshot_file.exists() {
            return Ok(None);
        }
        fs::create_dir_all(&self.backup_root)?;
        let backup_path = self.next_backup_path(Utc::now());
        fs::copy(&self.snapshot_file, &backup_path)?;
        self.prune_backups()?;
        Ok(Some(backup_path))
    }

    /// First free backup name at or after `stamp`. Existing backups are never overwritten.
    fn next_backup_path(&self, mut stamp: DateTime<Utc>) -> PathBuf {
        let stem = self.snapshot_stem();
        loop {
            let file_name = format!(
                "{}_{}.{}",
                stem,
                stamp.format(BACKUP_TIMESTAMP_FORMAT),
                SNAPSHOT_EXTENSION
            );
            let path = self.backup_root.join(file_name);
            if !path.exists() {
                return path;
            }
            stamp += Duration::microseconds(1);
        }
    }

    fn prune_backups(&self) -> Result<(), CoreError> {
        let entries = self.list_backups()?;
        for entry in entries.into_iter().skip(self.retention) {
            debug!(path = %entry.path.display(), "pruning old snapshot backup");
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl SnapshotStorage for JsonSnapshotStorage {
    fn save(&self, expenses: &[Expense], user: &User) -> Result<(), CoreError> {
        if let Some(backup) = self.backup_existing_file()? {
            debug!(path = %backup.display(), "backed up previous snapshot");
        }
        let snapshot = Snapshot::new(expenses.to_vec(), user.clone());
        save_snapshot_to_path(&snapshot, &self.snapshot_file)
    }

    fn load_snapshot(&self) -> Result<Snapshot, CoreError> {
        load_snapshot_from_path(&self.snapshot_file)
    }

    fn list_backups(&self) -> Result<Vec<SnapshotBackupInfo>, CoreError> {
        if !self.backup_root.exists() {
            return Ok(Vec::new());
        }
        let prefix = format!("{}_", self.snapshot_stem());
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backup_root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !file_name.starts_with(&prefix) {
                continue;
            }
            let created_at = parse_backup_timestamp(file_name)
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
                .unwrap_or_else(|| "unknown".into());
            entries.push(SnapshotBackupInfo {
                id: file_name.to_string(),
                created_at,
                path: path.clone(),
            });
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &SnapshotBackupInfo) -> Result<Snapshot, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let snapshot = load_snapshot_from_path(&backup.path)?;
        save_snapshot_to_path(&snapshot, &self.snapshot_file)?;
        Ok(snapshot)
    }
}

/// Writes a snapshot to `path` via a sibling temp file and rename.
pub fn save_snapshot_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    if let Err(err) = write_atomic(&tmp, &serialize_snapshot(snapshot)?) {
        warn!(path = %tmp.display(), "failed to stage snapshot: {err}");
        return Err(err);
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a snapshot, rejecting newer schema versions and entries `record` would refuse.
pub fn load_snapshot_from_path(path: &Path) -> Result<Snapshot, CoreError> {
    let data = fs::read_to_string(path)?;
    let snapshot: Snapshot =
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
    if snapshot.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema {
            found: snapshot.schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "snapshot".into()
    } else {
        sanitized
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", SNAPSHOT_EXTENSION))?;
    let mut segments = trimmed.rsplit('_');
    let time = segments.next()?;
    let date = segments.next()?;
    // Older backups carry whole seconds only.
    if !is_digits(date, 8) || !(is_digits(time, 6) || is_digits(time, 12)) {
        return None;
    }
    let (seconds, micros) = time.split_at(6);
    let raw = format!("{}{}", date, seconds);
    let naive = NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M%S").ok()?;
    let micros: i64 = if micros.is_empty() { 0 } else { micros.parse().ok()? };
    Some(DateTime::from_naive_utc_and_offset(naive, Utc) + Duration::microseconds(micros))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

fn serialize_snapshot(snapshot: &Snapshot) -> Result<String, CoreError> {
    serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Serde(err.to_string()))
}
