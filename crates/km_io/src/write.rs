//! crates/km_io/src/write.rs
//! Atomic JSON artifact writes: serialize, write to a sibling temp file,
//! fsync, rename over the target. The display collaborator polls the output
//! path, so it must never observe a half-written payload.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::{IoError, IoResult};

/// Serialize `value` and atomically replace `path` with it.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T, pretty: bool) -> IoResult<()> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        msg: e.to_string(),
    })?;

    let tmp = tmp_sibling(path);
    let result = persist(&tmp, path, &bytes);
    if result.is_err() {
        // Leave no temp droppings behind on failure.
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn persist(tmp: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = OpenOptions::new().write(true).create_new(true).open(tmp)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    drop(f);
    fs::rename(tmp, path)?;
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fsync_dir(dir),
        _ => Ok(()),
    }
}

/// Unique sibling temp name (same filesystem, so rename is atomic).
fn tmp_sibling(target: &Path) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fname = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("artifact");
    let tmp_name = OsString::from(format!("{fname}.{pid}.{n}.tmp"));
    match target.parent() {
        Some(dir) => dir.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}

/// Fsync the directory containing the file (Unix only). No-op elsewhere.
#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    let df = OpenOptions::new().read(true).open(dir)?;
    df.sync_all()
}

#[cfg(not(unix))]
#[inline]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
