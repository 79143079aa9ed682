use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place. Readers never observe a
/// partially written file. Parent directories are created as needed.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) else {
        // no parent: write directly
        return fs::write(target, data);
    };
    fs::create_dir_all(dir)?;

    // time+pid+sequence suffix keeps concurrent writers in one directory apart
    static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    let tmp = dir.join(format!(".tmp_atomic_write.{:x}.{:x}.{}", std::process::id(), nanos, seq));

    // Clean up the temp file whenever a step fails.
    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, target).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

/// Return `dir/filename`, or `dir/<stem>-<n>.<ext>` for the first `n` that
/// does not exist yet, so a save never overwrites an earlier one.
pub fn unique_target(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }
    let as_path = Path::new(filename);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let ext = as_path.extension().map(|e| e.to_string_lossy().into_owned());
    (1u32..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{}-{}.{}", stem, n, ext)),
            None => dir.join(format!("{}-{}", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
