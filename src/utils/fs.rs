use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[cfg(unix)]
const CROSS_DEVICE: Option<i32> = Some(18); // EXDEV

#[cfg(windows)]
const CROSS_DEVICE: Option<i32> = Some(17); // ERROR_NOT_SAME_DEVICE

#[cfg(not(any(unix, windows)))]
const CROSS_DEVICE: Option<i32> = None;

fn is_cross_device(err: &io::Error) -> bool {
    CROSS_DEVICE.is_some() && err.raw_os_error() == CROSS_DEVICE
}

/// Move a file, replacing `to` if it already exists.
///
/// Tries a rename first and falls back to copy + remove when the
/// destination is on another volume.
pub async fn move_file(from: &Path, to: &Path) -> Result<(), io::Error> {
    match fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            tracing::debug!(from = %from.display(), to = %to.display(), "rename crosses devices, copying");
            fs::copy(from, to).await?;
            fs::remove_file(from).await
        }
        Err(e) => Err(e),
    }
}

/// Resolve a path to an absolute one, following symlinks when the path exists.
pub async fn canonical_or_absolute(path: &Path) -> Result<PathBuf, io::Error> {
    match fs::canonicalize(path).await {
        Ok(p) => Ok(p),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if path.is_absolute() {
                Ok(path.to_path_buf())
            } else {
                Ok(std::env::current_dir()?.join(path))
            }
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_move_file_overwrites_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("a.sms");
        let to = tmp.path().join("b.sms");
        fs::write(&from, "new").await.unwrap();
        fs::write(&to, "old").await.unwrap();

        move_file(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_move_file_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let result = move_file(&tmp.path().join("nope"), &tmp.path().join("dest")).await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_canonical_or_absolute_missing_path() {
        let path = canonical_or_absolute(Path::new("does-not-exist.txt"))
            .await
            .unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("does-not-exist.txt"));
    }
}
