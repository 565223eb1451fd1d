use crate::config::{Disposition, FilterConfig};
use crate::utils::{get_kept_path, move_file};
use super::plan::{build_filter_plan, FilterPlan, PlanError};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Failed to delete {path}: {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {path}: {source}")]
    MoveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Plan error: {0}")]
    PlanError(#[from] PlanError),
}

/// Outcome of applying a filter plan
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    pub disposition: Disposition,
    pub dry_run: bool,
    /// Files matching the keep list, in scan order
    pub kept: Vec<String>,
    /// Rejected files; deleted unless this is a dry run
    pub deleted: Vec<String>,
    /// Kept files relocated into the destination
    pub moved: Vec<String>,
    /// Files skipped by the extension filter
    pub ignored: Vec<String>,
    /// kept_files folder, move mode only
    pub destination: Option<PathBuf>,
}

/// Apply the configured disposition to a plan.
///
/// Files are processed one at a time. The first failure aborts the run and
/// files already handled stay as they are.
pub async fn execute_filter_plan(
    config: &FilterConfig,
    plan: FilterPlan,
) -> Result<FilterResult, ExecuteError> {
    let mut result = FilterResult {
        disposition: config.disposition,
        dry_run: config.dry_run,
        kept: plan.keep.iter().map(|c| c.file_name.clone()).collect(),
        ignored: plan.ignored,
        ..Default::default()
    };

    match config.disposition {
        Disposition::Delete => {
            for candidate in &plan.reject {
                if !config.dry_run {
                    fs::remove_file(&candidate.path)
                        .await
                        .map_err(|source| ExecuteError::DeleteFailed {
                            path: candidate.path.display().to_string(),
                            source,
                        })?;
                    info!(file = %candidate.file_name, "deleted");
                }
                result.deleted.push(candidate.file_name.clone());
            }
        }
        Disposition::Move => {
            let kept_path = get_kept_path(&config.directory);

            if !config.dry_run && !plan.keep.is_empty() && !kept_path.is_dir() {
                fs::create_dir_all(&kept_path)
                    .await
                    .map_err(|source| ExecuteError::CreateDirFailed {
                        path: kept_path.display().to_string(),
                        source,
                    })?;
                info!(path = %kept_path.display(), "created kept folder");
            }

            for candidate in &plan.keep {
                if !config.dry_run {
                    let target = kept_path.join(&candidate.raw_name);
                    move_file(&candidate.path, &target)
                        .await
                        .map_err(|source| ExecuteError::MoveFailed {
                            path: candidate.path.display().to_string(),
                            source,
                        })?;
                    info!(file = %candidate.file_name, "moved");
                    result.moved.push(candidate.file_name.clone());
                }
            }

            result.destination = Some(kept_path);
        }
    }

    Ok(result)
}

/// Plan and execute a full filter run
pub async fn run_filter(config: &FilterConfig) -> Result<FilterResult, ExecuteError> {
    let plan = build_filter_plan(config).await?;
    execute_filter_plan(config, plan).await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup(files: &[&str], keep: &str) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for file in files {
            fs::write(tmp.path().join(file), "rom").await.unwrap();
        }
        fs::write(tmp.path().join("keep.txt"), keep).await.unwrap();
        tmp
    }

    fn config(tmp: &tempfile::TempDir, disposition: Disposition) -> FilterConfig {
        FilterConfig::new(
            tmp.path().to_path_buf(),
            tmp.path().join("keep.txt"),
            disposition,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_delete_mode_dry_run_records_rejects() {
        let tmp = setup(&["Sonic.sms", "Tetris.sms"], "sonic").await;
        let config = config(&tmp, Disposition::Delete).with_dry_run(true);

        let result = run_filter(&config).await.unwrap();

        assert_eq!(result.kept, vec!["Sonic.sms"]);
        assert_eq!(result.deleted, vec!["Tetris.sms"]);
        assert!(tmp.path().join("Tetris.sms").exists());
    }

    #[tokio::test]
    async fn test_move_mode_no_matches_creates_no_folder() {
        let tmp = setup(&["Tetris.sms"], "sonic").await;
        let config = config(&tmp, Disposition::Move);

        let result = run_filter(&config).await.unwrap();

        assert!(result.kept.is_empty());
        assert!(result.moved.is_empty());
        assert!(!tmp.path().join("kept_files").exists());
        assert!(tmp.path().join("Tetris.sms").exists());
    }
}
