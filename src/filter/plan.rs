use crate::config::FilterConfig;
use crate::keep_list::{classify, load_keep_list, Classification, KeepList, KeepListError};
use crate::utils::canonical_or_absolute;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Keep list error: {0}")]
    KeepListError(#[from] KeepListError),
}

impl From<walkdir::Error> for PlanError {
    fn from(err: walkdir::Error) -> Self {
        PlanError::IoError(err.into())
    }
}

/// A regular file eligible for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Lossy UTF-8 name, used for matching and reporting
    pub file_name: String,
    /// Name as stored on disk
    pub raw_name: OsString,
    pub path: PathBuf,
}

/// Snapshot of one directory, classified against the keep list
#[derive(Debug, Clone, Default)]
pub struct FilterPlan {
    /// Candidates whose name matches a keep term
    pub keep: Vec<Candidate>,

    /// Candidates matching no keep term
    pub reject: Vec<Candidate>,

    /// Regular files skipped by the extension filter
    pub ignored: Vec<String>,
}

impl FilterPlan {
    pub fn candidate_count(&self) -> usize {
        self.keep.len() + self.reject.len()
    }
}

/// Snapshot the directory and classify every candidate file.
///
/// Nothing is mutated here; a missing directory or keep file fails before
/// any disposition is applied.
pub async fn build_filter_plan(config: &FilterConfig) -> Result<FilterPlan, PlanError> {
    let directory = &config.directory;
    if !directory.exists() {
        return Err(PlanError::DirectoryNotFound(directory.display().to_string()));
    }
    if !directory.is_dir() {
        return Err(PlanError::NotADirectory(directory.display().to_string()));
    }

    let keep_list = load_keep_list(&config.keep_file, config.blank_lines).await?;
    let keep_file = canonical_or_absolute(&config.keep_file).await?;

    let mut plan = FilterPlan::default();

    for path in scan_directory(directory)? {
        // Follows symlinks, so a link to a regular file is a candidate
        if !path.is_file() {
            continue;
        }

        if canonical_or_absolute(&path).await? == keep_file {
            debug!(file = %path.display(), "skipping keep file");
            continue;
        }

        let Some(raw_name) = path.file_name().map(|n| n.to_os_string()) else {
            continue;
        };
        let file_name = raw_name.to_string_lossy().into_owned();

        if let Some(filter) = &config.extensions {
            if !filter.matches(&file_name) {
                plan.ignored.push(file_name);
                continue;
            }
        }

        let candidate = Candidate {
            file_name,
            raw_name,
            path,
        };
        push_classified(&mut plan, &keep_list, candidate);
    }

    debug!(
        keep = plan.keep.len(),
        reject = plan.reject.len(),
        ignored = plan.ignored.len(),
        "built filter plan"
    );

    Ok(plan)
}

fn push_classified(plan: &mut FilterPlan, keep_list: &KeepList, candidate: Candidate) {
    match classify(&candidate.file_name, keep_list) {
        Classification::Keep => plan.keep.push(candidate),
        Classification::Reject => plan.reject.push(candidate),
    }
}

/// List the direct children of a directory, sorted by name
fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>, PlanError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        entries.push(entry?.into_path());
    }

    Ok(entries)
}
