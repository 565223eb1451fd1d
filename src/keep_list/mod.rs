//! Keep-file loading and filename classification.

use crate::config::BlankLinePolicy;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum KeepListError {
    #[error("Keep file not found: {0}")]
    KeepFileNotFound(String),

    #[error("Failed to read keep file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of matching one filename against the keep list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Keep,
    Reject,
}

/// Ordered, lowercased keep terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepList {
    terms: Vec<String>,
}

impl KeepList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the first term contained in the lowercased filename
    pub fn find_match(&self, file_name: &str) -> Option<&str> {
        let lower = file_name.to_lowercase();
        self.terms
            .iter()
            .find(|term| lower.contains(term.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.find_match(file_name).is_some()
    }
}

/// Classify a filename: KEEP iff any term is a substring of its lowercased form
pub fn classify(file_name: &str, keep_list: &KeepList) -> Classification {
    if keep_list.matches(file_name) {
        Classification::Keep
    } else {
        Classification::Reject
    }
}

/// Parse keep-file content into a keep list
pub fn parse_keep_list(content: &str, policy: BlankLinePolicy) -> KeepList {
    let mut blank = 0usize;
    let terms: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|term| {
            if !term.is_empty() {
                return true;
            }
            blank += 1;
            policy == BlankLinePolicy::MatchAll
        })
        .collect();

    if blank > 0 {
        match policy {
            BlankLinePolicy::Skip => warn!(blank, "skipped blank keep-file lines"),
            BlankLinePolicy::MatchAll => {
                warn!(blank, "keep file has blank lines; every file will be kept")
            }
        }
    }

    KeepList { terms }
}

/// Read and parse the keep file
pub async fn load_keep_list(
    keep_file: &Path,
    policy: BlankLinePolicy,
) -> Result<KeepList, KeepListError> {
    if !keep_file.is_file() {
        return Err(KeepListError::KeepFileNotFound(
            keep_file.display().to_string(),
        ));
    }

    let content = fs::read_to_string(keep_file).await?;
    let keep_list = parse_keep_list(&content, policy);
    debug!(terms = keep_list.terms().len(), "loaded keep list");
    Ok(keep_list)
}
