use crate::utils::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid mode '{0}'. Expected 'delete' or 'move'")]
    InvalidMode(String),

    #[error("Extension list '{0}' contains no extensions")]
    EmptyExtensions(String),
}

/// What happens to files once they are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Delete files that do not match, leave matches in place
    #[default]
    Delete,
    /// Move matches into kept_files, leave everything else untouched
    Move,
}

impl FromStr for Disposition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delete" => Ok(Disposition::Delete),
            "move" => Ok(Disposition::Move),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Delete => write!(f, "delete"),
            Disposition::Move => write!(f, "move"),
        }
    }
}

/// How blank lines in the keep-file are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Drop blank lines
    #[default]
    Skip,
    /// Keep blank lines as empty terms, which match every filename
    MatchAll,
}

/// Case-insensitive suffix allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Parse a comma-separated list such as ".sms, GG,.sg"
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let extensions: Vec<String> = list
            .split(',')
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        if extensions.is_empty() {
            return Err(ConfigError::EmptyExtensions(list.to_string()));
        }

        Ok(Self { extensions })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Check whether a filename ends with one of the allowed extensions
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }
}

/// Everything one filter run needs
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub directory: PathBuf,
    pub keep_file: PathBuf,
    pub disposition: Disposition,
    pub dry_run: bool,
    /// None means every regular file is a candidate
    pub extensions: Option<ExtensionFilter>,
    pub blank_lines: BlankLinePolicy,
}

impl FilterConfig {
    /// Build a config, applying the per-mode extension default.
    ///
    /// Delete mode falls back to `.sms` when no list is given; move mode
    /// considers every regular file.
    pub fn new(
        directory: PathBuf,
        keep_file: PathBuf,
        disposition: Disposition,
        extensions: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let extensions = match (extensions, disposition) {
            (Some(list), _) => Some(ExtensionFilter::parse(list)?),
            (None, Disposition::Delete) => Some(ExtensionFilter::parse(DEFAULT_EXTENSIONS)?),
            (None, Disposition::Move) => None,
        };

        Ok(Self {
            directory,
            keep_file,
            disposition,
            dry_run: false,
            extensions,
            blank_lines: BlankLinePolicy::default(),
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }
}
