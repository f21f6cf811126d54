//! # Submission Storage
//!
//! Handles persistent storage of captured blueprint requests using
//! XDG-compliant paths.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.local/share/blueprint/history.json
//! ```
//!
//! One file holds the most recent submissions, newest last.

use crate::intake::IntakeRequest;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of submissions kept on disk.
pub const MAX_RECENT_SUBMISSIONS: usize = 20;

/// A single captured submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEntry {
    /// The resolved payload at the moment of the start action.
    pub request: IntakeRequest,
    /// When the request was captured.
    pub submitted_at: DateTime<Utc>,
}

/// On-disk history, newest entry last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionHistory {
    pub entries: Vec<SubmissionEntry>,
}

impl SubmissionHistory {
    /// Append a submission, dropping the oldest entries past the cap.
    pub fn push(&mut self, request: IntakeRequest) {
        self.entries.push(SubmissionEntry {
            request,
            submitted_at: Utc::now(),
        });
        if self.entries.len() > MAX_RECENT_SUBMISSIONS {
            let excess = self.entries.len() - MAX_RECENT_SUBMISSIONS;
            self.entries.drain(..excess);
        }
    }

    /// The most recent submissions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&SubmissionEntry> {
        self.entries.iter().rev().take(limit).collect()
    }
}

/// Manages submission history with persistent storage.
#[derive(Debug)]
pub struct SubmissionLog {
    /// The file the history is persisted to.
    history_file: PathBuf,
    /// Current history contents.
    history: SubmissionHistory,
}

impl SubmissionLog {
    /// Open the log at the platform data directory, loading existing history
    /// if available.
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "blueprint")
            .context("Failed to determine application data directory")?;
        Self::with_history_file(dirs.data_dir().join("history.json"))
    }

    /// Open the log backed by a specific file.
    pub fn with_history_file(history_file: PathBuf) -> Result<Self> {
        if let Some(parent) = history_file.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        // A corrupted history file is discarded rather than blocking startup
        let history = if history_file.exists() {
            load_history(&history_file).unwrap_or_default()
        } else {
            SubmissionHistory::default()
        };

        Ok(Self {
            history_file,
            history,
        })
    }

    /// Record a submission and save to disk.
    pub fn record(&mut self, request: IntakeRequest) -> Result<()> {
        self.history.push(request);
        self.save()
    }

    /// The most recent submissions, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&SubmissionEntry> {
        self.history.recent(limit)
    }

    /// Check if anything has been recorded.
    pub fn has_entries(&self) -> bool {
        !self.history.entries.is_empty()
    }

    /// Save history to disk.
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.history)
            .context("Failed to serialize submission history")?;

        fs::write(&self.history_file, json).with_context(|| {
            format!(
                "Failed to write history file: {}",
                self.history_file.display()
            )
        })?;

        Ok(())
    }
}

/// Load history from a file.
fn load_history(path: &Path) -> Result<SubmissionHistory> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;

    let history: SubmissionHistory = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))?;

    Ok(history)
}
