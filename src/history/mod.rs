//! # Submission History Module
//!
//! This module persists captured blueprint requests so recent ideas can be
//! reviewed from the command line (`blueprint --history`).
//!
//! ## Storage
//!
//! History is stored in XDG-compliant locations:
//! - Linux: `~/.local/share/blueprint/history.json`
//! - macOS: `~/Library/Application Support/blueprint/history.json`
//! - Windows: `%APPDATA%\blueprint\history.json`
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "entries": [
//!     {
//!       "request": {
//!         "prompt": "A recipe box for busy households",
//!         "tech": ["React", "PostgreSQL"],
//!         "time": { "magnitude": "3", "unit": "months" }
//!       },
//!       "submitted_at": "2025-02-05T10:30:00Z"
//!     }
//!   ]
//! }
//! ```

mod storage;

pub use storage::{
    SubmissionEntry, SubmissionHistory, SubmissionLog, MAX_RECENT_SUBMISSIONS,
};
