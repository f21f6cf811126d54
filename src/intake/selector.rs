//! # Selection Panel
//!
//! Interaction state for the auxiliary selector row under the prompt: which
//! panel is open (time estimate or tech stack), the tech-stack multi-select
//! with its "Suggest me" fallback, and the free-form time estimate.
//!
//! Every operation here is total. Unknown labels, empty magnitudes and
//! non-numeric text are all accepted as-is; whether a value is usable is the
//! submission side's problem, so the interaction layer never blocks input or
//! surfaces an error.

use serde::{Deserialize, Serialize};

use super::catalog::SUGGEST_LABEL;

/// Which auxiliary panel is open below the toggle row.
///
/// A single tagged value, so "both panels open" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    /// Neither panel is open.
    #[default]
    None,
    /// The time-estimate panel is open.
    Time,
    /// The tech-stack chip panel is open.
    TechStack,
}

/// Unit for the time estimate dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Weeks,
    #[default]
    Months,
    Years,
}

impl TimeUnit {
    /// All units in dropdown order.
    pub fn all() -> [TimeUnit; 4] {
        [
            TimeUnit::Days,
            TimeUnit::Weeks,
            TimeUnit::Months,
            TimeUnit::Years,
        ]
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Months => "Months",
            TimeUnit::Years => "Years",
        }
    }

    /// The unit after this one, wrapping around.
    pub fn next(self) -> TimeUnit {
        match self {
            TimeUnit::Days => TimeUnit::Weeks,
            TimeUnit::Weeks => TimeUnit::Months,
            TimeUnit::Months => TimeUnit::Years,
            TimeUnit::Years => TimeUnit::Days,
        }
    }

    /// The unit before this one, wrapping around.
    pub fn previous(self) -> TimeUnit {
        match self {
            TimeUnit::Days => TimeUnit::Years,
            TimeUnit::Weeks => TimeUnit::Days,
            TimeUnit::Months => TimeUnit::Weeks,
            TimeUnit::Years => TimeUnit::Months,
        }
    }
}

/// Free-form time estimate.
///
/// The magnitude is whatever the user typed. It is not required to be
/// numeric, positive, or even non-empty here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSpec {
    pub magnitude: String,
    pub unit: TimeUnit,
}

/// Multi-selection over tech labels with the "Suggest me" fallback.
///
/// Invariants, both maintained by [`TechSelection::toggle`]:
/// - the selection is never empty; with nothing picked it holds exactly the
///   sentinel,
/// - the sentinel never coexists with a concrete label.
///
/// Insertion order of concrete labels is preserved so payloads render in
/// click order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechSelection {
    selected: Vec<String>,
}

impl TechSelection {
    /// Start with no explicit preference.
    pub fn new() -> Self {
        Self {
            selected: vec![SUGGEST_LABEL.to_string()],
        }
    }

    /// Flip a label in or out of the selection.
    ///
    /// Toggling the sentinel resets to exactly the sentinel, regardless of
    /// prior state. Toggling anything else adds or removes it, drops the
    /// sentinel, and falls back to the sentinel if the selection would end up
    /// empty. Labels outside the configured catalog are accepted unchanged.
    pub fn toggle(&mut self, label: &str) {
        if label == SUGGEST_LABEL {
            self.selected.clear();
            self.selected.push(SUGGEST_LABEL.to_string());
            return;
        }

        if let Some(pos) = self.selected.iter().position(|t| t == label) {
            self.selected.remove(pos);
        } else {
            self.selected.push(label.to_string());
        }

        self.selected.retain(|t| t != SUGGEST_LABEL);

        if self.selected.is_empty() {
            self.selected.push(SUGGEST_LABEL.to_string());
        }
    }

    /// Whether a label is currently selected (for chip highlighting).
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|t| t == label)
    }

    /// Selected labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.selected
    }

    /// True while the selection is only the sentinel.
    pub fn is_suggest(&self) -> bool {
        self.selected.len() == 1 && self.selected[0] == SUGGEST_LABEL
    }
}

impl Default for TechSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns panel visibility plus the two auxiliary inputs.
#[derive(Debug, Clone, Default)]
pub struct SelectionPanel {
    pub visibility: PanelVisibility,
    pub tech: TechSelection,
    pub time: TimeSpec,
}

impl SelectionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the time panel, or close it if it is already open.
    ///
    /// Only visibility changes; the stored tech selection and time estimate
    /// are untouched.
    pub fn toggle_time_panel(&mut self) {
        self.visibility = match self.visibility {
            PanelVisibility::Time => PanelVisibility::None,
            _ => PanelVisibility::Time,
        };
    }

    /// Open the tech-stack panel, or close it if it is already open.
    pub fn toggle_tech_panel(&mut self) {
        self.visibility = match self.visibility {
            PanelVisibility::TechStack => PanelVisibility::None,
            _ => PanelVisibility::TechStack,
        };
    }

    /// Flip a tech chip. See [`TechSelection::toggle`].
    pub fn toggle_tech(&mut self, label: &str) {
        self.tech.toggle(label);
    }

    /// Replace the time magnitude with whatever was typed.
    pub fn set_time_magnitude(&mut self, text: impl Into<String>) {
        self.time.magnitude = text.into();
    }

    pub fn set_time_unit(&mut self, unit: TimeUnit) {
        self.time.unit = unit;
    }
}
