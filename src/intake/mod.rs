//! # Intake Module
//!
//! Core interaction state for the product-idea intake surface, kept free of
//! any terminal dependency so it can be driven and tested headless.
//!
//! ## Components
//!
//! | Unit | State it owns |
//! |------|---------------|
//! | [`SelectionPanel`] | Open auxiliary panel, tech multi-select, time estimate |
//! | [`GrowField`] | Clamped height of the growable prompt field |
//! | [`TechCatalog`] | Injected, ordered list of selectable tech labels |
//!
//! Every operation is total: no input (unknown labels, empty or non-numeric
//! magnitudes, arbitrary content extents) can make them fail. Validation
//! belongs to whatever consumes an [`IntakeRequest`].

pub mod catalog;
pub mod field;
pub mod selector;

pub use catalog::{TechCatalog, SUGGEST_LABEL};
pub use field::{clamp_height, DeviceClass, FieldLimits, GrowField};
pub use selector::{PanelVisibility, SelectionPanel, TechSelection, TimeSpec, TimeUnit};

use serde::{Deserialize, Serialize};

/// The resolved payload handed to the submission sink when the user starts
/// planning: the prompt text plus the selector values at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRequest {
    /// The product idea as typed.
    pub prompt: String,
    /// Selected tech labels in click order, or just the sentinel.
    pub tech: Vec<String>,
    /// Time estimate as typed; the magnitude may be empty or non-numeric.
    pub time: TimeSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trips_through_json() {
        let request = IntakeRequest {
            prompt: "A recipe box for households".to_string(),
            tech: vec!["React".to_string(), "PostgreSQL".to_string()],
            time: TimeSpec {
                magnitude: "3".to_string(),
                unit: TimeUnit::Weeks,
            },
        };

        let json = serde_json::to_string(&request).expect("serialize");
        let parsed: IntakeRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, request);
    }
}
