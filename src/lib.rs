//! Blueprint TUI - A terminal intake surface for turning product ideas into
//! build plans
//!
//! This library provides the interaction state for the intake surface (panel
//! selection, tech-stack multi-select, auto-growing prompt field), the
//! terminal UI on top of it, and persistence for captured requests.

pub mod history;
pub mod intake;
pub mod ui;
