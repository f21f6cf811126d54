//! # UI Module
//!
//! This module provides the terminal user interface for the intake surface.
//!
//! ## Components
//!
//! - [`App`] - Session state (prompt text, focus, open panel, chip cursor)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`mod@theme`] - Semantic color themes
//! - [`mod@config`] - Persisted user configuration (theme, tech catalog)
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Turn ideas into blueprints          │
//! │        (subtitle describing the product)         │
//! │ ┌─────────────────────────────────────────────┐ │
//! │ │ Describe your product idea...               │ │  ← grows with content
//! │ └─────────────────────────────────────────────┘ │
//! │            ◷ Time      </> Tech Stack            │
//! │ ┌─────────────────────────────────────────────┐ │
//! │ │  Suggest me  Next.js  React  Express  ...   │ │  ← one panel at a time
//! │ └─────────────────────────────────────────────┘ │
//! │        Press Enter to start planning.            │
//! │        [Tab] Selectors  [Ctrl+C] Quit            │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Auto-growing prompt field (clamped, then scrolling)
//! - Mutually exclusive time / tech-stack panels
//! - Tech chip multi-select with a "Suggest me" fallback
//! - Focus switching between regions with Tab

pub mod app;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
