//! Application state tests
//!
//! Tests for session state management including prompt growth, focus
//! cycling, panel activation, and submission payloads.

use blueprint::intake::{PanelVisibility, TechCatalog, TimeUnit};
use blueprint::ui::app::{Focus, ToggleButton, MOBILE_BREAKPOINT};
use blueprint::ui::theme::Theme;
use blueprint::ui::App;

/// Helper to create a test app on a desktop-sized viewport
fn create_test_app() -> App {
    let catalog = TechCatalog::new(["React", "Vue", "PostgreSQL"]);
    App::new(catalog, Theme::default_theme().clone(), 100)
}

#[tokio::test]
async fn test_empty_prompt_sits_at_one_row() {
    let app = create_test_app();
    assert_eq!(app.prompt_rows(), 1);
    // Desktop floor
    assert_eq!(app.field.height(), 28);
}

#[tokio::test]
async fn test_prompt_grows_with_content() {
    let mut app = create_test_app();
    let single_row = app.prompt_rows();

    // Three explicit lines need three rows
    app.prompt_push_char('a');
    app.prompt_newline();
    app.prompt_push_char('b');
    app.prompt_newline();
    app.prompt_push_char('c');

    assert_eq!(app.prompt_rows(), single_row + 2);
}

#[tokio::test]
async fn test_prompt_growth_caps_then_scrolls() {
    let mut app = create_test_app();

    for _ in 0..30 {
        app.prompt_push_char('x');
        app.prompt_newline();
    }

    // 200px ceiling over the 28px desktop floor
    assert_eq!(app.field.height(), 200);
    assert_eq!(app.prompt_rows(), 7);
    assert!(app.prompt_line_count() > app.prompt_rows());
}

#[tokio::test]
async fn test_resize_across_breakpoint_moves_the_floor() {
    let mut app = create_test_app();
    assert_eq!(app.field.height(), 28);

    app.on_resize(MOBILE_BREAKPOINT - 10);
    assert_eq!(app.field.height(), 24);
    assert_eq!(app.placeholder(), "Describe your product idea...");

    app.on_resize(120);
    assert_eq!(app.field.height(), 28);
}

#[tokio::test]
async fn test_mobile_ceiling_allows_an_extra_row() {
    let mut app = create_test_app();
    app.on_resize(MOBILE_BREAKPOINT - 10);

    for _ in 0..30 {
        app.prompt_push_char('x');
        app.prompt_newline();
    }

    // 200 / 24 rounds down to 8 rows
    assert_eq!(app.prompt_rows(), 8);
}

#[tokio::test]
async fn test_focus_cycle_skips_closed_panel() {
    let mut app = create_test_app();
    assert_eq!(app.focus, Focus::Prompt);

    app.cycle_focus();
    assert_eq!(app.focus, Focus::Toggles);

    // No panel open, so Tab returns to the prompt
    app.cycle_focus();
    assert_eq!(app.focus, Focus::Prompt);
}

#[tokio::test]
async fn test_focus_cycle_visits_open_panel() {
    let mut app = create_test_app();
    app.cycle_focus();
    app.activate_toggle();
    assert_eq!(app.panel.visibility, PanelVisibility::Time);
    assert_eq!(app.focus, Focus::Panel);

    app.cycle_focus();
    assert_eq!(app.focus, Focus::Prompt);

    app.cycle_focus();
    assert_eq!(app.focus, Focus::Toggles);

    app.cycle_focus();
    assert_eq!(app.focus, Focus::Panel);
}

#[tokio::test]
async fn test_activate_toggle_opens_then_closes() {
    let mut app = create_test_app();
    app.focus = Focus::Toggles;
    app.toggle_cursor = ToggleButton::TechStack;

    app.activate_toggle();
    assert_eq!(app.panel.visibility, PanelVisibility::TechStack);
    assert_eq!(app.focus, Focus::Panel);

    // Activating the same toggle again closes the panel
    app.toggle_cursor = ToggleButton::TechStack;
    app.activate_toggle();
    assert_eq!(app.panel.visibility, PanelVisibility::None);
    assert_eq!(app.focus, Focus::Toggles);
}

#[tokio::test]
async fn test_switching_toggles_swaps_panels() {
    let mut app = create_test_app();
    app.focus = Focus::Toggles;

    app.toggle_cursor = ToggleButton::Time;
    app.activate_toggle();
    assert_eq!(app.panel.visibility, PanelVisibility::Time);

    app.toggle_cursor = ToggleButton::TechStack;
    app.activate_toggle();
    assert_eq!(app.panel.visibility, PanelVisibility::TechStack);
}

#[tokio::test]
async fn test_chip_navigation_wraps() {
    let mut app = create_test_app();
    // Catalog: sentinel + 3 concrete labels
    assert_eq!(app.catalog.len(), 4);

    app.chip_previous();
    assert_eq!(app.chip_cursor, 3);

    app.chip_next();
    assert_eq!(app.chip_cursor, 0);

    app.chip_next();
    assert_eq!(app.chip_cursor, 1);
}

#[tokio::test]
async fn test_highlighted_chip_toggle_updates_selection() {
    let mut app = create_test_app();
    app.chip_cursor = 1; // "React"
    app.toggle_highlighted_chip();
    assert_eq!(app.panel.tech.labels(), &["React"]);

    // The sentinel chip resets the selection
    app.chip_cursor = 0;
    app.toggle_highlighted_chip();
    assert!(app.panel.tech.is_suggest());
}

#[tokio::test]
async fn test_submit_requires_a_prompt() {
    let mut app = create_test_app();
    assert!(app.submit().is_none());
    assert!(app.status.is_some());

    app.prompt_push_char(' ');
    assert!(app.submit().is_none());
}

#[tokio::test]
async fn test_submit_snapshots_selector_state() {
    let mut app = create_test_app();
    for c in "A dog walking app".chars() {
        app.prompt_push_char(c);
    }
    app.panel.toggle_tech("React");
    app.panel.toggle_tech("PostgreSQL");
    app.panel.set_time_magnitude("6");
    app.panel.set_time_unit(TimeUnit::Weeks);

    let request = app.submit().expect("prompt is non-empty");
    assert_eq!(request.prompt, "A dog walking app");
    assert_eq!(request.tech, vec!["React", "PostgreSQL"]);
    assert_eq!(request.time.magnitude, "6");
    assert_eq!(request.time.unit, TimeUnit::Weeks);
    assert_eq!(app.status.as_deref(), Some("Blueprint request captured"));
}

#[tokio::test]
async fn test_submit_with_no_explicit_stack_sends_sentinel() {
    let mut app = create_test_app();
    app.prompt_push_char('x');

    let request = app.submit().expect("prompt is non-empty");
    assert_eq!(request.tech, vec!["Suggest me"]);
}
