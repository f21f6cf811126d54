//! # Blueprint CLI Entry Point
//!
//! This is the main entry point for the Blueprint TUI application.
//!
//! ## Overview
//!
//! Blueprint is a terminal intake surface for product planning: describe a
//! product idea in a growing prompt field, optionally pick a tech stack and a
//! time estimate, and capture the request for planning.
//!
//! ## Usage
//!
//! ```bash
//! # Launch the intake surface
//! blueprint
//!
//! # Use a specific config file
//! blueprint --config ./blueprint.json
//!
//! # Override the configured theme for this run
//! blueprint --theme "Tokyo Night"
//!
//! # Print recently captured requests and exit
//! blueprint --history
//!
//! # Print the resolved configuration and exit
//! blueprint --debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Prompt field
//! - `Enter` - Capture the request (start planning)
//! - `Alt+Enter` - Insert a newline
//! - `Tab` - Move focus to the selector row
//! - `Ctrl+C` / `Ctrl+Q` - Quit
//!
//! ### Selector row
//! - `←` / `→` - Choose between Time and Tech Stack
//! - `Enter` / `Space` - Open/close the highlighted panel
//! - `Esc` - Back to the prompt
//!
//! ### Time panel
//! - any visible character - Edit the amount (unvalidated)
//! - `↑` / `↓` - Cycle the unit (days, weeks, months, years)
//! - `Esc` / `Enter` - Close the panel
//!
//! ### Tech stack panel
//! - `←` / `→` - Move between chips
//! - `Enter` / `Space` - Toggle the highlighted chip
//! - `Esc` - Close the panel

use blueprint::history::SubmissionLog;
use blueprint::intake::PanelVisibility;
use blueprint::ui;
use blueprint::ui::app::Focus;
use blueprint::ui::config::Config;
use blueprint::ui::theme::Theme;
use blueprint::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Blueprint - turn product ideas into build plans from your terminal
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal intake surface for product planning", long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme name for this run (overrides the configured theme)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print recently captured requests and exit
    #[arg(long)]
    history: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    // Resolve configuration: explicit file, or the XDG location
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::load(),
    };

    let theme = resolve_theme(&config, args.theme.as_deref());
    let catalog = config.catalog();

    // Debug mode: print the resolved configuration and exit
    if args.debug {
        println!("=== Resolved Configuration ===");
        println!("  Theme: {}", theme.name);
        println!("  Default time unit: {}", config.default_time_unit.label());
        println!("  Tech catalog ({} chips):", catalog.len());
        for label in catalog.labels() {
            println!("    - {label}");
        }
        return Ok(());
    }

    // History mode: print recent submissions and exit
    if args.history {
        let log = SubmissionLog::new().context("Failed to open submission history")?;
        if !log.has_entries() {
            println!("No captured requests yet.");
            return Ok(());
        }
        println!("=== Recent Requests ===");
        for entry in log.recent(blueprint::history::MAX_RECENT_SUBMISSIONS) {
            println!(
                "\n[{}] {} {}",
                entry.submitted_at.format("%Y-%m-%d %H:%M"),
                entry.request.time.magnitude,
                entry.request.time.unit.label()
            );
            println!("  {}", entry.request.prompt);
            println!("  Stack: {}", entry.request.tech.join(", "));
        }
        return Ok(());
    }

    // Open the submission log (gracefully handle errors)
    let submission_log = match SubmissionLog::new() {
        Ok(log) => Some(log),
        Err(e) => {
            eprintln!("Warning: Could not open submission history: {e}");
            None
        }
    };

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create the app sized to the current viewport
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(catalog, theme.clone(), size.width);
    app.panel.set_time_unit(config.default_time_unit);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, submission_log, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Pick the active theme: CLI override first, then the config file, falling
/// back to the default when the name is unknown.
fn resolve_theme(config: &Config, override_name: Option<&str>) -> &'static Theme {
    let name = override_name.unwrap_or(&config.theme);
    match Theme::by_name(name) {
        Some(theme) => theme,
        None => {
            eprintln!("Warning: Unknown theme '{name}', using default");
            Theme::default_theme()
        }
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut submission_log: Option<SubmissionLog>,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event(Duration::from_millis(100))?;

        // If no event, continue the loop and re-render
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        match event {
            Event::Resize(width, _) => {
                // The device class is an observed input: crossing the
                // breakpoint moves the prompt floor, so the field recomputes
                app.on_resize(width);
            }
            Event::Key(key) => {
                let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                let has_alt = key.modifiers.contains(KeyModifiers::ALT);

                // Global bindings first
                if has_ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                    app.should_quit = true;
                } else if key.code == KeyCode::Tab {
                    app.cycle_focus();
                } else {
                    match app.focus {
                        Focus::Prompt => match key.code {
                            KeyCode::Enter if has_alt => {
                                app.prompt_newline();
                            }
                            KeyCode::Enter => {
                                if let Some(request) = app.submit() {
                                    if let Some(ref mut log) = submission_log {
                                        if let Err(e) = log.record(request) {
                                            eprintln!("Warning: Failed to save request: {e}");
                                        }
                                    }
                                }
                            }
                            KeyCode::Backspace => {
                                app.prompt_pop_char();
                            }
                            KeyCode::Char(c) => {
                                app.prompt_push_char(c);
                            }
                            _ => {}
                        },
                        Focus::Toggles => match key.code {
                            KeyCode::Left => {
                                app.toggle_cursor_left();
                            }
                            KeyCode::Right => {
                                app.toggle_cursor_right();
                            }
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                app.activate_toggle();
                            }
                            KeyCode::Esc => {
                                app.focus = Focus::Prompt;
                            }
                            _ => {}
                        },
                        Focus::Panel => match app.panel.visibility {
                            PanelVisibility::Time => match key.code {
                                KeyCode::Esc | KeyCode::Enter => {
                                    app.close_panel();
                                }
                                KeyCode::Up => {
                                    app.time_unit_previous();
                                }
                                KeyCode::Down => {
                                    app.time_unit_next();
                                }
                                KeyCode::Backspace => {
                                    app.time_pop_char();
                                }
                                KeyCode::Char(c) => {
                                    app.time_push_char(c);
                                }
                                _ => {}
                            },
                            PanelVisibility::TechStack => match key.code {
                                KeyCode::Esc => {
                                    app.close_panel();
                                }
                                KeyCode::Left => {
                                    app.chip_previous();
                                }
                                KeyCode::Right => {
                                    app.chip_next();
                                }
                                KeyCode::Enter | KeyCode::Char(' ') => {
                                    app.toggle_highlighted_chip();
                                }
                                _ => {}
                            },
                            // Focus cannot rest on a closed panel, but the
                            // match must be total
                            PanelVisibility::None => {}
                        },
                    }
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader() {
        let events = vec![
            key_event(KeyCode::Char('a')),
            key_event(KeyCode::Char('b')),
            key_event(KeyCode::Enter),
        ];

        let mut reader = MockEventReader::new(events);

        // Should return events in order
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('b'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));

        // Should return None when no more events
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        // Just verify that CrosstermEventReader exists and implements the trait
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_resolve_theme_prefers_override() {
        let config = Config {
            theme: "Nord".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(&config, Some("Dracula"));
        assert_eq!(theme.name, "Dracula");
    }

    #[test]
    fn test_resolve_theme_uses_config_without_override() {
        let config = Config {
            theme: "Nord".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(&config, None);
        assert_eq!(theme.name, "Nord");
    }

    #[test]
    fn test_resolve_theme_falls_back_on_unknown_name() {
        let config = Config {
            theme: "Does Not Exist".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(&config, None);
        assert_eq!(theme.name, Theme::default_theme().name);
    }

    #[tokio::test]
    async fn test_run_application_missing_config_file_uses_defaults() {
        // load_from returns defaults for a missing file, so --debug succeeds
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/config.json")),
            theme: None,
            history: false,
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_application_rejects_malformed_config() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ this is not json").unwrap();

        let args = Args {
            config: Some(config_path),
            theme: None,
            history: false,
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = format!("{:?}", result.unwrap_err());
        assert!(err_msg.contains("Failed to load config"));
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args {
            config: None,
            theme: None,
            history: false,
            debug: false,
        };
        assert_eq!(args.config, None);
        assert_eq!(args.theme, None);
        assert!(!args.history);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parsing_with_theme() {
        let args = Args {
            config: None,
            theme: Some("Nord".to_string()),
            history: false,
            debug: false,
        };
        assert_eq!(args.theme.as_deref(), Some("Nord"));
    }
}
