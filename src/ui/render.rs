use crate::intake::PanelVisibility;
use crate::ui::app::{App, Focus, ToggleButton};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Paint the background before laying anything out
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg)),
        frame.area(),
    );

    // Main layout: hero + prompt + selectors + status + footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(1),                     // top padding
            Constraint::Length(4),                     // hero
            Constraint::Length(app.prompt_rows() + 2), // prompt box (borders)
            Constraint::Length(1),                     // toggle row
            Constraint::Min(0),                        // open panel
            Constraint::Length(1),                     // status / disclaimer
            Constraint::Length(1),                     // key hints
        ])
        .split(frame.area());

    render_hero(frame, app, chunks[1]);
    render_prompt(frame, app, chunks[2]);
    render_toggles(frame, app, chunks[3]);

    match app.panel.visibility {
        PanelVisibility::Time => render_time_panel(frame, app, chunks[4]),
        PanelVisibility::TechStack => render_tech_panel(frame, app, chunks[4]),
        PanelVisibility::None => {}
    }

    render_status(frame, app, chunks[5]);
    render_footer(frame, app, chunks[6]);
}

fn render_hero(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Turn ideas into blueprints",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Describe your product vision, and we'll break it down into a structured, \
             technical development plan ready for execution.",
            Style::default().fg(app.theme.fg_dim),
        )),
    ];

    let hero = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(hero, area);
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Prompt {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    let (text, style) = if app.prompt.is_empty() {
        (
            app.placeholder().to_string(),
            Style::default()
                .fg(app.theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (app.prompt.clone(), Style::default().fg(app.theme.fg))
    };

    // Keep the latest line visible once the field stops growing
    let scroll = app.prompt_line_count().saturating_sub(app.prompt_rows());

    let paragraph = Paragraph::new(text)
        .style(style)
        .scroll((scroll, 0))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(paragraph, area);
}

fn render_toggles(frame: &mut Frame, app: &App, area: Rect) {
    let time_open = app.panel.visibility == PanelVisibility::Time;
    let tech_open = app.panel.visibility == PanelVisibility::TechStack;

    let line = Line::from(vec![
        toggle_span(app, "◷ Time", ToggleButton::Time, time_open),
        Span::raw("   "),
        toggle_span(app, "</> Tech Stack", ToggleButton::TechStack, tech_open),
    ]);

    let toggles = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(toggles, area);
}

fn toggle_span(app: &App, label: &str, button: ToggleButton, open: bool) -> Span<'static> {
    let mut style = if open {
        Style::default()
            .fg(app.theme.chip_fg)
            .bg(app.theme.chip_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.fg_dim)
    };

    if app.focus == Focus::Toggles && app.toggle_cursor == button {
        style = style.add_modifier(Modifier::UNDERLINED);
        if !open {
            style = style.fg(app.theme.accent);
        }
    }

    Span::styled(format!("  {label}  "), style)
}

fn render_time_panel(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Panel {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    // Narrow centered box, like the pill under the web toggle row
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(30),
            Constraint::Min(0),
        ])
        .split(area);
    let box_area = Rect {
        height: columns[1].height.min(3),
        ..columns[1]
    };

    let magnitude_span = if app.panel.time.magnitude.is_empty() {
        Span::styled(
            "1",
            Style::default()
                .fg(app.theme.fg_dim)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            app.panel.time.magnitude.clone(),
            Style::default().fg(app.theme.fg),
        )
    };

    let line = Line::from(vec![
        magnitude_span,
        Span::styled(" │ ", Style::default().fg(app.theme.fg_dim)),
        Span::styled(
            app.panel.time.unit.label(),
            Style::default().fg(app.theme.secondary),
        ),
        Span::styled(" ↕", Style::default().fg(app.theme.fg_dim)),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time ")
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(paragraph, box_area);
}

fn render_tech_panel(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Panel {
        app.theme.accent
    } else {
        app.theme.fg_dim
    };

    let mut spans = Vec::with_capacity(app.catalog.len() * 2);
    for (i, label) in app.catalog.labels().iter().enumerate() {
        spans.push(chip_span(app, label, i));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tech Stack ")
                .border_style(Style::default().fg(border_color)),
        );

    frame.render_widget(paragraph, area);
}

fn chip_span(app: &App, label: &str, index: usize) -> Span<'static> {
    let selected = app.panel.tech.is_selected(label);

    let mut style = if selected {
        Style::default()
            .fg(app.theme.chip_fg)
            .bg(app.theme.chip_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.fg_dim)
    };

    if app.focus == Focus::Panel && index == app.chip_cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
        if !selected {
            style = style.fg(app.theme.accent);
        }
    }

    Span::styled(format!(" {label} "), style)
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(app.theme.success),
        )),
        None => Line::from(Span::styled(
            "Press Enter to start planning. Generated plans are editable.",
            Style::default().fg(app.theme.fg_dim),
        )),
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.focus, app.panel.visibility) {
        (Focus::Prompt, _) => {
            "[Enter] Start planning  [Alt+Enter] New line  [Tab] Selectors  [Ctrl+C] Quit"
        }
        (Focus::Toggles, _) => "[←→] Choose  [Enter] Open/Close  [Tab] Next  [Ctrl+C] Quit",
        (Focus::Panel, PanelVisibility::Time) => {
            "[Type] Amount  [↑↓] Unit  [Esc] Close  [Tab] Next"
        }
        (Focus::Panel, _) => "[←→] Chip  [Space/Enter] Toggle  [Esc] Close  [Tab] Next",
    };

    let footer = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.fg_dim));

    frame.render_widget(footer, area);
}
