use crate::intake::{
    DeviceClass, GrowField, IntakeRequest, PanelVisibility, SelectionPanel, TechCatalog,
};
use crate::ui::theme::Theme;

/// Viewport width (columns) below which the surface is treated as mobile.
pub const MOBILE_BREAKPOINT: u16 = 60;

/// Columns of chrome around the prompt text: outer margin, borders and inner
/// padding, mirrored by the render layout.
const PROMPT_CHROME_COLS: u16 = 6;

/// Which region receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Prompt,
    Toggles,
    Panel,
}

/// The two toggle buttons under the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleButton {
    Time,
    TechStack,
}

pub struct App {
    pub prompt: String,
    pub panel: SelectionPanel,
    pub field: GrowField,
    pub catalog: TechCatalog,
    pub theme: Theme,
    pub focus: Focus,
    pub toggle_cursor: ToggleButton,
    pub chip_cursor: usize,
    pub status: Option<String>,
    pub should_quit: bool,
    viewport_width: u16,
}

impl App {
    pub fn new(catalog: TechCatalog, theme: Theme, viewport_width: u16) -> Self {
        let device = device_class_for_width(viewport_width);
        let mut app = Self {
            prompt: String::new(),
            panel: SelectionPanel::new(),
            field: GrowField::new(device),
            catalog,
            theme,
            focus: Focus::Prompt,
            toggle_cursor: ToggleButton::Time,
            chip_cursor: 0,
            status: None,
            should_quit: false,
            viewport_width,
        };
        app.refresh_field();
        app
    }

    // -- Prompt editing -----------------------------------------------------

    pub fn prompt_push_char(&mut self, c: char) {
        self.prompt.push(c);
        self.status = None;
        self.refresh_field();
    }

    pub fn prompt_pop_char(&mut self) {
        self.prompt.pop();
        self.refresh_field();
    }

    pub fn prompt_newline(&mut self) {
        self.prompt.push('\n');
        self.refresh_field();
    }

    /// Placeholder shown while the prompt is empty.
    pub fn placeholder(&self) -> &'static str {
        match self.field.device() {
            DeviceClass::Mobile => "Describe your product idea...",
            DeviceClass::Desktop => {
                "Describe your product idea in detail including features, and goals..."
            }
        }
    }

    // -- Viewport -----------------------------------------------------------

    /// Resize notification from the terminal. Both the device class and the
    /// wrap width may have moved, so the field height is recomputed either
    /// way.
    pub fn on_resize(&mut self, width: u16) {
        self.viewport_width = width;
        let device = device_class_for_width(width);
        if device != self.field.device() {
            self.field.on_device_class_change(device);
        }
        self.refresh_field();
    }

    /// Columns available to prompt text at the current viewport width.
    pub fn prompt_wrap_width(&self) -> u16 {
        self.viewport_width.saturating_sub(PROMPT_CHROME_COLS).max(1)
    }

    /// Lines the prompt occupies at the current wrap width (for scrolling
    /// the view to the latest line once the ceiling is hit).
    pub fn prompt_line_count(&self) -> u16 {
        wrapped_line_count(&self.prompt, self.prompt_wrap_width())
    }

    /// Rendered height of the prompt text, in rows.
    ///
    /// The field model works in pixels with one wrapped line scaled to the
    /// device floor, so the floor is exactly one row and the 200px ceiling
    /// yields 7 rows on desktop, 8 on mobile.
    pub fn prompt_rows(&self) -> u16 {
        (self.field.height() / self.px_per_line()).max(1)
    }

    fn px_per_line(&self) -> u16 {
        self.field.limits().min_for(self.field.device()).max(1)
    }

    fn refresh_field(&mut self) {
        let lines = wrapped_line_count(&self.prompt, self.prompt_wrap_width());
        let natural = lines.saturating_mul(self.px_per_line());
        self.field.on_content_change(natural);
    }

    // -- Focus & panels -----------------------------------------------------

    /// Tab order: prompt, toggle row, then the open panel if there is one.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Prompt => Focus::Toggles,
            Focus::Toggles => {
                if self.panel.visibility == PanelVisibility::None {
                    Focus::Prompt
                } else {
                    Focus::Panel
                }
            }
            Focus::Panel => Focus::Prompt,
        };
    }

    pub fn toggle_cursor_left(&mut self) {
        self.toggle_cursor = ToggleButton::Time;
    }

    pub fn toggle_cursor_right(&mut self) {
        self.toggle_cursor = ToggleButton::TechStack;
    }

    /// Activate the highlighted toggle button. Opening a panel moves focus
    /// into it; closing one keeps focus on the toggle row.
    pub fn activate_toggle(&mut self) {
        match self.toggle_cursor {
            ToggleButton::Time => self.panel.toggle_time_panel(),
            ToggleButton::TechStack => self.panel.toggle_tech_panel(),
        }
        if self.panel.visibility == PanelVisibility::None {
            self.focus = Focus::Toggles;
        } else {
            self.focus = Focus::Panel;
            self.chip_cursor = 0;
        }
    }

    /// Close whichever panel is open and return focus to the toggle row.
    pub fn close_panel(&mut self) {
        match self.panel.visibility {
            PanelVisibility::Time => self.panel.toggle_time_panel(),
            PanelVisibility::TechStack => self.panel.toggle_tech_panel(),
            PanelVisibility::None => {}
        }
        self.focus = Focus::Toggles;
    }

    // -- Tech chip navigation -----------------------------------------------

    pub fn chip_next(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            self.chip_cursor = (self.chip_cursor + 1) % count;
        }
    }

    pub fn chip_previous(&mut self) {
        let count = self.catalog.len();
        if count > 0 {
            if self.chip_cursor > 0 {
                self.chip_cursor -= 1;
            } else {
                self.chip_cursor = count - 1;
            }
        }
    }

    pub fn toggle_highlighted_chip(&mut self) {
        if let Some(label) = self.catalog.get(self.chip_cursor) {
            self.panel.tech.toggle(label);
        }
    }

    // -- Time panel editing -------------------------------------------------

    pub fn time_push_char(&mut self, c: char) {
        let mut magnitude = self.panel.time.magnitude.clone();
        magnitude.push(c);
        self.panel.set_time_magnitude(magnitude);
    }

    pub fn time_pop_char(&mut self) {
        let mut magnitude = self.panel.time.magnitude.clone();
        magnitude.pop();
        self.panel.set_time_magnitude(magnitude);
    }

    pub fn time_unit_next(&mut self) {
        self.panel.set_time_unit(self.panel.time.unit.next());
    }

    pub fn time_unit_previous(&mut self) {
        self.panel.set_time_unit(self.panel.time.unit.previous());
    }

    // -- Submission ---------------------------------------------------------

    /// Resolve the payload for the start action.
    ///
    /// A whitespace-only prompt does not submit (the start button is disabled
    /// until there is an idea to plan). The selector values are snapshotted
    /// as they stand; nothing is validated here.
    pub fn submit(&mut self) -> Option<IntakeRequest> {
        if self.prompt.trim().is_empty() {
            self.status = Some("Describe your idea first".to_string());
            return None;
        }

        let request = IntakeRequest {
            prompt: self.prompt.clone(),
            tech: self.panel.tech.labels().to_vec(),
            time: self.panel.time.clone(),
        };
        self.status = Some("Blueprint request captured".to_string());
        Some(request)
    }
}

/// Map a viewport width to its device class.
pub fn device_class_for_width(width: u16) -> DeviceClass {
    if width < MOBILE_BREAKPOINT {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Number of lines `text` occupies when word-wrapped to `width` columns.
///
/// Words longer than the width break mid-word. Empty text is one line.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = 1u16;
    let mut col = 0u16;

    for (idx, ch) in chars.iter().copied().enumerate() {
        if ch == '\n' {
            lines = lines.saturating_add(1);
            col = 0;
            continue;
        }
        if col >= width || should_wrap_before_word(&chars, idx, col, width) {
            lines = lines.saturating_add(1);
            col = 0;
        }
        col = col.saturating_add(1);
    }

    lines
}

/// Wrap before a word that would overflow the line but fits on its own.
fn should_wrap_before_word(chars: &[char], idx: usize, col: u16, width: u16) -> bool {
    if col == 0 {
        return false;
    }
    let ch = chars[idx];
    if ch.is_whitespace() {
        return false;
    }
    if idx > 0 {
        let prev = chars[idx - 1];
        if !prev.is_whitespace() && prev != '\n' {
            return false;
        }
    }

    let word_len = chars[idx..]
        .iter()
        .take_while(|c| !c.is_whitespace() && **c != '\n')
        .count() as u16;

    word_len <= width && col.saturating_add(word_len) > width
}
