use crate::tui::view::{LineEmphasis, ProgressMark};
use ratatui::style::{Color, Modifier, Style};

const BLUE: Color = Color::Rgb(0x58, 0xa6, 0xff);
const GREEN: Color = Color::Rgb(0x3f, 0xb9, 0x50);
const PURPLE: Color = Color::Rgb(0xbc, 0x8c, 0xff);
const RED: Color = Color::Rgb(0xf8, 0x51, 0x49);
const DIM_WHITE: Color = Color::Rgb(0x8b, 0x94, 0x9e);
const WHITE: Color = Color::Rgb(0xe6, 0xed, 0xf3);
const BORDER_DIM: Color = Color::Rgb(0x30, 0x36, 0x3d);

/// Styles used by the wizard screens. Built once and passed by reference to
/// every draw call; nothing mutates it after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub selected: Style,
    pub normal: Style,
    pub description: Style,
    pub checked: Style,
    pub dim: Style,
    pub error: Style,
    pub success: Style,
    pub heading: Style,
    pub command: Style,
    pub progress_done: Style,
    pub progress_active: Style,
    pub progress_pending: Style,
    pub border: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(DIM_WHITE).add_modifier(Modifier::ITALIC),
            selected: Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            normal: Style::default().fg(WHITE),
            description: Style::default().fg(DIM_WHITE),
            checked: Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(DIM_WHITE),
            error: Style::default().fg(RED).add_modifier(Modifier::BOLD),
            success: Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            heading: Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            command: Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            progress_done: Style::default().fg(GREEN),
            progress_active: Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            progress_pending: Style::default().fg(DIM_WHITE),
            border: Style::default().fg(BORDER_DIM),
            hint: Style::default().fg(DIM_WHITE),
        }
    }
}

impl Theme {
    pub fn line_style(&self, emphasis: LineEmphasis) -> Style {
        match emphasis {
            LineEmphasis::Normal => self.normal,
            LineEmphasis::Selected => self.selected,
            LineEmphasis::Description => self.description,
            LineEmphasis::Checked => self.checked,
            LineEmphasis::Dim => self.dim,
            LineEmphasis::Error => self.error,
            LineEmphasis::Success => self.success,
            LineEmphasis::Heading => self.heading,
            LineEmphasis::Command => self.command,
        }
    }

    pub fn progress_style(&self, mark: ProgressMark) -> Style {
        match mark {
            ProgressMark::Done => self.progress_done,
            ProgressMark::Active => self.progress_active,
            ProgressMark::Pending => self.progress_pending,
        }
    }
}
