use crate::tui::theme::Theme;
use crate::tui::view::{project_wizard_view, WizardViewModel};
use crate::wizard::output::OutputWriter;
use crate::wizard::session::{SessionFlow, WizardSession};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use std::io;
use std::time::Duration;

pub fn run_wizard_tui<W: OutputWriter>(session: &mut WizardSession<'_, W>) -> Result<(), String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter wizard screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal_best_effort();
            return Err(format!("failed to create wizard terminal: {e}"));
        }
    };
    let theme = Theme::default();
    let result = run_wizard_tui_loop(session, &theme, &mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave wizard screen: {e}"))?;
    result
}

fn restore_terminal_best_effort() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}

fn run_wizard_tui_loop<W: OutputWriter>(
    session: &mut WizardSession<'_, W>,
    theme: &Theme,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), String> {
    loop {
        let height = terminal
            .size()
            .map_err(|e| format!("failed to read terminal size: {e}"))?
            .height;
        let view = project_wizard_view(session.state(), session.catalog(), height);
        terminal
            .draw(|frame| draw_wizard_screen(frame, theme, &view))
            .map_err(|e| format!("failed to render wizard screen: {e}"))?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll wizard input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read wizard input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if session.handle_key(key) == SessionFlow::Exit {
            return Ok(());
        }
    }
}

/// Feeds keys through the same session the terminal loop uses. The key list
/// must end the wizard, either with `q` on the preview or `ctrl-c`.
pub fn run_wizard_scripted<W: OutputWriter>(
    session: &mut WizardSession<'_, W>,
    scripted_keys: Vec<KeyEvent>,
) -> Result<(), String> {
    for key in scripted_keys {
        if session.handle_key(key) == SessionFlow::Exit {
            return Ok(());
        }
    }
    Err("scripted wizard did not terminate; end the script with q or ctrl-c".to_string())
}

/// Rows outside the main panel: two bordered lines above and two below.
/// The main panel itself spends only its two border rows; the subtitle and
/// banner sit on those borders so the body gets every remaining row.
pub const HEADER_ROWS: u16 = 4;
pub const FOOTER_ROWS: u16 = 4;

pub fn draw_wizard_screen(frame: &mut Frame<'_>, theme: &Theme, view: &WizardViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(8),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(frame.area());

    let progress = view
        .progress
        .iter()
        .enumerate()
        .flat_map(|(idx, item)| {
            let mut spans = Vec::with_capacity(2);
            if idx > 0 {
                spans.push(Span::styled("  ─  ", theme.progress_pending));
            }
            spans.push(Span::styled(
                format!("{} {}", item.mark.symbol(), item.label),
                theme.progress_style(item.mark),
            ));
            spans
        })
        .collect::<Vec<_>>();
    let header = Paragraph::new(vec![
        Line::from(progress),
        Line::from(Span::styled(view.title.clone(), theme.title)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    frame.render_widget(header, chunks[0]);

    let body = view
        .body
        .iter()
        .map(|line| Line::from(Span::styled(line.text.clone(), theme.line_style(line.emphasis))))
        .collect::<Vec<_>>();
    let subtitle = Line::from(Span::styled(view.subtitle.clone(), theme.subtitle));
    let mut block = main_panel_block(theme);
    block = match &view.banner {
        Some(banner) => block
            .title(Line::from(Span::styled(
                banner.text.clone(),
                theme.line_style(banner.emphasis),
            )))
            .title_bottom(subtitle),
        None => block.title(subtitle),
    };
    let mut main = Paragraph::new(body).block(block);
    if view.wrap_body {
        main = main.wrap(Wrap { trim: false });
    }
    frame.render_widget(main, chunks[1]);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(view.hint.clone(), theme.hint)),
        Line::from(format!("Status: {}", view.status)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    frame.render_widget(footer, chunks[2]);
}

fn main_panel_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .padding(Padding::new(2, 2, 0, 0))
}
