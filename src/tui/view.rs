use crate::catalog::{Archetype, Catalog, ALL_TRIGGER_KINDS};
use crate::wizard::navigation::{clamp_selection, WizardStep, ALL_WIZARD_STEPS};
use crate::wizard::preview::{viewport_height, visible_window};
use crate::wizard::state::{WizardState, WriteResult, CONTEXT_CHAR_LIMIT};
use std::path::Path;

const CURSOR_MARK: &str = "▸ ";
const NO_CURSOR_MARK: &str = "  ";
const MEMORY_LABEL: &str = "🧠 Remember across runs";
const MEMORY_DESCRIPTION: &str = "Track trends and context between executions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMark {
    Done,
    Active,
    Pending,
}

impl ProgressMark {
    pub fn symbol(self) -> &'static str {
        match self {
            ProgressMark::Done => "✓",
            ProgressMark::Active => "●",
            ProgressMark::Pending => "○",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressItem {
    pub label: &'static str,
    pub mark: ProgressMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEmphasis {
    Normal,
    Selected,
    Description,
    Checked,
    Dim,
    Error,
    Success,
    Heading,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub emphasis: LineEmphasis,
}

impl ViewLine {
    fn new(text: impl Into<String>, emphasis: LineEmphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), LineEmphasis::Normal)
    }
}

/// Everything a frame shows, computed without touching the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardViewModel {
    pub progress: Vec<ProgressItem>,
    pub title: String,
    pub subtitle: String,
    /// One-line notice drawn on the panel border above the body.
    pub banner: Option<ViewLine>,
    pub body: Vec<ViewLine>,
    /// Preview lines map one-to-one onto panel rows, so they never wrap.
    pub wrap_body: bool,
    pub hint: String,
    pub status: String,
}

impl WizardViewModel {
    pub fn progress_line(&self) -> String {
        self.progress
            .iter()
            .map(|item| format!("{} {}", item.mark.symbol(), item.label))
            .collect::<Vec<_>>()
            .join("  ─  ")
    }
}

pub fn project_progress(step: WizardStep) -> Vec<ProgressItem> {
    ALL_WIZARD_STEPS
        .iter()
        .map(|candidate| ProgressItem {
            label: candidate.label(),
            mark: match candidate.cmp(&step) {
                std::cmp::Ordering::Less => ProgressMark::Done,
                std::cmp::Ordering::Equal => ProgressMark::Active,
                std::cmp::Ordering::Greater => ProgressMark::Pending,
            },
        })
        .collect()
}

pub fn project_wizard_view(
    state: &WizardState,
    catalog: &Catalog,
    terminal_height: u16,
) -> WizardViewModel {
    let archetype = state.chosen_archetype(catalog);
    let mut view = WizardViewModel {
        progress: project_progress(state.step),
        title: String::new(),
        subtitle: String::new(),
        banner: None,
        body: Vec::new(),
        wrap_body: state.step != WizardStep::Preview,
        hint: state.hint_text.clone(),
        status: state.status_text.clone(),
    };
    match state.step {
        WizardStep::SelectArchetype => project_archetypes(state, catalog, &mut view),
        WizardStep::SelectTriggers => project_triggers(state, archetype, &mut view),
        WizardStep::EnterContext => project_context(state, archetype, &mut view),
        WizardStep::Preview => project_preview(state, archetype, terminal_height, &mut view),
    }
    view
}

fn project_archetypes(state: &WizardState, catalog: &Catalog, view: &mut WizardViewModel) {
    view.title = "What type of workflow?".to_string();
    view.subtitle = "Pick the workflow that fits your use case".to_string();
    let selected = clamp_selection(state.archetype_cursor, catalog.len());
    for (idx, archetype) in catalog.archetypes.iter().enumerate() {
        let is_selected = idx == selected;
        view.body.push(ViewLine::new(
            format!(
                "{}{} {}",
                cursor_mark(is_selected),
                archetype.kind().icon(),
                archetype.label
            ),
            if is_selected {
                LineEmphasis::Selected
            } else {
                LineEmphasis::Normal
            },
        ));
        view.body.push(ViewLine::new(
            format!("     {}", archetype.description),
            if is_selected {
                LineEmphasis::Selected
            } else {
                LineEmphasis::Description
            },
        ));
    }
}

fn project_triggers(
    state: &WizardState,
    archetype: Option<&Archetype>,
    view: &mut WizardViewModel,
) {
    view.title = format!("Triggers for {}", archetype_label(archetype));
    view.subtitle = "Recommended triggers are pre-selected, adjust as needed".to_string();
    let selected = clamp_selection(state.trigger_cursor, ALL_TRIGGER_KINDS.len());
    for (idx, kind) in ALL_TRIGGER_KINDS.iter().copied().enumerate() {
        let checked = state.is_trigger_selected(kind);
        let recommended = archetype.is_some_and(|archetype| archetype.recommends(kind));
        let mut text = format!(
            "{}{} {}  {}",
            cursor_mark(idx == selected),
            checkbox(checked),
            kind.as_str(),
            kind.description()
        );
        if recommended {
            text.push_str("  (recommended)");
        }
        let emphasis = if idx == selected {
            LineEmphasis::Selected
        } else if checked {
            LineEmphasis::Checked
        } else {
            LineEmphasis::Normal
        };
        view.body.push(ViewLine::new(text, emphasis));
    }
}

fn project_context(
    state: &WizardState,
    archetype: Option<&Archetype>,
    view: &mut WizardViewModel,
) {
    view.title = format!("Context for {}", archetype_label(archetype));
    view.subtitle = "Optional: add project details for a better workflow".to_string();
    view.body.push(ViewLine::new(
        format!("  {} {MEMORY_LABEL}", checkbox(state.use_memory)),
        if state.use_memory {
            LineEmphasis::Checked
        } else {
            LineEmphasis::Normal
        },
    ));
    view.body.push(ViewLine::new(
        format!("      {MEMORY_DESCRIPTION}"),
        LineEmphasis::Description,
    ));
    view.body.push(ViewLine::blank());
    view.body.push(ViewLine::new(
        format!(
            "  Project context ({}/{CONTEXT_CHAR_LIMIT}):",
            state.context.chars().count()
        ),
        LineEmphasis::Normal,
    ));
    let input = if state.context.is_empty() {
        ViewLine::new(
            "  > e.g. Rust workspace, CI on every PR, labels live in .github/labels.yml",
            LineEmphasis::Dim,
        )
    } else {
        ViewLine::new(format!("  > {}_", state.context), LineEmphasis::Selected)
    };
    view.body.push(input);

    let tips = archetype.map(|archetype| archetype.tips.as_slice()).unwrap_or(&[]);
    if !tips.is_empty() {
        view.body.push(ViewLine::blank());
        view.body.push(ViewLine::new("  Tips", LineEmphasis::Heading));
        for tip in tips {
            view.body
                .push(ViewLine::new(format!("  • {tip}"), LineEmphasis::Description));
        }
    }
}

fn project_preview(
    state: &WizardState,
    archetype: Option<&Archetype>,
    terminal_height: u16,
    view: &mut WizardViewModel,
) {
    if let WriteResult::Written(path) = &state.write_result {
        view.title = format!("✓ Written to {}", path.display());
        view.subtitle = "Your workflow is ready".to_string();
        view.body = next_steps(path, archetype);
        view.hint = "q quit".to_string();
        return;
    }

    view.title = format!("Preview: {} workflow", archetype_label(archetype));
    if let WriteResult::Failed(message) = &state.write_result {
        view.banner = Some(ViewLine::new(format!("Error: {message}"), LineEmphasis::Error));
    }
    let document = state.document.as_deref().unwrap_or_default();
    let window = visible_window(document, state.preview_scroll, viewport_height(terminal_height));
    view.subtitle = format!(
        "lines {}-{} of {}",
        window.start + 1,
        window.end,
        window.total
    );
    view.body.extend(
        window
            .lines
            .iter()
            .map(|line| ViewLine::new(*line, LineEmphasis::Normal)),
    );
}

fn next_steps(path: &Path, archetype: Option<&Archetype>) -> Vec<ViewLine> {
    let path = path.display().to_string();
    let lock_path = path.replacen(".md", ".lock.yml", 1);
    let steps: [(&str, String); 7] = [
        ("Ensure GitHub Actions is enabled on your repo", String::new()),
        (
            "Install the gh-aw extension (if not already)",
            "gh extension install github/gh-aw".to_string(),
        ),
        ("Set up your AI engine secret", "gh aw add-wizard".to_string()),
        ("Compile the workflow", format!("gh aw compile {path}")),
        ("Stage both files", format!("git add {path} {lock_path}")),
        (
            "Commit and push",
            "git commit -m 'Add agentic workflow' && git push".to_string(),
        ),
        (
            "Trigger your first run",
            format!("gh aw run {}", archetype_label(archetype).trim_end()),
        ),
    ];

    let mut lines = vec![ViewLine::new("Next steps", LineEmphasis::Heading), ViewLine::blank()];
    for (idx, (description, command)) in steps.iter().enumerate() {
        let number = idx + 1;
        if command.is_empty() {
            lines.push(ViewLine::new(
                format!("  {number}. {description}"),
                LineEmphasis::Normal,
            ));
        } else {
            lines.push(ViewLine::new(
                format!("  {number}. {command}"),
                LineEmphasis::Command,
            ));
            lines.push(ViewLine::new(
                format!("     {description}"),
                LineEmphasis::Description,
            ));
        }
    }
    lines
}

fn archetype_label(archetype: Option<&Archetype>) -> &str {
    archetype.map(|archetype| archetype.label.as_str()).unwrap_or("workflow")
}

fn cursor_mark(selected: bool) -> &'static str {
    if selected {
        CURSOR_MARK
    } else {
        NO_CURSOR_MARK
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[✓]"
    } else {
        "[ ]"
    }
}
