use crate::catalog::{Catalog, ALL_TRIGGER_KINDS};
use crate::generator::{document_digest, generate, WorkflowRequest};
use crate::wizard::state::{WizardState, WriteResult, CONTEXT_CHAR_LIMIT};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

pub(crate) const ARCHETYPE_STATUS_TEXT: &str = "Pick the workflow that fits your use case.";
pub(crate) const ARCHETYPE_HINT_TEXT: &str = "↑↓ navigate • enter select • ctrl+c quit";
const TRIGGERS_STATUS_TEXT: &str = "Recommended triggers are pre-selected; adjust as needed.";
const TRIGGERS_HINT_TEXT: &str = "↑↓ navigate • space toggle • enter next • esc back";
const CONTEXT_STATUS_TEXT: &str = "Optional: add project details for a better workflow.";
const CONTEXT_HINT_TEXT: &str = "tab toggle memory • enter generate • esc back";
const PREVIEW_HINT_TEXT: &str = "↑↓ scroll • w write • esc back • q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    SelectArchetype,
    SelectTriggers,
    EnterContext,
    Preview,
}

pub const ALL_WIZARD_STEPS: [WizardStep; 4] = [
    WizardStep::SelectArchetype,
    WizardStep::SelectTriggers,
    WizardStep::EnterContext,
    WizardStep::Preview,
];

impl WizardStep {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::SelectArchetype => "select_archetype",
            WizardStep::SelectTriggers => "select_triggers",
            WizardStep::EnterContext => "enter_context",
            WizardStep::Preview => "preview",
        }
    }

    /// Short label used by the progress strip.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::SelectArchetype => "Type",
            WizardStep::SelectTriggers => "Triggers",
            WizardStep::EnterContext => "Context",
            WizardStep::Preview => "Generate",
        }
    }

    pub fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectArchetype => None,
            WizardStep::SelectTriggers => Some(WizardStep::SelectArchetype),
            WizardStep::EnterContext => Some(WizardStep::SelectTriggers),
            WizardStep::Preview => Some(WizardStep::EnterContext),
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectArchetype => Some(WizardStep::SelectTriggers),
            WizardStep::SelectTriggers => Some(WizardStep::EnterContext),
            WizardStep::EnterContext => Some(WizardStep::Preview),
            WizardStep::Preview => None,
        }
    }

    fn status_text(self) -> &'static str {
        match self {
            WizardStep::SelectArchetype => ARCHETYPE_STATUS_TEXT,
            WizardStep::SelectTriggers => TRIGGERS_STATUS_TEXT,
            WizardStep::EnterContext => CONTEXT_STATUS_TEXT,
            WizardStep::Preview => "",
        }
    }

    fn hint_text(self) -> &'static str {
        match self {
            WizardStep::SelectArchetype => ARCHETYPE_HINT_TEXT,
            WizardStep::SelectTriggers => TRIGGERS_HINT_TEXT,
            WizardStep::EnterContext => CONTEXT_HINT_TEXT,
            WizardStep::Preview => PREVIEW_HINT_TEXT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    MovePrev,
    MoveNext,
    Confirm,
    Back,
    ToggleTrigger,
    ToggleMemory,
    InsertChar(char),
    DeleteChar,
    Write,
    Quit,
    ForceQuit,
}

impl WizardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardAction::MovePrev => "move_prev",
            WizardAction::MoveNext => "move_next",
            WizardAction::Confirm => "confirm",
            WizardAction::Back => "back",
            WizardAction::ToggleTrigger => "toggle_trigger",
            WizardAction::ToggleMemory => "toggle_memory",
            WizardAction::InsertChar(_) => "insert_char",
            WizardAction::DeleteChar => "delete_char",
            WizardAction::Write => "write",
            WizardAction::Quit => "quit",
            WizardAction::ForceQuit => "force_quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    None,
    EnterStep(WizardStep),
    WriteDocument,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTransition {
    pub effect: WizardEffect,
    pub feedback: Option<String>,
}

impl WizardTransition {
    fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: WizardEffect::None,
            feedback,
        }
    }

    fn effect(effect: WizardEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardNavError {
    InvalidTransition {
        step: WizardStep,
        action: WizardAction,
    },
    MissingArchetype {
        step: WizardStep,
    },
}

impl std::fmt::Display for WizardNavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardNavError::InvalidTransition { step, action } => {
                write!(
                    f,
                    "invalid wizard transition: step={} action={}",
                    step.as_str(),
                    action.as_str()
                )
            }
            WizardNavError::MissingArchetype { step } => {
                write!(
                    f,
                    "no archetype has been chosen before step={}",
                    step.as_str()
                )
            }
        }
    }
}

impl std::error::Error for WizardNavError {}

pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.min(len - 1)
}

pub fn action_from_key(step: WizardStep, key: crossterm::event::KeyEvent) -> Option<WizardAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(WizardAction::ForceQuit);
    }
    match key.code {
        KeyCode::Esc => return Some(WizardAction::Back),
        // The preview has nothing to confirm.
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
            return (step != WizardStep::Preview).then_some(WizardAction::Confirm);
        }
        _ => {}
    }
    match step {
        WizardStep::SelectArchetype => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(WizardAction::MovePrev),
            KeyCode::Down | KeyCode::Char('j') => Some(WizardAction::MoveNext),
            _ => None,
        },
        WizardStep::SelectTriggers => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(WizardAction::MovePrev),
            KeyCode::Down | KeyCode::Char('j') => Some(WizardAction::MoveNext),
            KeyCode::Char(' ') | KeyCode::Char('x') => Some(WizardAction::ToggleTrigger),
            _ => None,
        },
        WizardStep::EnterContext => match key.code {
            KeyCode::Tab => Some(WizardAction::ToggleMemory),
            KeyCode::Backspace => Some(WizardAction::DeleteChar),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(WizardAction::InsertChar(ch))
            }
            _ => None,
        },
        WizardStep::Preview => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(WizardAction::MovePrev),
            KeyCode::Down | KeyCode::Char('j') => Some(WizardAction::MoveNext),
            KeyCode::Char('w') => Some(WizardAction::Write),
            KeyCode::Char('q') => Some(WizardAction::Quit),
            _ => None,
        },
    }
}

pub fn parse_scripted_keys(raw: &str) -> Result<Vec<crossterm::event::KeyEvent>, String> {
    use crossterm::event::KeyEvent;

    let mut keys = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let key = match token.to_ascii_lowercase().as_str() {
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "space" => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            "tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                    _ => {
                        return Err(format!(
                            "invalid script token `{token}`; valid tokens: up,down,enter,esc,ctrl-c,space,tab,backspace or a single character"
                        ));
                    }
                }
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

fn enter_step(state: &mut WizardState, step: WizardStep) {
    state.step = step;
    state.status_text = step.status_text().to_string();
    state.hint_text = step.hint_text().to_string();
}

fn invalid(state: &WizardState, action: WizardAction) -> Result<WizardTransition, WizardNavError> {
    Err(WizardNavError::InvalidTransition {
        step: state.step,
        action,
    })
}

/// Applies one action to the wizard. Never performs I/O; side effects that
/// need the outside world come back as a [`WizardEffect`].
pub fn wizard_transition(
    state: &mut WizardState,
    action: WizardAction,
    catalog: &Catalog,
) -> Result<WizardTransition, WizardNavError> {
    if action == WizardAction::ForceQuit {
        return Ok(WizardTransition::effect(WizardEffect::Quit));
    }

    match state.step {
        WizardStep::SelectArchetype => match action {
            WizardAction::MovePrev => {
                state.archetype_cursor = state.archetype_cursor.saturating_sub(1);
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::MoveNext => {
                state.archetype_cursor =
                    clamp_selection(state.archetype_cursor.saturating_add(1), catalog.len());
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::Confirm => {
                let index = clamp_selection(state.archetype_cursor, catalog.len());
                let archetype = catalog.get(index).ok_or(WizardNavError::MissingArchetype {
                    step: state.step,
                })?;
                state.archetype = Some(index);
                state.selected_triggers = archetype
                    .recommended_triggers
                    .iter()
                    .map(|trigger| trigger.kind)
                    .collect();
                state.trigger_cursor = 0;
                enter_step(state, WizardStep::SelectTriggers);
                Ok(WizardTransition::effect(WizardEffect::EnterStep(
                    WizardStep::SelectTriggers,
                )))
            }
            WizardAction::Back => Ok(WizardTransition::no_op(None)),
            WizardAction::ToggleTrigger
            | WizardAction::ToggleMemory
            | WizardAction::InsertChar(_)
            | WizardAction::DeleteChar
            | WizardAction::Write
            | WizardAction::Quit
            | WizardAction::ForceQuit => invalid(state, action),
        },
        WizardStep::SelectTriggers => match action {
            WizardAction::MovePrev => {
                state.trigger_cursor = state.trigger_cursor.saturating_sub(1);
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::MoveNext => {
                state.trigger_cursor = clamp_selection(
                    state.trigger_cursor.saturating_add(1),
                    ALL_TRIGGER_KINDS.len(),
                );
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::ToggleTrigger => {
                let kind =
                    ALL_TRIGGER_KINDS[clamp_selection(state.trigger_cursor, ALL_TRIGGER_KINDS.len())];
                if !state.selected_triggers.remove(&kind) {
                    state.selected_triggers.insert(kind);
                }
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::Confirm => {
                enter_step(state, WizardStep::EnterContext);
                Ok(WizardTransition::effect(WizardEffect::EnterStep(
                    WizardStep::EnterContext,
                )))
            }
            WizardAction::Back => {
                enter_step(state, WizardStep::SelectArchetype);
                Ok(WizardTransition::effect(WizardEffect::EnterStep(
                    WizardStep::SelectArchetype,
                )))
            }
            WizardAction::ToggleMemory
            | WizardAction::InsertChar(_)
            | WizardAction::DeleteChar
            | WizardAction::Write
            | WizardAction::Quit
            | WizardAction::ForceQuit => invalid(state, action),
        },
        WizardStep::EnterContext => match action {
            WizardAction::ToggleMemory => {
                state.use_memory = !state.use_memory;
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::InsertChar(ch) => {
                if state.context.chars().count() >= CONTEXT_CHAR_LIMIT {
                    return Ok(WizardTransition::no_op(Some(format!(
                        "Project context is limited to {CONTEXT_CHAR_LIMIT} characters."
                    ))));
                }
                state.context.push(ch);
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::DeleteChar => {
                state.context.pop();
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::Confirm => {
                let archetype = state
                    .archetype
                    .and_then(|index| catalog.get(index))
                    .ok_or(WizardNavError::MissingArchetype { step: state.step })?;
                let request = WorkflowRequest {
                    archetype,
                    triggers: state.selected_triggers_in_order(),
                    project_context: &state.context,
                    use_memory: state.use_memory,
                };
                let document = generate(&request);
                let digest = document_digest(&document);
                state.document = Some(document);
                state.preview_scroll = 0;
                state.write_result = WriteResult::NotWritten;
                enter_step(state, WizardStep::Preview);
                Ok(WizardTransition {
                    effect: WizardEffect::EnterStep(WizardStep::Preview),
                    feedback: Some(format!(
                        "Generated {}.md (sha256 {})",
                        archetype.slug(),
                        &digest[..12]
                    )),
                })
            }
            WizardAction::Back => {
                enter_step(state, WizardStep::SelectTriggers);
                Ok(WizardTransition::effect(WizardEffect::EnterStep(
                    WizardStep::SelectTriggers,
                )))
            }
            WizardAction::MovePrev
            | WizardAction::MoveNext
            | WizardAction::ToggleTrigger
            | WizardAction::Write
            | WizardAction::Quit
            | WizardAction::ForceQuit => invalid(state, action),
        },
        WizardStep::Preview => match action {
            WizardAction::MovePrev => {
                state.preview_scroll = state.preview_scroll.saturating_sub(1);
                Ok(WizardTransition::no_op(None))
            }
            // Unbounded here; the preview projection clamps before rendering.
            WizardAction::MoveNext => {
                state.preview_scroll = state.preview_scroll.saturating_add(1);
                Ok(WizardTransition::no_op(None))
            }
            WizardAction::Write => {
                if state.document.is_none() {
                    return invalid(state, action);
                }
                Ok(WizardTransition::effect(WizardEffect::WriteDocument))
            }
            WizardAction::Quit => Ok(WizardTransition::effect(WizardEffect::Quit)),
            WizardAction::Back => {
                enter_step(state, WizardStep::EnterContext);
                Ok(WizardTransition::effect(WizardEffect::EnterStep(
                    WizardStep::EnterContext,
                )))
            }
            WizardAction::Confirm
            | WizardAction::ToggleTrigger
            | WizardAction::ToggleMemory
            | WizardAction::InsertChar(_)
            | WizardAction::DeleteChar
            | WizardAction::ForceQuit => invalid(state, action),
        },
    }
}
