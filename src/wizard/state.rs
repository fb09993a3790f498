use crate::catalog::{Archetype, Catalog, TriggerKind, ALL_TRIGGER_KINDS};
use crate::wizard::navigation::{WizardStep, ARCHETYPE_HINT_TEXT, ARCHETYPE_STATUS_TEXT};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const CONTEXT_CHAR_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    NotWritten,
    Written(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub archetype_cursor: usize,
    /// Index of the archetype confirmed on the first step.
    pub archetype: Option<usize>,
    pub trigger_cursor: usize,
    pub selected_triggers: BTreeSet<TriggerKind>,
    pub context: String,
    pub use_memory: bool,
    pub document: Option<String>,
    pub write_result: WriteResult,
    pub preview_scroll: usize,
    pub status_text: String,
    pub hint_text: String,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectArchetype,
            archetype_cursor: 0,
            archetype: None,
            trigger_cursor: 0,
            selected_triggers: BTreeSet::new(),
            context: String::new(),
            use_memory: false,
            document: None,
            write_result: WriteResult::NotWritten,
            preview_scroll: 0,
            status_text: ARCHETYPE_STATUS_TEXT.to_string(),
            hint_text: ARCHETYPE_HINT_TEXT.to_string(),
        }
    }

    pub fn chosen_archetype<'a>(&self, catalog: &'a Catalog) -> Option<&'a Archetype> {
        self.archetype.and_then(|index| catalog.get(index))
    }

    pub fn is_trigger_selected(&self, kind: TriggerKind) -> bool {
        self.selected_triggers.contains(&kind)
    }

    pub fn selected_triggers_in_order(&self) -> Vec<TriggerKind> {
        ALL_TRIGGER_KINDS
            .iter()
            .copied()
            .filter(|kind| self.selected_triggers.contains(kind))
            .collect()
    }

    pub fn is_written(&self) -> bool {
        matches!(self.write_result, WriteResult::Written(_))
    }

    pub fn record_write(&mut self, result: Result<PathBuf, String>) {
        match result {
            Ok(path) => {
                self.status_text = format!("✓ Written to {}", path.display());
                self.write_result = WriteResult::Written(path);
            }
            Err(message) => {
                self.status_text = format!("Error: {message}");
                self.write_result = WriteResult::Failed(message);
            }
        }
    }
}
