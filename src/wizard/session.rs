use crate::catalog::Catalog;
use crate::shared::logging::WizardLog;
use crate::wizard::navigation::{
    action_from_key, wizard_transition, WizardAction, WizardEffect, WizardStep,
};
use crate::wizard::output::{document_path, OutputWriter};
use crate::wizard::state::{WizardState, WriteResult};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Exit,
}

/// Drives a [`WizardState`] through transitions and runs the effects they ask for.
pub struct WizardSession<'a, W: OutputWriter> {
    catalog: &'a Catalog,
    writer: W,
    output_dir: PathBuf,
    log: WizardLog,
    state: WizardState,
}

impl<'a, W: OutputWriter> WizardSession<'a, W> {
    pub fn new(catalog: &'a Catalog, writer: W, output_dir: PathBuf, log: WizardLog) -> Self {
        Self {
            catalog,
            writer,
            output_dir,
            log,
            state: WizardState::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> SessionFlow {
        match action_from_key(self.state.step, key) {
            Some(action) => self.handle_action(action),
            None => SessionFlow::Continue,
        }
    }

    pub fn handle_action(&mut self, action: WizardAction) -> SessionFlow {
        let transition = match wizard_transition(&mut self.state, action, self.catalog) {
            Ok(transition) => transition,
            Err(err) => {
                self.log.warn("invalid_transition", &err.to_string());
                self.state.status_text = err.to_string();
                return SessionFlow::Continue;
            }
        };
        if let Some(feedback) = transition.feedback {
            self.state.status_text = feedback;
        }
        match transition.effect {
            WizardEffect::None => SessionFlow::Continue,
            WizardEffect::EnterStep(step) => {
                self.log.info("step_entered", step.as_str());
                if step == WizardStep::Preview {
                    self.log.info("document_generated", &self.state.status_text);
                }
                SessionFlow::Continue
            }
            WizardEffect::WriteDocument => {
                self.write_document();
                SessionFlow::Continue
            }
            WizardEffect::Quit => {
                self.log
                    .info("wizard_exit", &format!("step={}", self.state.step.as_str()));
                SessionFlow::Exit
            }
        }
    }

    fn write_document(&mut self) {
        if let WriteResult::Written(path) = &self.state.write_result {
            let message = format!("Already written to {}", path.display());
            self.log.info("write_skipped", &message);
            self.state.status_text = message;
            return;
        }
        let Some(archetype) = self.state.chosen_archetype(self.catalog) else {
            self.state
                .record_write(Err("no archetype chosen".to_string()));
            return;
        };
        let Some(document) = self.state.document.clone() else {
            self.state
                .record_write(Err("no generated document to write".to_string()));
            return;
        };
        let path = document_path(&self.output_dir, archetype);
        match self.writer.write_document(&path, &document) {
            Ok(()) => {
                self.log
                    .info("write_succeeded", &path.display().to_string());
                self.state.record_write(Ok(path));
            }
            Err(err) => {
                self.log.error("write_failed", &err.to_string());
                self.state.record_write(Err(err.to_string()));
            }
        }
    }

    /// Plain-text outcome used by scripted runs.
    pub fn summary(&self) -> String {
        let archetype = self
            .state
            .chosen_archetype(self.catalog)
            .map(|archetype| archetype.id.as_str())
            .unwrap_or("<none>");
        let triggers = self
            .state
            .selected_triggers_in_order()
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>();
        let mut lines = vec![
            format!("step={}", self.state.step.as_str()),
            format!("archetype={archetype}"),
            format!(
                "triggers={}",
                if triggers.is_empty() {
                    "<none>".to_string()
                } else {
                    triggers.join(",")
                }
            ),
        ];
        match &self.state.write_result {
            WriteResult::NotWritten => lines.push("written=<none>".to_string()),
            WriteResult::Written(path) => lines.push(format!("written={}", path.display())),
            WriteResult::Failed(message) => lines.push(format!("write_error={message}")),
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::OutputError;
    use std::path::Path;

    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_document(&mut self, path: &Path, _text: &str) -> Result<(), OutputError> {
            self.attempts += 1;
            Err(OutputError::Write {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    #[test]
    fn failed_write_can_be_retried() {
        let catalog = Catalog::load_embedded().expect("catalog");
        let mut session = WizardSession::new(
            &catalog,
            FailingWriter::default(),
            PathBuf::from("out"),
            WizardLog::disabled(),
        );
        for _ in 0..3 {
            session.handle_action(WizardAction::Confirm);
        }
        session.handle_action(WizardAction::Write);
        session.handle_action(WizardAction::Write);
        assert_eq!(session.writer().attempts, 2);
        assert!(matches!(
            session.state().write_result,
            WriteResult::Failed(ref message) if message.starts_with("writing out/issue-triage.md")
        ));
        assert_eq!(session.state().step, WizardStep::Preview);
    }
}
