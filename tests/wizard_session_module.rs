use aw_create::catalog::Catalog;
use aw_create::shared::errors::OutputError;
use aw_create::shared::logging::WizardLog;
use aw_create::wizard::navigation::{WizardAction, WizardStep};
use aw_create::wizard::output::{FsOutputWriter, OutputWriter};
use aw_create::wizard::session::{SessionFlow, WizardSession};
use aw_create::wizard::state::WriteResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct CountingWriter {
    calls: Vec<PathBuf>,
}

impl OutputWriter for CountingWriter {
    fn write_document(&mut self, path: &Path, _text: &str) -> Result<(), OutputError> {
        self.calls.push(path.to_path_buf());
        Ok(())
    }
}

fn advance_to_preview<W: OutputWriter>(session: &mut WizardSession<'_, W>) {
    for _ in 0..3 {
        assert_eq!(
            session.handle_action(WizardAction::Confirm),
            SessionFlow::Continue
        );
    }
    assert_eq!(session.state().step, WizardStep::Preview);
}

#[test]
fn wizard_session_module_second_write_performs_no_io() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        CountingWriter::default(),
        PathBuf::from(".github/workflows"),
        WizardLog::disabled(),
    );
    advance_to_preview(&mut session);

    session.handle_action(WizardAction::Write);
    let first = session.state().write_result.clone();
    session.handle_action(WizardAction::Write);

    assert_eq!(
        session.writer().calls,
        vec![PathBuf::from(".github/workflows/issue-triage.md")]
    );
    assert_eq!(session.state().write_result, first);
    assert_eq!(
        session.state().status_text,
        "Already written to .github/workflows/issue-triage.md"
    );
}

#[test]
fn wizard_session_module_writes_file_and_logs_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("workflows");
    let log_path = dir.path().join("logs/wizard.log");
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        FsOutputWriter,
        out_dir.clone(),
        WizardLog::new(Some(log_path.clone())),
    );
    session.handle_action(WizardAction::MoveNext);
    advance_to_preview(&mut session);
    session.handle_action(WizardAction::Write);
    assert_eq!(session.handle_action(WizardAction::Quit), SessionFlow::Exit);

    let written = out_dir.join("code-improvement.md");
    assert_eq!(
        session.state().write_result,
        WriteResult::Written(written.clone())
    );
    let text = fs::read_to_string(&written).expect("read written file");
    assert_eq!(Some(text.as_str()), session.state().document.as_deref());

    let log = fs::read_to_string(&log_path).expect("read log");
    let events = log
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            value["event"].as_str().unwrap_or_default().to_string()
        })
        .collect::<Vec<_>>();
    assert!(events.contains(&"document_generated".to_string()));
    assert!(events.contains(&"write_succeeded".to_string()));
    assert_eq!(events.last().map(String::as_str), Some("wizard_exit"));
}

#[test]
fn wizard_session_module_invalid_action_sets_status_and_continues() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        CountingWriter::default(),
        PathBuf::from("out"),
        WizardLog::disabled(),
    );
    assert_eq!(
        session.handle_action(WizardAction::Quit),
        SessionFlow::Continue
    );
    assert_eq!(
        session.state().status_text,
        "invalid wizard transition: step=select_archetype action=quit"
    );
    assert_eq!(
        session.handle_action(WizardAction::ForceQuit),
        SessionFlow::Exit
    );
}

#[test]
fn wizard_session_module_summary_reports_outcome() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        CountingWriter::default(),
        PathBuf::from("out"),
        WizardLog::disabled(),
    );
    advance_to_preview(&mut session);
    session.handle_action(WizardAction::Write);
    assert_eq!(
        session.summary(),
        "step=preview\narchetype=issue-triage\ntriggers=issues\nwritten=out/issue-triage.md"
    );
}

fn logged_events(log_path: &Path) -> Vec<String> {
    fs::read_to_string(log_path)
        .expect("read log")
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            value["event"].as_str().unwrap_or_default().to_string()
        })
        .collect()
}

#[test]
fn wizard_session_module_repeat_write_key_logs_write_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("wizard.log");
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        CountingWriter::default(),
        PathBuf::from("out"),
        WizardLog::new(Some(log_path.clone())),
    );
    advance_to_preview(&mut session);

    let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
    assert_eq!(session.handle_key(w), SessionFlow::Continue);
    assert_eq!(session.handle_key(w), SessionFlow::Continue);

    assert_eq!(session.writer().calls.len(), 1);
    let events = logged_events(&log_path);
    assert_eq!(
        events.iter().filter(|event| *event == "write_succeeded").count(),
        1
    );
    assert_eq!(events.last().map(String::as_str), Some("write_skipped"));
}

#[test]
fn wizard_session_module_regenerating_after_write_allows_another_write() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut session = WizardSession::new(
        &catalog,
        CountingWriter::default(),
        PathBuf::from("out"),
        WizardLog::disabled(),
    );
    advance_to_preview(&mut session);
    session.handle_action(WizardAction::Write);
    assert_eq!(
        session.state().write_result,
        WriteResult::Written(PathBuf::from("out/issue-triage.md"))
    );

    session.handle_action(WizardAction::Back);
    assert_eq!(session.state().step, WizardStep::EnterContext);
    session.handle_action(WizardAction::InsertChar('z'));
    session.handle_action(WizardAction::Confirm);
    assert_eq!(session.state().step, WizardStep::Preview);
    assert_eq!(session.state().write_result, WriteResult::NotWritten);

    session.handle_action(WizardAction::Write);
    assert_eq!(session.writer().calls.len(), 2);
    assert!(session
        .state()
        .document
        .as_deref()
        .expect("document")
        .ends_with("z\n"));
}
