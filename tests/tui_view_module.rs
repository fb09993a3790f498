use aw_create::catalog::Catalog;
use aw_create::tui::view::{project_wizard_view, LineEmphasis};
use aw_create::tui::Theme;
use aw_create::wizard::navigation::{wizard_transition, WizardAction};
use aw_create::wizard::state::WizardState;
use std::path::PathBuf;

fn apply(state: &mut WizardState, catalog: &Catalog, actions: &[WizardAction]) {
    for action in actions {
        wizard_transition(state, *action, catalog).expect("transition");
    }
}

fn body_text(lines: &[aw_create::tui::ViewLine]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}

#[test]
fn tui_view_archetype_list_highlights_cursor_with_icon() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut state = WizardState::new();
    apply(&mut state, &catalog, &[WizardAction::MoveNext]);
    let view = project_wizard_view(&state, &catalog, 40);

    assert_eq!(view.title, "What type of workflow?");
    assert_eq!(view.progress_line(), "● Type  ─  ○ Triggers  ─  ○ Context  ─  ○ Generate");
    let selected = view
        .body
        .iter()
        .find(|line| line.text.starts_with("▸ "))
        .expect("cursor line");
    assert_eq!(selected.text, "▸ 🔧 Code Improvement");
    assert_eq!(selected.emphasis, LineEmphasis::Selected);
}

#[test]
fn tui_view_trigger_rows_show_checkbox_and_recommendation() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut state = WizardState::new();
    apply(&mut state, &catalog, &[WizardAction::Confirm]);
    let view = project_wizard_view(&state, &catalog, 40);

    assert_eq!(view.title, "Triggers for Issue Triage");
    let rows = body_text(&view.body);
    assert_eq!(rows.len(), 8);
    assert!(rows[0].starts_with("▸ [✓] issues  "));
    assert!(rows[0].ends_with("(recommended)"));
    assert!(rows[1].starts_with("  [ ] pull_request  "));
    assert!(!rows[1].ends_with("(recommended)"));
}

#[test]
fn tui_view_context_step_lists_tips_and_character_count() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut state = WizardState::new();
    apply(
        &mut state,
        &catalog,
        &[
            WizardAction::Confirm,
            WizardAction::Confirm,
            WizardAction::InsertChar('o'),
            WizardAction::InsertChar('k'),
            WizardAction::ToggleMemory,
        ],
    );
    let view = project_wizard_view(&state, &catalog, 40);
    let rows = body_text(&view.body);
    assert!(rows.contains(&"  [✓] 🧠 Remember across runs"));
    assert!(rows.contains(&"  Project context (2/500):"));
    assert!(rows.contains(&"  > ok_"));
    assert!(rows.contains(&"  Tips"));
}

#[test]
fn tui_view_preview_clamps_scroll_and_shows_errors_in_banner() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut state = WizardState::new();
    apply(
        &mut state,
        &catalog,
        &[WizardAction::Confirm, WizardAction::Confirm, WizardAction::Confirm],
    );
    for _ in 0..500 {
        apply(&mut state, &catalog, &[WizardAction::MoveNext]);
    }
    state.record_write(Err("writing x.md: denied".to_string()));
    let view = project_wizard_view(&state, &catalog, 30);

    assert_eq!(view.title, "Preview: Issue Triage workflow");
    let banner = view.banner.as_ref().expect("error banner");
    assert_eq!(banner.text, "Error: writing x.md: denied");
    assert_eq!(banner.emphasis, LineEmphasis::Error);
    assert!(!view.wrap_body);
    let total = state.document.as_deref().expect("document").split('\n').count();
    assert_eq!(view.subtitle, format!("lines {total}-{total} of {total}"));
    assert_eq!(view.body.len(), 1);
}

#[test]
fn tui_view_written_preview_shows_next_steps() {
    let catalog = Catalog::load_embedded().expect("catalog");
    let mut state = WizardState::new();
    apply(
        &mut state,
        &catalog,
        &[WizardAction::Confirm, WizardAction::Confirm, WizardAction::Confirm],
    );
    state.record_write(Ok(PathBuf::from(".github/workflows/issue-triage.md")));
    let view = project_wizard_view(&state, &catalog, 30);

    assert_eq!(view.title, "✓ Written to .github/workflows/issue-triage.md");
    assert_eq!(view.hint, "q quit");
    let rows = body_text(&view.body);
    assert_eq!(rows[0], "Next steps");
    assert!(rows.contains(&"  4. gh aw compile .github/workflows/issue-triage.md"));
    assert!(rows.contains(&"  7. gh aw run Issue Triage"));
    let command = view
        .body
        .iter()
        .find(|line| line.emphasis == LineEmphasis::Command)
        .expect("command line");
    assert_ne!(
        Theme::default().line_style(command.emphasis),
        Theme::default().line_style(LineEmphasis::Normal)
    );
}
