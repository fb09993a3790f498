use crate::catalog::Catalog;
use crate::config::WizardSettings;
use crate::shared::logging::WizardLog;
use crate::tui::{run_wizard_scripted, run_wizard_tui};
use crate::wizard::navigation::parse_scripted_keys;
use crate::wizard::output::FsOutputWriter;
use crate::wizard::session::WizardSession;
use crate::wizard::state::WriteResult;
use std::io::{self, IsTerminal};

pub fn load_catalog(settings: &WizardSettings) -> Result<Catalog, String> {
    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::load_embedded(),
    };
    catalog.map_err(|err| format!("failed to load pattern catalog: {err}"))
}

pub fn cmd_wizard(settings: WizardSettings) -> Result<String, String> {
    let scripted_keys = settings
        .script
        .as_deref()
        .map(parse_scripted_keys)
        .transpose()?;
    let catalog = load_catalog(&settings)?;
    if scripted_keys.is_none() && !is_interactive_terminal() {
        return Err(
            "aw-create needs an interactive terminal; pass --script <keys> to run without one"
                .to_string(),
        );
    }

    let log = WizardLog::new(settings.log_path.clone());
    log.info(
        "catalog_loaded",
        &format!(
            "source={} archetypes={}",
            catalog.source,
            catalog.len()
        ),
    );

    let mut session = WizardSession::new(&catalog, FsOutputWriter, settings.output_dir, log);
    match scripted_keys {
        Some(keys) => {
            run_wizard_scripted(&mut session, keys)?;
            Ok(session.summary())
        }
        None => {
            run_wizard_tui(&mut session)?;
            Ok(exit_message(&session.state().write_result))
        }
    }
}

/// Line printed after the terminal is restored. Empty unless a file was written.
pub fn exit_message(result: &WriteResult) -> String {
    match result {
        WriteResult::Written(path) => format!("Wrote {}", path.display()),
        WriteResult::NotWritten | WriteResult::Failed(_) => String::new(),
    }
}

fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}
