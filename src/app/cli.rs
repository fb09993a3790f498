use crate::config::{WizardSettings, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(WizardSettings),
    Help,
    Version,
}

pub fn parse_cli_args(args: &[String]) -> Result<CliCommand, String> {
    let mut settings = WizardSettings::default();
    let mut seen: Vec<&str> = Vec::new();
    let mut index = 0usize;
    while index < args.len() {
        let flag = args[index].as_str();
        match flag {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "--output-dir" | "--catalog" | "--log-file" | "--script" => {
                if seen.contains(&flag) {
                    return Err(format!("flag `{flag}` given more than once"));
                }
                seen.push(flag);
                index += 1;
                let value = args
                    .get(index)
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| format!("{flag} requires a value"))?;
                match flag {
                    "--output-dir" => settings.output_dir = PathBuf::from(value),
                    "--catalog" => settings.catalog_path = Some(PathBuf::from(value)),
                    "--log-file" => settings.log_path = Some(PathBuf::from(value)),
                    _ => settings.script = Some(value.clone()),
                }
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown flag `{other}`; run with --help for usage"));
            }
            other => return Err(format!("unexpected argument `{other}`")),
        }
        index += 1;
    }
    settings.validate()?;
    Ok(CliCommand::Run(settings))
}

pub fn version_text() -> String {
    format!("aw-create {}", env!("CARGO_PKG_VERSION"))
}

pub fn help_text() -> String {
    [
        "Usage: aw-create [options]".to_string(),
        String::new(),
        "Walks through four steps (type, triggers, context, preview) and writes an".to_string(),
        "agentic workflow definition for GitHub Actions.".to_string(),
        String::new(),
        "Options:".to_string(),
        format!(
            "  --output-dir <dir>    Directory for the generated file (default {DEFAULT_OUTPUT_DIR})"
        ),
        "  --catalog <path>      Load archetypes from a YAML file instead of the built-in set"
            .to_string(),
        "  --log-file <path>     Append JSON-line wizard events to this file".to_string(),
        "  --script <keys>       Run without a terminal, feeding comma-separated keys".to_string(),
        "                        (up,down,enter,esc,ctrl-c,space,tab,backspace or one char)"
            .to_string(),
        "  -h, --help            Print this help".to_string(),
        "  -V, --version         Print the version".to_string(),
    ]
    .join("\n")
}
