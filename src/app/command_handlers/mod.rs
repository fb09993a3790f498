use crate::app::cli::{help_text, parse_cli_args, version_text, CliCommand};

pub mod wizard;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    match parse_cli_args(&args)? {
        CliCommand::Help => Ok(help_text()),
        CliCommand::Version => Ok(version_text()),
        CliCommand::Run(settings) => wizard::cmd_wizard(settings),
    }
}
