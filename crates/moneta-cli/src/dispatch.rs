use moneta_engine::commands;
use moneta_engine::{EngineResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, RulesCommand};

pub fn dispatch(cli: &Cli) -> EngineResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Import {
            path,
            dry_run,
            assignments,
            json: _,
        } => commands::import::run(path.clone(), *dry_run, assignments.clone()),
        Commands::Ledger {
            kind,
            category,
            search,
            json: _,
        } => commands::ledger::list(kind.clone(), category.clone(), search.clone()),
        Commands::Summary { .. } => commands::summary::run(),
        Commands::Rules { command } => match command {
            RulesCommand::List { .. } => commands::rules::list(),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    #[test]
    fn import_without_path_is_a_parse_error() {
        let parsed = parse_from(["moneta", "import"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_subcommand_is_a_parse_error() {
        let parsed = parse_from(["moneta", "budget"]);
        assert!(parsed.is_err());
    }
}
