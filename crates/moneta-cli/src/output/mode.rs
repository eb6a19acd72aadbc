use crate::cli::{Commands, RulesCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Import { json, .. }
        | Commands::Ledger { json, .. }
        | Commands::Summary { json } => *json,
        Commands::Rules { command } => match command {
            RulesCommand::List { json } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_switches_each_command_to_json() {
        let cases: [&[&str]; 4] = [
            &["moneta", "import", "rows.csv", "--json"],
            &["moneta", "ledger", "--json"],
            &["moneta", "summary", "--json"],
            &["moneta", "rules", "list", "--json"],
        ];
        for args in cases {
            let parsed = parse_from(args.iter().copied());
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn text_is_the_default_mode() {
        let parsed = parse_from(["moneta", "summary"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
