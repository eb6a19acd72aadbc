use clap::{Parser, Subcommand};

/// Extended help shown after `moneta import --help`.
pub const IMPORT_AFTER_HELP: &str = "\
How import works:
  Moneta reads one delimited statement file (comma, semicolon, tab, or
  pipe) with a header row. Recognized headers:
    amount       amount | Amount | Debit | Credit
    description  description | Description | Memo
    date         date | Date

  Rows with a missing, non-numeric, or zero amount are skipped silently;
  the import report shows how many rows were read, accepted, and rejected.
  At most 10 accepted rows form one review batch; later rows are dropped
  and the report is marked truncated.

Suggested workflow:
  1. moneta import --dry-run <path>     Review suggested categories
  2. moneta import <path> --assign 2=Dining --assign 5=Groceries
                                        Correct suggestions, then commit
  3. moneta ledger                      See the committed transactions

Category suggestions:
  A category you assign is learned: the merchant's trimmed, case-folded
  description becomes a rule that wins over every heuristic next time.
  Without a rule, positive amounts are Income, negative amounts fall back
  to keyword matching, and everything else is Uncategorized.
";

#[derive(Debug, Parser)]
#[command(
    name = "moneta",
    version,
    about = "personal finance dashboard engine",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import a bank statement into a reviewed, committed batch
    #[command(after_help = IMPORT_AFTER_HELP)]
    Import {
        /// Path to the delimited statement file
        path: String,
        /// Validate and preview suggestions without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Override a suggestion before commit, e.g. --assign 2=Dining
        #[arg(long = "assign", value_name = "POS=CATEGORY")]
        assignments: Vec<String>,
        /// Emit the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the recent-transaction ledger
    Ledger {
        /// Filter by kind: income or expense
        #[arg(long)]
        kind: Option<String>,
        /// Filter by category (case-insensitive exact match)
        #[arg(long)]
        category: Option<String>,
        /// Free-text search over descriptions
        #[arg(long)]
        search: Option<String>,
        /// Emit the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show aggregate metrics
    Summary {
        /// Emit the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect learned categorization rules
    #[command(arg_required_else_help = true)]
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// List learned merchant-key → category rules
    List {
        /// Emit the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::{Commands, parse_from};

    #[test]
    fn parses_import_with_assignments() {
        let parsed = parse_from([
            "moneta", "import", "rows.csv", "--dry-run", "--assign", "2=Dining",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            if let Commands::Import {
                path,
                dry_run,
                assignments,
                json,
            } = cli.command
            {
                assert_eq!(path, "rows.csv");
                assert!(dry_run);
                assert_eq!(assignments, vec!["2=Dining".to_string()]);
                assert!(!json);
            } else {
                unreachable!("expected import command");
            }
        }
    }

    #[test]
    fn parses_ledger_filters() {
        let parsed = parse_from([
            "moneta", "ledger", "--kind", "expense", "--search", "uber", "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            if let Commands::Ledger {
                kind,
                category,
                search,
                json,
            } = cli.command
            {
                assert_eq!(kind.as_deref(), Some("expense"));
                assert!(category.is_none());
                assert_eq!(search.as_deref(), Some("uber"));
                assert!(json);
            } else {
                unreachable!("expected ledger command");
            }
        }
    }

    #[test]
    fn rules_requires_a_subcommand() {
        let parsed = parse_from(["moneta", "rules"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn import_requires_a_path() {
        let parsed = parse_from(["moneta", "import"]);
        assert!(parsed.is_err());
    }
}
