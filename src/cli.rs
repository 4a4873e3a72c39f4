use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::BoardOptions;
use crate::types::{GroupingMode, OrderingMode};

#[derive(Parser)]
#[command(name = "ticketboard")]
#[command(about = "Group and order tickets into kanban board columns")]
#[command(version)]
pub struct Cli {
    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch tickets and print them as board columns
    #[command(visible_alias = "b")]
    Board {
        /// Board source: http(s) URL or path to a JSON file (default: configured source)
        #[arg(short, long)]
        source: Option<String>,

        /// Group columns by: status, priority, user (case-insensitive)
        #[arg(short, long = "group-by", value_parser = parse_grouping)]
        group_by: Option<GroupingMode>,

        /// Order tickets within a column by: priority, title (case-insensitive)
        #[arg(short, long = "order-by", value_parser = parse_ordering)]
        order_by: Option<OrderingMode>,

        /// Remember --group-by/--order-by as the new defaults
        #[arg(long)]
        save: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value (keys: grouping, ordering, source)
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{cmd_board, cmd_config_get, cmd_config_set, cmd_config_show};

        match self {
            Commands::Board {
                source,
                group_by,
                order_by,
                save,
                json,
            } => {
                cmd_board(BoardOptions {
                    source,
                    grouping: group_by,
                    ordering: order_by,
                    save,
                    json,
                })
                .await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_grouping(s: &str) -> Result<GroupingMode, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "grouping",
        GroupingMode::ALL_STRINGS,
    )
}

fn parse_ordering(s: &str) -> Result<OrderingMode, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "ordering",
        OrderingMode::ALL_STRINGS,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ticketboard", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grouping() {
        assert_eq!(parse_grouping("user").unwrap(), GroupingMode::User);
        assert_eq!(parse_grouping("Priority").unwrap(), GroupingMode::Priority);
        let err = parse_grouping("team").unwrap_err();
        assert_eq!(
            err,
            "Invalid grouping. Must be one of: status, priority, user"
        );
    }

    #[test]
    fn test_parse_ordering() {
        assert_eq!(parse_ordering("title").unwrap(), OrderingMode::Title);
        assert!(parse_ordering("created").is_err());
    }

    #[test]
    fn test_cli_parses_board_flags() {
        let cli = Cli::try_parse_from([
            "ticketboard",
            "board",
            "--source",
            "board.json",
            "--group-by",
            "user",
            "-o",
            "title",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Board {
                source,
                group_by,
                order_by,
                save,
                json,
            } => {
                assert_eq!(source.as_deref(), Some("board.json"));
                assert_eq!(group_by, Some(GroupingMode::User));
                assert_eq!(order_by, Some(OrderingMode::Title));
                assert!(!save);
                assert!(json);
            }
            _ => panic!("expected board command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_grouping() {
        assert!(Cli::try_parse_from(["ticketboard", "board", "--group-by", "team"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
