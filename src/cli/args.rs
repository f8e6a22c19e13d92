//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Daily Dashboard - weather, quotes, facts and jokes in your terminal or browser
#[derive(Parser, Debug)]
#[command(name = "daily-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `show` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the dashboard to the terminal
    Show,

    /// Start the web dashboard
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["daily-dashboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["daily-dashboard", "--verbose", "serve", "--port", "8080"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.port, 8080),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_requires_action() {
        assert!(Cli::try_parse_from(["daily-dashboard", "migrate"]).is_err());
        let cli = Cli::try_parse_from(["daily-dashboard", "migrate", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            }))
        ));
    }
}
