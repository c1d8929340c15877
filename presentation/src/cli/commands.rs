//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for hwhelper
#[derive(Parser, Debug)]
#[command(name = "hwhelper")]
#[command(author, version, about = "Homework helper - relays questions to a hosted AI agent crew")]
#[command(long_about = r#"
hwhelper relays a (subject, question) pair to a hosted multi-agent platform.

The upstream exposes several equivalent kickoff/run URLs that fail
independently. Each request tries them one at a time, in configured order,
and returns the first answer that comes back.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./hwhelper.toml     Project-level config
3. ~/.config/hwhelper/config.toml   Global config

Environment: HWHELPER_* (e.g. HWHELPER_SERVER__PORT), PORT, CREWAI_TOKEN.

Example:
  hwhelper serve --port 8080
  hwhelper ask --subject Physics "Why is the sky blue?"
  hwhelper probe
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Append dispatch events as JSON lines to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub dispatch_log: Option<PathBuf>,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The subcommand, `serve` when none was given
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Address to bind, overrides [server].host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides [server].port and $PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Ask one question and print the answer
    Ask {
        /// The question to send
        question: String,

        /// Subject prefix (defaults to "General")
        #[arg(short, long)]
        subject: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check which endpoints accept a test payload
    Probe {
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration sources and the resolved endpoint list
    ShowConfig,
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            host: None,
            port: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["hwhelper"]);
        assert_eq!(cli.resolved_command(), Command::default());
    }

    #[test]
    fn test_ask_with_subject_and_global_flags() {
        let cli = Cli::parse_from([
            "hwhelper",
            "ask",
            "--subject",
            "Math",
            "What is 2+2?",
            "-vv",
            "--dispatch-log",
            "d.jsonl",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dispatch_log, Some(PathBuf::from("d.jsonl")));
        assert_eq!(
            cli.resolved_command(),
            Command::Ask {
                question: "What is 2+2?".to_string(),
                subject: Some("Math".to_string()),
                json: false,
                quiet: false,
            }
        );
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["hwhelper", "serve", "--port", "8080"]);
        assert_eq!(
            cli.resolved_command(),
            Command::Serve {
                host: None,
                port: Some(8080),
            }
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
