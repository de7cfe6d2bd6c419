/*
Licensed to the Apache Software Foundation (ASF) under one
or more contributor license agreements.  See the NOTICE file
distributed with this work for additional information
regarding copyright ownership.  The ASF licenses this file
to you under the Apache License, Version 2.0 (the
"License"); you may not use this file except in compliance
with the License.  You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing,
software distributed under the License is distributed on an
"AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
KIND, either express or implied.  See the License for the
specific language governing permissions and limitations
under the License.
*/
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// `solmigrate` upgrades Solidity pragmas and replaces legacy comment banners across a source tree.
/// Every run shows the proposed changes and asks for confirmation before touching any file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Path to config file. For the `config` command, where the sample gets written
    #[arg(short, long, global = true, env = "SOLMIGRATE_CONFIG")]
    pub file: Option<PathBuf>,

    /// The command that will get run
    #[command(subcommand)]
    pub command: Command,

    /// Only print errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    /// Apply the proposed updates without asking. Useful when not running in interactive mode
    #[arg(short, long, default_value_t = false, global = true)]
    pub yes: bool,
}

/// The top-level command enum for the CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upgrade the `pragma solidity` version of every file to the target version
    #[command(after_help = "\
EXAMPLES:
    # Upgrade everything under the configured source directory
    solmigrate powerup
    # Upgrade a single file to a specific version
    solmigrate powerup src/Token.sol --target-version 0.8.26

NOTES:
    - Only the MAJOR.MINOR.PATCH part is replaced, a leading caret is kept.
    - Files without a pragma are reported and skipped.
")]
    Powerup {
        /// A Solidity file or a directory to scan recursively. Defaults to the configured source directory
        path: Option<PathBuf>,
        /// The version to upgrade to. Defaults to the configured target version
        #[arg(short, long)]
        target_version: Option<String>,
    },
    /// Replace legacy comment banners with the current ones
    Rebrand {
        /// A Solidity file or a directory to scan recursively. Defaults to the configured source directory
        path: Option<PathBuf>,
    },
    /// Generate a sample config at --file, or in the XDG config directory if it isn't given
    Config {
        /// Overwrite existing config file if it exists
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Generate shell completions or manpages. Hidden, packaging is the only consumer
    #[command(hide = true)]
    Generate {
        /// bash, zsh or fish completions, or man pages
        #[arg(long, value_parser = ["bash", "zsh", "fish", "man"])]
        kind: String,
        /// Output directory, the current directory if not given
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Parse the command line arguments. Unknown or missing commands print
/// the usage and exit with a non-zero status.
pub fn parse_args() -> AppArgs {
    match AppArgs::try_parse() {
        Ok(app) => app,
        Err(err) => {
            let _ = err.print();
            // --help and --version also end up here
            let code = if err.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    }
}

pub fn cli() -> clap::Command {
    AppArgs::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_powerup_args() {
        let app = AppArgs::try_parse_from([
            "solmigrate",
            "powerup",
            "contracts",
            "--target-version",
            "0.8.26",
            "-y",
        ])
        .unwrap();
        assert!(app.yes);
        match app.command {
            Command::Powerup {
                path,
                target_version,
            } => {
                assert_eq!(path, Some(PathBuf::from("contracts")));
                assert_eq!(target_version.as_deref(), Some("0.8.26"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rebrand_defaults() {
        let app = AppArgs::try_parse_from(["solmigrate", "rebrand"]).unwrap();
        assert!(matches!(app.command, Command::Rebrand { path: None }));
        assert!(!app.yes);
    }

    #[test]
    fn test_config_writes_to_file_flag() {
        let app =
            AppArgs::try_parse_from(["solmigrate", "config", "--file", "new.toml", "--force"])
                .unwrap();
        assert_eq!(app.file, Some(PathBuf::from("new.toml")));
        assert!(matches!(app.command, Command::Config { force: true }));
        assert!(AppArgs::try_parse_from(["solmigrate", "config", "--out", "new.toml"]).is_err());
    }

    #[test]
    fn test_invalid_commands() {
        assert!(AppArgs::try_parse_from(["solmigrate"]).is_err());
        assert!(AppArgs::try_parse_from(["solmigrate", "upgrade"]).is_err());
        let err = AppArgs::try_parse_from(["solmigrate", "--powerup"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
