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
use crate::cli::{AppArgs, Command, cli};
use crate::config::Config;
use crate::error::MigrateError;
use crate::init::generate_config;
use crate::migrate::Update;
use crate::migrate::apply::apply;
use crate::migrate::discover::discover;
use crate::migrate::plan::{plan_rebrand, plan_version_upgrade};
use crate::migrate::review::{present_and_confirm, updates_table};
use clap_complete::{
    generate_to,
    shells::{Bash, Fish, Zsh},
};
use clap_mangen::Man;
use console::user_attended;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// How a powerup or rebrand run ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Discovery found no source files
    NoFiles,
    /// Every file is already up to date
    NothingToDo,
    /// The operator answered anything but `y`
    Declined,
    /// The updates were written, `files` counts each file once
    Applied { updates: usize, files: usize },
}

/// Load the config the command needs. `config` and `generate` never read one, so a
/// `--file` pointing at a file that doesn't exist yet is fine for them.
pub fn load_config(app: &AppArgs) -> Result<Config, MigrateError> {
    match (&app.command, &app.file) {
        (Command::Config { .. } | Command::Generate { .. }, _) => Ok(Config::default()),
        // An explicitly requested config has to parse, the fallbacks are best effort
        (_, Some(config_path)) => Config::from_file(config_path),
        (_, None) => Ok(Config::load()),
    }
}

/// Parse the argument that gets passed, and run their associated methods.
///
/// `input` is where the confirmation answer is read from and `output` receives
/// everything meant for the operator.
pub fn match_arguments<R: BufRead, W: Write>(
    app: &AppArgs,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<(), MigrateError> {
    match &app.command {
        Command::Powerup {
            path,
            target_version,
        } => {
            let target = config.target_version(target_version.as_deref())?;
            let root = path.clone().unwrap_or_else(|| config.source_dir());
            run_powerup(&root, &target, config, app.yes, input, output)?;
        }
        Command::Rebrand { path } => {
            let root = path.clone().unwrap_or_else(|| config.source_dir());
            run_rebrand(&root, config, app.yes, input, output)?;
        }
        Command::Config { force } => {
            let path = generate_config(app.file.as_ref(), *force)?;
            writeln!(output, "Config file created at {}", path.display())?;
        }
        Command::Generate { kind, out } => {
            let out_dir = match out {
                Some(out) => out.clone(),
                None => std::env::current_dir()?,
            };
            let mut cmd = cli();
            match kind.as_str() {
                "bash" => {
                    generate_to(Bash, &mut cmd, "solmigrate", &out_dir)?;
                    writeln!(output, "Generated bash completions")?;
                }
                "zsh" => {
                    generate_to(Zsh, &mut cmd, "solmigrate", &out_dir)?;
                    writeln!(output, "Generated zsh completions")?;
                }
                "fish" => {
                    generate_to(Fish, &mut cmd, "solmigrate", &out_dir)?;
                    writeln!(output, "Generated fish completions")?;
                }
                "man" => {
                    generate_manpages(cmd, &out_dir, None)?;
                    writeln!(output, "Manpages generated")?;
                }
                other => {
                    return Err(MigrateError::InvalidInput(format!(
                        "Unknown generate kind: {other}"
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Upgrade the pragma of every source file under `root` to `target`
pub fn run_powerup<R: BufRead, W: Write>(
    root: &Path,
    target: &str,
    config: &Config,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, MigrateError> {
    let files = discover(root, &config.extension())?;
    if files.is_empty() {
        writeln!(output, "No Solidity files found in {}.", root.display())?;
        return Ok(Outcome::NoFiles);
    }
    info!("Checking {} file(s) against Solidity {target}", files.len());

    let updates = plan_version_upgrade(&files, target)?;
    let prompt = format!("Do you want to upgrade these file(s) to Solidity {target}?");
    let outcome = review_and_apply(&updates, &prompt, assume_yes, input, output)?;
    if outcome == Outcome::NothingToDo {
        writeln!(
            output,
            "All files are already on the target Solidity version ({target})!"
        )?;
    }
    Ok(outcome)
}

/// Replace the legacy banners in every source file under `root`
pub fn run_rebrand<R: BufRead, W: Write>(
    root: &Path,
    config: &Config,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, MigrateError> {
    let files = discover(root, &config.extension())?;
    if files.is_empty() {
        writeln!(output, "No Solidity files found in {}.", root.display())?;
        return Ok(Outcome::NoFiles);
    }
    info!("Checking {} file(s) for legacy banners", files.len());

    let mappings = config.banner_mappings()?;
    let updates = plan_rebrand(&files, &mappings)?;
    let outcome = review_and_apply(
        &updates,
        "Confirm applying the proposed branding updates?",
        assume_yes,
        input,
        output,
    )?;
    if outcome == Outcome::NothingToDo {
        writeln!(output, "All files already adhere to the branding guidelines.")?;
    }
    Ok(outcome)
}

/// The single gate between planning and writing: preview, one confirmation, then apply all
fn review_and_apply<R: BufRead, W: Write>(
    updates: &[Update],
    prompt: &str,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome, MigrateError> {
    if updates.is_empty() {
        return Ok(Outcome::NothingToDo);
    }
    let confirmed = if assume_yes {
        writeln!(output, "{} update(s) will be applied:", updates.len())?;
        writeln!(output, "{}", updates_table(updates).build())?;
        true
    } else {
        if !user_attended() {
            warn!("Not running in a terminal, reading the answer from stdin. Pass --yes to skip the prompt");
        }
        present_and_confirm(updates, prompt, input, output)?
    };
    if !confirmed {
        writeln!(output, "No changes made.")?;
        return Ok(Outcome::Declined);
    }

    let outcome = Outcome::Applied {
        updates: updates.len(),
        files: apply(updates)?,
    };
    if let Outcome::Applied { updates, files } = &outcome {
        writeln!(output, "{updates} update(s) applied to {files} file(s).")?;
        writeln!(output, "Please verify before committing to git.")?;
    }
    Ok(outcome)
}

/// Helper to write manpages
fn write_man(cmd: &clap::Command, out_dir: &Path, name: &str) -> Result<(), MigrateError> {
    let man = Man::new(cmd.clone());
    let mut file = File::create(out_dir.join(name))?;
    man.render(&mut file)?;
    Ok(())
}

/// Generate manpages for all subcommands. Otherwise we only get a manpage for the root command.
fn generate_manpages(
    cmd: clap::Command,
    out_dir: &Path,
    parent: Option<String>,
) -> Result<(), MigrateError> {
    let name = match parent {
        Some(parent) => format!("solmigrate-{parent}.1"),
        None => "solmigrate.1".to_string(),
    };
    write_man(&cmd, out_dir, &name)?;

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }
        let sub_name = subcommand.get_name().to_string().replace('_', "-");
        generate_manpages(subcommand.clone(), out_dir, Some(sub_name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const LEGACY_TOP: &str = "/*´:°•.°+.*•´.*:˚.°*.˚•´.°:°•.°•.*•´.*:˚.°*.˚•´.°:°•.°+.*•´.*:*/";
    const LEGACY_BOTTOM: &str = "/*.•°:°.´+˚.*°.˚:*.´•*.+°.•°:´*.´•*.•°.•°:°.´:•˚°.*°.˚:*.´+°.•*/";
    const NEW_TOP: &str = "/*«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-*/";
    const NEW_BOTTOM: &str = "/*-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»*/";

    /// Run the CLI with `answer` piped in as the confirmation, returning what was printed
    fn run(args: &[&str], answer: &str) -> Result<String, MigrateError> {
        let mut argv = vec!["solmigrate"];
        argv.extend_from_slice(args);
        let app = AppArgs::try_parse_from(argv).unwrap();
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        match_arguments(&app, &Config::default(), &mut input, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn tree() -> (TempDir, PathBuf, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("tokens/erc20");
        fs::create_dir_all(&nested).unwrap();
        let a = tmp.path().join("A.sol");
        let b = nested.join("B.sol");
        let c = tmp.path().join("I.sol");
        fs::write(&a, "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.0;\n\ncontract A {}\n")
            .unwrap();
        fs::write(&b, format!("pragma solidity 0.8.4;\n\n{LEGACY_TOP}\n/*  EVENTS  */\n{LEGACY_BOTTOM}\n"))
            .unwrap();
        fs::write(&c, "interface I {}\n").unwrap();
        fs::write(tmp.path().join("notes.md"), "pragma solidity 0.1.0;\n").unwrap();
        (tmp, a, b, c)
    }

    #[test]
    fn test_powerup_end_to_end() {
        let (tmp, a, b, c) = tree();
        let root = tmp.path().to_str().unwrap();

        let printed = run(&["powerup", root, "--target-version", "0.8.24"], "y\n").unwrap();

        assert!(printed.contains("2 update(s) can be automatically applied:"));
        assert!(printed.contains("2 update(s) applied to 2 file(s)."));
        // The caret stays, only the version number is replaced
        assert_eq!(
            fs::read_to_string(&a).unwrap(),
            "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.24;\n\ncontract A {}\n"
        );
        assert!(fs::read_to_string(&b).unwrap().starts_with("pragma solidity 0.8.24;\n"));
        assert_eq!(fs::read_to_string(&c).unwrap(), "interface I {}\n");
        assert_eq!(
            fs::read_to_string(tmp.path().join("notes.md")).unwrap(),
            "pragma solidity 0.1.0;\n"
        );
    }

    #[test]
    fn test_powerup_is_idempotent() {
        let (tmp, ..) = tree();
        let root = tmp.path().to_str().unwrap();

        run(&["powerup", root, "-t", "0.8.24"], "y\n").unwrap();
        let printed = run(&["powerup", root, "-t", "0.8.24"], "y\n").unwrap();

        assert_eq!(
            printed,
            "All files are already on the target Solidity version (0.8.24)!\n"
        );
    }

    #[test]
    fn test_declining_changes_nothing() {
        let (tmp, a, b, c) = tree();
        let before: Vec<Vec<u8>> = [&a, &b, &c].iter().map(|p| fs::read(p).unwrap()).collect();

        for answer in ["n\n", "N\n", "\n", "yes\n", ""] {
            let printed = run(&["powerup", tmp.path().to_str().unwrap()], answer).unwrap();
            assert!(printed.ends_with("(y/n): No changes made.\n"));
            let printed = run(&["rebrand", tmp.path().to_str().unwrap()], answer).unwrap();
            assert!(printed.ends_with("(y/n): No changes made.\n"));
        }

        let after: Vec<Vec<u8>> = [&a, &b, &c].iter().map(|p| fs::read(p).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rebrand_end_to_end() {
        let (tmp, a, b, _) = tree();
        fs::write(&a, format!("{LEGACY_TOP}\n{LEGACY_TOP}\n{LEGACY_TOP}\n")).unwrap();

        let printed = run(&["rebrand", tmp.path().to_str().unwrap()], "Y\n").unwrap();

        assert!(printed.contains("3 update(s) applied to 2 file(s)."));
        assert_eq!(
            fs::read_to_string(&a).unwrap(),
            format!("{NEW_TOP}\n{NEW_TOP}\n{NEW_TOP}\n")
        );
        let b_content = fs::read_to_string(&b).unwrap();
        assert!(b_content.contains(NEW_TOP));
        assert!(b_content.contains(NEW_BOTTOM));
        assert!(!b_content.contains(LEGACY_TOP));
        assert!(!b_content.contains(LEGACY_BOTTOM));

        let printed = run(&["rebrand", tmp.path().to_str().unwrap()], "y\n").unwrap();
        assert_eq!(printed, "All files already adhere to the branding guidelines.\n");
    }

    #[test]
    fn test_yes_flag_skips_prompt() {
        let (tmp, a, ..) = tree();
        // No answer available at all
        let printed = run(&["powerup", tmp.path().to_str().unwrap(), "--yes"], "").unwrap();

        assert!(!printed.contains("(y/n)"));
        assert!(fs::read_to_string(&a).unwrap().contains("pragma solidity ^0.8.24;"));
    }

    #[test]
    fn test_single_file_paths() {
        let (tmp, a, b, _) = tree();

        run(&["powerup", a.to_str().unwrap()], "y\n").unwrap();

        assert!(fs::read_to_string(&a).unwrap().contains("^0.8.24;"));
        assert!(fs::read_to_string(&b).unwrap().contains("0.8.4;"));

        let notes = tmp.path().join("notes.md");
        assert!(matches!(
            run(&["powerup", notes.to_str().unwrap()], "y\n"),
            Err(MigrateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("contracts");
        assert!(matches!(
            run(&["rebrand", missing.to_str().unwrap()], "y\n"),
            Err(MigrateError::Io { ref path, .. }) if path == &missing
        ));
    }

    #[test]
    fn test_empty_tree() {
        let tmp = TempDir::new().unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let outcome = run_powerup(
            tmp.path(),
            "0.8.24",
            &Config::default(),
            false,
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::NoFiles);
    }

    #[test]
    fn test_invalid_target_version() {
        let (tmp, a, ..) = tree();
        let before = fs::read(&a).unwrap();
        assert!(matches!(
            run(&["powerup", tmp.path().to_str().unwrap(), "-t", "latest"], "y\n"),
            Err(MigrateError::InvalidInput(_))
        ));
        assert_eq!(fs::read(&a).unwrap(), before);
    }

    #[test]
    fn test_outcome_counts() {
        let (tmp, ..) = tree();
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();

        let outcome = run_rebrand(
            tmp.path(),
            &Config::default(),
            false,
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Applied { updates: 2, files: 1 });
    }

    #[test]
    fn test_config_command_writes_to_new_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("conf/new.toml");
        let target_str = target.to_str().unwrap();
        let app = AppArgs::try_parse_from(["solmigrate", "config", "--file", target_str]).unwrap();

        let config = load_config(&app).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        match_arguments(&app, &config, &mut input, &mut output).unwrap();

        assert!(Config::from_file(&target).is_ok());
        assert!(String::from_utf8(output).unwrap().contains(target_str));
    }

    #[test]
    fn test_missing_config_file_fails_for_migrations() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.toml");
        let app = AppArgs::try_parse_from([
            "solmigrate",
            "powerup",
            "--file",
            missing.to_str().unwrap(),
        ])
        .unwrap();

        let err = load_config(&app).unwrap_err();
        assert!(matches!(err, MigrateError::Io { ref path, .. } if path == &missing));
    }

    #[test]
    fn test_empty_mapping_never_touches_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("A.sol");
        fs::write(&file, "abc").unwrap();
        let config = Config::from_toml(
            r#"
            [[rebrand.mappings]]
            from = ""
            to = "X"
            "#,
        )
        .unwrap();
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();

        let result = run_rebrand(tmp.path(), &config, false, &mut input, &mut output);

        assert!(matches!(result, Err(MigrateError::InvalidInput(_))));
        assert_eq!(fs::read_to_string(&file).unwrap(), "abc");
    }

    #[test]
    fn test_generate_completions() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().to_str().unwrap();

        run(&["generate", "--kind", "bash", "--out", out], "").unwrap();
        run(&["generate", "--kind", "man", "--out", out], "").unwrap();

        assert!(tmp.path().join("solmigrate.bash").exists());
        assert!(tmp.path().join("solmigrate.1").exists());
        assert!(tmp.path().join("solmigrate-powerup.1").exists());
        assert!(!tmp.path().join("solmigrate-generate.1").exists());
    }
}
