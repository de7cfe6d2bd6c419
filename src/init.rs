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
use crate::config::CONFIG_NAME;
use crate::error::MigrateError;
use microxdg::Xdg;
use std::fs;
use std::path::{Path, PathBuf};

/// A basic sample configuration that can be initialized
/// by using the `config` command
const SAMPLE_CONFIG: &str = r#"# solmigrate configuration
[solidity]
# The version `powerup` migrates pragmas to. --target-version overrides this.
#target_version = "0.8.24"
# Where to look for sources when no path is given on the command line
#source_dir = "src"
# Only files ending in this extension are scanned
#extension = "sol"

# Literal replacements used by `rebrand`. Every `from` is matched verbatim,
# regex characters in it have no special meaning.
# Leaving this out uses the built-in comment banners.
[rebrand]
#mappings = [
#    { from = "/* old banner */", to = "/* new banner */" },
#]
"#;

/// Create a sample config file
pub fn generate_config(path: Option<&PathBuf>, force: bool) -> Result<PathBuf, MigrateError> {
    let config_path = match path {
        Some(path) => path.clone(),
        None => Xdg::new()
            .ok()
            .and_then(|xdg| xdg.config_file(CONFIG_NAME).ok())
            .ok_or_else(|| {
                MigrateError::Other(
                    "No config file specified and $XDG_CONFIG_HOME or $HOME/.config could not be determined"
                        .to_string(),
                )
            })?,
    };
    write_sample(&config_path, force)?;
    Ok(config_path)
}

fn write_sample(path: &Path, force: bool) -> Result<(), MigrateError> {
    if path.exists() {
        if !force {
            return Err(MigrateError::Other(format!(
                "Config file already exists at {}. Use --force to overwrite",
                path.display()
            )));
        }
        let mut backup = path.as_os_str().to_owned();
        backup.push(".bak");
        fs::copy(path, backup).map_err(MigrateError::io(path))?;
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(MigrateError::io(parent))?;
        }
    }
    fs::write(path, SAMPLE_CONFIG).map_err(MigrateError::io(path))?;
    Ok(())
}
