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
use crate::config::LiteralMapping;
use crate::error::MigrateError;
use crate::migrate::extract::extract_version;
use crate::migrate::{Scope, Update};
use crate::utils::file_replace::contains_literal;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Propose moving every pragma that isn't already on `target` to `target`.
///
/// Versions are compared as strings. A caret pin and an exact pin of the same
/// version are both considered current. Files without a pragma are skipped.
pub fn plan_version_upgrade(
    files: &[PathBuf],
    target: &str,
) -> Result<Vec<Update>, MigrateError> {
    let mut updates = Vec::new();
    for file in files {
        let content = fs::read_to_string(file).map_err(MigrateError::io(file))?;
        let Some(current) = extract_version(&content) else {
            info!("Could not determine Solidity version in {}", file.display());
            continue;
        };
        if current != target {
            updates.push(Update {
                scope: Scope::Version,
                file: file.clone(),
                from: current.to_string(),
                to: target.to_string(),
            });
        }
    }
    Ok(updates)
}

/// Propose one update per legacy literal found in each file, in mapping order.
pub fn plan_rebrand(
    files: &[PathBuf],
    mappings: &[LiteralMapping],
) -> Result<Vec<Update>, MigrateError> {
    let mut updates = Vec::new();
    for file in files {
        let content = fs::read_to_string(file).map_err(MigrateError::io(file))?;
        for mapping in mappings {
            if contains_literal(&content, &mapping.from)? {
                updates.push(Update {
                    scope: Scope::Branding,
                    file: file.clone(),
                    from: mapping.from.clone(),
                    to: mapping.to.clone(),
                });
            }
        }
    }
    Ok(updates)
}
