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
use crate::error::MigrateError;
use crate::migrate::Update;
use crate::utils::file_replace::{literal_regex, replace_in_file};
use indexmap::IndexSet;
use std::path::Path;
use tracing::{debug, warn};

/// Apply every update in list order and return how many distinct files were written.
///
/// Each update re-reads its file, so several updates against the same file build on
/// each other. Nothing is rolled back if a later update fails.
pub fn apply(updates: &[Update]) -> Result<usize, MigrateError> {
    let mut written: IndexSet<&Path> = IndexSet::new();
    for update in updates {
        let re = literal_regex(&update.from)?;
        let count = replace_in_file(&update.file, &re, &update.to)?;
        if count == 0 {
            warn!(
                "{:?} no longer found in {}, file changed since planning",
                update.from,
                update.file.display()
            );
        } else {
            debug!(
                "Replaced {count} occurrence(s) of {:?} in {}",
                update.from,
                update.file.display()
            );
        }
        written.insert(update.file.as_path());
    }
    Ok(written.len())
}
