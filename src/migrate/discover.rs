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
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Collect every file under `root` whose name ends in `.{extension}`.
///
/// `root` may also be a single file, in which case it has to carry the extension.
/// Files come back in the order the filesystem lists them, nothing is sorted.
/// The first error encountered while walking aborts the whole search.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>, MigrateError> {
    let suffix = format!(".{extension}");
    let metadata = fs::metadata(root).map_err(MigrateError::io(root))?;

    if !metadata.is_dir() {
        if has_suffix(root, &suffix) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Err(MigrateError::InvalidInput(format!(
            "{} is neither a directory nor a {suffix} file",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && has_suffix(entry.path(), &suffix) {
            debug!("Found {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
