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
use fancy_regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Compile `text` into a regex that only matches `text` itself. Every metacharacter
/// (`.`, `*`, `+`, `(`, ...) is escaped first.
pub fn literal_regex(text: &str) -> Result<Regex, fancy_regex::Error> {
    Regex::new(&regex::escape(text))
}

/// Check if `content` contains `literal` verbatim
pub fn contains_literal(content: &str, literal: &str) -> Result<bool, fancy_regex::Error> {
    literal_regex(literal)?.is_match(content)
}

/// Replace all occurrences of the regex `re` with `replacement` and write the whole file back,
/// even when nothing matched. `replacement` is inserted as is, `$1` and friends are not expanded.
///
/// Returns the number of replaced occurrences.
pub fn replace_in_file<T: AsRef<str>>(
    path: &Path,
    re: &Regex,
    replacement: T,
) -> Result<usize, MigrateError> {
    let content = fs::read_to_string(path).map_err(MigrateError::io(path))?;
    let mut count = 0;
    for m in re.find_iter(&content) {
        m?;
        count += 1;
    }
    let new_content = re.replace_all(&content, NoExpand(replacement.as_ref()));
    fs::write(path, new_content.as_ref()).map_err(MigrateError::io(path))?;
    Ok(count)
}
