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
use crate::utils::prompt::confirm;
use crate::utils::tables::Table;
use crate::utils::truncate;
use console::Term;
use std::io::{BufRead, Write};

const HEADER: [&str; 5] = ["#", "Update type", "File", "Current value", "Proposed change"];

/// Build the preview table, numbered from 1 in list order. Falls back to plain rows
/// when stdout isn't a terminal.
pub fn updates_table(updates: &[Update]) -> Table {
    let rows = updates.iter().enumerate().map(|(i, update)| {
        vec![
            (i + 1).to_string(),
            update.scope.to_string(),
            update.file.display().to_string(),
            truncate(&update.from),
            truncate(&update.to),
        ]
    });
    Table::builder()
        .header(HEADER)
        .rows(rows)
        .plain(!Term::stdout().is_term())
}

/// Print the proposed updates and ask once whether to apply all of them.
///
/// Returns `false` straight away, without prompting, when there is nothing to apply.
pub fn present_and_confirm<R: BufRead, W: Write>(
    updates: &[Update],
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, MigrateError> {
    if updates.is_empty() {
        return Ok(false);
    }
    writeln!(
        output,
        "{} update(s) can be automatically applied:",
        updates.len()
    )?;
    writeln!(output, "{}", updates_table(updates).build())?;
    Ok(confirm(prompt, input, output)?)
}
