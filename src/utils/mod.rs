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
/// Literal search and replace inside files
pub mod file_replace;
/// Blocking yes/no confirmation
pub mod prompt;
/// Tables for printing to the terminal
pub mod tables;

/// Longest value shown in a table cell before it gets cut off
pub const MAX_CELL_WIDTH: usize = 30;

/// Shorten `text` to `MAX_CELL_WIDTH` characters, marking the cut with an ellipsis.
/// Counts characters rather than bytes, so multi-byte banners are cut cleanly.
pub fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_CELL_WIDTH) {
        Some((idx, _)) => format!("{}\u{2026}", &text[..idx]),
        None => text.to_string(),
    }
}
