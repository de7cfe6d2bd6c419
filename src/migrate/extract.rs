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
use regex::Regex;
use std::sync::OnceLock;

// Compiled on first use and shared from then on
static PRAGMA_REGEX: OnceLock<Regex> = OnceLock::new();

fn pragma_regex() -> &'static Regex {
    PRAGMA_REGEX.get_or_init(|| {
        Regex::new(r"pragma solidity (?<caret>\^)?(?<version>\d+\.\d+\.\d+);")
            .expect("pragma regex is valid")
    })
}

/// Return the `MAJOR.MINOR.PATCH` of the first `pragma solidity` line, without any caret.
/// Files without a pragma give `None`.
pub fn extract_version(content: &str) -> Option<&str> {
    pragma_regex()
        .captures(content)
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str())
}
