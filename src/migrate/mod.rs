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
use std::fmt;
use std::path::PathBuf;

/// Apply approved updates to the files on disk
pub mod apply;
/// Find the source files a command operates on
pub mod discover;
/// Pull the pragma version out of file contents
pub mod extract;
/// Handle passed arguments and run the review/apply workflow
pub mod parse;
/// Turn discovered files into proposed updates
pub mod plan;
/// Show proposed updates and ask for confirmation
pub mod review;

/// Why an update was proposed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The pragma is pinned to a version other than the target
    Version,
    /// The file still carries a legacy comment banner
    Branding,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Version => write!(f, "Solidity version"),
            Scope::Branding => write!(f, "branding"),
        }
    }
}

/// A single proposed change: replace every `from` in `file` with `to`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub scope: Scope,
    pub file: PathBuf,
    /// Literal text currently present in the file
    pub from: String,
    /// Literal text that replaces it
    pub to: String,
}
