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
use tabled::{
    builder::Builder,
    settings::style::Style,
};

/// A small wrapper around tabled's tables so that we can build tables more easily.
///
/// In plain mode the table is printed as comma separated rows, which keeps the
/// output usable when piped.
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    plain: bool,
    table: tabled::Table,
}

impl Table {
    pub fn builder() -> Self {
        Table {
            header: Vec::new(),
            rows: Vec::new(),
            plain: false,
            table: tabled::Table::default(),
        }
    }
    /// Add a header to the table
    pub fn header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = header.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rows for the table
    pub fn rows<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        self
    }
    /// Print comma separated rows instead of a boxed table
    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }
    /// Build the table
    pub fn build(mut self) -> Self {
        let mut builder = Builder::default();
        if !self.header.is_empty() {
            builder.push_record(self.header.clone());
        }
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        self.table = table;

        self
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }
        if !self.plain {
            return write!(f, "{}", self.table);
        }
        if !self.header.is_empty() {
            writeln!(f, "{}", self.header.join(","))?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}
