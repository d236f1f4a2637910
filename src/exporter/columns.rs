/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Hive column lists and type strings

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SchemaError, SchemaResult};
use crate::grammar;
use crate::model::{StructField, StructType, UnifiedType};

/// One column of a Hive table definition.
///
/// The (name, type, comment) triple a metastore client consumes, plus the
/// field's nullability, which the flat type string cannot carry. The comment
/// is never populated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub nullable: bool,
}

impl HiveColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comment: None,
            nullable,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn as_triple(&self) -> (&str, &str, Option<&str>) {
        (&self.name, &self.data_type, self.comment.as_deref())
    }
}

/// A Hive type string such as `decimal(10,2)` or `struct<a:int>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiveType(String);

impl HiveType {
    pub fn new(type_string: impl Into<String>) -> Self {
        HiveType(type_string.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HiveType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse_type(s)?;
        Ok(HiveType(s.to_string()))
    }
}

impl From<HiveType> for String {
    fn from(hive_type: HiveType) -> Self {
        hive_type.0
    }
}

/// Rebuild a record from a Hive column list (the reverse of `export_columns`)
pub fn import_columns(columns: &[HiveColumn]) -> SchemaResult<StructType> {
    let fields = columns
        .iter()
        .map(|column| {
            let data_type: UnifiedType =
                grammar::parse_type(&column.data_type).map_err(|e| e.within(&column.name))?;
            Ok(StructField::new(column.name.clone(), data_type, column.nullable))
        })
        .collect::<SchemaResult<Vec<_>>>()?;
    StructType::new(fields)
}
