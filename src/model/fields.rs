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

//! Record fields

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::UnifiedType;
use crate::errors::{SchemaError, SchemaResult};

/// A named member of a record.
///
/// Nullability lives here, on the containment edge, so the same type can be
/// required in one record and optional in another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub data_type: UnifiedType,
    pub nullable: bool,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: UnifiedType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Create a non-nullable field
    pub fn required(name: impl Into<String>, data_type: UnifiedType) -> Self {
        Self::new(name, data_type, false)
    }

    /// Create a nullable field
    pub fn optional(name: impl Into<String>, data_type: UnifiedType) -> Self {
        Self::new(name, data_type, true)
    }
}

/// Ordered record fields with unique, non-empty names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStruct")]
pub struct StructType {
    fields: Vec<StructField>,
}

#[derive(Deserialize)]
struct RawStruct {
    fields: Vec<StructField>,
}

impl TryFrom<RawStruct> for StructType {
    type Error = SchemaError;

    fn try_from(raw: RawStruct) -> Result<Self, Self::Error> {
        StructType::new(raw.fields)
    }
}

impl StructType {
    pub fn new(fields: Vec<StructField>) -> SchemaResult<Self> {
        if fields.is_empty() {
            return Err(SchemaError::invalid_parameters(
                "struct",
                "a record needs at least one field",
            ));
        }
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if field.name.is_empty() {
                return Err(SchemaError::invalid_parameters(
                    "struct",
                    "field names must not be empty",
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::invalid_parameters(
                    "struct",
                    format!("duplicate field name '{}'", field.name),
                ));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<StructField> {
        self.fields
    }
}

impl From<StructType> for UnifiedType {
    fn from(record: StructType) -> Self {
        UnifiedType::Struct(record)
    }
}
